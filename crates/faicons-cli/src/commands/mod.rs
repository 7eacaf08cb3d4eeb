pub mod classes;
pub mod completions;
pub mod doctor;
pub mod fetch;
pub mod man_pages;
pub mod normalize;
pub mod parse;
pub mod resolve;
pub mod styles;

use faicons_schema::{MetadataError, ResolveError, StyleGroups};
use faicons_source::FetchError;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_INPUT_ERROR: u8 = 2;
pub const EXIT_FETCH_ERROR: u8 = 3;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

pub fn input_error(e: &ResolveError) -> String {
    format!("input error: {e}")
}

pub fn metadata_error(e: &MetadataError) -> String {
    match e {
        MetadataError::Cancelled => e.to_string(),
        _ => format!("metadata error: {e}"),
    }
}

pub fn fetch_error(e: &FetchError) -> String {
    format!("fetch error: {e}")
}

pub fn spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .expect("valid template")
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
    );
    pb.set_message(msg.to_owned());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn spin_ok(pb: &ProgressBar, msg: &str) {
    pb.set_style(ProgressStyle::with_template("{msg}").expect("valid template"));
    pb.finish_with_message(format!("✓ {msg}"));
}

pub fn spin_fail(pb: &ProgressBar, msg: &str) {
    pb.set_style(ProgressStyle::with_template("{msg}").expect("valid template"));
    pb.finish_with_message(format!("✗ {msg}"));
}

pub fn colorize_style(style: &str) -> String {
    use console::Style;
    match style.to_ascii_lowercase().as_str() {
        "solid" => Style::new().bold().apply_to(style).to_string(),
        "regular" => Style::new().cyan().apply_to(style).to_string(),
        "light" | "thin" => Style::new().dim().apply_to(style).to_string(),
        "duotone" => Style::new().magenta().apply_to(style).to_string(),
        "brands" => Style::new().blue().apply_to(style).to_string(),
        _ => style.to_owned(),
    }
}

/// One `STYLE  ICONS` row. Padding is added outside the escape codes.
fn summary_row(style: &str, count: usize) -> String {
    let pad = 12usize.saturating_sub(style.chars().count());
    format!("{}{} {count}", colorize_style(style), " ".repeat(pad))
}

/// Print a `STYLE  ICONS` table, or a JSON object of counts.
pub fn print_summary(groups: &StyleGroups, json: bool) -> Result<(), String> {
    if json {
        let counts: serde_json::Map<String, serde_json::Value> = groups
            .iter()
            .map(|g| (g.style.to_string(), serde_json::Value::from(g.icons.len())))
            .collect();
        let payload = serde_json::json!({
            "styles": counts,
            "total": groups.total_icons(),
        });
        println!("{}", json_pretty(&payload)?);
    } else if groups.is_empty() {
        println!("no styled icons found");
    } else {
        println!("{:<12} ICONS", "STYLE");
        for group in groups {
            println!("{}", summary_row(&group.style, group.icons.len()));
        }
        println!("{:<12} {}", "total", groups.total_icons());
    }
    Ok(())
}
