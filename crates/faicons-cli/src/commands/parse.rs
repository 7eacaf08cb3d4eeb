use super::{colorize_style, json_pretty, metadata_error, print_summary, EXIT_SUCCESS};
use faicons_schema::{parse_icons_by_style_file, StyleGroups};
use std::path::Path;
use tokio_util::sync::CancellationToken;

pub fn run(file: &Path, style: Option<&str>, json: bool) -> Result<u8, String> {
    let groups = load(file)?;
    match style {
        Some(style) => print_style(&groups, style, json)?,
        None if json => println!("{}", json_pretty(&groups)?),
        None => print_summary(&groups, false)?,
    }
    Ok(EXIT_SUCCESS)
}

/// Load a catalog on a single-threaded runtime; Ctrl-C cancels the load.
pub fn load(file: &Path) -> Result<StyleGroups, String> {
    let cancel = CancellationToken::new();
    let on_interrupt = cancel.clone();
    let _ = ctrlc::set_handler(move || {
        on_interrupt.cancel();
        eprintln!("\ncancellation requested, stopping after the current read...");
    });

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to start runtime: {e}"))?;
    runtime
        .block_on(parse_icons_by_style_file(file, &cancel))
        .map_err(|e| metadata_error(&e))
}

fn print_style(groups: &StyleGroups, style: &str, json: bool) -> Result<(), String> {
    let icons = groups.get(style).unwrap_or_default();
    if json {
        println!("{}", json_pretty(&icons)?);
        return Ok(());
    }
    if icons.is_empty() {
        println!("no icons in style '{style}'");
        return Ok(());
    }
    println!("{:<32} {:<8} LABEL", "NAME", "UNICODE");
    for icon in icons {
        println!(
            "{:<32} {:<8} {}",
            icon.name,
            icon.unicode.as_deref().unwrap_or("-"),
            icon.label.as_deref().unwrap_or("")
        );
    }
    println!("\n{} icons in {}", icons.len(), colorize_style(style));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reads_catalog() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.yml");
        std::fs::write(&path, "star:\n  styles: [solid, regular]\n").unwrap();
        let groups = load(&path).unwrap();
        assert_eq!(groups.len(), 2);
    }

    #[test]
    fn load_reports_blank_file_as_metadata_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("icons.yml");
        std::fs::write(&path, "\n\n").unwrap();
        let err = load(&path).unwrap_err();
        assert!(err.starts_with("metadata error:"), "{err}");
    }
}
