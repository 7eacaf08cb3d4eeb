use super::{json_pretty, EXIT_FAILURE, EXIT_SUCCESS};
use faicons_source::config::default_config_path;
use faicons_source::{check_fetch_prereqs, SourceConfig, SourceKind, SystemRunner};

pub fn run(json_output: bool) -> Result<u8, String> {
    let mut checks: Vec<Check> = Vec::new();
    let mut all_pass = true;

    check_tools(&mut checks, &mut all_pass);
    check_config(&mut checks, &mut all_pass);

    print_results(&checks, all_pass, json_output)
}

fn check_tools(checks: &mut Vec<Check>, all_pass: &mut bool) {
    let kinds = [SourceKind::Git, SourceKind::Npm];
    let missing = check_fetch_prereqs(&SystemRunner, &kinds);
    for kind in kinds {
        let name = format!("{kind}_available");
        match missing.iter().find(|m| m.name == kind.as_str()) {
            None => checks.push(Check::pass(
                &name,
                &format!("{kind} found ({kind} source available)"),
            )),
            Some(m) => {
                *all_pass = false;
                checks.push(Check::fail(
                    &name,
                    &format!(
                        "{} not found, needed for {} (install: {})",
                        m.name, m.purpose, m.install_hint
                    ),
                ));
            }
        }
    }
}

fn check_config(checks: &mut Vec<Check>, all_pass: &mut bool) {
    let path = match default_config_path() {
        Ok(path) => path,
        Err(e) => {
            checks.push(Check::warn(
                "source_config",
                &format!("Cannot locate config: {e}"),
            ));
            return;
        }
    };
    if !path.exists() {
        checks.push(Check::info(
            "source_config",
            &format!("No config at {} (using built-in defaults)", path.display()),
        ));
        return;
    }
    match SourceConfig::load(&path) {
        Ok(config) => checks.push(Check::pass(
            "source_config",
            &format!(
                "Config OK (repo {}, package {})",
                config.repo_url, config.package_name
            ),
        )),
        Err(e) => {
            *all_pass = false;
            checks.push(Check::fail(
                "source_config",
                &format!("Config at {} is invalid: {e}", path.display()),
            ));
        }
    }
}

fn print_results(checks: &[Check], all_pass: bool, json_output: bool) -> Result<u8, String> {
    if json_output {
        let json = serde_json::json!({
            "healthy": all_pass,
            "checks": checks.iter().map(|c| serde_json::json!({
                "name": c.name,
                "status": c.status,
                "message": c.message,
            })).collect::<Vec<_>>(),
        });
        println!("{}", json_pretty(&json)?);
    } else {
        println!("faicons doctor\n");
        for check in checks {
            let icon = match check.status {
                "pass" => "✓",
                "fail" => "✗",
                "warn" => "⚠",
                _ => "ℹ",
            };
            println!("  {icon} {}", check.message);
        }
        println!();
        if all_pass {
            println!("All checks passed.");
        } else {
            println!("Some checks failed. See above for details.");
        }
    }
    Ok(if all_pass { EXIT_SUCCESS } else { EXIT_FAILURE })
}

struct Check {
    name: String,
    status: &'static str,
    message: String,
}

impl Check {
    fn new(name: &str, status: &'static str, message: &str) -> Self {
        Self {
            name: name.to_owned(),
            status,
            message: message.to_owned(),
        }
    }

    fn pass(name: &str, message: &str) -> Self {
        Self::new(name, "pass", message)
    }

    fn fail(name: &str, message: &str) -> Self {
        Self::new(name, "fail", message)
    }

    fn warn(name: &str, message: &str) -> Self {
        Self::new(name, "warn", message)
    }

    fn info(name: &str, message: &str) -> Self {
        Self::new(name, "info", message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn results_exit_code_follows_health() {
        let checks = vec![Check::pass("a", "ok"), Check::info("b", "note")];
        assert_eq!(print_results(&checks, true, false).unwrap(), EXIT_SUCCESS);
        let checks = vec![Check::fail("a", "broken")];
        assert_eq!(print_results(&checks, false, true).unwrap(), EXIT_FAILURE);
    }
}
