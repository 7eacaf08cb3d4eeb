use crate::process::{ensure_tool, CommandRunner};
use crate::SourceKind;
use std::fmt;

/// A missing prerequisite with actionable install instructions.
#[derive(Debug)]
pub struct MissingPrereq {
    pub name: &'static str,
    pub purpose: &'static str,
    pub install_hint: &'static str,
}

impl fmt::Display for MissingPrereq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "  - {}: {} (install: {})",
            self.name, self.purpose, self.install_hint
        )
    }
}

fn prereq_for(kind: SourceKind) -> (&'static str, MissingPrereq) {
    match kind {
        SourceKind::Git => (
            "git",
            MissingPrereq {
                name: "git",
                purpose: "cloning the Font Awesome repository",
                install_hint: "zypper install git | apt install git | dnf install git | pacman -S git",
            },
        ),
        SourceKind::Npm => (
            if cfg!(windows) { "npm.cmd" } else { "npm" },
            MissingPrereq {
                name: "npm",
                purpose: "installing the Font Awesome npm package",
                install_hint: "install Node.js from https://nodejs.org | apt install npm | dnf install npm | pacman -S npm",
            },
        ),
    }
}

/// Check the tools needed by each requested source.
/// Returns a list of missing items. Empty list means all prerequisites are met.
pub fn check_fetch_prereqs<R: CommandRunner + ?Sized>(
    runner: &R,
    kinds: &[SourceKind],
) -> Vec<MissingPrereq> {
    kinds
        .iter()
        .map(|kind| prereq_for(*kind))
        .filter(|(tool, _)| ensure_tool(runner, tool).is_err())
        .map(|(_, missing)| missing)
        .collect()
}

/// Format a list of missing prerequisites into a user-friendly error message.
pub fn format_missing(missing: &[MissingPrereq]) -> String {
    use std::fmt::Write as _;
    let mut msg = String::from("missing prerequisites:\n");
    for m in missing {
        let _ = writeln!(msg, "{m}");
    }
    msg.push_str("\nfaicons needs these tools to fetch the icon metadata catalog.");
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::testing::{missing, ok, ScriptedRunner};

    #[test]
    fn missing_prereq_display() {
        let m = MissingPrereq {
            name: "git",
            purpose: "cloning",
            install_hint: "apt install git",
        };
        let s = format!("{m}");
        assert!(s.contains("git"));
        assert!(s.contains("cloning"));
        assert!(s.contains("apt install git"));
    }

    #[test]
    fn format_missing_produces_readable_output() {
        let (_, git) = prereq_for(SourceKind::Git);
        let (_, npm) = prereq_for(SourceKind::Npm);
        let output = format_missing(&[git, npm]);
        assert!(output.contains("missing prerequisites:"));
        assert!(output.contains("git"));
        assert!(output.contains("npm"));
    }

    #[test]
    fn reports_only_unavailable_tools() {
        let runner = ScriptedRunner::new(|program, _, _| {
            if program == "git" {
                ok("git version 2.45.0")
            } else {
                missing()
            }
        });
        let result = check_fetch_prereqs(&runner, &[SourceKind::Git, SourceKind::Npm]);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "npm");
    }

    #[test]
    fn all_present_yields_empty_list() {
        let runner = ScriptedRunner::new(|_, _, _| ok("1.0.0"));
        assert!(check_fetch_prereqs(&runner, &[SourceKind::Git, SourceKind::Npm]).is_empty());
    }
}
