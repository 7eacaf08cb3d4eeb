use crate::FetchError;
use std::io;
use std::path::Path;
use std::process::{Command, Stdio};
use tracing::debug;

/// Captured result of a child process that ran to completion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl ProcessOutput {
    pub fn success(&self) -> bool {
        self.code == Some(0)
    }
}

/// Spawns external tools. Implemented by [`SystemRunner`] and by test doubles.
pub trait CommandRunner: Send + Sync {
    /// Run `program` to completion and capture its output.
    ///
    /// A non-zero exit is not an error at this level; failing to spawn is.
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> io::Result<ProcessOutput>;
}

/// Runs commands with `std::process::Command`, blocking until exit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&str], cwd: Option<&Path>) -> io::Result<ProcessOutput> {
        let mut cmd = Command::new(program);
        cmd.args(args).stdin(Stdio::null());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }
        debug!("running {}", render_command(program, args));
        let output = cmd.output()?;
        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        })
    }
}

pub(crate) fn render_command(program: &str, args: &[&str]) -> String {
    if args.is_empty() {
        program.to_owned()
    } else {
        format!("{program} {}", args.join(" "))
    }
}

/// Run a command and turn spawn failures and non-zero exits into [`FetchError`]s.
pub fn run_checked<R: CommandRunner + ?Sized>(
    runner: &R,
    program: &str,
    args: &[&str],
    cwd: Option<&Path>,
) -> Result<ProcessOutput, FetchError> {
    let output = runner.run(program, args, cwd).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            FetchError::ToolUnavailable {
                tool: program.to_owned(),
                source: e,
            }
        } else {
            FetchError::Io(e)
        }
    })?;

    if output.success() {
        return Ok(output);
    }

    let mut command = render_command(program, args);
    if let Some(dir) = cwd {
        command = format!("{command} (in {})", dir.display());
    }
    Err(FetchError::ProcessFailed {
        command,
        code: output.code,
        stdout: output.stdout,
        stderr: output.stderr,
    })
}

/// Verify that `tool --version` runs and exits zero.
pub fn ensure_tool<R: CommandRunner + ?Sized>(runner: &R, tool: &str) -> Result<(), FetchError> {
    match run_checked(runner, tool, &["--version"], None) {
        Ok(out) => {
            debug!("{tool} available: {}", out.stdout.trim());
            Ok(())
        }
        Err(e @ FetchError::ToolUnavailable { .. }) => Err(e),
        Err(e) => Err(FetchError::ToolUnavailable {
            tool: tool.to_owned(),
            source: io::Error::other(e.to_string()),
        }),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::{CommandRunner, ProcessOutput};
    use std::io;
    use std::path::Path;
    use std::sync::Mutex;

    type Handler = dyn Fn(&str, &[&str], Option<&Path>) -> io::Result<ProcessOutput> + Send + Sync;

    /// Records every invocation and answers with a caller-supplied handler.
    pub(crate) struct ScriptedRunner {
        handler: Box<Handler>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedRunner {
        pub(crate) fn new(
            handler: impl Fn(&str, &[&str], Option<&Path>) -> io::Result<ProcessOutput>
                + Send
                + Sync
                + 'static,
        ) -> Self {
            Self {
                handler: Box::new(handler),
                calls: Mutex::new(Vec::new()),
            }
        }

        pub(crate) fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl CommandRunner for ScriptedRunner {
        fn run(
            &self,
            program: &str,
            args: &[&str],
            cwd: Option<&Path>,
        ) -> io::Result<ProcessOutput> {
            self.calls
                .lock()
                .unwrap()
                .push(super::render_command(program, args));
            (self.handler)(program, args, cwd)
        }
    }

    pub(crate) fn ok(stdout: &str) -> io::Result<ProcessOutput> {
        Ok(ProcessOutput {
            code: Some(0),
            stdout: stdout.to_owned(),
            stderr: String::new(),
        })
    }

    pub(crate) fn failed(code: i32, stderr: &str) -> io::Result<ProcessOutput> {
        Ok(ProcessOutput {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.to_owned(),
        })
    }

    pub(crate) fn missing() -> io::Result<ProcessOutput> {
        Err(io::Error::new(io::ErrorKind::NotFound, "No such file or directory"))
    }
}
