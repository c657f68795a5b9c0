use std::env;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use log::{debug, warn};

use super::{CommandOutput, CommandRunner};
use crate::error::CommandError;

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, CommandError> {
        debug!("Running: {} {}", program, args.join(" "));

        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| {
                warn!("Failed to start {}: {}", program, source);
                CommandError::Launch {
                    program: program.to_string(),
                    source,
                }
            })?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        let status = output.status.code();
        debug!("{} finished with status {:?}", program, status);

        Ok(CommandOutput {
            status,
            output: combined,
        })
    }
}

/// Find an executable either as a direct path or on `PATH`.
pub fn locate(program: &str) -> Option<PathBuf> {
    let direct = Path::new(program);
    if direct.components().count() > 1 {
        return direct.is_file().then(|| direct.to_path_buf());
    }

    let paths = env::var_os("PATH")?;
    env::split_paths(&paths)
        .map(|dir| dir.join(program))
        .find(|candidate| candidate.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sh(script: &str) -> Vec<String> {
        vec!["-c".to_string(), script.to_string()]
    }

    #[test]
    fn captures_stdout_then_stderr() {
        let output = SystemRunner::new()
            .run("sh", &sh("echo out; echo err >&2"))
            .expect("sh should start");

        assert!(output.success());
        assert_eq!(output.output, "out\nerr\n");
    }

    #[test]
    fn reports_exit_code_without_error() {
        let output = SystemRunner::new()
            .run("sh", &sh("echo 'mount: permission denied' >&2; exit 32"))
            .expect("sh should start");

        assert_eq!(output.status, Some(32));
        assert_eq!(output.output, "mount: permission denied\n");
    }

    #[test]
    fn missing_program_is_a_launch_error() {
        let err = SystemRunner::new()
            .run("usb-loader-no-such-tool", &[])
            .expect_err("program does not exist");

        assert!(matches!(err, CommandError::Launch { .. }));
        assert!(err.to_string().starts_with("failed to execute usb-loader-no-such-tool"));
    }

    #[test]
    fn locate_finds_tools_on_path() {
        assert!(locate("sh").is_some());
        assert!(locate("usb-loader-no-such-tool").is_none());
        assert!(locate("/nonexistent/bin/fdisk").is_none());
    }
}
