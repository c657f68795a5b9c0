// ============================================================================
// File: src/command/scripted.rs
// ----------------------------------------------------------------------------
// Test double for CommandRunner: canned exit codes and output per program,
// with every invocation recorded for later inspection.
// ============================================================================

use std::collections::HashMap;
use std::io;
use std::sync::Mutex;

use super::{CommandOutput, CommandRunner};
use crate::error::CommandError;

#[derive(Debug, Clone)]
enum Script {
    Exit(CommandOutput),
    LaunchFailure,
}

/// A recorded call
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Invocation {
    pub program: String,
    pub args: Vec<String>,
}

/// Programs without a script fail to launch with `NotFound`.
#[derive(Debug, Default)]
pub(crate) struct ScriptedRunner {
    scripts: HashMap<String, Script>,
    calls: Mutex<Vec<Invocation>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn exits<P: Into<String>, O: Into<String>>(mut self, program: P, code: i32, output: O) -> Self {
        self.scripts
            .insert(program.into(), Script::Exit(CommandOutput::exited(code, output)));
        self
    }

    pub fn fails_to_launch<P: Into<String>>(mut self, program: P) -> Self {
        self.scripts.insert(program.into(), Script::LaunchFailure);
        self
    }

    pub fn calls(&self) -> Vec<Invocation> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, program: &str, args: &[String]) -> Result<CommandOutput, CommandError> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(Invocation {
                program: program.to_string(),
                args: args.to_vec(),
            });

        match self.scripts.get(program) {
            Some(Script::Exit(output)) => Ok(output.clone()),
            Some(Script::LaunchFailure) | None => Err(CommandError::Launch {
                program: program.to_string(),
                source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
            }),
        }
    }
}
