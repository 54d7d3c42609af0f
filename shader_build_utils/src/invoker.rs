use std::{
    ffi::OsString,
    path::Path,
    process::{Command, Stdio},
};

use anyhow::Context;
use log::debug;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InvocationOutput {
    /// `None` when the process was terminated by a signal.
    pub exit_code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl InvocationOutput {
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs an external program to completion.
/// An `Err` means the program could not be started at all.
pub trait ProcessInvoker {
    fn invoke(&mut self, program: &Path, args: &[OsString]) -> anyhow::Result<InvocationOutput>;
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// The child writes straight to our stdout/stderr.
    #[default]
    Passthrough,
    Capture,
}

#[derive(Default)]
pub struct SystemProcessInvoker {
    mode: OutputMode,
}

impl SystemProcessInvoker {
    pub fn new(mode: OutputMode) -> Self {
        Self { mode }
    }
}

impl ProcessInvoker for SystemProcessInvoker {
    fn invoke(&mut self, program: &Path, args: &[OsString]) -> anyhow::Result<InvocationOutput> {
        debug!("Running {program:?} {args:?}");
        let mut command = Command::new(program);
        command.args(args);

        match self.mode {
            OutputMode::Passthrough => {
                let status = command
                    .stdin(Stdio::null())
                    .status()
                    .context(format!("Could not execute {:?}", program))?;
                Ok(InvocationOutput {
                    exit_code: status.code(),
                    ..Default::default()
                })
            }
            OutputMode::Capture => {
                let output = command
                    .stdin(Stdio::null())
                    .output()
                    .context(format!("Could not execute {:?}", program))?;
                Ok(InvocationOutput {
                    exit_code: output.status.code(),
                    stdout: output.stdout,
                    stderr: output.stderr,
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::test_utils::ScratchDir;

    use super::{InvocationOutput, OutputMode, ProcessInvoker, SystemProcessInvoker};

    #[test]
    fn exit_code_zero_is_success() {
        let ok = InvocationOutput {
            exit_code: Some(0),
            ..Default::default()
        };
        let failed = InvocationOutput {
            exit_code: Some(2),
            ..Default::default()
        };
        let killed = InvocationOutput::default();
        assert!(ok.success());
        assert!(!failed.success());
        assert!(!killed.success());
    }

    #[test]
    fn missing_program_is_an_error() {
        let dir = ScratchDir::new("invoker_missing");
        let mut invoker = SystemProcessInvoker::new(OutputMode::Capture);
        let result = invoker.invoke(&dir.path().join("no_such_compiler"), &[]);
        assert!(result.is_err());
    }

    #[cfg(unix)]
    #[test]
    fn captures_output_and_exit_code() {
        let mut invoker = SystemProcessInvoker::new(OutputMode::Capture);
        let output = invoker
            .invoke(
                Path::new("/bin/sh"),
                &["-c".into(), "echo out; echo err >&2; exit 3".into()],
            )
            .unwrap();
        assert_eq!(output.exit_code, Some(3));
        assert_eq!(output.stdout, b"out\n");
        assert_eq!(output.stderr, b"err\n");
    }
}
