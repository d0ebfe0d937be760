use std::io::ErrorKind;
use std::process::{Command, ExitStatus, Stdio};

use super::ProcessError;

/// Runs external programs one at a time, blocking until each exits.
#[derive(Clone, Debug, Default)]
pub struct ProcessExecutor;

impl ProcessExecutor {
    pub fn new() -> Self {
        Self
    }

    /// Spawns `program` through the `PATH` search with `args` verbatim and
    /// waits for it. Any exit status counts as success here.
    pub fn spawn_process(&self, program: &str, args: &[String]) -> Result<ExitStatus, ProcessError> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let mut child = command.spawn().map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                ProcessError::CommandNotFound(program.to_string())
            } else {
                ProcessError::Spawn {
                    program: program.to_string(),
                    source: e,
                }
            }
        })?;

        log::debug!("spawned {} (pid {})", program, child.id());

        let status = child.wait().map_err(|e| ProcessError::Wait {
            program: program.to_string(),
            source: e,
        })?;

        if !status.success() {
            log::debug!("{} exited with {}", program, status);
        }
        Ok(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spawn_true() {
        let executor = ProcessExecutor::new();
        let status = executor.spawn_process("true", &[]).unwrap();
        assert!(status.success());
    }

    #[test]
    fn test_nonzero_exit_is_not_an_error() {
        let executor = ProcessExecutor::new();
        let status = executor
            .spawn_process("sh", &["-c".to_string(), "exit 3".to_string()])
            .unwrap();
        assert_eq!(status.code(), Some(3));
    }

    #[test]
    fn test_command_not_found() {
        let executor = ProcessExecutor::new();
        let result = executor.spawn_process("xsh-no-such-program-xyz", &[]);
        assert!(matches!(result, Err(ProcessError::CommandNotFound(name)) if name == "xsh-no-such-program-xyz"));
    }

    #[test]
    fn test_not_executable() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let script = dir.path().join("plain.txt");
        std::fs::write(&script, "not a program")?;

        let executor = ProcessExecutor::new();
        let result = executor.spawn_process(&script.to_string_lossy(), &[]);
        assert!(matches!(result, Err(ProcessError::Spawn { .. })));
        Ok(())
    }

    #[test]
    fn test_arguments_are_passed_verbatim() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let target = dir.path().join("made by touch");

        let executor = ProcessExecutor::new();
        executor.spawn_process("touch", &[target.to_string_lossy().into_owned()])?;
        assert!(target.exists());
        Ok(())
    }
}
