use super::{Command, CommandError};
use crate::core::env::EnvStore;
use std::env;

#[derive(Clone, Debug, Default)]
pub struct PwdCommand;

impl PwdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for PwdCommand {
    fn execute(&self, _args: &[String], _env: &mut EnvStore) -> Result<(), CommandError> {
        let cwd = env::current_dir().map_err(|e| CommandError::Io {
            command: "pwd",
            source: e,
        })?;
        println!("{}", cwd.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::core::test_support::CWD_LOCK;

    #[test]
    fn test_pwd_removed_directory() -> Result<(), Box<dyn std::error::Error>> {
        let _guard = CWD_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        let original = env::current_dir()?;
        let temp_dir = tempfile::tempdir()?;
        let doomed = temp_dir.path().join("doomed");
        std::fs::create_dir(&doomed)?;

        env::set_current_dir(&doomed)?;
        std::fs::remove_dir(&doomed)?;
        let result = PwdCommand::new().execute(&[], &mut EnvStore::new());
        env::set_current_dir(original)?;

        assert!(matches!(result, Err(CommandError::Io { command: "pwd", .. })));
        Ok(())
    }

    #[test]
    fn test_pwd_ignores_arguments() {
        let cmd = PwdCommand::new();
        assert!(cmd.execute(&["extra".to_string()], &mut EnvStore::new()).is_ok());
    }
}
