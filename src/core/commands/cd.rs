use super::{Command, CommandError};
use crate::core::env::EnvStore;
use std::env;

#[derive(Clone, Debug, Default)]
pub struct CdCommand;

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for CdCommand {
    fn execute(&self, args: &[String], _env: &mut EnvStore) -> Result<(), CommandError> {
        let path = match args {
            [path] => path,
            [] => return Err(CommandError::Usage("cd: missing argument")),
            _ => return Err(CommandError::Usage("cd: too many arguments")),
        };

        env::set_current_dir(path).map_err(|e| CommandError::Io {
            command: "cd",
            source: e,
        })
    }
}
