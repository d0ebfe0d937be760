use std::collections::BTreeMap;
use std::process::ExitStatus;

mod cd;
mod pwd;
mod set;
mod unset;

pub use cd::CdCommand;
pub use pwd::PwdCommand;
pub use set::SetCommand;
pub use unset::UnsetCommand;

use crate::core::env::{EnvError, EnvStore};
use crate::process::{ProcessError, ProcessExecutor};

#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    /// Wrong number of arguments to a built-in; the message is the full
    /// text shown to the user.
    #[error("{0}")]
    Usage(&'static str),
    #[error("{command}: {source}")]
    Io {
        command: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("set: {0}")]
    Env(#[from] EnvError),
    #[error(transparent)]
    Process(#[from] ProcessError),
}

pub trait Command {
    fn execute(&self, args: &[String], env: &mut EnvStore) -> Result<(), CommandError>;
}

#[derive(Clone, Debug)]
enum CommandType {
    Cd(CdCommand),
    Pwd(PwdCommand),
    Set(SetCommand),
    Unset(UnsetCommand),
}

impl Command for CommandType {
    fn execute(&self, args: &[String], env: &mut EnvStore) -> Result<(), CommandError> {
        match self {
            CommandType::Cd(cmd) => cmd.execute(args, env),
            CommandType::Pwd(cmd) => cmd.execute(args, env),
            CommandType::Set(cmd) => cmd.execute(args, env),
            CommandType::Unset(cmd) => cmd.execute(args, env),
        }
    }
}

/// Routes a tokenized line to a built-in or to an external program.
#[derive(Clone, Debug)]
pub struct CommandExecutor {
    commands: BTreeMap<&'static str, CommandType>,
    process_executor: ProcessExecutor,
    last_status: Option<ExitStatus>,
}

impl Default for CommandExecutor {
    fn default() -> Self {
        Self::new()
    }
}

impl CommandExecutor {
    pub fn new() -> Self {
        let mut commands = BTreeMap::new();
        commands.insert("cd", CommandType::Cd(CdCommand::new()));
        commands.insert("pwd", CommandType::Pwd(PwdCommand::new()));
        commands.insert("set", CommandType::Set(SetCommand::new()));
        commands.insert("unset", CommandType::Unset(UnsetCommand::new()));

        Self {
            commands,
            process_executor: ProcessExecutor::new(),
            last_status: None,
        }
    }

    /// Runs `tokens[0]` with the remaining tokens as arguments. An empty
    /// token list does nothing.
    pub fn dispatch(&mut self, tokens: &[String], env: &mut EnvStore) -> Result<(), CommandError> {
        match tokens.split_first() {
            Some((command, args)) => self.execute(command, args, env),
            None => Ok(()),
        }
    }

    pub fn execute(
        &mut self,
        command: &str,
        args: &[String],
        env: &mut EnvStore,
    ) -> Result<(), CommandError> {
        if let Some(cmd) = self.commands.get(command) {
            log::debug!("builtin {} {:?}", command, args);
            return cmd.execute(args, env);
        }

        log::debug!("external {} {:?}", command, args);
        let status = self.process_executor.spawn_process(command, args)?;
        self.last_status = Some(status);
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn is_builtin(&self, command: &str) -> bool {
        self.commands.contains_key(command)
    }

    /// Exit status of the most recent external command, kept for
    /// diagnostics only.
    pub fn last_status(&self) -> Option<ExitStatus> {
        self.last_status
    }
}
