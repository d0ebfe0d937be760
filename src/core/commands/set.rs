use super::{Command, CommandError};
use crate::core::env::EnvStore;

/// `set NAME VALUE...`: extra value words are joined with single spaces,
/// so `set MSG hi world` binds `hi world` rather than dropping `world`.
#[derive(Clone, Debug, Default)]
pub struct SetCommand;

impl SetCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for SetCommand {
    fn execute(&self, args: &[String], env: &mut EnvStore) -> Result<(), CommandError> {
        let (name, words) = match args {
            [name, words @ ..] if !words.is_empty() => (name, words),
            _ => return Err(CommandError::Usage("set: usage: set VAR VALUE")),
        };

        env.set(name, &words.join(" "))?;
        Ok(())
    }
}
