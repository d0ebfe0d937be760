use super::{Command, CommandError};
use crate::core::env::EnvStore;

#[derive(Clone, Debug, Default)]
pub struct UnsetCommand;

impl UnsetCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Command for UnsetCommand {
    fn execute(&self, args: &[String], env: &mut EnvStore) -> Result<(), CommandError> {
        match args {
            [name] => {
                env.unset(name);
                Ok(())
            }
            _ => Err(CommandError::Usage("unset: usage: unset VAR")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset() -> Result<(), CommandError> {
        let mut store = EnvStore::new();
        store.set("GONE", "soon")?;
        UnsetCommand::new().execute(&["GONE".to_string()], &mut store)?;
        assert_eq!(store.get("GONE"), None);
        Ok(())
    }

    #[test]
    fn test_unset_never_set() {
        let mut store = EnvStore::new();
        assert!(UnsetCommand::new()
            .execute(&["NEVER".to_string()], &mut store)
            .is_ok());
    }

    #[test]
    fn test_unset_usage() {
        let mut store = EnvStore::new();
        let result = UnsetCommand::new().execute(&[], &mut store);
        assert!(matches!(result, Err(CommandError::Usage("unset: usage: unset VAR"))));
    }
}
