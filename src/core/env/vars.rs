use super::{EnvError, MAX_NAME, MAX_VALUE};
use std::collections::HashMap;

/// Shell-local variables backing `$NAME` expansion.
///
/// Lives only as long as the interpreter and is independent of the
/// process environment handed to child processes.
#[derive(Clone, Debug, Default)]
pub struct EnvStore {
    vars: HashMap<Box<str>, Box<str>>,
}

impl EnvStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any previous binding.
    pub fn set(&mut self, name: &str, value: &str) -> Result<(), EnvError> {
        if name.is_empty() {
            return Err(EnvError::EmptyName);
        }
        if name.len() > MAX_NAME {
            return Err(EnvError::NameTooLong(name.len()));
        }
        if value.len() > MAX_VALUE {
            return Err(EnvError::ValueTooLong(value.len()));
        }

        if let Some(old) = self.vars.insert(name.into(), value.into()) {
            log::trace!("set {}: replaced {:?}", name, old);
        }
        Ok(())
    }

    /// Removes the binding for `name`. Unknown names are ignored.
    pub fn unset(&mut self, name: &str) {
        if self.vars.remove(name).is_none() {
            log::trace!("unset {}: not bound", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(|s| s.as_ref())
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.vars.len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
