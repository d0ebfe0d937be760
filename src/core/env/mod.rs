mod vars;

pub use vars::EnvStore;

/// Longest variable name the store accepts, in bytes.
pub const MAX_NAME: usize = 255;
/// Longest variable value the store accepts, in bytes.
pub const MAX_VALUE: usize = 255;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("empty variable name")]
    EmptyName,
    #[error("variable name too long ({0} bytes, max {max})", max = MAX_NAME)]
    NameTooLong(usize),
    #[error("variable value too long ({0} bytes, max {max})", max = MAX_VALUE)]
    ValueTooLong(usize),
}
