use crate::core::commands::CommandError;
use crate::core::expand::ExpandError;
use crate::core::tokenize::TokenizeError;
use crate::core::MAX_INPUT;
use crate::input::InputError;
use crate::process::ProcessError;

#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    #[error("input line too long (max {} bytes)", MAX_INPUT - 1)]
    InputTooLong,
    #[error(transparent)]
    Expand(#[from] ExpandError),
    #[error(transparent)]
    Tokenize(#[from] TokenizeError),
    #[error(transparent)]
    Command(#[from] CommandError),
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Process(#[from] ProcessError),
    #[error("flag error: {0}")]
    FlagError(String),
}
