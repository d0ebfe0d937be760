mod reader;

pub use reader::{EditorReader, PipedReader};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result of asking a source for one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadOutcome {
    Line(String),
    /// Ctrl-C at the prompt; the partial line is discarded.
    Interrupted,
    Eof,
}

/// Where the shell loop gets its lines from. Implementations print the
/// prompt themselves.
pub trait LineReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, InputError>;
}
