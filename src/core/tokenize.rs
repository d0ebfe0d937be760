use super::MAX_ARGS;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TokenizeError {
    #[error("too many arguments (max {max})", max = MAX_ARGS)]
    TooManyArguments,
}

/// Splits an expanded line on spaces. Runs of spaces count as one
/// delimiter; tabs and quotes are ordinary characters.
pub fn tokenize(line: &str) -> Result<Vec<String>, TokenizeError> {
    let mut tokens = Vec::new();
    for word in line.split(' ').filter(|w| !w.is_empty()) {
        if tokens.len() == MAX_ARGS {
            return Err(TokenizeError::TooManyArguments);
        }
        tokens.push(word.to_string());
    }
    Ok(tokens)
}
