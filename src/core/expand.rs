//! `$NAME` substitution against the shell's variable store.
//!
//! A name is the longest run of ASCII alphanumerics and underscores after
//! the `$`. Unbound names, and a `$` with no name after it, expand to
//! nothing. There is no escape for a literal `$`.

use super::env::EnvStore;
use super::MAX_INPUT;
use std::borrow::Cow;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ExpandError {
    #[error("expanded line too long (max {} bytes)", MAX_INPUT - 1)]
    LineTooLong,
}

pub fn expand<'a>(line: &'a str, store: &EnvStore) -> Result<Cow<'a, str>, ExpandError> {
    if !line.contains('$') {
        return Ok(Cow::Borrowed(line));
    }

    let mut result = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(dollar_pos) = rest.find('$') {
        push_bounded(&mut result, &rest[..dollar_pos])?;

        let after = &rest[dollar_pos + 1..];
        let name_len = after
            .find(|c: char| !is_name_char(c))
            .unwrap_or(after.len());
        let name = &after[..name_len];

        match store.get(name) {
            Some(value) => push_bounded(&mut result, value)?,
            None => log::trace!("expand: ${} is unset", name),
        }

        rest = &after[name_len..];
    }
    push_bounded(&mut result, rest)?;

    log::debug!("expanded {:?} -> {:?}", line, result);
    Ok(Cow::Owned(result))
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn push_bounded(buf: &mut String, text: &str) -> Result<(), ExpandError> {
    if buf.len() + text.len() >= MAX_INPUT {
        return Err(ExpandError::LineTooLong);
    }
    buf.push_str(text);
    Ok(())
}
