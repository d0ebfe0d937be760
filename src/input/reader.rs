use std::io::{BufRead, Write};

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use super::{InputError, LineReader, ReadOutcome};

/// Line editing for terminals. History stays in memory for the session.
pub struct EditorReader {
    editor: DefaultEditor,
}

impl EditorReader {
    pub fn new() -> Result<Self, InputError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineReader for EditorReader {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, InputError> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                    log::warn!("couldn't add to history: {}", e);
                }
                Ok(ReadOutcome::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

/// Plain line reader for pipes and files. Writes the prompt to `writer`
/// before every read.
pub struct PipedReader<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> PipedReader<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> LineReader for PipedReader<R, W> {
    fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, InputError> {
        self.writer.write_all(prompt.as_bytes())?;
        self.writer.flush()?;

        let mut buf = Vec::new();
        if self.reader.read_until(b'\n', &mut buf)? == 0 {
            return Ok(ReadOutcome::Eof);
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(ReadOutcome::Line(String::from_utf8_lossy(&buf).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_piped_lines_and_prompts() -> Result<(), InputError> {
        let mut out = Vec::new();
        {
            let mut reader = PipedReader::new(Cursor::new("pwd\r\nset A b\nlast"), &mut out);
            assert_eq!(reader.read_line("xsh# ")?, ReadOutcome::Line("pwd".into()));
            assert_eq!(reader.read_line("xsh# ")?, ReadOutcome::Line("set A b".into()));
            assert_eq!(reader.read_line("xsh# ")?, ReadOutcome::Line("last".into()));
            assert_eq!(reader.read_line("xsh# ")?, ReadOutcome::Eof);
        }
        assert_eq!(String::from_utf8_lossy(&out), "xsh# ".repeat(4));
        Ok(())
    }

    #[test]
    fn test_piped_empty_line() -> Result<(), InputError> {
        let mut reader = PipedReader::new(Cursor::new("\n"), Vec::new());
        assert_eq!(reader.read_line("> ")?, ReadOutcome::Line(String::new()));
        assert_eq!(reader.read_line("> ")?, ReadOutcome::Eof);
        Ok(())
    }

    #[test]
    fn test_piped_invalid_utf8_is_lossy() -> Result<(), InputError> {
        let mut reader = PipedReader::new(Cursor::new(vec![b'a', 0xff, b'\n']), Vec::new());
        assert_eq!(reader.read_line("")?, ReadOutcome::Line("a\u{fffd}".into()));
        Ok(())
    }
}
