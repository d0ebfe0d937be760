use crate::{
    core::{commands::CommandExecutor, env::EnvStore, expand, tokenize, MAX_INPUT},
    error::ShellError,
    flags::Flags,
    highlight::SyntaxHighlighter,
    input::{LineReader, ReadOutcome},
    process::signal,
};

pub const PROMPT: &str = "xsh# ";

/// What the loop should do after a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

pub struct Shell {
    pub(crate) env: EnvStore,
    pub(crate) executor: CommandExecutor,
    pub(crate) highlighter: SyntaxHighlighter,
    pub(crate) flags: Flags,
}

impl Shell {
    pub fn new(flags: Flags) -> Self {
        Shell {
            env: EnvStore::new(),
            executor: CommandExecutor::new(),
            highlighter: SyntaxHighlighter::new(),
            flags,
        }
    }

    /// Reads and runs lines until `exit`, `quit` or end of input. Errors
    /// from individual lines are reported and the loop carries on; only a
    /// failing input source ends it early.
    pub fn run<R: LineReader>(&mut self, reader: &mut R) -> Result<(), ShellError> {
        signal::setup_signal_handlers()?;

        loop {
            match reader.read_line(PROMPT)? {
                ReadOutcome::Line(line) => match self.process_line(&line) {
                    Ok(Flow::Exit) => break,
                    Ok(Flow::Continue) => {}
                    Err(e) => self.report(&e),
                },
                ReadOutcome::Interrupted => continue,
                ReadOutcome::Eof => break,
            }
        }

        log::debug!("leaving shell loop");
        Ok(())
    }

    /// Handles one raw line: the `exit`/`quit` check, then expansion,
    /// tokenization and dispatch.
    pub fn process_line(&mut self, line: &str) -> Result<Flow, ShellError> {
        if line == "exit" || line == "quit" {
            return Ok(Flow::Exit);
        }

        let tokens = self.prepare(line)?;
        self.executor.dispatch(&tokens, &mut self.env)?;
        Ok(Flow::Continue)
    }

    /// Expands and tokenizes `line` against the current variables.
    pub fn prepare(&self, line: &str) -> Result<Vec<String>, ShellError> {
        if line.len() >= MAX_INPUT {
            return Err(ShellError::InputTooLong);
        }

        let expanded = expand::expand(line, &self.env)?;
        let tokens = tokenize::tokenize(&expanded)?;
        log::trace!("tokens: {:?}", tokens);
        Ok(tokens)
    }

    fn report(&self, error: &ShellError) {
        if self.flags.is_set("quiet") {
            log::debug!("suppressed: {}", error);
            return;
        }
        eprintln!("{}", self.highlighter.highlight_error(&format!("xsh: {}", error)));
    }
}
