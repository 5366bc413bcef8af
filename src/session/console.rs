use std::io::{BufRead, Write};

use crate::session::error::{SessionError, Stage};

/// Line-oriented console over any input and output channel.
pub struct Console<R, W> {
    input: R,
    output: W,
    max_attempts: Option<u32>,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, max_attempts: Option<u32>) -> Self {
        Self {
            input,
            output,
            max_attempts,
        }
    }

    pub fn output(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn say(&mut self, message: &str) -> Result<(), SessionError> {
        writeln!(self.output, "{message}")?;
        Ok(())
    }

    /// Reads one line without its line terminator. `None` once input is exhausted.
    ///
    /// Bytes that are not UTF-8 become U+FFFD rather than failing the read.
    pub fn read_line(&mut self) -> Result<Option<String>, SessionError> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        let line = String::from_utf8_lossy(&buf);
        Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
    }

    /// Prints `prompt` on the current line and reads the answer.
    pub fn ask(&mut self, prompt: &str) -> Result<Option<String>, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        self.read_line()
    }

    /// Like [`Console::ask`], but the answer is mandatory.
    pub fn ask_required(&mut self, prompt: &str, stage: Stage) -> Result<String, SessionError> {
        self.ask(prompt)?.ok_or(SessionError::InputClosed(stage))
    }

    /// Asks until `parse` accepts the answer, printing `rejection` after
    /// each invalid one.
    pub fn ask_until<T>(
        &mut self,
        prompt: &str,
        stage: Stage,
        rejection: &str,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Result<T, SessionError> {
        let mut attempts = 0;
        loop {
            let answer = self.ask_required(prompt, stage)?;
            if let Some(value) = parse(&answer) {
                return Ok(value);
            }

            attempts += 1;
            log::debug!("rejected {stage} {answer:?} (attempt {attempts})");
            self.say(rejection)?;

            if self.max_attempts.is_some_and(|max| attempts >= max) {
                return Err(SessionError::TooManyAttempts { stage, attempts });
            }
        }
    }
}
