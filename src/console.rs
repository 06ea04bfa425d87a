//! Line-oriented prompts and the human comparison oracle.
//!
//! Malformed answers are handled here by asking again. Only I/O failures and
//! end of input escape to the caller.
use crate::dataset::Record;
use crate::insertion::{Oracle, Preference};
use anyhow::{anyhow, Context, Result};
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    #[cfg(test)]
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{line}").context("write prompt output")?;
        Ok(())
    }

    /// Print `prompt` and read one line with the trailing newline removed.
    ///
    /// Lines that are not valid UTF-8 are rejected and asked again.
    pub fn ask_line(&mut self, prompt: &str) -> Result<String> {
        loop {
            write!(self.output, "{prompt}").context("write prompt")?;
            self.output.flush().context("flush prompt")?;
            let mut bytes = Vec::new();
            let read = self
                .input
                .read_until(b'\n', &mut bytes)
                .context("read answer")?;
            if read == 0 {
                return Err(anyhow!("unexpected end of input"));
            }
            match String::from_utf8(bytes) {
                Ok(line) => return Ok(line.trim_end_matches(['\r', '\n']).to_string()),
                Err(err) => {
                    tracing::debug!(error = %err, "rejected non-UTF-8 answer");
                    self.say("Invalid input. Please enter plain text.")?;
                }
            }
        }
    }

    /// Ask until the trimmed answer is non-empty.
    pub fn ask_nonempty(&mut self, prompt: &str) -> Result<String> {
        loop {
            let answer = self.ask_line(prompt)?;
            let trimmed = answer.trim();
            if !trimmed.is_empty() {
                return Ok(trimmed.to_string());
            }
        }
    }

    pub fn ask_yes_no(&mut self, prompt: &str) -> Result<bool> {
        loop {
            let answer = self.ask_line(prompt)?;
            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Invalid input. Please enter y or n.")?,
            }
        }
    }

    /// Ask which of two records should sit higher in the list.
    pub fn compare(
        &mut self,
        first: &Record,
        second: &Record,
        header: Option<&Record>,
    ) -> Result<Preference> {
        loop {
            self.say("")?;
            self.say("Which item should be higher in the list?")?;
            if let Some(header) = header {
                self.say(&format!("Header: {header}"))?;
            }
            self.say(&format!("1: {first}"))?;
            self.say(&format!("2: {second}"))?;
            let choice = self.ask_line("Enter 1 or 2: ")?;
            match choice.trim() {
                "1" => return Ok(Preference::First),
                "2" => return Ok(Preference::Second),
                _ => {
                    tracing::debug!(answer = %choice.trim(), "rejected comparison answer");
                    self.say("Invalid input. Please enter 1 or 2.")?;
                }
            }
        }
    }
}

/// Oracle that puts each comparison to a human through a console.
pub struct ConsoleOracle<'a, R, W> {
    console: &'a mut Console<R, W>,
    header: Option<&'a Record>,
}

impl<'a, R: BufRead, W: Write> ConsoleOracle<'a, R, W> {
    pub fn new(console: &'a mut Console<R, W>, header: Option<&'a Record>) -> Self {
        Self { console, header }
    }
}

impl<R: BufRead, W: Write> Oracle<Record> for ConsoleOracle<'_, R, W> {
    fn ask(&mut self, first: &Record, second: &Record) -> Result<Preference> {
        self.console.compare(first, second, self.header)
    }
}
