use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::domain::Domain;
use crate::error::{CheckerError, Result};

/// Forbidden list and queries read from one input stream
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Input {
    /// Forbidden domains, in input order
    pub forbidden: Vec<Domain>,
    /// Query domains, in input order
    pub queries: Vec<Domain>,
}

/// Line reader for the count-prefixed input format:
///
/// ```text
/// <count>
/// <domain>      (count lines)
/// <count>
/// <domain>      (count lines)
/// ```
pub struct InputReader<R> {
    reader: R,
    buf: String,
    line_num: usize,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
            line_num: 0,
        }
    }

    /// Number of lines consumed so far
    pub fn line_num(&self) -> usize {
        self.line_num
    }

    /// Read one line holding a non-negative count.
    ///
    /// Surrounding whitespace is ignored; the rest must be ASCII digits.
    pub fn read_count(&mut self) -> Result<usize> {
        if !self.next_line()? {
            return Err(CheckerError::MissingCount {
                line: self.line_num + 1,
            });
        }

        let value = self.buf.trim();
        let invalid = || CheckerError::InvalidCount {
            line: self.line_num,
            value: value.to_string(),
        };
        // `usize::from_str` also takes a leading `+`.
        if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        value.parse().map_err(|_| invalid())
    }

    /// Read exactly `amount` domain lines.
    ///
    /// Each line is taken verbatim apart from its line terminator.
    pub fn read_domains(&mut self, amount: usize) -> Result<Vec<Domain>> {
        // Cap the up-front allocation; the count comes from untrusted input.
        let mut domains = Vec::with_capacity(amount.min(1 << 16));
        while domains.len() < amount {
            if !self.next_line()? {
                return Err(CheckerError::MissingDomains {
                    line: self.line_num,
                    expected: amount,
                    found: domains.len(),
                });
            }
            domains.push(Domain::new(&self.buf));
        }
        Ok(domains)
    }

    /// Read a count line followed by that many domain lines
    pub fn read_section(&mut self) -> Result<Vec<Domain>> {
        let amount = self.read_count()?;
        self.read_domains(amount)
    }

    /// Load the next line into `buf` without its terminator (`\n`, `\r\n`,
    /// or a lone `\r` ending the input). Returns false at end of input.
    fn next_line(&mut self) -> Result<bool> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            return Ok(false);
        }
        self.line_num += 1;

        if self.buf.ends_with('\n') {
            self.buf.pop();
        }
        if self.buf.ends_with('\r') {
            self.buf.pop();
        }
        Ok(true)
    }
}

/// Read the forbidden section followed by the query section.
pub fn read_input(reader: impl BufRead) -> Result<Input> {
    let mut reader = InputReader::new(reader);
    let forbidden = reader.read_section()?;
    let queries = reader.read_section()?;

    debug!(
        forbidden = forbidden.len(),
        queries = queries.len(),
        lines = reader.line_num(),
        "read input"
    );

    Ok(Input { forbidden, queries })
}

/// Read input from a file.
pub fn read_input_from_file(path: impl AsRef<Path>) -> Result<Input> {
    let file = File::open(path.as_ref())?;
    read_input(BufReader::new(file))
}
