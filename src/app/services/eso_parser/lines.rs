//! Line source shared by the dictionary and data stages

use std::io::{self, BufRead};

use crate::{Error, Result};

/// Forward-only line iterator that tracks the current 1-based line number
///
/// Both parsing stages pull from the same instance, so line numbers reported
/// in errors are physical positions within the whole input.
#[derive(Debug)]
pub struct NumberedLines<I> {
    inner: I,
    line_number: usize,
}

impl<I> NumberedLines<I>
where
    I: Iterator<Item = io::Result<String>>,
{
    /// Wrap an iterator of lines, such as [`BufRead::lines`]
    pub fn new(inner: I) -> Self {
        Self {
            inner,
            line_number: 0,
        }
    }

    /// Number of the most recently returned line (0 before the first read)
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Read the next line, or `None` once the input is exhausted
    pub fn next_line(&mut self) -> Result<Option<String>> {
        match self.inner.next() {
            None => Ok(None),
            Some(Ok(line)) => {
                self.line_number += 1;
                Ok(Some(line))
            }
            Some(Err(e)) => Err(Error::io(
                format!("Failed to read line {}", self.line_number + 1),
                e,
            )),
        }
    }
}

impl<R: BufRead> NumberedLines<io::Lines<R>> {
    /// Read lines from any buffered reader
    pub fn from_reader(reader: R) -> Self {
        Self::new(reader.lines())
    }
}
