//! Line-oriented input parsing
//!
//! Every exercise reads a handful of lines: a count line followed by a line of
//! whitespace separated values, or raw text lines. [`InputReader`] tracks the
//! current line number so parse errors point at the offending line.

use crate::error::{Result, SnippetError};
use std::io::BufRead;
use std::str::FromStr;

/// Reads lines and typed tokens from any buffered source
#[derive(Debug)]
pub struct InputReader<R> {
    inner: R,
    line: usize,
}

impl<R: BufRead> InputReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line: 0 }
    }

    /// Number of lines consumed so far
    pub fn line_number(&self) -> usize {
        self.line
    }

    /// Read the next line without its trailing newline.
    ///
    /// `expected` names what the caller is reading and ends up in the
    /// end-of-input error.
    pub fn read_line(&mut self, expected: &str) -> Result<String> {
        let mut buf = String::new();
        let read = self.inner.read_line(&mut buf)?;
        if read == 0 {
            return Err(SnippetError::UnexpectedEof {
                expected: expected.to_string(),
            });
        }
        self.line += 1;

        if buf.ends_with('\n') {
            buf.pop();
            if buf.ends_with('\r') {
                buf.pop();
            }
        }
        Ok(buf)
    }

    /// Read a line and parse every whitespace separated token.
    pub fn read_tokens<T: FromStr>(&mut self, expected: &str) -> Result<Vec<T>> {
        let line = self.read_line(expected)?;
        parse_tokens(&line, self.line)
    }

    /// Read a line that must hold exactly `count` tokens.
    pub fn read_exact<T: FromStr>(&mut self, count: usize, expected: &str) -> Result<Vec<T>> {
        let values = self.read_tokens(expected)?;
        if values.len() != count {
            return Err(SnippetError::CountMismatch {
                expected: count,
                found: values.len(),
                line: self.line,
            });
        }
        Ok(values)
    }

    /// Read a line holding a single non-negative count.
    pub fn read_count(&mut self, expected: &str) -> Result<usize> {
        let mut values = self.read_exact::<usize>(1, expected)?;
        values.pop().ok_or(SnippetError::CountMismatch {
            expected: 1,
            found: 0,
            line: self.line,
        })
    }
}

fn parse_tokens<T: FromStr>(line: &str, line_number: usize) -> Result<Vec<T>> {
    line.split_whitespace()
        .map(|token| {
            token.parse::<T>().map_err(|_| SnippetError::InvalidNumber {
                token: token.to_string(),
                line: line_number,
            })
        })
        .collect()
}
