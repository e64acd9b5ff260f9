use super::{is_delimiter, TemplateSource};
use crate::error::{MadlibError, Result};
use crate::limits::{FIELD_MAX, LINE_MAX};
use std::io::{self, BufRead, Read};

/// [`TemplateSource`] over a buffered byte stream
///
/// Words longer than [`FIELD_MAX`] bytes are truncated. Lines longer than
/// [`LINE_MAX`] bytes fail with `LineTooLong`. Bytes are decoded lossily.
pub struct StreamReader<R> {
    inner: R,
    line: usize,
}

impl<R: BufRead> StreamReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, line: 0 }
    }

    fn peek(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(buf) => return Ok(buf.first().copied()),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    /// Consume the rest of the current line, newline included
    ///
    /// Returns the number of bytes consumed before the newline.
    fn drain_line(&mut self) -> io::Result<usize> {
        let mut drained = 0;
        loop {
            let (used, done) = match self.inner.fill_buf() {
                Ok([]) => return Ok(drained),
                Ok(buf) => match buf.iter().position(|&b| b == b'\n') {
                    Some(i) => (i + 1, true),
                    None => (buf.len(), false),
                },
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };
            self.inner.consume(used);
            if done {
                return Ok(drained + used - 1);
            }
            drained += used;
        }
    }

    fn skip_delimiters(&mut self) -> io::Result<()> {
        while let Some(byte) = self.peek()? {
            if !is_delimiter(byte) {
                break;
            }
            self.inner.consume(1);
        }
        Ok(())
    }
}

impl<R: BufRead> TemplateSource for StreamReader<R> {
    fn read_word(&mut self) -> Result<String> {
        self.skip_delimiters()?;

        let mut word = Vec::with_capacity(FIELD_MAX);
        let mut dropped = 0;
        while let Some(byte) = self.peek()? {
            if is_delimiter(byte) {
                // A word swallows exactly one trailing delimiter.
                self.inner.consume(1);
                break;
            }
            if word.len() < FIELD_MAX {
                word.push(byte);
            } else {
                dropped += 1;
            }
            self.inner.consume(1);
        }

        if dropped > 0 {
            tracing::debug!(kept = FIELD_MAX, dropped, "word truncated");
        }
        Ok(String::from_utf8_lossy(&word).into_owned())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        // One extra byte leaves room for the newline of a maximal line.
        let read = (&mut self.inner)
            .take(LINE_MAX as u64 + 1)
            .read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        self.line += 1;

        if buf.last() == Some(&b'\n') {
            buf.pop();
        } else if buf.len() > LINE_MAX {
            let len = buf.len() + self.drain_line()?;
            return Err(MadlibError::LineTooLong {
                line: self.line,
                len,
                max: LINE_MAX,
            });
        }

        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }

    fn line_number(&self) -> usize {
        self.line
    }
}
