//! Input reading for word lists and template lines
//!
//! The run driver only depends on [`TemplateSource`]; [`StreamReader`] is the
//! implementation used for real byte streams such as stdin.

mod stream;

pub use stream::StreamReader;

use crate::error::Result;

/// Source of words followed by template lines
pub trait TemplateSource {
    /// Read the next delimiter-separated word
    ///
    /// Returns an empty string once the stream is exhausted.
    fn read_word(&mut self) -> Result<String>;

    /// Read the next template line without its trailing newline
    ///
    /// Returns `None` at end of stream.
    fn read_line(&mut self) -> Result<Option<String>>;

    /// 1-based number of the last line returned by `read_line`
    fn line_number(&self) -> usize;
}

/// ASCII whitespace as accepted between words
pub(crate) fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}
