//! Substitution engine implementation

mod validate;

pub use validate::validate_line;

use crate::error::Result;
use crate::words::{Role, WordSet};

/// Replace every occurrence of `placeholder` in `line` with `word`
///
/// Scanning is left to right and resumes after each replaced occurrence, so
/// text introduced by `word` is never matched again. An empty placeholder
/// matches nothing.
pub fn replace(line: &str, word: &str, placeholder: &str) -> String {
    if placeholder.is_empty() {
        return line.to_string();
    }

    let mut output = String::with_capacity(line.len());
    let mut rest = line;
    while let Some(start) = rest.find(placeholder) {
        output.push_str(&rest[..start]);
        output.push_str(word);
        rest = &rest[start + placeholder.len()..];
    }
    output.push_str(rest);
    output
}

/// Earliest placeholder in `text`, with its byte offset
///
/// No placeholder is a prefix of another, so offsets never tie.
fn next_placeholder(text: &str) -> Option<(usize, Role)> {
    Role::ALL
        .into_iter()
        .filter_map(|role| text.find(role.placeholder()).map(|pos| (pos, role)))
        .min_by_key(|&(pos, _)| pos)
}

/// Applies a [`WordSet`] to template lines
pub struct Substituter<'a> {
    words: &'a WordSet,
}

impl<'a> Substituter<'a> {
    pub fn new(words: &'a WordSet) -> Self {
        Self { words }
    }

    /// Replace every placeholder in `line` with its role's word
    ///
    /// Equivalent to one [`replace`] pass per role in pass order, except that
    /// inserted words are never seen by a later pass: the line is scanned
    /// once, left to right, and each word is copied in verbatim.
    pub fn substitute(&self, line: &str) -> String {
        let mut output = String::with_capacity(line.len());
        let mut rest = line;
        while let Some((start, role)) = next_placeholder(rest) {
            output.push_str(&rest[..start]);
            output.push_str(self.words.get(role));
            rest = &rest[start + role.placeholder().len()..];
        }
        output.push_str(rest);
        output
    }

    /// Substitute and validate a single template line
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The substituted line is longer than `OUTPUT_MAX` bytes
    /// - The substituted line still contains a `<`
    pub fn render_line(&self, line: &str, line_no: usize) -> Result<String> {
        let rendered = self.substitute(line);
        validate_line(&rendered, line_no)?;
        Ok(rendered)
    }
}

#[cfg(test)]
mod tests;
