//! Test utilities for madlib
//!
//! This crate provides shared builders for the input streams fed to the
//! madlib core and binary in tests.

/// Words used by the canonical example story, in role order
pub const STORY_WORDS: [&str; 5] = ["dog", "cat", "jump", "big", "quickly"];

/// Template line of the canonical example story
pub const STORY_TEMPLATE: &str =
    "The <adjective> <noun1> will <verb> <adverb> over the <noun2>.";

/// Expected rendering of [`STORY_TEMPLATE`] with [`STORY_WORDS`]
pub const STORY_OUTPUT: &str = "The big dog will jump quickly over the cat.";

/// Builder for a complete input stream: a word list followed by template lines
///
/// # Examples
///
/// ```rust
/// use madlib_testkit::TemplateInput;
///
/// let input = TemplateInput::story().line("Hello <noun1>").build();
/// assert_eq!(input, "dog cat jump big quickly\nHello <noun1>\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TemplateInput {
    words: Vec<String>,
    lines: Vec<String>,
}

impl TemplateInput {
    /// Start from an explicit word list
    ///
    /// Fewer than five words is allowed so that missing-word handling can be
    /// exercised.
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            words: words.into_iter().map(Into::into).collect(),
            lines: Vec::new(),
        }
    }

    /// Start from [`STORY_WORDS`]
    pub fn story() -> Self {
        Self::with_words(STORY_WORDS)
    }

    /// Append one template line
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Append several template lines
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.lines.extend(lines.into_iter().map(Into::into));
        self
    }

    /// Render the stream: words on the first line, one template line per line
    pub fn build(&self) -> String {
        let mut out = self.words.join(" ");
        out.push('\n');
        for line in &self.lines {
            out.push_str(line);
            out.push('\n');
        }
        out
    }

    /// Same as [`build`](Self::build) as raw bytes
    pub fn to_bytes(&self) -> Vec<u8> {
        self.build().into_bytes()
    }
}

/// A line of exactly `len` bytes made of `fill`
pub fn line_of_len(len: usize, fill: char) -> String {
    assert!(fill.is_ascii(), "fill must be a single byte");
    fill.to_string().repeat(len)
}
