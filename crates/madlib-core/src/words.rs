//! Word roles and the validated set of words supplied for a run

use crate::error::{MadlibError, Result};
use crate::input::TemplateSource;
use std::fmt;

/// Grammatical role of a supplied word
///
/// Variant order is the substitution pass order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Noun1,
    Noun2,
    Verb,
    Adjective,
    Adverb,
}

impl Role {
    /// All roles in input and pass order
    pub const ALL: [Role; 5] = [
        Role::Noun1,
        Role::Noun2,
        Role::Verb,
        Role::Adjective,
        Role::Adverb,
    ];

    /// Literal token replaced by this role's word
    pub fn placeholder(self) -> &'static str {
        match self {
            Role::Noun1 => "<noun1>",
            Role::Noun2 => "<noun2>",
            Role::Verb => "<verb>",
            Role::Adjective => "<adjective>",
            Role::Adverb => "<adverb>",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Noun1 => "noun1",
            Role::Noun2 => "noun2",
            Role::Verb => "verb",
            Role::Adjective => "adjective",
            Role::Adverb => "adverb",
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Five non-empty words, one per [`Role`]
///
/// A `WordSet` can only be built through a validating constructor, so every
/// value holds a word for each role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSet {
    words: [String; 5],
}

impl WordSet {
    /// Build a word set from words given in role order
    ///
    /// # Errors
    ///
    /// Returns `MissingWord` naming the first empty role.
    pub fn new(words: [String; 5]) -> Result<Self> {
        if let Some(role) = Role::ALL
            .into_iter()
            .find(|role| words[role.index()].is_empty())
        {
            return Err(MadlibError::MissingWord { role });
        }
        Ok(Self { words })
    }

    /// Read five words from the front of a template source
    ///
    /// All five reads happen before validation, so an early end of stream
    /// shows up as empty trailing words.
    pub fn read_from<S: TemplateSource + ?Sized>(source: &mut S) -> Result<Self> {
        let words = [
            source.read_word()?,
            source.read_word()?,
            source.read_word()?,
            source.read_word()?,
            source.read_word()?,
        ];
        let set = Self::new(words).inspect_err(|e| tracing::debug!("{}", e))?;
        tracing::debug!(?set, "words read");
        Ok(set)
    }

    pub fn get(&self, role: Role) -> &str {
        &self.words[role.index()]
    }

    /// Iterate `(role, word)` pairs in pass order
    pub fn iter(&self) -> impl Iterator<Item = (Role, &str)> + '_ {
        Role::ALL.into_iter().map(move |role| (role, self.get(role)))
    }
}
