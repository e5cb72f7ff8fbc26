// SPDX-License-Identifier: MPL-2.0
//! Rotating word on the cover page ("you are my sunshine, soulmate, ...").

use crate::error::StoryError;

/// An ordered list of words with a wrapping index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordCycle {
    words: Vec<String>,
    index: usize,
}

impl WordCycle {
    /// Creates a cycle positioned on the first word.
    pub fn new(words: Vec<String>) -> Result<Self, StoryError> {
        if words.is_empty() {
            return Err(StoryError::EmptyCoverWords);
        }
        Ok(Self { words, index: 0 })
    }

    #[must_use]
    pub fn current(&self) -> &str {
        &self.words[self.index]
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false: construction rejects an empty list.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Moves to the next word, wrapping after the last one.
    pub fn advance(&mut self) -> &str {
        self.index = (self.index + 1) % self.words.len();
        self.current()
    }
}
