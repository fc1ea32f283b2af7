// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stopword sets.
//!
//! Words too common to be worth indexing ("the", "and", ...). The analyzer
//! only asks for membership, and always with an already lower-cased word, so
//! every entry is lower-cased on the way in.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::error::{Result, SearchError};

/// Default English list, one word per line.
const ENGLISH: &str = include_str!("../../data/stopwords_en.txt");

#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    /// Build a set from any list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|w| w.as_ref().trim().to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();
        Self { words }
    }

    /// Parse a newline-separated list. Blank lines are ignored.
    pub fn parse(list: &str) -> Self {
        Self::from_words(list.lines())
    }

    /// Read a newline-separated stopword file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let list = fs::read_to_string(path).map_err(|source| SearchError::StopWordsUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&list))
    }

    /// The embedded English list.
    pub fn english() -> Self {
        Self::parse(ENGLISH)
    }

    #[inline]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
