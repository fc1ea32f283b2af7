// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The analyzer pipeline: what a raw word turns into before it hits the index.
//!
//! Three filters, always in this order:
//!
//! 1. lower-case
//! 2. stopword removal (empty output = drop the word)
//! 3. stemming
//!
//! The same `Analyzer` instance analyzes documents at build time and queries at
//! search time, so both sides agree on what a term is. It holds no mutable
//! state and is shared by reference across query threads.

mod stemmer;
mod stopwords;

pub use stemmer::{IdentityStemmer, SnowballStemmer, Stemmer};
pub use stopwords::StopWords;

use tracing::info;

use crate::tokenizer::tokenize;
use crate::types::Token;

pub struct Analyzer {
    stop_words: StopWords,
    stemmer: Box<dyn Stemmer>,
}

impl Analyzer {
    pub fn new(stop_words: StopWords, stemmer: Box<dyn Stemmer>) -> Self {
        info!(
            stop_words = stop_words.len(),
            stemmer = stemmer.name(),
            "analyzer ready"
        );
        Self {
            stop_words,
            stemmer,
        }
    }

    /// Embedded English stopwords + Snowball English stemmer.
    pub fn english() -> Self {
        Self::new(StopWords::english(), Box::new(SnowballStemmer::english()))
    }

    /// Run one raw word through the pipeline. Empty result means "discard".
    pub fn filter(&self, word: &str) -> String {
        let lower = word.to_lowercase();
        if lower.is_empty() || self.stop_words.contains(&lower) {
            return String::new();
        }
        self.stemmer.stem(&lower)
    }

    /// Tokenize `text` and filter every word.
    pub fn analyze(&self, text: &str) -> Vec<Token> {
        tokenize(text, |word| self.filter(word))
    }

    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }

    pub fn stemmer_name(&self) -> &'static str {
        self.stemmer.name()
    }
}

impl std::fmt::Debug for Analyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Analyzer")
            .field("stop_words", &self.stop_words.len())
            .field("stemmer", &self.stemmer.name())
            .finish()
    }
}
