// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stemming backends.
//!
//! Stemming folds morphological variants onto one form ("jumps", "jumping" →
//! "jump") so a query for one finds the others. The algorithm itself is not
//! ours: English uses the Snowball (Porter2) implementation from
//! `rust-stemmers`. Anything pure and deterministic can plug in here.

use rust_stemmers::Algorithm;

/// A pure word → stem function, shared across query threads.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;

    /// Short name for logs.
    fn name(&self) -> &'static str;
}

/// Snowball English stemmer.
pub struct SnowballStemmer {
    inner: rust_stemmers::Stemmer,
}

impl SnowballStemmer {
    pub fn english() -> Self {
        Self {
            inner: rust_stemmers::Stemmer::create(Algorithm::English),
        }
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::english()
    }
}

impl Stemmer for SnowballStemmer {
    fn stem(&self, word: &str) -> String {
        self.inner.stem(word).into_owned()
    }

    fn name(&self) -> &'static str {
        "snowball-english"
    }
}

/// Leaves words untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityStemmer;

impl Stemmer for IdentityStemmer {
    fn stem(&self, word: &str) -> String {
        word.to_string()
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}
