// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of indexing and querying.
//!
//! Documents come from outside and never change. Everything else in here is
//! derived from them: tokens while analyzing, occurrences in the inverted index,
//! word refs and query documents per query.
//!
//! # Offsets
//!
//! Every `start`/`end` pair is a half-open byte range into the *original*
//! `Document::text`, never into the filtered token value. A stemmed token may be
//! shorter than the text it came from; the range still covers the raw word, so
//! `&document.text[start..end]` is always the word the user should see highlighted.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Token / Occurrence / WordRef**: `start < end ≤ text.len()`, both on char boundaries.
//! - **Occurrence**: `document_id` names a document that was indexed.
//! - **QueryDocument**: `tokens` is exactly the distinct `refs[..].token` values in
//!   first-appearance order. Call [`QueryDocument::set_tokens`] after touching `refs`.

use serde::{Deserialize, Serialize};

/// A document as supplied by the corpus loader.
///
/// Immutable once loaded; `text` is the coordinate system for all positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub title: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Positional token within a text.
///
/// `value` is the filtered string; `start`/`end` locate the unfiltered word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Token {
    pub value: String,
    pub start: usize,
    pub end: usize,
}

/// One occurrence of a normalized token in a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Occurrence {
    pub document_id: String,
    pub token: String,
    pub start: usize,
    pub end: usize,
}

impl Occurrence {
    pub fn from_token(document_id: &str, token: Token) -> Self {
        Self {
            document_id: document_id.to_string(),
            token: token.value,
            start: token.start,
            end: token.end,
        }
    }

    /// The document-scoped view handed to the presentation layer.
    pub fn word_ref(&self) -> WordRef {
        WordRef {
            token: self.token.clone(),
            start: self.start,
            end: self.end,
        }
    }
}

/// A matched word inside one document's text. Use it for highlighting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct WordRef {
    pub token: String,
    pub start: usize,
    pub end: usize,
}

/// Per-document aggregate returned by a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryDocument {
    pub document_id: String,
    pub refs: Vec<WordRef>,
    pub tokens: Vec<String>,
}

impl QueryDocument {
    pub fn new(document_id: impl Into<String>, refs: Vec<WordRef>) -> Self {
        let mut doc = Self {
            document_id: document_id.into(),
            refs,
            tokens: Vec::new(),
        };
        doc.set_tokens();
        doc
    }

    /// Re-derive `tokens` from `refs`: distinct values, first appearance wins.
    pub fn set_tokens(&mut self) {
        let mut tokens: Vec<String> = Vec::new();
        for word_ref in &self.refs {
            if !tokens.iter().any(|t| *t == word_ref.token) {
                tokens.push(word_ref.token.clone());
            }
        }
        self.tokens = tokens;
    }
}
