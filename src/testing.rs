//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical fixtures to avoid duplication.

#![doc(hidden)]

use crate::analyzer::{Analyzer, IdentityStemmer, StopWords};
use crate::types::{Document, QueryDocument, WordRef};

/// Lower-case + {"the", "a"} stopwords + no stemming.
///
/// Keeps expected tokens readable in assertions.
pub fn plain_analyzer() -> Analyzer {
    Analyzer::new(StopWords::from_words(["the", "a"]), Box::new(IdentityStemmer))
}

/// The two-document corpus used throughout the tests.
pub fn fox_corpus() -> Vec<Document> {
    vec![
        Document::new("doc1", "First", "the quick fox jumps"),
        Document::new("doc2", "Second", "a quick brown fox"),
    ]
}

/// Create a test document with a generated title.
pub fn make_doc(id: &str, text: &str) -> Document {
    Document::new(id, format!("Title {}", id), text)
}

/// Build a query document from `(token, start)` pairs.
pub fn make_query_doc(id: &str, refs: &[(&str, usize)]) -> QueryDocument {
    QueryDocument::new(
        id,
        refs.iter()
            .map(|(token, start)| WordRef {
                token: token.to_string(),
                start: *start,
                end: start + token.len(),
            })
            .collect(),
    )
}
