// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! In-memory full-text search over a fixed corpus.
//!
//! Documents are tokenized, normalized and folded into an inverted index once
//! at startup. Queries go through the same analyzer, look up each term, group
//! occurrences per document and rank by term coverage, then occurrence count.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │ tokenizer.rs│────▶│  analyzer/   │────▶│  inverted.rs │
//! │ (alnum runs,│     │ (lowercase,  │     │ (term → occ- │
//! │  offsets)   │     │ stop, stem)  │     │  urrences)   │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                            │                     │
//!                            ▼                     ▼
//!                     ┌──────────────┐     ┌──────────────┐
//!                     │  search.rs   │────▶│  scoring/    │
//!                     │ (sequential, │     │  (rank)      │
//!                     │  fan-out)    │     │              │
//!                     └──────────────┘     └──────────────┘
//! ```
//!
//! `store`, `corpus`, `snippet` and `engine` sit around the core: loading a
//! corpus, resolving ids and rendering highlighted results. `server` puts the
//! engine behind `GET /search`.
//!
//! # Usage
//!
//! ```
//! use verso::{Analyzer, Document, SearchEngine};
//!
//! let docs = vec![
//!     Document::new("1", "One", "the quick fox jumps"),
//!     Document::new("2", "Two", "a quick brown fox"),
//! ];
//! let engine = SearchEngine::new(docs, Analyzer::english());
//!
//! let results = engine.query_concurrent("quick foxes");
//! assert_eq!(results.len(), 2);
//! assert_eq!(results[0].tokens, vec!["quick", "fox"]);
//! ```

// Module declarations
pub mod analyzer;
pub mod corpus;
pub mod engine;
pub mod error;
mod inverted;
pub mod scoring;
mod search;
pub mod server;
pub mod snippet;
mod store;
pub mod testing;
mod tokenizer;
mod types;

// Re-exports for public API
pub use analyzer::{Analyzer, IdentityStemmer, SnowballStemmer, Stemmer, StopWords};
pub use corpus::{load_complete_works, load_corpus, segment_complete_works};
pub use engine::SearchEngine;
pub use error::{Result, SearchError};
pub use inverted::{
    build_inverted_index, build_inverted_index_parallel, document_term_map, InvertedIndex, TermMap,
};
pub use scoring::{compare_query_documents, rank};
pub use search::{merge_query_documents, query, query_concurrent};
pub use snippet::{render_snippet, to_hits, SearchHit};
pub use store::DocumentStore;
pub use tokenizer::{split_words, tokenize};
pub use types::{Document, Occurrence, QueryDocument, Token, WordRef};
