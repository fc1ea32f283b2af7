// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The assembled engine: documents, analyzer and index, built once at startup.
//!
//! Nothing here is mutable after `new`, so a `SearchEngine` can be shared
//! behind an `Arc` (or a plain `&`) by any number of concurrent queries.

use crate::analyzer::Analyzer;
use crate::error::Result;
use crate::inverted::{build_inverted_index_parallel, InvertedIndex};
use crate::search::{query, query_concurrent};
use crate::snippet::{to_hits, SearchHit};
use crate::store::DocumentStore;
use crate::types::{Document, QueryDocument};

#[derive(Debug)]
pub struct SearchEngine {
    store: DocumentStore,
    analyzer: Analyzer,
    index: InvertedIndex,
}

impl SearchEngine {
    pub fn new(documents: Vec<Document>, analyzer: Analyzer) -> Self {
        let store = DocumentStore::new(documents);
        let index = build_inverted_index_parallel(store.all(), &analyzer);
        Self {
            store,
            analyzer,
            index,
        }
    }

    pub fn query(&self, search_term: &str) -> Vec<QueryDocument> {
        query(&self.index, &self.analyzer, search_term)
    }

    pub fn query_concurrent(&self, search_term: &str) -> Vec<QueryDocument> {
        query_concurrent(&self.index, &self.analyzer, search_term)
    }

    /// Query, then render the top `limit` results against the store.
    pub fn search_hits(&self, search_term: &str, concurrent: bool, limit: usize) -> Vec<SearchHit> {
        let mut results = if concurrent {
            self.query_concurrent(search_term)
        } else {
            self.query(search_term)
        };
        results.truncate(limit);
        to_hits(&results, &self.store)
    }

    pub fn document(&self, id: &str) -> Result<&Document> {
        self.store.get(id)
    }

    pub fn documents(&self) -> &[Document] {
        self.store.all()
    }

    pub fn index(&self) -> &InvertedIndex {
        &self.index
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }
}
