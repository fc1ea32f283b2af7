// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inverted index construction.
//!
//! Built once from the whole corpus, then only ever read. Each document is
//! analyzed into its own term → occurrences map, and that map is appended to
//! the global one. Appending (never replacing) is what keeps every posting
//! list in document order, then left-to-right within a document.
//!
//! # INVARIANTS (DO NOT VIOLATE)
//!
//! 1. **NON_EMPTY**: every key has at least one occurrence
//! 2. **ORDERED**: occurrences follow document processing order, then text order
//! 3. **NO_DUPLICATES**: no (document_id, start, end) triple appears twice per term
//! 4. **WELL_FORMED**: `start < end` and `document_id` names an indexed document
//!
//! A document that fails validation (empty or repeated id) is logged and
//! skipped. It never touches entries merged for other documents.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use tracing::{info, warn};

use crate::analyzer::Analyzer;
use crate::error::{Result, SearchError};
use crate::types::{Document, Occurrence};

/// Term → occurrence list for a single document or the whole corpus.
pub type TermMap = HashMap<String, Vec<Occurrence>>;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvertedIndex {
    terms: TermMap,
    document_count: usize,
    occurrence_count: usize,
}

impl InvertedIndex {
    /// Occurrences of an analyzed term, in index order.
    pub fn get(&self, term: &str) -> Option<&[Occurrence]> {
        self.terms.get(term).map(Vec::as_slice)
    }

    pub fn contains(&self, term: &str) -> bool {
        self.terms.contains_key(term)
    }

    /// Number of distinct terms.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Documents that made it into the index.
    pub fn document_count(&self) -> usize {
        self.document_count
    }

    pub fn occurrence_count(&self) -> usize {
        self.occurrence_count
    }

    pub fn terms(&self) -> impl Iterator<Item = (&str, &[Occurrence])> {
        self.terms.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// The `n` most frequent terms, ties broken alphabetically.
    pub fn top_terms(&self, n: usize) -> Vec<(&str, usize)> {
        let mut counts: Vec<(&str, usize)> = self
            .terms
            .iter()
            .map(|(term, occurrences)| (term.as_str(), occurrences.len()))
            .collect();
        counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        counts.truncate(n);
        counts
    }

    /// Append a document's term map to the index.
    fn merge(&mut self, doc_terms: TermMap) {
        self.document_count += 1;
        for (term, occurrences) in doc_terms {
            self.occurrence_count += occurrences.len();
            self.terms.entry(term).or_default().extend(occurrences);
        }
    }
}

/// Analyze one document into its own term map.
pub fn document_term_map(document: &Document, analyzer: &Analyzer) -> TermMap {
    let mut doc_terms = TermMap::new();
    for token in analyzer.analyze(&document.text) {
        doc_terms
            .entry(token.value.clone())
            .or_default()
            .push(Occurrence::from_token(&document.id, token));
    }
    doc_terms
}

/// Reject documents the index cannot address.
fn validate_document(document: &Document, seen: &HashSet<&str>) -> Result<()> {
    if document.id.trim().is_empty() {
        return Err(SearchError::InvalidDocument {
            id: document.id.clone(),
            reason: "empty document id".to_string(),
        });
    }
    if seen.contains(document.id.as_str()) {
        return Err(SearchError::InvalidDocument {
            id: document.id.clone(),
            reason: "duplicate document id".to_string(),
        });
    }
    Ok(())
}

/// Documents that pass validation, in input order. Failures are logged.
fn accepted_documents(documents: &[Document]) -> Vec<&Document> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(documents.len());
    let mut accepted = Vec::with_capacity(documents.len());
    for document in documents {
        match validate_document(document, &seen) {
            Ok(()) => {
                seen.insert(document.id.as_str());
                accepted.push(document);
            }
            Err(e) => warn!(error = %e, "skipping document"),
        }
    }
    accepted
}

/// Build an inverted index from documents, one document at a time.
pub fn build_inverted_index(documents: &[Document], analyzer: &Analyzer) -> InvertedIndex {
    info!(documents = documents.len(), "analyzing documents");
    let mut index = InvertedIndex::default();
    for document in accepted_documents(documents) {
        index.merge(document_term_map(document, analyzer));
    }
    log_ready(&index);
    index
}

/// Build an inverted index using parallel map-reduce.
///
/// 1. **Map phase**: parallel analysis (one task per document)
/// 2. **Reduce phase**: serial merge in input order
///
/// The result is identical to [`build_inverted_index`].
#[cfg(feature = "parallel")]
pub fn build_inverted_index_parallel(documents: &[Document], analyzer: &Analyzer) -> InvertedIndex {
    info!(documents = documents.len(), "analyzing documents in parallel");
    let per_doc_terms: Vec<TermMap> = accepted_documents(documents)
        .par_iter()
        .map(|document| document_term_map(document, analyzer))
        .collect();

    let mut index = InvertedIndex::default();
    for doc_terms in per_doc_terms {
        index.merge(doc_terms);
    }
    log_ready(&index);
    index
}

#[cfg(not(feature = "parallel"))]
pub fn build_inverted_index_parallel(documents: &[Document], analyzer: &Analyzer) -> InvertedIndex {
    build_inverted_index(documents, analyzer)
}

fn log_ready(index: &InvertedIndex) {
    info!(
        documents = index.document_count(),
        terms = index.len(),
        occurrences = index.occurrence_count(),
        "index ready"
    );
}
