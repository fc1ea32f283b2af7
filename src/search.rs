// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query execution: sequential and fan-out/merge.
//!
//! # Sequential
//!
//! ```text
//! "Quick foxes" ──analyze──▶ [quick, fox] ──dedup──▶ lookup each
//!                                                        │
//!        ranked ◀──rank── QueryDocument per doc ◀──group─┘
//! ```
//!
//! # Concurrent
//!
//! The raw query is split into words *before* any normalization. Every word
//! runs the full sequential path on its own task, results land in a vector
//! indexed by word position, and the vector is left-folded with
//! [`merge_query_documents`] before one final ranking. Because the fold follows
//! word order and not completion order, the output is reproducible.
//!
//! Missing terms and empty queries are not errors; they produce fewer (or no)
//! results.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use std::collections::{HashMap, HashSet};
use std::fmt::Write;
use tracing::debug;

use crate::analyzer::Analyzer;
use crate::inverted::InvertedIndex;
use crate::scoring::rank;
use crate::tokenizer::split_words;
use crate::types::{Occurrence, QueryDocument, WordRef};

/// Run `search_term` through the analyzer and look up every distinct term.
pub fn query(index: &InvertedIndex, analyzer: &Analyzer, search_term: &str) -> Vec<QueryDocument> {
    let search_tokens = analyzer.analyze(search_term);

    let mut handled: HashSet<&str> = HashSet::with_capacity(search_tokens.len());
    let mut matched: Vec<&Occurrence> = Vec::new();
    let mut summary = String::new();

    for token in &search_tokens {
        if !handled.insert(token.value.as_str()) {
            continue;
        }
        let Some(occurrences) = index.get(&token.value) else {
            continue;
        };
        let _ = write!(summary, " {}/{}", token.value, occurrences.len());
        matched.extend(occurrences);
    }
    debug!(search_term, hits = %summary, "index search");

    let mut query_docs = group_by_document(matched);
    rank(&mut query_docs);
    query_docs
}

/// Split `search_term` into raw words and query each on its own task.
pub fn query_concurrent(
    index: &InvertedIndex,
    analyzer: &Analyzer,
    search_term: &str,
) -> Vec<QueryDocument> {
    let words: Vec<String> = split_words(search_term)
        .into_iter()
        .map(|token| token.value)
        .collect();

    let per_word = fan_out(index, analyzer, &words);

    let mut query_docs = per_word
        .into_iter()
        .fold(Vec::new(), merge_query_documents);
    rank(&mut query_docs);
    query_docs
}

/// One sequential query per word; slot `i` holds the result for `words[i]`.
#[cfg(feature = "parallel")]
fn fan_out(index: &InvertedIndex, analyzer: &Analyzer, words: &[String]) -> Vec<Vec<QueryDocument>> {
    words
        .par_iter()
        .with_max_len(1)
        .map(|word| query(index, analyzer, word))
        .collect()
}

#[cfg(not(feature = "parallel"))]
fn fan_out(index: &InvertedIndex, analyzer: &Analyzer, words: &[String]) -> Vec<Vec<QueryDocument>> {
    words
        .iter()
        .map(|word| query(index, analyzer, word))
        .collect()
}

/// Merge two query results.
///
/// Left documents keep their positions; right-only documents are appended in
/// their own order. A document on both sides gets the left refs followed by
/// the right refs. A span already present on the left is not added twice, so
/// words normalizing to the same term ("Fox foxes") don't double count.
pub fn merge_query_documents(
    left: Vec<QueryDocument>,
    right: Vec<QueryDocument>,
) -> Vec<QueryDocument> {
    let mut merged = left;
    let mut positions: HashMap<String, usize> = merged
        .iter()
        .enumerate()
        .map(|(i, doc)| (doc.document_id.clone(), i))
        .collect();

    for doc in right {
        match positions.get(&doc.document_id) {
            Some(&i) => {
                let existing = &mut merged[i];
                let mut spans: HashSet<(usize, usize)> =
                    existing.refs.iter().map(|r| (r.start, r.end)).collect();
                for word_ref in doc.refs {
                    if spans.insert((word_ref.start, word_ref.end)) {
                        existing.refs.push(word_ref);
                    }
                }
                existing.set_tokens();
            }
            None => {
                positions.insert(doc.document_id.clone(), merged.len());
                merged.push(doc);
            }
        }
    }
    merged
}

/// Group occurrences into per-document results, in first-seen document order.
fn group_by_document(occurrences: Vec<&Occurrence>) -> Vec<QueryDocument> {
    let mut builders: Vec<(&str, Vec<WordRef>)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();

    for occurrence in occurrences {
        let id = occurrence.document_id.as_str();
        let i = *positions.entry(id).or_insert_with(|| {
            builders.push((id, Vec::new()));
            builders.len() - 1
        });
        builders[i].1.push(occurrence.word_ref());
    }

    builders
        .into_iter()
        .map(|(id, refs)| QueryDocument::new(id, refs))
        .collect()
}
