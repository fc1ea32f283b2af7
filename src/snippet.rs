// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Highlighted snippets for query results.
//!
//! Each word ref becomes a fragment: up to 40 bytes of context ending at the
//! word's end, the word wrapped in `<span class="hl">`, and 40 bytes after it.
//! Only the first 4 refs of any one token are shown so a common term can't
//! drown out the rest. Window edges are snapped to char boundaries.

use serde::Serialize;
use tracing::warn;

use crate::store::DocumentStore;
use crate::types::{Document, QueryDocument, WordRef};

const CONTEXT_BYTES: usize = 40;
const MAX_REFS_PER_TOKEN: usize = 4;
const SEPARATOR: &str = "...";

/// A rendered query result, ready to print or serialize.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchHit {
    pub id: String,
    pub title: String,
    /// Distinct matched tokens, in first-appearance order.
    pub tokens: Vec<String>,
    /// Number of word refs behind this hit.
    pub matches: usize,
    pub snippet: String,
}

/// Render the snippet text for one document's refs.
pub fn render_snippet(refs: &[WordRef], document: &Document) -> String {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    let mut out = String::new();

    for (i, word_ref) in refs.iter().enumerate() {
        let slot = match counts.iter().position(|(t, _)| *t == word_ref.token) {
            Some(slot) => slot,
            None => {
                counts.push((word_ref.token.as_str(), 0));
                counts.len() - 1
            }
        };
        if counts[slot].1 >= MAX_REFS_PER_TOKEN {
            continue;
        }
        counts[slot].1 += 1;

        let Some(fragment) = fragment(word_ref, &document.text) else {
            warn!(id = %document.id, start = word_ref.start, end = word_ref.end, "word ref outside text");
            continue;
        };
        if i > 0 {
            out.push(' ');
        }
        out.push_str(SEPARATOR);
        out.push_str(&fragment);
    }
    out.push(' ');
    out.push_str(SEPARATOR);
    out
}

fn fragment(word_ref: &WordRef, text: &str) -> Option<String> {
    let word = text.get(word_ref.start..word_ref.end)?;
    let from = ceil_boundary(text, word_ref.end.saturating_sub(CONTEXT_BYTES)).min(word_ref.start);
    let to = floor_boundary(text, (word_ref.end + CONTEXT_BYTES).min(text.len()));
    Some(format!(
        "{}<span class=\"hl\">{}</span>{}",
        &text[from..word_ref.start],
        word,
        &text[word_ref.end..to]
    ))
}

fn floor_boundary(text: &str, mut i: usize) -> usize {
    while !text.is_char_boundary(i) {
        i -= 1;
    }
    i
}

fn ceil_boundary(text: &str, mut i: usize) -> usize {
    while !text.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// Resolve ranked results against the store. Unknown ids are logged and skipped.
pub fn to_hits(results: &[QueryDocument], store: &DocumentStore) -> Vec<SearchHit> {
    results
        .iter()
        .filter_map(|result| match store.get(&result.document_id) {
            Ok(document) => Some(SearchHit {
                id: document.id.clone(),
                title: document.title.clone(),
                tokens: result.tokens.clone(),
                matches: result.refs.len(),
                snippet: render_snippet(&result.refs, document),
            }),
            Err(e) => {
                warn!(error = %e, "dropping result");
                None
            }
        })
        .collect()
}
