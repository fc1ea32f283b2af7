// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how query documents get sorted.
//!
//! Sort keys, both descending:
//!
//! 1. **Coverage** - number of distinct matched tokens
//! 2. **Frequency** - number of word refs
//!
//! Coverage dominates: a document hitting 3 query terms once each beats one
//! hitting 2 terms a hundred times. Fully tied documents keep their incoming
//! order (the sort is stable), which is what makes results reproducible.

use crate::types::QueryDocument;
use std::cmp::Ordering;

/// Compare two query documents for ranking. `Less` means `a` ranks first.
pub fn compare_query_documents(a: &QueryDocument, b: &QueryDocument) -> Ordering {
    b.tokens
        .len()
        .cmp(&a.tokens.len())
        .then_with(|| b.refs.len().cmp(&a.refs.len()))
}

/// Re-derive every document's tokens from its refs, then sort in place.
pub fn rank(query_docs: &mut [QueryDocument]) {
    for doc in query_docs.iter_mut() {
        doc.set_tokens();
    }
    // sort_by is stable
    query_docs.sort_by(compare_query_documents);
}
