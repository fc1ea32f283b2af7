// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Plain-text rendering for CLI output.
//!
//! Results go to stdout; logs go to stderr, so piping `verso search` into
//! another tool only ever sees these lines.

use std::fmt::Write;

use verso::{InvertedIndex, SearchHit};

/// Strip highlight markup for terminals: `<span class="hl">fox</span>` → `[fox]`.
fn plain_snippet(snippet: &str) -> String {
    snippet
        .replace("<span class=\"hl\">", "[")
        .replace("</span>", "]")
        .replace(['\r', '\n'], " ")
}

pub fn format_hits(query: &str, hits: &[SearchHit]) -> String {
    let mut out = String::new();
    if hits.is_empty() {
        let _ = writeln!(out, "No documents match '{}'.", query);
        return out;
    }
    let _ = writeln!(out, "{} result(s) for '{}'", hits.len(), query);
    for (rank, hit) in hits.iter().enumerate() {
        let _ = writeln!(out);
        let _ = writeln!(
            out,
            "{:>3}. {} (id {}) │ {} term(s) │ {} match(es)",
            rank + 1,
            hit.title,
            hit.id,
            hit.tokens.len(),
            hit.matches
        );
        let _ = writeln!(out, "     terms: {}", hit.tokens.join(", "));
        let _ = writeln!(out, "     {}", plain_snippet(&hit.snippet));
    }
    out
}

pub fn format_index_summary(index: &InvertedIndex, top: usize) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} documents │ {} terms │ {} occurrences",
        index.document_count(),
        index.len(),
        index.occurrence_count()
    );
    let top_terms = index.top_terms(top);
    if !top_terms.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Most frequent terms:");
        let width = top_terms.iter().map(|(t, _)| t.chars().count()).max().unwrap_or(0);
        for (term, count) in top_terms {
            let _ = writeln!(out, "  {:<width$}  {}", term, count, width = width);
        }
    }
    out
}
