// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus loading.
//!
//! Two sources are understood:
//!
//! - a JSON array of `{ "id", "title", "text" }` objects;
//! - a single plain-text "complete works" file with CRLF line endings, cut into
//!   one document per work by [`segment_complete_works`].
//!
//! Any failure here is a setup failure: the caller should not start serving.

use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::{debug, info};

use crate::error::{Result, SearchError};
use crate::types::Document;

/// Read and parse a corpus file.
pub fn load_corpus(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SearchError::CorpusUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let documents = parse_corpus(&content).map_err(|source| SearchError::CorpusMalformed {
        path: path.to_path_buf(),
        source,
    })?;
    if documents.is_empty() {
        return Err(SearchError::EmptyCorpus);
    }
    info!(path = %path.display(), documents = documents.len(), "corpus loaded");
    Ok(documents)
}

fn parse_corpus(content: &str) -> std::result::Result<Vec<Document>, serde_json::Error> {
    serde_json::from_str(content)
}

/// Lines before this are the collection's own table of contents.
pub const PREAMBLE_LINES: usize = 133;

/// Works that open with their bare title instead of a contents or
/// dramatis personae heading. Matched against the untrimmed line.
const POEM_TITLES: [&str; 6] = [
    "THE SONNETS",
    "A LOVER’S COMPLAINT",
    "THE PASSIONATE PILGRIM",
    "THE PHOENIX AND THE TURTLE",
    "THE RAPE OF LUCRECE",
    "VENUS AND ADONIS",
];

static SECTION_HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(contents|.*dramatis.person.*)$").expect("section heading pattern is valid")
});

/// Start of one work: where its title block begins and where its text does.
#[derive(Debug)]
struct Marker<'a> {
    title: &'a str,
    start: usize,
    text_start: usize,
}

/// Read a complete-works text file and cut it into documents.
pub fn load_complete_works(path: impl AsRef<Path>) -> Result<Vec<Document>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SearchError::CorpusUnreadable {
        path: path.to_path_buf(),
        source,
    })?;
    let documents = segment_complete_works(&content);
    if documents.is_empty() {
        return Err(SearchError::EmptyCorpus);
    }
    info!(path = %path.display(), documents = documents.len(), "complete works segmented");
    Ok(documents)
}

/// Split a complete-works text into one document per work.
///
/// After the first [`PREAMBLE_LINES`] lines, a work starts at either
///
/// - a line ending in "contents" or containing "dramatis personae" (any case),
///   when the last non-empty line before it is all upper case. That line is
///   the title.
/// - a line that is exactly one of the poem titles.
///
/// Ids are `"1"`, `"2"`, ... in file order. A work's text starts on the line
/// after its heading and stops just before the CRLF that precedes the next
/// heading; the last work runs to the end of the file. Offsets are bytes and
/// always fall on line boundaries.
pub fn segment_complete_works(text: &str) -> Vec<Document> {
    segment(text, PREAMBLE_LINES)
}

fn segment(text: &str, preamble: usize) -> Vec<Document> {
    let markers = find_markers(text, preamble);
    debug!(works = markers.len(), "section markers found");

    markers
        .iter()
        .enumerate()
        .map(|(i, marker)| {
            let end = markers
                .get(i + 1)
                .map_or(text.len(), |next| next.start.saturating_sub(2));
            let start = marker.text_start.min(text.len());
            let end = end.clamp(start, text.len());
            Document::new((i + 1).to_string(), marker.title, &text[start..end])
        })
        .collect()
}

fn find_markers(text: &str, preamble: usize) -> Vec<Marker<'_>> {
    let mut markers = Vec::new();
    let mut previous = "";
    let mut pos = 0;

    for (i, line) in text.split("\r\n").enumerate() {
        let next_line = pos + line.len() + 2;
        if i >= preamble {
            let trimmed = line.trim();
            if SECTION_HEADING.is_match(trimmed) && !previous.is_empty() && is_upper(previous) {
                markers.push(Marker {
                    title: previous,
                    start: pos,
                    text_start: next_line,
                });
            } else if POEM_TITLES.contains(&line) {
                markers.push(Marker {
                    title: trimmed,
                    start: pos,
                    text_start: next_line,
                });
            } else if !line.is_empty() {
                previous = trimmed;
            }
        }
        pos = next_line;
    }
    markers
}

/// Every letter is upper case. Digits and punctuation don't count either way.
fn is_upper(s: &str) -> bool {
    s.chars().filter(|c| c.is_alphabetic()).all(char::is_uppercase)
}
