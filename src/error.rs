// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy.
//!
//! Setup failures (stopwords, corpus, binding the listener) are fatal to the
//! caller. `InvalidDocument` is raised per document during indexing and only
//! ever logged and skipped.
//! Queries have no error type: an empty result is a successful answer.

use std::net::SocketAddr;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("failed to read stopwords from {}: {source}", path.display())]
    StopWordsUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read corpus from {}: {source}", path.display())]
    CorpusUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid corpus JSON in {}: {source}", path.display())]
    CorpusMalformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("corpus contains no documents")]
    EmptyCorpus,

    #[error("document '{id}' rejected: {reason}")]
    InvalidDocument { id: String, reason: String },

    #[error("Document with id '{0}' not found.")]
    DocumentNotFound(String),

    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    #[error("server stopped: {0}")]
    Serve(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SearchError>;
