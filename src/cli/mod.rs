// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the verso command-line interface.
//!
//! Three subcommands: `search` to query a corpus, `inspect` to look at the
//! index it produces, and `serve` to answer queries over HTTP. All of them
//! build the index in memory on every run; there is nothing on disk to keep
//! in sync.

pub mod display;

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::net::IpAddr;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "verso",
    about = "In-memory full-text search over a document corpus",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search the corpus and display ranked results
    Search {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Search query
        query: String,

        /// Maximum number of results to return
        #[arg(short, long, default_value = "10")]
        limit: usize,

        /// Run the query in one pass instead of one task per word
        #[arg(long)]
        sequential: bool,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show document, term and occurrence counts for the corpus index
    Inspect {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Number of most frequent terms to list
        #[arg(long, default_value = "20")]
        top: usize,
    },

    /// Serve GET /search?q= over HTTP
    Serve {
        #[command(flatten)]
        corpus: CorpusArgs,

        /// Address to bind
        #[arg(long, default_value = "0.0.0.0")]
        host: IpAddr,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = verso::server::DEFAULT_PORT)]
        port: u16,

        /// Directory served for every path other than /search
        #[arg(long = "static", value_name = "DIR")]
        static_dir: Option<PathBuf>,

        /// Maximum results per request (default: all matches)
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Where the documents come from and how they are analyzed.
#[derive(Args)]
pub struct CorpusArgs {
    /// Corpus file: a JSON array of {id, title, text} or a complete-works text
    #[arg(short, long)]
    pub corpus: PathBuf,

    /// How to read the corpus file
    #[arg(short, long, value_enum, default_value_t = CorpusFormat::Json)]
    pub format: CorpusFormat,

    /// Newline-separated stopword file (defaults to the built-in English list)
    #[arg(short, long)]
    pub stopwords: Option<PathBuf>,

    /// Stemming algorithm
    #[arg(long, value_enum, default_value_t = StemmerKind::English)]
    pub stemmer: StemmerKind,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CorpusFormat {
    /// JSON array of documents
    Json,
    /// One CRLF text file, split into a document per work
    CompleteWorks,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StemmerKind {
    /// Snowball English (Porter2)
    English,
    /// No stemming
    #[value(name = "none")]
    Identity,
}
