// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use std::net::SocketAddr;

use verso::server::{self, ServerConfig};
use verso::{
    load_complete_works, load_corpus, Analyzer, IdentityStemmer, SearchEngine, SnowballStemmer,
    Stemmer, StopWords,
};

mod cli;
use cli::display::{format_hits, format_index_summary};
use cli::{Cli, Commands, CorpusArgs, CorpusFormat, StemmerKind};

fn main() {
    init_tracing();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; `RUST_LOG` overrides the default `info` level.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Search {
            corpus,
            query,
            limit,
            sequential,
            json,
        } => {
            let engine = build_engine(&corpus)?;
            let hits = engine.search_hits(&query, !sequential, limit);
            if json {
                let out = serde_json::to_string_pretty(&hits).context("encoding results")?;
                println!("{}", out);
            } else {
                print!("{}", format_hits(&query, &hits));
            }
        }
        Commands::Inspect { corpus, top } => {
            let engine = build_engine(&corpus)?;
            print!("{}", format_index_summary(engine.index(), top));
        }
        Commands::Serve {
            corpus,
            host,
            port,
            static_dir,
            limit,
        } => {
            let engine = build_engine(&corpus)?;
            let config = ServerConfig {
                addr: SocketAddr::new(host, port),
                static_dir,
                default_limit: limit,
            };
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("starting async runtime")?;
            runtime.block_on(server::serve(engine, config))?;
        }
    }
    Ok(())
}

/// Everything that can fail at startup fails here, before any query runs.
fn build_engine(args: &CorpusArgs) -> Result<SearchEngine> {
    let stop_words = match &args.stopwords {
        Some(path) => StopWords::from_file(path).context("loading stopwords")?,
        None => StopWords::english(),
    };
    let stemmer: Box<dyn Stemmer> = match args.stemmer {
        StemmerKind::English => Box::new(SnowballStemmer::english()),
        StemmerKind::Identity => Box::new(IdentityStemmer),
    };
    let documents = match args.format {
        CorpusFormat::Json => load_corpus(&args.corpus),
        CorpusFormat::CompleteWorks => load_complete_works(&args.corpus),
    }
    .context("loading corpus")?;
    Ok(SearchEngine::new(documents, Analyzer::new(stop_words, stemmer)))
}
