//! Fan-out queries must agree with per-word sequential queries.

use std::sync::Arc;
use std::thread;

use crate::common::{build, ids, play_corpus, triples};
use verso::{query, query_concurrent, Analyzer, SearchEngine};

#[test]
fn concurrent_equals_union_of_per_word_queries() {
    let analyzer = Analyzer::english();
    let index = build(&play_corpus(), &analyzer);

    for term in ["sleep dream", "out spot tis time", "thee summer day lovely", "nothing here"] {
        let concurrent = triples(&query_concurrent(&index, &analyzer, term));
        let mut expected = std::collections::BTreeSet::new();
        for word in term.split_whitespace() {
            expected.extend(triples(&query(&index, &analyzer, word)));
        }
        assert_eq!(concurrent, expected, "query '{}'", term);
    }
}

#[test]
fn concurrent_has_no_duplicate_refs() {
    let analyzer = Analyzer::english();
    let index = build(&play_corpus(), &analyzer);

    for doc in query_concurrent(&index, &analyzer, "dream dreams Dreaming sleep") {
        let total = doc.refs.len();
        let distinct: std::collections::HashSet<_> =
            doc.refs.iter().map(|r| (r.start, r.end)).collect();
        assert_eq!(total, distinct.len(), "duplicates in {}", doc.document_id);
    }
}

#[test]
fn concurrent_results_are_reproducible() {
    let analyzer = Analyzer::english();
    let index = build(&play_corpus(), &analyzer);

    let first = query_concurrent(&index, &analyzer, "tis sleep dream summer spot");
    for _ in 0..20 {
        assert_eq!(query_concurrent(&index, &analyzer, "tis sleep dream summer spot"), first);
    }
}

#[test]
fn concurrent_ranks_like_sequential_for_simple_queries() {
    let analyzer = Analyzer::english();
    let index = build(&play_corpus(), &analyzer);

    let sequential = query(&index, &analyzer, "sleep dream");
    let concurrent = query_concurrent(&index, &analyzer, "sleep dream");
    assert_eq!(ids(&sequential), ids(&concurrent));
}

#[test]
fn engine_serves_queries_from_many_threads() {
    let engine = Arc::new(SearchEngine::new(play_corpus(), Analyzer::english()));
    let expected = engine.query("sleep dream");

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let engine = Arc::clone(&engine);
            thread::spawn(move || {
                if i % 2 == 0 {
                    engine.query("sleep dream")
                } else {
                    engine.query_concurrent("sleep dream")
                }
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
