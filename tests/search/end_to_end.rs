//! Query behavior against small hand-checked corpora.

use crate::common::{build, fox_corpus, ids, make_doc, plain_analyzer, play_corpus};
use verso::{query, Analyzer};

#[test]
fn quick_fox_returns_both_documents_in_insertion_order() {
    let analyzer = plain_analyzer();
    let index = build(&fox_corpus(), &analyzer);

    let results = query(&index, &analyzer, "quick fox");

    assert_eq!(ids(&results), vec!["doc1", "doc2"]);
    for doc in &results {
        assert_eq!(doc.tokens, vec!["quick", "fox"]);
        assert_eq!(doc.refs.len(), 2);
    }
}

#[test]
fn word_refs_point_at_raw_text() {
    let analyzer = Analyzer::english();
    let docs = play_corpus();
    let index = build(&docs, &analyzer);

    for doc in query(&index, &analyzer, "dreams sleeping") {
        let text = &docs.iter().find(|d| d.id == doc.document_id).unwrap().text;
        for r in &doc.refs {
            let raw = &text[r.start..r.end];
            assert_eq!(analyzer.filter(raw), r.token, "ref {:?} in {}", r, doc.document_id);
        }
    }
}

#[test]
fn stemming_matches_inflected_forms() {
    let analyzer = Analyzer::english();
    let index = build(&play_corpus(), &analyzer);

    let results = query(&index, &analyzer, "dream");
    assert_eq!(ids(&results), vec!["5", "3"]);
    // "dream" and "dreams" in Act III, "dreams" in The Tempest
    assert_eq!(results[0].refs.len(), 2);
    assert_eq!(results[0].tokens, vec!["dream"]);
}

#[test]
fn coverage_outranks_frequency() {
    let analyzer = Analyzer::english();
    let index = build(&play_corpus(), &analyzer);

    let results = query(&index, &analyzer, "sleep dream tis");
    // Act III has both sleep and dream; Tempest has both too but fewer refs
    assert_eq!(&ids(&results)[..2], &["5", "3"]);
    assert_eq!(results[0].tokens.len(), 2);
    assert!(results.iter().skip(2).all(|d| d.tokens.len() == 1));
}

#[test]
fn stopword_only_query_is_empty() {
    let analyzer = Analyzer::english();
    let index = build(&play_corpus(), &analyzer);

    assert!(query(&index, &analyzer, "to be or not to be").is_empty());
    assert!(query(&index, &analyzer, "").is_empty());
    assert!(query(&index, &analyzer, "?!").is_empty());
}

#[test]
fn numbers_are_searchable() {
    let analyzer = plain_analyzer();
    let docs = vec![make_doc("a", "route 66 east"), make_doc("b", "catch-22")];
    let index = build(&docs, &analyzer);

    assert_eq!(ids(&query(&index, &analyzer, "66")), vec!["a"]);
    assert_eq!(ids(&query(&index, &analyzer, "22")), vec!["b"]);
}

#[test]
fn results_only_reference_indexed_documents() {
    let analyzer = Analyzer::english();
    let docs = play_corpus();
    let index = build(&docs, &analyzer);

    for term in ["sleep", "tis", "summer lovely", "spot out"] {
        for doc in query(&index, &analyzer, term) {
            assert!(docs.iter().any(|d| d.id == doc.document_id));
            assert!(!doc.tokens.is_empty());
        }
    }
}
