//! Engine facade: loading, lookup and rendered hits.

use std::io::Write;

use crate::common::play_corpus;
use verso::{
    load_corpus, segment_complete_works, Analyzer, SearchEngine, SearchError, SnowballStemmer,
    StopWords,
};

fn corpus_json() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let json = serde_json::to_string(&play_corpus()).unwrap();
    file.write_all(json.as_bytes()).unwrap();
    file
}

#[test]
fn load_then_search() {
    let file = corpus_json();
    let docs = load_corpus(file.path()).unwrap();
    let engine = SearchEngine::new(docs, Analyzer::english());

    let hits = engine.search_hits("summer", true, 10);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].title, "Sonnet 18");
    assert!(hits[0].snippet.contains("<span class=\"hl\">summer</span>"));
}

#[test]
fn custom_stopwords_change_what_is_indexed() {
    let analyzer = Analyzer::new(
        StopWords::from_words(["sleep"]),
        Box::new(SnowballStemmer::english()),
    );
    let engine = SearchEngine::new(play_corpus(), analyzer);

    assert!(engine.query("sleep").is_empty());
    // "to" is no longer a stopword
    assert!(!engine.query("to").is_empty());
}

#[test]
fn unknown_document_is_distinct_from_empty_result() {
    let engine = SearchEngine::new(play_corpus(), Analyzer::english());
    assert!(engine.query("zebra").is_empty());
    assert!(matches!(
        engine.document("zebra"),
        Err(SearchError::DocumentNotFound(_))
    ));
}

#[test]
fn hits_serialize_to_json() {
    let engine = SearchEngine::new(play_corpus(), Analyzer::english());
    let hits = engine.search_hits("spot", false, 5);
    let json = serde_json::to_value(&hits).unwrap();
    assert_eq!(json[0]["id"], "2");
    assert_eq!(json[0]["title"], "Macbeth");
    assert_eq!(json[0]["tokens"][0], "spot");
    assert_eq!(json[0]["matches"], 1);
}

#[test]
fn complete_works_are_searchable_by_work() {
    let mut lines = vec!["preamble"; verso::corpus::PREAMBLE_LINES];
    lines.extend([
        "THE TEMPEST",
        "Dramatis Personæ",
        "We are such stuff as dreams are made on",
        "",
        "THE SONNETS",
        "Shall I compare thee to a summer's day?",
    ]);
    let docs = segment_complete_works(&lines.join("\r\n"));
    let engine = SearchEngine::new(docs, Analyzer::english());

    let hits = engine.search_hits("dreaming summer", true, 10);
    let titles: Vec<&str> = hits.iter().map(|h| h.title.as_str()).collect();
    assert_eq!(titles, vec!["THE TEMPEST", "THE SONNETS"]);
    assert_eq!(engine.document("2").unwrap().title, "THE SONNETS");
}
