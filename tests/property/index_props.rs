//! Inverted index properties.

use std::collections::HashSet;

use proptest::prelude::*;
use verso::{build_inverted_index, build_inverted_index_parallel, Analyzer, Document};

fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "The", "quick", "Foxes", "fox", "jumping", "jumps", "a", "and", "river", "rivers",
        "42", "café", "Running", "ran", "the", "of",
    ])
    .prop_map(str::to_string)
}

fn corpus_strategy() -> impl Strategy<Value = Vec<Document>> {
    let doc = prop::collection::vec(word_strategy(), 0..12).prop_map(|words| words.join(", "));
    prop::collection::vec(doc, 1..6).prop_map(|texts| {
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Document::new(i.to_string(), format!("Doc {}", i), text))
            .collect()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// Property: every occurrence maps back to raw text that analyzes to its term.
    #[test]
    fn prop_occurrences_match_raw_text(corpus in corpus_strategy()) {
        let analyzer = Analyzer::english();
        let index = build_inverted_index(&corpus, &analyzer);

        for (term, occurrences) in index.terms() {
            prop_assert!(!occurrences.is_empty());
            let mut seen = HashSet::new();
            for occurrence in occurrences {
                prop_assert!(occurrence.start < occurrence.end);
                prop_assert_eq!(&occurrence.token, term);
                prop_assert!(seen.insert((occurrence.document_id.clone(), occurrence.start, occurrence.end)));
                let doc = corpus.iter().find(|d| d.id == occurrence.document_id).unwrap();
                let raw = &doc.text[occurrence.start..occurrence.end];
                prop_assert_eq!(analyzer.filter(raw), term);
            }
        }
    }

    /// Property: occurrence lists follow document order, then text order.
    #[test]
    fn prop_occurrences_are_ordered(corpus in corpus_strategy()) {
        let index = build_inverted_index(&corpus, &Analyzer::english());
        for (_, occurrences) in index.terms() {
            for pair in occurrences.windows(2) {
                let a: usize = pair[0].document_id.parse().unwrap();
                let b: usize = pair[1].document_id.parse().unwrap();
                prop_assert!(a < b || (a == b && pair[0].start < pair[1].start));
            }
        }
    }

    /// Property: building twice, or in parallel, gives the same index.
    #[test]
    fn prop_build_is_deterministic(corpus in corpus_strategy()) {
        let analyzer = Analyzer::english();
        let first = build_inverted_index(&corpus, &analyzer);
        prop_assert_eq!(&first, &build_inverted_index(&corpus, &analyzer));
        prop_assert_eq!(&first, &build_inverted_index_parallel(&corpus, &analyzer));
    }
}
