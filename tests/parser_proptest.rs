//! Property-based tests for the parser
//!
//! Generated documents are built from the notation's own grammar, so every
//! one of them must parse. Structural equality is checked through the `sexp`
//! rendering, which ignores spans and spacing.

use conlang::conlang::formats::{to_conlang, to_sexp};
use conlang::conlang::lexing::tokenize;
use conlang::conlang::parsing::parse_reference;
use conlang::parse_document;
use proptest::prelude::*;

fn prefix_strategy() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,4}"
}

fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z_][a-zA-Z0-9_]{0,6}",
        // Words that start like numbers
        "[0-9]{1,2}[a-df-z][a-z]{0,3}",
        "[a-z]{1,3}-[a-z0-9]{1,3}",
    ]
}

/// Text like `1.5x`: a number cut short by a stop, then a word
fn number_led_word_strategy() -> impl Strategy<Value = String> {
    "[+-]?[0-9]{1,3}\\.[0-9]{1,2}([eE][0-9])?[a-df-z]{1,3}"
}

fn number_strategy() -> impl Strategy<Value = String> {
    "[+-]?[0-9]{1,4}(\\.[0-9]{1,3})?([eE][+-]?[0-9]{1,2})?"
}

/// Optional whitespace around delimiters and before the stop
fn gap_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(""), Just(" "), Just("  "), Just("\n  ")].prop_map(String::from)
}

/// Required whitespace between complement tails
fn space_strategy() -> impl Strategy<Value = String> {
    prop_oneof![Just(" "), Just("\n"), Just(" \t ")].prop_map(String::from)
}

fn term_strategy() -> impl Strategy<Value = String> {
    let atom = prop_oneof![word_strategy(), number_strategy()];
    atom.prop_recursive(3, 24, 3, |inner| {
        (
            prefix_strategy(),
            inner.clone(),
            prop::collection::vec((space_strategy(), inner), 0..3),
        )
            .prop_map(|(prefix, head, tails)| {
                let mut text = format!("{}:{}", prefix, head);
                for (space, tail) in tails {
                    text.push_str(&format!("{}{}:{}", space, prefix, tail));
                }
                text
            })
    })
}

fn value_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        term_strategy(),
        (
            prop::sample::select(vec![',', ';']),
            prop::collection::vec((gap_strategy(), term_strategy(), gap_strategy()), 2..5),
        )
            .prop_map(|(delimiter, elements)| {
                elements
                    .into_iter()
                    .map(|(before, term, after)| format!("{}{}{}", before, term, after))
                    .collect::<Vec<_>>()
                    .join(&delimiter.to_string())
            }),
    ]
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec((value_strategy(), gap_strategy()), 0..4).prop_map(|sentences| {
        sentences
            .into_iter()
            .map(|(value, gap)| format!("{}{}.", value, gap))
            .collect::<Vec<_>>()
            .join("\n")
    })
}

/// Short strings over the characters that matter to the grammar
fn noise_strategy() -> impl Strategy<Value = String> {
    "[ab0-9xe+.:,; \n'-]{0,24}"
}

proptest! {
    #[test]
    fn test_generated_documents_parse(source in document_strategy()) {
        let result = parse_document(&source);
        prop_assert!(result.is_ok(), "{:?}: {:?}", source, result.err());
    }

    #[test]
    fn test_canonical_text_reparses_to_same_tree(source in document_strategy()) {
        let doc = parse_document(&source).unwrap();
        let canonical = to_conlang(&doc);
        let reparsed = parse_document(&canonical).unwrap();
        prop_assert_eq!(to_sexp(&doc), to_sexp(&reparsed), "canonical: {:?}", canonical);
    }

    #[test]
    fn test_reference_parser_agrees_on_generated(source in document_strategy()) {
        let ours = parse_document(&source).unwrap();
        let reference = parse_reference(&source);
        prop_assert!(reference.is_ok(), "{:?}", source);
        prop_assert_eq!(to_sexp(&ours), to_sexp(&reference.unwrap()));
    }

    #[test]
    fn test_number_led_words_split_at_the_stop(
        chunks in prop::collection::vec((number_led_word_strategy(), gap_strategy()), 1..4)
    ) {
        let source: String = chunks
            .iter()
            .map(|(chunk, gap)| format!("{}{}.", chunk, gap))
            .collect::<Vec<_>>()
            .join(" ");
        let doc = parse_document(&source).unwrap();
        prop_assert_eq!(doc.len(), chunks.len() * 2);
        for (i, sentence) in doc.sentences().iter().enumerate() {
            prop_assert_eq!(sentence.value().as_number().is_some(), i % 2 == 0, "{:?}", source);
        }

        let reparsed = parse_document(&to_conlang(&doc)).unwrap();
        prop_assert_eq!(to_sexp(&doc), to_sexp(&reparsed));

        let reference = parse_reference(&source);
        prop_assert!(reference.is_ok(), "{:?}", source);
        prop_assert_eq!(to_sexp(&doc), to_sexp(&reference.unwrap()));
    }

    #[test]
    fn test_reference_parser_agrees_on_noise(source in noise_strategy()) {
        let ours = parse_document(&source);
        let reference = parse_reference(&source);
        prop_assert_eq!(ours.is_ok(), reference.is_ok(), "{:?}: {:?}", source, ours);
        if let (Ok(ours), Ok(reference)) = (ours, reference) {
            prop_assert_eq!(to_sexp(&ours), to_sexp(&reference));
        }
    }

    #[test]
    fn test_scanner_spans_tile_any_input(source in "\\PC{0,40}") {
        let mut expected_start = 0;
        for (_, span) in tokenize(&source) {
            prop_assert_eq!(span.start, expected_start);
            expected_start = span.end;
        }
        prop_assert_eq!(expected_start, source.len());
    }

    #[test]
    fn test_parser_never_panics(source in "\\PC{0,40}") {
        let _ = parse_document(&source);
    }
}
