//! The combinator reference parser must agree with the production parser on
//! every sample document.

use conlang::conlang::formats::to_sexp;
use conlang::conlang::parsing::parse_reference;
use conlang::conlang::testing::samples::{list_samples, SampleKind};
use conlang::parse_document;

#[test]
fn test_valid_samples_agree() {
    let samples = list_samples(SampleKind::Valid).unwrap();
    assert!(!samples.is_empty());
    for sample in samples {
        let source = sample.source().unwrap();
        let ours = parse_document(&source)
            .unwrap_or_else(|e| panic!("{}: {}", sample.path.display(), e.render(&source)));
        let reference = parse_reference(&source)
            .unwrap_or_else(|e| panic!("{}: reference parser failed: {:?}", sample.path.display(), e));
        assert_eq!(to_sexp(&ours), to_sexp(&reference), "{}", sample.path.display());
        assert_eq!(ours, reference, "{}: spans differ", sample.path.display());
    }
}

#[test]
fn test_invalid_samples_are_rejected_by_both() {
    let samples = list_samples(SampleKind::Invalid).unwrap();
    assert!(!samples.is_empty());
    for sample in samples {
        let source = sample.source().unwrap();
        let err = parse_document(&source).unwrap_err();
        assert_eq!(Some(err.kind), sample.expected_error, "{}", sample.path.display());
        assert!(
            parse_reference(&source).is_err(),
            "{}: reference parser accepted it",
            sample.path.display()
        );
    }
}

#[test]
fn test_mixed_delimiters_at_different_levels_are_accepted_by_both() {
    let source = "a, k:b; c.";
    let ours = parse_document(source).unwrap();
    let reference = parse_reference(source).unwrap();
    assert_eq!(
        to_sexp(&ours),
        "(sequence comma (word a) (complement k (sequence semicolon (word b) (word c))))\n"
    );
    assert_eq!(to_sexp(&ours), to_sexp(&reference));
}
