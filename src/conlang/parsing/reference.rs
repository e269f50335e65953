//! Reference parser built from chumsky combinators
//!
//! A second statement of the grammar, written as combinators over the source
//! characters. It accepts the same language and builds the same AST as the
//! hand-written parser, which makes it useful for differential tests. Errors
//! are chumsky's own and carry no [`ErrorKind`](super::ErrorKind), and there
//! is no nesting bound, so it is not the production path.

use chumsky::prelude::*;
use chumsky::Stream;
use std::ops::Range;

use crate::conlang::ast::{
    Complement, Delimiter, Document, Number, PrefixedValue, Sentence, Sequence, Value, Word,
};
use crate::conlang::lexing::is_word_char;
use crate::conlang::parsing::complement::fold_tail;
use crate::conlang::parsing::number::is_number_literal;

pub(crate) type ParserError = Simple<char>;

fn whitespace() -> impl Parser<char, (), Error = ParserError> + Clone {
    filter(|c: &char| c.is_ascii_whitespace()).repeated().ignored()
}

/// Zero-width check that no word character follows
fn boundary() -> impl Parser<char, (), Error = ParserError> + Clone {
    end()
        .or(filter(|c: &char| !is_word_char(*c)).ignored())
        .rewind()
}

fn word_run() -> impl Parser<char, String, Error = ParserError> + Clone {
    filter(|c: &char| is_word_char(*c))
        .repeated()
        .at_least(1)
        .collect::<String>()
}

fn word() -> impl Parser<char, Value, Error = ParserError> + Clone {
    word_run().map_with_span(|text, span: Range<usize>| Value::from(Word::new(text, span)))
}

fn number() -> impl Parser<char, Value, Error = ParserError> + Clone {
    let digits = filter(|c: &char| c.is_ascii_digit()).repeated().at_least(1);
    let sign = one_of("+-").or_not();
    let integer = sign.clone().chain::<char, _, _>(digits.clone());
    let fraction = just('.')
        .chain::<char, _, _>(digits.clone())
        .or_not()
        .map(Option::unwrap_or_default);
    let exponent = one_of("eE")
        .chain::<char, _, _>(sign)
        .chain::<char, _, _>(digits)
        .or_not()
        .map(Option::unwrap_or_default);

    // `1.5x` is no literal, but its `1` is when a stop follows
    let longest = integer
        .clone()
        .chain::<char, _, _>(fraction)
        .chain::<char, _, _>(exponent)
        .collect::<String>()
        .then_ignore(boundary());
    let integer_only = integer.collect::<String>().then_ignore(boundary());

    longest
        .or(integer_only)
        .try_map(|raw, span: Range<usize>| match raw.parse::<f64>() {
            Ok(value) => Ok(Value::from(Number::new(raw, value, span))),
            Err(e) => Err(Simple::custom(span, e.to_string())),
        })
}

/// A word run glued to `:` that is not itself a number literal
fn prefix() -> impl Parser<char, Word, Error = ParserError> + Clone {
    word_run()
        .try_map(|text, span: Range<usize>| {
            if is_number_literal(&text) {
                Err(Simple::custom(span, "a number cannot be a prefix"))
            } else {
                Ok(Word::new(text, span))
            }
        })
        .then_ignore(just(':'))
}

/// A prefix whose text must equal `expected`
fn same_prefix(expected: String) -> impl Parser<char, Word, Error = ParserError> + Clone {
    word_run()
        .try_map(move |text, span: Range<usize>| {
            if text == expected {
                Ok(Word::new(text, span))
            } else {
                Err(Simple::custom(span, format!("prefix {:?}", expected)))
            }
        })
        .then_ignore(just(':'))
}

fn delimiter_of(c: char) -> Delimiter {
    if c == ';' {
        Delimiter::Semicolon
    } else {
        Delimiter::Comma
    }
}

fn value() -> impl Parser<char, Value, Error = ParserError> + Clone {
    recursive(|value| {
        let body = value.clone();
        let complement = prefix()
            .then(value)
            .then_with(move |(prefix, head_value): (Word, Value)| {
                let tail_prefix = same_prefix(prefix.text().to_string());
                let head = PrefixedValue::new(prefix, head_value);
                whitespace()
                    .ignore_then(tail_prefix)
                    .then(body.clone())
                    .map(|(prefix, value)| PrefixedValue::new(prefix, value))
                    .repeated()
                    .map(move |tails| Value::from(Complement::new(head.clone(), fold_tail(tails))))
            });

        let term = choice((complement, number(), word())).boxed();

        // Once a delimiter is seen, every later one must be the same character
        let elements = term.clone();
        let tail = whitespace()
            .ignore_then(one_of(",;"))
            .then_with(move |d: char| {
                let next = whitespace().ignore_then(elements.clone());
                let more = whitespace()
                    .ignore_then(just(d))
                    .ignore_then(next.clone())
                    .repeated();
                let no_delimiter_follows = whitespace()
                    .ignore_then(end().or(none_of(",;").ignored()))
                    .rewind();
                next.then(more)
                    .then_ignore(no_delimiter_follows)
                    .map(move |(second, rest)| {
                        let mut elements = vec![second];
                        elements.extend(rest);
                        (delimiter_of(d), elements)
                    })
            });

        term.then(tail.or_not()).map(|(first, tail)| match tail {
            None => first,
            Some((delimiter, rest)) => {
                let start = first.span().start;
                let mut elements = vec![first];
                elements.extend(rest);
                let end = elements.last().map_or(start, |v| v.span().end);
                Value::from(Sequence::new(delimiter, elements, start..end))
            }
        })
    })
}

fn document() -> impl Parser<char, Document, Error = ParserError> + Clone {
    let stop = just('.').map_with_span(|_, span: Range<usize>| span);
    let sentence = value()
        .then_ignore(whitespace())
        .then(stop)
        .map(|(value, stop)| {
            let start = value.span().start;
            Sentence::new(value, start..stop.end)
        });

    whitespace()
        .ignore_then(sentence.then_ignore(whitespace()).repeated())
        .then_ignore(end())
        .map(Document::with_sentences)
}

/// Parse a whole document with the combinator grammar
pub fn parse_reference(source: &str) -> Result<Document, Vec<ParserError>> {
    let len = source.len();
    let stream = Stream::from_iter(
        len..len,
        source
            .char_indices()
            .map(|(i, c)| (c, i..i + c.len_utf8())),
    );
    document().parse(stream)
}
