//! Incremental sentence reader and read-print loop
//!
//! Input arrives a line at a time and a sentence may span several lines. The
//! [`SentenceReader`] keeps the unfinished text in a buffer and hands out each
//! sentence as soon as its `.` has been read. A failure that more input could
//! repair (`IncompleteInput`) keeps the buffer; any other failure discards it.
//!
//! No sentence can end without a `.`, so the buffer is only read again when a
//! line brings a stop or a quote. A sentence spread over many lines is then
//! parsed once rather than once per line; errors in it surface with its stop,
//! or at [`SentenceReader::finish`].

use crate::conlang::ast::{Document, Sentence};
use crate::conlang::formats::Formatter;
use crate::conlang::parsing::{ParseError, Parser, ParserOptions};
use log::debug;
use std::fmt;
use std::io::{self, BufRead, Write};

/// A parse failure together with the text it was found in
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderError {
    pub error: ParseError,
    pub text: String,
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.error.render(&self.text))
    }
}

impl std::error::Error for ReaderError {}

/// What one line of input produced
#[derive(Debug, Default, PartialEq)]
pub struct Feed {
    /// Sentences completed by this line, spans relative to the text they were read from
    pub sentences: Vec<Sentence>,
    pub error: Option<ReaderError>,
}

#[derive(Debug, Default)]
pub struct SentenceReader {
    buffer: String,
    options: ParserOptions,
}

impl SentenceReader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ParserOptions) -> Self {
        Self {
            buffer: String::new(),
            options,
        }
    }

    /// Unconsumed text waiting for more input
    pub fn pending(&self) -> &str {
        &self.buffer
    }

    /// True when the buffer holds the start of an unfinished sentence
    pub fn is_pending(&self) -> bool {
        self.buffer.bytes().any(|b| !b.is_ascii_whitespace())
    }

    /// Append a line and read every sentence it completes
    pub fn push_line(&mut self, line: &str) -> Feed {
        self.buffer.push_str(line);
        if !line.ends_with('\n') {
            self.buffer.push('\n');
        }

        let mut feed = Feed::default();
        if !line.contains(['.', '"', '\'']) {
            return feed;
        }
        let mut parser = Parser::new(&self.buffer).with_options(self.options);
        let mut consumed = 0;
        loop {
            parser.skip_whitespace();
            if parser.is_at_end() {
                consumed = parser.position();
                break;
            }
            match parser.parse_sentence() {
                Ok(sentence) => {
                    consumed = parser.position();
                    feed.sentences.push(sentence);
                }
                Err(error) if error.is_incomplete() => {
                    debug!("waiting for more input: {}", error);
                    break;
                }
                Err(error) => {
                    feed.error = Some(ReaderError {
                        error,
                        text: self.buffer.clone(),
                    });
                    consumed = self.buffer.len();
                    break;
                }
            }
        }

        self.buffer.drain(..consumed);
        feed
    }

    /// End of input: anything still buffered is an unfinished sentence
    pub fn finish(&mut self) -> Option<ReaderError> {
        if !self.is_pending() {
            self.buffer.clear();
            return None;
        }
        let text = std::mem::take(&mut self.buffer);
        let error = Parser::new(&text)
            .with_options(self.options)
            .parse_document()
            .err()?;
        Some(ReaderError { error, text })
    }
}

/// Read lines from `input`, writing each sentence in `formatter`'s format
///
/// Parse errors are written to `output` as `error: ...` lines and reading
/// continues with the next line.
pub fn run<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    formatter: &dyn Formatter,
    options: ParserOptions,
) -> io::Result<()> {
    let mut reader = SentenceReader::with_options(options);
    for line in input.lines() {
        let feed = reader.push_line(&line?);
        for sentence in feed.sentences {
            let doc = Document::with_sentences(vec![sentence]);
            match formatter.serialize(&doc) {
                Ok(text) => writeln!(output, "{}", text.trim_end())?,
                Err(e) => writeln!(output, "error: {}", e)?,
            }
        }
        if let Some(error) = feed.error {
            writeln!(output, "error: {}", error)?;
        }
        output.flush()?;
    }
    if let Some(error) = reader.finish() {
        writeln!(output, "error: {}", error)?;
    }
    Ok(())
}
