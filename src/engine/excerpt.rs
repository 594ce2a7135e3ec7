#![forbid(unsafe_code)]

//! Line numbers and context excerpts around an occurrence

use std::ops::Range;

/// Maximum number of characters shown on each side of a match
pub const EXCERPT_WIDTH: usize = 25;

/// Line-start offsets of a document, for line lookups by byte offset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineIndex {
    offsets: Vec<usize>,
}

impl LineIndex {
    /// Indexes every `\n` in `text`
    pub fn new(text: &str) -> Self {
        let mut offsets = vec![0];
        offsets.extend(
            text.bytes()
                .enumerate()
                .filter(|&(_, b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        LineIndex { offsets }
    }

    /// 1-based line of `offset`: newlines before it, plus one
    pub fn line_of(&self, offset: usize) -> usize {
        self.offsets.partition_point(|&o| o <= offset)
    }
}

/// Context of an occurrence, borrowed from the original text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Excerpt<'a> {
    /// 1-based line of the match start
    pub line: usize,
    /// 1-based column: characters in `preceding` plus one
    pub column: usize,
    /// Text before the match on the same line, at most `EXCERPT_WIDTH` chars
    pub preceding: &'a str,
    /// The matched text
    pub matched: &'a str,
    /// Text after the match on the same line, at most `EXCERPT_WIDTH` chars
    pub following: &'a str,
}

impl<'a> Excerpt<'a> {
    /// Extracts the excerpt around `span` of `text`
    ///
    /// `span` must lie on char boundaries of `text`.
    pub fn extract(text: &'a str, lines: &LineIndex, span: Range<usize>) -> Self {
        let preceding = preceding_excerpt(&text[..span.start]);
        Excerpt {
            line: lines.line_of(span.start),
            column: preceding.chars().count() + 1,
            preceding,
            matched: &text[span.clone()],
            following: following_excerpt(&text[span.end..]),
        }
    }
}

/// Last `EXCERPT_WIDTH` chars of `before`, cut after the last newline
fn preceding_excerpt(before: &str) -> &str {
    let window_start = before
        .char_indices()
        .rev()
        .nth(EXCERPT_WIDTH - 1)
        .map_or(0, |(i, _)| i);
    let window = &before[window_start..];
    match window.rfind('\n') {
        Some(i) => &window[i + 1..],
        None => window,
    }
}

/// First `EXCERPT_WIDTH` chars of `after`, cut before the first newline
fn following_excerpt(after: &str) -> &str {
    let window_end = after
        .char_indices()
        .nth(EXCERPT_WIDTH)
        .map_or(after.len(), |(i, _)| i);
    let window = &after[..window_end];
    match window.find('\n') {
        Some(i) => &window[..i],
        None => window,
    }
}
