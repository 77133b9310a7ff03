//! Tokenizer for sxhook scripts.
//!
//! The token grammar is deliberately tiny:
//!
//! - `(` and `)` are always tokens of their own, even when glued to text
//!   (`(get_req_path)` is three tokens);
//! - any whitespace character separates tokens;
//! - everything else is a run of non-whitespace, non-paren characters.
//!
//! There are no comments and no escapes. String literals are not a lexical
//! concept here: `"hello world"` lexes as `"hello` and `world"`, and the
//! reader stitches them back together.
//!
//! # Design
//!
//! [`Tokenizer`] is a borrowing iterator over the source that yields
//! [`Token`]s with byte spans, so the reader can point at the token that
//! broke a parse. [`tokenize`] collects it.

use std::fmt;

/// Byte range of a token in the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `pos`.
    pub const fn point(pos: usize) -> Self {
        Span {
            start: pos,
            end: pos,
        }
    }

    pub const fn len(self) -> usize {
        self.end - self.start
    }

    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// A token: a slice of the source plus where it came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    pub text: &'src str,
    pub span: Span,
}

impl Token<'_> {
    pub fn is_open_paren(&self) -> bool {
        self.text == "("
    }

    pub fn is_close_paren(&self) -> bool {
        self.text == ")"
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text)
    }
}

/// Streaming tokenizer.
///
/// Yields tokens in source order. Never fails: every input has a token
/// sequence, possibly empty.
pub struct Tokenizer<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Tokenizer<'src> {
    pub fn new(source: &'src str) -> Self {
        Tokenizer { source, pos: 0 }
    }

    /// Produce the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token<'src>> {
        let rest = &self.source[self.pos..];
        let skipped = rest.len() - rest.trim_start().len();
        let start = self.pos + skipped;
        let rest = &self.source[start..];

        let first = rest.chars().next()?;
        let len = if is_paren(first) {
            first.len_utf8()
        } else {
            rest.find(|c: char| c.is_whitespace() || is_paren(c))
                .unwrap_or(rest.len())
        };

        let end = start + len;
        self.pos = end;
        Some(Token {
            text: &self.source[start..end],
            span: Span::new(start, end),
        })
    }
}

impl<'src> Iterator for Tokenizer<'src> {
    type Item = Token<'src>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

#[inline]
fn is_paren(c: char) -> bool {
    c == '(' || c == ')'
}

/// Tokenize a whole script.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Tokenizer::new(source).collect()
}
