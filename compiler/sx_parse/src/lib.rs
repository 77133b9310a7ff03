//! Reader for sxhook scripts.
//!
//! Turns the flat token stream from `sx_lexer` into `Value` trees:
//!
//! - `(` ... `)` becomes `Value::Expr` holding the forms in between
//! - `)` ends the current level, including the outermost one
//! - a token starting with `"` opens a string literal that runs until a
//!   token ending in `"` (possibly the same one) or the end of input; the
//!   pieces are rejoined with single spaces and the outer quotes stripped
//! - a token that parses as `f64` becomes `Value::Number`
//! - anything else is a `Value::Symbol` with the exact token text
//!
//! A script is a sequence of top-level forms. [`parse_program`] wraps them
//! in one synthetic `Expr`, so evaluating a program yields a list of each
//! form's result.

mod errors;

use sx_lexer::{tokenize, Span, Token};
use sx_stack::ensure_sufficient_stack;
use sx_value::Value;

pub use errors::{ParseError, ParseErrorKind};

/// Read forms starting at `pos` until a `)` or the end of input.
///
/// Returns the forms and the position after the last consumed token,
/// which is just past the `)` when one ended the read. For
/// well-parenthesised input read from 0 that position is `tokens.len()`.
pub fn read_from_tokens(
    tokens: &[Token<'_>],
    pos: usize,
) -> Result<(Vec<Value>, usize), ParseError> {
    let mut reader = Reader { tokens, pos };
    let forms = reader.read_seq(None)?;
    Ok((forms, reader.pos))
}

/// Read a whole token stream as one program body.
pub fn parse_program(tokens: &[Token<'_>]) -> Result<Value, ParseError> {
    let (forms, consumed) = read_from_tokens(tokens, 0)?;
    if consumed < tokens.len() {
        tracing::debug!(
            ignored = tokens.len() - consumed,
            "unmatched `)` ends the program"
        );
    }
    tracing::trace!(forms = forms.len(), consumed, "read program");
    Ok(Value::Expr(forms))
}

/// Tokenize and read `source` as one program body.
pub fn parse(source: &str) -> Result<Value, ParseError> {
    parse_program(&tokenize(source))
}

struct Reader<'t, 'src> {
    tokens: &'t [Token<'src>],
    pos: usize,
}

impl Reader<'_, '_> {
    /// Read forms until a `)` ends this level. Running out of input is
    /// fine at top level (`open == None`) and incomplete anywhere else.
    fn read_seq(&mut self, open: Option<Span>) -> Result<Vec<Value>, ParseError> {
        ensure_sufficient_stack(|| {
            let mut forms = Vec::new();
            while let Some(&token) = self.tokens.get(self.pos) {
                self.pos += 1;
                if token.is_open_paren() {
                    let inner = self.read_seq(Some(token.span))?;
                    forms.push(Value::Expr(inner));
                } else if token.is_close_paren() {
                    return Ok(forms);
                } else if token.text.starts_with('"') {
                    forms.push(self.read_string(token));
                } else {
                    forms.push(atom(token.text));
                }
            }
            match open {
                Some(span) => Err(ParseError::new(ParseErrorKind::ParseIncomplete, span)),
                None => Ok(forms),
            }
        })
    }

    /// Rejoin a string literal that the tokenizer split on whitespace.
    ///
    /// The opening token closes the literal if it ends in `"`, so a lone
    /// `"` is the empty string. End of input closes it too.
    fn read_string(&mut self, first: Token<'_>) -> Value {
        let mut text = String::from(first.text);
        let mut last = first.text;
        while !last.ends_with('"') {
            let Some(next) = self.tokens.get(self.pos) else {
                break;
            };
            self.pos += 1;
            text.push(' ');
            text.push_str(next.text);
            last = next.text;
        }

        let inner = text.strip_prefix('"').unwrap_or(text.as_str());
        let inner = inner.strip_suffix('"').unwrap_or(inner);
        Value::string(inner)
    }
}

fn atom(text: &str) -> Value {
    match text.parse::<f64>() {
        Ok(n) => Value::Number(n),
        Err(_) => Value::symbol(text),
    }
}

#[cfg(test)]
mod tests;
