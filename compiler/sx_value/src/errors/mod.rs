//! Runtime errors raised while evaluating a script.
//!
//! Factory functions (`type_mismatch()`, `arity_mismatch()`, ...) are the
//! public API for building errors; builtins never construct `EvalErrorKind`
//! by hand.
//!
//! # Frames
//!
//! When an error unwinds through a native function call, the evaluator
//! records the function name with [`EvalError::in_function`]. The driver
//! logs the result as e.g.
//! `type mismatch: expected string, got number (in get_req_header)`.

use crate::value::Value;

/// Result of evaluation.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum EvalErrorKind {
    /// A conversion was applied to a value whose tag does not support it.
    #[error("type mismatch: expected {expected}, got {got}")]
    TypeMismatch {
        expected: &'static str,
        got: &'static str,
    },

    /// A builtin needed an argument form the call did not supply.
    #[error("{name} expects at least {expected} {}, got {got}", argument_word(.expected))]
    ArityMismatch {
        name: String,
        expected: usize,
        got: usize,
    },

    /// `halt` was given a number that is not a usable HTTP status.
    #[error("invalid status code: {code}")]
    InvalidStatus { code: String },
}

#[allow(clippy::trivially_copy_pass_by_ref, reason = "called with a field reference")]
fn argument_word(count: &usize) -> &'static str {
    if *count == 1 {
        "argument"
    } else {
        "arguments"
    }
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}{}", render_frames(.frames))]
pub struct EvalError {
    kind: EvalErrorKind,
    /// Native functions the error unwound through, innermost first.
    frames: Vec<String>,
}

fn render_frames(frames: &[String]) -> String {
    if frames.is_empty() {
        String::new()
    } else {
        format!(" (in {})", frames.join(" <- "))
    }
}

impl EvalError {
    pub fn kind(&self) -> &EvalErrorKind {
        &self.kind
    }

    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    /// Record that this error unwound through the named function.
    #[must_use]
    pub fn in_function(mut self, name: &str) -> Self {
        self.frames.push(name.to_owned());
        self
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self.kind, EvalErrorKind::TypeMismatch { .. })
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError {
            kind,
            frames: Vec::new(),
        }
    }
}

#[cold]
pub fn type_mismatch(expected: &'static str, got: &Value) -> EvalError {
    EvalErrorKind::TypeMismatch {
        expected,
        got: got.type_name(),
    }
    .into()
}

#[cold]
pub fn arity_mismatch(name: &str, expected: usize, got: usize) -> EvalError {
    EvalErrorKind::ArityMismatch {
        name: name.to_owned(),
        expected,
        got,
    }
    .into()
}

#[cold]
pub fn invalid_status(code: f64) -> EvalError {
    EvalErrorKind::InvalidStatus {
        code: code.to_string(),
    }
    .into()
}
