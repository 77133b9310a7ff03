//! Script driver: the single recovery boundary.
//!
//! `run_script` never panics on bad input and never returns `Err`. The
//! first parse or runtime failure stops the script where it is, gets
//! logged, and comes back as [`RunOutcome::Aborted`]. Side effects that
//! already happened (headers set, responses written, downstream calls)
//! stay as they are, and no default response is produced.

use sx_lexer::tokenize;
use sx_parse::{parse_program, ParseError};
use sx_value::{Environment, EvalError, Value};

use crate::evaluate::evaluate;

/// Why a script stopped early.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ScriptError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),
    #[error("runtime error: {0}")]
    Eval(#[from] EvalError),
}

/// How a script execution ended.
#[derive(Debug)]
pub enum RunOutcome {
    /// Ran to the end. Holds the program result, a list with one entry
    /// per top-level form.
    Completed(Value),
    /// Stopped at the first failure.
    Aborted(ScriptError),
}

impl RunOutcome {
    pub fn is_completed(&self) -> bool {
        matches!(self, RunOutcome::Completed(_))
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            RunOutcome::Completed(value) => Some(value),
            RunOutcome::Aborted(_) => None,
        }
    }

    pub fn error(&self) -> Option<&ScriptError> {
        match self {
            RunOutcome::Completed(_) => None,
            RunOutcome::Aborted(err) => Some(err),
        }
    }
}

/// Tokenize, parse and evaluate `code` against `env`.
#[tracing::instrument(level = "debug", skip_all, fields(len = code.len()))]
pub fn run_script(code: &str, env: &mut Environment) -> RunOutcome {
    match try_run(code, env) {
        Ok(value) => {
            tracing::debug!("script completed");
            RunOutcome::Completed(value)
        }
        Err(err) => {
            tracing::warn!(error = %err, "script aborted");
            RunOutcome::Aborted(err)
        }
    }
}

fn try_run(code: &str, env: &mut Environment) -> Result<Value, ScriptError> {
    let tokens = tokenize(code);
    let program = parse_program(&tokens)?;
    Ok(evaluate(&program, env)?)
}
