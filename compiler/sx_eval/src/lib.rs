//! Sx Eval - tree-walking evaluator for sxhook scripts.
//!
//! # Architecture
//!
//! - `evaluate`: reduces one `Value` against the flat `Environment`
//! - `builtins`: `get`, `set`, `!`, `=`, `if`, `str_contains` and the
//!   pre-bound literals `null`, `true`, `false`
//! - `capabilities`: the `Host` trait and the five request-scoped
//!   functions bound on top of the core builtins
//! - `driver`: tokenize -> parse -> evaluate, with every failure turned
//!   into a logged `RunOutcome::Aborted`
//!
//! # Calling convention
//!
//! Functions receive their argument forms unevaluated. `if` evaluates only
//! the branch it takes; `get`/`set` read their first argument as a name.
//! Only when the head of a call is not a function are the remaining forms
//! evaluated eagerly, producing a `List`.

mod builtins;
mod capabilities;
mod driver;
mod evaluate;

pub use builtins::{core_environment, register_core, CORE_BUILTINS};
pub use capabilities::{register_capabilities, Host, CAPABILITY_NAMES};
pub use driver::{run_script, RunOutcome, ScriptError};
pub use evaluate::evaluate;

// Re-export the value model so hosts only need this crate
pub use sx_value::{Environment, EvalError, EvalErrorKind, EvalResult, FunctionValue, Value};

#[cfg(test)]
mod test_helpers;
