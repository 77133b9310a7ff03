//! Sx Value - the datum every stage of an sxhook script passes around.
//!
//! # Contents
//!
//! - `Value`: closed sum type, one variant per tag (null, bool, number,
//!   string, symbol, function, list, expr)
//! - `FunctionValue`: named native callable receiving unevaluated forms
//! - `Environment`: the single flat symbol table of one execution
//! - `EvalError`, `EvalResult`: runtime failures
//!
//! The reader (`sx_parse`) builds `Value` trees and the evaluator
//! (`sx_eval`) reduces them, so both depend on this crate and on nothing
//! else from the workspace.

mod environment;
pub mod errors;
mod value;

pub use environment::Environment;
pub use errors::{
    arity_mismatch, invalid_status, type_mismatch, EvalError, EvalErrorKind, EvalResult,
};
pub use value::{FunctionValue, NativeFn, Value};
