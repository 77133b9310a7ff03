//! Runtime values for sxhook scripts.
//!
//! One `Value` type serves as both the parse tree and the evaluation
//! result: the reader produces `Expr`, `Symbol` and literal nodes, the
//! evaluator turns them into results. Payloads are only reachable through
//! pattern matching or the fallible `as_*` conversions below.

use std::fmt;
use std::mem;
use std::rc::Rc;

use sx_stack::ensure_sufficient_stack;

use crate::environment::Environment;
use crate::errors::{type_mismatch, EvalResult};

/// Signature of every native function.
///
/// Arguments arrive as the raw forms from the call site; each function
/// decides which of them to evaluate, and when.
pub type NativeFn = dyn Fn(&mut Environment, &[Value]) -> EvalResult;

/// A named native callable.
///
/// Cloning shares the underlying closure, so host capabilities that close
/// over request state stay bound to that one request.
#[derive(Clone)]
pub struct FunctionValue {
    name: Rc<str>,
    func: Rc<NativeFn>,
}

impl FunctionValue {
    pub fn new(
        name: &str,
        func: impl Fn(&mut Environment, &[Value]) -> EvalResult + 'static,
    ) -> Self {
        FunctionValue {
            name: Rc::from(name),
            func: Rc::new(func),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invoke with unevaluated argument forms.
    #[inline]
    pub fn call(&self, env: &mut Environment, args: &[Value]) -> EvalResult {
        (self.func)(env, args)
    }

    /// Whether both handles share the same closure.
    pub fn ptr_eq(&self, other: &FunctionValue) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl fmt::Debug for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FunctionValue").field(&self.name).finish()
    }
}

/// Runtime value.
///
/// Trees can be as deep as the script's paren nesting, so `Clone`,
/// `PartialEq` and `Display` grow the stack and `Drop` never recurses.
#[derive(Debug)]
pub enum Value {
    /// Absence / void.
    Null,
    Bool(bool),
    Number(f64),
    /// String literal, quotes already stripped.
    Str(String),
    /// Identifier resolved against the environment.
    Symbol(String),
    Function(FunctionValue),
    /// Result of evaluating an expr whose head is not a function.
    List(Vec<Value>),
    /// Unevaluated call: element 0 is the operator position.
    Expr(Vec<Value>),
}

impl Value {
    #[inline]
    pub fn string(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    #[inline]
    pub fn symbol(name: impl Into<String>) -> Self {
        Value::Symbol(name.into())
    }

    pub fn function(
        name: &str,
        func: impl Fn(&mut Environment, &[Value]) -> EvalResult + 'static,
    ) -> Self {
        Value::Function(FunctionValue::new(name, func))
    }

    /// Tag name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Number(_) => "number",
            Value::Str(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Function(_) => "function",
            Value::List(_) => "list",
            Value::Expr(_) => "expr",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Text view of a string, number, bool or symbol.
    ///
    /// Numbers always carry six decimals (`42` -> `"42.000000"`), which is
    /// what header values set from numbers look like.
    pub fn as_string(&self) -> Result<String, crate::EvalError> {
        match self {
            Value::Str(s) | Value::Symbol(s) => Ok(s.clone()),
            Value::Number(n) => Ok(format_number(*n)),
            Value::Bool(b) => Ok(b.to_string()),
            _ => Err(type_mismatch("string", self)),
        }
    }

    /// Truthiness. Empty strings, zero, empty lists and null are false.
    pub fn as_bool(&self) -> Result<bool, crate::EvalError> {
        match self {
            Value::Bool(b) => Ok(*b),
            Value::Str(s) => Ok(!s.is_empty()),
            Value::Number(n) => Ok(*n != 0.0),
            Value::List(items) => Ok(!items.is_empty()),
            Value::Null => Ok(false),
            _ => Err(type_mismatch("bool", self)),
        }
    }

    /// Raw name of a symbol or text of a string.
    pub fn as_symbol_name(&self) -> Result<&str, crate::EvalError> {
        match self {
            Value::Symbol(s) | Value::Str(s) => Ok(s),
            _ => Err(type_mismatch("symbol or string", self)),
        }
    }

    pub fn as_number(&self) -> Result<f64, crate::EvalError> {
        match self {
            Value::Number(n) => Ok(*n),
            Value::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            _ => Err(type_mismatch("number", self)),
        }
    }

    /// Equality as seen by the `=` builtin.
    ///
    /// Tags must match. Only null, bool, number and string compare their
    /// payloads; every other pairing is unequal rather than an error.
    /// Numbers use IEEE-754 `==`, so `NaN` is never equal to itself.
    pub fn strict_eq(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => false,
        }
    }
}

/// Structural equality, for tests and tooling.
///
/// Unlike [`Value::strict_eq`] this descends into lists, exprs and symbols,
/// and compares functions by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Str(a), Value::Str(b)) | (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::List(a), Value::List(b)) | (Value::Expr(a), Value::Expr(b)) => a == b,
            _ => false,
        })
    }
}

impl Clone for Value {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Value::Null => Value::Null,
            Value::Bool(b) => Value::Bool(*b),
            Value::Number(n) => Value::Number(*n),
            Value::Str(s) => Value::Str(s.clone()),
            Value::Symbol(s) => Value::Symbol(s.clone()),
            Value::Function(func) => Value::Function(func.clone()),
            Value::List(items) => Value::List(items.clone()),
            Value::Expr(items) => Value::Expr(items.clone()),
        })
    }
}

impl Drop for Value {
    fn drop(&mut self) {
        let mut pending = match self {
            Value::List(items) | Value::Expr(items) if items.iter().any(Value::has_children) => {
                mem::take(items)
            }
            _ => return,
        };
        // Children are emptied before they drop, so each drop is shallow.
        while let Some(mut value) = pending.pop() {
            if let Value::List(items) | Value::Expr(items) = &mut value {
                pending.append(items);
            }
        }
    }
}

impl Value {
    fn has_children(&self) -> bool {
        matches!(self, Value::List(items) | Value::Expr(items) if !items.is_empty())
    }
}

/// Six-decimal rendering. Infinities are signed (`+Inf`, `-Inf`).
fn format_number(n: f64) -> String {
    if n.is_infinite() {
        if n > 0.0 { "+Inf" } else { "-Inf" }.to_owned()
    } else {
        format!("{n:.6}")
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Value::Null => write!(f, "null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Number(n) => write!(f, "{}", format_number(*n)),
            Value::Str(s) => write!(f, "\"{s}\""),
            Value::Symbol(s) => write!(f, "{s}"),
            Value::Function(func) => write!(f, "(func {})", func.name()),
            Value::List(items) => {
                write!(f, "(list:")?;
                write_joined(f, items)?;
                write!(f, ")")
            }
            Value::Expr(items) => match items.split_first() {
                Some((head, args)) => {
                    write!(f, "(expr {head}:")?;
                    write_joined(f, args)?;
                    write!(f, ")")
                }
                None => write!(f, "(expr)"),
            },
        })
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ",")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
