//! Core builtins, present in every environment.
//!
//! All of them follow the unevaluated-argument convention: each one pulls
//! the forms it needs out of `args` and evaluates them itself, in order.
//! A form that is never reached is never required, so `(if true x)` is
//! fine while `(if false x)` reports a missing argument.

use sx_value::{arity_mismatch, Environment, EvalError, EvalResult, Value};

use crate::evaluate::evaluate;

/// Names of the core builtins, in registration order.
pub const CORE_BUILTINS: [&str; 6] = ["get", "set", "!", "=", "if", "str_contains"];

type Builtin = fn(&mut Environment, &[Value]) -> EvalResult;

/// A fresh environment holding the literals and core builtins.
pub fn core_environment() -> Environment {
    let mut env = Environment::new();
    register_core(&mut env);
    env
}

/// Bind the literals and core builtins into `env`.
pub fn register_core(env: &mut Environment) {
    env.define("null", Value::Null);
    env.define("true", Value::Bool(true));
    env.define("false", Value::Bool(false));

    let table: [(&str, Builtin); 6] = [
        ("get", get),
        ("set", set),
        ("!", not),
        ("=", equal),
        ("if", if_),
        ("str_contains", str_contains),
    ];
    for (name, builtin) in table {
        env.define(name, Value::function(name, builtin));
    }
}

/// Fetch argument form `index`, or fail naming the function.
#[inline]
pub(crate) fn arg<'a>(name: &str, args: &'a [Value], index: usize) -> Result<&'a Value, EvalError> {
    args.get(index)
        .ok_or_else(|| arity_mismatch(name, index + 1, args.len()))
}

/// `(get name)`: the binding for a literal name, or `null`.
fn get(env: &mut Environment, args: &[Value]) -> EvalResult {
    let key = arg("get", args, 0)?.as_symbol_name()?;
    Ok(env.lookup(key).unwrap_or(Value::Null))
}

/// `(set name value)`: bind the evaluated value under a literal name.
fn set(env: &mut Environment, args: &[Value]) -> EvalResult {
    let key = arg("set", args, 0)?.as_symbol_name()?.to_owned();
    let value = evaluate(arg("set", args, 1)?, env)?;
    env.define(key, value);
    Ok(Value::Null)
}

fn not(env: &mut Environment, args: &[Value]) -> EvalResult {
    let cond = evaluate(arg("!", args, 0)?, env)?.as_bool()?;
    Ok(Value::Bool(!cond))
}

fn equal(env: &mut Environment, args: &[Value]) -> EvalResult {
    let left = evaluate(arg("=", args, 0)?, env)?;
    let right = evaluate(arg("=", args, 1)?, env)?;
    Ok(Value::Bool(left.strict_eq(&right)))
}

/// `(if cond then else)`: only the taken branch is evaluated.
fn if_(env: &mut Environment, args: &[Value]) -> EvalResult {
    let cond = evaluate(arg("if", args, 0)?, env)?.as_bool()?;
    let branch = if cond { 1 } else { 2 };
    evaluate(arg("if", args, branch)?, env)
}

fn str_contains(env: &mut Environment, args: &[Value]) -> EvalResult {
    let haystack = evaluate(arg("str_contains", args, 0)?, env)?.as_string()?;
    let needle = evaluate(arg("str_contains", args, 1)?, env)?.as_string()?;
    Ok(Value::Bool(haystack.contains(&needle)))
}
