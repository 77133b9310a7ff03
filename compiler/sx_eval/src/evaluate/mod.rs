//! The reduction rules.

use sx_stack::ensure_sufficient_stack;
use sx_value::{Environment, EvalResult, Value};

/// Evaluate one form.
///
/// - `()` is `null`
/// - `(head args..)` with a function head calls it with the raw `args`
/// - `(head args..)` with any other head is a list of the head value and
///   each evaluated argument
/// - symbols resolve through `env`; unbound names are `null`
/// - everything else evaluates to itself
pub fn evaluate(value: &Value, env: &mut Environment) -> EvalResult {
    ensure_sufficient_stack(|| match value {
        Value::Expr(items) => {
            let Some((head, args)) = items.split_first() else {
                return Ok(Value::Null);
            };
            let head = evaluate(head, env)?;
            if let Value::Function(func) = &head {
                tracing::trace!(function = func.name(), args = args.len(), "call");
                return func.call(env, args).map_err(|err| err.in_function(func.name()));
            }
            let mut list = Vec::with_capacity(items.len());
            list.push(head);
            for arg in args {
                list.push(evaluate(arg, env)?);
            }
            Ok(Value::List(list))
        }
        Value::Symbol(name) => Ok(env.lookup(name).unwrap_or(Value::Null)),
        Value::Null => Ok(Value::Null),
        Value::Bool(_)
        | Value::Number(_)
        | Value::Str(_)
        | Value::Function(_)
        | Value::List(_) => Ok(value.clone()),
    })
}
