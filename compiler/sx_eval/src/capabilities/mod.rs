//! Host capabilities: the request-scoped functions a host binds into a
//! script's environment.
//!
//! The host implements [`Host`] for whatever owns the in-flight request,
//! the response sink and the downstream continuation, and hands it to
//! [`register_capabilities`] once per execution. The five functions land
//! in the same flat table as the core builtins, so a script can shadow
//! them with `set`.
//!
//! Arguments are always evaluated before the host is borrowed, so a
//! capability call nested inside another one's arguments never observes
//! the host mid-update.

use std::cell::RefCell;
use std::rc::Rc;

use sx_value::{invalid_status, Environment, EvalError, Value};

use crate::builtins::arg;
use crate::evaluate::evaluate;

/// Names the capabilities are bound under. Scripts depend on these.
pub const CAPABILITY_NAMES: [&str; 5] = [
    "get_req_path",
    "get_req_header",
    "set_req_header",
    "halt",
    "run_next",
];

/// What one execution may do to its request.
pub trait Host {
    /// Path of the in-flight request.
    fn request_path(&self) -> String;

    /// First value of the named header, or `""` if absent.
    fn request_header(&self, name: &str) -> String;

    /// Replace the named header on the in-flight request.
    fn set_request_header(&mut self, name: &str, value: &str);

    /// Write an error response now. Does not stop the script.
    fn halt(&mut self, status: u16, message: &str);

    /// Hand the current request and response sink to the downstream
    /// continuation. May run any number of times.
    fn run_next(&mut self);
}

/// Bind the five capabilities, each closing over `host`.
pub fn register_capabilities<H>(env: &mut Environment, host: &Rc<RefCell<H>>)
where
    H: Host + ?Sized + 'static,
{
    let h = Rc::clone(host);
    env.define(
        "get_req_path",
        Value::function("get_req_path", move |_, _| {
            Ok(Value::string(h.borrow().request_path()))
        }),
    );

    let h = Rc::clone(host);
    env.define(
        "get_req_header",
        Value::function("get_req_header", move |env, args| {
            let name = header_name(env, "get_req_header", args)?;
            Ok(Value::string(h.borrow().request_header(&name)))
        }),
    );

    let h = Rc::clone(host);
    env.define(
        "set_req_header",
        Value::function("set_req_header", move |env, args| {
            let name = header_name(env, "set_req_header", args)?;
            let value = evaluate(arg("set_req_header", args, 1)?, env)?.as_string()?;
            h.borrow_mut().set_request_header(&name, &value);
            Ok(Value::Null)
        }),
    );

    let h = Rc::clone(host);
    env.define(
        "halt",
        Value::function("halt", move |env, args| {
            let code = evaluate(arg("halt", args, 0)?, env)?.as_number()?;
            let status = status_code(code)?;
            let message = evaluate(arg("halt", args, 1)?, env)?.as_string()?;
            tracing::debug!(status, %message, "halt");
            h.borrow_mut().halt(status, &message);
            Ok(Value::Null)
        }),
    );

    let h = Rc::clone(host);
    env.define(
        "run_next",
        Value::function("run_next", move |_, _| {
            tracing::debug!("run_next");
            h.borrow_mut().run_next();
            Ok(Value::Null)
        }),
    );
}

/// Header names must be text: `(get_req_header 42)` is a type mismatch
/// rather than a lookup of `"42.000000"`.
fn header_name(env: &mut Environment, func: &str, args: &[Value]) -> Result<String, EvalError> {
    let name = evaluate(arg(func, args, 0)?, env)?;
    Ok(name.as_symbol_name()?.to_owned())
}

/// Integral status in the range an HTTP response line can carry.
fn status_code(code: f64) -> Result<u16, EvalError> {
    if code.fract() != 0.0 || !(100.0..=999.0).contains(&code) {
        return Err(invalid_status(code));
    }
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss,
        reason = "range checked above"
    )]
    let status = code as u16;
    Ok(status)
}
