//! Shared fixtures for evaluator tests.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use std::cell::RefCell;
use std::rc::Rc;

use sx_value::{Environment, EvalResult, Value};

use crate::{core_environment, evaluate, register_capabilities, Host};

/// One observable host side effect.
#[derive(Clone, Debug, PartialEq)]
pub enum HostCall {
    SetHeader(String, String),
    Halt(u16, String),
    RunNext,
}

/// In-memory host that records every side effect in order.
#[derive(Debug, Default)]
pub struct RecordingHost {
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn with_path(path: &str) -> Self {
        RecordingHost {
            path: path.to_owned(),
            ..RecordingHost::default()
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

impl Host for RecordingHost {
    fn request_path(&self) -> String {
        self.path.clone()
    }

    fn request_header(&self, name: &str) -> String {
        self.header(name).unwrap_or_default().to_owned()
    }

    fn set_request_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(name));
        self.headers.push((name.to_owned(), value.to_owned()));
        self.calls
            .push(HostCall::SetHeader(name.to_owned(), value.to_owned()));
    }

    fn halt(&mut self, status: u16, message: &str) {
        self.calls.push(HostCall::Halt(status, message.to_owned()));
    }

    fn run_next(&mut self) {
        self.calls.push(HostCall::RunNext);
    }
}

/// Core environment plus capabilities bound to `host`.
pub fn host_environment(host: &Rc<RefCell<RecordingHost>>) -> Environment {
    let mut env = core_environment();
    register_capabilities(&mut env, host);
    env
}

/// Parse `source` as a single form and evaluate it.
pub fn eval_in(source: &str, env: &mut Environment) -> EvalResult {
    match &sx_parse::parse(source).unwrap() {
        Value::Expr(forms) if forms.len() == 1 => evaluate(&forms[0], env),
        other => panic!("expected exactly one form, got {other}"),
    }
}

/// Evaluate one form against a fresh core environment.
pub fn eval_str(source: &str) -> EvalResult {
    eval_in(source, &mut core_environment())
}
