//! Script middleware.
//!
//! One [`ScriptMiddleware`] is built per configured route and shared by all
//! worker threads. It holds only the script source, the name it was
//! registered under and the downstream handler. Everything a script can
//! observe or mutate (environment, request, response) is created per
//! request inside [`ScriptMiddleware::serve`] and dropped before it
//! returns, so concurrent requests never share evaluator state.

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;
use std::sync::Arc;

use sx_eval::{core_environment, register_capabilities, run_script, RunOutcome};

use crate::config::Config;
use crate::exchange::Exchange;
use crate::handler::Handler;
use crate::http::{Request, Response};

pub struct ScriptMiddleware {
    name: String,
    code: String,
    next: Arc<dyn Handler>,
}

impl ScriptMiddleware {
    pub fn new(next: Arc<dyn Handler>, config: &Config, name: &str) -> Self {
        ScriptMiddleware {
            name: name.to_owned(),
            code: config.code.clone(),
            next,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Run the script for one request.
    ///
    /// Returns `None` when there is no script and the request went straight
    /// downstream. A script that aborts leaves `req` and `rw` exactly as far
    /// as it got; nothing is written on its behalf.
    pub fn execute(&self, req: &mut Request, rw: &mut Response) -> Option<RunOutcome> {
        if self.code.is_empty() {
            tracing::debug!(name = %self.name, "no script, forwarding");
            self.next.serve(req, rw);
            return None;
        }

        let span = tracing::debug_span!("middleware", name = %self.name, path = %req.path);
        let _guard = span.enter();

        let exchange = Rc::new(RefCell::new(Exchange::new(
            mem::take(req),
            mem::take(rw),
            Arc::clone(&self.next),
        )));
        let outcome = {
            let mut env = core_environment();
            register_capabilities(&mut env, &exchange);
            run_script(&self.code, &mut env)
        };

        // A returned function value may still hold a handle to the exchange.
        let (request, response) = match Rc::try_unwrap(exchange) {
            Ok(cell) => cell.into_inner().into_parts(),
            Err(shared) => {
                let mut exchange = shared.borrow_mut();
                (
                    mem::take(&mut exchange.request),
                    mem::take(&mut exchange.response),
                )
            }
        };
        *req = request;
        *rw = response;
        Some(outcome)
    }
}

impl Handler for ScriptMiddleware {
    fn serve(&self, req: &mut Request, rw: &mut Response) {
        self.execute(req, rw);
    }
}
