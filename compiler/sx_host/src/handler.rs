//! One link of the middleware chain.

use crate::http::{Request, Response};

/// Something that can serve a request.
///
/// Handlers are shared across worker threads; per-request state lives in
/// the arguments, never in the handler.
pub trait Handler: Send + Sync {
    fn serve(&self, req: &mut Request, rw: &mut Response);
}

/// Adapter turning a closure into a [`Handler`].
pub struct HandlerFn<F>(F);

/// Wrap a closure as a handler.
pub fn handler_fn<F>(f: F) -> HandlerFn<F>
where
    F: Fn(&mut Request, &mut Response) + Send + Sync,
{
    HandlerFn(f)
}

impl<F> Handler for HandlerFn<F>
where
    F: Fn(&mut Request, &mut Response) + Send + Sync,
{
    fn serve(&self, req: &mut Request, rw: &mut Response) {
        (self.0)(req, rw);
    }
}
