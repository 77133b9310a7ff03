//! The per-request `Host`.

use std::sync::Arc;

use sx_eval::Host;

use crate::handler::Handler;
use crate::http::{Request, Response};

/// Everything one script execution may touch: the request it can read and
/// rewrite, the response it can halt with, and the handler `run_next`
/// hands both to.
pub struct Exchange {
    pub request: Request,
    pub response: Response,
    next: Arc<dyn Handler>,
}

impl Exchange {
    pub fn new(request: Request, response: Response, next: Arc<dyn Handler>) -> Self {
        Exchange {
            request,
            response,
            next,
        }
    }

    /// Give back the request and response.
    pub fn into_parts(self) -> (Request, Response) {
        (self.request, self.response)
    }
}

impl Host for Exchange {
    fn request_path(&self) -> String {
        self.request.path.clone()
    }

    fn request_header(&self, name: &str) -> String {
        self.request.headers.get(name).to_owned()
    }

    fn set_request_header(&mut self, name: &str, value: &str) {
        self.request.headers.set(name, value);
    }

    fn halt(&mut self, status: u16, message: &str) {
        self.response.write_error(status, message);
    }

    fn run_next(&mut self) {
        self.next.serve(&mut self.request, &mut self.response);
    }
}
