//! Sx Host - runs sxhook scripts as HTTP middleware.
//!
//! The scripting core (`sx_eval`) only knows the [`sx_eval::Host`] trait.
//! This crate supplies the other side of it:
//!
//! - [`Request`], [`Response`] and [`Headers`]: the in-flight exchange
//! - [`Handler`]: one link of the middleware chain
//! - [`Exchange`]: the per-request `Host` implementation
//! - [`ScriptMiddleware`]: builds a fresh environment per request, binds
//!   the capabilities to that request's exchange and runs the script
//! - [`Config`]: the plugin configuration (`code = "..."`)
//!
//! # Example
//!
//! ```text
//! let next = Arc::new(handler_fn(|_req, rw| rw.write_status(200)));
//! let config = Config::with_code(r#"(set_req_header "X-Demo" "test") (run_next)"#);
//! let middleware = ScriptMiddleware::new(next, &config, "demo");
//! middleware.serve(&mut request, &mut response);
//! ```

mod config;
mod exchange;
mod handler;
mod headers;
mod http;
mod middleware;

pub use config::{Config, ConfigError};
pub use exchange::Exchange;
pub use handler::{handler_fn, Handler, HandlerFn};
pub use headers::Headers;
pub use http::{Request, Response};
pub use middleware::ScriptMiddleware;
