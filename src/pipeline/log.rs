//! Logging stage — one line per dispatch.

use std::sync::{Arc, Mutex};
use std::time::Instant;

use crate::error::DispatchError;
use crate::handler::ErasedResponse;
use crate::mediator::DispatchContext;

use super::{Middleware, Next};

/// Logs every dispatch that reaches it: kind, request name, outcome, and
/// elapsed time.
///
/// Lines go to stdout by default; `with_buffer` redirects them to a shared
/// buffer instead, which tests use to assert on output.
///
/// ## Example
///
/// ```ignore
/// let mediator = Mediator::builder()
///     .middleware(LogMiddleware::new())
///     .register::<CreateUser, _>(CreateUserHandler::new())?
///     .build();
///
/// // [DISPATCH] command app::CreateUser ok (312µs)
/// ```
pub struct LogMiddleware {
    buffer: Option<Arc<Mutex<Vec<String>>>>,
}

impl Default for LogMiddleware {
    fn default() -> Self {
        Self::new()
    }
}

impl LogMiddleware {
    /// Log to stdout.
    pub fn new() -> Self {
        LogMiddleware { buffer: None }
    }

    /// Log into a shared buffer instead of stdout.
    pub fn with_buffer(buffer: Arc<Mutex<Vec<String>>>) -> Self {
        LogMiddleware {
            buffer: Some(buffer),
        }
    }

    fn write(&self, line: String) {
        match &self.buffer {
            Some(buffer) => {
                if let Ok(mut buffer) = buffer.lock() {
                    buffer.push(line);
                }
            }
            None => println!("{}", line),
        }
    }
}

impl Middleware for LogMiddleware {
    fn handle(&self, ctx: &DispatchContext, next: Next<'_>) -> Result<ErasedResponse, DispatchError> {
        let started = Instant::now();
        let request = ctx.request();

        let result = next.invoke();

        let elapsed = started.elapsed();
        match &result {
            Ok(_) => self.write(format!(
                "[DISPATCH] {} {} ok ({:?})",
                request.kind(),
                request.name(),
                elapsed
            )),
            Err(e) => self.write(format!(
                "[DISPATCH] {} {} failed: {} ({:?})",
                request.kind(),
                request.name(),
                e,
                elapsed
            )),
        }

        result
    }
}
