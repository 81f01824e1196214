//! Middleware pipeline — cross-cutting behaviors around handler invocation.
//!
//! Stages wrap the handler in an onion: they run in registration order on
//! the way in and unwind in reverse order on the way out. Every dispatch
//! passes through the same stages in the same order, whatever the request
//! type.
//!
//! ```text
//! caller ──▶ stage A ──▶ stage B ──▶ handler
//!                │           │           │
//! caller ◀── stage A ◀── stage B ◀── response
//! ```
//!
//! A stage either forwards exactly once via [`Next::invoke`] — `Next` is
//! consumed by the call, so forwarding twice does not compile — or
//! short-circuits by returning its own result without forwarding, in which
//! case the inner stages and the handler never run.

mod guard;
mod log;
mod middleware;
mod next;

pub use guard::Guard;
pub use log::LogMiddleware;
pub use middleware::Middleware;
pub use next::Next;

use std::sync::Arc;

/// Ordered chain of middleware stages.
///
/// Built during configuration alongside the registry; immutable once the
/// mediator owns it. The first stage pushed is outermost.
#[derive(Clone, Default)]
pub struct Pipeline {
    stages: Vec<Arc<dyn Middleware>>,
}

impl Pipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Pipeline { stages: Vec::new() }
    }

    /// Append a stage. Later stages sit closer to the handler.
    pub fn push<M: Middleware + 'static>(&mut self, stage: M) {
        self.stages.push(Arc::new(stage));
    }

    pub(crate) fn stages(&self) -> &[Arc<dyn Middleware>] {
        &self.stages
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.stages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stages.is_empty()
    }
}
