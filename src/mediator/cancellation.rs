//! Cooperative cancellation for in-flight dispatches.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Signal that a dispatch should stop at its next check point.
///
/// Clones share the signal: hand one clone to `send_with` and keep another
/// to fire from elsewhere (another thread, a timeout watcher). Cancellation
/// is cooperative — the mediator checks at entry and again just before the
/// handler runs, and stages or handlers with long work check
/// `DispatchContext::ensure_active` themselves. Nothing is preempted.
///
/// ## Example
///
/// ```ignore
/// let token = CancellationToken::new();
/// let remote = token.clone();
///
/// std::thread::spawn(move || remote.cancel());
///
/// match mediator.send_with(SlowQuery::default(), token) {
///     Err(DispatchError::Cancelled) => { /* settled, no partial success */ }
///     other => { /* completed before the signal fired */ }
/// }
/// ```
#[derive(Clone, Debug, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// A fresh, unfired token.
    pub fn new() -> Self {
        CancellationToken {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Fire the signal. Idempotent; cannot be unfired.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}
