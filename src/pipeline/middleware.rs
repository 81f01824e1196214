use crate::error::DispatchError;
use crate::handler::ErasedResponse;
use crate::mediator::DispatchContext;

use super::Next;

/// A cross-cutting behavior wrapped around handler invocation.
///
/// Stages see every request type-erased: `ctx` carries the request's
/// identity and the dispatch's cancellation signal, and `next.request()`
/// exposes a read-only envelope for inspection or downcasting. The request
/// itself cannot be mutated or replaced.
///
/// A stage must do one of two things:
/// - forward with `next.invoke()` (at most once — `invoke` consumes `next`)
///   and return or wrap the inner result, or
/// - short-circuit by returning its own result or failure without forwarding.
///
/// A stage may replace the response on the way out, but only with a value
/// of the request's declared response type; anything else fails the
/// dispatch with `ResponseMismatch`.
///
/// ## Example
///
/// ```ignore
/// struct Timing;
///
/// impl Middleware for Timing {
///     fn handle(&self, ctx: &DispatchContext, next: Next<'_>) -> Result<ErasedResponse, DispatchError> {
///         let started = Instant::now();
///         let result = next.invoke();
///         println!("{} took {:?}", ctx.request().name(), started.elapsed());
///         result
///     }
/// }
/// ```
pub trait Middleware: Send + Sync {
    fn handle(&self, ctx: &DispatchContext, next: Next<'_>) -> Result<ErasedResponse, DispatchError>;
}
