//! Guard stage — rejects requests that fail a predicate.

use crate::error::DispatchError;
use crate::handler::ErasedResponse;
use crate::mediator::DispatchContext;
use crate::request::RequestEnvelope;

use super::{Middleware, Next};

/// Short-circuits with [`DispatchError::Rejected`] when the predicate
/// returns `false`; forwards untouched otherwise.
///
/// The predicate sees the type-erased envelope, so one guard can apply to
/// every request, or downcast to validate a specific type and wave the
/// rest through.
///
/// ## Example
///
/// ```ignore
/// let mediator = Mediator::builder()
///     .middleware(Guard::new(|request| {
///         match request.downcast_ref::<CreateUser>() {
///             Some(create) => !create.name.is_empty(),
///             None => true,
///         }
///     }))
///     .register::<CreateUser, _>(CreateUserHandler::new())?
///     .build();
/// ```
pub struct Guard<F> {
    check: F,
}

impl<F> Guard<F>
where
    F: Fn(&RequestEnvelope<'_>) -> bool + Send + Sync,
{
    pub fn new(check: F) -> Self {
        Guard { check }
    }
}

impl<F> Middleware for Guard<F>
where
    F: Fn(&RequestEnvelope<'_>) -> bool + Send + Sync,
{
    fn handle(&self, ctx: &DispatchContext, next: Next<'_>) -> Result<ErasedResponse, DispatchError> {
        if !(self.check)(&next.request()) {
            return Err(DispatchError::Rejected(ctx.request().name().to_string()));
        }
        next.invoke()
    }
}
