//! Pipeline continuation — from the current stage down to the handler.

use std::any::Any;
use std::sync::Arc;

use crate::error::DispatchError;
use crate::handler::{ErasedResponse, HandlerBinding};
use crate::mediator::DispatchContext;
use crate::request::RequestEnvelope;

use super::Middleware;

/// Continuation to the remaining pipeline stages and the handler.
///
/// `Next` owns the in-flight request and is consumed by [`invoke`]
/// (`Next::invoke`), so a stage can forward at most once — the compiler
/// enforces the single-call half of the pipeline contract. A stage that
/// never forwards must return its own result instead (short-circuit).
///
/// The cancellation signal is re-checked when the continuation reaches the
/// handler: a dispatch cancelled mid-pipeline settles as `Cancelled`
/// without the handler running.
pub struct Next<'a> {
    stages: &'a [Arc<dyn Middleware>],
    binding: &'a HandlerBinding,
    ctx: &'a DispatchContext,
    request: Box<dyn Any + Send>,
}

impl<'a> Next<'a> {
    pub(crate) fn new(
        stages: &'a [Arc<dyn Middleware>],
        binding: &'a HandlerBinding,
        ctx: &'a DispatchContext,
        request: Box<dyn Any + Send>,
    ) -> Self {
        Next {
            stages,
            binding,
            ctx,
            request,
        }
    }

    /// Read-only view of the in-flight request.
    pub fn request(&self) -> RequestEnvelope<'_> {
        RequestEnvelope::new(&*self.request, self.ctx.request())
    }

    /// Run the remaining stages and the handler, returning the response.
    pub fn invoke(self) -> Result<ErasedResponse, DispatchError> {
        let Next {
            stages,
            binding,
            ctx,
            request,
        } = self;

        match stages.split_first() {
            Some((stage, rest)) => {
                let next = Next {
                    stages: rest,
                    binding,
                    ctx,
                    request,
                };
                stage.handle(ctx, next)
            }
            None => {
                ctx.ensure_active()?;
                binding.call(request, ctx)
            }
        }
    }
}
