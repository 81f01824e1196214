//! Type-erased (request type, handler) pairs.

use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

use crate::error::DispatchError;
use crate::mediator::DispatchContext;
use crate::request::{Request, RequestType, ResponseType};

use super::RequestHandler;

/// How handler instances are produced for a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HandlerScope {
    /// One shared instance serves every dispatch. The instance must be safe
    /// for concurrent reuse.
    Singleton,
    /// A fresh instance is constructed for each dispatch.
    PerDispatch,
}

/// Type-erased response box flowing back through the pipeline.
pub type ErasedResponse = Box<dyn Any + Send>;

/// Type-erased handler invocation: consumes the boxed request, returns the
/// boxed response.
pub type ErasedInvoke =
    Box<dyn Fn(Box<dyn Any + Send>, &DispatchContext) -> Result<ErasedResponse, DispatchError> + Send + Sync>;

/// A (request type, handler) pair ready for registration.
///
/// The binding erases the request and handler generics behind an invoke
/// closure, but keeps the runtime tokens so the registry can key on the
/// request type and verify the declared response type.
pub struct HandlerBinding {
    request: RequestType,
    response: ResponseType,
    scope: HandlerScope,
    invoke: ErasedInvoke,
}

impl HandlerBinding {
    /// Bind a shared handler instance to request type `R`.
    ///
    /// The instance serves every dispatch of `R` for the life of the
    /// registry (`HandlerScope::Singleton`).
    pub fn new<R, H>(handler: H) -> Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        let handler = Arc::new(handler);
        HandlerBinding {
            request: RequestType::of::<R>(),
            response: ResponseType::of::<R::Response>(),
            scope: HandlerScope::Singleton,
            invoke: Box::new(move |request, ctx| {
                let request = downcast_request::<R>(request)?;
                handler
                    .handle(request, ctx)
                    .map(|response| Box::new(response) as ErasedResponse)
            }),
        }
    }

    /// Bind a factory that constructs a fresh handler per dispatch.
    ///
    /// Use this when the handler carries per-call state and must not be
    /// reused across concurrent dispatches (`HandlerScope::PerDispatch`).
    pub fn per_dispatch<R, H, F>(factory: F) -> Self
    where
        R: Request,
        H: RequestHandler<R> + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        HandlerBinding {
            request: RequestType::of::<R>(),
            response: ResponseType::of::<R::Response>(),
            scope: HandlerScope::PerDispatch,
            invoke: Box::new(move |request, ctx| {
                let request = downcast_request::<R>(request)?;
                factory()
                    .handle(request, ctx)
                    .map(|response| Box::new(response) as ErasedResponse)
            }),
        }
    }

    /// Build a binding from pre-erased parts.
    ///
    /// For integration layers that wire handlers without the generic API
    /// (e.g. a container handing out erased invokers). Unlike the typed
    /// constructors, nothing ties `response` to `request` here — the
    /// registry checks that they agree and rejects the binding with
    /// `TypeMismatch` when they do not. The invoker must consume requests
    /// of exactly `request`'s type; anything else fails the dispatch with
    /// `ContractViolation`.
    pub fn from_raw(
        request: RequestType,
        response: ResponseType,
        scope: HandlerScope,
        invoke: ErasedInvoke,
    ) -> Self {
        HandlerBinding {
            request,
            response,
            scope,
            invoke,
        }
    }

    /// Identity of the request type this binding serves.
    pub fn request(&self) -> RequestType {
        self.request
    }

    /// The response type the binding's invoker declares.
    pub fn response(&self) -> ResponseType {
        self.response
    }

    /// Whether the handler is shared or constructed per dispatch.
    pub fn scope(&self) -> HandlerScope {
        self.scope
    }

    pub(crate) fn call(
        &self,
        request: Box<dyn Any + Send>,
        ctx: &DispatchContext,
    ) -> Result<ErasedResponse, DispatchError> {
        (self.invoke)(request, ctx)
    }
}

impl fmt::Debug for HandlerBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerBinding")
            .field("request", &self.request.name())
            .field("response", &self.response.name())
            .field("scope", &self.scope)
            .finish()
    }
}

fn downcast_request<R: Request>(request: Box<dyn Any + Send>) -> Result<R, DispatchError> {
    request.downcast::<R>().map(|request| *request).map_err(|_| {
        DispatchError::ContractViolation(format!(
            "binding for {} received a request of a different type",
            type_name::<R>()
        ))
    })
}
