//! Borrowed, type-erased view of an in-flight request.

use std::any::{Any, TypeId};

use super::{Request, RequestKind, RequestType};

/// What middleware sees of the request being dispatched.
///
/// The envelope is read-only: a stage can inspect the request (by name, kind,
/// or downcast) but cannot replace it or change its type — the owned value
/// travels inside the pipeline continuation and only the handler consumes it.
///
/// ## Example
///
/// ```ignore
/// fn handle(&self, ctx: &DispatchContext, next: Next<'_>) -> Result<ErasedResponse, DispatchError> {
///     if let Some(create) = next.request().downcast_ref::<CreateUser>() {
///         // type-specific inspection
///     }
///     next.invoke()
/// }
/// ```
pub struct RequestEnvelope<'a> {
    payload: &'a (dyn Any + Send),
    ty: RequestType,
}

impl<'a> RequestEnvelope<'a> {
    pub(crate) fn new(payload: &'a (dyn Any + Send), ty: RequestType) -> Self {
        RequestEnvelope { payload, ty }
    }

    /// Type name of the request.
    pub fn name(&self) -> &'static str {
        self.ty.name()
    }

    /// Command or query.
    pub fn kind(&self) -> RequestKind {
        self.ty.kind()
    }

    /// Full runtime identity of the request type.
    pub fn request_type(&self) -> RequestType {
        self.ty
    }

    /// Whether the request is a value of type `R`.
    pub fn is<R: Request>(&self) -> bool {
        self.ty.id() == TypeId::of::<R>()
    }

    /// Borrow the request as `R`, if that is its concrete type.
    pub fn downcast_ref<R: Request>(&self) -> Option<&R> {
        self.payload.downcast_ref::<R>()
    }
}
