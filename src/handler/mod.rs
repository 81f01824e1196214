//! Handler contracts and type-erased bindings.
//!
//! A handler serves exactly one request type and produces that request's
//! declared response. `HandlerBinding` erases the generics so bindings for
//! different request types can live in one registry.

mod binding;
mod handler;

pub use binding::{ErasedInvoke, ErasedResponse, HandlerBinding, HandlerScope};
pub use handler::RequestHandler;
