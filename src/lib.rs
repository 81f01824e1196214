mod error;
mod handler;
mod mediator;
mod pipeline;
mod registry;
mod request;

pub use error::DispatchError;
pub use handler::{ErasedInvoke, ErasedResponse, HandlerBinding, HandlerScope, RequestHandler};
pub use mediator::{CancellationToken, DispatchContext, Mediator, MediatorBuilder};
pub use pipeline::{Guard, LogMiddleware, Middleware, Next, Pipeline};
pub use registry::{Registry, RegistryError};
pub use request::{Request, RequestEnvelope, RequestKind, RequestType, ResponseType};

// Re-export the derive macros so #[derive(Command)] / #[derive(Query)] work
// with just this crate as a dependency.
#[cfg(feature = "derive")]
pub use mediated_rust_macros::{Command, Query};
