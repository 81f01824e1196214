//! Request contracts — typed commands and queries.
//!
//! A request is an immutable value the caller hands to the mediator. Its
//! concrete type is its identity: it fixes the response type and whether
//! the request is a command (may mutate state) or a query (pure read).

mod envelope;
mod request;
mod token;

pub use envelope::RequestEnvelope;
pub use request::{Request, RequestKind};
pub use token::{RequestType, ResponseType};
