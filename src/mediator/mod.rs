//! Dispatch entry point and per-call machinery.
//!
//! `Mediator` is the single public door: it resolves the handler for a
//! request, builds the per-call `DispatchContext`, runs the middleware
//! pipeline with the handler innermost, and hands the response back.

mod builder;
mod cancellation;
mod context;
mod mediator;

pub use builder::MediatorBuilder;
pub use cancellation::CancellationToken;
pub use context::DispatchContext;
pub use mediator::Mediator;
