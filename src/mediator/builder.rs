//! Builder — wires handlers and middleware, then freezes into a mediator.

use crate::handler::{HandlerBinding, RequestHandler};
use crate::pipeline::{Middleware, Pipeline};
use crate::registry::{Registry, RegistryError};
use crate::request::Request;

use std::fmt;

use super::Mediator;

/// Collects handler bindings and middleware stages, then freezes the
/// registry and produces an immutable [`Mediator`].
///
/// Registration returns `Result` so configuration errors (duplicate
/// handler, response mismatch) surface at startup, where they are fatal —
/// never at dispatch time. Chain with `?`:
///
/// ## Example
///
/// ```ignore
/// let mediator = Mediator::builder()
///     .middleware(LogMiddleware::new())
///     .middleware(Guard::new(validate))
///     .register::<CreateUser, _>(CreateUserHandler::new())?
///     .register_factory::<ImportUsers, _, _>(|| ImportUsersHandler::default())?
///     .build();
/// ```
#[derive(Default)]
pub struct MediatorBuilder {
    registry: Registry,
    pipeline: Pipeline,
}

impl fmt::Debug for MediatorBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediatorBuilder")
            .field("registry", &self.registry)
            .field("pipeline_len", &self.pipeline.len())
            .finish()
    }
}

impl MediatorBuilder {
    pub fn new() -> Self {
        MediatorBuilder {
            registry: Registry::new(),
            pipeline: Pipeline::new(),
        }
    }

    /// Bind a shared handler instance for request type `R`.
    pub fn register<R, H>(mut self, handler: H) -> Result<Self, RegistryError>
    where
        R: Request,
        H: RequestHandler<R> + 'static,
    {
        self.registry.register(HandlerBinding::new::<R, H>(handler))?;
        Ok(self)
    }

    /// Bind a factory constructing a fresh handler per dispatch of `R`.
    pub fn register_factory<R, H, F>(mut self, factory: F) -> Result<Self, RegistryError>
    where
        R: Request,
        H: RequestHandler<R> + 'static,
        F: Fn() -> H + Send + Sync + 'static,
    {
        self.registry
            .register(HandlerBinding::per_dispatch::<R, H, F>(factory))?;
        Ok(self)
    }

    /// Register a pre-built (possibly erased) binding.
    pub fn register_binding(mut self, binding: HandlerBinding) -> Result<Self, RegistryError> {
        self.registry.register(binding)?;
        Ok(self)
    }

    /// Append a middleware stage.
    ///
    /// Stages wrap every dispatch in the order they are added — the first
    /// added is outermost.
    pub fn middleware<M: Middleware + 'static>(mut self, stage: M) -> Self {
        self.pipeline.push(stage);
        self
    }

    /// Freeze the registry and produce the mediator.
    pub fn build(self) -> Mediator {
        Mediator::new(self.registry, self.pipeline)
    }
}
