//! Mediator — the dispatch entry point.

use std::any::{type_name, Any};

use crate::error::DispatchError;
use crate::pipeline::{Next, Pipeline};
use crate::registry::Registry;
use crate::request::{Request, RequestType};

use super::{CancellationToken, DispatchContext, MediatorBuilder};

/// Routes each request to its single registered handler through the
/// middleware pipeline.
///
/// The mediator is immutable: its registry is frozen and its pipeline
/// fixed, so one instance (or an `Arc` of it) is safely shared across
/// concurrent callers. Each `send` is independent — no ordering exists
/// between calls, only the strict onion nesting within one call.
///
/// ## Example
///
/// ```ignore
/// let mediator = Mediator::builder()
///     .middleware(LogMiddleware::new())
///     .register::<CreateUser, _>(CreateUserHandler::new())?
///     .register::<GetUser, _>(GetUserHandler::new())?
///     .build();
///
/// let id: UserId = mediator.send(CreateUser { name: "Ada".into() })?;
/// let user: Option<User> = mediator.send(GetUser { id })?;
/// ```
pub struct Mediator {
    registry: Registry,
    pipeline: Pipeline,
}

impl Mediator {
    /// Start configuring a mediator.
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::new()
    }

    /// Build from an already-populated registry and pipeline.
    ///
    /// Freezes the registry if the caller has not.
    pub fn new(mut registry: Registry, pipeline: Pipeline) -> Self {
        registry.freeze();
        Mediator { registry, pipeline }
    }

    /// Dispatch a request and return its handler's response.
    ///
    /// Uses a fresh, never-fired cancellation signal; see
    /// [`send_with`](Mediator::send_with) to attach one.
    pub fn send<R: Request>(&self, request: R) -> Result<R::Response, DispatchError> {
        self.send_with(request, CancellationToken::new())
    }

    /// Dispatch a request with a caller-supplied cancellation signal.
    ///
    /// Resolution happens first, before the pipeline exists: an
    /// unregistered request type fails with `HandlerNotFound` and no
    /// middleware runs at all. An already-fired signal settles the call as
    /// `Cancelled`, also before any stage runs. Otherwise the stages run
    /// in order around the handler and exactly one handler invocation
    /// occurs — unless a stage short-circuits or fails first, in which
    /// case there are zero.
    pub fn send_with<R: Request>(
        &self,
        request: R,
        token: CancellationToken,
    ) -> Result<R::Response, DispatchError> {
        let ty = RequestType::of::<R>();
        let binding = self.registry.resolve(ty)?;

        let ctx = DispatchContext::new(ty, token);
        ctx.ensure_active()?;

        let next = Next::new(
            self.pipeline.stages(),
            binding,
            &ctx,
            Box::new(request) as Box<dyn Any + Send>,
        );
        let response = next.invoke()?;

        match response.downcast::<R::Response>() {
            Ok(response) => Ok(*response),
            Err(_) => Err(DispatchError::ResponseMismatch {
                request: ty.name(),
                expected: type_name::<R::Response>(),
            }),
        }
    }

    /// Read access to the frozen registry (introspection).
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// The middleware pipeline wrapped around every dispatch.
    pub fn pipeline(&self) -> &Pipeline {
        &self.pipeline
    }
}
