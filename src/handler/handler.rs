use crate::error::DispatchError;
use crate::mediator::DispatchContext;
use crate::request::Request;

/// Processes requests of type `R`, producing `R::Response`.
///
/// Handlers take `&self` and must be `Send + Sync`: a singleton binding
/// shares one instance across concurrent dispatches. Per-instance state
/// belongs in a per-dispatch binding (see `HandlerBinding::per_dispatch`)
/// or behind interior mutability the handler accounts for itself.
///
/// Domain failures come back as `DispatchError::Handler` (see
/// [`DispatchError::handler`]) and pass through the pipeline unchanged.
///
/// ## Example
///
/// ```ignore
/// struct CreateUserHandler {
///     repo: UserRepository,
/// }
///
/// impl RequestHandler<CreateUser> for CreateUserHandler {
///     fn handle(&self, request: CreateUser, _ctx: &DispatchContext) -> Result<UserId, DispatchError> {
///         self.repo.insert(&request.name).map_err(DispatchError::handler)
///     }
/// }
/// ```
pub trait RequestHandler<R: Request>: Send + Sync {
    fn handle(&self, request: R, ctx: &DispatchContext) -> Result<R::Response, DispatchError>;
}

// Plain functions and closures with the right signature are handlers too.
impl<R, F> RequestHandler<R> for F
where
    R: Request,
    F: Fn(R, &DispatchContext) -> Result<R::Response, DispatchError> + Send + Sync,
{
    fn handle(&self, request: R, ctx: &DispatchContext) -> Result<R::Response, DispatchError> {
        self(request, ctx)
    }
}
