//! Registry — maps each request type to its single handler binding.

use std::any::TypeId;
use std::collections::HashMap;

use crate::error::DispatchError;
use crate::handler::HandlerBinding;
use crate::request::{Request, RequestType};

use super::RegistryError;

/// Build-then-freeze mapping from request types to handler bindings.
///
/// The registry holds at most one binding per request type. It is built
/// during startup, frozen once configuration is complete, and read-only
/// from then on — which is what makes it safe to share across concurrent
/// dispatches without locking.
///
/// Resolution is an O(1) lookup keyed on the request's `TypeId`, exact
/// match only: a request type that is structurally identical to a
/// registered one still misses.
///
/// ## Example
///
/// ```ignore
/// let mut registry = Registry::new();
/// registry.register(HandlerBinding::new::<CreateUser, _>(CreateUserHandler::new()))?;
/// registry.freeze();
///
/// let binding = registry.resolve(RequestType::of::<CreateUser>())?;
/// ```
#[derive(Debug)]
pub struct Registry {
    bindings: HashMap<TypeId, HandlerBinding>,
    frozen: bool,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty, unfrozen registry.
    pub fn new() -> Self {
        Registry {
            bindings: HashMap::new(),
            frozen: false,
        }
    }

    /// Add a binding.
    ///
    /// Fails with `Frozen` after [`freeze`](Registry::freeze), with
    /// `TypeMismatch` when the binding's declared response type disagrees
    /// with the request's, and with `DuplicateHandler` when the request
    /// type is already bound (the existing binding stays active).
    pub fn register(&mut self, binding: HandlerBinding) -> Result<(), RegistryError> {
        let request = binding.request();

        if self.frozen {
            return Err(RegistryError::Frozen {
                request: request.name(),
            });
        }

        if binding.response() != request.response() {
            return Err(RegistryError::TypeMismatch {
                request: request.name(),
                expected: request.response().name(),
                declared: binding.response().name(),
            });
        }

        if self.bindings.contains_key(&request.id()) {
            return Err(RegistryError::DuplicateHandler {
                request: request.name(),
            });
        }

        self.bindings.insert(request.id(), binding);
        Ok(())
    }

    /// Look up the binding for a request type.
    ///
    /// Misses fail with `HandlerNotFound` — never defaulted, never
    /// substituted with a structurally compatible binding.
    pub fn resolve(&self, request: RequestType) -> Result<&HandlerBinding, DispatchError> {
        self.bindings
            .get(&request.id())
            .ok_or(DispatchError::HandlerNotFound {
                request: request.name(),
            })
    }

    /// Transition from mutable build state to immutable serve state.
    ///
    /// One-way: there is no unfreeze. Subsequent `register` calls fail
    /// with `Frozen`.
    pub fn freeze(&mut self) {
        self.frozen = true;
    }

    pub fn is_frozen(&self) -> bool {
        self.frozen
    }

    /// Whether a binding exists for request type `R`.
    pub fn contains<R: Request>(&self) -> bool {
        self.bindings.contains_key(&TypeId::of::<R>())
    }

    /// Names of all registered request types.
    pub fn request_names(&self) -> Vec<&'static str> {
        self.bindings
            .values()
            .map(|binding| binding.request().name())
            .collect()
    }

    /// Number of registered bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
