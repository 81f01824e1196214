//! Runtime type tokens — the identities the registry routes on.

use std::any::{type_name, TypeId};

use super::{Request, RequestKind};

/// Runtime identity of a request type.
///
/// Carries everything the dispatch path needs without the generic parameter:
/// the `TypeId` used as the registry key, the type name for diagnostics, the
/// command/query tag, and the token of the declared response type.
///
/// Resolution is by exact `TypeId` — a request type that happens to look like
/// another is never substituted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestType {
    id: TypeId,
    name: &'static str,
    kind: RequestKind,
    response: ResponseType,
}

impl RequestType {
    /// The token for request type `R`.
    pub fn of<R: Request>() -> Self {
        RequestType {
            id: TypeId::of::<R>(),
            name: type_name::<R>(),
            kind: R::KIND,
            response: ResponseType::of::<R::Response>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> RequestKind {
        self.kind
    }

    /// Token of the response type this request declares.
    pub fn response(&self) -> ResponseType {
        self.response
    }
}

/// Runtime identity of a response type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ResponseType {
    id: TypeId,
    name: &'static str,
}

impl ResponseType {
    /// The token for response type `T`.
    pub fn of<T: Send + 'static>() -> Self {
        ResponseType {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}
