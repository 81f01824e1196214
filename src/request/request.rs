use std::fmt;

/// Classification of a request: does handling it change state?
///
/// The distinction is a tag, not a capability — both kinds flow through the
/// same registry and pipeline. It exists so middleware and logs can treat
/// writes and reads differently without knowing concrete types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Handling may mutate system state. The response is often `()` when
    /// there is nothing meaningful to return.
    Command,
    /// Handling must not produce an observable side effect.
    Query,
}

impl RequestKind {
    pub fn is_command(&self) -> bool {
        matches!(self, RequestKind::Command)
    }

    pub fn is_query(&self) -> bool {
        matches!(self, RequestKind::Query)
    }
}

impl fmt::Display for RequestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestKind::Command => write!(f, "command"),
            RequestKind::Query => write!(f, "query"),
        }
    }
}

/// A value that can be sent through the mediator.
///
/// Each concrete request type declares exactly one response type, fixed at
/// declaration time. With the `derive` feature enabled, `#[derive(Command)]`
/// and `#[derive(Query)]` implement this trait; `#[response(T)]` picks the
/// response type (default `()`).
///
/// ## Example
///
/// ```ignore
/// #[derive(Command)]
/// #[response(UserId)]
/// struct CreateUser {
///     name: String,
/// }
///
/// // or by hand:
/// impl Request for CreateUser {
///     type Response = UserId;
///     const KIND: RequestKind = RequestKind::Command;
/// }
/// ```
pub trait Request: Send + 'static {
    /// The response produced when this request is handled.
    type Response: Send + 'static;

    /// Whether this request is a command or a query.
    const KIND: RequestKind;
}
