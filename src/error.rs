use std::error::Error;
use std::fmt;

/// Error type for dispatch operations.
///
/// Everything `send` can fail with. Registration-time failures live in
/// `RegistryError`; this enum covers the per-call path. Handler-level
/// (domain) failures pass through unchanged in the `Handler` variant — the
/// mediator never swallows or translates them.
#[derive(Debug)]
pub enum DispatchError {
    /// No handler is registered for the request type.
    HandlerNotFound { request: &'static str },
    /// The dispatch's cancellation signal fired before the handler completed.
    Cancelled,
    /// A guard or validation stage rejected the request.
    Rejected(String),
    /// Encoding or decoding a context value failed.
    Decode(String),
    /// A stage returned a response that is not the request's declared
    /// response type.
    ResponseMismatch {
        request: &'static str,
        expected: &'static str,
    },
    /// A binding or stage broke the dispatch contract (e.g. an erased
    /// binding that cannot consume the request type it was registered for).
    ContractViolation(String),
    /// Handler-level failure, passed through unchanged.
    Handler(Box<dyn Error + Send + Sync>),
}

impl DispatchError {
    /// Wrap a domain error for propagation out of a handler.
    pub fn handler<E: Error + Send + Sync + 'static>(err: E) -> Self {
        DispatchError::Handler(Box::new(err))
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DispatchError::HandlerNotFound { request } => {
                write!(f, "no handler registered for {}", request)
            }
            DispatchError::Cancelled => write!(f, "dispatch cancelled"),
            DispatchError::Rejected(request) => write!(f, "request rejected: {}", request),
            DispatchError::Decode(msg) => write!(f, "decode failed: {}", msg),
            DispatchError::ResponseMismatch { request, expected } => write!(
                f,
                "response for {} is not the declared {}",
                request, expected
            ),
            DispatchError::ContractViolation(msg) => {
                write!(f, "dispatch contract violated: {}", msg)
            }
            DispatchError::Handler(e) => write!(f, "handler error: {}", e),
        }
    }
}

impl Error for DispatchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            DispatchError::Handler(e) => Some(e.as_ref()),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for DispatchError {
    fn from(err: serde_json::Error) -> Self {
        DispatchError::Decode(err.to_string())
    }
}

impl From<Box<dyn Error + Send + Sync>> for DispatchError {
    fn from(err: Box<dyn Error + Send + Sync>) -> Self {
        DispatchError::Handler(err)
    }
}
