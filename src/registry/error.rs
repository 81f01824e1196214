use std::fmt;

/// Error type for registry configuration.
///
/// All of these mean the configuring code is wrong. They surface at
/// startup, never during dispatch, and are not recovered automatically.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The request type already has a handler bound. The first binding
    /// stays active.
    DuplicateHandler { request: &'static str },
    /// The binding's declared response type disagrees with the response
    /// type the request declares.
    TypeMismatch {
        request: &'static str,
        expected: &'static str,
        declared: &'static str,
    },
    /// Registration was attempted after the registry was frozen.
    Frozen { request: &'static str },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateHandler { request } => {
                write!(f, "a handler is already registered for {}", request)
            }
            RegistryError::TypeMismatch {
                request,
                expected,
                declared,
            } => write!(
                f,
                "handler for {} declares response {} but the request declares {}",
                request, declared, expected
            ),
            RegistryError::Frozen { request } => {
                write!(f, "registry is frozen, cannot register {}", request)
            }
        }
    }
}

impl std::error::Error for RegistryError {}
