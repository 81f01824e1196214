//! Handler registry — build-then-freeze routing table.

mod error;
mod registry;

pub use error::RegistryError;
pub use registry::Registry;
