//! Mediator integration tests.

mod support;

mod cancellation;
mod concurrency;
