//! Shared fixtures: request types, handlers, and recording middleware.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use mediated_rust::{
    Command, DispatchContext, DispatchError, ErasedResponse, Middleware, Next, Query,
    RequestHandler,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserId(pub String);

#[derive(Command)]
#[response(UserId)]
pub struct CreateUser {
    pub name: String,
}

#[derive(Command)]
pub struct DeactivateUser {
    pub id: String,
}

#[derive(Query)]
#[response(Option<String>)]
pub struct GetUserName {
    pub id: String,
}

#[derive(Query)]
#[response(u64)]
pub struct SlowQuery;

#[derive(Query)]
#[response(u64)]
pub struct UnroutedQuery;

/// Handler for `CreateUser` that counts its invocations.
pub struct CreateUserHandler {
    calls: Arc<AtomicUsize>,
}

impl CreateUserHandler {
    pub fn new(calls: Arc<AtomicUsize>) -> Self {
        CreateUserHandler { calls }
    }
}

impl RequestHandler<CreateUser> for CreateUserHandler {
    fn handle(&self, request: CreateUser, _ctx: &DispatchContext) -> Result<UserId, DispatchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(UserId(format!("user-{}", request.name.to_lowercase())))
    }
}

/// Middleware that records before/after markers into a shared trace.
pub struct Recorder {
    label: &'static str,
    trace: Arc<Mutex<Vec<String>>>,
}

impl Recorder {
    pub fn new(label: &'static str, trace: Arc<Mutex<Vec<String>>>) -> Self {
        Recorder { label, trace }
    }
}

impl Middleware for Recorder {
    fn handle(&self, _ctx: &DispatchContext, next: Next<'_>) -> Result<ErasedResponse, DispatchError> {
        self.trace
            .lock()
            .unwrap()
            .push(format!("{}-before", self.label));
        let response = next.invoke()?;
        self.trace
            .lock()
            .unwrap()
            .push(format!("{}-after", self.label));
        Ok(response)
    }
}

/// Middleware that short-circuits every dispatch with a fixed response,
/// never forwarding to the inner stages.
pub struct ShortCircuit<T> {
    response: T,
}

impl<T: Clone + Send + Sync + 'static> ShortCircuit<T> {
    pub fn new(response: T) -> Self {
        ShortCircuit { response }
    }
}

impl<T: Clone + Send + Sync + 'static> Middleware for ShortCircuit<T> {
    fn handle(&self, _ctx: &DispatchContext, _next: Next<'_>) -> Result<ErasedResponse, DispatchError> {
        Ok(Box::new(self.response.clone()))
    }
}

pub fn trace() -> Arc<Mutex<Vec<String>>> {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn counter() -> Arc<AtomicUsize> {
    Arc::new(AtomicUsize::new(0))
}
