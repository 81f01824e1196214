//! Per-dispatch context: request identity, cancellation, stage-local state.

use std::collections::HashMap;
use std::sync::Mutex;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::error::DispatchError;
use crate::request::RequestType;

use super::CancellationToken;

/// Ephemeral state for one dispatch call.
///
/// Created when `send` is called, dropped when the call settles; never
/// shared between dispatches. Stages and the handler reach it by reference:
/// the request's identity, the cancellation signal, and a key/value store
/// for state an outer stage wants to hand inward (a transaction id, an
/// authenticated principal, a deadline).
///
/// Values are stored as JSON and round-trip through serde:
///
/// ```ignore
/// ctx.set("txn_id", &42u64)?;
/// let txn: Option<u64> = ctx.get("txn_id")?;
/// ```
pub struct DispatchContext {
    request: RequestType,
    token: CancellationToken,
    values: Mutex<HashMap<String, Value>>,
}

impl DispatchContext {
    pub(crate) fn new(request: RequestType, token: CancellationToken) -> Self {
        DispatchContext {
            request,
            token,
            values: Mutex::new(HashMap::new()),
        }
    }

    /// Identity of the request being dispatched.
    pub fn request(&self) -> RequestType {
        self.request
    }

    /// The cancellation signal attached to this dispatch.
    pub fn cancellation(&self) -> &CancellationToken {
        &self.token
    }

    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Fail with `Cancelled` if the signal has fired.
    ///
    /// Cooperative stages and handlers call this at their check points:
    ///
    /// ```ignore
    /// for chunk in work {
    ///     ctx.ensure_active()?;
    ///     process(chunk);
    /// }
    /// ```
    pub fn ensure_active(&self) -> Result<(), DispatchError> {
        if self.token.is_cancelled() {
            Err(DispatchError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Store a stage-local value under `key`, replacing any previous one.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) -> Result<(), DispatchError> {
        let value = serde_json::to_value(value)?;
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }

    /// Read a stage-local value back as `T`.
    ///
    /// `Ok(None)` when the key is absent; `Decode` when the stored value
    /// does not deserialize as `T`.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, DispatchError> {
        let values = self.values.lock().unwrap();
        match values.get(key) {
            Some(value) => Ok(Some(serde_json::from_value(value.clone())?)),
            None => Ok(None),
        }
    }

    /// Raw JSON view of a stage-local value.
    pub fn raw(&self, key: &str) -> Option<Value> {
        self.values.lock().unwrap().get(key).cloned()
    }

    /// Whether a stage-local value exists under `key`.
    pub fn contains(&self, key: &str) -> bool {
        self.values.lock().unwrap().contains_key(key)
    }
}
