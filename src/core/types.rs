/*!
 * Core Types
 * Common types shared by the relay, launcher and queue
 */

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Opaque alarm identifier assigned by the scheduling collaborator
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlarmId(Arc<str>);

impl AlarmId {
    pub fn new(id: impl AsRef<str>) -> Self {
        Self(Arc::from(id.as_ref()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AlarmId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for AlarmId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for AlarmId {
    fn from(id: String) -> Self {
        Self(Arc::from(id))
    }
}

/// Identity of the host application, used to build launch requests
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PackageIdentity(String);

impl PackageIdentity {
    pub fn new(identity: impl Into<String>) -> Self {
        Self(identity.into())
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Display for PackageIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Default for PackageIdentity {
    fn default() -> Self {
        Self(crate::core::limits::DEFAULT_PACKAGE_IDENTITY.to_string())
    }
}

/// A single timer firing as delivered by the OS
///
/// The payload belongs to the scheduling collaborator (timer id, repeat
/// flag, callback handle, original scheduling parameters) and is carried
/// through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlarmEvent {
    pub id: AlarmId,
    #[serde(default)]
    pub requires_wake: bool,
    #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
    pub payload: serde_json::Value,
}

impl AlarmEvent {
    pub fn new(id: impl Into<AlarmId>, requires_wake: bool) -> Self {
        Self {
            id: id.into(),
            requires_wake,
            payload: serde_json::Value::Null,
        }
    }

    /// Attach the collaborator's opaque payload
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }
}
