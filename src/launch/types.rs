/*!
 * Launch Types
 */

use crate::core::types::PackageIdentity;
use serde::{Deserialize, Serialize};

/// How the OS should bring the host application forward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LaunchFlags {
    /// Move an existing task to the front instead of stacking a new one
    pub reuse_task: bool,
    /// Start a fresh task when none exists (required outside an activity context)
    pub new_task_if_needed: bool,
    /// Bring the task back to its root screen
    pub reset_to_root: bool,
}

impl LaunchFlags {
    /// Flags used when an alarm raises the application
    pub const RAISE_EXISTING: LaunchFlags = LaunchFlags {
        reuse_task: true,
        new_task_if_needed: true,
        reset_to_root: true,
    };
}

impl Default for LaunchFlags {
    fn default() -> Self {
        Self::RAISE_EXISTING
    }
}

/// A fire-and-forget request to launch or raise the host application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LaunchRequest {
    pub package: PackageIdentity,
    pub flags: LaunchFlags,
}

impl LaunchRequest {
    pub fn new(package: PackageIdentity) -> Self {
        Self {
            package,
            flags: LaunchFlags::RAISE_EXISTING,
        }
    }
}

/// What the relay did about the foreground for a single firing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LaunchOutcome {
    /// Alarm did not ask for a wake-up
    NotRequested,
    /// Launching on wake is switched off in configuration
    Disabled,
    /// Host application already had a foreground presence
    AlreadyForeground,
    /// Launch request handed to the OS
    Requested,
    /// OS rejected the launch request
    Failed,
}
