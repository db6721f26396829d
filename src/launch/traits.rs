/*!
 * Launcher Traits
 * Seam to the OS facility that starts or raises the host application
 */

use super::types::LaunchRequest;
use crate::core::errors::RelayResult;
use crate::core::types::PackageIdentity;

/// Foreground launch facility
#[cfg_attr(test, mockall::automock)]
pub trait ForegroundLauncher: Send + Sync {
    /// Whether the host application already has a running foreground presence
    fn has_foreground_presence(&self, package: &PackageIdentity) -> bool;

    /// Ask the OS to start or raise the application
    ///
    /// Fire-and-forget. Fails with `RelayError::LaunchFailed` when the OS
    /// has no launchable entry for the package or refuses the request.
    fn launch_or_raise(&self, request: &LaunchRequest) -> RelayResult<()>;
}
