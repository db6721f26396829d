/*!
 * Launch Module
 * Brings the host application to the foreground when an alarm wakes the device
 */

pub mod traits;
pub mod types;

pub use traits::ForegroundLauncher;
pub use types::{LaunchFlags, LaunchOutcome, LaunchRequest};
