/*!
 * Core Module
 * Fundamental relay types, guards and error handling
 */

pub mod errors;
pub mod guard;
pub mod limits;
pub mod types;

// Re-export for convenience
pub use errors::*;
pub use guard::{Guard, GuardDrop, GuardError, GuardMetadata, GuardResult, WakeGuard};
pub use types::*;
