/*!
 * Delivery Report
 * What the relay did for one firing. Diagnostics only; the OS never sees it.
 */

use crate::launch::LaunchOutcome;
use serde::{Deserialize, Serialize};

/// Wake resource outcome for a single firing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WakeOutcome {
    /// Alarm did not ask for a wake-up
    NotRequested,
    /// Resource held across the handoff and released afterwards
    Held,
    /// OS denied the resource; handoff went ahead without it
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryReport {
    pub wake: WakeOutcome,
    pub launch: LaunchOutcome,
    /// Processing queue accepted the event
    pub enqueued: bool,
}

impl DeliveryReport {
    pub(crate) fn direct(enqueued: bool) -> Self {
        Self {
            wake: WakeOutcome::NotRequested,
            launch: LaunchOutcome::NotRequested,
            enqueued,
        }
    }

    /// Device woke and the app is on its way to the foreground
    pub fn is_fully_delivered(&self) -> bool {
        self.enqueued
            && !matches!(self.wake, WakeOutcome::Denied)
            && !matches!(self.launch, LaunchOutcome::Failed)
    }
}
