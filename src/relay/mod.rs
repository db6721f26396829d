/*!
 * Relay Module
 * OS alarm entry point and the handoff to the processing queue
 */

mod notification;
pub mod queue;
mod report;

pub use notification::{NotificationRelay, RelayBuilder};
pub use queue::{alarm_channel, AlarmQueue, AlarmReceiver, ChannelQueue};
pub use report::{DeliveryReport, WakeOutcome};
