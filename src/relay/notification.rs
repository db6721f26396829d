/*!
 * Notification Relay
 *
 * The entry point the OS calls when a timer fires. It holds the wake
 * resource across the handoff, optionally raises the host application and
 * enqueues the event for the worker context. It never waits for the
 * deferred callback and never surfaces an error to its caller.
 */

use super::queue::AlarmQueue;
use super::report::{DeliveryReport, WakeOutcome};
use crate::config::RelayConfig;
use crate::core::errors::ConfigError;
use crate::core::guard::Guard;
use crate::core::types::AlarmEvent;
use crate::launch::{ForegroundLauncher, LaunchOutcome, LaunchRequest};
use crate::monitoring::{AtomicRelayStats, FiringSpan, RelayStats};
use crate::power::{WakeCoordinator, WakePrimitive};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// OS-facing alarm receiver
///
/// `Send + Sync`; overlapping firings on different OS threads are safe.
pub struct NotificationRelay {
    coordinator: WakeCoordinator,
    launcher: Arc<dyn ForegroundLauncher>,
    queue: Arc<dyn AlarmQueue>,
    config: RelayConfig,
    stats: AtomicRelayStats,
}

impl NotificationRelay {
    pub fn builder() -> RelayBuilder {
        RelayBuilder::new()
    }

    /// Handle one timer firing
    ///
    /// Steps for a wake-up alarm, in order: take a wake share, raise the
    /// host application if it has no foreground presence, enqueue, give
    /// the wake share back. Failed wake or launch steps are logged and
    /// skipped. A failed enqueue loses this firing's work; it is logged
    /// and counted, and the call still returns normally.
    pub fn on_alarm_fired(&self, event: AlarmEvent) -> DeliveryReport {
        let span = FiringSpan::new(&event.id, event.requires_wake);
        let _entered = span.enter();
        self.stats.inc_fired();

        if !event.requires_wake {
            let enqueued = self.hand_off(event, &span);
            return DeliveryReport::direct(enqueued);
        }

        self.stats.inc_wake_requested();
        let (mut guard, wake) = match self.coordinator.acquire(&event.id) {
            Ok(guard) => (Some(guard), WakeOutcome::Held),
            Err(e) => {
                // Losing the scheduled work is worse than a missed wake-up
                self.stats.inc_wake_denied();
                warn!(alarm_id = %event.id, error = %e, "wake resource denied, delivering anyway");
                (None, WakeOutcome::Denied)
            }
        };

        let launch = self.raise_foreground();
        let enqueued = self.hand_off(event, &span);

        // Released only after enqueue returned
        if let Some(guard) = guard.as_mut() {
            if let Err(e) = guard.release() {
                warn!(error = %e, "wake guard release failed");
            }
        }

        DeliveryReport {
            wake,
            launch,
            enqueued,
        }
    }

    fn raise_foreground(&self) -> LaunchOutcome {
        if !self.config.launch_on_wake {
            return LaunchOutcome::Disabled;
        }

        let package = &self.config.package;
        if self.launcher.has_foreground_presence(package) {
            self.stats.inc_launch_skipped();
            debug!(package = %package, "host application already in foreground");
            return LaunchOutcome::AlreadyForeground;
        }

        self.stats.inc_launch_requested();
        let request = LaunchRequest::new(package.clone());
        match self.launcher.launch_or_raise(&request) {
            Ok(()) => {
                debug!(package = %package, "foreground launch requested");
                LaunchOutcome::Requested
            }
            Err(e) => {
                self.stats.inc_launch_failed();
                warn!(package = %package, error = %e, "foreground launch failed");
                LaunchOutcome::Failed
            }
        }
    }

    fn hand_off(&self, event: AlarmEvent, span: &FiringSpan) -> bool {
        let alarm_id = event.id.clone();

        match self.queue.enqueue(event) {
            Ok(()) => {
                self.stats.inc_enqueued();
                span.record_result(true);
                info!(alarm_id = %alarm_id, "alarm handed to processing queue");
                true
            }
            Err(e) => {
                self.stats.inc_enqueue_failed();
                span.record_result(false);
                span.record_error(&e.to_string());
                error!(alarm_id = %alarm_id, error = %e, "alarm lost, processing queue rejected it");
                false
            }
        }
    }

    pub fn stats(&self) -> RelayStats {
        self.stats.snapshot()
    }

    pub fn wake_coordinator(&self) -> &WakeCoordinator {
        &self.coordinator
    }

    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Builder wiring the relay to its collaborators
///
/// # Example
///
/// ```ignore
/// let (queue, receiver) = alarm_channel(config.queue_capacity, config.enqueue_lookahead());
/// let relay = NotificationRelay::builder()
///     .with_config(config)
///     .with_wake_primitive(power_manager)
///     .with_launcher(activity_launcher)
///     .with_queue(queue)
///     .build()?;
/// ```
pub struct RelayBuilder {
    config: RelayConfig,
    coordinator: Option<WakeCoordinator>,
    primitive: Option<Arc<dyn WakePrimitive>>,
    launcher: Option<Arc<dyn ForegroundLauncher>>,
    queue: Option<Arc<dyn AlarmQueue>>,
}

impl RelayBuilder {
    pub fn new() -> Self {
        Self {
            config: RelayConfig::default(),
            coordinator: None,
            primitive: None,
            launcher: None,
            queue: None,
        }
    }

    pub fn with_config(mut self, config: RelayConfig) -> Self {
        self.config = config;
        self
    }

    /// Share an existing coordinator, e.g. with other receivers in the process
    ///
    /// The coordinator keeps the flags it was created with; the configured
    /// `wake_flags` are not applied on this path.
    pub fn with_wake_coordinator(mut self, coordinator: WakeCoordinator) -> Self {
        self.coordinator = Some(coordinator);
        self
    }

    /// Build a coordinator around this primitive using the configured flags
    pub fn with_wake_primitive(mut self, primitive: impl WakePrimitive + 'static) -> Self {
        self.primitive = Some(Arc::new(primitive) as Arc<dyn WakePrimitive>);
        self
    }

    pub fn with_launcher(mut self, launcher: impl ForegroundLauncher + 'static) -> Self {
        self.launcher = Some(Arc::new(launcher) as Arc<dyn ForegroundLauncher>);
        self
    }

    pub fn with_queue(mut self, queue: impl AlarmQueue + 'static) -> Self {
        self.queue = Some(Arc::new(queue) as Arc<dyn AlarmQueue>);
        self
    }

    pub fn build(self) -> Result<NotificationRelay, ConfigError> {
        self.config.validate()?;

        let coordinator = match (self.coordinator, self.primitive) {
            (Some(coordinator), _) => {
                if coordinator.flags() != &self.config.wake_flags {
                    warn!(
                        coordinator_tag = %coordinator.flags().tag,
                        configured_tag = %self.config.wake_flags.tag,
                        "shared wake coordinator keeps its own flags, configured wake_flags ignored"
                    );
                }
                coordinator
            }
            (None, Some(primitive)) => {
                WakeCoordinator::new(primitive, self.config.wake_flags.clone())
            }
            (None, None) => return Err(ConfigError::MissingComponent("wake primitive")),
        };
        let launcher = self
            .launcher
            .ok_or(ConfigError::MissingComponent("foreground launcher"))?;
        let queue = self
            .queue
            .ok_or(ConfigError::MissingComponent("processing queue"))?;

        Ok(NotificationRelay {
            coordinator,
            launcher,
            queue,
            config: self.config,
            stats: AtomicRelayStats::new(),
        })
    }
}

impl Default for RelayBuilder {
    fn default() -> Self {
        Self::new()
    }
}
