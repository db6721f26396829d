/*!
 * Processing Queue
 * Ingestion seam of the worker-context collaborator, plus a flume-backed
 * reference implementation
 */

use crate::core::errors::{RelayError, RelayResult};
use crate::core::types::AlarmEvent;
use flume::{Receiver, RecvTimeoutError, SendTimeoutError, Sender, TryRecvError, TrySendError};
use std::sync::Arc;
use std::time::Duration;

/// Ingestion API of the processing queue
///
/// `enqueue` is called on the OS dispatch thread. It must return once the
/// event is accepted, never after the deferred callback has run, and the
/// collaborator guarantees at-least-once delivery to an execution context
/// from that point on.
#[cfg_attr(test, mockall::automock)]
pub trait AlarmQueue: Send + Sync {
    /// Accept ownership of the event, or fail with `RelayError::EnqueueFailed`
    fn enqueue(&self, event: AlarmEvent) -> RelayResult<()>;
}

impl<Q: AlarmQueue + ?Sized> AlarmQueue for Arc<Q> {
    fn enqueue(&self, event: AlarmEvent) -> RelayResult<()> {
        (**self).enqueue(event)
    }
}

/// Create a bounded alarm channel
///
/// The sending half goes to the relay, the receiving half to the worker
/// context. Alarms that fire before the worker context is up wait in the
/// channel.
pub fn alarm_channel(capacity: usize, lookahead: Duration) -> (ChannelQueue, AlarmReceiver) {
    let (tx, rx) = flume::bounded(capacity);
    (ChannelQueue { tx, lookahead }, AlarmReceiver { rx })
}

/// Sending half of the alarm channel
#[derive(Debug, Clone)]
pub struct ChannelQueue {
    tx: Sender<AlarmEvent>,
    lookahead: Duration,
}

impl ChannelQueue {
    /// Alarms waiting for the worker context
    pub fn len(&self) -> usize {
        self.tx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tx.is_empty()
    }

    /// Bound the channel was created with
    pub fn capacity(&self) -> Option<usize> {
        self.tx.capacity()
    }

    /// Whether the worker context dropped its receiver
    pub fn is_disconnected(&self) -> bool {
        self.tx.is_disconnected()
    }
}

impl AlarmQueue for ChannelQueue {
    fn enqueue(&self, event: AlarmEvent) -> RelayResult<()> {
        let event = match self.tx.try_send(event) {
            Ok(()) => return Ok(()),
            Err(TrySendError::Disconnected(event)) => {
                return Err(RelayError::EnqueueFailed(format!(
                    "worker context disconnected, alarm {} dropped",
                    event.id
                )))
            }
            Err(TrySendError::Full(event)) => event,
        };

        if self.lookahead.is_zero() {
            return Err(RelayError::EnqueueFailed(format!(
                "queue full, alarm {} dropped",
                event.id
            )));
        }

        self.tx
            .send_timeout(event, self.lookahead)
            .map_err(|e| match e {
                SendTimeoutError::Timeout(event) => RelayError::EnqueueFailed(format!(
                    "queue still full after {}ms, alarm {} dropped",
                    self.lookahead.as_millis(),
                    event.id
                )),
                SendTimeoutError::Disconnected(event) => RelayError::EnqueueFailed(format!(
                    "worker context disconnected, alarm {} dropped",
                    event.id
                )),
            })
    }
}

/// Receiving half of the alarm channel, owned by the worker context
#[derive(Debug)]
pub struct AlarmReceiver {
    rx: Receiver<AlarmEvent>,
}

impl AlarmReceiver {
    /// Block until an alarm arrives; `None` once every sender is gone
    pub fn recv(&self) -> Option<AlarmEvent> {
        self.rx.recv().ok()
    }

    /// Wait up to `timeout` for an alarm
    pub fn recv_timeout(&self, timeout: Duration) -> Option<AlarmEvent> {
        match self.rx.recv_timeout(timeout) {
            Ok(event) => Some(event),
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => None,
        }
    }

    pub fn try_recv(&self) -> Option<AlarmEvent> {
        match self.rx.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Take every alarm queued so far, in firing order
    pub fn drain(&self) -> Vec<AlarmEvent> {
        self.rx.drain().collect()
    }

    pub fn len(&self) -> usize {
        self.rx.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rx.is_empty()
    }
}
