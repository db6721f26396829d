/*!
 * Recording collaborators shared by the relay tests
 */

use alarm_relay::{
    AlarmEvent, AlarmQueue, ForegroundLauncher, LaunchRequest, PackageIdentity, RelayError,
    RelayResult, WakeFlags, WakePrimitive,
};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// One observed collaborator call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Acquire,
    Release,
    LaunchOrRaise,
    Enqueue(String),
}

#[derive(Clone, Default)]
pub struct CallLog(Arc<Mutex<Vec<Call>>>);

impl CallLog {
    pub fn push(&self, call: Call) {
        self.0.lock().push(call);
    }

    pub fn take(&self) -> Vec<Call> {
        std::mem::take(&mut *self.0.lock())
    }

    pub fn count(&self, call: &Call) -> usize {
        self.0.lock().iter().filter(|c| *c == call).count()
    }
}

/// Wake primitive that panics on nested acquire or unheld release
pub struct RecordingWake {
    log: CallLog,
    held: Arc<AtomicBool>,
    deny: bool,
}

impl RecordingWake {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            held: Arc::new(AtomicBool::new(false)),
            deny: false,
        }
    }

    pub fn denying(log: CallLog) -> Self {
        Self {
            deny: true,
            ..Self::new(log)
        }
    }

    /// Handle for observing the primitive after it moves into the relay
    pub fn held_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.held)
    }
}

impl WakePrimitive for RecordingWake {
    fn acquire(&self, _flags: &WakeFlags) -> RelayResult<()> {
        self.log.push(Call::Acquire);
        if self.deny {
            return Err(RelayError::ResourceUnavailable("permission revoked".into()));
        }
        assert!(
            !self.held.swap(true, Ordering::SeqCst),
            "primitive acquired while already held"
        );
        Ok(())
    }

    fn release(&self) -> RelayResult<()> {
        assert!(
            self.held.swap(false, Ordering::SeqCst),
            "primitive released while not held"
        );
        self.log.push(Call::Release);
        Ok(())
    }
}

pub struct RecordingLauncher {
    log: CallLog,
    in_foreground: bool,
    fail: bool,
}

impl RecordingLauncher {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            in_foreground: false,
            fail: false,
        }
    }

    pub fn failing(log: CallLog) -> Self {
        Self {
            fail: true,
            ..Self::new(log)
        }
    }
}

impl ForegroundLauncher for RecordingLauncher {
    fn has_foreground_presence(&self, _package: &PackageIdentity) -> bool {
        self.in_foreground
    }

    fn launch_or_raise(&self, _request: &LaunchRequest) -> RelayResult<()> {
        self.log.push(Call::LaunchOrRaise);
        if self.fail {
            return Err(RelayError::LaunchFailed("no launch intent".into()));
        }
        Ok(())
    }
}

pub struct RecordingQueue {
    log: CallLog,
    reject: bool,
}

impl RecordingQueue {
    pub fn new(log: CallLog) -> Self {
        Self { log, reject: false }
    }

    pub fn rejecting(log: CallLog) -> Self {
        Self { log, reject: true }
    }
}

impl AlarmQueue for RecordingQueue {
    fn enqueue(&self, event: AlarmEvent) -> RelayResult<()> {
        self.log.push(Call::Enqueue(event.id.to_string()));
        if self.reject {
            return Err(RelayError::EnqueueFailed("worker context gone".into()));
        }
        Ok(())
    }
}
