/*!
 * Handoff through the flume channel to a worker context
 */

use super::support::{CallLog, RecordingLauncher, RecordingWake};
use alarm_relay::{alarm_channel, AlarmEvent, NotificationRelay};
use std::thread;
use std::time::Duration;

#[test]
fn test_alarms_wait_for_late_worker() {
    let log = CallLog::default();
    let (queue, receiver) = alarm_channel(8, Duration::ZERO);
    let relay = NotificationRelay::builder()
        .with_wake_primitive(RecordingWake::new(log.clone()))
        .with_launcher(RecordingLauncher::new(log))
        .with_queue(queue)
        .build()
        .unwrap();

    // Worker context not started yet
    relay.on_alarm_fired(AlarmEvent::new("early-1", true));
    relay.on_alarm_fired(AlarmEvent::new("early-2", false));

    let worker = thread::spawn(move || {
        let mut seen = Vec::new();
        while let Some(event) = receiver.recv_timeout(Duration::from_millis(200)) {
            seen.push(event.id.to_string());
        }
        seen
    });

    relay.on_alarm_fired(AlarmEvent::new("late", true));

    let seen = worker.join().unwrap();
    assert_eq!(seen, vec!["early-1", "early-2", "late"]);
}

#[test]
fn test_full_channel_loses_only_overflow() {
    let log = CallLog::default();
    let (queue, receiver) = alarm_channel(2, Duration::ZERO);
    let relay = NotificationRelay::builder()
        .with_wake_primitive(RecordingWake::new(log.clone()))
        .with_launcher(RecordingLauncher::new(log))
        .with_queue(queue)
        .build()
        .unwrap();

    let reports: Vec<_> = ["a", "b", "c"]
        .iter()
        .map(|id| relay.on_alarm_fired(AlarmEvent::new(*id, true)))
        .collect();

    assert!(reports[0].enqueued);
    assert!(reports[1].enqueued);
    assert!(!reports[2].enqueued);
    assert_eq!(receiver.len(), 2);
    assert_eq!(relay.stats().lost(), 1);
    assert!(!relay.wake_coordinator().is_held());
}

#[test]
fn test_dropped_worker_is_reported_not_raised() {
    let log = CallLog::default();
    let (queue, receiver) = alarm_channel(2, Duration::from_millis(5));
    drop(receiver);

    let relay = NotificationRelay::builder()
        .with_wake_primitive(RecordingWake::new(log.clone()))
        .with_launcher(RecordingLauncher::new(log))
        .with_queue(queue)
        .build()
        .unwrap();

    let report = relay.on_alarm_fired(AlarmEvent::new("orphan", false));
    assert!(!report.enqueued);
}
