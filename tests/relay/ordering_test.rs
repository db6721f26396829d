/*!
 * Call ordering across the wake, launch and enqueue collaborators
 */

use super::support::{Call, CallLog, RecordingLauncher, RecordingQueue, RecordingWake};
use alarm_relay::{AlarmEvent, LaunchOutcome, NotificationRelay, WakeOutcome};
use pretty_assertions::assert_eq;

fn relay_with(wake: RecordingWake, launcher: RecordingLauncher, queue: RecordingQueue) -> NotificationRelay {
    NotificationRelay::builder()
        .with_wake_primitive(wake)
        .with_launcher(launcher)
        .with_queue(queue)
        .build()
        .unwrap()
}

#[test]
fn test_end_to_end_wake_and_plain_firings() {
    let log = CallLog::default();
    let relay = relay_with(
        RecordingWake::new(log.clone()),
        RecordingLauncher::new(log.clone()),
        RecordingQueue::new(log.clone()),
    );

    relay.on_alarm_fired(AlarmEvent::new("timer-1", true));
    assert_eq!(
        log.take(),
        vec![
            Call::Acquire,
            Call::LaunchOrRaise,
            Call::Enqueue("timer-1".into()),
            Call::Release,
        ]
    );

    relay.on_alarm_fired(AlarmEvent::new("timer-2", false));
    assert_eq!(log.take(), vec![Call::Enqueue("timer-2".into())]);
}

#[test]
fn test_denied_wake_still_enqueues_without_release() {
    let log = CallLog::default();
    let relay = relay_with(
        RecordingWake::denying(log.clone()),
        RecordingLauncher::new(log.clone()),
        RecordingQueue::new(log.clone()),
    );

    let report = relay.on_alarm_fired(AlarmEvent::new("timer-1", true));

    assert_eq!(
        log.take(),
        vec![
            Call::Acquire,
            Call::LaunchOrRaise,
            Call::Enqueue("timer-1".into()),
        ]
    );
    assert_eq!(report.wake, WakeOutcome::Denied);
    assert!(report.enqueued);
}

#[test]
fn test_failed_launch_keeps_order() {
    let log = CallLog::default();
    let relay = relay_with(
        RecordingWake::new(log.clone()),
        RecordingLauncher::failing(log.clone()),
        RecordingQueue::new(log.clone()),
    );

    let report = relay.on_alarm_fired(AlarmEvent::new("timer-1", true));

    assert_eq!(
        log.take(),
        vec![
            Call::Acquire,
            Call::LaunchOrRaise,
            Call::Enqueue("timer-1".into()),
            Call::Release,
        ]
    );
    assert_eq!(report.launch, LaunchOutcome::Failed);
}

#[test]
fn test_rejected_enqueue_still_releases() {
    let log = CallLog::default();
    let relay = relay_with(
        RecordingWake::new(log.clone()),
        RecordingLauncher::new(log.clone()),
        RecordingQueue::rejecting(log.clone()),
    );

    let report = relay.on_alarm_fired(AlarmEvent::new("timer-1", true));

    assert_eq!(
        log.take(),
        vec![
            Call::Acquire,
            Call::LaunchOrRaise,
            Call::Enqueue("timer-1".into()),
            Call::Release,
        ]
    );
    assert!(!report.enqueued);
    assert_eq!(relay.stats().enqueue_failed, 1);
}

#[test]
fn test_enqueue_exactly_once_per_event() {
    let log = CallLog::default();
    let relay = relay_with(
        RecordingWake::new(log.clone()),
        RecordingLauncher::failing(log.clone()),
        RecordingQueue::new(log.clone()),
    );

    for i in 0..10 {
        relay.on_alarm_fired(AlarmEvent::new(format!("timer-{}", i), i % 2 == 0));
    }

    for i in 0..10 {
        assert_eq!(log.count(&Call::Enqueue(format!("timer-{}", i))), 1);
    }
    assert_eq!(log.count(&Call::Acquire), 5);
    assert_eq!(log.count(&Call::Release), 5);
    assert_eq!(log.count(&Call::LaunchOrRaise), 5);

    let stats = relay.stats();
    assert_eq!(stats.alarms_fired, 10);
    assert_eq!(stats.enqueued, 10);
    assert_eq!(stats.wake_requested, 5);
}

#[test]
fn test_payload_reaches_queue_untouched() {
    let (queue, receiver) = alarm_relay::alarm_channel(4, std::time::Duration::ZERO);
    let log = CallLog::default();
    let relay = NotificationRelay::builder()
        .with_wake_primitive(RecordingWake::new(log.clone()))
        .with_launcher(RecordingLauncher::new(log))
        .with_queue(queue)
        .build()
        .unwrap();

    let payload = serde_json::json!({"callbackHandle": 1234, "repeating": false, "exact": true});
    relay.on_alarm_fired(AlarmEvent::new("timer-9", true).with_payload(payload.clone()));

    let delivered = receiver.try_recv().unwrap();
    assert_eq!(delivered.id.as_str(), "timer-9");
    assert!(delivered.requires_wake);
    assert_eq!(delivered.payload, payload);
}
