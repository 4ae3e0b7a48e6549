use super::Debouncer;
use std::time::{Duration, Instant};

#[test]
fn test_leading_edge_fires_immediately() {
    let mut debouncer = Debouncer::new(Duration::from_millis(300));
    let start = Instant::now();
    assert_eq!(debouncer.trigger(start, 1), Some(1));
    assert!(!debouncer.is_pending());
}

#[test]
fn test_burst_collapses_to_latest_trailing_task() {
    let mut debouncer = Debouncer::new(Duration::from_millis(300));
    let start = Instant::now();
    let ms = Duration::from_millis;

    assert_eq!(debouncer.trigger(start, 1), Some(1));
    assert_eq!(debouncer.trigger(start + ms(50), 2), None);
    assert_eq!(debouncer.trigger(start + ms(100), 3), None);
    assert!(debouncer.is_pending());

    assert_eq!(debouncer.poll(start + ms(200)), None, "window not elapsed yet");
    assert_eq!(debouncer.poll(start + ms(300)), Some(3), "only the newest task runs");
    assert_eq!(debouncer.poll(start + ms(900)), None);
}

#[test]
fn test_fires_again_after_quiet_window() {
    let mut debouncer = Debouncer::new(Duration::from_millis(300));
    let start = Instant::now();
    assert_eq!(debouncer.trigger(start, "a"), Some("a"));
    assert_eq!(
        debouncer.trigger(start + Duration::from_millis(400), "b"),
        Some("b")
    );
}

#[test]
fn test_cancel_clears_slot() {
    let mut debouncer = Debouncer::new(Duration::from_millis(300));
    let start = Instant::now();
    debouncer.trigger(start, 1);
    debouncer.trigger(start + Duration::from_millis(10), 2);

    assert_eq!(debouncer.cancel(), Some(2));
    assert!(!debouncer.is_pending());
    assert_eq!(
        debouncer.trigger(start + Duration::from_millis(20), 3),
        Some(3),
        "a cancelled debouncer is idle again"
    );
}
