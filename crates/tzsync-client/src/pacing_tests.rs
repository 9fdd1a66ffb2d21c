//! Unit tests for request pacing.

use std::time::Duration;

use tokio::time::Instant;

use crate::pacing::{RequestPacer, request_window};

#[test_log::test]
fn window_is_inverse_rate_plus_buffer() {
    assert_eq!(request_window(1, 1), Duration::from_secs(2));
    assert_eq!(request_window(2, 0), Duration::from_millis(500));
    assert_eq!(request_window(4, 1), Duration::from_millis(1250));
}

#[test_log::test]
fn zero_rate_does_not_divide_by_zero() {
    assert_eq!(request_window(0, 0), Duration::from_secs(1));
}

#[test_log::test(tokio::test(start_paused = true))]
async fn first_pace_waits_a_full_window() {
    let mut pacer = RequestPacer::new(1, 1);
    let before = Instant::now();
    pacer.pace().await;
    assert_eq!(before.elapsed(), Duration::from_secs(2));
}

#[test_log::test(tokio::test(start_paused = true))]
async fn pace_sleeps_only_the_remainder() {
    let mut pacer = RequestPacer::new(1, 0);
    pacer.pace().await;

    // Simulate a request that took 400ms of the 1s window.
    tokio::time::advance(Duration::from_millis(400)).await;

    let before = Instant::now();
    pacer.pace().await;
    assert_eq!(before.elapsed(), Duration::from_millis(600));
}

#[test_log::test(tokio::test(start_paused = true))]
async fn pace_does_not_sleep_after_a_slow_request() {
    let mut pacer = RequestPacer::new(1, 0);
    pacer.pace().await;

    tokio::time::advance(Duration::from_secs(5)).await;

    let before = Instant::now();
    pacer.pace().await;
    assert_eq!(before.elapsed(), Duration::ZERO);
}
