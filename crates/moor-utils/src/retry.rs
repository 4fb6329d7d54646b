//! Retry an action until it reports success or a deadline passes.
//!
//! Used to poll external state (VM boot, process exit, socket readiness).
//! The action decides what counts as success; the executor only owns the
//! clock.

use std::future::Future;
use std::time::{Duration, Instant};

/// Default sleep between attempts.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Shortest sleep between attempts. Smaller intervals, including zero, are
/// raised to this.
pub const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Outcome of one attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeoutAction {
    /// Not done yet, try again
    Retry,
    /// Finished, stop retrying
    Done,
}

/// Run `action` until it returns [`TimeoutAction::Done`] or `timeout` elapses.
///
/// The action always runs at least once. If the deadline passes first,
/// `on_timeout` is called once. Sleeps [`DEFAULT_POLL_INTERVAL`] between
/// attempts.
///
/// # Example
///
/// ```
/// use moor_utils::{try_action_for, TimeoutAction};
/// use std::time::Duration;
///
/// let mut polls = 0;
/// try_action_for(
///     || panic!("should not time out"),
///     Duration::from_secs(5),
///     || {
///         polls += 1;
///         if polls == 3 { TimeoutAction::Done } else { TimeoutAction::Retry }
///     },
/// );
/// assert_eq!(polls, 3);
/// ```
pub fn try_action_for<T, A>(on_timeout: T, timeout: Duration, action: A)
where
    T: FnOnce(),
    A: FnMut() -> TimeoutAction,
{
    try_action_for_with_interval(on_timeout, timeout, DEFAULT_POLL_INTERVAL, action)
}

/// [`try_action_for`] with an explicit sleep between attempts.
///
/// `poll_interval` is raised to at least [`MIN_POLL_INTERVAL`].
pub fn try_action_for_with_interval<T, A>(
    on_timeout: T,
    timeout: Duration,
    poll_interval: Duration,
    mut action: A,
) where
    T: FnOnce(),
    A: FnMut() -> TimeoutAction,
{
    let poll_interval = poll_interval.max(MIN_POLL_INTERVAL);
    let start = Instant::now();
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        if action() == TimeoutAction::Done {
            tracing::trace!(
                attempts,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Action completed"
            );
            return;
        }

        let elapsed = start.elapsed();
        if elapsed >= timeout {
            tracing::debug!(
                attempts,
                elapsed_ms = elapsed.as_millis() as u64,
                timeout_ms = timeout.as_millis() as u64,
                "Action timed out"
            );
            on_timeout();
            return;
        }

        tracing::trace!(attempt = attempts, "Action not done, retrying...");
        std::thread::sleep(poll_interval.min(timeout - elapsed));
    }
}

/// Async form of [`try_action_for_with_interval`] for actions that await.
///
/// Sleeps on the tokio timer, so it yields to the runtime between attempts
/// instead of blocking the thread.
pub async fn try_action_for_async<T, A, Fut>(
    on_timeout: T,
    timeout: Duration,
    poll_interval: Duration,
    mut action: A,
) where
    T: FnOnce(),
    A: FnMut() -> Fut,
    Fut: Future<Output = TimeoutAction>,
{
    let poll_interval = poll_interval.max(MIN_POLL_INTERVAL);
    let start = tokio::time::Instant::now();
    let mut attempts = 0u32;

    loop {
        attempts += 1;
        if action().await == TimeoutAction::Done {
            tracing::trace!(
                attempts,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Action completed"
            );
            return;
        }

        let elapsed = start.elapsed();
        if elapsed >= timeout {
            tracing::debug!(
                attempts,
                elapsed_ms = elapsed.as_millis() as u64,
                timeout_ms = timeout.as_millis() as u64,
                "Action timed out"
            );
            on_timeout();
            return;
        }

        tracing::trace!(attempt = attempts, "Action not done, retrying...");
        tokio::time::sleep(poll_interval.min(timeout - elapsed)).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_times_out() {
        let timed_out = Cell::new(0);
        let attempts = Cell::new(0);

        try_action_for(
            || timed_out.set(timed_out.get() + 1),
            Duration::from_millis(1),
            || {
                attempts.set(attempts.get() + 1);
                TimeoutAction::Retry
            },
        );

        assert_eq!(timed_out.get(), 1);
        assert!(attempts.get() >= 1);
    }

    #[test]
    fn test_does_not_time_out() {
        let mut timed_out = false;
        let mut action_called = false;

        try_action_for(
            || timed_out = true,
            Duration::from_secs(1),
            || {
                action_called = true;
                TimeoutAction::Done
            },
        );

        assert!(!timed_out);
        assert!(action_called);
    }

    #[test]
    fn test_zero_timeout_still_attempts_once() {
        let mut timed_out = false;
        let mut attempts = 0;

        try_action_for(
            || timed_out = true,
            Duration::ZERO,
            || {
                attempts += 1;
                TimeoutAction::Done
            },
        );

        assert_eq!(attempts, 1);
        assert!(!timed_out);
    }

    #[test]
    fn test_waits_roughly_for_timeout() {
        let start = Instant::now();
        let mut timed_out = false;

        try_action_for_with_interval(
            || timed_out = true,
            Duration::from_millis(50),
            Duration::from_millis(5),
            || TimeoutAction::Retry,
        );

        assert!(timed_out);
        assert!(start.elapsed() >= Duration::from_millis(50));
    }

    #[test]
    fn test_succeeds_after_retries() {
        let mut attempts = 0;
        let mut timed_out = false;

        try_action_for_with_interval(
            || timed_out = true,
            Duration::from_secs(5),
            Duration::from_millis(1),
            || {
                attempts += 1;
                if attempts < 4 {
                    TimeoutAction::Retry
                } else {
                    TimeoutAction::Done
                }
            },
        );

        assert_eq!(attempts, 4);
        assert!(!timed_out);
    }

    #[test]
    fn test_zero_interval_is_clamped() {
        let mut attempts = 0;
        let mut timed_out = false;

        try_action_for_with_interval(
            || timed_out = true,
            Duration::from_millis(20),
            Duration::ZERO,
            || {
                attempts += 1;
                TimeoutAction::Retry
            },
        );

        assert!(timed_out);
        assert!(attempts <= 21, "expected at most 21 attempts, got {attempts}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_zero_interval_is_clamped() {
        let attempts = Cell::new(0u32);
        let mut timed_out = false;

        try_action_for_async(
            || timed_out = true,
            Duration::from_millis(50),
            Duration::ZERO,
            || {
                attempts.set(attempts.get() + 1);
                async { TimeoutAction::Retry }
            },
        )
        .await;

        assert!(timed_out);
        assert!((50..=51).contains(&attempts.get()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_times_out() {
        let timed_out = Cell::new(0);
        let attempts = Cell::new(0);

        try_action_for_async(
            || timed_out.set(timed_out.get() + 1),
            Duration::from_secs(10),
            Duration::from_secs(1),
            || {
                attempts.set(attempts.get() + 1);
                async { TimeoutAction::Retry }
            },
        )
        .await;

        assert_eq!(timed_out.get(), 1);
        assert!((10..=11).contains(&attempts.get()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_async_done_first_try() {
        let mut timed_out = false;

        try_action_for_async(
            || timed_out = true,
            Duration::from_secs(10),
            Duration::from_secs(1),
            || async { TimeoutAction::Done },
        )
        .await;

        assert!(!timed_out);
    }
}
