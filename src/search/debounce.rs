use std::time::Duration;
use tokio::time::{Instant, sleep_until};

/// Single-shot, restartable delay carrying the latest pushed value
///
/// At most one value is pending. Every `push` replaces it and restarts the
/// quiet period; `settled` resolves once the period elapses untouched.
#[derive(Debug)]
pub struct Debouncer<T> {
    delay: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Replace the pending value and restart the timer
    pub fn push(&mut self, value: T) {
        self.pending = Some((value, Instant::now() + self.delay));
    }

    /// Drop the pending value, if any
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(value, _)| value)
    }

    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(_, deadline)| *deadline)
    }

    /// Wait for the pending value to settle and take it
    ///
    /// Never resolves while nothing is pending. Cancel-safe: dropping the
    /// future before it resolves leaves the pending value in place.
    pub async fn settled(&mut self) -> T {
        loop {
            let Some(deadline) = self.deadline() else {
                return std::future::pending().await;
            };

            sleep_until(deadline).await;

            // The deadline may have moved while we slept
            if self.deadline().is_some_and(|d| d <= Instant::now())
                && let Some((value, _)) = self.pending.take()
            {
                return value;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{advance, timeout};

    #[tokio::test(start_paused = true)]
    async fn test_settles_after_delay() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        debouncer.push("bat");

        let value = debouncer.settled().await;

        assert_eq!(value, "bat");
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_push_restarts_timer_and_replaces_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        let start = Instant::now();

        debouncer.push("bat");
        advance(Duration::from_millis(200)).await;
        debouncer.push("batman");

        let value = debouncer.settled().await;

        assert_eq!(value, "batman");
        assert!(start.elapsed() >= Duration::from_millis(700));
    }

    #[tokio::test(start_paused = true)]
    async fn test_nothing_pending_never_settles() {
        let mut debouncer: Debouncer<&str> = Debouncer::new(Duration::from_millis(500));

        let result = timeout(Duration::from_secs(10), debouncer.settled()).await;

        assert!(result.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_wait_keeps_value() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        debouncer.push("heat");

        assert!(timeout(Duration::from_millis(100), debouncer.settled()).await.is_err());
        assert!(debouncer.is_pending());

        assert_eq!(debouncer.settled().await, "heat");
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending() {
        let mut debouncer = Debouncer::new(Duration::from_millis(500));
        debouncer.push(1);

        assert_eq!(debouncer.cancel(), Some(1));
        assert!(debouncer.deadline().is_none());
    }
}
