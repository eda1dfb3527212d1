use crate::search::Debouncer;
use std::time::Duration;

/// Raw and settled copies of the user's search input
///
/// `raw` follows every edit immediately; `settled` only changes once `raw`
/// has been left alone for the debounce delay.
#[derive(Debug)]
pub struct QueryState {
    raw: String,
    settled: String,
    debouncer: Debouncer<String>,
}

impl QueryState {
    pub fn new(delay: Duration) -> Self {
        Self {
            raw: String::new(),
            settled: String::new(),
            debouncer: Debouncer::new(delay),
        }
    }

    /// Apply one input event
    pub fn input(&mut self, raw: impl Into<String>) {
        self.raw = raw.into();
        self.debouncer.push(self.raw.clone());
    }

    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    #[must_use]
    pub fn settled(&self) -> &str {
        &self.settled
    }

    #[must_use]
    pub const fn is_settling(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Wait until the settled query changes and return the new value
    ///
    /// The settled value is trimmed. Input that settles back to the current
    /// value, surrounding whitespace aside, is absorbed without resolving.
    /// Cancel-safe.
    pub async fn next_settled(&mut self) -> String {
        loop {
            let value = self.debouncer.settled().await;
            let value = value.trim();
            if value != self.settled {
                self.settled = value.to_string();
                return self.settled.clone();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::{Instant, advance, timeout};

    #[tokio::test(start_paused = true)]
    async fn test_raw_updates_immediately_settled_after_delay() {
        let mut query = QueryState::new(Duration::from_millis(500));

        query.input("b");
        assert_eq!(query.raw(), "b");
        assert_eq!(query.settled(), "");
        assert!(query.is_settling());

        assert_eq!(query.next_settled().await, "b");
        assert_eq!(query.settled(), "b");
    }

    #[tokio::test(start_paused = true)]
    async fn test_rapid_edits_settle_once_on_final_value() {
        let mut query = QueryState::new(Duration::from_millis(500));
        let start = Instant::now();

        for partial in ["b", "ba", "bat", "batm", "batma", "batman"] {
            query.input(partial);
            advance(Duration::from_millis(40)).await;
        }

        assert_eq!(query.next_settled().await, "batman");
        assert!(start.elapsed() >= Duration::from_millis(700));

        // Nothing further is pending
        assert!(
            timeout(Duration::from_secs(5), query.next_settled())
                .await
                .is_err()
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_returning_to_settled_value_does_not_resolve() {
        let mut query = QueryState::new(Duration::from_millis(500));
        query.input("heat");
        query.next_settled().await;

        query.input("heatwave");
        advance(Duration::from_millis(100)).await;
        query.input("heat");

        assert!(
            timeout(Duration::from_secs(5), query.next_settled())
                .await
                .is_err()
        );
        assert_eq!(query.settled(), "heat");
    }

    #[tokio::test(start_paused = true)]
    async fn test_surrounding_whitespace_is_not_a_change() {
        let mut query = QueryState::new(Duration::from_millis(500));
        query.input("  heat");
        assert_eq!(query.next_settled().await, "heat");

        query.input("heat ");
        assert_eq!(query.raw(), "heat ");

        assert!(
            timeout(Duration::from_secs(5), query.next_settled())
                .await
                .is_err()
        );
        assert_eq!(query.settled(), "heat");
    }
}
