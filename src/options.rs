use std::time::Duration;

use serde_json::Value as JsonValue;

/// Per-call request options: query parameters, header overrides, body payload.
///
/// Query pairs and headers keep insertion order. Query keys are appended, never
/// overwritten, so repeating a key produces repeated query-string entries.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    pub(crate) query: Vec<(String, String)>,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<JsonValue>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Appends all pairs of an iterator as query parameters.
    pub fn query_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: ToString,
    {
        self.query
            .extend(pairs.into_iter().map(|(k, v)| (k.into(), v.to_string())));
        self
    }

    /// Sets a header for this call. Caller headers win over client defaults on
    /// key collision; the defaults themselves are never mutated.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Sets the JSON request body (POST/PUT/PATCH).
    pub fn body(mut self, body: JsonValue) -> Self {
        self.body = Some(body);
        self
    }
}

/// Bounded exponential-backoff policy, immutable for the whole retry sequence.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RetryPolicy {
    /// Total attempts, counting the first one. Must be positive.
    pub max_attempts: u32,
    /// Delay before the second attempt.
    pub initial_delay: Duration,
    /// Upper bound the doubling delay is clamped to.
    pub max_delay: Duration,
}

/// Policy used when the caller has no reason to pick different numbers.
pub const DEFAULT_RETRY_POLICY: RetryPolicy = RetryPolicy {
    max_attempts: 3,
    initial_delay: Duration::from_millis(1_000),
    max_delay: Duration::from_millis(5_000),
};

impl Default for RetryPolicy {
    fn default() -> Self {
        DEFAULT_RETRY_POLICY
    }
}

impl RetryPolicy {
    /// Delay inserted after the given failed attempt (1-indexed): the initial
    /// delay doubled per prior failure, clamped at `max_delay`.
    pub fn delay_for(&self, attempt: u32) -> Duration {
        let exp = attempt.saturating_sub(1).min(32);
        let millis = self
            .initial_delay
            .as_millis()
            .saturating_mul(1u128 << exp)
            .min(self.max_delay.as_millis());
        Duration::from_millis(millis as u64)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{RetryPolicy, DEFAULT_RETRY_POLICY};

    #[test]
    fn delay_doubles_then_clamps() {
        let policy = RetryPolicy {
            max_attempts: 6,
            initial_delay: Duration::from_millis(1_000),
            max_delay: Duration::from_millis(3_000),
        };
        let delays: Vec<u64> = (1..=5)
            .map(|attempt| policy.delay_for(attempt).as_millis() as u64)
            .collect();
        assert_eq!(delays, vec![1_000, 2_000, 3_000, 3_000, 3_000]);
    }

    #[test]
    fn default_policy_matches_named_constant() {
        assert_eq!(RetryPolicy::default(), DEFAULT_RETRY_POLICY);
        assert_eq!(DEFAULT_RETRY_POLICY.max_attempts, 3);
    }

    #[test]
    fn huge_attempt_counts_do_not_overflow() {
        let policy = RetryPolicy {
            max_attempts: u32::MAX,
            initial_delay: Duration::from_millis(1_000),
            max_delay: Duration::from_millis(5_000),
        };
        assert_eq!(policy.delay_for(u32::MAX), Duration::from_millis(5_000));
    }

    #[test]
    fn query_pairs_preserve_order_and_repeats() {
        let options = super::RequestOptions::new()
            .query("id", 3)
            .query("id", 5)
            .query("name", "kit");
        assert_eq!(
            options.query,
            vec![
                ("id".to_owned(), "3".to_owned()),
                ("id".to_owned(), "5".to_owned()),
                ("name".to_owned(), "kit".to_owned()),
            ]
        );
    }
}
