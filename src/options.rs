use std::time::Duration;

/// Configures the attempt budget and the delay schedule between attempts.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RetryOptions {
    /// Total number of attempts, including the first. Zero behaves as one.
    pub max_attempts: usize,
    /// Wait before attempt `n + 1`, indexed by the failed attempt `n`.
    ///
    /// Indices past the end reuse the last entry.
    pub retry_delays_ms: Vec<u64>,
}

impl Default for RetryOptions {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            retry_delays_ms: vec![1_000, 2_000, 5_000],
        }
    }
}

impl RetryOptions {
    /// Number of attempts a call will make.
    pub fn attempts(&self) -> usize {
        self.max_attempts.max(1)
    }

    /// Delay to wait after the zero-based `attempt` failed.
    pub fn delay_for(&self, attempt: usize) -> Duration {
        let Some(last) = self.retry_delays_ms.len().checked_sub(1) else {
            return Duration::ZERO;
        };
        Duration::from_millis(self.retry_delays_ms[attempt.min(last)])
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::RetryOptions;

    #[test]
    fn defaults_match_documented_schedule() {
        let opts = RetryOptions::default();
        assert_eq!(opts.max_attempts, 3);
        assert_eq!(opts.delay_for(0), Duration::from_secs(1));
        assert_eq!(opts.delay_for(1), Duration::from_secs(2));
        assert_eq!(opts.delay_for(2), Duration::from_secs(5));
    }

    #[test]
    fn delay_clamps_to_last_entry() {
        let opts = RetryOptions::default();
        assert_eq!(opts.delay_for(3), Duration::from_secs(5));
        assert_eq!(opts.delay_for(usize::MAX), Duration::from_secs(5));
    }

    #[test]
    fn empty_schedule_means_no_wait() {
        let opts = RetryOptions {
            max_attempts: 3,
            retry_delays_ms: Vec::new(),
        };
        assert_eq!(opts.delay_for(0), Duration::ZERO);
        assert_eq!(opts.delay_for(7), Duration::ZERO);
    }

    #[test]
    fn zero_attempts_still_makes_one() {
        let opts = RetryOptions {
            max_attempts: 0,
            ..RetryOptions::default()
        };
        assert_eq!(opts.attempts(), 1);
    }
}
