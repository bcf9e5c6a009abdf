//! Simulated network latency.
//!
//! Every endpoint pauses for a uniformly distributed 400-800 ms to mimic
//! a real network round trip. The delay policy is a value so tests can
//! run with no delay at all.

use std::ops::RangeInclusive;
use std::time::Duration;

use rand::Rng;

use crate::config::LatencyConfig;

/// An injectable artificial delay.
#[derive(Debug, Clone)]
pub struct Latency {
    range: Option<RangeInclusive<u64>>,
}

impl Latency {
    /// Uniform delay between `min_ms` and `max_ms` (inclusive).
    ///
    /// Both bounds zero means no delay. Bounds must not be inverted; the
    /// config loader enforces this.
    #[must_use]
    pub const fn uniform(min_ms: u64, max_ms: u64) -> Self {
        if max_ms == 0 {
            return Self { range: None };
        }
        Self {
            range: Some(min_ms..=max_ms),
        }
    }

    /// No delay, for tests.
    #[must_use]
    pub const fn none() -> Self {
        Self { range: None }
    }

    /// Build from the server configuration.
    #[must_use]
    pub const fn from_config(config: LatencyConfig) -> Self {
        Self::uniform(config.min_ms, config.max_ms)
    }

    /// Sleep for one sampled delay. A single suspend point; nothing else
    /// about the request is affected.
    pub async fn pause(&self) {
        if let Some(range) = &self.range {
            let ms = rand::rng().random_range(range.clone());
            tokio::time::sleep(Duration::from_millis(ms)).await;
        }
    }
}
