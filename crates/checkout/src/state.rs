//! Application state shared across handlers.

use std::sync::Arc;

use crate::config::CheckoutConfig;
use crate::services::{Latency, StepService};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration and the step-processing service.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: CheckoutConfig,
    steps: StepService,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The step service picks up its simulated latency from the config.
    #[must_use]
    pub fn new(config: CheckoutConfig) -> Self {
        let steps = StepService::new(Latency::from_config(config.latency));
        Self {
            inner: Arc::new(AppStateInner { config, steps }),
        }
    }

    /// State with latency disabled, for tests.
    #[must_use]
    pub fn without_latency(config: CheckoutConfig) -> Self {
        let steps = StepService::new(Latency::none());
        Self {
            inner: Arc::new(AppStateInner { config, steps }),
        }
    }

    /// Get a reference to the checkout configuration.
    #[must_use]
    pub fn config(&self) -> &CheckoutConfig {
        &self.inner.config
    }

    /// Get a reference to the step-processing service.
    #[must_use]
    pub fn steps(&self) -> &StepService {
        &self.inner.steps
    }
}
