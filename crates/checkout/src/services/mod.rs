//! Services used by route handlers.

pub mod latency;
pub mod steps;

pub use latency::Latency;
pub use steps::StepService;
