//! Simulated processing delay

use std::future::Future;
use std::time::Duration;

/// A pause taken before a check runs
///
/// The demo waits once per check to mimic remote work. The delay is a seam so
/// tests can replace it.
pub trait Delay {
    /// Suspend until the delay has elapsed
    fn wait(&self) -> impl Future<Output = ()> + Send;
}

/// Sleep for a fixed duration on the tokio timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay {
    duration: Duration,
}

impl FixedDelay {
    /// Delay used by the interactive demo
    pub const DEFAULT: Duration = Duration::from_millis(1500);

    /// Create a delay of the given duration
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }

    /// A delay that returns immediately
    pub fn none() -> Self {
        Self::new(Duration::ZERO)
    }

    /// Configured duration
    pub fn duration(&self) -> Duration {
        self.duration
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self::new(Self::DEFAULT)
    }
}

impl Delay for FixedDelay {
    async fn wait(&self) {
        if !self.duration.is_zero() {
            tokio::time::sleep(self.duration).await;
        }
    }
}

/// No pause at all
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl Delay for NoDelay {
    async fn wait(&self) {}
}
