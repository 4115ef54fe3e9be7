//! Card transition abstraction.
//!
//! Transitions only model timing: the returned future resolves once the
//! animation has finished. State changes are applied by the caller after
//! the future completes.

use std::time::Duration;

use async_trait::async_trait;

/// Entrance and exit animations of the quote card.
#[async_trait]
pub trait Transition: Send + Sync {
    /// Moves the card from its off-screen resting position into view.
    async fn enter(&self);

    /// Moves the card back to its off-screen resting position.
    async fn exit(&self);
}

/// Production transition that waits a fixed duration on the tokio timer.
#[derive(Debug, Clone, Copy)]
pub struct TimedTransition {
    entrance: Duration,
    exit: Duration,
}

impl TimedTransition {
    /// Duration of the exit slide in the mobile application.
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(300);

    /// Creates a transition with separate entrance and exit durations.
    #[must_use]
    pub fn new(entrance: Duration, exit: Duration) -> Self {
        Self { entrance, exit }
    }

    /// Creates a transition using `duration` for both directions.
    #[must_use]
    pub fn uniform(duration: Duration) -> Self {
        Self::new(duration, duration)
    }
}

impl Default for TimedTransition {
    fn default() -> Self {
        Self::uniform(Self::DEFAULT_DURATION)
    }
}

#[async_trait]
impl Transition for TimedTransition {
    async fn enter(&self) {
        tokio::time::sleep(self.entrance).await;
    }

    async fn exit(&self) {
        tokio::time::sleep(self.exit).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_exit_waits_for_configured_duration() {
        let transition = TimedTransition::new(Duration::from_millis(10), Duration::from_millis(300));
        let start = tokio::time::Instant::now();

        transition.exit().await;

        assert!(start.elapsed() >= Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_waits_for_configured_duration() {
        let transition = TimedTransition::uniform(Duration::from_millis(120));
        let start = tokio::time::Instant::now();

        transition.enter().await;

        assert!(start.elapsed() >= Duration::from_millis(120));
    }
}
