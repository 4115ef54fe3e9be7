//! Test transitions — `Transition` implementations with scripted timing.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use talktoswami_core::transition::Transition;

/// A transition that completes without waiting.
#[derive(Debug, Clone, Copy, Default)]
pub struct InstantTransition;

#[async_trait]
impl Transition for InstantTransition {
    async fn enter(&self) {}

    async fn exit(&self) {}
}

/// One completed transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    /// The card slid into view.
    Enter,
    /// The card slid out of view.
    Exit,
}

/// A transition that completes immediately and records each step. Clones
/// share the same log so a test can keep a handle after moving one into the
/// code under test.
#[derive(Debug, Clone, Default)]
pub struct RecordingTransition {
    steps: Arc<Mutex<Vec<TransitionStep>>>,
}

impl RecordingTransition {
    /// Create a transition with an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded steps, in order.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn steps(&self) -> Vec<TransitionStep> {
        self.steps.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transition for RecordingTransition {
    async fn enter(&self) {
        self.steps.lock().unwrap().push(TransitionStep::Enter);
    }

    async fn exit(&self) {
        self.steps.lock().unwrap().push(TransitionStep::Exit);
    }
}

/// A transition whose entrance completes at once and whose exit never does.
/// Cancelling an operation parked on the exit shows what it had changed
/// before the card finished leaving the screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct StalledExitTransition;

#[async_trait]
impl Transition for StalledExitTransition {
    async fn enter(&self) {}

    async fn exit(&self) {
        std::future::pending::<()>().await;
    }
}

/// A transition that completes immediately and, at the start of every exit,
/// records a snapshot taken by `observe`.
pub struct ObservingTransition<T> {
    observe: Arc<dyn Fn() -> T + Send + Sync>,
    snapshots: Arc<Mutex<Vec<T>>>,
}

impl<T> ObservingTransition<T> {
    /// Create a transition that calls `observe` on every exit.
    pub fn new(observe: impl Fn() -> T + Send + Sync + 'static) -> Self {
        Self {
            observe: Arc::new(observe),
            snapshots: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns the snapshots taken so far, one per exit.
    ///
    /// # Panics
    ///
    /// Panics if the internal mutex is poisoned.
    pub fn snapshots(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.snapshots.lock().unwrap().clone()
    }
}

impl<T> Clone for ObservingTransition<T> {
    fn clone(&self) -> Self {
        Self {
            observe: Arc::clone(&self.observe),
            snapshots: Arc::clone(&self.snapshots),
        }
    }
}

impl<T> std::fmt::Debug for ObservingTransition<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ObservingTransition").finish_non_exhaustive()
    }
}

#[async_trait]
impl<T: Send + 'static> Transition for ObservingTransition<T> {
    async fn enter(&self) {}

    async fn exit(&self) {
        let snapshot = (self.observe)();
        self.snapshots.lock().unwrap().push(snapshot);
    }
}
