//! Shared test doubles for the Talk to Swami quote application.

mod platform;
mod rng;
mod store;
mod transition;

pub use platform::{FailingPlatform, PlatformCall, RecordingPlatform};
pub use rng::{MockRng, SequenceRng};
pub use store::{FailingPreferenceStore, InMemoryPreferenceStore};
pub use transition::{
    InstantTransition, ObservingTransition, RecordingTransition, StalledExitTransition,
    TransitionStep,
};
