//! Shared test helpers for home screen integration tests.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use talktoswami_app::links::MobileOs;
use talktoswami_app::screen::HomeScreen;
use talktoswami_core::platform::Platform;
use talktoswami_core::rng::{DeterministicRng, SystemRng};
use talktoswami_core::store::PreferenceStore;
use talktoswami_quotes::domain::images::CategoryImageMap;
use talktoswami_quotes::domain::quote_bank::QuoteBank;
use talktoswami_quotes::domain::translations::Translations;
use talktoswami_sequencer::application::sequencer::QuoteSequencer;
use talktoswami_settings::application::service::PreferencesService;
use talktoswami_test_support::{InMemoryPreferenceStore, InstantTransition, RecordingPlatform};

/// Feedback address used across screen tests.
pub const FEEDBACK_EMAIL: &str = "feedback@example.org";

/// Assets shipped with the repository.
pub fn shipped_assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets")
}

/// A small two-language bank.
pub fn bank() -> QuoteBank {
    QuoteBank::from_json(
        r#"{
            "english": {
                "encouragement": ["Keep going."],
                "assurance": ["I am always with you."]
            },
            "german": {
                "encouragement": ["Mach weiter."],
                "assurance": ["Ich bin immer bei dir."]
            }
        }"#,
        &CategoryImageMap::builtin(),
    )
    .unwrap()
}

/// UI strings for the small bank.
pub fn translations() -> Translations {
    Translations::from_json(
        r#"{
            "english": {"talktoswami": "Talk to Swami", "small": "Small"},
            "german": {"talktoswami": "Sprich mit Swami", "exitTitle": "App beenden", "small": "Klein"}
        }"#,
    )
    .unwrap()
}

/// Build a home screen over the small bank with the given collaborators.
pub async fn build_screen_with(
    store: Arc<dyn PreferenceStore>,
    platform: Arc<dyn Platform>,
    rng: Box<dyn DeterministicRng>,
) -> HomeScreen {
    let images = Arc::new(CategoryImageMap::builtin());
    let bank = Arc::new(bank());
    let preferences = PreferencesService::load(store, &bank).await;
    let sequencer =
        QuoteSequencer::new(bank, images, preferences, Arc::new(InstantTransition), rng);
    HomeScreen::new(
        sequencer,
        Arc::new(translations()),
        platform,
        MobileOs::Android,
        FEEDBACK_EMAIL,
    )
}

/// Build a home screen with an empty in-memory store and a recording
/// platform, returning the platform handle for assertions.
pub async fn build_screen() -> (HomeScreen, RecordingPlatform) {
    let platform = RecordingPlatform::new();
    let screen = build_screen_with(
        Arc::new(InMemoryPreferenceStore::new()),
        Arc::new(platform.clone()),
        Box::new(SystemRng::seeded(11)),
    )
    .await;
    (screen, platform)
}
