//! Integration tests for the home screen controller.

mod common;

use std::sync::Arc;

use talktoswami_app::links::{CHROME_URL, PLAY_STORE_URL};
use talktoswami_app::screen::{BackOutcome, HomeScreen, Modal, NO_CARD_NOTICE, Route};
use talktoswami_core::error::DomainError;
use talktoswami_core::rng::SystemRng;
use talktoswami_sequencer::domain::card::CardState;
use talktoswami_settings::domain::preferences::{FONT_SIZE_KEY, FontSize, LANGUAGE_KEY};
use talktoswami_test_support::{
    FailingPlatform, FailingPreferenceStore, InMemoryPreferenceStore, MockRng, PlatformCall,
};

// --- quote card ---

#[tokio::test]
async fn test_tap_shows_card_in_view() {
    let (mut screen, _) = common::build_screen().await;

    screen.tap().await.unwrap();

    let view = screen.view();
    assert_eq!(view.card, CardState::Visible);
    let quote = view.quote.unwrap();
    assert!(["Keep going.", "I am always with you."].contains(&quote.text.as_str()));
    assert!(quote.image.starts_with("images/"));
    assert_eq!(view.font_size, 20);
    assert_eq!(view.button_label, "Talk to Swami");
}

#[tokio::test]
async fn test_language_change_while_card_visible_clears_card() {
    let (mut screen, _) = common::build_screen().await;
    screen.tap().await.unwrap();
    screen.open_drawer();
    screen.open_language_picker();

    screen.select_language("german").await.unwrap();

    let view = screen.view();
    assert_eq!(view.card, CardState::Hidden);
    assert!(view.quote.is_none());
    assert_eq!(view.language, "german");
    assert_eq!(view.language_label, "Deutsch - German");
    assert_eq!(view.button_label, "Sprich mit Swami");
    assert_eq!(screen.modal(), None);
    assert!(screen.is_drawer_open());

    screen.tap().await.unwrap();
    let text = screen.view().quote.unwrap().text;
    assert!(["Mach weiter.", "Ich bin immer bei dir."].contains(&text.as_str()));
}

#[tokio::test]
async fn test_unknown_language_keeps_picker_open() {
    let (mut screen, _) = common::build_screen().await;
    screen.open_language_picker();

    let result = screen.select_language("tamil").await;

    assert!(matches!(result, Err(DomainError::Validation(_))));
    assert_eq!(screen.modal(), Some(Modal::LanguagePicker));
    assert_eq!(screen.view().language, "english");
}

#[tokio::test]
async fn test_font_size_selection_persists_and_keeps_card() {
    let store = Arc::new(InMemoryPreferenceStore::new());
    let mut screen = common::build_screen_with(
        store.clone(),
        Arc::new(talktoswami_test_support::RecordingPlatform::new()),
        Box::new(MockRng),
    )
    .await;
    screen.tap().await.unwrap();
    screen.open_font_size_picker();

    screen.select_font_size(FontSize::Small).await;

    let view = screen.view();
    assert_eq!(view.font_size, 16);
    assert_eq!(view.card, CardState::Visible);
    assert_eq!(view.quote.unwrap().text, "Keep going.");
    assert_eq!(screen.modal(), None);
    assert_eq!(store.value(FONT_SIZE_KEY).as_deref(), Some("16"));
}

#[tokio::test]
async fn test_preferences_survive_restart() {
    let store = Arc::new(InMemoryPreferenceStore::new());
    let platform = Arc::new(talktoswami_test_support::RecordingPlatform::new());
    let mut first =
        common::build_screen_with(store.clone(), platform.clone(), Box::new(MockRng)).await;
    first.select_language("german").await.unwrap();
    first.select_font_size(FontSize::Large).await;
    drop(first);

    let second = common::build_screen_with(store.clone(), platform, Box::new(MockRng)).await;

    let view = second.view();
    assert_eq!(view.language, "german");
    assert_eq!(view.font_size, 24);
    assert_eq!(store.value(LANGUAGE_KEY).as_deref(), Some("german"));
}

#[tokio::test]
async fn test_failing_store_does_not_block_the_screen() {
    let mut screen = common::build_screen_with(
        Arc::new(FailingPreferenceStore),
        Arc::new(talktoswami_test_support::RecordingPlatform::new()),
        Box::new(SystemRng::seeded(4)),
    )
    .await;

    screen.select_language("german").await.unwrap();
    screen.tap().await.unwrap();

    assert_eq!(screen.view().language, "german");
    assert_eq!(screen.view().card, CardState::Visible);
}

// --- pickers ---

#[tokio::test]
async fn test_language_options_list_loaded_languages_in_menu_order() {
    let (screen, _) = common::build_screen().await;

    let options = screen.language_options();

    let codes: Vec<&str> = options.iter().map(|o| o.code).collect();
    assert_eq!(codes, vec!["english", "german"]);
    assert!(options[0].selected);
    assert!(!options[1].selected);
}

#[tokio::test]
async fn test_font_size_options_are_translated() {
    let (mut screen, _) = common::build_screen().await;
    screen.select_language("german").await.unwrap();

    let options = screen.font_size_options();

    assert_eq!(options.len(), 3);
    assert_eq!(options[0].label, "Klein");
    // Missing in both tables, so the built-in literal is used.
    assert_eq!(options[2].label, "Large");
    assert!(options[1].selected);
}

// --- back gesture ---

#[tokio::test]
async fn test_back_closes_drawer_before_card() {
    let (mut screen, _) = common::build_screen().await;
    screen.tap().await.unwrap();
    screen.open_drawer();
    screen.open_language_picker();

    assert_eq!(screen.press_back().await, BackOutcome::DrawerClosed);
    assert!(!screen.is_drawer_open());
    assert_eq!(screen.modal(), None);
    assert_eq!(screen.view().card, CardState::Visible);

    assert_eq!(screen.press_back().await, BackOutcome::CardDismissed);
    assert_eq!(screen.view().card, CardState::Hidden);
    assert!(screen.view().quote.is_none());
}

#[tokio::test]
async fn test_back_with_nothing_open_asks_to_exit_in_selected_language() {
    let (mut screen, _) = common::build_screen().await;
    screen.select_language("german").await.unwrap();

    let outcome = screen.press_back().await;

    match outcome {
        BackOutcome::ConfirmExit(dialog) => {
            assert_eq!(dialog.title, "App beenden");
            assert_eq!(dialog.message, "Do you want to exit the app?");
            assert_eq!(dialog.confirm, "Yes");
            assert_eq!(dialog.cancel, "No");
        }
        other => panic!("expected ConfirmExit, got {other:?}"),
    }
}

#[tokio::test]
async fn test_back_on_about_page_returns_home() {
    let (mut screen, _) = common::build_screen().await;
    screen.open_about();

    assert_eq!(screen.press_back().await, BackOutcome::AboutClosed);
    assert_eq!(screen.route(), Route::Home);
}

// --- sharing and links ---

#[tokio::test]
async fn test_share_without_card_sets_notice() {
    let (mut screen, platform) = common::build_screen().await;

    let shared = screen.share_quote().await;

    assert!(!shared);
    assert_eq!(screen.take_notice().as_deref(), Some(NO_CARD_NOTICE));
    assert!(screen.take_notice().is_none());
    assert!(platform.calls().is_empty());
}

#[tokio::test]
async fn test_share_visible_card_hands_quote_to_platform() {
    let (mut screen, platform) = common::build_screen().await;
    screen.tap().await.unwrap();
    let quote = screen.view().quote.unwrap();

    assert!(screen.share_quote().await);

    assert_eq!(
        platform.calls(),
        vec![PlatformCall::ShareCard {
            text: quote.text,
            image: quote.image,
        }]
    );
}

#[tokio::test]
async fn test_rate_write_and_share_app_reach_platform() {
    let (mut screen, platform) = common::build_screen().await;

    assert!(screen.rate_app().await);
    assert!(screen.write_to_us().await);
    assert!(screen.share_app().await);

    let calls = platform.calls();
    assert_eq!(calls[0], PlatformCall::OpenUrl(PLAY_STORE_URL.to_owned()));
    assert_eq!(
        calls[1],
        PlatformCall::OpenUrl(format!("mailto:{}", common::FEEDBACK_EMAIL))
    );
    match &calls[2] {
        PlatformCall::ShareText(message) => assert!(message.contains(CHROME_URL)),
        other => panic!("expected ShareText, got {other:?}"),
    }
}

#[tokio::test]
async fn test_platform_failure_is_recovered_with_notice() {
    let mut screen = common::build_screen_with(
        Arc::new(InMemoryPreferenceStore::new()),
        Arc::new(FailingPlatform),
        Box::new(MockRng),
    )
    .await;
    screen.tap().await.unwrap();

    assert!(!screen.share_quote().await);
    assert_eq!(
        screen.take_notice().as_deref(),
        Some("Could not share the quote.")
    );
    assert!(!screen.rate_app().await);
    assert_eq!(screen.take_notice().as_deref(), Some("Could not open the store."));

    // The quote flow keeps working.
    assert_eq!(screen.view().card, CardState::Visible);
}

#[tokio::test]
async fn test_about_links_open_through_platform() {
    let (mut screen, platform) = common::build_screen().await;
    screen.open_about();

    for link in HomeScreen::about_links() {
        assert!(screen.open_link(link.url).await);
    }
    screen.close_about();

    assert_eq!(platform.calls().len(), 2);
    assert_eq!(screen.route(), Route::Home);
}
