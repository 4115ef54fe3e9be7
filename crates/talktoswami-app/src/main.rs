//! Talk to Swami console host entry point.

use std::sync::Arc;

use talktoswami_app::config::{AppConfig, LogFormat};
use talktoswami_app::console;
use talktoswami_app::error::AppError;
use talktoswami_app::platform::ConsolePlatform;
use talktoswami_app::screen::HomeScreen;
use talktoswami_core::rng::{DeterministicRng, SystemRng};
use talktoswami_core::transition::TimedTransition;
use talktoswami_quotes::application::loader;
use talktoswami_quotes::domain::images::CategoryImageMap;
use talktoswami_sequencer::application::sequencer::QuoteSequencer;
use talktoswami_settings::application::service::PreferencesService;
use talktoswami_storage::json_file_store::JsonFileStore;
use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

fn init_tracing(format: LogFormat) {
    let builder = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Json => builder.json().init(),
        LogFormat::Text => builder.compact().init(),
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let config = AppConfig::from_env()?;
    init_tracing(config.log_format);

    tracing::info!(
        assets = %config.assets_dir.display(),
        preferences = %config.preferences_path.display(),
        "Starting Talk to Swami"
    );

    // Load static content.
    let images = Arc::new(CategoryImageMap::builtin());
    let bank = Arc::new(loader::load_quote_bank(&config.assets_dir, &images).await?);
    let translations = Arc::new(loader::load_translations(&config.assets_dir).await?);

    // Restore preferences.
    let store = Arc::new(JsonFileStore::new(&config.preferences_path));
    let preferences = PreferencesService::load(store, &bank).await;

    let rng: Box<dyn DeterministicRng> = match config.seed {
        Some(seed) => Box::new(SystemRng::seeded(seed)),
        None => Box::new(SystemRng::from_entropy()),
    };
    let sequencer = QuoteSequencer::new(
        bank,
        images,
        preferences,
        Arc::new(TimedTransition::uniform(config.transition)),
        rng,
    );
    let mut screen = HomeScreen::new(
        sequencer,
        translations,
        Arc::new(ConsolePlatform),
        config.os,
        config.feedback_email,
    );

    console::run(
        &mut screen,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
    )
    .await
}
