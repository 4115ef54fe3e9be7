//! Store, extension and project links, and the app share message.

use std::str::FromStr;

use serde::Serialize;
use talktoswami_quotes::domain::languages::LANGUAGE_LABELS;

/// App Store listing.
pub const APP_STORE_URL: &str = "https://apps.apple.com/app/idYOUR_APP_ID";

/// Google Play listing.
pub const PLAY_STORE_URL: &str =
    "https://play.google.com/store/apps/details?id=com.gmail.aryanias3.talktoswamicopy&hl=en_IN";

/// Chrome Web Store listing of the browser extension.
pub const CHROME_URL: &str =
    "https://chromewebstore.google.com/detail/talk-to-swami/jjpebaigoamlglpipgcfhaedhckgjcmj?hl=en";

/// Source repository.
pub const GITHUB_URL: &str = "https://github.com/AryanSai/TalkToSwami";

/// Default address for "write to us".
pub const DEFAULT_FEEDBACK_EMAIL: &str = "aryanias3@gmail.com";

/// Mobile operating system, which decides the store a rating goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MobileOs {
    /// Google Play.
    #[default]
    Android,
    /// App Store.
    Ios,
}

impl MobileOs {
    /// Returns the store listing for this OS.
    #[must_use]
    pub fn store_url(self) -> &'static str {
        match self {
            Self::Android => PLAY_STORE_URL,
            Self::Ios => APP_STORE_URL,
        }
    }
}

impl FromStr for MobileOs {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "android" => Ok(Self::Android),
            "ios" => Ok(Self::Ios),
            other => Err(format!("unknown platform '{other}', expected android or ios")),
        }
    }
}

/// A link shown on the About page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AboutLink {
    /// Link text.
    pub label: &'static str,
    /// Target URL.
    pub url: &'static str,
}

/// Links shown on the About page, in display order.
pub const ABOUT_LINKS: [AboutLink; 2] = [
    AboutLink {
        label: "Download from Chrome Web Store",
        url: CHROME_URL,
    },
    AboutLink {
        label: "View on GitHub",
        url: GITHUB_URL,
    },
];

/// Body text of the About page.
pub const ABOUT_TEXT: &str = "The \"Talk to Swami\" application allows you to receive a divine \
message from Bhagawan Sri Sathya Sai Baba. When the button is clicked, a message appears on the \
screen that can be seen as Swami's answer to the question in your heart. The app draws \
inspiration from the \"Chit Boxes\" found in Swami's educational institutions.";

/// Builds the `mailto:` link for feedback.
#[must_use]
pub fn feedback_url(email: &str) -> String {
    format!("mailto:{email}")
}

/// Builds the message shared by "share app".
#[must_use]
pub fn share_app_message() -> String {
    let languages: Vec<&str> = LANGUAGE_LABELS
        .iter()
        .map(|(_, label)| label.split(" - ").next().unwrap_or_default())
        .collect();
    format!(
        "Download Talk to Swami and receive a divine message from Bhagawan Sri Sathya Sai Baba \
         with a single tap.\n\nAvailable in: {}.\n\nGoogle Play Store: {PLAY_STORE_URL}\n\n\
         Chrome Extension: {CHROME_URL}\n\niOS version coming soon!",
        languages.join(", ")
    )
}
