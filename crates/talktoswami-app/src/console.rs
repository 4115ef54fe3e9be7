//! Line-oriented console host for the home screen.
//!
//! Each input line is one interaction. After every interaction the host
//! prints the screen view as a JSON line, followed by any notice or dialog.

use talktoswami_core::error::DomainError;
use talktoswami_settings::domain::preferences::FontSize;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

use crate::error::AppError;
use crate::screen::{BackOutcome, HomeScreen};

/// One console interaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    /// Press the main button.
    Tap,
    /// Back gesture.
    Back,
    /// Toggle the drawer.
    Drawer,
    /// Pick a language.
    Language(String),
    /// Pick a font size.
    Font(FontSize),
    /// List the language picker rows.
    Languages,
    /// Share the visible card.
    Share,
    /// Share the app.
    ShareApp,
    /// Open the store listing.
    Rate,
    /// Open a feedback email.
    Write,
    /// Show the About page.
    About,
    /// Open the About link with the given 1-based number.
    Open(usize),
    /// Return from the About page.
    Home,
    /// Print the current view.
    Show,
    /// Leave the host.
    Quit,
}

impl ConsoleCommand {
    /// Parses one input line. Blank lines yield `None`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for unknown commands or bad arguments.
    pub fn parse(line: &str) -> Result<Option<Self>, DomainError> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(None);
        };
        let arg = parts.next();
        let command = match (head.to_ascii_lowercase().as_str(), arg) {
            ("tap", None) => Self::Tap,
            ("back", None) => Self::Back,
            ("drawer", None) => Self::Drawer,
            ("language", Some(code)) => Self::Language(code.to_ascii_lowercase()),
            ("font", Some(name)) => Self::Font(FontSize::from_name(name).ok_or_else(|| {
                DomainError::Validation(format!("unknown font size: {name}"))
            })?),
            ("languages", None) => Self::Languages,
            ("share", None) => Self::Share,
            ("share-app", None) => Self::ShareApp,
            ("rate", None) => Self::Rate,
            ("write", None) => Self::Write,
            ("about", None) => Self::About,
            ("open", Some(n)) => Self::Open(n.parse().map_err(|_| {
                DomainError::Validation(format!("link number must be a positive integer: {n}"))
            })?),
            ("home", None) => Self::Home,
            ("show", None) => Self::Show,
            ("quit" | "exit", None) => Self::Quit,
            _ => {
                return Err(DomainError::Validation(format!(
                    "unrecognised command: {}",
                    line.trim()
                )));
            }
        };
        Ok(Some(command))
    }
}

/// Applies `command` to `screen`, returning text to print (if any). Returns
/// `None` when the host should stop.
///
/// # Errors
///
/// Returns `DomainError` for rejected interactions (e.g. unknown language).
pub async fn apply(
    screen: &mut HomeScreen,
    command: ConsoleCommand,
) -> Result<Option<String>, DomainError> {
    let mut lines: Vec<String> = Vec::new();
    match command {
        ConsoleCommand::Tap => screen.tap().await?,
        ConsoleCommand::Back => {
            if let BackOutcome::ConfirmExit(dialog) = screen.press_back().await {
                lines.push(format!(
                    "{}: {} [{} = quit / {}]",
                    dialog.title, dialog.message, dialog.confirm, dialog.cancel
                ));
            }
        }
        ConsoleCommand::Drawer => {
            if screen.is_drawer_open() {
                screen.close_drawer();
            } else {
                screen.open_drawer();
            }
        }
        ConsoleCommand::Language(code) => {
            screen.open_language_picker();
            screen.select_language(&code).await?;
        }
        ConsoleCommand::Font(size) => {
            screen.open_font_size_picker();
            screen.select_font_size(size).await;
        }
        ConsoleCommand::Languages => {
            for option in screen.language_options() {
                let marker = if option.selected { "*" } else { " " };
                lines.push(format!("{marker} {:<10} {}", option.code, option.label));
            }
        }
        ConsoleCommand::Share => {
            screen.share_quote().await;
        }
        ConsoleCommand::ShareApp => {
            screen.share_app().await;
        }
        ConsoleCommand::Rate => {
            screen.rate_app().await;
        }
        ConsoleCommand::Write => {
            screen.write_to_us().await;
        }
        ConsoleCommand::About => {
            screen.open_about();
            lines.push(crate::links::ABOUT_TEXT.to_owned());
            for (number, link) in HomeScreen::about_links().iter().enumerate() {
                lines.push(format!("  [{}] {} <{}>", number + 1, link.label, link.url));
            }
        }
        ConsoleCommand::Open(number) => {
            let link = number
                .checked_sub(1)
                .and_then(|index| HomeScreen::about_links().get(index))
                .ok_or_else(|| DomainError::Validation(format!("no link numbered {number}")))?;
            screen.open_link(link.url).await;
        }
        ConsoleCommand::Home => screen.close_about(),
        ConsoleCommand::Show => {}
        ConsoleCommand::Quit => return Ok(None),
    }
    Ok(Some(lines.into_iter().map(|line| line + "\n").collect()))
}

/// Runs the host until `quit` or end of input.
///
/// # Errors
///
/// Returns `AppError::Io` if reading input or writing output fails.
pub async fn run<R, W>(screen: &mut HomeScreen, input: R, mut output: W) -> Result<(), AppError>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        let command = match ConsoleCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(error = %e, "rejected input");
                output.write_all(format!("error: {e}\n").as_bytes()).await?;
                continue;
            }
        };

        let mut text = match apply(screen, command).await {
            Ok(Some(text)) => text,
            Ok(None) => break,
            Err(e) => {
                warn!(error = %e, "interaction rejected");
                format!("error: {e}\n")
            }
        };

        let view = serde_json::to_string(&screen.view())
            .map_err(|e| AppError::Io(std::io::Error::other(e)))?;
        text.push_str(&view);
        text.push('\n');
        if let Some(notice) = screen.take_notice() {
            text.push_str("notice: ");
            text.push_str(&notice);
            text.push('\n');
        }
        output.write_all(text.as_bytes()).await?;
        output.flush().await?;
    }
    info!("console host finished");
    Ok(())
}
