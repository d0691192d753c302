//! # Pantho
//!
//! A window with a single button and a label counting how often the button was pressed.
//!
//! The application state lives in [`App`]. Window events arrive as [`Message`]s and are routed
//! through a [`Dispatcher`] to the registered handlers, so the whole behavior can be driven
//! through [`App::update`] without opening a window.

#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::cognitive_complexity)]

use std::process::ExitCode;

mod app;
mod counter;
mod dispatch;
mod error;
pub mod style;

pub use app::{App, Message, Phase, State};
pub use counter::Counter;
pub use dispatch::{Dispatcher, Handler};
pub use error::StartupError;

/// Window settings for the counter window.
///
/// Close requests are delivered to [`App::update`] as [`Message::CloseRequested`] instead of
/// closing the window directly.
#[must_use]
pub fn window_settings() -> iced::window::Settings {
    iced::window::Settings {
        exit_on_close_request: false,
        ..iced::window::Settings::default()
    }
}

/// Process exit status for the outcome of [`run_pantho`].
///
/// Any [`StartupError`] maps to [`ExitCode::FAILURE`].
#[must_use]
pub fn exit_code(result: &Result<(), StartupError>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

/// Initializes and runs `Pantho`.
///
/// Sets up logging, opens the window and blocks until it is closed. This function must only be
/// called once.
///
/// # Errors
///
/// Returns [`StartupError`] if logging cannot be initialized or the windowing system is
/// unavailable.
pub fn run_pantho() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .try_init()
        .map_err(StartupError::Logging)?;

    tracing::info!(title = style::TITLE, "starting");

    iced::application(style::TITLE, App::update, App::view)
        .subscription(App::subscription)
        .window(window_settings())
        .run()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes() {
        assert_eq!(exit_code(&Ok(())), ExitCode::SUCCESS);

        let failure = StartupError::Logging("subscriber already set".into());
        assert_eq!(exit_code(&Err(failure)), ExitCode::FAILURE);
    }
}
