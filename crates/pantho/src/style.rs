//! Presentation constants for the counter window.

use iced::font::{Family, Weight};
use iced::widget::button;
use iced::{Background, Color, Font, Theme};

/// Title of the main window.
pub const TITLE: &str = "Pantho";

/// Text shown on the button.
pub const BUTTON_TEXT: &str = "click";

pub const BUTTON_TEXT_SIZE: f32 = 50.0;
pub const LABEL_TEXT_SIZE: f32 = 50.0;

/// Bold "Ink Free". The text shaper picks the closest installed family if it is missing.
pub const BUTTON_FONT: Font = Font {
    family: Family::Name("Ink Free"),
    weight: Weight::Bold,
    ..Font::DEFAULT
};

pub const LABEL_FONT: Font = Font::MONOSPACE;

/// `#ff6200`
pub const BUTTON_BACKGROUND: Color = Color {
    r: 1.0,
    g: 98.0 / 255.0,
    b: 0.0,
    a: 1.0,
};
/// `#fffb1f`
pub const BUTTON_FOREGROUND: Color = Color {
    r: 1.0,
    g: 251.0 / 255.0,
    b: 31.0 / 255.0,
    a: 1.0,
};
/// `#FF0000`, used while the button is held down.
pub const BUTTON_ACTIVE_BACKGROUND: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};
pub const BUTTON_ACTIVE_FOREGROUND: Color = BUTTON_FOREGROUND;

/// Style function for the click button.
#[must_use]
pub fn click_button(_theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = match status {
        button::Status::Pressed => (BUTTON_ACTIVE_BACKGROUND, BUTTON_ACTIVE_FOREGROUND),
        button::Status::Active | button::Status::Hovered | button::Status::Disabled => {
            (BUTTON_BACKGROUND, BUTTON_FOREGROUND)
        }
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color,
        ..button::Style::default()
    }
}
