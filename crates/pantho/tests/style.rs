use iced::widget::button;
use iced::{Background, Color, Theme};
use pantho_lib::style::*;

#[test]
fn window_and_button_text() {
    assert_eq!(TITLE, "Pantho");
    assert_eq!(BUTTON_TEXT, "click");
}

#[test]
fn text_sizes() {
    assert!((BUTTON_TEXT_SIZE - 50.0).abs() < f32::EPSILON);
    assert!((LABEL_TEXT_SIZE - 50.0).abs() < f32::EPSILON);
}

#[test]
fn fonts() {
    assert_eq!(BUTTON_FONT.family, iced::font::Family::Name("Ink Free"));
    assert_eq!(BUTTON_FONT.weight, iced::font::Weight::Bold);
    assert_eq!(LABEL_FONT, iced::Font::MONOSPACE);
}

#[test]
fn button_colors() {
    assert_eq!(BUTTON_BACKGROUND, Color::from_rgb8(0xff, 0x62, 0x00));
    assert_eq!(BUTTON_FOREGROUND, Color::from_rgb8(0xff, 0xfb, 0x1f));
    assert_eq!(BUTTON_ACTIVE_BACKGROUND, Color::from_rgb8(0xff, 0x00, 0x00));
    assert_eq!(BUTTON_ACTIVE_FOREGROUND, BUTTON_FOREGROUND);
}

#[test]
fn pressed_button_turns_red() {
    let theme = Theme::default();

    let idle = click_button(&theme, button::Status::Active);
    assert_eq!(idle.background, Some(Background::Color(BUTTON_BACKGROUND)));
    assert_eq!(idle.text_color, BUTTON_FOREGROUND);

    let hovered = click_button(&theme, button::Status::Hovered);
    assert_eq!(hovered.background, idle.background);

    let pressed = click_button(&theme, button::Status::Pressed);
    assert_eq!(
        pressed.background,
        Some(Background::Color(BUTTON_ACTIVE_BACKGROUND))
    );
    assert_eq!(pressed.text_color, BUTTON_ACTIVE_FOREGROUND);
}
