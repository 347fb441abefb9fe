use iced::widget::{button, container};
use iced::{Background, Border, Color, Shadow, Theme};

use crate::core::models::StatusState;

pub const WINDOW_BACKGROUND: Color = Color::from_rgb8(0x00, 0x00, 0x00);
pub const TITLE_TEXT: Color = Color::from_rgb8(0xff, 0xff, 0xff);
pub const ACCENT: Color = Color::from_rgb8(0x00, 0xab, 0xa9);
pub const ACCENT_HOVERED: Color = Color::from_rgb8(0x00, 0x8e, 0x8c);
pub const ACCENT_PRESSED: Color = Color::from_rgb8(0x00, 0x72, 0x70);
pub const SUCCESS_TEXT: Color = Color::from_rgb8(0x00, 0xff, 0x88);
pub const FAILURE_TEXT: Color = Color::from_rgb8(0xff, 0x44, 0x44);
pub const PREVIEW_BACKGROUND: Color = Color::from_rgb8(0x0a, 0x0a, 0x0a);
pub const PREVIEW_BORDER: Color = Color::from_rgb8(0x33, 0x33, 0x33);
pub const PLACEHOLDER_TEXT: Color = Color::from_rgb8(0x44, 0x44, 0x44);

const BUTTON_RADIUS: f32 = 10.0;
const PREVIEW_RADIUS: f32 = 15.0;
const PREVIEW_BORDER_WIDTH: f32 = 2.0;

pub fn status_text_color(status: &StatusState) -> Color {
    match status {
        StatusState::Idle => ACCENT,
        StatusState::Saved(_) => SUCCESS_TEXT,
        StatusState::EmptyClipboard | StatusState::Error(_) => FAILURE_TEXT,
    }
}

fn filled_button(background: Color, snap: bool) -> button::Style {
    button::Style {
        background: Some(Background::Color(background)),
        text_color: Color::WHITE,
        border: Border {
            color: background,
            width: 0.0,
            radius: BUTTON_RADIUS.into(),
        },
        shadow: Shadow::default(),
        snap,
    }
}

pub fn paste_button_style(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active => filled_button(ACCENT, false),
        button::Status::Hovered => filled_button(ACCENT_HOVERED, false),
        button::Status::Pressed => filled_button(ACCENT_PRESSED, true),
        button::Status::Disabled => button::Style {
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            ..filled_button(Color::from_rgb(0.3, 0.3, 0.3), false)
        },
    }
}

pub fn window_background_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(WINDOW_BACKGROUND)),
        text_color: Some(TITLE_TEXT),
        ..Default::default()
    }
}

pub fn preview_frame_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(PREVIEW_BACKGROUND)),
        border: Border {
            color: PREVIEW_BORDER,
            width: PREVIEW_BORDER_WIDTH,
            radius: PREVIEW_RADIUS.into(),
        },
        ..Default::default()
    }
}
