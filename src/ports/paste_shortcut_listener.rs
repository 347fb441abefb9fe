use iced::keyboard::key::{Code, Physical};
use iced::keyboard::{self, Key, Modifiers};
use iced::{event, window, Event, Subscription};

use crate::global_constants::LOG_TAG_KEYBOARD;

/// Which gesture asked for a paste.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasteTrigger {
    Button,
    KeyboardShortcut,
}

pub struct PasteShortcutListener;

impl PasteShortcutListener {
    pub fn create_subscription() -> Subscription<PasteTrigger> {
        event::listen_with(Self::map_window_event)
    }

    /// Auto-repeated presses are gestures too; `repeat` is not inspected.
    fn map_window_event(
        event: Event,
        _status: event::Status,
        _window: window::Id,
    ) -> Option<PasteTrigger> {
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed {
                key,
                physical_key,
                modifiers,
                ..
            }) if Self::is_paste_chord(&key, physical_key, modifiers) => {
                log::debug!("{} paste chord detected", LOG_TAG_KEYBOARD);
                Some(PasteTrigger::KeyboardShortcut)
            }
            _ => None,
        }
    }

    /// Command modifier (Control, or Command on macOS) plus `V`, nothing else held.
    /// The V key position counts on any layout, so non-Latin layouts still paste.
    pub fn is_paste_chord(key: &Key, physical_key: Physical, modifiers: Modifiers) -> bool {
        if modifiers != Modifiers::COMMAND {
            return false;
        }

        if physical_key == Physical::Code(Code::KeyV) {
            return true;
        }

        match key {
            Key::Character(character) => character.as_str().eq_ignore_ascii_case("v"),
            _ => false,
        }
    }
}
