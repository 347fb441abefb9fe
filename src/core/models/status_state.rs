use std::fmt;

use crate::global_constants::{
    STATUS_EMPTY_CLIPBOARD, STATUS_ERROR_PREFIX, STATUS_IDLE, STATUS_SAVED_PREFIX,
};

#[derive(Debug, Clone, PartialEq, Default)]
pub enum StatusState {
    #[default]
    Idle,
    Saved(String),
    EmptyClipboard,
    Error(String),
}

impl fmt::Display for StatusState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusState::Idle => write!(f, "{}", STATUS_IDLE),
            StatusState::Saved(file_name) => write!(f, "{}{}", STATUS_SAVED_PREFIX, file_name),
            StatusState::EmptyClipboard => write!(f, "{}", STATUS_EMPTY_CLIPBOARD),
            StatusState::Error(message) => write!(f, "{}{}", STATUS_ERROR_PREFIX, message),
        }
    }
}

impl StatusState {
    pub fn is_failure(&self) -> bool {
        matches!(self, StatusState::EmptyClipboard | StatusState::Error(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_is_idle() {
        assert_eq!(StatusState::default(), StatusState::Idle);
        assert_eq!(StatusState::default().to_string(), "Last saved: None");
    }

    #[test]
    fn test_saved_status_names_the_file() {
        let status = StatusState::Saved("img_101010.png".to_string());

        assert_eq!(status.to_string(), "✅ Saved as: img_101010.png");
        assert!(!status.is_failure());
    }

    #[test]
    fn test_empty_clipboard_status_text() {
        let status = StatusState::EmptyClipboard;

        assert_eq!(status.to_string(), "❌ Nothing found in clipboard");
        assert!(status.is_failure());
    }

    #[test]
    fn test_error_status_prefixes_message() {
        let status = StatusState::Error("permission denied".to_string());

        assert_eq!(status.to_string(), "Error: permission denied");
        assert!(status.is_failure());
    }
}
