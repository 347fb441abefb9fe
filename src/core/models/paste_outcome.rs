use super::{PreviewBitmap, SavedImageRecord, StatusState};

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PasteError {
    #[error("{0}")]
    DecodeFailure(String),

    #[error("{0}")]
    IoFailure(String),

    #[error("{0}")]
    UnknownFailure(String),
}

impl PasteError {
    pub fn category(&self) -> &'static str {
        match self {
            PasteError::DecodeFailure(_) => "decode",
            PasteError::IoFailure(_) => "io",
            PasteError::UnknownFailure(_) => "unknown",
        }
    }
}

/// Result of one capture-save-preview run.
#[derive(Debug, Clone)]
pub enum PasteOutcome {
    Saved {
        record: SavedImageRecord,
        preview: PreviewBitmap,
    },
    EmptyClipboard,
    Failed(PasteError),
}

impl PasteOutcome {
    pub fn to_status(&self) -> StatusState {
        match self {
            PasteOutcome::Saved { record, .. } => StatusState::Saved(record.file_name.clone()),
            PasteOutcome::EmptyClipboard => StatusState::EmptyClipboard,
            PasteOutcome::Failed(error) => StatusState::Error(error.to_string()),
        }
    }
}
