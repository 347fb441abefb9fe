use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::global_constants::{SAVED_FILE_EXTENSION, SAVED_FILE_PREFIX, SAVED_FILE_TIME_FORMAT};

#[derive(Debug, Clone, PartialEq)]
pub struct SavedImageRecord {
    pub file_name: String,
    pub save_directory: PathBuf,
    pub timestamp: String,
}

impl SavedImageRecord {
    /// Second granularity only: two pastes within one second share a name.
    pub fn derive_timestamp(moment: &DateTime<Local>) -> String {
        moment.format(SAVED_FILE_TIME_FORMAT).to_string()
    }

    pub fn derive_file_name(timestamp: &str) -> String {
        format!(
            "{}{}.{}",
            SAVED_FILE_PREFIX, timestamp, SAVED_FILE_EXTENSION
        )
    }

    pub fn build_at(moment: &DateTime<Local>, save_directory: &Path) -> Self {
        let timestamp = Self::derive_timestamp(moment);
        let file_name = Self::derive_file_name(&timestamp);

        log::debug!(
            "[SAVED_RECORD] derived {} in {}",
            file_name,
            save_directory.display()
        );

        Self {
            file_name,
            save_directory: save_directory.to_path_buf(),
            timestamp,
        }
    }

    pub fn full_path(&self) -> PathBuf {
        self.save_directory.join(&self.file_name)
    }
}
