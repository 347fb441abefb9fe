use std::path::PathBuf;

use crate::global_constants::{
    DESKTOP_DIRECTORY_NAME, PREVIEW_REGION_HEIGHT, PREVIEW_REGION_WIDTH,
};

/// Start-up configuration. Built once, never written back.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub save_directory: Option<PathBuf>,
    pub preview_width: u32,
    pub preview_height: u32,
}

impl AppConfig {
    pub fn resolve() -> Self {
        let save_directory = Self::resolve_desktop_directory();

        match &save_directory {
            Some(directory) => {
                log::info!("[CONFIG] Saving images to {}", directory.display())
            }
            None => log::warn!("[CONFIG] Could not determine home directory, saves will fail"),
        }

        Self {
            save_directory,
            preview_width: PREVIEW_REGION_WIDTH,
            preview_height: PREVIEW_REGION_HEIGHT,
        }
    }

    pub fn with_save_directory(save_directory: PathBuf) -> Self {
        Self {
            save_directory: Some(save_directory),
            preview_width: PREVIEW_REGION_WIDTH,
            preview_height: PREVIEW_REGION_HEIGHT,
        }
    }

    fn resolve_desktop_directory() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(DESKTOP_DIRECTORY_NAME))
    }
}
