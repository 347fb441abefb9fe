use std::path::{Path, PathBuf};

use anyhow::Result;
use image::DynamicImage;

pub trait ImageStore {
    /// Writes `image` as PNG to `directory/file_name`, replacing any existing file.
    fn save_png(&self, image: &DynamicImage, directory: &Path, file_name: &str) -> Result<PathBuf>;
}
