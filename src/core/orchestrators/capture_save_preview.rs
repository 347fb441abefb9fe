use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use image::{DynamicImage, ImageReader, RgbaImage};

use crate::core::interfaces::ports::{ClipboardReader, Clock, ImageStore};
use crate::core::models::{
    AppConfig, ClipboardContent, PasteError, PasteOutcome, PreviewBitmap, SavedImageRecord,
};
use crate::global_constants::LOG_TAG_PASTE;

/// Reads the clipboard, saves it as a PNG and builds the preview, all on the calling thread.
pub struct CaptureSavePreview {
    clipboard_reader: Arc<dyn ClipboardReader>,
    image_store: Arc<dyn ImageStore>,
    clock: Arc<dyn Clock>,
    config: AppConfig,
}

impl CaptureSavePreview {
    pub fn build(
        clipboard_reader: Arc<dyn ClipboardReader>,
        image_store: Arc<dyn ImageStore>,
        clock: Arc<dyn Clock>,
        config: AppConfig,
    ) -> Self {
        Self {
            clipboard_reader,
            image_store,
            clock,
            config,
        }
    }

    pub fn execute(&self) -> PasteOutcome {
        match self.run_steps() {
            Ok(Some((record, preview))) => {
                log::info!(
                    "{} saved {} ({}x{} preview, aspect {:.3})",
                    LOG_TAG_PASTE,
                    record.full_path().display(),
                    preview.width,
                    preview.height,
                    preview.aspect_ratio()
                );
                PasteOutcome::Saved { record, preview }
            }
            Ok(None) => {
                log::info!("{} clipboard holds no image", LOG_TAG_PASTE);
                PasteOutcome::EmptyClipboard
            }
            Err(error) => {
                log::error!(
                    "{} paste failed ({}): {}",
                    LOG_TAG_PASTE,
                    error.category(),
                    error
                );
                PasteOutcome::Failed(error)
            }
        }
    }

    fn run_steps(&self) -> Result<Option<(SavedImageRecord, PreviewBitmap)>, PasteError> {
        let content = self
            .clipboard_reader
            .read_clipboard_content()
            .map_err(|error| PasteError::UnknownFailure(format!("{:#}", error)))?;

        log::debug!("{} clipboard content: {:?}", LOG_TAG_PASTE, content);

        if content.is_absent() {
            return Ok(None);
        }

        let decoded_image = Self::decode_clipboard_content(content)?;

        let save_directory = self.config.save_directory.as_deref().ok_or_else(|| {
            PasteError::IoFailure("could not determine the Desktop directory".to_string())
        })?;

        let record = SavedImageRecord::build_at(&self.clock.now(), save_directory);
        self.persist(&decoded_image, save_directory, &record.file_name)?;

        let preview = PreviewBitmap::build_from_image(
            &decoded_image,
            self.config.preview_width,
            self.config.preview_height,
        );

        Ok(Some((record, preview)))
    }

    fn decode_clipboard_content(content: ClipboardContent) -> Result<DynamicImage, PasteError> {
        if let ClipboardContent::FileReferences(paths) = &content {
            if paths.len() > 1 {
                log::debug!(
                    "{} {} file references, using only the first",
                    LOG_TAG_PASTE,
                    paths.len()
                );
            }
        }

        if let Some(first_path) = content.first_file_reference() {
            return Self::decode_file_reference(first_path);
        }

        match content {
            ClipboardContent::ImagePixels {
                width,
                height,
                rgba_bytes,
            } => Self::decode_raw_pixels(width, height, rgba_bytes),
            ClipboardContent::FileReferences(_) | ClipboardContent::Empty => Err(
                PasteError::DecodeFailure("clipboard holds no image".to_string()),
            ),
        }
    }

    fn decode_raw_pixels(
        width: u32,
        height: u32,
        rgba_bytes: Vec<u8>,
    ) -> Result<DynamicImage, PasteError> {
        if width == 0 || height == 0 {
            return Err(PasteError::DecodeFailure(format!(
                "clipboard image has no pixels ({}x{})",
                width, height
            )));
        }

        let byte_count = rgba_bytes.len();
        RgbaImage::from_raw(width, height, rgba_bytes)
            .map(DynamicImage::ImageRgba8)
            .ok_or_else(|| {
                PasteError::DecodeFailure(format!(
                    "clipboard image data is {} bytes, expected {} for {}x{}",
                    byte_count,
                    width as usize * height as usize * 4,
                    width,
                    height
                ))
            })
    }

    fn decode_file_reference(path: &Path) -> Result<DynamicImage, PasteError> {
        log::debug!("{} decoding file reference {}", LOG_TAG_PASTE, path.display());

        ImageReader::open(path)
            .with_context(|| format!("cannot open {}", path.display()))
            .and_then(|reader| {
                reader
                    .with_guessed_format()
                    .with_context(|| format!("cannot read {}", path.display()))
            })
            .and_then(|reader| {
                reader
                    .decode()
                    .with_context(|| format!("cannot identify image file {}", path.display()))
            })
            .map_err(|error| PasteError::DecodeFailure(format!("{:#}", error)))
    }

    fn persist(
        &self,
        image: &DynamicImage,
        directory: &Path,
        file_name: &str,
    ) -> Result<(), PasteError> {
        self.image_store
            .save_png(image, directory, file_name)
            .map(|_| ())
            .map_err(|error| PasteError::IoFailure(format!("{:#}", error)))
    }
}
