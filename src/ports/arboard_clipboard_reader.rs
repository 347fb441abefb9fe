use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::core::interfaces::ports::ClipboardReader;
use crate::core::models::ClipboardContent;
use crate::global_constants::LOG_TAG_CLIPBOARD;

pub struct ArboardClipboardReader;

impl ArboardClipboardReader {
    pub fn initialize() -> Self {
        log::debug!("{} initializing arboard clipboard reader", LOG_TAG_CLIPBOARD);
        Self
    }

    fn convert_image_data(image_data: arboard::ImageData<'_>) -> ClipboardContent {
        log::debug!(
            "{} clipboard image {}x{}",
            LOG_TAG_CLIPBOARD,
            image_data.width,
            image_data.height
        );

        ClipboardContent::ImagePixels {
            width: image_data.width as u32,
            height: image_data.height as u32,
            rgba_bytes: image_data.bytes.into_owned(),
        }
    }

    fn classify_image_read(
        result: Result<arboard::ImageData<'static>, arboard::Error>,
    ) -> Result<Option<ClipboardContent>> {
        match result {
            Ok(image_data) => Ok(Some(Self::convert_image_data(image_data))),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(error) => Err(error).context("failed to read image from clipboard"),
        }
    }

    fn classify_file_list_read(
        result: Result<Vec<PathBuf>, arboard::Error>,
    ) -> Result<ClipboardContent> {
        match result {
            Ok(paths) => {
                log::debug!("{} clipboard holds {} file(s)", LOG_TAG_CLIPBOARD, paths.len());
                Ok(ClipboardContent::FileReferences(paths))
            }
            Err(arboard::Error::ContentNotAvailable) => Ok(ClipboardContent::Empty),
            Err(error) => Err(error).context("failed to read file list from clipboard"),
        }
    }
}

impl ClipboardReader for ArboardClipboardReader {
    fn read_clipboard_content(&self) -> Result<ClipboardContent> {
        let mut clipboard =
            arboard::Clipboard::new().context("failed to initialize clipboard")?;

        if let Some(content) = Self::classify_image_read(clipboard.get_image())? {
            return Ok(content);
        }

        Self::classify_file_list_read(clipboard.get().file_list())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    #[test]
    fn test_initialize_creates_reader() {
        let reader = ArboardClipboardReader::initialize();

        assert!(std::mem::size_of_val(&reader) == 0);
    }

    #[test]
    fn test_image_data_becomes_image_pixels() {
        let image_data = arboard::ImageData {
            width: 2,
            height: 1,
            bytes: Cow::Owned(vec![1, 2, 3, 4, 5, 6, 7, 8]),
        };

        let content = ArboardClipboardReader::classify_image_read(Ok(image_data))
            .unwrap()
            .unwrap();

        match content {
            ClipboardContent::ImagePixels {
                width,
                height,
                rgba_bytes,
            } => {
                assert_eq!((width, height), (2, 1));
                assert_eq!(rgba_bytes, vec![1, 2, 3, 4, 5, 6, 7, 8]);
            }
            other => panic!("expected image pixels, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_image_falls_through() {
        let content =
            ArboardClipboardReader::classify_image_read(Err(arboard::Error::ContentNotAvailable))
                .unwrap();

        assert!(content.is_none());
    }

    #[test]
    fn test_clipboard_errors_other_than_missing_content_propagate() {
        let result =
            ArboardClipboardReader::classify_image_read(Err(arboard::Error::ClipboardOccupied));

        assert!(result.is_err());
    }

    #[test]
    fn test_missing_file_list_means_empty_clipboard() {
        let content = ArboardClipboardReader::classify_file_list_read(Err(
            arboard::Error::ContentNotAvailable,
        ))
        .unwrap();

        assert!(matches!(content, ClipboardContent::Empty));
    }

    #[test]
    fn test_file_list_becomes_file_references() {
        let paths = vec![PathBuf::from("/tmp/a.png"), PathBuf::from("/tmp/b.png")];

        let content = ArboardClipboardReader::classify_file_list_read(Ok(paths.clone())).unwrap();

        assert_eq!(content.first_file_reference(), Some(&paths[0]));
    }
}
