use std::borrow::Cow;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{ColorType, DynamicImage, ImageFormat};

use crate::core::interfaces::ports::ImageStore;
use crate::global_constants::LOG_TAG_STORE;

pub struct PngFileStore;

impl PngFileStore {
    pub fn initialize() -> Self {
        log::debug!("{} initializing png file store", LOG_TAG_STORE);
        Self
    }

    /// PNG has no float samples; those are narrowed to RGBA8, everything else is kept.
    fn png_compatible(image: &DynamicImage) -> Cow<'_, DynamicImage> {
        let is_supported = matches!(
            image.color(),
            ColorType::L8
                | ColorType::La8
                | ColorType::Rgb8
                | ColorType::Rgba8
                | ColorType::L16
                | ColorType::La16
                | ColorType::Rgb16
                | ColorType::Rgba16
        );

        if is_supported {
            Cow::Borrowed(image)
        } else {
            log::debug!(
                "{} converting {:?} to rgba8 for png",
                LOG_TAG_STORE,
                image.color()
            );
            Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
        }
    }
}

impl ImageStore for PngFileStore {
    fn save_png(&self, image: &DynamicImage, directory: &Path, file_name: &str) -> Result<PathBuf> {
        let target_path = directory.join(file_name);

        if target_path.exists() {
            log::warn!(
                "{} overwriting existing file {}",
                LOG_TAG_STORE,
                target_path.display()
            );
        }

        Self::png_compatible(image)
            .save_with_format(&target_path, ImageFormat::Png)
            .with_context(|| format!("failed to save {}", target_path.display()))?;

        log::info!(
            "{} wrote {}x{} png to {}",
            LOG_TAG_STORE,
            image.width(),
            image.height(),
            target_path.display()
        );

        Ok(target_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb32FImage, RgbaImage};

    #[test]
    fn test_save_png_writes_decodable_file() {
        let directory = tempfile::tempdir().unwrap();
        let store = PngFileStore::initialize();
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            3,
            2,
            image::Rgba([9, 8, 7, 255]),
        ));

        let saved_path = store
            .save_png(&image, directory.path(), "img_000000.png")
            .unwrap();

        assert_eq!(saved_path, directory.path().join("img_000000.png"));
        assert_eq!(
            image::ImageReader::open(&saved_path)
                .unwrap()
                .with_guessed_format()
                .unwrap()
                .format(),
            Some(ImageFormat::Png)
        );
        assert_eq!(image::open(&saved_path).unwrap().to_rgba8(), image.to_rgba8());
    }

    #[test]
    fn test_save_png_does_not_create_missing_directory() {
        let parent = tempfile::tempdir().unwrap();
        let missing = parent.path().join("missing");
        let store = PngFileStore::initialize();
        let image = DynamicImage::ImageRgba8(RgbaImage::new(1, 1));

        let result = store.save_png(&image, &missing, "img_000000.png");

        assert!(result.is_err());
        assert!(!missing.exists());
    }

    #[test]
    fn test_float_images_are_converted_before_encoding() {
        let directory = tempfile::tempdir().unwrap();
        let store = PngFileStore::initialize();
        let image = DynamicImage::ImageRgb32F(Rgb32FImage::from_pixel(
            2,
            2,
            image::Rgb([1.0, 0.0, 0.0]),
        ));

        let saved_path = store
            .save_png(&image, directory.path(), "img_111111.png")
            .unwrap();

        let decoded = image::open(saved_path).unwrap().to_rgba8();
        assert_eq!(decoded.get_pixel(0, 0), &image::Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_png_compatible_keeps_supported_layouts() {
        let gray = DynamicImage::ImageLuma8(image::GrayImage::new(1, 1));

        assert!(matches!(PngFileStore::png_compatible(&gray), Cow::Borrowed(_)));
    }
}
