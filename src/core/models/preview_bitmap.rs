use iced::widget::image::Handle;
use image::imageops::FilterType;
use image::DynamicImage;

#[derive(Clone)]
pub struct PreviewBitmap {
    pub width: u32,
    pub height: u32,
    pub handle: Handle,
}

impl std::fmt::Debug for PreviewBitmap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewBitmap")
            .field("width", &self.width)
            .field("height", &self.height)
            .finish()
    }
}

impl PreviewBitmap {
    /// Largest size inside the region with the source aspect ratio. Enlarges small sources.
    pub fn fit_dimensions(
        source_width: u32,
        source_height: u32,
        region_width: u32,
        region_height: u32,
    ) -> (u32, u32) {
        if source_width == 0 || source_height == 0 {
            return (1, 1);
        }

        let scale = f64::min(
            region_width as f64 / source_width as f64,
            region_height as f64 / source_height as f64,
        );

        let fitted_width = (source_width as f64 * scale).round() as u32;
        let fitted_height = (source_height as f64 * scale).round() as u32;

        (
            fitted_width.clamp(1, region_width.max(1)),
            fitted_height.clamp(1, region_height.max(1)),
        )
    }

    pub fn build_from_image(
        source: &DynamicImage,
        region_width: u32,
        region_height: u32,
    ) -> Self {
        let rgba_source = source.to_rgba8();
        let (width, height) = Self::fit_dimensions(
            rgba_source.width(),
            rgba_source.height(),
            region_width,
            region_height,
        );

        log::debug!(
            "[PREVIEW] scaling {}x{} to {}x{}",
            rgba_source.width(),
            rgba_source.height(),
            width,
            height
        );

        let scaled = image::imageops::resize(&rgba_source, width, height, FilterType::Triangle);

        Self {
            width,
            height,
            handle: Handle::from_rgba(width, height, scaled.into_raw()),
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    fn solid_image(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgba8(RgbaImage::from_pixel(
            width,
            height,
            Rgba([10, 20, 30, 255]),
        ))
    }

    #[test]
    fn test_fit_dimensions_enlarges_wide_image_to_region_width() {
        assert_eq!(PreviewBitmap::fit_dimensions(200, 100, 366, 276), (366, 183));
    }

    #[test]
    fn test_fit_dimensions_shrinks_tall_image_to_region_height() {
        assert_eq!(PreviewBitmap::fit_dimensions(1000, 2000, 366, 276), (138, 276));
    }

    #[test]
    fn test_fit_dimensions_never_exceeds_region() {
        for (width, height) in [(1, 1), (1, 5000), (5000, 1), (367, 277), (4096, 2160)] {
            let (fitted_width, fitted_height) =
                PreviewBitmap::fit_dimensions(width, height, 366, 276);
            assert!(fitted_width >= 1 && fitted_width <= 366);
            assert!(fitted_height >= 1 && fitted_height <= 276);
        }
    }

    #[test]
    fn test_fit_dimensions_preserves_aspect_ratio_within_rounding() {
        for (width, height) in [(200, 100), (640, 480), (1920, 1080), (123, 457)] {
            let (fitted_width, fitted_height) =
                PreviewBitmap::fit_dimensions(width, height, 366, 276);
            let source_ratio = width as f64 / height as f64;
            let fitted_ratio = fitted_width as f64 / fitted_height as f64;
            let tolerance = source_ratio / fitted_height.min(fitted_width) as f64 + 1e-9;
            assert!(
                (source_ratio - fitted_ratio).abs() <= tolerance,
                "{}x{} became {}x{}",
                width,
                height,
                fitted_width,
                fitted_height
            );
        }
    }

    #[test]
    fn test_fit_dimensions_handles_zero_sized_source() {
        assert_eq!(PreviewBitmap::fit_dimensions(0, 10, 366, 276), (1, 1));
    }

    #[test]
    fn test_build_from_image_produces_two_to_one_preview() {
        let preview = PreviewBitmap::build_from_image(&solid_image(200, 100), 366, 276);

        assert_eq!((preview.width, preview.height), (366, 183));
        assert!((preview.aspect_ratio() - 2.0).abs() < 0.02);
    }

    #[test]
    fn test_build_from_image_accepts_non_rgba_source() {
        let rgb = DynamicImage::ImageRgb8(image::RgbImage::new(50, 50));

        let preview = PreviewBitmap::build_from_image(&rgb, 366, 276);

        assert_eq!((preview.width, preview.height), (276, 276));
    }
}
