// downscale/src/processors/resizer.rs
use crate::core::{ComputedSize, ResizeSpec};
use image::{imageops::FilterType, DynamicImage, GenericImageView};

pub struct Resizer {
    filter: FilterType,
}

impl Resizer {
    pub fn new() -> Self {
        Self {
            filter: FilterType::Lanczos3,
        }
    }

    /// Compute the output dimensions for one image, preserving aspect ratio.
    ///
    /// Scaled dimensions are truncated toward zero, not rounded. When both
    /// targets are given the smaller ratio wins, so the result fits within
    /// the target box. Returns `None` when the spec carries no dimensions.
    pub fn compute_size(
        &self,
        orig_width: u32,
        orig_height: u32,
        spec: ResizeSpec,
    ) -> Option<ComputedSize> {
        match (spec.width, spec.height) {
            (Some(width), None) => {
                let ratio = width as f64 / orig_width as f64;
                Some(ComputedSize {
                    width,
                    height: (orig_height as f64 * ratio) as u32,
                })
            }
            (None, Some(height)) => {
                let ratio = height as f64 / orig_height as f64;
                Some(ComputedSize {
                    width: (orig_width as f64 * ratio) as u32,
                    height,
                })
            }
            (Some(width), Some(height)) => {
                let width_ratio = width as f64 / orig_width as f64;
                let height_ratio = height as f64 / orig_height as f64;
                let ratio = width_ratio.min(height_ratio);
                Some(ComputedSize {
                    width: (orig_width as f64 * ratio) as u32,
                    height: (orig_height as f64 * ratio) as u32,
                })
            }
            (None, None) => None,
        }
    }

    pub fn resample(&self, image: &DynamicImage, size: ComputedSize) -> DynamicImage {
        if size.width == image.width() && size.height == image.height() {
            log::debug!("Image dimensions unchanged, skipping resample");
            return image.clone();
        }

        log::debug!(
            "Resampling image from {}x{} to {}",
            image.width(),
            image.height(),
            size
        );

        image.resize_exact(size.width, size.height, self.filter)
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn size(width: u32, height: u32) -> ComputedSize {
        ComputedSize { width, height }
    }

    #[test]
    fn width_only_scales_height_by_ratio() {
        let resizer = Resizer::new();
        let spec = ResizeSpec::new(Some(800), None);
        assert_eq!(
            resizer.compute_size(1920, 1080, spec),
            Some(size(800, 450))
        );
    }

    #[test]
    fn height_only_scales_width_by_ratio() {
        let resizer = Resizer::new();
        let spec = ResizeSpec::new(None, Some(450));
        assert_eq!(
            resizer.compute_size(1920, 1080, spec),
            Some(size(800, 450))
        );
    }

    #[test]
    fn both_targets_use_smaller_ratio() {
        let resizer = Resizer::new();
        let spec = ResizeSpec::new(Some(300), Some(300));
        assert_eq!(resizer.compute_size(1000, 500, spec), Some(size(300, 150)));
    }

    #[test]
    fn both_targets_fit_within_box() {
        let resizer = Resizer::new();
        for (orig_w, orig_h) in [(400u32, 300u32), (800, 150), (100, 600), (1600, 75)] {
            let spec = ResizeSpec::new(Some(200), Some(150));
            let computed = resizer.compute_size(orig_w, orig_h, spec).unwrap();
            assert!(computed.width <= 200, "{orig_w}x{orig_h} -> {computed}");
            assert!(computed.height <= 150, "{orig_w}x{orig_h} -> {computed}");
            // one side is the binding constraint
            assert!(computed.width == 200 || computed.height == 150);
        }
    }

    #[test]
    fn scaled_dimension_is_truncated_not_rounded() {
        let resizer = Resizer::new();
        // 2 * (2/3) = 1.333.. -> 1, and 0.5 fractions never round up
        let spec = ResizeSpec::new(Some(2), None);
        assert_eq!(resizer.compute_size(3, 2, spec), Some(size(2, 1)));

        // 333 * 0.5 = 166.5 -> 166 under truncation, 167 under rounding
        let spec = ResizeSpec::new(Some(500), None);
        assert_eq!(resizer.compute_size(1000, 333, spec), Some(size(500, 166)));
    }

    #[test]
    fn no_dimensions_yields_no_size() {
        let resizer = Resizer::new();
        assert_eq!(resizer.compute_size(1920, 1080, ResizeSpec::default()), None);
    }

    #[test]
    fn extreme_aspect_ratio_can_truncate_to_zero() {
        let resizer = Resizer::new();
        let spec = ResizeSpec::new(Some(400), None);
        // 1 * 0.4 = 0.4 -> 0; the processor turns this into a per-image error
        assert_eq!(resizer.compute_size(1000, 1, spec), Some(size(400, 0)));
    }
}
