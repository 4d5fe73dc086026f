use std::sync::Arc;

use image::{Rgb, RgbImage};

use crate::domain::{PreprocessStrategy, PreprocessVariant};

const CONTRAST_PIVOT: f32 = 128.0;
const CONTRAST_GAIN: f32 = 1.5;
const BRIGHTNESS_LIFT: f32 = 20.0;

const LUMA_RED: f32 = 0.299;
const LUMA_GREEN: f32 = 0.587;
const LUMA_BLUE: f32 = 0.114;

/// Derives one variant per strategy, in evaluation order. The identity
/// variant shares the source bitmap; the others allocate new ones.
pub fn derive_variants(source: Arc<RgbImage>) -> Vec<PreprocessVariant> {
    PreprocessStrategy::EVALUATION_ORDER
        .iter()
        .map(|&strategy| PreprocessVariant {
            strategy,
            bitmap: match strategy {
                PreprocessStrategy::Identity => Arc::clone(&source),
                PreprocessStrategy::Enhanced => Arc::new(enhance_contrast(&source)),
                PreprocessStrategy::Grayscale => Arc::new(to_grayscale(&source)),
            },
        })
        .collect()
}

/// Stretches each channel around mid-gray by 1.5x, then lifts it by 20.
pub fn enhance_contrast(source: &RgbImage) -> RgbImage {
    let mut target = RgbImage::new(source.width(), source.height());

    for (x, y, pixel) in source.enumerate_pixels() {
        let Rgb([r, g, b]) = *pixel;
        target.put_pixel(x, y, Rgb([stretch(r), stretch(g), stretch(b)]));
    }

    target
}

/// Rec. 601 luma replicated across all three channels.
pub fn to_grayscale(source: &RgbImage) -> RgbImage {
    let mut target = RgbImage::new(source.width(), source.height());

    for (x, y, pixel) in source.enumerate_pixels() {
        let Rgb([r, g, b]) = *pixel;
        let luma = (LUMA_RED * f32::from(r) + LUMA_GREEN * f32::from(g) + LUMA_BLUE * f32::from(b))
            as u8;
        target.put_pixel(x, y, Rgb([luma, luma, luma]));
    }

    target
}

fn stretch(channel: u8) -> u8 {
    let adjusted =
        ((f32::from(channel) - CONTRAST_PIVOT) * CONTRAST_GAIN + CONTRAST_PIVOT + BRIGHTNESS_LIFT)
            as i32;
    adjusted.clamp(0, 255) as u8
}
