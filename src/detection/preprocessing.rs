use image::{DynamicImage, GrayImage, Luma};

/// Convert image to a single luminance channel
pub fn to_grayscale(img: &DynamicImage) -> GrayImage {
    img.to_luma8()
}

/// Binarize so that dark strokes (mailbox outlines) become foreground.
/// Luma values at or below the threshold map to white (255), everything
/// else to black background.
pub fn binarize(img: &GrayImage, threshold: u8) -> GrayImage {
    let mut out = GrayImage::new(img.width(), img.height());
    for (x, y, pixel) in img.enumerate_pixels() {
        let value = if pixel[0] <= threshold { 255u8 } else { 0u8 };
        out.put_pixel(x, y, Luma([value]));
    }
    out
}
