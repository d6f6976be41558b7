//! Synthetic inputs shared by the integration tests.

use pixelgrid::IntImage;

/// All-background image with a single `foreground` pixel at `(x, y)`.
pub fn point_image(width: i32, height: i32, x: i32, y: i32, foreground: i32) -> IntImage {
    let mut img = IntImage::new(width, height, 0, foreground.max(255));
    img.set(x, y, foreground);
    img
}

/// All-foreground image with a single background (0) pixel at `(x, y)`.
pub fn hole_image(width: i32, height: i32, x: i32, y: i32, foreground: i32) -> IntImage {
    let mut img = IntImage::new(width, height, 0, foreground.max(255));
    img.fill(foreground);
    img.set(x, y, 0);
    img
}

/// Foreground plate of the given size surrounded by a one-pixel background
/// frame on all sides.
pub fn framed_plate(inner_w: i32, inner_h: i32, foreground: i32) -> IntImage {
    let mut img = IntImage::new(inner_w + 2, inner_h + 2, 0, foreground.max(255));
    for y in 1..=inner_h {
        for x in 1..=inner_w {
            img.set(x, y, foreground);
        }
    }
    img
}

/// Deterministic value pattern covering the whole dynamic range unevenly.
pub fn textured(width: i32, height: i32) -> IntImage {
    let mut img = IntImage::new(width, height, 0, 255);
    for y in 0..height {
        for x in 0..width {
            img.set(x, y, (x * 89 + y * 151 + (x * y) % 37) % 256);
        }
    }
    img
}
