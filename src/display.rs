//! Debug visualization seam.
//!
//! The core never owns a window or any global display state. It prepares a
//! flat byte buffer (one byte per channel per pixel, row-major) plus the
//! metadata a front end needs, and hands both to an injected [`Viewer`].
//! [`PngViewer`] is a file-backed front end that snapshots every frame as
//! a PNG; interactive front ends plug in through the same trait.

use log::warn;
use std::path::PathBuf;

use crate::image::{ComplexImage, ImageView, IntImage, RgbImage};

/// A prepared frame: `channels` is 1 for grayscale, 3 for RGB. `origin`
/// marks where the domain origin falls in storage coordinates.
pub struct DisplayFrame {
    pub pixels: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub channels: usize,
    pub origin: (i32, i32),
}

/// Capability for showing prepared frames; injected by the caller.
pub trait Viewer {
    fn show(&mut self, frame: &DisplayFrame, title: &str) -> Result<(), String>;
}

/// Byte buffer for a grayscale image. Values outside `[0,255]` become 0;
/// when the declared range is `[0, max_range]` the values are rescaled so
/// `max_range` maps to white.
pub fn int_display_buffer(image: &IntImage) -> Vec<u8> {
    let (min_val, max_val) = image.min_max();
    if min_val < 0 || max_val > 255 {
        warn!("grey values are clamped to [0,255] for display");
    }
    let mut buffer: Vec<u8> = image
        .rows()
        .flatten()
        .map(|&v| if (0..=255).contains(&v) { v as u8 } else { 0 })
        .collect();
    let (lo, hi) = image.dynamic_range();
    if lo == 0 && hi > 0 {
        let scale = 255.0 / hi as f64;
        for b in buffer.iter_mut() {
            *b = (*b as f64 * scale + 0.5) as u8;
        }
    }
    buffer
}

/// Interleaved byte buffer for an RGB image; out-of-range channels
/// become 0.
pub fn rgb_display_buffer(image: &RgbImage) -> Vec<u8> {
    image
        .rows()
        .flatten()
        .flat_map(|p| {
            p.iter()
                .map(|&c| if (0..=255).contains(&c) { c as u8 } else { 0 })
        })
        .collect()
}

/// Byte buffer for the real parts of a complex image, rescaled so the
/// largest real value (the DC term, for a spectrum) maps to white.
/// Out-of-range results saturate to 255 rather than dropping to black.
pub fn complex_display_buffer(image: &ComplexImage) -> Vec<u8> {
    let (_, max) = image.real_min_max();
    let scale = 255.0 / max;
    image
        .rows()
        .flatten()
        .map(|v| {
            let g = (v.re * scale + 0.5) as i64;
            if (0..=255).contains(&g) {
                g as u8
            } else {
                255
            }
        })
        .collect()
}

/// Show a grayscale image through `viewer`.
pub fn display_int(image: &IntImage, viewer: &mut dyn Viewer, title: &str) -> Result<(), String> {
    let domain = image.domain();
    let frame = DisplayFrame {
        pixels: int_display_buffer(image),
        width: domain.width() as usize,
        height: domain.height() as usize,
        channels: 1,
        origin: (-domain.min_x, -domain.min_y),
    };
    viewer.show(&frame, title)
}

/// Show a colour image through `viewer`.
pub fn display_rgb(image: &RgbImage, viewer: &mut dyn Viewer, title: &str) -> Result<(), String> {
    let domain = image.domain();
    let frame = DisplayFrame {
        pixels: rgb_display_buffer(image),
        width: domain.width() as usize,
        height: domain.height() as usize,
        channels: 3,
        origin: (-domain.min_x, -domain.min_y),
    };
    viewer.show(&frame, title)
}

/// Show the real parts of a complex image through `viewer`.
pub fn display_complex(
    image: &ComplexImage,
    viewer: &mut dyn Viewer,
    title: &str,
) -> Result<(), String> {
    let domain = image.domain();
    let frame = DisplayFrame {
        pixels: complex_display_buffer(image),
        width: domain.width() as usize,
        height: domain.height() as usize,
        channels: 1,
        origin: (-domain.min_x, -domain.min_y),
    };
    viewer.show(&frame, title)
}

/// File-backed viewer: each shown frame becomes `<dir>/<n>-<title>.png`.
pub struct PngViewer {
    dir: PathBuf,
    counter: usize,
}

impl PngViewer {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        PngViewer {
            dir: dir.into(),
            counter: 0,
        }
    }
}

impl Viewer for PngViewer {
    fn show(&mut self, frame: &DisplayFrame, title: &str) -> Result<(), String> {
        std::fs::create_dir_all(&self.dir)
            .map_err(|e| format!("failed to create {}: {e}", self.dir.display()))?;
        let safe: String = title
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect();
        let path = self.dir.join(format!("{:03}-{safe}.png", self.counter));
        self.counter += 1;
        let (w, h) = (frame.width as u32, frame.height as u32);
        let saved = match frame.channels {
            1 => image::GrayImage::from_raw(w, h, frame.pixels.clone())
                .ok_or_else(|| "display buffer does not match its dimensions".to_string())?
                .save(&path),
            3 => image::RgbImage::from_raw(w, h, frame.pixels.clone())
                .ok_or_else(|| "display buffer does not match its dimensions".to_string())?
                .save(&path),
            n => return Err(format!("unsupported channel count {n}")),
        };
        saved.map_err(|e| format!("failed to save {}: {e}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::{complex_display_buffer, display_int, int_display_buffer, DisplayFrame, Viewer};
    use crate::image::{ComplexImage, IntImage};
    use num_complex::Complex64;

    struct Capture {
        frames: Vec<(usize, usize, (i32, i32), String)>,
    }

    impl Viewer for Capture {
        fn show(&mut self, frame: &DisplayFrame, title: &str) -> Result<(), String> {
            self.frames
                .push((frame.width, frame.height, frame.origin, title.to_string()));
            Ok(())
        }
    }

    #[test]
    fn out_of_range_values_display_as_black() {
        let mut img = IntImage::unbounded(2, 1);
        img.set(0, 0, -3);
        img.set(1, 0, 300);
        assert_eq!(int_display_buffer(&img), vec![0, 0]);
    }

    #[test]
    fn narrow_ranges_are_stretched_to_white() {
        let mut img = IntImage::new(2, 1, 0, 15);
        img.set(0, 0, 15);
        img.set(1, 0, 3);
        let buf = int_display_buffer(&img);
        assert_eq!(buf[0], 255);
        assert_eq!(buf[1], (3.0 * 255.0 / 15.0 + 0.5) as u8);
    }

    #[test]
    fn complex_buffer_scales_by_the_largest_real_part() {
        let mut img = ComplexImage::new(2, 1);
        img.set(0, 0, Complex64::new(4.0, 0.0));
        img.set(1, 0, Complex64::new(2.0, 9.0));
        assert_eq!(complex_display_buffer(&img), vec![255, 128]);
    }

    #[test]
    fn the_viewer_receives_the_origin_marker() {
        let img = IntImage::with_bounds(-2, 5, -3, 4, 0, 255);
        let mut viewer = Capture { frames: Vec::new() };
        display_int(&img, &mut viewer, "probe").unwrap();
        let (w, h, origin, title) = viewer.frames.pop().unwrap();
        assert_eq!((w, h), (8, 8));
        assert_eq!(origin, (2, 3));
        assert_eq!(title, "probe");
    }
}
