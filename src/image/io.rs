//! File I/O for images and JSON.
//!
//! - `load_int_image` / `load_rgb_image`: read a netpbm (or any other
//!   format the `image` crate understands) file into an owned raster whose
//!   declared dynamic range matches the sample depth.
//! - `save_int_image` / `save_rgb_image`: write binary PGM/PBM/PPM chosen
//!   by file extension, clamping out-of-range values with a logged
//!   warning; `*_ascii` variants emit the plain-text encodings (P2/P1/P3).
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! Loaded images always use a 0-based domain; domain bookkeeping is a
//! purely in-memory concern.

use image::codecs::pnm::{PnmEncoder, PnmSubtype, SampleEncoding};
use image::{DynamicImage, ExtendedColorType, ImageEncoder};
use log::warn;
use serde::Serialize;
use std::fs;
use std::io::BufWriter;
use std::path::Path;

use super::{ImageView, IntImage, RgbImage};

/// Load a grayscale image; 16-bit sources keep their full depth.
pub fn load_int_image(path: &Path) -> Result<IntImage, String> {
    let img = image::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    match img {
        DynamicImage::ImageLuma16(buf) => {
            let (w, h) = (buf.width() as i32, buf.height() as i32);
            let mut out = IntImage::new(w, h, 0, 65535);
            for (i, p) in buf.into_raw().into_iter().enumerate() {
                out.set_index(i as i32 % w, i as i32 / w, p as i32);
            }
            Ok(out)
        }
        other => {
            let buf = other.into_luma8();
            let (w, h) = (buf.width() as i32, buf.height() as i32);
            let mut out = IntImage::new(w, h, 0, 255);
            for (i, p) in buf.into_raw().into_iter().enumerate() {
                out.set_index(i as i32 % w, i as i32 / w, p as i32);
            }
            Ok(out)
        }
    }
}

/// Load a colour image; 16-bit sources keep their full depth.
pub fn load_rgb_image(path: &Path) -> Result<RgbImage, String> {
    let img = image::open(path).map_err(|e| format!("failed to open {}: {e}", path.display()))?;
    match img {
        DynamicImage::ImageRgb16(buf) => {
            let (w, h) = (buf.width() as i32, buf.height() as i32);
            let mut out = RgbImage::new(w, h, 0, 65535);
            for (i, p) in buf.pixels().enumerate() {
                let [r, g, b] = p.0;
                out.set_index(i as i32 % w, i as i32 / w, [r as i32, g as i32, b as i32]);
            }
            Ok(out)
        }
        other => {
            let buf = other.into_rgb8();
            let (w, h) = (buf.width() as i32, buf.height() as i32);
            let mut out = RgbImage::new(w, h, 0, 255);
            for (i, p) in buf.pixels().enumerate() {
                let [r, g, b] = p.0;
                out.set_index(i as i32 % w, i as i32 / w, [r as i32, g as i32, b as i32]);
            }
            Ok(out)
        }
    }
}

/// Save as binary PGM or PBM depending on the file extension.
pub fn save_int_image(image: &IntImage, path: &Path) -> Result<(), String> {
    match extension(path)? {
        "pgm" => write_pgm(image, path, SampleEncoding::Binary),
        "pbm" => write_pbm(image, path, SampleEncoding::Binary),
        other => Err(format!(
            "cannot save '{}': expected a pgm or pbm extension, got '{other}'",
            path.display()
        )),
    }
}

/// Save as plain-text PGM or PBM depending on the file extension.
pub fn save_int_image_ascii(image: &IntImage, path: &Path) -> Result<(), String> {
    match extension(path)? {
        "pgm" => write_pgm(image, path, SampleEncoding::Ascii),
        "pbm" => write_pbm(image, path, SampleEncoding::Ascii),
        other => Err(format!(
            "cannot save '{}': expected a pgm or pbm extension, got '{other}'",
            path.display()
        )),
    }
}

/// Save as binary PPM.
pub fn save_rgb_image(image: &RgbImage, path: &Path) -> Result<(), String> {
    match extension(path)? {
        "ppm" => write_ppm(image, path, SampleEncoding::Binary),
        other => Err(format!(
            "cannot save '{}': expected a ppm extension, got '{other}'",
            path.display()
        )),
    }
}

/// Save as plain-text PPM.
pub fn save_rgb_image_ascii(image: &RgbImage, path: &Path) -> Result<(), String> {
    match extension(path)? {
        "ppm" => write_ppm(image, path, SampleEncoding::Ascii),
        other => Err(format!(
            "cannot save '{}': expected a ppm extension, got '{other}'",
            path.display()
        )),
    }
}

fn write_pgm(image: &IntImage, path: &Path, encoding: SampleEncoding) -> Result<(), String> {
    let (min_val, max_val) = image.min_max();
    if min_val < 0 || max_val > 65535 {
        warn!(
            "range of image {} is [{min_val},{max_val}]; saved values are clamped to [0,65535]",
            path.display()
        );
    }
    let encoder = pnm_encoder(path, PnmSubtype::Graymap(encoding))?;
    let w = image.domain().width() as u32;
    let h = image.domain().height() as u32;
    let result = if max_val.clamp(0, 65535) > 255 {
        let samples: Vec<u8> = image
            .rows()
            .flatten()
            .flat_map(|&v| (v.clamp(0, 65535) as u16).to_ne_bytes())
            .collect();
        encoder.write_image(&samples, w, h, ExtendedColorType::L16)
    } else {
        let samples: Vec<u8> = image
            .rows()
            .flatten()
            .map(|&v| v.clamp(0, 255) as u8)
            .collect();
        encoder.write_image(&samples, w, h, ExtendedColorType::L8)
    };
    result.map_err(|e| format!("failed to save {}: {e}", path.display()))
}

fn write_pbm(image: &IntImage, path: &Path, encoding: SampleEncoding) -> Result<(), String> {
    let (min_val, max_val) = image.min_max();
    if min_val < 0 || max_val > 1 {
        warn!(
            "range of image {} is [{min_val},{max_val}]; saved values are clamped to [0,1]",
            path.display()
        );
    }
    let encoder = pnm_encoder(path, PnmSubtype::Bitmap(encoding))?;
    let w = image.domain().width() as u32;
    let h = image.domain().height() as u32;
    let samples: Vec<u8> = image
        .rows()
        .flatten()
        .map(|&v| if v > 0 { 255u8 } else { 0u8 })
        .collect();
    encoder
        .write_image(&samples, w, h, ExtendedColorType::L8)
        .map_err(|e| format!("failed to save {}: {e}", path.display()))
}

fn write_ppm(image: &RgbImage, path: &Path, encoding: SampleEncoding) -> Result<(), String> {
    let (min_val, max_val) = image.min_max();
    if min_val < 0 || max_val > 65535 {
        warn!(
            "range of image {} is [{min_val},{max_val}]; saved values are clamped to [0,65535]",
            path.display()
        );
    }
    let encoder = pnm_encoder(path, PnmSubtype::Pixmap(encoding))?;
    let w = image.domain().width() as u32;
    let h = image.domain().height() as u32;
    let result = if max_val.clamp(0, 65535) > 255 {
        let samples: Vec<u8> = image
            .rows()
            .flatten()
            .flat_map(|p| p.iter().flat_map(|&c| (c.clamp(0, 65535) as u16).to_ne_bytes()))
            .collect();
        encoder.write_image(&samples, w, h, ExtendedColorType::Rgb16)
    } else {
        let samples: Vec<u8> = image
            .rows()
            .flatten()
            .flat_map(|p| p.iter().map(|&c| c.clamp(0, 255) as u8))
            .collect();
        encoder.write_image(&samples, w, h, ExtendedColorType::Rgb8)
    };
    result.map_err(|e| format!("failed to save {}: {e}", path.display()))
}

fn pnm_encoder(path: &Path, subtype: PnmSubtype) -> Result<PnmEncoder<BufWriter<fs::File>>, String> {
    ensure_parent_dir(path)?;
    let file =
        fs::File::create(path).map_err(|e| format!("failed to create {}: {e}", path.display()))?;
    Ok(PnmEncoder::new(BufWriter::new(file)).with_subtype(subtype))
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), String> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| format!("failed to serialize JSON for {}: {e}", path.display()))?;
    fs::write(path, json).map_err(|e| format!("failed to write JSON {}: {e}", path.display()))
}

fn extension(path: &Path) -> Result<&str, String> {
    path.extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| format!("filename '{}' has no extension", path.display()))
}

fn ensure_parent_dir(path: &Path) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("failed to create {}: {e}", parent.display()))?;
        }
    }
    Ok(())
}
