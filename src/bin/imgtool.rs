//! Apply a single image operation described by a JSON config file.
//!
//! ```sh
//! imgtool config.json
//! ```
//!
//! ```json
//! {
//!   "input": "in.pgm",
//!   "output": "out.pgm",
//!   "histogram_json": "hist.json",
//!   "operation": { "kind": "dilate", "width": 5, "height": 5 }
//! }
//! ```

use pixelgrid::distance::{distance_transform, Metric};
use pixelgrid::image::io::{load_int_image, save_int_image, write_json_file};
use pixelgrid::spectral::{fft2d, fft_shift};
use pixelgrid::{morphology, Histogram, IntImage};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct ToolConfig {
    input: PathBuf,
    output: PathBuf,
    /// Optional dump of the input image's histogram.
    #[serde(default)]
    histogram_json: Option<PathBuf>,
    operation: Operation,
}

#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Operation {
    /// Binarize: values below `level` become 0, the rest 255.
    Threshold { level: i32 },
    Distance { metric: Metric, foreground: i32 },
    Dilate { width: usize, height: usize },
    Erode { width: usize, height: usize },
    /// Centred power spectrum, rescaled to [0,255].
    Spectrum,
}

fn load_config(path: &Path) -> Result<ToolConfig, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read config {}: {e}", path.display()))?;
    serde_json::from_str(&data)
        .map_err(|e| format!("failed to parse config {}: {e}", path.display()))
}

fn threshold(image: &IntImage, level: i32) -> IntImage {
    let mut out = IntImage::with_domain(image.domain(), 0, 255);
    for y in 0..image.height() {
        for x in 0..image.width() {
            let v = if image.get_index(x, y) < level { 0 } else { 255 };
            out.set_index(x, y, v);
        }
    }
    out
}

fn spectrum(image: &IntImage) -> IntImage {
    let mut ft = fft2d(image);
    fft_shift(&mut ft);
    let mut magnitude = vec![0.0f64; image.width() as usize * image.height() as usize];
    let mut peak = 0.0f64;
    for y in 0..image.height() {
        for x in 0..image.width() {
            let m = ft.get_index(x, y).norm();
            magnitude[(y * image.width() + x) as usize] = m;
            peak = peak.max(m);
        }
    }
    let mut out = IntImage::with_domain(image.domain(), 0, 255);
    if peak > 0.0 {
        for y in 0..image.height() {
            for x in 0..image.width() {
                let m = magnitude[(y * image.width() + x) as usize];
                out.set_index(x, y, (m / peak * 255.0 + 0.5) as i32);
            }
        }
    }
    out
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = load_config(Path::new(&config_path))?;

    let image = load_int_image(&config.input)?;
    if let Some(hist_path) = &config.histogram_json {
        write_json_file(hist_path, &Histogram::from_image(&image))?;
    }

    let result = match config.operation {
        Operation::Threshold { level } => threshold(&image, level),
        Operation::Distance { metric, foreground } => {
            distance_transform(&image, metric, foreground)
        }
        Operation::Dilate { width, height } => morphology::dilate(&image, width, height),
        Operation::Erode { width, height } => morphology::erode(&image, width, height),
        Operation::Spectrum => spectrum(&image),
    };
    save_int_image(&result, &config.output)
}

fn usage() -> String {
    "usage: imgtool <config.json>".to_string()
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}
