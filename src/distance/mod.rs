//! Distance transforms of labelled images.
//!
//! Input is an integer image together with the value that marks
//! foreground. Output is an image of the same domain where background
//! pixels hold 0 and every foreground pixel holds its distance to the
//! nearest background pixel under the chosen metric.

mod chamfer;
mod euclidean;

use log::debug;
use serde::{Deserialize, Serialize};

pub use self::chamfer::{chamfer4, chamfer8};

use crate::image::IntImage;

/// Distance metric selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Exact squared Euclidean distance.
    SquaredEuclidean,
    /// Exact Euclidean distance, rounded to the nearest integer.
    Euclidean,
    /// City-block distance (4-neighbour chamfer).
    Manhattan,
    /// Chessboard distance (8-neighbour chamfer).
    Chessboard,
}

/// Distance transform of `image` under `metric`.
pub fn distance_transform(image: &IntImage, metric: Metric, foreground: i32) -> IntImage {
    debug!("distance transform: metric={metric:?}, foreground={foreground}");
    match metric {
        Metric::Manhattan => chamfer::chamfer4(foreground, image),
        Metric::Chessboard => chamfer::chamfer8(foreground, image),
        Metric::Euclidean => euclidean::euclidean_transform(true, foreground, image),
        Metric::SquaredEuclidean => euclidean::euclidean_transform(false, foreground, image),
    }
}
