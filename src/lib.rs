#![doc = include_str!("../README.md")]

pub mod display;
pub mod distance;
pub mod domain;
pub mod histogram;
pub mod image;
pub mod morphology;
pub mod ops;
pub mod spectral;

// --- High-level re-exports -------------------------------------------------

pub use crate::distance::{distance_transform, Metric};
pub use crate::domain::ImageDomain;
pub use crate::histogram::Histogram;
pub use crate::image::{ComplexImage, IntImage, RealImage, RgbImage};
pub use crate::ops::PixelOp;

/// Small prelude for quick experiments.
///
/// ```
/// use pixelgrid::prelude::*;
///
/// let mut img = IntImage::new(8, 8, 0, 255);
/// img.set(3, 3, 255);
/// let dt = distance_transform(&img, Metric::Manhattan, 255);
/// assert_eq!(dt.get(3, 3), 1);
/// ```
pub mod prelude {
    pub use crate::display::Viewer;
    pub use crate::distance::{distance_transform, Metric};
    pub use crate::domain::ImageDomain;
    pub use crate::histogram::Histogram;
    pub use crate::image::{ComplexImage, IntImage, RealImage, RgbImage};
    pub use crate::ops::PixelOp;
}
