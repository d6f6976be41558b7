//! Exact Euclidean distance transform in linear time.
//!
//! The algorithm of Meijster, Roerdink and Hesselink ("A general algorithm
//! for computing distance transforms in linear time", Mathematical
//! Morphology and its Applications to Image and Signal Processing, Kluwer,
//! 2000, pp. 331-340). Two separable phases:
//!
//! 1. A vertical pass computes, per column, the 1D distance to the nearest
//!    background pixel along that column (a chamfer pass restricted to the
//!    single vertical neighbour), then squares it. Squares that would reach
//!    `height^2` are clamped to the sentinel, which is safe because any
//!    in-range candidate beats them in phase 2.
//! 2. Per row, the lower envelope of the parabolas
//!    `f(x) = (x - s)^2 + vdt(s)` over all apexes `s` is built left to
//!    right on a stack of `(apex, crossover)` pairs, then read off right to
//!    left. The integer crossover between the parabolas at `s` and `x` is
//!    `1 + (x^2 - s^2 + vdt(x) - vdt(s)) / (2 (x - s))`.
//!
//! The crossover formula and both traversal directions are load-bearing;
//! small sign or ordering changes still produce plausible-looking output
//! that is simply wrong.
//!
//! The computation runs in an origin-anchored coordinate frame and the
//! result is translated back to the input domain at the end.

use log::debug;

use crate::distance::chamfer::{mask_distance_transform, MASK_VERTICAL};
use crate::image::IntImage;

pub(crate) fn euclidean_transform(
    take_square_root: bool,
    foreground: i32,
    image: &IntImage,
) -> IntImage {
    let domain = image.domain();
    let width = domain.width();
    let height = domain.height();
    // anything larger than the largest possible squared distance
    let infinity = width * width + height * height;
    debug!("euclidean transform over {width}x{height}, rooted={take_square_root}");

    // vertical phase: per-column 1D distances, then squared
    let vertical = mask_distance_transform(&MASK_VERTICAL, foreground, image);
    let mut vdt = IntImage::new(width, height, 0, infinity);
    for y in 0..height {
        for x in 0..width {
            let v = vertical.get_index(x, y);
            vdt.set_index(x, y, if v < height { v * v } else { infinity });
        }
    }

    // horizontal phase: lower envelope of parabolas per row
    let mut dt = IntImage::new(width, height, 0, infinity);
    let mut apex = vec![0i32; width as usize];
    let mut cross = vec![0i32; width as usize];
    for y in 0..height {
        // left-to-right scan builds the envelope
        let mut q: i32 = 0;
        apex[0] = 0;
        cross[0] = 0;
        for x in 1..width {
            let vxy = vdt.get_index(x, y);
            while q >= 0 {
                let s = apex[q as usize];
                let t = cross[q as usize];
                let vs = vdt.get_index(s, y);
                if (t - s) * (t - s) + vs > (t - x) * (t - x) + vxy {
                    q -= 1;
                } else {
                    break;
                }
            }
            if q < 0 {
                q = 0;
                apex[0] = x;
            } else {
                let s = apex[q as usize];
                let vs = vdt.get_index(s, y);
                let w = 1 + (x * x - s * s + vxy - vs) / (2 * (x - s));
                if w < width {
                    q += 1;
                    apex[q as usize] = x;
                    cross[q as usize] = w;
                }
            }
        }
        // right-to-left scan reads distances off the envelope
        let mut vs = vdt.get_index(apex[q as usize], y);
        for x in (0..width).rev() {
            let s = apex[q as usize];
            let squared = (x - s) * (x - s) + vs;
            if take_square_root {
                dt.set_index(x, y, (0.5 + f64::from(squared).sqrt()) as i32);
            } else {
                dt.set_index(x, y, squared);
            }
            if x == cross[q as usize] && q > 0 {
                q -= 1;
                vs = vdt.get_index(apex[q as usize], y);
            }
        }
    }

    dt.translate(domain.min_x, domain.min_y);
    dt
}
