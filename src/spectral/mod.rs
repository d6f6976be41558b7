//! 2D Fourier transforms.
//!
//! The 2D transform is separable: the forward direction runs the 1D
//! transform down every column, then across every row of the intermediate;
//! the inverse mirrors this (rows first, then columns). Both image
//! dimensions must independently be powers of two, checked at the 2D entry
//! points. A single scratch buffer sized to `max(width, height)` is shared
//! by every row and column pass.

mod fft;

use log::debug;
use num_complex::Complex64;

use crate::domain::ImageDomain;
use crate::image::{ComplexImage, IntImage, RealImage};

fn is_power_of_two(n: i32) -> bool {
    n >= 1 && (n & (n - 1)) == 0
}

fn check_power_of_two_dims(domain: ImageDomain) {
    let (w, h) = (domain.width(), domain.height());
    assert!(
        is_power_of_two(w) && is_power_of_two(h),
        "image width and height must be powers of two (width={w}, height={h})"
    );
}

fn fft2d_complex(input: ComplexImage) -> ComplexImage {
    let domain = input.domain();
    let width = domain.width();
    let height = domain.height();
    debug!("fft2d over {width}x{height}");

    let mut ft = ComplexImage::with_domain(domain);
    let mut wsp = vec![Complex64::new(0.0, 0.0); width.max(height) as usize];

    // 1D transform down every column
    let mut column = vec![Complex64::new(0.0, 0.0); height as usize];
    for x in 0..width {
        for y in 0..height {
            column[y as usize] = input.get_index(x, y);
        }
        fft::forward(&mut column, &mut wsp);
        for y in 0..height {
            ft.set_index(x, y, column[y as usize]);
        }
    }

    // then across every row of the intermediate
    for y in 0..height as usize {
        fft::forward(ft.row_mut(y), &mut wsp);
    }
    ft
}

/// Forward 2D transform of an integer image.
pub fn fft2d(image: &IntImage) -> ComplexImage {
    check_power_of_two_dims(image.domain());
    let mut input = ComplexImage::with_domain(image.domain());
    for y in 0..image.height() {
        for x in 0..image.width() {
            input.set_index(x, y, Complex64::new(image.get_index(x, y) as f64, 0.0));
        }
    }
    fft2d_complex(input)
}

/// Forward 2D transform of a real image.
pub fn fft2d_real(image: &RealImage) -> ComplexImage {
    check_power_of_two_dims(image.domain());
    let mut input = ComplexImage::with_domain(image.domain());
    for y in 0..image.height() {
        for x in 0..image.width() {
            input.set_index(x, y, Complex64::new(image.get_index(x, y), 0.0));
        }
    }
    fft2d_complex(input)
}

fn ifft2d_complex(image: &ComplexImage) -> ComplexImage {
    let domain = image.domain();
    let width = domain.width();
    let height = domain.height();
    debug!("ifft2d over {width}x{height}");

    let mut wsp = vec![Complex64::new(0.0, 0.0); width.max(height) as usize];

    // inverse rows first
    let mut ift = image.clone();
    for y in 0..height as usize {
        fft::inverse(ift.row_mut(y), &mut wsp);
    }

    // then inverse columns
    let mut column = vec![Complex64::new(0.0, 0.0); height as usize];
    for x in 0..width {
        for y in 0..height {
            column[y as usize] = ift.get_index(x, y);
        }
        fft::inverse(&mut column, &mut wsp);
        for y in 0..height {
            ift.set_index(x, y, column[y as usize]);
        }
    }
    ift
}

/// Inverse 2D transform producing an integer image. The real part is
/// truncated toward zero; the imaginary part is discarded.
pub fn ifft2d(image: &ComplexImage) -> IntImage {
    check_power_of_two_dims(image.domain());
    let ift = ifft2d_complex(image);
    let mut out = IntImage::with_domain(image.domain(), i32::MIN, i32::MAX);
    for y in 0..out.height() {
        for x in 0..out.width() {
            out.set_index(x, y, ift.get_index(x, y).re as i32);
        }
    }
    out
}

/// Inverse 2D transform producing a real image from the real parts.
pub fn ifft2d_real(image: &ComplexImage) -> RealImage {
    check_power_of_two_dims(image.domain());
    let ift = ifft2d_complex(image);
    let mut out = RealImage::with_domain(image.domain(), f64::MIN, f64::MAX);
    for y in 0..out.height() {
        for x in 0..out.width() {
            out.set_index(x, y, ift.get_index(x, y).re);
        }
    }
    out
}

/// Swap quadrants 1 and 3, and 2 and 4, recentring the zero-frequency term.
pub fn fft_shift(image: &mut ComplexImage) {
    let w2 = image.width() / 2;
    let h2 = image.height() / 2;
    for y in 0..h2 {
        for x in 0..w2 {
            // top left with bottom right
            let a = image.get_index(x, y);
            let b = image.get_index(x + w2, y + h2);
            image.set_index(x, y, b);
            image.set_index(x + w2, y + h2, a);
            // top right with bottom left
            let a = image.get_index(x + w2, y);
            let b = image.get_index(x, y + h2);
            image.set_index(x + w2, y, b);
            image.set_index(x, y + h2, a);
        }
    }
}

/// The quadrant swap is its own inverse.
pub fn inverse_fft_shift(image: &mut ComplexImage) {
    fft_shift(image);
}

#[cfg(test)]
mod tests {
    use super::{fft2d, fft_shift, ifft2d, inverse_fft_shift};
    use crate::image::{ComplexImage, IntImage};
    use num_complex::Complex64;

    #[test]
    fn corner_impulse_round_trips_exactly() {
        let mut img = IntImage::new(8, 8, 0, 255);
        img.set(0, 0, 255);
        let spectrum = fft2d(&img);
        // the transform of a corner impulse is flat
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(spectrum.get(x, y), Complex64::new(255.0, 0.0));
            }
        }
        let back = ifft2d(&spectrum);
        for y in 0..8 {
            for x in 0..8 {
                assert_eq!(back.get(x, y), img.get(x, y), "at ({x},{y})");
            }
        }
    }

    #[test]
    fn shift_applied_twice_is_the_identity() {
        let mut img = ComplexImage::new(4, 4);
        for y in 0..4 {
            for x in 0..4 {
                img.set_index(x, y, Complex64::new((x + 10 * y) as f64, 0.0));
            }
        }
        let original = img.clone();
        fft_shift(&mut img);
        // quadrant 1 moved to quadrant 3
        assert_eq!(img.get_index(0, 0), original.get_index(2, 2));
        inverse_fft_shift(&mut img);
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(img.get_index(x, y), original.get_index(x, y));
            }
        }
    }

    #[test]
    #[should_panic(expected = "powers of two")]
    fn non_power_of_two_width_is_rejected() {
        let img = IntImage::new(6, 8, 0, 255);
        let _ = fft2d(&img);
    }

    #[test]
    #[should_panic(expected = "powers of two")]
    fn non_power_of_two_height_is_rejected_on_inverse() {
        let img = ComplexImage::new(8, 5);
        let _ = ifft2d(&img);
    }
}
