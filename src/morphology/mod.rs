//! Grayscale morphology with rectangular structuring elements.
//!
//! A rectangular kernel separates into a horizontal and a vertical run of
//! the same extremum operator, so dilation and erosion reduce to two 1D
//! sliding-window passes: across every row, then down every column of the
//! materialized row result. The 1D pass keeps a double-ended queue of
//! candidate indices whose values decrease (for a max window) from front
//! to back; each step costs amortized constant time, making a whole pass
//! linear in the number of pixels.
//!
//! Near the image border the window simply shrinks; no padding value takes
//! part in the extremum. That is the intended edge policy, not an
//! approximation.

mod quack;

use log::debug;

use self::quack::Quack;
use crate::image::IntImage;

/// Sliding-window extremum over a strided 1D sequence.
///
/// Element `i` of the sequence lives at `src[i * step + start]`, which lets
/// the same routine walk rows (`step = 1`) and columns (`step = width`)
/// without transposing the buffer. The window at position `i` covers the
/// trailing indices `(i - window, i]`. With `select_max` the window maximum
/// is taken, otherwise the minimum; the `<=` in the eviction comparison
/// resolves ties toward the most recent index, which keeps the output
/// deterministic and must not be changed.
fn sliding_extremum(
    src: &[i32],
    out: &mut [i32],
    n: usize,
    window: usize,
    select_max: bool,
    step: usize,
    start: usize,
    workspace: &mut [usize],
) {
    let mut quack = Quack::new(&mut workspace[..window]);
    for i in 0..n {
        // drop candidates that slid out of the window
        while !quack.is_empty() && quack.peek_front() + window <= i {
            quack.pop_front();
        }
        // drop candidates dominated by the new element
        while !quack.is_empty()
            && (src[quack.peek_back() * step + start] <= src[i * step + start]) == select_max
        {
            quack.pop_back();
        }
        quack.push_back(i);
        out[i * step + start] = src[quack.peek_front() * step + start];
    }
}

fn dilate_erode(image: &IntImage, kernel_w: usize, kernel_h: usize, select_max: bool) -> IntImage {
    let domain = image.domain();
    let (lo, hi) = image.dynamic_range();
    let mut result = IntImage::with_domain(domain, lo, hi);
    let width = domain.width() as usize;
    let height = domain.height() as usize;
    debug!(
        "{} with {kernel_w}x{kernel_h} kernel over {width}x{height}",
        if select_max { "dilation" } else { "erosion" }
    );

    // one scratch allocation shared by every row and column pass
    let mut workspace = vec![0usize; kernel_w.max(kernel_h)];

    for row in 0..height {
        sliding_extremum(
            image.pixels(),
            result.pixels_mut(),
            width,
            kernel_w,
            select_max,
            1,
            row * width,
            &mut workspace,
        );
    }

    // the column pass reads the row result in a different order than it was
    // written, so it needs a materialized copy rather than aliasing it
    let rows_done = result.clone();
    for col in 0..width {
        sliding_extremum(
            rows_done.pixels(),
            result.pixels_mut(),
            height,
            kernel_h,
            select_max,
            width,
            col,
            &mut workspace,
        );
    }
    result
}

/// Grayscale dilation by a `kernel_w` x `kernel_h` rectangle.
pub fn dilate(image: &IntImage, kernel_w: usize, kernel_h: usize) -> IntImage {
    dilate_erode(image, kernel_w, kernel_h, true)
}

/// Grayscale erosion by a `kernel_w` x `kernel_h` rectangle.
pub fn erode(image: &IntImage, kernel_w: usize, kernel_h: usize) -> IntImage {
    dilate_erode(image, kernel_w, kernel_h, false)
}
