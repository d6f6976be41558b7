//! Element-wise image algebra and lookup-table application.
//!
//! `combine` requires both operands to share the exact same domain (all
//! four bounds equal) and produces a new image over that domain carrying
//! the dynamic range of the first operand. Results that fall outside that
//! range go through the usual write clamp.

use num_complex::Complex64;

use crate::domain::ImageDomain;
use crate::image::{ComplexImage, IntImage, RgbImage};

/// Binary operation applied pixel by pixel (channel by channel for RGB).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PixelOp {
    Max,
    Min,
    Add,
    Subtract,
    Multiply,
}

impl PixelOp {
    #[inline]
    pub fn apply(self, a: i32, b: i32) -> i32 {
        match self {
            PixelOp::Max => a.max(b),
            PixelOp::Min => a.min(b),
            PixelOp::Add => a + b,
            PixelOp::Subtract => a - b,
            PixelOp::Multiply => a * b,
        }
    }
}

fn assert_same_domain(a: ImageDomain, b: ImageDomain) {
    assert!(a == b, "images do not have the same domain");
}

/// Combine two images pixel by pixel.
pub fn combine(a: &IntImage, b: &IntImage, op: PixelOp) -> IntImage {
    assert_same_domain(a.domain(), b.domain());
    let mut out = IntImage::like(a);
    for y in 0..a.height() {
        for x in 0..a.width() {
            out.set_index(x, y, op.apply(a.get_index(x, y), b.get_index(x, y)));
        }
    }
    out
}

/// Combine two RGB images channel by channel.
pub fn combine_rgb(a: &RgbImage, b: &RgbImage, op: PixelOp) -> RgbImage {
    assert_same_domain(a.domain(), b.domain());
    let mut out = RgbImage::like(a);
    for y in 0..a.height() {
        for x in 0..a.width() {
            let pa = a.get_index(x, y);
            let pb = b.get_index(x, y);
            out.set_index(
                x,
                y,
                [
                    op.apply(pa[0], pb[0]),
                    op.apply(pa[1], pb[1]),
                    op.apply(pa[2], pb[2]),
                ],
            );
        }
    }
    out
}

/// Complex pixelwise product, the frequency-domain filtering primitive.
pub fn multiply_complex(a: &ComplexImage, b: &ComplexImage) -> ComplexImage {
    assert_same_domain(a.domain(), b.domain());
    let mut out = ComplexImage::like(a);
    for y in 0..a.height() {
        for x in 0..a.width() {
            let v: Complex64 = a.get_index(x, y) * b.get_index(x, y);
            out.set_index(x, y, v);
        }
    }
    out
}

/// Map every pixel through `table` positionally.
///
/// The image's declared range must satisfy `min_range >= 0` and
/// `max_range <= table.len()`; anything else is a contract violation.
pub fn apply_lut(image: &IntImage, table: &[i32]) -> IntImage {
    let (lo, hi) = image.dynamic_range();
    assert!(
        lo >= 0,
        "lookup tables require an image with a non-negative dynamic range"
    );
    assert!(
        hi as usize <= table.len(),
        "lookup table with {} entries cannot cover the dynamic range [{lo},{hi}]",
        table.len(),
    );
    let mut out = IntImage::like(image);
    for y in 0..image.height() {
        for x in 0..image.width() {
            out.set_index(x, y, table[image.get_index(x, y) as usize]);
        }
    }
    out
}

/// Map every channel through its column of `table`: entry `table[v]` holds
/// the new red, green and blue values for channel value `v`.
pub fn apply_lut_rgb(image: &RgbImage, table: &[[i32; 3]]) -> RgbImage {
    let (lo, hi) = image.dynamic_range();
    assert!(
        lo >= 0,
        "lookup tables require an image with a non-negative dynamic range"
    );
    assert!(
        hi as usize <= table.len(),
        "lookup table with {} entries cannot cover the dynamic range [{lo},{hi}]",
        table.len(),
    );
    let mut out = RgbImage::like(image);
    for y in 0..image.height() {
        for x in 0..image.width() {
            let [r, g, b] = image.get_index(x, y);
            out.set_index(
                x,
                y,
                [
                    table[r as usize][0],
                    table[g as usize][1],
                    table[b as usize][2],
                ],
            );
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{apply_lut, combine, multiply_complex, PixelOp};
    use crate::image::{ComplexImage, IntImage};
    use num_complex::Complex64;

    fn pair() -> (IntImage, IntImage) {
        let mut a = IntImage::new(2, 2, 0, 255);
        let mut b = IntImage::new(2, 2, 0, 255);
        a.set(0, 0, 10);
        a.set(1, 0, 20);
        b.set(0, 0, 5);
        b.set(1, 1, 7);
        (a, b)
    }

    #[test]
    fn each_operator_applies_pointwise() {
        let (a, b) = pair();
        assert_eq!(combine(&a, &b, PixelOp::Max).get(0, 0), 10);
        assert_eq!(combine(&a, &b, PixelOp::Min).get(0, 0), 5);
        assert_eq!(combine(&a, &b, PixelOp::Add).get(0, 0), 15);
        assert_eq!(combine(&a, &b, PixelOp::Subtract).get(0, 0), 5);
        assert_eq!(combine(&a, &b, PixelOp::Multiply).get(0, 0), 50);
    }

    #[test]
    fn result_takes_the_first_operand_range() {
        let mut a = IntImage::new(1, 1, 0, 100);
        let mut b = IntImage::new(1, 1, 0, 255);
        a.set(0, 0, 90);
        b.set(0, 0, 90);
        let sum = combine(&a, &b, PixelOp::Add);
        assert_eq!(sum.dynamic_range(), (0, 100));
        // 180 overflows [0,100] and clamps to 99
        assert_eq!(sum.get(0, 0), 99);
    }

    #[test]
    #[should_panic(expected = "same domain")]
    fn differing_domains_are_rejected() {
        let a = IntImage::new(2, 2, 0, 255);
        let b = IntImage::with_bounds(1, 2, 0, 1, 0, 255);
        let _ = combine(&a, &b, PixelOp::Add);
    }

    #[test]
    fn lut_maps_values_positionally() {
        let mut img = IntImage::new(2, 1, 0, 4);
        img.set(0, 0, 1);
        img.set(1, 0, 3);
        let table = [9, 8, 7, 6, 5];
        let mapped = apply_lut(&img, &table);
        assert_eq!(mapped.get(0, 0), 8);
        assert_eq!(mapped.get(1, 0), 6);
    }

    #[test]
    #[should_panic]
    fn short_lut_is_rejected() {
        let img = IntImage::new(1, 1, 0, 255);
        let _ = apply_lut(&img, &[0; 16]);
    }

    #[test]
    fn complex_product_is_pointwise() {
        let mut a = ComplexImage::new(1, 1);
        let mut b = ComplexImage::new(1, 1);
        a.set(0, 0, Complex64::new(0.0, 1.0));
        b.set(0, 0, Complex64::new(0.0, 1.0));
        let prod = multiply_complex(&a, &b);
        assert_eq!(prod.get(0, 0), Complex64::new(-1.0, 0.0));
    }
}
