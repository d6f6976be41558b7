//! Owned single-channel f64 raster.
//!
//! Same domain and dynamic-range semantics as [`IntImage`], with the range
//! expressed in f64. Conversions between the two round half up on the way
//! down to integers.

use log::warn;

use crate::domain::ImageDomain;
use crate::image::int::IntImage;
use crate::image::traits::ImageView;

#[derive(Clone, Debug)]
pub struct RealImage {
    domain: ImageDomain,
    min_range: f64,
    max_range: f64,
    data: Vec<f64>,
}

impl RealImage {
    pub fn new(width: i32, height: i32, min_range: f64, max_range: f64) -> Self {
        Self::with_bounds(0, width - 1, 0, height - 1, min_range, max_range)
    }

    pub fn unbounded(width: i32, height: i32) -> Self {
        Self::new(width, height, f64::MIN, f64::MAX)
    }

    pub fn with_bounds(
        min_x: i32,
        max_x: i32,
        min_y: i32,
        max_y: i32,
        min_range: f64,
        max_range: f64,
    ) -> Self {
        Self::with_domain(ImageDomain::new(min_x, max_x, min_y, max_y), min_range, max_range)
    }

    pub fn with_domain(domain: ImageDomain, min_range: f64, max_range: f64) -> Self {
        let len = domain.width() as usize * domain.height() as usize;
        RealImage {
            domain,
            min_range,
            max_range,
            data: vec![0.0; len],
        }
    }

    /// Zero-filled image with the domain and dynamic range of `other`.
    pub fn like(other: &RealImage) -> Self {
        Self::with_domain(other.domain, other.min_range, other.max_range)
    }

    /// Copy an integer image into a real one, keeping domain and range.
    pub fn from_int(image: &IntImage) -> Self {
        let (lo, hi) = image.dynamic_range();
        let mut out = Self::with_domain(image.domain(), lo as f64, hi as f64);
        out.data
            .iter_mut()
            .zip(image.pixels())
            .for_each(|(dst, &src)| *dst = src as f64);
        out
    }

    /// Round every pixel to the nearest integer (half away from zero is
    /// not attempted; the rule is `(v + 0.5)` truncated) and keep domain
    /// and range.
    pub fn to_int(&self) -> IntImage {
        let mut out =
            IntImage::with_domain(self.domain, self.min_range as i32, self.max_range as i32);
        for y in 0..self.domain.height() {
            for x in 0..self.domain.width() {
                out.set_index(x, y, (self.get_index(x, y) + 0.5) as i32);
            }
        }
        out
    }

    #[inline]
    pub fn domain(&self) -> ImageDomain {
        self.domain
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.domain.width()
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.domain.height()
    }

    #[inline]
    pub fn dynamic_range(&self) -> (f64, f64) {
        (self.min_range, self.max_range)
    }

    #[inline]
    fn linear(&self, x: i32, y: i32) -> usize {
        y as usize * self.domain.width() as usize + x as usize
    }

    #[inline]
    fn clamp_to_range(&self, value: f64) -> f64 {
        if value < self.min_range {
            warn!(
                "value {value} is outside dynamic range [{},{}]: clamped to {}",
                self.min_range, self.max_range, self.min_range
            );
            return self.min_range;
        }
        if value > self.max_range {
            warn!(
                "value {value} is outside dynamic range [{},{}]: clamped to {}",
                self.min_range,
                self.max_range,
                self.max_range - 1.0
            );
            return self.max_range - 1.0;
        }
        value
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> f64 {
        assert!(
            self.domain.contains(x, y),
            "attempt to access pixel ({x},{y}) outside the image domain [{}..{}]x[{}..{}]",
            self.domain.min_x,
            self.domain.max_x,
            self.domain.min_y,
            self.domain.max_y,
        );
        self.data[self.linear(x - self.domain.min_x, y - self.domain.min_y)]
    }

    #[inline]
    pub fn set(&mut self, x: i32, y: i32, value: f64) {
        let value = self.clamp_to_range(value);
        assert!(
            self.domain.contains(x, y),
            "attempt to access pixel ({x},{y}) outside the image domain [{}..{}]x[{}..{}]",
            self.domain.min_x,
            self.domain.max_x,
            self.domain.min_y,
            self.domain.max_y,
        );
        let i = self.linear(x - self.domain.min_x, y - self.domain.min_y);
        self.data[i] = value;
    }

    #[inline]
    pub fn get_index(&self, x: i32, y: i32) -> f64 {
        assert!(
            self.domain.contains_index(x, y),
            "attempt to access pixel ({x},{y}) outside the {}x{} image",
            self.width(),
            self.height(),
        );
        self.data[self.linear(x, y)]
    }

    #[inline]
    pub fn set_index(&mut self, x: i32, y: i32, value: f64) {
        let value = self.clamp_to_range(value);
        assert!(
            self.domain.contains_index(x, y),
            "attempt to access pixel ({x},{y}) outside the {}x{} image",
            self.width(),
            self.height(),
        );
        let i = self.linear(x, y);
        self.data[i] = value;
    }

    pub fn fill(&mut self, value: f64) {
        let value = self.clamp_to_range(value);
        self.data.fill(value);
    }

    pub fn min_max(&self) -> (f64, f64) {
        let mut min = self.data[0];
        let mut max = self.data[0];
        for &v in &self.data {
            min = min.min(v);
            max = max.max(v);
        }
        (min, max)
    }

    #[inline]
    pub fn pixels(&self) -> &[f64] {
        &self.data
    }
}

impl ImageView for RealImage {
    type Pixel = f64;

    #[inline]
    fn width(&self) -> usize {
        self.domain.width() as usize
    }
    #[inline]
    fn height(&self) -> usize {
        self.domain.height() as usize
    }
    #[inline]
    fn row(&self, y: usize) -> &[f64] {
        let w = self.domain.width() as usize;
        &self.data[y * w..(y + 1) * w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[f64]> {
        Some(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::RealImage;
    use crate::image::int::IntImage;

    #[test]
    fn int_round_trip_rounds_half_up() {
        let mut real = RealImage::new(3, 1, 0.0, 255.0);
        real.set(0, 0, 1.4);
        real.set(1, 0, 1.5);
        real.set(2, 0, 2.9);
        let ints = real.to_int();
        assert_eq!(ints.get(0, 0), 1);
        assert_eq!(ints.get(1, 0), 2);
        assert_eq!(ints.get(2, 0), 3);
    }

    #[test]
    fn from_int_preserves_domain_and_range() {
        let mut img = IntImage::with_bounds(-1, 1, -1, 1, 0, 100);
        img.set(0, 0, 50);
        let real = RealImage::from_int(&img);
        assert_eq!(real.domain(), img.domain());
        assert_eq!(real.dynamic_range(), (0.0, 100.0));
        assert_eq!(real.get(0, 0), 50.0);
    }
}
