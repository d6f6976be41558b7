//! Owned complex-valued raster used by the spectral engine.
//!
//! Complex images carry no dynamic range; writes are never clamped.

use num_complex::Complex64;

use crate::domain::ImageDomain;
use crate::image::traits::ImageView;

#[derive(Clone, Debug)]
pub struct ComplexImage {
    domain: ImageDomain,
    data: Vec<Complex64>,
}

impl ComplexImage {
    pub fn new(width: i32, height: i32) -> Self {
        Self::with_domain(ImageDomain::of_size(width, height))
    }

    pub fn with_bounds(min_x: i32, max_x: i32, min_y: i32, max_y: i32) -> Self {
        Self::with_domain(ImageDomain::new(min_x, max_x, min_y, max_y))
    }

    pub fn with_domain(domain: ImageDomain) -> Self {
        let len = domain.width() as usize * domain.height() as usize;
        ComplexImage {
            domain,
            data: vec![Complex64::new(0.0, 0.0); len],
        }
    }

    /// Zero-filled image over the domain of `other`.
    pub fn like(other: &ComplexImage) -> Self {
        Self::with_domain(other.domain)
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
    fn linear(&self, x: i32, y: i32) -> usize {
        y as usize * self.domain.width() as usize + x as usize
    }

    #[inline]
    pub fn get(&self, x: i32, y: i32) -> Complex64 {
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
    pub fn set(&mut self, x: i32, y: i32, value: Complex64) {
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
    pub fn get_index(&self, x: i32, y: i32) -> Complex64 {
        assert!(
            self.domain.contains_index(x, y),
            "attempt to access pixel ({x},{y}) outside the {}x{} image",
            self.width(),
            self.height(),
        );
        self.data[self.linear(x, y)]
    }

    #[inline]
    pub fn set_index(&mut self, x: i32, y: i32, value: Complex64) {
        assert!(
            self.domain.contains_index(x, y),
            "attempt to access pixel ({x},{y}) outside the {}x{} image",
            self.width(),
            self.height(),
        );
        let i = self.linear(x, y);
        self.data[i] = value;
    }

    pub fn fill(&mut self, value: Complex64) {
        self.data.fill(value);
    }

    /// Smallest and largest real part currently stored. Imaginary parts are
    /// ignored, which is what spectrum display wants.
    pub fn real_min_max(&self) -> (f64, f64) {
        let mut min = self.data[0].re;
        let mut max = self.data[0].re;
        for v in &self.data {
            min = min.min(v.re);
            max = max.max(v.re);
        }
        (min, max)
    }

    /// Mutable view of storage row `y` (index-relative).
    #[inline]
    pub(crate) fn row_mut(&mut self, y: usize) -> &mut [Complex64] {
        let w = self.domain.width() as usize;
        &mut self.data[y * w..(y + 1) * w]
    }
}

impl ImageView for ComplexImage {
    type Pixel = Complex64;

    #[inline]
    fn width(&self) -> usize {
        self.domain.width() as usize
    }
    #[inline]
    fn height(&self) -> usize {
        self.domain.height() as usize
    }
    #[inline]
    fn row(&self, y: usize) -> &[Complex64] {
        let w = self.domain.width() as usize;
        &self.data[y * w..(y + 1) * w]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[Complex64]> {
        Some(&self.data)
    }
}
