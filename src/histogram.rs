//! Frequency tables over a declared value range.
//!
//! A histogram spans the inclusive range `[min_range..max_range]`, one bin
//! per value. Unlike pixel writes there is no clamp here: touching a value
//! outside the range is a programming error and panics.

use serde::Serialize;

use crate::image::{IntImage, RgbImage};

#[derive(Clone, Debug, Serialize)]
pub struct Histogram {
    min_range: i32,
    max_range: i32,
    frequencies: Vec<u64>,
}

impl Histogram {
    /// Empty histogram over the inclusive value range.
    pub fn new(min_range: i32, max_range: i32) -> Self {
        assert!(
            max_range >= min_range,
            "histogram range [{min_range}..{max_range}] is empty"
        );
        let bins = (max_range - min_range + 1) as usize;
        Histogram {
            min_range,
            max_range,
            frequencies: vec![0; bins],
        }
    }

    /// Histogram of an image over its declared dynamic range.
    pub fn from_image(image: &IntImage) -> Self {
        let (lo, hi) = image.dynamic_range();
        let mut hist = Histogram::new(lo, hi);
        for &v in image.pixels() {
            hist.increment(v);
        }
        hist
    }

    /// Three independent per-channel histograms over the image's declared
    /// dynamic range.
    pub fn from_rgb(image: &RgbImage) -> [Histogram; 3] {
        let (lo, hi) = image.dynamic_range();
        let mut hists = [
            Histogram::new(lo, hi),
            Histogram::new(lo, hi),
            Histogram::new(lo, hi),
        ];
        for p in image.pixels() {
            for (hist, &c) in hists.iter_mut().zip(p) {
                hist.increment(c);
            }
        }
        hists
    }

    #[inline]
    pub fn range(&self) -> (i32, i32) {
        (self.min_range, self.max_range)
    }

    #[inline]
    fn bin(&self, value: i32) -> usize {
        assert!(
            value >= self.min_range && value <= self.max_range,
            "attempt to access frequency for {value}, outside the histogram range [{}..{}]",
            self.min_range,
            self.max_range,
        );
        (value - self.min_range) as usize
    }

    #[inline]
    pub fn frequency(&self, value: i32) -> u64 {
        self.frequencies[self.bin(value)]
    }

    #[inline]
    pub fn set_frequency(&mut self, value: i32, count: u64) {
        let bin = self.bin(value);
        self.frequencies[bin] = count;
    }

    #[inline]
    pub fn increment(&mut self, value: i32) {
        let bin = self.bin(value);
        self.frequencies[bin] += 1;
    }

    /// Bin counts in value order, `min_range` first.
    pub fn counts(&self) -> &[u64] {
        &self.frequencies
    }
}

#[cfg(test)]
mod tests {
    use super::Histogram;
    use crate::image::{IntImage, RgbImage};

    #[test]
    fn one_bin_per_value_including_both_ends() {
        let hist = Histogram::new(-2, 2);
        assert_eq!(hist.counts().len(), 5);
        assert_eq!(hist.frequency(-2), 0);
        assert_eq!(hist.frequency(2), 0);
    }

    #[test]
    fn image_histogram_counts_every_pixel() {
        let mut img = IntImage::new(4, 2, 0, 3);
        img.set(0, 0, 3);
        img.set(1, 0, 3);
        img.set(2, 1, 1);
        let hist = Histogram::from_image(&img);
        assert_eq!(hist.frequency(0), 5);
        assert_eq!(hist.frequency(1), 1);
        assert_eq!(hist.frequency(2), 0);
        assert_eq!(hist.frequency(3), 2);
    }

    #[test]
    fn rgb_histograms_are_independent() {
        let mut img = RgbImage::new(2, 1, 0, 3);
        img.set(0, 0, [1, 2, 3]);
        img.set(1, 0, [1, 0, 3]);
        let [r, g, b] = Histogram::from_rgb(&img);
        assert_eq!(r.frequency(1), 2);
        assert_eq!(g.frequency(2), 1);
        assert_eq!(g.frequency(0), 1);
        assert_eq!(b.frequency(3), 2);
    }

    #[test]
    #[should_panic]
    fn out_of_range_query_panics() {
        let hist = Histogram::new(0, 10);
        let _ = hist.frequency(11);
    }

    #[test]
    #[should_panic]
    fn out_of_range_update_panics() {
        let mut hist = Histogram::new(0, 10);
        hist.increment(-1);
    }
}
