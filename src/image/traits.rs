//! Read-only row access shared by all image types.
//!
//! The storage is always contiguous row-major with `stride == width`, so a
//! single trait with per-row slices is enough for the consumers that do not
//! care about the coordinate domain (codecs, display buffers).

pub trait ImageView {
    type Pixel: Copy;

    /// Storage width in pixels.
    fn width(&self) -> usize;
    /// Storage height in pixels.
    fn height(&self) -> usize;

    fn row(&self, y: usize) -> &[Self::Pixel];

    fn rows(&self) -> Rows<'_, Self>
    where
        Self: Sized,
    {
        Rows { image: self, y: 0 }
    }

    fn as_slice(&self) -> Option<&[Self::Pixel]> {
        None
    }
}

pub struct Rows<'a, I: ?Sized + ImageView> {
    image: &'a I,
    y: usize,
}

impl<'a, I: ImageView> Iterator for Rows<'a, I> {
    type Item = &'a [I::Pixel];

    fn next(&mut self) -> Option<Self::Item> {
        if self.y >= self.image.height() {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some(self.image.row(y))
    }
}
