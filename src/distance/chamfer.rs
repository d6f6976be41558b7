//! Rosenfeld-Pfaltz chamfer distance transforms.
//!
//! Two raster passes over a small neighbour mask: the forward pass scans
//! top-to-bottom, left-to-right and propagates `1 + min(visited
//! neighbours)`; the backward pass scans the opposite way with the mirrored
//! mask and takes the pointwise minimum. Background pixels are written as 0
//! in the forward pass and never revisited. The sentinel "infinity" is
//! `width + height + 1`, larger than any reachable chamfer distance.

use crate::image::IntImage;

/// Forward mask for the 4-neighbour (city block) transform.
pub(crate) const MASK_4: [(i32, i32); 2] = [(-1, 0), (0, -1)];

/// Forward mask for the 8-neighbour (chessboard) transform.
pub(crate) const MASK_8: [(i32, i32); 4] = [(-1, -1), (0, -1), (1, -1), (-1, 0)];

/// Single-neighbour vertical mask; used as the column pass of the exact
/// Euclidean transform.
pub(crate) const MASK_VERTICAL: [(i32, i32); 1] = [(0, -1)];

/// Two-pass chamfer transform of `image` for an arbitrary forward mask.
///
/// Pixels holding `foreground` receive their chamfer distance to the
/// nearest non-foreground pixel; all other pixels receive 0.
pub(crate) fn mask_distance_transform(
    mask: &[(i32, i32)],
    foreground: i32,
    image: &IntImage,
) -> IntImage {
    let domain = image.domain();
    let infinity = domain.width() + domain.height() + 1;
    let mut dt = IntImage::with_domain(domain, 0, infinity);

    // forward pass: top-to-bottom, left-to-right
    for y in domain.min_y..=domain.max_y {
        for x in domain.min_x..=domain.max_x {
            if image.get(x, y) != foreground {
                dt.set(x, y, 0);
            } else {
                let mut min_nb = infinity;
                for &(dx, dy) in mask {
                    let (nx, ny) = (x + dx, y + dy);
                    if domain.contains(nx, ny) {
                        min_nb = min_nb.min(dt.get(nx, ny));
                    }
                }
                let dist = if min_nb < infinity { 1 + min_nb } else { infinity };
                dt.set(x, y, dist);
            }
        }
    }

    // backward pass: bottom-to-top, right-to-left, mirrored mask
    for y in (domain.min_y..=domain.max_y).rev() {
        for x in (domain.min_x..=domain.max_x).rev() {
            let here = dt.get(x, y);
            if here > 0 {
                let mut min_nb = infinity;
                for &(dx, dy) in mask {
                    let (nx, ny) = (x - dx, y - dy);
                    if domain.contains(nx, ny) {
                        min_nb = min_nb.min(dt.get(nx, ny));
                    }
                }
                let dist = if min_nb < infinity { 1 + min_nb } else { infinity };
                dt.set(x, y, dist.min(here));
            }
        }
    }
    dt
}

/// City-block (Manhattan) chamfer transform.
pub fn chamfer4(foreground: i32, image: &IntImage) -> IntImage {
    mask_distance_transform(&MASK_4, foreground, image)
}

/// Chessboard chamfer transform.
pub fn chamfer8(foreground: i32, image: &IntImage) -> IntImage {
    mask_distance_transform(&MASK_8, foreground, image)
}

#[cfg(test)]
mod tests {
    use super::{chamfer4, chamfer8};
    use crate::image::IntImage;

    #[test]
    fn all_background_maps_to_zero() {
        let img = IntImage::new(5, 4, 0, 1);
        let dt = chamfer4(1, &img);
        assert!(dt.pixels().iter().all(|&v| v == 0));
    }

    #[test]
    fn single_foreground_pixel_is_at_distance_one() {
        let mut img = IntImage::new(5, 5, 0, 1);
        img.set(2, 2, 1);
        let dt = chamfer4(1, &img);
        assert_eq!(dt.get(2, 2), 1);
        assert_eq!(dt.get(2, 1), 0);
    }

    #[test]
    fn city_block_distances_around_a_background_hole() {
        // all-foreground plane with one background pixel at the centre
        let mut img = IntImage::new(5, 5, 0, 1);
        img.fill(1);
        img.set(2, 2, 0);
        let dt = chamfer4(1, &img);
        for y in 0i32..5 {
            for x in 0i32..5 {
                let expected = (x - 2).abs() + (y - 2).abs();
                assert_eq!(dt.get(x, y), expected, "at ({x},{y})");
            }
        }
    }

    #[test]
    fn chessboard_distances_around_a_background_hole() {
        let mut img = IntImage::new(7, 7, 0, 1);
        img.fill(1);
        img.set(3, 3, 0);
        let dt = chamfer8(1, &img);
        for y in 0i32..7 {
            for x in 0i32..7 {
                let expected = (x - 3).abs().max((y - 3).abs());
                assert_eq!(dt.get(x, y), expected, "at ({x},{y})");
            }
        }
    }

    #[test]
    fn works_on_translated_domains() {
        let mut img = IntImage::with_bounds(-3, 1, 10, 14, 0, 1);
        img.fill(1);
        img.set(-1, 12, 0);
        let dt = chamfer4(1, &img);
        assert_eq!(dt.domain(), img.domain());
        assert_eq!(dt.get(-1, 12), 0);
        assert_eq!(dt.get(1, 14), 4);
    }
}
