//! Binary morphology with a fixed 5×5 elliptical structuring element.
//!
//! Opening removes isolated noise pixels; closing fills small gaps.
//! Together they clean a rasterized hull mask without materially
//! changing its shape. The footprint matches the conventional 5×5
//! elliptical kernel:
//!
//! ```text
//! . . x . .
//! x x x x x
//! x x x x x
//! x x x x x
//! . . x . .
//! ```

use image::GrayImage;

/// Neighbor offsets of the 5×5 elliptical structuring element.
const ELLIPSE_5X5: &[(i32, i32)] = &[
    (0, -2),
    (-2, -1), (-1, -1), (0, -1), (1, -1), (2, -1),
    (-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0),
    (-2, 1), (-1, 1), (0, 1), (1, 1), (2, 1),
    (0, 2),
];

/// Erosion then dilation: removes blobs smaller than the element.
pub fn open(mask: &GrayImage) -> GrayImage {
    dilate(&erode(mask))
}

/// Dilation then erosion: fills gaps smaller than the element.
pub fn close(mask: &GrayImage) -> GrayImage {
    erode(&dilate(mask))
}

/// A pixel survives erosion only if every in-bounds element position is
/// set; pixels outside the image count as unset.
pub fn erode(mask: &GrayImage) -> GrayImage {
    transform(mask, |all_set, _| all_set)
}

/// A pixel is set after dilation if any element position is set.
pub fn dilate(mask: &GrayImage) -> GrayImage {
    transform(mask, |_, any_set| any_set)
}

fn transform(mask: &GrayImage, keep: impl Fn(bool, bool) -> bool) -> GrayImage {
    let (w, h) = mask.dimensions();
    let mut out = GrayImage::new(w, h);

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            let mut all_set = true;
            let mut any_set = false;
            for &(dx, dy) in ELLIPSE_5X5 {
                let set = sample(mask, x + dx, y + dy);
                all_set &= set;
                any_set |= set;
            }
            if keep(all_set, any_set) {
                out.put_pixel(x as u32, y as u32, image::Luma([255]));
            }
        }
    }
    out
}

fn sample(mask: &GrayImage, x: i32, y: i32) -> bool {
    if x < 0 || y < 0 || x >= mask.width() as i32 || y >= mask.height() as i32 {
        return false;
    }
    mask.get_pixel(x as u32, y as u32).0[0] != 0
}
