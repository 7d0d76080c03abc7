//! Masked crop extraction for one region.
//!
//! The crop rectangle is the hull's bounding box grown by the shared
//! adaptive padding, clamped to the image. Pixels outside the cleaned
//! mask are zeroed before cropping, so a patch carries only region
//! pixels on a black background.

use crate::shared::image::Image;

use super::region_mask::RegionMask;

/// Clamped crop rectangle: `x1..x2` by `y1..y2`, half-open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CropRect {
    pub x1: u32,
    pub y1: u32,
    pub x2: u32,
    pub y2: u32,
}

impl CropRect {
    pub fn width(&self) -> u32 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> u32 {
        self.y2 - self.y1
    }
}

/// A cropped, masked sub-image of one facial zone.
#[derive(Clone, Debug)]
pub struct RoiPatch {
    image: Image,
    rect: CropRect,
}

impl RoiPatch {
    pub fn new(image: Image, rect: CropRect) -> Self {
        Self { image, rect }
    }

    pub fn image(&self) -> &Image {
        &self.image
    }

    pub fn rect(&self) -> CropRect {
        self.rect
    }
}

/// Crops the masked region out of `image`. Out-of-range geometry is
/// always clamped, never an error; a fully out-of-bounds hull produces
/// an empty patch.
pub fn crop_region(image: &Image, region: &RegionMask, padding: i32) -> RoiPatch {
    let rect = padded_crop_rect(region, padding, image.width(), image.height());
    let channels = image.channels() as usize;

    let mut data = Vec::with_capacity((rect.width() * rect.height()) as usize * channels);
    for y in rect.y1..rect.y2 {
        for x in rect.x1..rect.x2 {
            if region.is_set(x, y) {
                data.extend_from_slice(image.pixel(x, y));
            } else {
                data.extend(std::iter::repeat(0u8).take(channels));
            }
        }
    }

    RoiPatch {
        image: Image::new(data, rect.width(), rect.height(), image.channels()),
        rect,
    }
}

fn padded_crop_rect(region: &RegionMask, padding: i32, width: u32, height: u32) -> CropRect {
    let (bx, by, bw, bh) = region.hull_bounding_rect();
    let w = width as i64;
    let h = height as i64;
    let pad = i64::from(padding);

    let x1 = (i64::from(bx) - pad).clamp(0, w);
    let y1 = (i64::from(by) - pad).clamp(0, h);
    let x2 = (i64::from(bx) + i64::from(bw) + pad).clamp(x1, w);
    let y2 = (i64::from(by) + i64::from(bh) + pad).clamp(y1, h);

    CropRect {
        x1: x1 as u32,
        y1: y1 as u32,
        x2: x2 as u32,
        y2: y2 as u32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn solid_image(width: u32, height: u32, rgb: [u8; 3]) -> Image {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&rgb);
        }
        Image::new(data, width, height, 3)
    }

    fn square_region(x0: i32, y0: i32, side: i32) -> RegionMask {
        let points = [
            (x0, y0),
            (x0 + side, y0),
            (x0 + side, y0 + side),
            (x0, y0 + side),
        ];
        RegionMask::build(&points, 100, 100).unwrap()
    }

    // ── Crop geometry ────────────────────────────────────────────────

    #[test]
    fn test_crop_rect_includes_padding() {
        let image = solid_image(100, 100, [200, 150, 100]);
        let patch = crop_region(&image, &square_region(30, 30, 20), 5);
        // Hull rect (30, 30, 21, 21) padded by 5 → 25..56
        assert_eq!(
            patch.rect(),
            CropRect {
                x1: 25,
                y1: 25,
                x2: 56,
                y2: 56
            }
        );
        assert_eq!(patch.image().width(), 31);
        assert_eq!(patch.image().height(), 31);
    }

    #[rstest]
    #[case::zero_padding(0)]
    #[case::small_padding(4)]
    #[case::huge_padding(500)]
    fn test_crop_rect_always_within_bounds(#[case] padding: i32) {
        let image = solid_image(100, 100, [10, 10, 10]);
        let patch = crop_region(&image, &square_region(80, 80, 30), padding);
        let r = patch.rect();
        assert!(r.x1 <= r.x2 && r.x2 <= 100);
        assert!(r.y1 <= r.y2 && r.y2 <= 100);
    }

    #[test]
    fn test_crop_clamped_at_image_edge() {
        let image = solid_image(100, 100, [10, 10, 10]);
        let patch = crop_region(&image, &square_region(85, 85, 10), 10);
        assert_eq!(patch.rect().x2, 100);
        assert_eq!(patch.rect().y2, 100);
        // Smaller than the unclamped 10+1+2*10 span
        assert!(patch.image().width() < 31);
    }

    #[test]
    fn test_fully_out_of_bounds_hull_yields_empty_patch() {
        let image = solid_image(50, 50, [10, 10, 10]);
        let points = [(200, 200), (240, 200), (240, 240), (200, 240)];
        let region = RegionMask::build(&points, 50, 50).unwrap();
        let patch = crop_region(&image, &region, 10);
        assert_eq!(patch.rect().width(), 0);
        assert!(patch.image().data().is_empty());
    }

    // ── Mask application ─────────────────────────────────────────────

    #[test]
    fn test_pixels_outside_mask_are_black() {
        let image = solid_image(100, 100, [200, 150, 100]);
        let patch = crop_region(&image, &square_region(30, 30, 20), 10);
        // Corner of the padded crop lies outside the hull mask
        assert_eq!(patch.image().pixel(0, 0), &[0, 0, 0]);
    }

    #[test]
    fn test_pixels_inside_mask_preserved() {
        let image = solid_image(100, 100, [200, 150, 100]);
        let patch = crop_region(&image, &square_region(30, 30, 20), 5);
        // Center of the region within the patch
        let cx = patch.image().width() / 2;
        let cy = patch.image().height() / 2;
        assert_eq!(patch.image().pixel(cx, cy), &[200, 150, 100]);
    }

    #[test]
    fn test_empty_mask_region_yields_all_black_patch() {
        // Two-point hull: mask cleans to empty but the crop still covers
        // the padded hull rectangle.
        let image = solid_image(100, 100, [200, 150, 100]);
        let region = RegionMask::build(&[(20, 30), (60, 30)], 100, 100).unwrap();
        let patch = crop_region(&image, &region, 10);
        assert!(patch.rect().width() > 0);
        assert!(patch.image().data().iter().all(|&v| v == 0));
    }
}
