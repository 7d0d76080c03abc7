//! Hull-based binary mask for one skin region.
//!
//! The convex hull of the region's landmark points is rasterized into a
//! full-image mask and cleaned with an open/close pass. Degenerate hulls
//! (one or two points) rasterize to a pixel or a line; the opening then
//! erodes such masks to empty, which downstream code tolerates — the
//! region still yields an (all-black) crop.

use image::{GrayImage, Luma};
use imageproc::drawing::{draw_line_segment_mut, draw_polygon_mut};
use imageproc::point::Point as HullPoint;

use crate::shared::landmarks::Point;

use super::morphology;

const MASK_ON: Luma<u8> = Luma([255u8]);

/// Cleaned binary mask plus the hull that produced it.
///
/// Crop geometry stays hull-driven: the bounding rectangle is taken from
/// the hull, not from the cleaned mask.
pub struct RegionMask {
    mask: GrayImage,
    hull: Vec<Point>,
}

impl RegionMask {
    /// Builds the mask for a region's landmark points, or `None` when the
    /// point set is empty.
    pub fn build(points: &[Point], width: u32, height: u32) -> Option<Self> {
        if points.is_empty() {
            return None;
        }

        let hull = convex_hull(points);
        let mut mask = GrayImage::new(width, height);
        rasterize_hull(&mut mask, &hull);
        let mask = morphology::close(&morphology::open(&mask));

        Some(Self { mask, hull })
    }

    pub fn mask(&self) -> &GrayImage {
        &self.mask
    }

    /// Hull vertices in raster order.
    pub fn hull(&self) -> &[Point] {
        &self.hull
    }

    pub fn is_set(&self, x: u32, y: u32) -> bool {
        x < self.mask.width() && y < self.mask.height() && self.mask.get_pixel(x, y).0[0] != 0
    }

    /// Axis-aligned bounding rectangle of the hull as (x, y, width, height),
    /// inclusive of the extreme points.
    pub fn hull_bounding_rect(&self) -> (i32, i32, i32, i32) {
        let min_x = self.hull.iter().map(|p| p.0).min().unwrap_or(0);
        let max_x = self.hull.iter().map(|p| p.0).max().unwrap_or(0);
        let min_y = self.hull.iter().map(|p| p.1).min().unwrap_or(0);
        let max_y = self.hull.iter().map(|p| p.1).max().unwrap_or(0);
        (min_x, min_y, max_x - min_x + 1, max_y - min_y + 1)
    }
}

fn convex_hull(points: &[Point]) -> Vec<Point> {
    if points.len() < 3 {
        return points.to_vec();
    }
    let hull_points: Vec<HullPoint<i32>> =
        points.iter().map(|&(x, y)| HullPoint::new(x, y)).collect();
    imageproc::geometry::convex_hull(hull_points)
        .into_iter()
        .map(|p| (p.x, p.y))
        .collect()
}

fn rasterize_hull(mask: &mut GrayImage, hull: &[Point]) {
    match hull {
        [] => {}
        [p] => put_pixel_clamped(mask, *p),
        [a, b] => draw_line_segment_mut(
            mask,
            (a.0 as f32, a.1 as f32),
            (b.0 as f32, b.1 as f32),
            MASK_ON,
        ),
        _ => {
            let polygon: Vec<HullPoint<i32>> =
                hull.iter().map(|&(x, y)| HullPoint::new(x, y)).collect();
            draw_polygon_mut(mask, &polygon, MASK_ON);
        }
    }
}

fn put_pixel_clamped(mask: &mut GrayImage, (x, y): Point) {
    if x >= 0 && y >= 0 && (x as u32) < mask.width() && (y as u32) < mask.height() {
        mask.put_pixel(x as u32, y as u32, MASK_ON);
    }
}
