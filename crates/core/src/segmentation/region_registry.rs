//! Static table of anatomical skin regions and their defining landmarks.
//!
//! Indices follow the 468-point face mesh layout. The forehead gets one
//! synthetic point raised above the detected landmarks, since the mesh
//! places no points on the upper forehead.

use crate::shared::constants::{FOREHEAD_CENTER_INDEX, FOREHEAD_EXTENSION_RATIO};
use crate::shared::landmarks::{Landmarks, Point};

pub const FOREHEAD: &str = "forehead";
pub const LEFT_EYE: &str = "left_eye";
pub const RIGHT_EYE: &str = "right_eye";
pub const NOSE: &str = "nose";
pub const LIPS: &str = "lips";
pub const LEFT_CHEEK: &str = "left_cheek";
pub const RIGHT_CHEEK: &str = "right_cheek";

/// Region name → defining landmark indices, in extraction order.
pub const REGION_DEFINITIONS: &[(&str, &[usize])] = &[
    (FOREHEAD, &[10, 338, 297, 332, 284]),
    (LEFT_EYE, &[33, 133]),
    (RIGHT_EYE, &[362, 263]),
    (NOSE, &[1, 6, 197, 195, 5]),
    (LIPS, &[61, 291, 78, 308]),
    (LEFT_CHEEK, &[50, 205, 187]),
    (RIGHT_CHEEK, &[280, 425, 411]),
];

/// Defining landmark indices for `name`, or `None` for unknown regions.
pub fn region_indices(name: &str) -> Option<&'static [usize]> {
    REGION_DEFINITIONS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, idxs)| *idxs)
}

/// Region names in extraction order.
pub fn region_names() -> impl Iterator<Item = &'static str> {
    REGION_DEFINITIONS.iter().map(|(n, _)| *n)
}

/// Collects the present landmark points for a region, applying the
/// forehead extension rule.
///
/// Returns an empty vector when none of the region's indices are present;
/// no synthetic point is invented from nothing.
pub fn gather_region_points(name: &str, landmarks: &Landmarks) -> Vec<Point> {
    let Some(indices) = region_indices(name) else {
        return Vec::new();
    };
    let mut points = landmarks.select(indices);

    if name == FOREHEAD && !points.is_empty() {
        if let Some(synthetic) = forehead_extension_point(&points, landmarks) {
            points.push(synthetic);
        }
    }

    points
}

/// Synthetic point above the forehead: x of the central landmark, y raised
/// by 30% of the vertical span of the base points, clamped at the top edge.
fn forehead_extension_point(base_points: &[Point], landmarks: &Landmarks) -> Option<Point> {
    let (cx, cy) = landmarks.get(FOREHEAD_CENTER_INDEX)?;

    let min_y = base_points.iter().map(|&(_, y)| y).min()?;
    let max_y = base_points.iter().map(|&(_, y)| y).max()?;
    let vertical_span = max_y - min_y;

    let offset = (FOREHEAD_EXTENSION_RATIO * f64::from(vertical_span)).round() as i32;
    Some((cx, (cy - offset).max(0)))
}
