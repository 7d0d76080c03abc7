//! Crop padding scaled to apparent face size.
//!
//! Inter-ocular distance is a stable proxy for how large the face appears
//! in the image, so padding grows with it: 5% of IOD, or a fixed 10 px
//! when either eye was not detected.

use crate::shared::constants::{FALLBACK_PADDING, PADDING_IOD_RATIO};
use crate::shared::landmarks::{Landmarks, Point};

use super::region_registry::{region_indices, LEFT_EYE, RIGHT_EYE};

/// Padding in pixels shared by every region of one extraction call.
pub fn adaptive_padding(landmarks: &Landmarks) -> i32 {
    let left = eye_points(LEFT_EYE, landmarks);
    let right = eye_points(RIGHT_EYE, landmarks);

    if left.is_empty() || right.is_empty() {
        log::debug!("eye landmarks missing, using fallback padding {FALLBACK_PADDING}");
        return FALLBACK_PADDING;
    }

    let iod = distance(centroid(&left), centroid(&right));
    (PADDING_IOD_RATIO * iod).floor() as i32
}

fn eye_points(region: &str, landmarks: &Landmarks) -> Vec<Point> {
    region_indices(region)
        .map(|indices| landmarks.select(indices))
        .unwrap_or_default()
}

fn centroid(points: &[Point]) -> (f64, f64) {
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), &(x, y)| {
            (sx + f64::from(x), sy + f64::from(y))
        });
    (sx / n, sy / n)
}

fn distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}
