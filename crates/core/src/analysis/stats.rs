//! Visual statistics computed over an ROI patch.
//!
//! All statistics run over the full patch, zeroed background included,
//! which matches how the thresholds were calibrated. Empty patches
//! (possible when a hull clamps to nothing) yield 0.0 for every metric.

use image::GrayImage;
use imageproc::edges::canny;

/// Arithmetic mean of a channel plane.
pub fn mean(values: &[u8]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64
}

/// Population standard deviation of a channel plane.
pub fn std_dev(values: &[u8]) -> f64 {
    variance_of(&values.iter().map(|&v| f64::from(v)).collect::<Vec<_>>()).sqrt()
}

/// Fraction of pixels strictly below `cutoff`.
pub fn dark_fraction(values: &[u8], cutoff: u8) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().filter(|&&v| v < cutoff).count() as f64 / values.len() as f64
}

/// Variance of the 3×3 discrete Laplacian response over a grayscale
/// plane, the texture/focus proxy behind the dryness and wrinkle rules.
///
/// Kernel `[0 1 0; 1 -4 1; 0 1 0]` with reflected borders.
pub fn laplacian_variance(gray: &[u8], width: u32, height: u32) -> f64 {
    debug_assert_eq!(gray.len(), (width as usize) * (height as usize));
    if gray.is_empty() {
        return 0.0;
    }

    let w = width as i64;
    let h = height as i64;
    let at = |x: i64, y: i64| -> f64 {
        let x = reflect(x, w);
        let y = reflect(y, h);
        f64::from(gray[(y * w + x) as usize])
    };

    let mut response = Vec::with_capacity(gray.len());
    for y in 0..h {
        for x in 0..w {
            response.push(
                at(x, y - 1) + at(x, y + 1) + at(x - 1, y) + at(x + 1, y) - 4.0 * at(x, y),
            );
        }
    }
    variance_of(&response)
}

/// Fraction of pixels flagged by the Canny detector.
pub fn edge_density(gray: &[u8], width: u32, height: u32, thresholds: (f32, f32)) -> f64 {
    let Some(edges) = edge_map(gray, width, height, thresholds) else {
        return 0.0;
    };
    let total = (width as usize) * (height as usize);
    edges.pixels().filter(|p| p.0[0] != 0).count() as f64 / total as f64
}

/// Sum of Canny edge pixel values divided by pixel count. Edge pixels
/// carry value 255, so this is 255 × the flagged fraction.
pub fn edge_strength(gray: &[u8], width: u32, height: u32, thresholds: (f32, f32)) -> f64 {
    let Some(edges) = edge_map(gray, width, height, thresholds) else {
        return 0.0;
    };
    let total = (width as usize) * (height as usize);
    edges.pixels().map(|p| f64::from(p.0[0])).sum::<f64>() / total as f64
}

/// Index reflection without edge repetition (…, 2, 1, 0, 1, 2, …).
fn reflect(i: i64, len: i64) -> i64 {
    if len == 1 {
        return 0;
    }
    let i = if i < 0 { -i } else { i };
    let i = if i >= len { 2 * (len - 1) - i } else { i };
    i.clamp(0, len - 1)
}

fn variance_of(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / values.len() as f64
}

/// Builds the Canny edge map, or `None` when the patch is too small to
/// filter.
fn edge_map(gray: &[u8], width: u32, height: u32, (low, high): (f32, f32)) -> Option<GrayImage> {
    if width < 3 || height < 3 {
        return None;
    }
    let image = GrayImage::from_raw(width, height, gray.to_vec())?;
    Some(canny(&image, low, high))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    // ── Mean / std-dev / dark fraction ───────────────────────────────

    #[test]
    fn test_mean_uniform() {
        assert_relative_eq!(mean(&[80; 50]), 80.0);
    }

    #[test]
    fn test_mean_mixed() {
        assert_relative_eq!(mean(&[0, 100, 200]), 100.0);
    }

    #[test]
    fn test_mean_empty_is_zero() {
        assert_relative_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_std_dev_uniform_is_zero() {
        assert_relative_eq!(std_dev(&[42; 20]), 0.0);
    }

    #[test]
    fn test_std_dev_population() {
        // Population std-dev of [0, 0, 100, 100] is 50
        assert_relative_eq!(std_dev(&[0, 0, 100, 100]), 50.0);
    }

    #[rstest]
    #[case::all_dark(&[10, 20, 30], 50, 1.0)]
    #[case::none_dark(&[60, 70, 80], 50, 0.0)]
    #[case::half_dark(&[10, 90], 50, 0.5)]
    #[case::cutoff_is_exclusive(&[50, 49], 50, 0.5)]
    fn test_dark_fraction(#[case] values: &[u8], #[case] cutoff: u8, #[case] expected: f64) {
        assert_relative_eq!(dark_fraction(values, cutoff), expected);
    }

    // ── Laplacian variance ───────────────────────────────────────────

    #[test]
    fn test_laplacian_variance_flat_is_zero() {
        let gray = vec![100u8; 10 * 10];
        assert_relative_eq!(laplacian_variance(&gray, 10, 10), 0.0);
    }

    #[test]
    fn test_laplacian_variance_textured_is_positive() {
        // Checkerboard: maximal second-derivative response
        let gray: Vec<u8> = (0..100)
            .map(|i| if (i / 10 + i % 10) % 2 == 0 { 0 } else { 255 })
            .collect();
        assert!(laplacian_variance(&gray, 10, 10) > 1000.0);
    }

    #[test]
    fn test_laplacian_more_texture_more_variance() {
        let smooth: Vec<u8> = (0..100).map(|i| (i % 10 * 10) as u8).collect();
        let rough: Vec<u8> = (0..100)
            .map(|i| if i % 2 == 0 { 0 } else { 200 })
            .collect();
        assert!(
            laplacian_variance(&rough, 10, 10) > laplacian_variance(&smooth, 10, 10),
            "rough texture must out-score a smooth ramp"
        );
    }

    #[test]
    fn test_laplacian_single_step_edge() {
        // 1x4 plane [10, 10, 20, 20]: responses with reflected borders are
        // [0, 10, -10, 0] → mean 0, variance = (100+100)/4 = 50
        let gray = [10u8, 10, 20, 20];
        assert_relative_eq!(laplacian_variance(&gray, 4, 1), 50.0);
    }

    #[test]
    fn test_laplacian_empty_is_zero() {
        assert_relative_eq!(laplacian_variance(&[], 0, 0), 0.0);
    }

    // ── Border reflection ────────────────────────────────────────────

    #[rstest]
    #[case(-1, 5, 1)]
    #[case(0, 5, 0)]
    #[case(4, 5, 4)]
    #[case(5, 5, 3)]
    #[case(0, 1, 0)]
    fn test_reflect(#[case] i: i64, #[case] len: i64, #[case] expected: i64) {
        assert_eq!(reflect(i, len), expected);
    }

    // ── Edge metrics ─────────────────────────────────────────────────

    #[test]
    fn test_edge_density_flat_is_zero() {
        let gray = vec![128u8; 20 * 20];
        assert_relative_eq!(edge_density(&gray, 20, 20, (100.0, 200.0)), 0.0);
    }

    #[test]
    fn test_edge_density_detects_strong_edge() {
        // Left half black, right half white
        let gray: Vec<u8> = (0..400)
            .map(|i| if i % 20 < 10 { 0 } else { 255 })
            .collect();
        let density = edge_density(&gray, 20, 20, (100.0, 200.0));
        assert!(density > 0.0);
        assert!(density < 1.0);
    }

    #[test]
    fn test_edge_strength_is_255_times_density() {
        let gray: Vec<u8> = (0..400)
            .map(|i| if i % 20 < 10 { 0 } else { 255 })
            .collect();
        let density = edge_density(&gray, 20, 20, (50.0, 150.0));
        let strength = edge_strength(&gray, 20, 20, (50.0, 150.0));
        assert_relative_eq!(strength, density * 255.0, epsilon = 1e-9);
    }

    #[test]
    fn test_edge_metrics_tiny_patch_is_zero() {
        let gray = vec![0u8, 255, 0, 255];
        assert_relative_eq!(edge_density(&gray, 2, 2, (100.0, 200.0)), 0.0);
        assert_relative_eq!(edge_strength(&gray, 2, 2, (100.0, 200.0)), 0.0);
    }
}
