//! Per-region skin condition rules.
//!
//! Each region kind owns a fixed rule set mapping visual statistics to
//! named conditions. Thresholds are empirical constants calibrated
//! against the reference dataset; preserve them exactly — output
//! compatibility depends on it.

use crate::shared::constants::{
    ACNE_CANNY_THRESHOLDS, BLACKHEAD_INTENSITY_CUTOFF, LAB_A_REFERENCE_MIDPOINT,
    PUFFINESS_CANNY_THRESHOLDS,
};
use crate::shared::image::Image;

use super::classification::{classify, Comparison, Detection};
use super::color::{grayscale, lab_planes, value_channel};
use super::stats::{dark_fraction, edge_density, edge_strength, laplacian_variance, mean, std_dev};

/// Ordered metric name → detection record pairs for one region.
pub type MetricSet = Vec<(String, Detection)>;

/// The five analyzable region families. Left/right variants of eyes and
/// cheeks share one kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionKind {
    Forehead,
    Cheek,
    Nose,
    Lips,
    Eye,
}

impl RegionKind {
    /// Resolves a region name to its analyzer kind via its canonical key
    /// (left/right prefix stripped). Returns `None` for regions without
    /// an analyzer.
    pub fn from_region_name(name: &str) -> Option<Self> {
        match canonical_key(name) {
            "forehead" => Some(RegionKind::Forehead),
            "cheek" => Some(RegionKind::Cheek),
            "nose" => Some(RegionKind::Nose),
            "lips" => Some(RegionKind::Lips),
            "eye" => Some(RegionKind::Eye),
            _ => None,
        }
    }
}

/// Region name with any `left_` / `right_` prefix stripped.
pub fn canonical_key(name: &str) -> &str {
    name.strip_prefix("left_")
        .or_else(|| name.strip_prefix("right_"))
        .unwrap_or(name)
}

/// Runs the rule set for `kind` over one ROI patch.
pub fn analyze_region(kind: RegionKind, roi: &Image) -> MetricSet {
    match kind {
        RegionKind::Forehead => analyze_forehead(roi),
        RegionKind::Cheek => analyze_cheek(roi),
        RegionKind::Nose => analyze_nose(roi),
        RegionKind::Lips => analyze_lips(roi),
        RegionKind::Eye => analyze_eye(roi),
    }
}

/// Dryness threshold depends on brightness: darker regions get the more
/// permissive 120 so texture loss under low light is still caught.
fn dryness_threshold(brightness: f64) -> f64 {
    if brightness < 100.0 {
        120.0
    } else {
        100.0
    }
}

fn analyze_forehead(roi: &Image) -> MetricSet {
    let gray = grayscale(roi);
    let lab = lab_planes(roi);

    let brightness = mean(&value_channel(roi));
    let texture = laplacian_variance(&gray, roi.width(), roi.height());

    vec![
        metric("Oiliness", classify(brightness, 170.0, Comparison::GreaterThan)),
        metric(
            "Dryness",
            classify(texture, dryness_threshold(brightness), Comparison::LessThan),
        ),
        metric("Pigmentation", classify(std_dev(&lab.l), 12.0, Comparison::GreaterThan)),
        metric("Redness", classify(mean(&lab.b), 145.0, Comparison::GreaterThan)),
        metric("Wrinkles", classify(texture, 350.0, Comparison::GreaterThan)),
    ]
}

fn analyze_cheek(roi: &Image) -> MetricSet {
    let gray = grayscale(roi);
    let lab = lab_planes(roi);

    let brightness = mean(&value_channel(roi));
    let texture = laplacian_variance(&gray, roi.width(), roi.height());
    let acne = edge_density(&gray, roi.width(), roi.height(), ACNE_CANNY_THRESHOLDS);

    vec![
        metric("Oiliness", classify(brightness, 170.0, Comparison::GreaterThan)),
        metric(
            "Dryness",
            classify(texture, dryness_threshold(brightness), Comparison::LessThan),
        ),
        metric("Acne", classify(acne, 0.12, Comparison::GreaterThan)),
        metric("Pigmentation", classify(std_dev(&lab.l), 12.0, Comparison::GreaterThan)),
        metric("Redness", classify(mean(&lab.b), 145.0, Comparison::GreaterThan)),
    ]
}

fn analyze_nose(roi: &Image) -> MetricSet {
    let gray = grayscale(roi);

    let brightness = mean(&value_channel(roi));
    let blackheads = dark_fraction(&gray, BLACKHEAD_INTENSITY_CUTOFF);
    let texture = laplacian_variance(&gray, roi.width(), roi.height());

    vec![
        metric("Shiny Nose", classify(brightness, 170.0, Comparison::GreaterThan)),
        metric("Blackheads", classify(blackheads, 0.1, Comparison::GreaterThan)),
        metric("Clogged Pores", classify(texture, 180.0, Comparison::GreaterThan)),
    ]
}

fn analyze_lips(roi: &Image) -> MetricSet {
    let gray = grayscale(roi);
    let lab = lab_planes(roi);

    let texture = laplacian_variance(&gray, roi.width(), roi.height());
    let discoloration = (mean(&lab.a) - LAB_A_REFERENCE_MIDPOINT).abs();

    vec![
        metric("Dry Lips", classify(texture, 120.0, Comparison::LessThan)),
        metric("Discoloration", classify(discoloration, 15.0, Comparison::GreaterThan)),
    ]
}

fn analyze_eye(roi: &Image) -> MetricSet {
    let gray = grayscale(roi);

    let brightness = mean(&value_channel(roi));
    let texture = laplacian_variance(&gray, roi.width(), roi.height());
    let puffiness = edge_strength(&gray, roi.width(), roi.height(), PUFFINESS_CANNY_THRESHOLDS);

    vec![
        metric("Dark Circles", classify(brightness, 70.0, Comparison::LessThan)),
        metric(
            "Wrinkles (Crow's Feet)",
            classify(texture, 300.0, Comparison::GreaterThan),
        ),
        metric("Puffy Eyes", classify(puffiness, 5.0, Comparison::LessThan)),
        metric("Open Pores", classify(std_dev(&gray), 40.0, Comparison::GreaterThan)),
    ]
}

fn metric(name: &str, detection: Detection) -> (String, Detection) {
    (name.to_string(), detection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    fn solid(rgb: [u8; 3], width: u32, height: u32) -> Image {
        let mut data = Vec::with_capacity((width * height * 3) as usize);
        for _ in 0..width * height {
            data.extend_from_slice(&rgb);
        }
        Image::new(data, width, height, 3)
    }

    fn detection<'a>(set: &'a MetricSet, name: &str) -> &'a Detection {
        &set.iter().find(|(n, _)| n == name).unwrap().1
    }

    // ── Canonical keys and dispatch ──────────────────────────────────

    #[rstest]
    #[case("left_cheek", "cheek")]
    #[case("right_cheek", "cheek")]
    #[case("left_eye", "eye")]
    #[case("right_eye", "eye")]
    #[case("forehead", "forehead")]
    #[case("nose", "nose")]
    #[case("lips", "lips")]
    fn test_canonical_key(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(canonical_key(name), expected);
    }

    #[rstest]
    #[case("forehead", Some(RegionKind::Forehead))]
    #[case("left_cheek", Some(RegionKind::Cheek))]
    #[case("right_eye", Some(RegionKind::Eye))]
    #[case("nose", Some(RegionKind::Nose))]
    #[case("lips", Some(RegionKind::Lips))]
    #[case("chin", None)]
    #[case("left_ear", None)]
    fn test_from_region_name(#[case] name: &str, #[case] expected: Option<RegionKind>) {
        assert_eq!(RegionKind::from_region_name(name), expected);
    }

    // ── Metric ordering per region ───────────────────────────────────

    #[test]
    fn test_forehead_metric_order() {
        let set = analyze_region(RegionKind::Forehead, &solid([128, 128, 128], 20, 20));
        let names: Vec<_> = set.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["Oiliness", "Dryness", "Pigmentation", "Redness", "Wrinkles"]
        );
    }

    #[test]
    fn test_cheek_metric_order() {
        let set = analyze_region(RegionKind::Cheek, &solid([128, 128, 128], 20, 20));
        let names: Vec<_> = set.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec!["Oiliness", "Dryness", "Acne", "Pigmentation", "Redness"]
        );
    }

    #[test]
    fn test_nose_metric_order() {
        let set = analyze_region(RegionKind::Nose, &solid([128, 128, 128], 20, 20));
        let names: Vec<_> = set.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Shiny Nose", "Blackheads", "Clogged Pores"]);
    }

    #[test]
    fn test_lips_metric_order() {
        let set = analyze_region(RegionKind::Lips, &solid([128, 128, 128], 20, 20));
        let names: Vec<_> = set.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["Dry Lips", "Discoloration"]);
    }

    #[test]
    fn test_eye_metric_order() {
        let set = analyze_region(RegionKind::Eye, &solid([128, 128, 128], 20, 20));
        let names: Vec<_> = set.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Dark Circles",
                "Wrinkles (Crow's Feet)",
                "Puffy Eyes",
                "Open Pores"
            ]
        );
    }

    // ── Threshold behavior ───────────────────────────────────────────

    #[test]
    fn test_bright_region_flags_oiliness() {
        let set = analyze_region(RegionKind::Forehead, &solid([250, 240, 230], 20, 20));
        let d = detection(&set, "Oiliness");
        assert_eq!(d.detected, "Yes");
        assert_relative_eq!(d.value, 250.0);
    }

    #[test]
    fn test_dim_region_no_oiliness() {
        let set = analyze_region(RegionKind::Forehead, &solid([100, 90, 80], 20, 20));
        assert_eq!(detection(&set, "Oiliness").detected, "No");
    }

    #[test]
    fn test_flat_region_flags_dryness() {
        // Zero texture variance is below any dryness threshold
        let set = analyze_region(RegionKind::Cheek, &solid([150, 140, 130], 20, 20));
        assert_eq!(detection(&set, "Dryness").detected, "Yes");
    }

    #[test]
    fn test_dark_region_uses_permissive_dryness_threshold() {
        // Brightness 95 < 100 → threshold 120
        let set = analyze_region(RegionKind::Cheek, &solid([95, 90, 85], 20, 20));
        assert_relative_eq!(detection(&set, "Dryness").threshold, 120.0);
    }

    #[test]
    fn test_bright_region_uses_strict_dryness_threshold() {
        let set = analyze_region(RegionKind::Forehead, &solid([150, 140, 130], 20, 20));
        assert_relative_eq!(detection(&set, "Dryness").threshold, 100.0);
    }

    #[test]
    fn test_dark_eye_region_flags_dark_circles() {
        let set = analyze_region(RegionKind::Eye, &solid([40, 35, 30], 20, 20));
        assert_eq!(detection(&set, "Dark Circles").detected, "Yes");
    }

    #[test]
    fn test_bright_eye_region_no_dark_circles() {
        let set = analyze_region(RegionKind::Eye, &solid([150, 140, 130], 20, 20));
        assert_eq!(detection(&set, "Dark Circles").detected, "No");
    }

    #[test]
    fn test_smooth_eye_region_flags_puffiness() {
        // No edges at all → edge strength 0 < 5
        let set = analyze_region(RegionKind::Eye, &solid([120, 110, 100], 20, 20));
        assert_eq!(detection(&set, "Puffy Eyes").detected, "Yes");
    }

    #[test]
    fn test_dark_nose_flags_blackheads() {
        // All pixels below the 50-intensity cutoff → fraction 1.0 > 0.1
        let set = analyze_region(RegionKind::Nose, &solid([30, 25, 20], 20, 20));
        let d = detection(&set, "Blackheads");
        assert_eq!(d.detected, "Yes");
        assert_relative_eq!(d.value, 1.0);
    }

    #[test]
    fn test_gray_lips_flag_discoloration() {
        // Achromatic gray: Lab a ≈ 128, |128 - 150| = 22 > 15 → detected.
        // The 150 midpoint sits above neutral, so gray lips actually flag.
        let set = analyze_region(RegionKind::Lips, &solid([128, 128, 128], 20, 20));
        let d = detection(&set, "Discoloration");
        assert_eq!(d.detected, "Yes");
        assert!(d.value > 15.0);
    }

    #[test]
    fn test_reddish_lips_near_reference_midpoint() {
        // A saturated red pushes the a channel toward the 150 reference
        let set = analyze_region(RegionKind::Lips, &solid([200, 120, 120], 20, 20));
        let d = detection(&set, "Discoloration");
        assert!(d.value < 22.0, "red lips sit closer to the midpoint than gray");
    }

    #[test]
    fn test_flat_region_no_wrinkles() {
        let set = analyze_region(RegionKind::Forehead, &solid([128, 128, 128], 20, 20));
        assert_eq!(detection(&set, "Wrinkles").detected, "No");
    }

    #[test]
    fn test_empty_patch_analyzes_without_panic() {
        let empty = Image::new(vec![], 0, 0, 3);
        for kind in [
            RegionKind::Forehead,
            RegionKind::Cheek,
            RegionKind::Nose,
            RegionKind::Lips,
            RegionKind::Eye,
        ] {
            let set = analyze_region(kind, &empty);
            assert!(!set.is_empty());
        }
    }
}
