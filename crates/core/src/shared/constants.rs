/// Padding as a fraction of inter-ocular distance.
pub const PADDING_IOD_RATIO: f64 = 0.05;

/// Fixed padding in pixels when either eye is undetected.
pub const FALLBACK_PADDING: i32 = 10;

/// Landmark index of the central forehead point used to anchor the
/// synthetic upward-extension point.
pub const FOREHEAD_CENTER_INDEX: usize = 10;

/// Fraction of the forehead's vertical span the synthetic point is
/// raised above the central landmark.
pub const FOREHEAD_EXTENSION_RATIO: f64 = 0.3;

/// Canny thresholds for acne edge density on cheeks.
pub const ACNE_CANNY_THRESHOLDS: (f32, f32) = (100.0, 200.0);

/// Canny thresholds for puffiness edge strength around the eyes.
pub const PUFFINESS_CANNY_THRESHOLDS: (f32, f32) = (50.0, 150.0);

/// Grayscale intensity below which a pixel counts as a blackhead candidate.
pub const BLACKHEAD_INTENSITY_CUTOFF: u8 = 50;

/// Neutral midpoint of the 8-bit Lab a-channel used for lip discoloration.
pub const LAB_A_REFERENCE_MIDPOINT: f64 = 150.0;

pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];
