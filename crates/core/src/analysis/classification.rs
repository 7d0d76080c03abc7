//! Threshold classification primitive shared by every region analyzer.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

pub const LABEL_DETECTED: &str = "Yes";
pub const LABEL_NOT_DETECTED: &str = "No";

/// Which side of the threshold counts as a detection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    GreaterThan,
    LessThan,
}

impl Comparison {
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::GreaterThan => ">",
            Comparison::LessThan => "<",
        }
    }

    fn holds(self, value: f64, threshold: f64) -> bool {
        match self {
            Comparison::GreaterThan => value > threshold,
            Comparison::LessThan => value < threshold,
        }
    }
}

impl Serialize for Comparison {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.symbol())
    }
}

/// One classified metric: the measured value, the rule it was tested
/// against, and the outcome label.
#[derive(Clone, Debug, PartialEq)]
pub struct Detection {
    /// Measured value, rounded to 2 decimals at construction.
    pub value: f64,
    pub threshold: f64,
    pub comparison: Comparison,
    pub detected: String,
}

impl Serialize for Detection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(4))?;
        map.serialize_entry("value", &self.value)?;
        map.serialize_entry("threshold", &self.threshold)?;
        map.serialize_entry("comparison", &self.comparison)?;
        map.serialize_entry("detected", &self.detected)?;
        map.end()
    }
}

/// Classifies `value` against `threshold` with Yes/No labels.
///
/// The comparison uses the raw value; rounding to 2 decimals happens
/// only for the stored record, exactly once.
pub fn classify(value: f64, threshold: f64, comparison: Comparison) -> Detection {
    classify_labeled(
        value,
        threshold,
        comparison,
        LABEL_DETECTED,
        LABEL_NOT_DETECTED,
    )
}

/// [`classify`] with custom positive/negative labels.
pub fn classify_labeled(
    value: f64,
    threshold: f64,
    comparison: Comparison,
    label_positive: &str,
    label_negative: &str,
) -> Detection {
    let detected = if comparison.holds(value, threshold) {
        label_positive
    } else {
        label_negative
    };
    Detection {
        value: round2(value),
        threshold,
        comparison,
        detected: detected.to_string(),
    }
}

/// Round half away from zero to 2 decimal places.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
