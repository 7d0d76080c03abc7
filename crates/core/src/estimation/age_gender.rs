//! Age and gender estimation seam.
//!
//! The pipeline does not ship a face attribute model; it consumes one
//! through [`AgeGenderEstimator`] so deployments can plug in whatever
//! backend they run. [`NullAgeGenderEstimator`] is the default and
//! always reports an indeterminate result.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::shared::image::Image;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

impl Serialize for Gender {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Outcome of one estimation attempt over the frontal capture.
#[derive(Clone, Debug, PartialEq)]
pub enum AgeGenderEstimate {
    Estimated {
        age: u32,
        age_range: String,
        gender: Gender,
        /// Backend confidence in 0.0..=1.0.
        confidence: f64,
    },
    /// The backend could not produce an answer (no face, low quality,
    /// or no model configured).
    Indeterminate,
}

impl AgeGenderEstimate {
    /// Convenience constructor that derives the range bucket from the
    /// point estimate.
    pub fn from_age(age: u32, gender: Gender, confidence: f64) -> Self {
        AgeGenderEstimate::Estimated {
            age,
            age_range: age_range(age),
            gender,
            confidence,
        }
    }
}

impl Serialize for AgeGenderEstimate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            AgeGenderEstimate::Estimated {
                age,
                age_range,
                gender,
                confidence,
            } => {
                let mut map = serializer.serialize_map(Some(4))?;
                map.serialize_entry("age", age)?;
                map.serialize_entry("age_range", age_range)?;
                map.serialize_entry("gender", gender)?;
                map.serialize_entry("confidence", confidence)?;
                map.end()
            }
            AgeGenderEstimate::Indeterminate => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("status", "indeterminate")?;
                map.end()
            }
        }
    }
}

/// Display bucket for an age estimate: `Below 18`, three-year bands
/// from 18 to 80, then `80+`.
pub fn age_range(age: u32) -> String {
    if age < 18 {
        return "Below 18".to_string();
    }
    if age >= 80 {
        return "80+".to_string();
    }
    let lower = 18 + (age - 18) / 3 * 3;
    format!("{}-{}", lower, lower + 2)
}

/// Pluggable face attribute backend. Takes the frontal capture.
pub trait AgeGenderEstimator {
    fn estimate(&mut self, image: &Image) -> AgeGenderEstimate;
}

/// Backend used when no model is configured.
pub struct NullAgeGenderEstimator;

impl AgeGenderEstimator for NullAgeGenderEstimator {
    fn estimate(&mut self, _image: &Image) -> AgeGenderEstimate {
        AgeGenderEstimate::Indeterminate
    }
}
