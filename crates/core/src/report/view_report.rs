//! Report assembly.
//!
//! Output is a JSON object keyed by view label. Each view carries the
//! optional age/gender block first, then one entry per analyzed region
//! in registry order. Insertion order is preserved through manual
//! serialization, so consumers can diff reports textually.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use crate::analysis::classification::Detection;
use crate::estimation::age_gender::AgeGenderEstimate;

/// Analysis outcome for one region within one view.
#[derive(Clone, Debug, PartialEq)]
pub enum RegionAnalysis {
    /// Named condition metrics in rule order.
    Metrics(Vec<(String, Detection)>),
    /// The region was segmented but no analyzer covers it.
    Unsupported { message: String },
}

impl Serialize for RegionAnalysis {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            RegionAnalysis::Metrics(metrics) => {
                let mut map = serializer.serialize_map(Some(metrics.len()))?;
                for (name, detection) in metrics {
                    map.serialize_entry(name, detection)?;
                }
                map.end()
            }
            RegionAnalysis::Unsupported { message } => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry("error", message)?;
                map.end()
            }
        }
    }
}

/// Everything produced for one capture view.
#[derive(Debug, Default)]
pub struct ViewReport {
    pub age_gender: Option<AgeGenderEstimate>,
    pub regions: Vec<(String, RegionAnalysis)>,
}

impl ViewReport {
    pub fn push_region(&mut self, name: impl Into<String>, analysis: RegionAnalysis) {
        self.regions.push((name.into(), analysis));
    }
}

impl Serialize for ViewReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let extra = usize::from(self.age_gender.is_some());
        let mut map = serializer.serialize_map(Some(self.regions.len() + extra))?;
        if let Some(estimate) = &self.age_gender {
            map.serialize_entry("age_gender", estimate)?;
        }
        for (name, analysis) in &self.regions {
            map.serialize_entry(name, analysis)?;
        }
        map.end()
    }
}

/// Full run output: one report per processed view, in processing order.
#[derive(Debug, Default)]
pub struct FaceReport {
    pub views: Vec<(&'static str, ViewReport)>,
}

impl FaceReport {
    pub fn push_view(&mut self, label: &'static str, report: ViewReport) {
        self.views.push((label, report));
    }
}

impl Serialize for FaceReport {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.views.len()))?;
        for (label, report) in &self.views {
            map.serialize_entry(label, report)?;
        }
        map.end()
    }
}
