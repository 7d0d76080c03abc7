//! Capture-view gating for region analysis.
//!
//! A profile capture only exposes one side of the face, so the regions
//! facing away from the camera are dropped before analysis instead of
//! producing statistics over occluded pixels.

use crate::segmentation::region_registry::{
    FOREHEAD, LEFT_CHEEK, LEFT_EYE, LIPS, NOSE, RIGHT_CHEEK, RIGHT_EYE,
};

/// Camera-facing pose of one capture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum View {
    Center,
    Left,
    Right,
}

impl View {
    /// Report key for this view.
    pub fn label(self) -> &'static str {
        match self {
            View::Center => "center",
            View::Left => "left",
            View::Right => "right",
        }
    }

    /// Whether `region` is visible enough in this view to analyze.
    /// Center admits everything; profiles admit the midline regions plus
    /// their own side.
    pub fn admits(self, region: &str) -> bool {
        match self {
            View::Center => true,
            View::Left => matches!(region, FOREHEAD | LIPS | NOSE | LEFT_EYE | LEFT_CHEEK),
            View::Right => matches!(region, FOREHEAD | LIPS | NOSE | RIGHT_EYE | RIGHT_CHEEK),
        }
    }
}
