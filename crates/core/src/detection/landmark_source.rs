//! Landmark acquisition seam.
//!
//! Segmentation consumes a 468-point face mesh but does not run the
//! detector itself. Implementations may wrap a live detector or replay
//! precomputed meshes, keyed by capture view.

use std::error::Error;

use crate::analysis::view_filter::View;
use crate::shared::image::Image;
use crate::shared::landmarks::Landmarks;

/// Supplies the face mesh for one capture.
///
/// `Ok(None)` means the source ran but found no face in the capture;
/// `Err` means the source itself failed.
pub trait LandmarkSource {
    fn landmarks(
        &mut self,
        view: View,
        image: &Image,
    ) -> Result<Option<Landmarks>, Box<dyn Error>>;
}
