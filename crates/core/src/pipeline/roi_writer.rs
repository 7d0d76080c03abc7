use crate::analysis::view_filter::View;
use crate::segmentation::region_cropper::RoiPatch;

/// Persists extracted region patches for inspection or debugging.
pub trait RoiWriter {
    fn write(
        &mut self,
        view: View,
        region: &str,
        patch: &RoiPatch,
    ) -> Result<(), Box<dyn std::error::Error>>;
}
