//! Saves extracted region patches as PNG files.

use std::path::PathBuf;

use crate::analysis::view_filter::View;
use crate::pipeline::roi_writer::RoiWriter;
use crate::segmentation::region_cropper::RoiPatch;

/// Writes each patch to `<dir>/<view>_<region>.png`, creating the
/// directory on first use. Empty patches are skipped.
pub struct RoiPatchWriter {
    dir: PathBuf,
}

impl RoiPatchWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl RoiWriter for RoiPatchWriter {
    fn write(
        &mut self,
        view: View,
        region: &str,
        patch: &RoiPatch,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let image = patch.image();
        if image.pixel_count() == 0 {
            log::debug!("skipping empty {region} patch in {} view", view.label());
            return Ok(());
        }

        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(format!("{}_{region}.png", view.label()));
        let buffer = image::RgbImage::from_raw(image.width(), image.height(), image.data().to_vec())
            .ok_or("ROI patch buffer does not match its dimensions")?;
        buffer.save(&path)?;
        Ok(())
    }
}
