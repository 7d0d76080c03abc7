//! Full segmentation pass: landmarks + image → named ROI patches.

use crate::shared::image::Image;
use crate::shared::landmarks::Landmarks;

use super::adaptive_padding::adaptive_padding;
use super::region_cropper::{crop_region, RoiPatch};
use super::region_mask::RegionMask;
use super::region_registry::{gather_region_points, region_names};

/// Extracts every region with at least one present landmark, in registry
/// order. Regions with no present landmarks are silently absent.
///
/// Padding is computed once from inter-ocular distance and shared by all
/// regions of the call.
pub fn extract_rois(image: &Image, landmarks: &Landmarks) -> Vec<(String, RoiPatch)> {
    let padding = adaptive_padding(landmarks);
    log::debug!("extracting regions with padding {padding}px");

    let mut rois = Vec::new();
    for name in region_names() {
        let points = gather_region_points(name, landmarks);
        let Some(mask) = RegionMask::build(&points, image.width(), image.height()) else {
            continue;
        };
        rois.push((name.to_string(), crop_region(image, &mask, padding)));
    }
    rois
}
