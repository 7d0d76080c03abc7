pub mod adaptive_padding;
pub mod morphology;
pub mod region_cropper;
pub mod region_mask;
pub mod region_registry;
pub mod roi_extractor;
