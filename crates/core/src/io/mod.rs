pub mod image_file_reader;
pub mod json_landmark_source;
pub mod roi_patch_writer;
