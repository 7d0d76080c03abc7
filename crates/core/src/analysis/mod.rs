pub mod classification;
pub mod color;
pub mod region_analyzers;
pub mod stats;
pub mod view_filter;
