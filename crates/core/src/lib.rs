pub mod analysis;
pub mod detection;
pub mod estimation;
pub mod io;
pub mod pipeline;
pub mod report;
pub mod segmentation;
pub mod shared;
