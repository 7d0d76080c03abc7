pub mod analyze_views_use_case;
pub mod roi_writer;
