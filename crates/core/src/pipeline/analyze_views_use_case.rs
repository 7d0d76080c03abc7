use crate::analysis::region_analyzers::{analyze_region, RegionKind};
use crate::analysis::view_filter::View;
use crate::detection::landmark_source::LandmarkSource;
use crate::estimation::age_gender::AgeGenderEstimator;
use crate::pipeline::roi_writer::RoiWriter;
use crate::report::view_report::{FaceReport, RegionAnalysis, ViewReport};
use crate::segmentation::roi_extractor::extract_rois;
use crate::shared::image::Image;

/// Multi-view analysis pipeline: landmarks → segment → filter → analyze
/// → report, with age/gender estimation on the frontal capture.
pub struct AnalyzeViewsUseCase {
    landmark_source: Box<dyn LandmarkSource>,
    estimator: Box<dyn AgeGenderEstimator>,
    roi_writer: Option<Box<dyn RoiWriter>>,
}

impl AnalyzeViewsUseCase {
    pub fn new(
        landmark_source: Box<dyn LandmarkSource>,
        estimator: Box<dyn AgeGenderEstimator>,
        roi_writer: Option<Box<dyn RoiWriter>>,
    ) -> Self {
        Self {
            landmark_source,
            estimator,
            roi_writer,
        }
    }

    /// Analyzes each capture in order. Views without a detectable face
    /// are skipped with a warning rather than failing the whole run.
    pub fn execute(
        &mut self,
        captures: &[(View, Image)],
    ) -> Result<FaceReport, Box<dyn std::error::Error>> {
        let mut report = FaceReport::default();

        for (view, image) in captures {
            let Some(landmarks) = self.landmark_source.landmarks(*view, image)? else {
                log::warn!("no face found in {} view, skipping", view.label());
                continue;
            };

            let mut view_report = ViewReport::default();
            if *view == View::Center {
                view_report.age_gender = Some(self.estimator.estimate(image));
            }

            for (region, patch) in extract_rois(image, &landmarks) {
                if !view.admits(&region) {
                    continue;
                }
                if let Some(writer) = self.roi_writer.as_mut() {
                    writer.write(*view, &region, &patch)?;
                }

                let analysis = match RegionKind::from_region_name(&region) {
                    Some(kind) => RegionAnalysis::Metrics(analyze_region(kind, patch.image())),
                    None => RegionAnalysis::Unsupported {
                        message: format!("No analysis function defined for region: {region}"),
                    },
                };
                view_report.push_region(region, analysis);
            }

            report.push_view(view.label(), view_report);
        }

        Ok(report)
    }
}
