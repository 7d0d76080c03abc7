//! Replays precomputed face meshes from JSON files.
//!
//! Each file holds one mesh as `[[x, y], ...]` in pixel coordinates,
//! landmark index = array position. Views without a configured file
//! report no face.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::analysis::view_filter::View;
use crate::detection::landmark_source::LandmarkSource;
use crate::shared::image::Image;
use crate::shared::landmarks::{Landmarks, Point};

#[derive(Debug, thiserror::Error)]
pub enum LandmarkFileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

pub struct JsonLandmarkSource {
    paths: HashMap<View, PathBuf>,
}

impl JsonLandmarkSource {
    pub fn new(paths: HashMap<View, PathBuf>) -> Self {
        Self { paths }
    }
}

fn load_landmarks(path: &Path) -> Result<Landmarks, LandmarkFileError> {
    let text = std::fs::read_to_string(path).map_err(|source| LandmarkFileError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let points: Vec<Point> =
        serde_json::from_str(&text).map_err(|source| LandmarkFileError::Parse {
            path: path.display().to_string(),
            source,
        })?;
    Ok(Landmarks::new(points))
}

impl LandmarkSource for JsonLandmarkSource {
    fn landmarks(
        &mut self,
        view: View,
        _image: &Image,
    ) -> Result<Option<Landmarks>, Box<dyn std::error::Error>> {
        match self.paths.get(&view) {
            Some(path) => Ok(Some(load_landmarks(path)?)),
            None => Ok(None),
        }
    }
}
