/// A single landmark position in pixel coordinates.
pub type Point = (i32, i32);

/// Ordered, index-addressable face landmark coordinates for one image.
///
/// Region definitions reference indices that may exceed the detected
/// sequence length; [`Landmarks::get`] treats those as missing data,
/// never as a fault.
#[derive(Clone, Debug, PartialEq)]
pub struct Landmarks {
    points: Vec<Point>,
}

impl Landmarks {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Point at `index`, or `None` if the index is out of range.
    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied()
    }

    /// Points for the given indices, skipping any that are absent,
    /// preserving index order.
    pub fn select(&self, indices: &[usize]) -> Vec<Point> {
        indices.iter().filter_map(|&i| self.get(i)).collect()
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}
