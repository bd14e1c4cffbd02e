//! Point data: the ordered list of places the globe tours.

use serde::{Deserialize, Serialize};

use crate::engine::{EngineError, EngineResult};

/// A single stop on the tour.
///
/// Coordinates are plain degrees. Field names follow the upstream data
/// payload (`lat`/`lng`/`name`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
    #[serde(rename = "name")]
    pub label: String,
}

/// Non-empty ordered point sequence with cyclic predecessor lookup.
///
/// Points are read-only after construction; the scheduler only ever indexes
/// into them.
#[derive(Debug, Clone)]
pub struct PointSet {
    points: Vec<Point>,
}

impl PointSet {
    /// Fails with `EmptyPointSet` when `points` is empty.
    pub fn new(points: Vec<Point>) -> EngineResult<Self> {
        if points.is_empty() {
            return Err(EngineError::EmptyPointSet);
        }

        Ok(Self { points })
    }

    /// Parse the JSON payload the host supplies at startup.
    pub fn from_json(payload: &str) -> EngineResult<Self> {
        let points: Vec<Point> = serde_json::from_str(payload)?;
        Self::new(points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; the constructor rejects empty lists.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn get(&self, index: usize) -> &Point {
        &self.points[index]
    }

    /// The point before `index`, wrapping so the predecessor of the first
    /// point is the last one. This is what makes the tour cyclic: the very
    /// first transition animates from the last point toward the first.
    pub fn prev_of(&self, index: usize) -> &Point {
        if index == 0 {
            &self.points[self.points.len() - 1]
        } else {
            &self.points[index - 1]
        }
    }
}
