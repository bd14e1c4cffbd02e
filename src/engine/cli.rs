//! Command-line interface for globe-tour.

use std::env;
use std::fs;

use crate::engine::config::EngineConfig;
use crate::engine::points::{Point, PointSet};
use crate::engine::{EngineError, EngineResult};

pub struct Cli {
    pub points_file: Option<String>,
    pub config_file: Option<String>,
}

impl Cli {
    /// Parse command-line arguments.
    ///
    /// Supported forms:
    /// - `globe-tour <points.json>` - load the tour from a JSON payload
    /// - `globe-tour <points.json> <config.json>` - also override tuning
    /// - `globe-tour` (no args) - run the built-in demo tour
    pub fn parse() -> Self {
        let args: Vec<String> = env::args().collect();

        Self {
            points_file: args.get(1).cloned(),
            config_file: args.get(2).cloned(),
        }
    }

    pub fn load_points(&self) -> EngineResult<PointSet> {
        match &self.points_file {
            Some(path) => PointSet::from_json(&read_file(path)?),
            None => PointSet::new(demo_points()),
        }
    }

    pub fn load_config(&self) -> EngineResult<EngineConfig> {
        match &self.config_file {
            Some(path) => Ok(serde_json::from_str(&read_file(path)?)?),
            None => Ok(EngineConfig::default()),
        }
    }
}

fn read_file(path: &str) -> EngineResult<String> {
    fs::read_to_string(path).map_err(|source| EngineError::Io {
        path: path.to_string(),
        source,
    })
}

/// Built-in tour used when no payload is supplied.
fn demo_points() -> Vec<Point> {
    vec![
        Point {
            latitude: 51.5072,
            longitude: -0.1276,
            label: "London".to_string(),
        },
        Point {
            latitude: 40.7128,
            longitude: -74.0060,
            label: "New York".to_string(),
        },
        Point {
            latitude: 35.6764,
            longitude: 139.65,
            label: "Tokyo".to_string(),
        },
        Point {
            latitude: -33.8688,
            longitude: 151.2093,
            label: "Sydney".to_string(),
        },
    ]
}
