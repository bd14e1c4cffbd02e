pub mod animation;
pub mod cli;
pub mod config;
pub mod easing;
pub mod graphics;
pub mod points;
pub mod renderable;
pub mod windowing;

#[cfg(test)]
mod animation_tests;

pub use windowing::Windowing;

/// Engine-level error type.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// The point payload contained no points; no transition can be defined.
    #[error("point list is empty")]
    EmptyPointSet,

    #[error("failed to parse point data: {0}")]
    InvalidPointData(#[from] serde_json::Error),

    #[error("failed to read '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
}

pub type EngineResult<T> = Result<T, EngineError>;
