use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

/// Errors surfaced by dataset loading, scale construction and rendering.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    /// Malformed dataset, configuration or geometry.
    #[error("invalid data: {0}")]
    InvalidData(String),
}
