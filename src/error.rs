use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum PlotError {
    /// There is nothing to build a domain from.
    #[error("empty input: {reason}")]
    EmptyInput { reason: &'static str },

    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
