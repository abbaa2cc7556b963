//! Error types for the exposure engine

use thiserror::Error;

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("Sun position error: {0}")]
    SunPosition(String),

    #[error("Local time error: {0}")]
    LocalTime(String),

    #[error("Unknown time zone: {0}")]
    TimeZone(String),

    #[error("Topo not found: {0}")]
    TopoNotFound(String),

    #[error("Route not found: {0}")]
    RouteNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
