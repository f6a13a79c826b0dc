//! Error types for risk computation, configuration and the assessment API.

use crate::pii::PiiCategory;
use std::path::PathBuf;
use thiserror::Error;

/// Failures of the recommendation engine and local scoring.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RiskError {
    #[error("unknown risk tier: {0:?}")]
    UnknownTier(String),
    #[error("missing calibration data for PII category {0}")]
    MissingCalibrationData(PiiCategory),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid calibration for {category}: {reason}")]
    InvalidCalibration {
        category: PiiCategory,
        reason: String,
    },
    #[error("invalid risk tier boundaries: {0}")]
    InvalidBoundaries(String),
}

/// Failures talking to the remote assessment API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("api client disabled or no endpoint configured")]
    Disabled,
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("no relevant data: {0}")]
    NoRelevantData(String),
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}
