//! PII exposure client — risk-tier recommendations and privacy tip rotation.
//!
//! Modular structure:
//! - [`pii`] — PII categories and the assessment result returned by the backend
//! - [`scoring`] — Per-category calibration and the privacy erosion model
//! - [`risk`] — Risk tiers, local scoring, next-tier recommendations
//! - [`tips`] — Non-repeating privacy tip rotation on a timer
//! - [`client`] — Assessment API client
//! - [`session`] — Signed-in user and current assessment
//! - [`logging`] — Structured JSON logging

pub mod config;
pub mod error;
pub mod pii;
pub mod scoring;
pub mod risk;
pub mod tips;
pub mod client;
pub mod session;
pub mod logging;

pub use config::AppConfig;
pub use error::{ApiError, ConfigError, RiskError};
pub use pii::{AssessmentResult, PiiCategory};
pub use scoring::{Calibration, PiiScoringTable};
pub use risk::{recommend, Recommendation, RiskEngine, RiskLevel};
pub use tips::{TipCatalog, TipRotator, TipTicker};
pub use client::ApiClient;
pub use session::Session;
pub use logging::StructuredLogger;
