//! Risk tiers, local scoring and next-tier recommendations.

mod engine;
mod tier;

pub use engine::{recommend, Recommendation, RiskEngine, RiskReport, TierProjection};
pub use tier::{RiskLevel, TierBoundaries, TierRange};
