//! Risk tiers and the score ranges that partition them.

use crate::error::{ConfigError, RiskError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    VeryLow,
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const ORDERED: [RiskLevel; 5] = [
        RiskLevel::VeryLow,
        RiskLevel::Low,
        RiskLevel::Medium,
        RiskLevel::High,
        RiskLevel::Critical,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            RiskLevel::VeryLow => "very_low",
            RiskLevel::Low => "low",
            RiskLevel::Medium => "medium",
            RiskLevel::High => "high",
            RiskLevel::Critical => "critical",
        }
    }

    /// Next tier up; `None` at the top.
    pub fn next(self) -> Option<RiskLevel> {
        let idx = RiskLevel::ORDERED.iter().position(|l| *l == self)?;
        RiskLevel::ORDERED.get(idx + 1).copied()
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Accepts the backend's spellings ("Very Low", "very_low", "HIGH"); "very high" is the
/// backend's name for the top tier.
impl FromStr for RiskLevel {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .to_lowercase()
            .replace(['_', '-'], " ")
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ");
        match normalized.as_str() {
            "very low" => Ok(RiskLevel::VeryLow),
            "low" => Ok(RiskLevel::Low),
            "medium" => Ok(RiskLevel::Medium),
            "high" => Ok(RiskLevel::High),
            "critical" | "very high" => Ok(RiskLevel::Critical),
            _ => Err(RiskError::UnknownTier(s.to_string())),
        }
    }
}

/// One tier's score range: `lower < score <= upper`; `upper: None` is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierRange {
    pub level: RiskLevel,
    pub lower: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upper: Option<f64>,
}

impl TierRange {
    pub fn contains(&self, score: f64) -> bool {
        score > self.lower && self.upper.map_or(true, |u| score <= u)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierBoundaries {
    pub ranges: Vec<TierRange>,
    /// Level reported when nothing at all was disclosed (score 0).
    #[serde(default = "default_no_exposure_level")]
    pub no_exposure_level: RiskLevel,
}

fn default_no_exposure_level() -> RiskLevel {
    RiskLevel::Low
}

impl Default for TierBoundaries {
    fn default() -> Self {
        let range = |level, lower, upper| TierRange { level, lower, upper };
        Self {
            ranges: vec![
                range(RiskLevel::VeryLow, 0.0, Some(2.74)),
                range(RiskLevel::Low, 2.74, Some(5.48)),
                range(RiskLevel::Medium, 5.48, Some(6.87)),
                range(RiskLevel::High, 6.87, Some(12.25)),
                range(RiskLevel::Critical, 12.25, None),
            ],
            no_exposure_level: default_no_exposure_level(),
        }
    }
}

impl TierBoundaries {
    /// Ranges must cover every tier in order, be contiguous, and leave only the top one open.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let invalid = |msg: String| Err(ConfigError::InvalidBoundaries(msg));
        if self.ranges.len() != RiskLevel::ORDERED.len() {
            return invalid(format!(
                "expected {} ranges, got {}",
                RiskLevel::ORDERED.len(),
                self.ranges.len()
            ));
        }
        for (range, level) in self.ranges.iter().zip(RiskLevel::ORDERED) {
            if range.level != level {
                return invalid(format!("expected {} range, got {}", level, range.level));
            }
            if !range.lower.is_finite() {
                return invalid(format!("{} lower bound is not finite", level));
            }
            if let Some(upper) = range.upper {
                if !upper.is_finite() || upper <= range.lower {
                    return invalid(format!("{} upper bound must exceed its lower bound", level));
                }
            }
        }
        for pair in self.ranges.windows(2) {
            match pair[0].upper {
                Some(upper) if upper == pair[1].lower => {}
                Some(_) => {
                    return invalid(format!(
                        "{} and {} ranges are not contiguous",
                        pair[0].level, pair[1].level
                    ))
                }
                None => return invalid(format!("only the top tier may be unbounded, not {}", pair[0].level)),
            }
        }
        if self.ranges.last().and_then(|r| r.upper).is_some() {
            return invalid("top tier must be unbounded".to_string());
        }
        Ok(())
    }

    pub fn classify(&self, score: f64) -> RiskLevel {
        match self.ranges.first() {
            Some(first) if score > first.lower => self
                .ranges
                .iter()
                .find(|r| r.contains(score))
                .or_else(|| self.ranges.last())
                .map_or(self.no_exposure_level, |r| r.level),
            _ => self.no_exposure_level,
        }
    }

    /// Exclusive lower bound of a tier: a score must exceed it to be in the tier.
    pub fn lower_bound(&self, level: RiskLevel) -> Option<f64> {
        self.ranges.iter().find(|r| r.level == level).map(|r| r.lower)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_backend_spellings() {
        assert_eq!("Very Low".parse::<RiskLevel>().unwrap(), RiskLevel::VeryLow);
        assert_eq!("very_low".parse::<RiskLevel>().unwrap(), RiskLevel::VeryLow);
        assert_eq!("LOW".parse::<RiskLevel>().unwrap(), RiskLevel::Low);
        assert_eq!("Very High".parse::<RiskLevel>().unwrap(), RiskLevel::Critical);
        assert_eq!("critical".parse::<RiskLevel>().unwrap(), RiskLevel::Critical);
    }

    #[test]
    fn unknown_tier() {
        assert_eq!(
            "extreme".parse::<RiskLevel>(),
            Err(RiskError::UnknownTier("extreme".to_string()))
        );
    }

    #[test]
    fn next_walks_up_and_stops() {
        assert_eq!(RiskLevel::Low.next(), Some(RiskLevel::Medium));
        assert_eq!(RiskLevel::High.next(), Some(RiskLevel::Critical));
        assert_eq!(RiskLevel::Critical.next(), None);
    }

    #[test]
    fn classify_boundaries_are_upper_inclusive() {
        let t = TierBoundaries::default();
        assert!(t.validate().is_ok());
        assert_eq!(t.classify(0.0), RiskLevel::Low);
        assert_eq!(t.classify(0.5), RiskLevel::VeryLow);
        assert_eq!(t.classify(2.74), RiskLevel::VeryLow);
        assert_eq!(t.classify(2.75), RiskLevel::Low);
        assert_eq!(t.classify(5.48), RiskLevel::Low);
        assert_eq!(t.classify(6.0), RiskLevel::Medium);
        assert_eq!(t.classify(12.25), RiskLevel::High);
        assert_eq!(t.classify(40.0), RiskLevel::Critical);
    }

    #[test]
    fn lower_bounds() {
        let t = TierBoundaries::default();
        assert_eq!(t.lower_bound(RiskLevel::Medium), Some(5.48));
        assert_eq!(t.lower_bound(RiskLevel::Critical), Some(12.25));
    }

    #[test]
    fn rejects_gaps_and_bounded_top() {
        let mut t = TierBoundaries::default();
        t.ranges[2].lower = 5.6;
        assert!(matches!(t.validate(), Err(ConfigError::InvalidBoundaries(_))));

        let mut t = TierBoundaries::default();
        t.ranges[4].upper = Some(100.0);
        assert!(t.validate().is_err());

        let mut t = TierBoundaries::default();
        t.ranges.swap(0, 1);
        assert!(t.validate().is_err());
    }
}
