//! Risk-delta recommendations: which undisclosed categories would raise the user's risk, and by
//! how much, ordered cheapest first.

use super::tier::{RiskLevel, TierBoundaries};
use crate::config::RiskConfig;
use crate::error::RiskError;
use crate::pii::{AssessmentResult, PiiCategory};
use crate::scoring::PiiScoringTable;
use serde::Serialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub category: PiiCategory,
    /// Risk the category would add if disclosed
    pub score: f64,
}

/// Score every undisclosed, non-Phone category of `result` and order them by ascending
/// contribution, ties broken by category name.
///
/// Fails on an unrecognised risk tier, or when any category present in the result (Phone
/// aside) has no calibration in `table`.
pub fn recommend(
    result: &AssessmentResult,
    table: &PiiScoringTable,
) -> Result<Vec<Recommendation>, RiskError> {
    result.level()?;

    for category in result.fields.keys().copied().filter(|c| c.is_recommendable()) {
        table.calibration(category)?;
    }

    let mut out = result
        .undisclosed()
        .filter(|c| c.is_recommendable())
        .map(|category| {
            Ok(Recommendation {
                category,
                score: table.calibration(category)?.contribution(),
            })
        })
        .collect::<Result<Vec<_>, RiskError>>()?;

    out.sort_by(|a, b| {
        a.score
            .total_cmp(&b.score)
            .then_with(|| a.category.as_str().cmp(b.category.as_str()))
    });
    Ok(out)
}

/// How far the user is from the next tier, walking the recommendations in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierProjection {
    pub current: RiskLevel,
    pub next_level: Option<RiskLevel>,
    /// Score that must be exceeded to enter `next_level`
    pub threshold: Option<f64>,
    /// Leading recommendations whose combined disclosure crosses the threshold
    pub needed: Vec<Recommendation>,
    pub reachable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskReport {
    pub risk_score: f64,
    pub level: RiskLevel,
    pub next_level: Option<RiskLevel>,
    pub recommendations: Vec<Recommendation>,
    pub projection: TierProjection,
}

pub struct RiskEngine {
    table: PiiScoringTable,
    tiers: TierBoundaries,
}

impl RiskEngine {
    pub fn new(table: PiiScoringTable, config: RiskConfig) -> Self {
        Self {
            table,
            tiers: config.boundaries,
        }
    }

    pub fn table(&self) -> &PiiScoringTable {
        &self.table
    }

    pub fn tiers(&self) -> &TierBoundaries {
        &self.tiers
    }

    pub fn recommend(&self, result: &AssessmentResult) -> Result<Vec<Recommendation>, RiskError> {
        recommend(result, &self.table)
    }

    /// Overall risk of what has been disclosed: the sum of each disclosed category's
    /// contribution. Phone counts only when the table calibrates it.
    pub fn risk_score(&self, fields: &BTreeMap<PiiCategory, Vec<String>>) -> Result<f64, RiskError> {
        let mut total = 0.0;
        for (category, values) in fields {
            if values.is_empty() {
                continue;
            }
            match self.table.get(*category) {
                Some(cal) => total += cal.contribution(),
                None if !category.is_recommendable() => {}
                None => return Err(RiskError::MissingCalibrationData(*category)),
            }
        }
        Ok(total)
    }

    /// Build an assessment locally from extracted fields.
    pub fn assess(
        &self,
        fields: BTreeMap<PiiCategory, Vec<String>>,
    ) -> Result<AssessmentResult, RiskError> {
        let risk_score = self.risk_score(&fields)?;
        let level = self.tiers.classify(risk_score);
        Ok(AssessmentResult {
            risk_score,
            risk_level: level.as_str().to_string(),
            fields,
        })
    }

    pub fn project(
        &self,
        result: &AssessmentResult,
        recommendations: &[Recommendation],
    ) -> Result<TierProjection, RiskError> {
        let current = result.level()?;
        let next_level = current.next();
        let threshold = next_level.and_then(|l| self.tiers.lower_bound(l));

        let mut projection = TierProjection {
            current,
            next_level,
            threshold,
            needed: Vec::new(),
            reachable: false,
        };
        let Some(threshold) = threshold else {
            return Ok(projection);
        };
        if result.risk_score > threshold {
            projection.reachable = true;
            return Ok(projection);
        }

        let mut total = result.risk_score;
        for rec in recommendations {
            projection.needed.push(rec.clone());
            total += rec.score;
            if total > threshold {
                projection.reachable = true;
                break;
            }
        }
        Ok(projection)
    }

    pub fn report(&self, result: &AssessmentResult) -> Result<RiskReport, RiskError> {
        let level = result.level()?;
        let recommendations = self.recommend(result)?;
        let projection = self.project(result, &recommendations)?;
        tracing::debug!(
            level = %level,
            candidates = recommendations.len(),
            reachable = projection.reachable,
            "risk report built"
        );
        Ok(RiskReport {
            risk_score: result.risk_score,
            level,
            next_level: level.next(),
            recommendations,
            projection,
        })
    }
}
