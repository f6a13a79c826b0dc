//! Assessment result as returned by the extract endpoint.
//!
//! The backend sends one flat JSON object: a key per PII category holding the values found,
//! plus `risk_score` and `risk_level`. An empty list means the category was searched for and
//! nothing was found.

use super::PiiCategory;
use crate::error::RiskError;
use crate::risk::RiskLevel;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "RawAssessment", into = "RawAssessment")]
pub struct AssessmentResult {
    pub risk_score: f64,
    /// Tier name as received; parsed lazily so an unrecognised tier can be reported.
    pub risk_level: String,
    pub fields: BTreeMap<PiiCategory, Vec<String>>,
}

#[derive(Serialize, Deserialize)]
struct RawAssessment {
    #[serde(default)]
    risk_score: f64,
    #[serde(default)]
    risk_level: String,
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

fn values_of(v: Value) -> Vec<String> {
    match v {
        Value::Null => Vec::new(),
        Value::String(s) => {
            if s.trim().is_empty() {
                Vec::new()
            } else {
                vec![s]
            }
        }
        Value::Array(items) => items.into_iter().flat_map(values_of).collect(),
        Value::Object(map) => map.into_iter().flat_map(|(_, v)| values_of(v)).collect(),
        other => vec![other.to_string()],
    }
}

impl From<RawAssessment> for AssessmentResult {
    fn from(raw: RawAssessment) -> Self {
        let mut fields = BTreeMap::new();
        for (key, value) in raw.rest {
            match key.parse::<PiiCategory>() {
                Ok(category) => {
                    fields.entry(category).or_insert_with(Vec::new).extend(values_of(value));
                }
                Err(_) => tracing::debug!(key = %key, "ignoring non-PII key in assessment"),
            }
        }
        Self {
            risk_score: raw.risk_score,
            risk_level: raw.risk_level,
            fields,
        }
    }
}

impl From<AssessmentResult> for RawAssessment {
    fn from(result: AssessmentResult) -> Self {
        let rest = result
            .fields
            .into_iter()
            .map(|(c, values)| {
                (
                    c.as_str().to_string(),
                    Value::Array(values.into_iter().map(Value::String).collect()),
                )
            })
            .collect();
        Self {
            risk_score: result.risk_score,
            risk_level: result.risk_level,
            rest,
        }
    }
}

impl AssessmentResult {
    pub fn new(risk_level: impl Into<String>, risk_score: f64) -> Self {
        Self {
            risk_score,
            risk_level: risk_level.into(),
            fields: BTreeMap::new(),
        }
    }

    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(data)
    }

    /// Builder-style setter used by tests and offline assessments.
    pub fn with_field<I, S>(mut self, category: PiiCategory, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .insert(category, values.into_iter().map(Into::into).collect());
        self
    }

    pub fn level(&self) -> Result<RiskLevel, RiskError> {
        self.risk_level.parse()
    }

    pub fn is_disclosed(&self, category: PiiCategory) -> bool {
        self.fields.get(&category).is_some_and(|v| !v.is_empty())
    }

    /// Categories searched for but not found.
    pub fn undisclosed(&self) -> impl Iterator<Item = PiiCategory> + '_ {
        self.fields
            .iter()
            .filter(|(_, v)| v.is_empty())
            .map(|(c, _)| *c)
    }

    pub fn disclosed(&self) -> impl Iterator<Item = PiiCategory> + '_ {
        self.fields
            .iter()
            .filter(|(_, v)| !v.is_empty())
            .map(|(c, _)| *c)
    }
}
