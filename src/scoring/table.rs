//! Static calibration table: weight, willingness, resolution power and beta per category.

use crate::error::{ConfigError, RiskError};
use crate::pii::PiiCategory;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    /// Contribution to overall risk when disclosed
    pub weight: f64,
    /// Population willingness to disclose, in [0, 1]
    #[serde(alias = "willingness_measure")]
    pub willingness: f64,
    /// How strongly the category narrows down an individual
    pub resolution_power: f64,
    #[serde(alias = "beta_coefficient", default = "default_beta")]
    pub beta: f64,
}

fn default_beta() -> f64 {
    1.0
}

impl Calibration {
    pub const fn new(weight: f64, willingness: f64, resolution_power: f64, beta: f64) -> Self {
        Self {
            weight,
            willingness,
            resolution_power,
            beta,
        }
    }

    fn check(&self, category: PiiCategory) -> Result<(), ConfigError> {
        let invalid = |reason: &str| ConfigError::InvalidCalibration {
            category,
            reason: reason.to_string(),
        };
        let values = [self.weight, self.willingness, self.resolution_power, self.beta];
        if values.iter().any(|v| !v.is_finite()) {
            return Err(invalid("values must be finite"));
        }
        if !(0.0..=1.0).contains(&self.willingness) {
            return Err(invalid("willingness must be within [0, 1]"));
        }
        if self.weight < 0.0 || self.resolution_power < 0.0 || self.beta < 0.0 {
            return Err(invalid("weight, resolution_power and beta must be non-negative"));
        }
        Ok(())
    }
}

/// Read-only after load; shared by reference with the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PiiScoringTable {
    entries: BTreeMap<PiiCategory, Calibration>,
}

impl Default for PiiScoringTable {
    fn default() -> Self {
        Self::builtin()
    }
}

impl FromIterator<(PiiCategory, Calibration)> for PiiScoringTable {
    fn from_iter<T: IntoIterator<Item = (PiiCategory, Calibration)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl PiiScoringTable {
    /// Calibration used by the assessment backend. Phone is deliberately absent.
    pub fn builtin() -> Self {
        use PiiCategory::*;
        [
            (Name, Calibration::new(1.0, 1.0, 0.1, 1.0)),
            (Address, Calibration::new(1.0, 0.1, 0.3, 1.0)),
            (Location, Calibration::new(1.0, 0.1, 0.1, 1.0)),
            (Gender, Calibration::new(1.0, 0.98, 0.1, 1.0)),
            (Employer, Calibration::new(2.0, 0.5, 0.2, 1.0)),
            (DoB, Calibration::new(2.0, 0.83, 0.7, 1.0)),
            (Education, Calibration::new(1.0, 0.8, 0.3, 1.0)),
            (BirthPlace, Calibration::new(2.0, 0.2, 0.5, 1.0)),
            (PersonalCell, Calibration::new(0.5, 0.16, 0.9, 1.0)),
            (Email, Calibration::new(0.1, 0.7, 0.95, 1.0)),
            (BusinessPhone, Calibration::new(0.1, 0.4, 0.4, 1.0)),
            (FacebookAccount, Calibration::new(1.0, 0.9, 0.8, 1.0)),
            (TwitterAccount, Calibration::new(0.1, 0.9, 0.8, 1.0)),
            (InstagramAccount, Calibration::new(0.1, 0.9, 0.8, 1.0)),
            (Ddl, Calibration::new(2.0, 0.2, 1.0, 1.0)),
            (Passport, Calibration::new(2.0, 0.05, 1.0, 1.0)),
            (CreditCard, Calibration::new(2.0, 0.02, 1.0, 1.0)),
            (Ssn, Calibration::new(10.0, 0.01, 1.0, 1.0)),
        ]
        .into_iter()
        .collect()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let data = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table: Self = serde_json::from_str(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        table.validate()?;
        Ok(table)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.entries.iter().try_for_each(|(c, cal)| cal.check(*c))
    }

    pub fn get(&self, category: PiiCategory) -> Option<&Calibration> {
        self.entries.get(&category)
    }

    /// Lookup that refuses to default: a missing entry would hide risk.
    pub fn calibration(&self, category: PiiCategory) -> Result<&Calibration, RiskError> {
        self.get(category)
            .ok_or(RiskError::MissingCalibrationData(category))
    }

    pub fn insert(&mut self, category: PiiCategory, calibration: Calibration) {
        self.entries.insert(category, calibration);
    }

    pub fn remove(&mut self, category: PiiCategory) -> Option<Calibration> {
        self.entries.remove(&category)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
