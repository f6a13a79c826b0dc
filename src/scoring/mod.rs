//! Per-category privacy erosion model.
//!
//! privacy_score = 1 / exp(beta * (1 - willingness) * resolution_power)
//! contribution  = weight * privacy_score
//!
//! Categories people rarely share and that pin down an identity decay the score fastest.

mod table;

pub use table::{Calibration, PiiScoringTable};

pub fn privacy_score(willingness: f64, resolution_power: f64, beta: f64) -> f64 {
    1.0 / (beta * (1.0 - willingness) * resolution_power).exp()
}

impl Calibration {
    pub fn privacy_score(&self) -> f64 {
        privacy_score(self.willingness, self.resolution_power, self.beta)
    }

    /// Risk this category adds once disclosed; bounded in (0, weight].
    pub fn contribution(&self) -> f64 {
        self.weight * self.privacy_score()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fully_willing_category_keeps_full_weight() {
        let c = Calibration::new(2.0, 1.0, 0.9, 1.0);
        assert!((c.contribution() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn unwilling_high_resolution_decays() {
        // SSN: weight 10, willingness 0.01, resolution 1.0
        let c = Calibration::new(10.0, 0.01, 1.0, 1.0);
        let expected = 10.0 * (-0.99f64).exp();
        assert!((c.contribution() - expected).abs() < 1e-12);
        assert!(c.contribution() < c.weight);
        assert!(c.contribution() > 0.0);
    }

    #[test]
    fn zero_beta_disables_decay() {
        assert_eq!(privacy_score(0.0, 1.0, 0.0), 1.0);
    }
}
