//! In-memory session: who is signed in and the assessment currently on screen.
//! Nothing here is persisted.

use crate::client::UserProfile;
use crate::error::RiskError;
use crate::pii::AssessmentResult;
use crate::risk::{RiskEngine, RiskReport};

#[derive(Debug, Default)]
pub struct Session {
    user: Option<UserProfile>,
    search_name: Option<String>,
    assessment: Option<AssessmentResult>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, user: UserProfile) {
        self.user = Some(user);
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.user.is_some()
    }

    /// Drops the user and any assessment.
    pub fn logout(&mut self) {
        self.user = None;
        self.search_name = None;
        self.assessment = None;
    }

    /// A new search discards the previous assessment.
    pub fn begin_search(&mut self, name: impl Into<String>) {
        self.search_name = Some(name.into());
        self.assessment = None;
    }

    pub fn search_name(&self) -> Option<&str> {
        self.search_name.as_deref()
    }

    pub fn set_assessment(&mut self, result: AssessmentResult) {
        self.assessment = Some(result);
    }

    pub fn assessment(&self) -> Option<&AssessmentResult> {
        self.assessment.as_ref()
    }

    /// Report for the current assessment. `None` when there is nothing to report on; an error
    /// leaves the session untouched.
    pub fn report(&self, engine: &RiskEngine) -> Option<Result<RiskReport, RiskError>> {
        self.assessment.as_ref().map(|a| engine.report(a))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RiskConfig;
    use crate::pii::PiiCategory;
    use crate::scoring::PiiScoringTable;

    fn user() -> UserProfile {
        UserProfile {
            uid: Some("u1".into()),
            email: "jane@example.com".into(),
            first_name: "Jane".into(),
            last_name: "Roe".into(),
        }
    }

    #[test]
    fn new_search_discards_assessment() {
        let mut s = Session::new();
        s.sign_in(user());
        s.begin_search("Jane Roe");
        s.set_assessment(AssessmentResult::new("low", 3.0));
        assert!(s.assessment().is_some());
        s.begin_search("John Doe");
        assert!(s.assessment().is_none());
        assert_eq!(s.search_name(), Some("John Doe"));
        assert!(s.is_signed_in());
    }

    #[test]
    fn logout_clears_everything() {
        let mut s = Session::new();
        s.sign_in(user());
        s.begin_search("Jane Roe");
        s.set_assessment(AssessmentResult::new("low", 3.0));
        s.logout();
        assert!(s.user().is_none());
        assert!(s.search_name().is_none());
        assert!(s.assessment().is_none());
    }

    #[test]
    fn failed_report_keeps_assessment() {
        let engine = RiskEngine::new(PiiScoringTable::builtin(), RiskConfig::default());
        let mut s = Session::new();
        assert!(s.report(&engine).is_none());
        s.set_assessment(
            AssessmentResult::new("extreme", 3.0).with_field(PiiCategory::Name, Vec::<String>::new()),
        );
        assert!(matches!(s.report(&engine), Some(Err(RiskError::UnknownTier(_)))));
        assert_eq!(s.assessment().unwrap().risk_level, "extreme");
    }
}
