//! PII categories reported by the assessment backend and the assessment record itself.

mod assessment;

pub use assessment::AssessmentResult;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Closed set of PII categories the backend searches for.
///
/// Serialized with the backend's display names (`"Birth Place"`, `"Passport #"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PiiCategory {
    Name,
    Address,
    #[serde(alias = "DOB")]
    DoB,
    #[serde(rename = "Birth Place")]
    BirthPlace,
    Email,
    Phone,
    #[serde(rename = "Business Phone", alias = "Business Phone:")]
    BusinessPhone,
    #[serde(rename = "Facebook Account")]
    FacebookAccount,
    #[serde(rename = "Twitter Account")]
    TwitterAccount,
    #[serde(rename = "Instagram Account")]
    InstagramAccount,
    #[serde(rename = "DDL")]
    Ddl,
    #[serde(rename = "Passport #", alias = "Passport")]
    Passport,
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "SSN")]
    Ssn,
    Gender,
    Education,
    Employer,
    Location,
    #[serde(rename = "Personal Cell")]
    PersonalCell,
}

impl PiiCategory {
    pub const ALL: [PiiCategory; 19] = [
        PiiCategory::Name,
        PiiCategory::Address,
        PiiCategory::DoB,
        PiiCategory::BirthPlace,
        PiiCategory::Email,
        PiiCategory::Phone,
        PiiCategory::BusinessPhone,
        PiiCategory::FacebookAccount,
        PiiCategory::TwitterAccount,
        PiiCategory::InstagramAccount,
        PiiCategory::Ddl,
        PiiCategory::Passport,
        PiiCategory::CreditCard,
        PiiCategory::Ssn,
        PiiCategory::Gender,
        PiiCategory::Education,
        PiiCategory::Employer,
        PiiCategory::Location,
        PiiCategory::PersonalCell,
    ];

    /// Backend display name.
    pub fn as_str(self) -> &'static str {
        match self {
            PiiCategory::Name => "Name",
            PiiCategory::Address => "Address",
            PiiCategory::DoB => "DoB",
            PiiCategory::BirthPlace => "Birth Place",
            PiiCategory::Email => "Email",
            PiiCategory::Phone => "Phone",
            PiiCategory::BusinessPhone => "Business Phone",
            PiiCategory::FacebookAccount => "Facebook Account",
            PiiCategory::TwitterAccount => "Twitter Account",
            PiiCategory::InstagramAccount => "Instagram Account",
            PiiCategory::Ddl => "DDL",
            PiiCategory::Passport => "Passport #",
            PiiCategory::CreditCard => "Credit Card",
            PiiCategory::Ssn => "SSN",
            PiiCategory::Gender => "Gender",
            PiiCategory::Education => "Education",
            PiiCategory::Employer => "Employer",
            PiiCategory::Location => "Location",
            PiiCategory::PersonalCell => "Personal Cell",
        }
    }

    /// Phone is never recommended; Personal Cell and Business Phone already cover it.
    pub fn is_recommendable(self) -> bool {
        self != PiiCategory::Phone
    }
}

impl fmt::Display for PiiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown PII category: {0:?}")]
pub struct UnknownCategory(pub String);

impl FromStr for PiiCategory {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        if let Some(c) = PiiCategory::ALL.iter().find(|c| c.as_str() == key) {
            return Ok(*c);
        }
        // Spellings seen in extractor prompts and older client tables
        match key {
            "DOB" => Ok(PiiCategory::DoB),
            "Passport" => Ok(PiiCategory::Passport),
            "Business Phone:" => Ok(PiiCategory::BusinessPhone),
            _ => Err(UnknownCategory(key.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_parse_back() {
        for c in PiiCategory::ALL {
            assert_eq!(c.as_str().parse::<PiiCategory>().unwrap(), c);
        }
    }

    #[test]
    fn aliases_and_unknown() {
        assert_eq!("DOB".parse::<PiiCategory>().unwrap(), PiiCategory::DoB);
        assert_eq!("Passport".parse::<PiiCategory>().unwrap(), PiiCategory::Passport);
        assert_eq!(
            "Business Phone:".parse::<PiiCategory>().unwrap(),
            PiiCategory::BusinessPhone
        );
        assert!("Shoe Size".parse::<PiiCategory>().is_err());
    }

    #[test]
    fn serde_uses_display_names() {
        let json = serde_json::to_string(&PiiCategory::BirthPlace).unwrap();
        assert_eq!(json, r#""Birth Place""#);
        let c: PiiCategory = serde_json::from_str(r#""Passport #""#).unwrap();
        assert_eq!(c, PiiCategory::Passport);
    }
}
