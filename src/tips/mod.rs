//! Privacy tips shown while an assessment is running.

mod rotator;
mod ticker;

pub use rotator::{RotatorState, TipRotator, NOT_READY};
pub use ticker::TipTicker;

const DEFAULT_TIPS: [&str; 30] = [
    "Set your social media profiles to private to limit public access.",
    "Avoid sharing your real birthdate, phone number, or home address online.",
    "Disable location tagging on posts to prevent real-time tracking.",
    "Be cautious when sharing vacation or travel plans publicly.",
    "Use a fake birthdate or partial information to protect identity theft risks.",
    "Avoid posting photos that include sensitive documents or credit cards.",
    "Regularly review and delete old posts that may contain personal details.",
    "Limit the amount of personal information shared in bio sections.",
    "Use different usernames for different platforms to prevent tracking.",
    "Be selective when accepting friend or follower requests from unknown people.",
    "Disable facial recognition settings in social media apps.",
    "Use a burner email for sign-ups instead of your primary email.",
    "Turn off ad personalization to limit data tracking by social platforms.",
    "Revoke permissions for third-party apps linked to your social media accounts.",
    "Avoid participating in viral quizzes or challenges that ask personal questions.",
    "Use encrypted messaging services instead of social media DMs for sensitive communication.",
    "Be mindful of metadata in uploaded photos, such as EXIF data that contains location details.",
    "Use a VPN when accessing social media on public networks to protect your IP address.",
    "Regularly check and update your privacy settings as platforms change their policies.",
    "Opt out of data-sharing settings that allow social media platforms to sell your data.",
    "Do not share your workplace or school details publicly.",
    "Limit the visibility of your friend list to prevent targeted phishing attacks.",
    "Turn off read receipts and last seen indicators on messaging apps.",
    "Be cautious about tagging locations in posts until after you leave the place.",
    "Do not share screenshots of private messages that may reveal sensitive data.",
    "Regularly review and remove apps that have access to your social media accounts.",
    "Do not post photos of your home's exterior or address details.",
    "Use two-factor authentication (2FA) to secure your social media accounts.",
    "Report and block suspicious accounts that try to gather personal details from you.",
    "Avoid linking all your social media accounts publicly to reduce data correlation risks.",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TipCatalog {
    tips: Vec<String>,
}

impl Default for TipCatalog {
    fn default() -> Self {
        Self {
            tips: DEFAULT_TIPS.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl TipCatalog {
    /// Custom tips, falling back to the built-in set when `tips` is empty.
    pub fn from_custom(tips: Vec<String>) -> Self {
        if tips.is_empty() {
            Self::default()
        } else {
            Self { tips }
        }
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.tips.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tips.is_empty()
    }
}
