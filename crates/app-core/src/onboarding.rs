//! Language and role choices made during onboarding

use serde::{Deserialize, Serialize};

/// App language
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Language {
    /// English
    #[default]
    #[serde(rename = "en")]
    English,
    /// Hindi
    #[serde(rename = "hi")]
    Hindi,
    /// Tamil
    #[serde(rename = "ta")]
    Tamil,
    /// Telugu
    #[serde(rename = "te")]
    Telugu,
}

impl Language {
    /// All languages in display order
    pub fn all() -> [Language; 4] {
        [Language::English, Language::Hindi, Language::Tamil, Language::Telugu]
    }

    /// Language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Hindi => "hi",
            Language::Tamil => "ta",
            Language::Telugu => "te",
        }
    }

    /// Name in its own script
    pub fn native_label(&self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Hindi => "हिंदी",
            Language::Tamil => "தமிழ்",
            Language::Telugu => "తెలుగు",
        }
    }
}

/// Business role of the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Posts loads
    Shipper,
    /// Posts trucks
    #[default]
    Supplier,
    /// Posts loads and trucks
    Transporter,
}

impl Role {
    /// All roles in display order
    pub fn all() -> [Role; 3] {
        [Role::Shipper, Role::Supplier, Role::Transporter]
    }

    /// Card title
    pub fn title(&self) -> &'static str {
        match self {
            Role::Shipper => "Shipper",
            Role::Supplier => "Lorry Supplier",
            Role::Transporter => "Transporter",
        }
    }

    /// Card subtitle
    pub fn subtitle(&self) -> &'static str {
        match self {
            Role::Shipper => "Post Load",
            Role::Supplier => "Post Truck",
            Role::Transporter => "Post Loads & Trucks",
        }
    }
}

/// Choices collected on the language and role screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct OnboardingChoices {
    /// Selected language
    pub language: Language,
    /// Selected role
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let choices = OnboardingChoices::default();
        assert_eq!(choices.language, Language::English);
        assert_eq!(choices.role, Role::Supplier);
        assert_eq!(choices.role.title(), "Lorry Supplier");
    }

    #[test]
    fn test_language_codes_serialize() {
        let codes: Vec<_> = Language::all().iter().map(|l| l.code()).collect();
        assert_eq!(codes, vec!["en", "hi", "ta", "te"]);
        assert_eq!(serde_json::to_string(&Language::Tamil).unwrap(), "\"ta\"");
    }

    #[test]
    fn test_role_cards() {
        let subtitles: Vec<_> = Role::all().iter().map(|r| r.subtitle()).collect();
        assert_eq!(subtitles, vec!["Post Load", "Post Truck", "Post Loads & Trucks"]);
    }
}
