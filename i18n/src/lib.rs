/// because of we don't have a lot of resource which need to i18n,
/// so we just use a simple way to i18n
pub mod en_us;
pub mod zh_cn;

use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// i18n language type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LanguageType {
    ZhCN,
    #[default]
    EnUS,
}

impl LanguageType {
    /// value of the radio input for this language
    pub fn from_value(value: &str) -> Option<Self> {
        match value {
            "zh_cn" => Some(LanguageType::ZhCN),
            "en_us" => Some(LanguageType::EnUS),
            _ => None,
        }
    }
}

impl Display for LanguageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LanguageType::ZhCN => write!(f, "zh_cn"),
            LanguageType::EnUS => write!(f, "en_us"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn radio_value_matches_display() {
        for lang in [LanguageType::ZhCN, LanguageType::EnUS] {
            assert_eq!(LanguageType::from_value(&lang.to_string()), Some(lang));
        }
        assert_eq!(LanguageType::from_value("fr_fr"), None);
    }
}
