use serde::{Deserialize, Serialize};


#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Ar,
}

impl Language {

    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ar => "ar",
        }
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "ar" => Self::Ar,
            _ => Self::En,
        }
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Self::from(s.as_str())
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_from_str() {
        assert_eq!(Language::from("ar"), Language::Ar);
        assert_eq!(Language::from("AR"), Language::Ar);
        assert_eq!(Language::from("en"), Language::En);
    }

    #[test]
    fn test_language_defaults_to_english() {
        assert_eq!(Language::from("fr"), Language::En);
        assert_eq!(Language::from(""), Language::En);
        assert_eq!(Language::default(), Language::En);
    }
}
