use serde::{Deserialize, Serialize};

/// UI language. Portuguese is the default, Spanish the alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Pt,
    Es,
}

impl Language {
    pub fn code(&self) -> &'static str {
        match self {
            Language::Pt => "pt",
            Language::Es => "es",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "pt" => Some(Language::Pt),
            "es" => Some(Language::Es),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Language::Pt => Language::Es,
            Language::Es => Language::Pt,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_and_toggle() {
        assert_eq!(Language::from_code(" ES "), Some(Language::Es));
        assert_eq!(Language::from_code("en"), None);
        assert_eq!(Language::Pt.toggled(), Language::Es);
        assert_eq!(Language::Es.toggled().code(), "pt");
    }
}
