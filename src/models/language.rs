use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::utils::digits::Script;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Bn,
}

impl Language {
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Bn => "bn",
        }
    }

    pub fn script(&self) -> Script {
        match self {
            Language::En => Script::Latin,
            Language::Bn => Script::Bengali,
        }
    }

    pub fn toggled(&self) -> Language {
        match self {
            Language::En => Language::Bn,
            Language::Bn => Language::En,
        }
    }

    /// Pick the variant of a bilingual string pair.
    pub fn pick<'a>(&self, en: &'a str, bn: &'a str) -> &'a str {
        match self {
            Language::En => en,
            Language::Bn => bn,
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "en" | "english" => Ok(Language::En),
            "bn" | "bangla" | "bengali" => Ok(Language::Bn),
            _ => Err(anyhow::anyhow!("Unknown language: {}", s)),
        }
    }
}

/// A string available in both supported languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bilingual {
    pub en: &'static str,
    pub bn: &'static str,
}

impl Bilingual {
    pub const fn new(en: &'static str, bn: &'static str) -> Self {
        Self { en, bn }
    }

    pub fn get(&self, language: Language) -> &'static str {
        match language {
            Language::En => self.en,
            Language::Bn => self.bn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_codes_and_names() {
        assert_eq!("bn".parse::<Language>().unwrap(), Language::Bn);
        assert_eq!("English".parse::<Language>().unwrap(), Language::En);
        assert!("fr".parse::<Language>().is_err());
    }

    #[test]
    fn script_follows_language() {
        assert_eq!(Language::En.script(), Script::Latin);
        assert_eq!(Language::Bn.script(), Script::Bengali);
        assert_eq!(Language::Bn.toggled(), Language::En);
    }
}
