use serde::{Deserialize, Serialize};

/// Код английского языка. Английское название вводится отдельным
/// обязательным полем, а не в списке переводов.
pub const ENGLISH: &str = "en";

/// Поддерживаемый язык: код + отображаемое название
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Language {
    pub code: String,
    pub name: String,
}

impl Language {
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
        }
    }
}

/// Реестр поддерживаемых языков.
///
/// Передаётся форме как read-only конфигурация. Порядок записей задаёт
/// порядок полей перевода на форме.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
}

impl LanguageRegistry {
    pub fn new(languages: Vec<Language>) -> Self {
        Self { languages }
    }

    /// Стандартный набор языков приложения
    pub fn standard() -> Self {
        Self::new(vec![
            Language::new("en", "English"),
            Language::new("hi", "Hindi"),
            Language::new("bn", "Bengali"),
            Language::new("mr", "Marathi"),
            Language::new("ta", "Tamil"),
            Language::new("te", "Telugu"),
            Language::new("gu", "Gujarati"),
            Language::new("kn", "Kannada"),
            Language::new("ml", "Malayalam"),
        ])
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// Коды языков в порядке реестра
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(|l| l.code.as_str())
    }

    /// Коды для полей перевода: всё, кроме английского
    pub fn translation_codes(&self) -> impl Iterator<Item = &str> {
        self.codes().filter(|code| *code != ENGLISH)
    }

    pub fn contains(&self, code: &str) -> bool {
        self.languages.iter().any(|l| l.code == code)
    }

    /// Отображаемое название языка по коду
    pub fn display_name(&self, code: &str) -> Option<&str> {
        self.languages
            .iter()
            .find(|l| l.code == code)
            .map(|l| l.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_set_starts_with_english() {
        let registry = LanguageRegistry::standard();
        assert_eq!(registry.codes().next(), Some(ENGLISH));
        assert!(registry.contains("hi"));
        assert_eq!(registry.display_name("ta"), Some("Tamil"));
    }

    #[test]
    fn test_translation_codes_exclude_english() {
        let registry = LanguageRegistry::new(vec![
            Language::new("en", "English"),
            Language::new("fr", "French"),
            Language::new("de", "German"),
        ]);
        let codes: Vec<&str> = registry.translation_codes().collect();
        assert_eq!(codes, vec!["fr", "de"]);
    }

    #[test]
    fn test_order_follows_registry() {
        let registry = LanguageRegistry::new(vec![
            Language::new("ta", "Tamil"),
            Language::new("en", "English"),
            Language::new("hi", "Hindi"),
        ]);
        let codes: Vec<&str> = registry.codes().collect();
        assert_eq!(codes, vec!["ta", "en", "hi"]);
    }
}
