//! Language type: validated language representation.
//!
//! A `Language` can only be constructed from a code present in the registry,
//! so holding one is proof that the code is supported.

use crate::error::{AppError, AppResult};
use crate::i18n::{LanguageConfig, LanguageRegistry};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "zh")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const CHINESE: Language = Language { code: "zh" };
    pub const SPANISH: Language = Language { code: "es" };
    pub const FRENCH: Language = Language { code: "fr" };
    pub const GERMAN: Language = Language { code: "de" };
    pub const JAPANESE: Language = Language { code: "ja" };
    pub const KOREAN: Language = Language { code: "ko" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is in the supported set
    /// * `Err(AppError::UnsupportedLanguage)` otherwise
    ///
    /// # Example
    /// ```ignore
    /// let french = Language::from_code("fr")?;
    /// ```
    pub fn from_code(code: &str) -> AppResult<Language> {
        match LanguageRegistry::get().get_by_code(code) {
            Some(config) => Ok(Language { code: config.code }),
            None => Err(AppError::UnsupportedLanguage(code.to_string())),
        }
    }

    /// The default UI language, also used as the fallback for missing content.
    pub fn default_language() -> Language {
        let config = LanguageRegistry::get().default_language();
        Language { code: config.code }
    }

    /// Every supported language, in selector order.
    pub fn all() -> Vec<Language> {
        LanguageRegistry::get()
            .list_all()
            .into_iter()
            .map(|config| Language { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the code is not in the registry. This cannot happen for a
    /// `Language` built through `from_code` or the constants.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// English name of the language (e.g., "French").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Native label of the language (e.g., "Français").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_default(&self) -> bool {
        self.config().is_default
    }
}

impl Default for Language {
    fn default() -> Self {
        Language::default_language()
    }
}

impl FromStr for Language {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code)
    }
}

impl Serialize for Language {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.code)
    }
}
