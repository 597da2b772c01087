//! Language registry: single source of truth for all supported languages.
//!
//! The set is closed. Anything not listed here is rejected by
//! `Language::from_code`.

use std::sync::OnceLock;

/// Metadata for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "zh")
    pub code: &'static str,

    /// English name of the language, as listed in the translation target picker
    pub name: &'static str,

    /// Native label shown in the header language selector
    pub native_name: &'static str,

    /// Whether this is the default UI language and the fallback for missing content
    pub is_default: bool,
}

/// Registry of all supported languages.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language exists
    /// * `None` if the code is not part of the supported set
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// All languages, in selector order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// The default language configuration.
    ///
    /// # Panics
    /// Panics if the table does not define exactly one default language. The
    /// table is static, so this is caught by the tests below.
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self.languages.iter().filter(|lang| lang.is_default).collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: true,
        },
        LanguageConfig {
            code: "zh",
            name: "Chinese",
            native_name: "中文",
            is_default: false,
        },
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: false,
        },
        LanguageConfig {
            code: "fr",
            name: "French",
            native_name: "Français",
            is_default: false,
        },
        LanguageConfig {
            code: "de",
            name: "German",
            native_name: "Deutsch",
            is_default: false,
        },
        LanguageConfig {
            code: "ja",
            name: "Japanese",
            native_name: "日本語",
            is_default: false,
        },
        LanguageConfig {
            code: "ko",
            name: "Korean",
            native_name: "한국어",
            is_default: false,
        },
    ]
}
