//! Bundle completeness validation.
//!
//! Checks every authored bundle for empty required strings, and checks that
//! translations keep the `{placeholder}` tokens of the default-language text.

use crate::i18n::resolver::{ContentResolver, PageBundle};
use crate::i18n::strings::{
    AboutStrings, AlertVocabulary, CalorieStrings, ErrorStrings, HeaderStrings, HomeStrings,
    NavigationStrings, TranslationStrings,
};
use crate::i18n::Language;
use regex::Regex;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about localized content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Empty required fields: these would render as blank UI
    pub errors: Vec<String>,

    /// Placeholder mismatches between a translation and the default text
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }

    fn merge(&mut self, other: ValidationReport) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

pub struct BundleValidator;

static PLACEHOLDER_REGEX: OnceLock<Regex> = OnceLock::new();

impl BundleValidator {
    /// Validate every page table in the crate.
    pub fn validate_all() -> ValidationReport {
        let mut report = ValidationReport::new();
        report.merge(Self::validate_page::<HeaderStrings>());
        report.merge(Self::validate_page::<HomeStrings>());
        report.merge(Self::validate_page::<TranslationStrings>());
        report.merge(Self::validate_page::<CalorieStrings>());
        report.merge(Self::validate_page::<NavigationStrings>());
        report.merge(Self::validate_page::<AboutStrings>());
        report.merge(Self::validate_page::<ErrorStrings>());
        report.merge(Self::validate_page::<AlertVocabulary>());
        report
    }

    /// Validate every authored language of one page.
    pub fn validate_page<B: PageBundle>() -> ValidationReport {
        let mut report = ValidationReport::new();
        let reference = B::default_bundle().fields();

        for language in ContentResolver::authored_languages::<B>() {
            let Some(bundle) = B::authored(language) else {
                continue;
            };
            let fields = bundle.fields();
            report.merge(Self::validate_fields(B::PAGE.as_str(), language, &fields));

            if language != Language::default_language() {
                report.merge(Self::compare_placeholders(
                    B::PAGE.as_str(),
                    language,
                    &reference,
                    &fields,
                ));
            }
        }

        report
    }

    fn validate_fields(
        page: &str,
        language: Language,
        fields: &[(&'static str, &'static str)],
    ) -> ValidationReport {
        let mut report = ValidationReport::new();
        for (name, value) in fields {
            if value.trim().is_empty() {
                report
                    .errors
                    .push(format!("{}/{}: field '{}' is empty", page, language, name));
            }
        }
        report
    }

    fn compare_placeholders(
        page: &str,
        language: Language,
        reference: &[(&'static str, &'static str)],
        translated: &[(&'static str, &'static str)],
    ) -> ValidationReport {
        let mut report = ValidationReport::new();
        for ((name, original), (_, translation)) in reference.iter().zip(translated) {
            let expected = Self::extract_placeholders(original);
            let found = Self::extract_placeholders(translation);
            if expected != found {
                report.warnings.push(format!(
                    "{}/{}: placeholder mismatch in '{}': default has {:?}, translation has {:?}",
                    page, language, name, expected, found
                ));
            }
        }
        report
    }

    /// Extract `{name}` tokens in order of appearance.
    fn extract_placeholders(text: &str) -> Vec<String> {
        let regex = PLACEHOLDER_REGEX.get_or_init(|| {
            Regex::new(r"\{([A-Za-z0-9_]+)\}").expect("placeholder pattern is valid")
        });

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Placeholder Extraction Tests ====================

    #[test]
    fn test_extract_placeholders_single() {
        let found = BundleValidator::extract_placeholders("Unsupported language: {code}");
        assert_eq!(found, vec!["{code}"]);
    }

    #[test]
    fn test_extract_placeholders_multiple() {
        let found = BundleValidator::extract_placeholders("{sent} of {total}");
        assert_eq!(found, vec!["{sent}", "{total}"]);
    }

    #[test]
    fn test_extract_placeholders_ignores_non_identifiers() {
        assert!(BundleValidator::extract_placeholders("a { b } c").is_empty());
        assert!(BundleValidator::extract_placeholders("unclosed {code").is_empty());
        assert!(BundleValidator::extract_placeholders("").is_empty());
    }

    #[test]
    fn test_extract_placeholders_after_stray_brace() {
        let found = BundleValidator::extract_placeholders("Retry {a {code}");
        assert_eq!(found, vec!["{code}"]);

        let nested = BundleValidator::extract_placeholders("{{name}} and {x y} {count}");
        assert_eq!(nested, vec!["{name}", "{count}"]);
    }

    // ==================== Field Validation Tests ====================

    #[test]
    fn test_validate_fields_reports_empty() {
        let fields = [("title", "Hello"), ("subtitle", "   ")];
        let report = BundleValidator::validate_fields("demo", Language::ENGLISH, &fields);

        assert_eq!(report.errors.len(), 1);
        assert!(report.errors[0].contains("demo/en"));
        assert!(report.errors[0].contains("subtitle"));
    }

    #[test]
    fn test_compare_placeholders_reports_missing() {
        let reference = [("message", "Unsupported language: {code}")];
        let translated = [("message", "不支持的语言")];
        let report = BundleValidator::compare_placeholders(
            "errors",
            Language::CHINESE,
            &reference,
            &translated,
        );

        assert!(report.has_warnings());
        assert!(report.warnings[0].contains("placeholder mismatch"));
    }

    // ==================== Shipped Content Tests ====================

    #[test]
    fn test_all_shipped_bundles_are_complete() {
        let report = BundleValidator::validate_all();
        assert!(report.is_clean(), "{:?}", report);
    }

    #[test]
    fn test_every_page_resolves_non_empty_for_every_language() {
        for language in Language::all() {
            let translation = ContentResolver::resolve::<TranslationStrings>(language);
            let calorie = ContentResolver::resolve::<CalorieStrings>(language);
            let navigation = ContentResolver::resolve::<NavigationStrings>(language);
            for (_, value) in translation
                .fields()
                .into_iter()
                .chain(calorie.fields())
                .chain(navigation.fields())
            {
                assert!(!value.is_empty(), "empty string for {}", language);
            }
        }
    }

    // ==================== Report Tests ====================

    #[test]
    fn test_validation_report_new() {
        let report = ValidationReport::new();
        assert!(report.is_clean());
        assert!(!report.has_errors());
        assert!(!report.has_warnings());
    }

    #[test]
    fn test_validation_report_with_error() {
        let mut report = ValidationReport::new();
        report.errors.push("Test error".to_string());

        assert!(!report.is_clean());
        assert!(report.has_errors());
        assert!(!report.has_warnings());
    }
}
