//! Internationalization (i18n) for every page of the application.
//!
//! # Architecture
//!
//! - `registry`: the closed set of supported languages and their metadata
//! - `language`: validated `Language` type
//! - `store`: the active UI language, passed explicitly to pages
//! - `strings`: one localized resource table per page
//! - `resolver`: (page, language) lookup with the default-language fallback
//! - `validator`: completeness checks over every authored table
//!
//! # Example
//!
//! ```rust,ignore
//! use ai_glasses_agent::i18n::{ContentResolver, LanguageStore, TranslationStrings};
//!
//! let store = LanguageStore::default();
//! store.set_language("zh")?;
//! let strings = ContentResolver::resolve::<TranslationStrings>(store.current());
//! assert_eq!(strings.result_label, "翻译结果：");
//! ```

mod language;
mod registry;
mod resolver;
mod store;
mod strings;
mod validator;

pub use language::Language;
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{ContentResolver, Localized, PageBundle, PageId};
pub use store::LanguageStore;
pub use strings::{
    AboutStrings, AlertVocabulary, ApplicationStrings, CalorieStrings, ErrorStrings,
    HeaderStrings, HomeStrings, NavigationStrings, StepStrings, TranslationStrings, CONTACT_URL,
    GITHUB_URL, WEBSITE_URL,
};
pub use validator::{BundleValidator, ValidationReport};
