//! Resolution of (page, language) to a localized bundle.
//!
//! There is one fallback rule for every page: when a page has no bundle
//! authored for the requested language, the default language's bundle is
//! served and the result is marked as a fallback.

use crate::i18n::Language;
use std::fmt;
use std::ops::Deref;
use tracing::debug;

/// Identifier of a localized resource table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Header,
    Home,
    Translate,
    Health,
    Navigation,
    About,
    Errors,
    AlertVocabulary,
}

impl PageId {
    pub fn as_str(&self) -> &'static str {
        match self {
            PageId::Header => "header",
            PageId::Home => "home",
            PageId::Translate => "translate",
            PageId::Health => "health",
            PageId::Navigation => "navigation",
            PageId::About => "about",
            PageId::Errors => "errors",
            PageId::AlertVocabulary => "alert_vocabulary",
        }
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A table of localized strings for one page.
pub trait PageBundle: Sized + 'static {
    const PAGE: PageId;

    /// The bundle written for `language`, if there is one.
    fn authored(language: Language) -> Option<&'static Self>;

    /// The bundle written for the default language.
    fn default_bundle() -> &'static Self;

    /// Every required display string, labelled by field name.
    fn fields(&self) -> Vec<(&'static str, &'static str)>;
}

/// A resolved bundle together with the language it was actually served in.
#[derive(Debug)]
pub struct Localized<B: 'static> {
    pub bundle: &'static B,
    pub requested: Language,
    pub served: Language,
}

impl<B> Localized<B> {
    pub fn fell_back(&self) -> bool {
        self.requested != self.served
    }
}

impl<B> Clone for Localized<B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B> Copy for Localized<B> {}

impl<B> Deref for Localized<B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.bundle
    }
}

pub struct ContentResolver;

impl ContentResolver {
    /// Resolve a page's bundle for `language`. Never fails.
    pub fn resolve<B: PageBundle>(language: Language) -> Localized<B> {
        match B::authored(language) {
            Some(bundle) => Localized {
                bundle,
                requested: language,
                served: language,
            },
            None => {
                let served = Language::default_language();
                debug!(
                    "No {} content authored for {}, serving {}",
                    B::PAGE,
                    language,
                    served
                );
                Localized {
                    bundle: B::default_bundle(),
                    requested: language,
                    served,
                }
            }
        }
    }

    /// Languages that have a bundle authored for this page.
    pub fn authored_languages<B: PageBundle>() -> Vec<Language> {
        Language::all()
            .into_iter()
            .filter(|language| B::authored(*language).is_some())
            .collect()
    }
}
