//! The active UI language.
//!
//! A `LanguageStore` is an explicit handle: it is created once at startup and
//! passed to every page that renders text. Clones share the same value.

use crate::error::AppResult;
use crate::i18n::Language;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{info, warn};

#[derive(Debug, Clone)]
pub struct LanguageStore {
    sender: Arc<watch::Sender<Language>>,
}

impl LanguageStore {
    pub fn new(initial: Language) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    pub fn current(&self) -> Language {
        *self.sender.borrow()
    }

    /// Switch the active language.
    ///
    /// Unsupported codes are rejected and the current language stays active.
    pub fn set_language(&self, code: &str) -> AppResult<Language> {
        let language = Language::from_code(code).inspect_err(|e| {
            warn!("Rejected language change to '{}': {}", code, e);
        })?;

        let previous = self.sender.send_replace(language);
        if previous != language {
            info!("UI language changed from {} to {}", previous, language);
        }
        Ok(language)
    }

    /// Receiver that is notified whenever the language changes.
    pub fn subscribe(&self) -> watch::Receiver<Language> {
        self.sender.subscribe()
    }
}

impl Default for LanguageStore {
    fn default() -> Self {
        Self::new(Language::default_language())
    }
}
