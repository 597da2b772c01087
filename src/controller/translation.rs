//! Translation page: select an image, pick a target language, translate.

use crate::api::{ApiClient, TranslateRequest, TranslationResult};
use crate::controller::session::Session;
use crate::controller::state::{PageSnapshot, ResultPolicy};
use crate::controller::{error_line, read_selection};
use crate::error::AppResult;
use crate::i18n::{ContentResolver, Language, LanguageStore, PageId, TranslationStrings};
use crate::media::{CapturedImage, FileSelection};
use serde::Serialize;
use std::sync::Mutex;
use tracing::info;

/// The backend detects the source language itself.
const SOURCE_LANGUAGE: &str = "auto";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageOption {
    pub code: Language,
    pub label: &'static str,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranslationView {
    pub language: Language,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub target_language_label: &'static str,
    pub target_languages: Vec<LanguageOption>,
    pub upload_prompt: &'static str,
    pub choose_image: &'static str,
    /// Only offered once an image is held
    pub translate_button: Option<&'static str>,
    pub processing: bool,
    pub result_label: Option<&'static str>,
    pub result_text: Option<String>,
    pub error: Option<String>,
}

pub struct TranslationController {
    client: ApiClient,
    language: LanguageStore,
    target_language: Mutex<Language>,
    session: Session<TranslationResult>,
}

impl TranslationController {
    pub fn new(client: ApiClient, language: LanguageStore) -> Self {
        Self {
            client,
            language,
            target_language: Mutex::new(Language::default_language()),
            session: Session::new(PageId::Translate, ResultPolicy::Replace),
        }
    }

    pub fn target_language(&self) -> Language {
        *self
            .target_language
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Choose the translation target. Unsupported codes keep the previous
    /// target and are shown as a page error.
    pub fn set_target_language(&self, code: &str) -> AppResult<Language> {
        let target = Language::from_code(code).inspect_err(|e| {
            self.session.note_error(e.kind());
        })?;
        *self
            .target_language
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner()) = target;
        info!("Translation target set to {}", target);
        Ok(target)
    }

    pub fn on_image_captured(&self, image: CapturedImage) {
        self.session.capture(image);
    }

    /// Read the selected file. Translation waits for an explicit `submit`.
    pub async fn capture(&self, selection: &FileSelection) -> AppResult<bool> {
        Ok(read_selection(&self.session, selection).await?.is_some())
    }

    pub async fn submit(&self) -> AppResult<TranslationResult> {
        let target = self.target_language();
        let client = &self.client;
        let result = self
            .session
            .submit(|image| async move {
                let request = TranslateRequest {
                    image_url: image.data_uri(),
                    source_language: SOURCE_LANGUAGE,
                    target_language: target,
                };
                client.translate(&request).await
            })
            .await?;
        info!("Translation into {} completed", target);
        Ok(result)
    }

    pub fn snapshot(&self) -> PageSnapshot<TranslationResult> {
        self.session.snapshot()
    }

    pub fn view(&self) -> TranslationView {
        let language = self.language.current();
        let strings = ContentResolver::resolve::<TranslationStrings>(language);
        let snapshot = self.session.snapshot();
        let target = self.target_language();
        let result = snapshot.latest();

        TranslationView {
            language,
            title: strings.title,
            subtitle: strings.subtitle,
            target_language_label: strings.target_language_label,
            target_languages: Language::all()
                .into_iter()
                .map(|option| LanguageOption {
                    code: option,
                    label: option.name(),
                    selected: option == target,
                })
                .collect(),
            upload_prompt: strings.upload_prompt,
            choose_image: strings.choose_image,
            translate_button: snapshot.image.as_ref().map(|_| strings.translate_button),
            processing: snapshot.is_processing(),
            result_label: result.map(|_| strings.result_label),
            result_text: result.map(|r| r.translated_text.clone()),
            error: error_line(snapshot.error.as_ref(), language, strings.failure),
        }
    }

    pub fn unmount(&self) {
        self.session.unmount();
    }
}
