//! Error kinds surfaced by the client core.
//!
//! Every failure is caught at the page controller boundary and turned into a
//! localized message; nothing here is fatal to the process.

use crate::i18n::ErrorStrings;
use thiserror::Error;

pub type AppResult<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The request could not be sent or the backend is unreachable.
    #[error("network error: {0}")]
    Network(#[source] reqwest::Error),

    /// The backend answered, but the body is not JSON or lacks expected fields.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The backend answered with a non-success status.
    #[error("backend error ({status}): {detail}")]
    Api { status: u16, detail: String },

    #[error("no image selected")]
    NoImageSelected,

    #[error("unsupported language code: '{0}'")]
    UnsupportedLanguage(String),

    #[error("failed to read image: {0}")]
    ImageRead(#[from] std::io::Error),

    #[error("a request is already in progress")]
    RequestInFlight,

    #[error("request cancelled")]
    Cancelled,
}

/// Cloneable classification of an `AppError`, kept in page state so the
/// message can be re-rendered whenever the UI language changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    MalformedResponse,
    Api,
    NoImageSelected,
    UnsupportedLanguage(String),
    ImageRead,
    RequestInFlight,
    Cancelled,
}

impl ErrorKind {
    /// Whether the failure came from talking to the backend.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ErrorKind::Network | ErrorKind::MalformedResponse | ErrorKind::Api
        )
    }

    /// User-facing message for this error.
    ///
    /// Remote failures all render as the page's own failure message; the
    /// distinction between them only matters for logs.
    pub fn localized(&self, strings: &ErrorStrings, page_failure: &str) -> String {
        match self {
            ErrorKind::Network | ErrorKind::MalformedResponse | ErrorKind::Api => {
                page_failure.to_string()
            }
            ErrorKind::NoImageSelected => strings.no_image_selected.to_string(),
            ErrorKind::UnsupportedLanguage(code) => {
                strings.unsupported_language.replace("{code}", code)
            }
            ErrorKind::ImageRead => strings.image_read.to_string(),
            ErrorKind::RequestInFlight => strings.request_in_flight.to_string(),
            ErrorKind::Cancelled => strings.cancelled.to_string(),
        }
    }
}

impl AppError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            AppError::Network(_) => ErrorKind::Network,
            AppError::MalformedResponse(_) => ErrorKind::MalformedResponse,
            AppError::Api { .. } => ErrorKind::Api,
            AppError::NoImageSelected => ErrorKind::NoImageSelected,
            AppError::UnsupportedLanguage(code) => ErrorKind::UnsupportedLanguage(code.clone()),
            AppError::ImageRead(_) => ErrorKind::ImageRead,
            AppError::RequestInFlight => ErrorKind::RequestInFlight,
            AppError::Cancelled => ErrorKind::Cancelled,
        }
    }

    pub fn is_remote(&self) -> bool {
        self.kind().is_remote()
    }

    pub fn localized(&self, strings: &ErrorStrings, page_failure: &str) -> String {
        self.kind().localized(strings, page_failure)
    }
}
