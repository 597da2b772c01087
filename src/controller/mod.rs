//! Page controllers for the three feature pages.
//!
//! Each controller owns one `Session` (state + in-flight request), reads the
//! active language from an injected `LanguageStore` every time it renders,
//! and turns every failure into a localized error line.

mod calorie;
mod navigation;
mod session;
pub mod state;
mod translation;

pub use calorie::{CalorieController, CalorieView, MealView, TrendPoint};
pub use navigation::{render_alert, AlertView, NavigationController, NavigationView};
pub use state::{Phase, PageEvent, PageSnapshot, ResultPolicy, StateError};
pub use translation::{LanguageOption, TranslationController, TranslationView};

use crate::error::{AppResult, ErrorKind};
use crate::i18n::{ContentResolver, ErrorStrings, Language};
use crate::media::{self, CapturedImage, FileSelection};
use session::Session;

/// Read a selection into the session.
///
/// A cancelled picker changes nothing. A read failure is recorded on the page
/// and returned.
async fn read_selection<R: Clone>(
    session: &Session<R>,
    selection: &FileSelection,
) -> AppResult<Option<CapturedImage>> {
    match media::capture_image(selection).await {
        Ok(Some(image)) => {
            session.capture(image.clone());
            Ok(Some(image))
        }
        Ok(None) => Ok(None),
        Err(e) => {
            session.reject(e.kind());
            Err(e)
        }
    }
}

/// "Error: <message>" in the given language.
fn error_line(error: Option<&ErrorKind>, language: Language, page_failure: &str) -> Option<String> {
    let error = error?;
    let strings = ContentResolver::resolve::<ErrorStrings>(language);
    Some(format!(
        "{}{}",
        strings.prefix,
        error.localized(&strings, page_failure)
    ))
}
