//! Navigation assistance page: each captured frame yields one spoken alert.

use crate::api::{ApiClient, NavigationAlert};
use crate::controller::session::Session;
use crate::controller::state::{PageSnapshot, ResultPolicy};
use crate::controller::{error_line, read_selection};
use crate::error::AppResult;
use crate::i18n::{
    AlertVocabulary, ContentResolver, Language, LanguageStore, NavigationStrings, PageId,
};
use crate::media::{CapturedImage, FileSelection};
use crate::speech::{announce, LogAnnouncer, VoiceAnnouncer};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

const OBSTACLE: &str = "obstacle";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AlertView {
    pub title: String,
    pub description: String,
    /// Obstacles are rendered with the destructive style
    pub destructive: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigationView {
    pub language: Language,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub upload_prompt: &'static str,
    pub start_camera: &'static str,
    pub processing: Option<&'static str>,
    pub recent_alerts_title: &'static str,
    /// Newest first
    pub alerts: Vec<AlertView>,
    pub error: Option<String>,
}

/// Localize one alert for display.
///
/// The distance part is only shown for a positive distance; a missing
/// direction reads as "ahead".
pub fn render_alert(
    alert: &NavigationAlert,
    strings: &NavigationStrings,
    vocabulary: &AlertVocabulary,
) -> AlertView {
    let description = vocabulary.description(&alert.description);
    let description = match alert.distance {
        Some(distance) if distance > 0.0 => {
            let direction = alert
                .direction
                .as_deref()
                .map(|d| vocabulary.direction(d))
                .unwrap_or(strings.default_direction);
            format!("{} ({}m {})", description, distance, direction)
        }
        _ => description.to_string(),
    };

    AlertView {
        title: vocabulary.alert_type_label(&alert.alert_type),
        description,
        destructive: alert.alert_type == OBSTACLE,
    }
}

pub struct NavigationController {
    client: ApiClient,
    language: LanguageStore,
    user_id: String,
    announcer: Arc<dyn VoiceAnnouncer>,
    session: Session<NavigationAlert>,
}

impl NavigationController {
    pub fn new(client: ApiClient, language: LanguageStore, user_id: impl Into<String>) -> Self {
        Self {
            client,
            language,
            user_id: user_id.into(),
            announcer: Arc::new(LogAnnouncer),
            session: Session::new(PageId::Navigation, ResultPolicy::Append),
        }
    }

    pub fn with_announcer(mut self, announcer: Arc<dyn VoiceAnnouncer>) -> Self {
        self.announcer = announcer;
        self
    }

    /// Read the selected frame and request an alert for it.
    pub async fn capture(&self, selection: &FileSelection) -> AppResult<Option<NavigationAlert>> {
        match read_selection(&self.session, selection).await? {
            Some(_) => self.submit().await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn process_image(&self, image: CapturedImage) -> AppResult<NavigationAlert> {
        self.session.capture(image);
        self.submit().await
    }

    pub async fn submit(&self) -> AppResult<NavigationAlert> {
        let client = &self.client;
        let user_id = self.user_id.as_str();
        let alert = self
            .session
            .submit(|image| async move { client.navigation_alert(user_id, image.data_uri()).await })
            .await?;

        info!("Navigation alert: {} - {}", alert.alert_type, alert.description);
        announce(self.announcer.as_ref(), &alert.description);
        Ok(alert)
    }

    /// Replace the local alert list with the backend's history for this user.
    pub async fn sync_history(&self) -> AppResult<usize> {
        let alerts = self.client.navigation_history(&self.user_id).await?;
        let count = alerts.len();
        self.session.load_history(alerts);
        info!("Loaded {} navigation alerts from history", count);
        Ok(count)
    }

    pub fn snapshot(&self) -> PageSnapshot<NavigationAlert> {
        self.session.snapshot()
    }

    pub fn view(&self) -> NavigationView {
        let language = self.language.current();
        let strings = ContentResolver::resolve::<NavigationStrings>(language);
        let vocabulary = ContentResolver::resolve::<AlertVocabulary>(language);
        let snapshot = self.session.snapshot();

        NavigationView {
            language,
            title: strings.title,
            subtitle: strings.subtitle,
            upload_prompt: strings.upload_prompt,
            start_camera: strings.start_camera,
            processing: snapshot.is_processing().then_some(strings.processing),
            recent_alerts_title: strings.recent_alerts,
            alerts: snapshot
                .results
                .iter()
                .rev()
                .map(|alert| render_alert(alert, &strings, &vocabulary))
                .collect(),
            error: error_line(snapshot.error.as_ref(), language, strings.failure),
        }
    }

    pub fn unmount(&self) {
        self.session.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::RecordingAnnouncer;

    fn alert(alert_type: &str, description: &str, distance: Option<f64>, direction: Option<&str>) -> NavigationAlert {
        NavigationAlert {
            alert_type: alert_type.to_string(),
            description: description.to_string(),
            distance,
            direction: direction.map(str::to_string),
        }
    }

    fn render(alert: &NavigationAlert, language: Language) -> AlertView {
        let strings = ContentResolver::resolve::<NavigationStrings>(language);
        let vocabulary = ContentResolver::resolve::<AlertVocabulary>(language);
        render_alert(alert, &strings, &vocabulary)
    }

    #[test]
    fn test_render_obstacle_english() {
        let view = render(&alert("obstacle", "Door ahead", Some(2.0), Some("right")), Language::ENGLISH);
        assert_eq!(view.title, "Obstacle");
        assert_eq!(view.description, "Door ahead (2m right)");
        assert!(view.destructive);
    }

    #[test]
    fn test_render_obstacle_chinese() {
        let view = render(&alert("obstacle", "Door ahead", Some(2.0), Some("right")), Language::CHINESE);
        assert_eq!(view.title, "障碍物");
        assert_eq!(view.description, "前方有门 (2m 右方)");
    }

    #[test]
    fn test_render_without_distance() {
        let view = render(&alert("landmark", "Open space ahead", None, None), Language::ENGLISH);
        assert_eq!(view.description, "Open space ahead");
        assert!(!view.destructive);

        let zero = render(&alert("warning", "Stairs approaching", Some(0.0), Some("left")), Language::ENGLISH);
        assert_eq!(zero.description, "Stairs approaching");
    }

    #[test]
    fn test_render_default_direction() {
        let english = render(&alert("warning", "Stairs approaching", Some(3.5), None), Language::ENGLISH);
        let chinese = render(&alert("warning", "Stairs approaching", Some(3.5), None), Language::CHINESE);
        assert_eq!(english.description, "Stairs approaching (3.5m ahead)");
        assert_eq!(chinese.description, "即将到达楼梯 (3.5m 前方)");
    }

    #[test]
    fn test_render_unknown_values_shown_raw() {
        let view = render(&alert("puddle", "Wet floor", Some(1.0), Some("behind")), Language::CHINESE);
        assert_eq!(view.title, "Puddle");
        assert_eq!(view.description, "Wet floor (1m behind)");
    }

    #[test]
    fn test_render_fallback_language_uses_english() {
        let view = render(&alert("obstacle", "Door ahead", Some(2.0), Some("right")), Language::JAPANESE);
        assert_eq!(view.title, "Obstacle");
        assert_eq!(view.description, "Door ahead (2m right)");
    }

    #[test]
    fn test_view_lists_newest_first() {
        let recorder = Arc::new(RecordingAnnouncer::new());
        let controller = NavigationController::new(
            ApiClient::with_base_url("http://127.0.0.1:9"),
            LanguageStore::default(),
            "user123",
        )
        .with_announcer(recorder.clone());
        controller.session.load_history(vec![
            alert("warning", "Stairs approaching", Some(3.0), Some("forward")),
            alert("obstacle", "Wall on the right", Some(1.0), Some("right")),
        ]);

        let view = controller.view();
        assert_eq!(view.recent_alerts_title, "Recent Alerts");
        assert_eq!(view.alerts[0].description, "Wall on the right (1m right)");
        assert_eq!(view.alerts[1].title, "Warning");
        assert!(recorder.spoken().is_empty());
    }
}
