//! Calorie tracking page: every captured meal photo is analyzed immediately.

use crate::api::{ApiClient, FoodItem};
use crate::controller::session::Session;
use crate::controller::state::{PageSnapshot, ResultPolicy};
use crate::controller::{error_line, read_selection};
use crate::error::AppResult;
use crate::i18n::{CalorieStrings, ContentResolver, Language, LanguageStore, PageId};
use crate::media::{CapturedImage, FileSelection};
use serde::Serialize;
use tracing::info;

const RECENT_MEALS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealView {
    pub name: String,
    pub time: String,
    pub calories: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    pub calories: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalorieView {
    pub language: Language,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub upload_prompt: &'static str,
    pub choose_image: &'static str,
    pub processing: Option<&'static str>,
    pub recent_meals_title: &'static str,
    /// Newest first
    pub recent_meals: Vec<MealView>,
    pub calorie_trend_title: &'static str,
    /// Oldest first
    pub trend: Vec<TrendPoint>,
    pub error: Option<String>,
}

pub struct CalorieController {
    client: ApiClient,
    language: LanguageStore,
    user_id: String,
    session: Session<FoodItem>,
}

impl CalorieController {
    pub fn new(client: ApiClient, language: LanguageStore, user_id: impl Into<String>) -> Self {
        Self {
            client,
            language,
            user_id: user_id.into(),
            session: Session::new(PageId::Health, ResultPolicy::Append),
        }
    }

    /// Read the selected meal photo and analyze it. Returns `Ok(None)` when
    /// the picker was cancelled.
    pub async fn capture(&self, selection: &FileSelection) -> AppResult<Option<FoodItem>> {
        match read_selection(&self.session, selection).await? {
            Some(_) => self.submit().await.map(Some),
            None => Ok(None),
        }
    }

    pub async fn process_image(&self, image: CapturedImage) -> AppResult<FoodItem> {
        self.session.capture(image);
        self.submit().await
    }

    /// Analyze the held image again.
    pub async fn submit(&self) -> AppResult<FoodItem> {
        let client = &self.client;
        let user_id = self.user_id.as_str();
        let item = self
            .session
            .submit(|image| async move { client.track_food(user_id, image.data_uri()).await })
            .await?;
        info!("Tracked {} ({} kcal)", item.name, item.calories);
        Ok(item)
    }

    /// Replace the local meal list with the backend's history for this user.
    pub async fn sync_history(&self) -> AppResult<usize> {
        let items = self.client.food_history(&self.user_id).await?;
        let count = items.len();
        self.session.load_history(items);
        info!("Loaded {} meals from history", count);
        Ok(count)
    }

    pub fn snapshot(&self) -> PageSnapshot<FoodItem> {
        self.session.snapshot()
    }

    pub fn view(&self) -> CalorieView {
        let language = self.language.current();
        let strings = ContentResolver::resolve::<CalorieStrings>(language);
        let snapshot = self.session.snapshot();

        let recent_meals = snapshot
            .results
            .iter()
            .rev()
            .take(RECENT_MEALS)
            .map(|item| MealView {
                name: item.name.clone(),
                time: item
                    .recorded_at()
                    .map(|at| at.format("%Y-%m-%d %H:%M:%S").to_string())
                    .unwrap_or_else(|| item.timestamp.clone()),
                calories: format!("{} {}", item.calories, strings.calories_unit),
            })
            .collect();

        let trend = snapshot
            .results
            .iter()
            .map(|item| TrendPoint {
                label: item
                    .recorded_at()
                    .map(|at| at.format("%Y-%m-%d").to_string())
                    .unwrap_or_else(|| item.timestamp.clone()),
                calories: item.calories,
            })
            .collect();

        CalorieView {
            language,
            title: strings.title,
            subtitle: strings.subtitle,
            upload_prompt: strings.upload_prompt,
            choose_image: strings.choose_image,
            processing: snapshot.is_processing().then_some(strings.processing),
            recent_meals_title: strings.recent_meals,
            recent_meals,
            calorie_trend_title: strings.calorie_trend,
            trend,
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
    use crate::controller::Phase;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn item(name: &str, calories: f64, timestamp: &str) -> FoodItem {
        FoodItem {
            name: name.to_string(),
            calories,
            timestamp: timestamp.to_string(),
            image_url: "sample_url".to_string(),
        }
    }

    fn controller(base_url: &str, store: LanguageStore) -> CalorieController {
        CalorieController::new(ApiClient::with_base_url(base_url), store, "user123")
    }

    #[tokio::test]
    async fn test_recent_meals_newest_first_and_trend_chronological() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/food/history/user123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "food_items": [
                    item("Oatmeal", 300.0, "2024-01-14T08:00:00"),
                    item("Salad", 250.0, "2024-01-14T12:30:00"),
                    item("Pasta", 700.0, "2024-01-15T19:00:00"),
                    item("Apple", 95.0, "2024-01-16T10:15:00"),
                ]
            })))
            .mount(&mock_server)
            .await;

        let controller = controller(&mock_server.uri(), LanguageStore::default());
        assert_eq!(controller.sync_history().await.unwrap(), 4);

        let view = controller.view();
        let names: Vec<&str> = view.recent_meals.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Apple", "Pasta", "Salad"]);
        assert_eq!(view.recent_meals[0].time, "2024-01-16 10:15:00");
        assert_eq!(view.recent_meals[0].calories, "95 kcal");

        let labels: Vec<&str> = view.trend.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["2024-01-14", "2024-01-14", "2024-01-15", "2024-01-16"]);
        assert_eq!(view.trend[2].calories, 700.0);
    }

    #[tokio::test]
    async fn test_process_image_appends_result() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/food/track/user123"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "message": "Food tracked successfully",
                "food_item": item("Sample Food", 500.0, "2024-01-15T10:30:00.123456")
            })))
            .mount(&mock_server)
            .await;

        let controller = controller(&mock_server.uri(), LanguageStore::default());
        let image = CapturedImage::from_bytes(&[0xFF, 0xD8, 0xFF], "image/jpeg");
        controller.process_image(image.clone()).await.unwrap();
        controller.process_image(image).await.unwrap();

        let snapshot = controller.snapshot();
        assert_eq!(snapshot.phase, Phase::Resolved);
        assert_eq!(snapshot.results.len(), 2);
        assert_eq!(controller.view().recent_meals[0].time, "2024-01-15 10:30:00");
    }

    #[tokio::test]
    async fn test_chinese_units_and_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/food/track/user123"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&mock_server)
            .await;

        let store = LanguageStore::default();
        store.set_language("zh").unwrap();
        let controller = controller(&mock_server.uri(), store);
        controller.session.load_history(vec![item("米饭", 200.0, "2024-01-15T12:00:00")]);

        let image = CapturedImage::from_bytes(&[0xFF, 0xD8, 0xFF], "image/jpeg");
        assert!(controller.process_image(image).await.is_err());

        let view = controller.view();
        assert_eq!(view.recent_meals[0].calories, "200 千卡");
        assert!(view.error.as_deref().unwrap_or_default().starts_with("错误："));
        assert!(view.processing.is_none());
    }

    #[test]
    fn test_unparsable_timestamp_shown_raw() {
        let controller = controller("http://127.0.0.1:9", LanguageStore::default());
        controller.session.load_history(vec![item("Soup", 150.5, "yesterday")]);

        let view = controller.view();
        assert_eq!(view.recent_meals[0].time, "yesterday");
        assert_eq!(view.recent_meals[0].calories, "150.5 kcal");
        assert_eq!(view.trend[0].label, "yesterday");
    }
}
