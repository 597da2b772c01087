//! HTTP client for the AI Glasses backend.
//!
//! One attempt per call: no retries, no timeout, no authentication headers.

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::i18n::Language;
use chrono::{DateTime, NaiveDateTime};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

// ==================== Request Types ====================

#[derive(Debug, Serialize)]
pub struct TranslateRequest<'a> {
    pub image_url: &'a str,
    pub source_language: &'a str,
    pub target_language: Language,
}

#[derive(Debug, Serialize)]
struct ImageRequest<'a> {
    image: &'a str,
}

// ==================== Response Types ====================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TranslationResult {
    pub translated_text: String,
    #[serde(default)]
    pub original_text: Option<String>,
    #[serde(default)]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    pub name: String,
    pub calories: f64,
    /// ISO 8601 as sent by the backend, with or without an offset
    pub timestamp: String,
    pub image_url: String,
}

impl FoodItem {
    /// Parse `timestamp`, accepting RFC 3339 and offset-less ISO 8601.
    pub fn recorded_at(&self) -> Option<NaiveDateTime> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(&self.timestamp) {
            return Some(dt.naive_local());
        }
        NaiveDateTime::parse_from_str(&self.timestamp, "%Y-%m-%dT%H:%M:%S%.f").ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationAlert {
    pub alert_type: String,
    pub description: String,
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub direction: Option<String>,
}

#[derive(Debug, Deserialize)]
struct FoodTrackResponse {
    food_item: FoodItem,
}

#[derive(Debug, Deserialize)]
struct NavigationAlertResponse {
    alert: NavigationAlert,
}

#[derive(Debug, Deserialize)]
struct FoodHistoryResponse {
    food_items: Vec<FoodItem>,
}

#[derive(Debug, Deserialize)]
struct NavigationHistoryResponse {
    alerts: Vec<NavigationAlert>,
}

/// FastAPI error body
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

// ==================== Client ====================

#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &Config) -> Self {
        Self::with_base_url(&config.api_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Endpoint under `segments` with `user_id` appended as one escaped path segment.
    fn user_url(&self, segments: &[&str], user_id: &str) -> String {
        let mut url = match Url::parse(&self.base_url) {
            Ok(url) => url,
            // reqwest rejects the same base URL when the request is sent
            Err(_) => return format!("{}/{}/{}", self.base_url, segments.join("/"), user_id),
        };
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments).push(user_id);
        }
        url.into()
    }

    /// Liveness probe. The body is arbitrary JSON.
    pub async fn health_check(&self) -> AppResult<serde_json::Value> {
        let response = self
            .http
            .get(self.url("/api/healthz"))
            .send()
            .await
            .map_err(AppError::Network)?;
        parse_response(response).await
    }

    pub async fn translate(&self, request: &TranslateRequest<'_>) -> AppResult<TranslationResult> {
        debug!(
            "Requesting translation {} -> {}",
            request.source_language, request.target_language
        );
        let response = self
            .http
            .post(self.url("/api/translate"))
            .json(request)
            .send()
            .await
            .map_err(AppError::Network)?;
        parse_response(response).await
    }

    pub async fn track_food(&self, user_id: &str, image: &str) -> AppResult<FoodItem> {
        let response = self
            .http
            .post(self.user_url(&["api", "food", "track"], user_id))
            .json(&ImageRequest { image })
            .send()
            .await
            .map_err(AppError::Network)?;
        let body: FoodTrackResponse = parse_response(response).await?;
        Ok(body.food_item)
    }

    pub async fn navigation_alert(&self, user_id: &str, image: &str) -> AppResult<NavigationAlert> {
        let response = self
            .http
            .post(self.user_url(&["api", "navigation", "alert"], user_id))
            .json(&ImageRequest { image })
            .send()
            .await
            .map_err(AppError::Network)?;
        let body: NavigationAlertResponse = parse_response(response).await?;
        Ok(body.alert)
    }

    pub async fn food_history(&self, user_id: &str) -> AppResult<Vec<FoodItem>> {
        let response = self
            .http
            .get(self.user_url(&["api", "food", "history"], user_id))
            .send()
            .await
            .map_err(AppError::Network)?;
        let body: FoodHistoryResponse = parse_response(response).await?;
        Ok(body.food_items)
    }

    pub async fn navigation_history(&self, user_id: &str) -> AppResult<Vec<NavigationAlert>> {
        let response = self
            .http
            .get(self.user_url(&["api", "navigation", "history"], user_id))
            .send()
            .await
            .map_err(AppError::Network)?;
        let body: NavigationHistoryResponse = parse_response(response).await?;
        Ok(body.alerts)
    }
}

/// Map a response to a typed body.
///
/// Non-2xx becomes `Api`; unreadable bodies become `Network`; anything that
/// is not JSON of the expected shape becomes `MalformedResponse`.
async fn parse_response<T: DeserializeOwned>(response: reqwest::Response) -> AppResult<T> {
    let status = response.status();
    let body = response.text().await.map_err(AppError::Network)?;

    if !status.is_success() {
        let detail = error_detail(&body);
        warn!("Backend error ({}): {}", status, detail);
        return Err(AppError::Api {
            status: status.as_u16(),
            detail,
        });
    }

    let value: serde_json::Value = serde_json::from_str(&body)
        .map_err(|e| AppError::MalformedResponse(format!("body is not JSON: {}", e)))?;

    serde_json::from_value(value).map_err(|e| AppError::MalformedResponse(e.to_string()))
}

fn error_detail(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            detail: serde_json::Value::String(detail),
        }) => detail,
        Ok(ErrorBody { detail }) => detail.to_string(),
        Err(_) if body.is_empty() => "empty response body".to_string(),
        Err(_) => body.to_string(),
    }
}
