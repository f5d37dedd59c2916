//! Recommendation feed service
//!
//! Every preset builds a [`RecommendationRequest`] and goes through
//! [`FeedService::get_recommendations`], the one place that talks to the
//! backend and decodes its envelope.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use tracing::debug;

use crate::models::recommendation::{
    RecommId, RecommendationPage, RecommendationRequest, RecommendedEvent, Scenario, WireRecommendation,
    WireRecommendations,
};
use crate::services::client::to_body;
use crate::services::response::{classify_outcome, decode};
use crate::services::transport::{HttpMethod, HttpRequest, HttpTransport};
use crate::utils::errors::{ApiError, ApiResult};
use crate::utils::logging::log_api_failure;

const START_TIME_PROPERTY: &str = "eventStartTime";
const END_TIME_PROPERTY: &str = "eventEndTime";

#[derive(Clone)]
pub struct FeedService {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
}

impl FeedService {
    pub fn new(base_url: impl Into<String>, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
        }
    }

    /// Send one recommendation request and decode the ranked result
    pub async fn get_recommendations(&self, request: &RecommendationRequest) -> ApiResult<RecommendationPage> {
        debug!(
            recommendation_type = ?request.recommendation_type,
            scenario = ?request.scenario,
            count = request.count,
            "Requesting recommendations"
        );

        let result = self.fetch(request).await;
        match &result {
            Ok(page) => debug!(
                recomm_id = %page.recomm_id,
                items = page.recommendations.len(),
                "Received recommendations"
            ),
            Err(e) => log_api_failure("feed", "get_recommendations", e),
        }
        result
    }

    async fn fetch(&self, request: &RecommendationRequest) -> ApiResult<RecommendationPage> {
        let http_request = HttpRequest::new(HttpMethod::Post, self.base_url.clone()).json(to_body(request)?);
        let payload = classify_outcome(self.transport.execute(http_request).await)?;
        let envelope: WireRecommendations = decode(payload)?;

        let recommendations = envelope
            .recommendations
            .into_iter()
            .map(into_recommended_event)
            .collect::<ApiResult<Vec<_>>>()?;

        Ok(RecommendationPage {
            recomm_id: envelope.recomm_id,
            recommendations,
        })
    }

    pub async fn get_default_events(&self, user_id: &str, count: u32) -> ApiResult<RecommendationPage> {
        self.items_to_user(user_id, count, Scenario::DefaultItems).await
    }

    pub async fn get_homepage_events(&self, user_id: &str, count: u32) -> ApiResult<RecommendationPage> {
        self.items_to_user(user_id, count, Scenario::HomepageItems).await
    }

    pub async fn get_personal_events(&self, user_id: &str, count: u32) -> ApiResult<RecommendationPage> {
        self.items_to_user(user_id, count, Scenario::PersonalItems).await
    }

    pub async fn get_popular_events(&self, user_id: &str, count: u32) -> ApiResult<RecommendationPage> {
        self.items_to_user(user_id, count, Scenario::PopularItems).await
    }

    pub async fn get_recently_viewed_events(&self, user_id: &str, count: u32) -> ApiResult<RecommendationPage> {
        self.items_to_user(user_id, count, Scenario::RecentlyViewedItems).await
    }

    /// Next page of an earlier result set
    pub async fn get_next_events(&self, count: u32, recomm_id: &RecommId) -> ApiResult<RecommendationPage> {
        self.get_recommendations(&RecommendationRequest::next_items(count, recomm_id.clone()))
            .await
    }

    pub async fn search_events(&self, user_id: &str, count: u32, search_query: &str) -> ApiResult<RecommendationPage> {
        self.get_recommendations(&RecommendationRequest::search_items(user_id, count, search_query))
            .await
    }

    async fn items_to_user(&self, user_id: &str, count: u32, scenario: Scenario) -> ApiResult<RecommendationPage> {
        self.get_recommendations(&RecommendationRequest::items_to_user(user_id, count, scenario))
            .await
    }
}

fn into_recommended_event(item: WireRecommendation) -> ApiResult<RecommendedEvent> {
    let mut properties = item.properties;
    let event_start_time = take_epoch_seconds(&mut properties, START_TIME_PROPERTY, &item.id)?;
    let event_end_time = take_epoch_seconds(&mut properties, END_TIME_PROPERTY, &item.id)?;
    properties.remove("eventId");

    Ok(RecommendedEvent {
        event_id: item.id,
        event_start_time,
        event_end_time,
        properties,
    })
}

fn take_epoch_seconds(properties: &mut Map<String, Value>, key: &str, item_id: &str) -> ApiResult<DateTime<Utc>> {
    let seconds = properties
        .remove(key)
        .as_ref()
        .and_then(Value::as_f64)
        .ok_or_else(|| ApiError::InvalidPayload(format!("item {} has no numeric {}", item_id, key)))?;

    epoch_seconds_to_instant(seconds)
        .ok_or_else(|| ApiError::InvalidPayload(format!("item {} has out-of-range {}", item_id, key)))
}

/// Epoch seconds (possibly fractional) to an instant, via milliseconds
pub fn epoch_seconds_to_instant(seconds: f64) -> Option<DateTime<Utc>> {
    let millis = (seconds * 1000.0).round();
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
}
