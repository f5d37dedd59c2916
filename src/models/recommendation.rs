//! Recommendation feed model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Opaque id of one ranked result set.
///
/// Passed back unchanged for "next items" paging and interaction reports.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecommId(String);

impl RecommId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RecommId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    DefaultItems,
    HomepageItems,
    PersonalItems,
    PopularItems,
    RecentlyViewedItems,
    SearchItemsPersonalized,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationType {
    ItemsToUser,
    NextItems,
    SearchItems,
}

/// Request body of the recommendation endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    pub count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recomm_id: Option<RecommId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scenario: Option<Scenario>,
    pub recommendation_type: RecommendationType,
}

impl RecommendationRequest {
    pub fn items_to_user(user_id: impl Into<String>, count: u32, scenario: Scenario) -> Self {
        Self {
            user_id: Some(user_id.into()),
            count,
            search_query: None,
            recomm_id: None,
            scenario: Some(scenario),
            recommendation_type: RecommendationType::ItemsToUser,
        }
    }

    pub fn next_items(count: u32, recomm_id: RecommId) -> Self {
        Self {
            user_id: None,
            count,
            search_query: None,
            recomm_id: Some(recomm_id),
            scenario: None,
            recommendation_type: RecommendationType::NextItems,
        }
    }

    pub fn search_items(user_id: impl Into<String>, count: u32, search_query: impl Into<String>) -> Self {
        Self {
            user_id: Some(user_id.into()),
            count,
            search_query: Some(search_query.into()),
            recomm_id: None,
            scenario: Some(Scenario::SearchItemsPersonalized),
            recommendation_type: RecommendationType::SearchItems,
        }
    }
}

/// Raw envelope returned by the recommendation backend
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireRecommendations {
    pub recomm_id: RecommId,
    #[serde(default)]
    pub recommendations: Vec<WireRecommendation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WireRecommendation {
    pub id: String,
    #[serde(default)]
    pub properties: Map<String, Value>,
}

/// Recommended event with its start/end decoded from epoch seconds.
///
/// `properties` keeps every other item property as sent by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendedEvent {
    pub event_id: String,
    pub event_start_time: DateTime<Utc>,
    pub event_end_time: DateTime<Utc>,
    pub properties: Map<String, Value>,
}

impl RecommendedEvent {
    pub fn property_str(&self, key: &str) -> Option<&str> {
        self.properties.get(key).and_then(Value::as_str)
    }

    pub fn title(&self) -> Option<&str> {
        self.property_str("eventTitle")
    }
}

/// One page of recommendations, in rank order
#[derive(Debug, Clone, PartialEq)]
pub struct RecommendationPage {
    pub recomm_id: RecommId,
    pub recommendations: Vec<RecommendedEvent>,
}
