//! Personal recommendation resource shapes.

use super::Relationship;
use serde::Deserialize;

/// Attributes of a personal recommendation row.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationAttributes {
    #[serde(default)]
    pub is_group_recommendation: bool,
    pub kind: Option<String>,
    pub next_update_date: Option<String>,
    pub reason: Option<RecommendationReason>,
    #[serde(default)]
    pub resource_types: Vec<String>,
    pub title: Option<RecommendationTitle>,
}

/// Localized reason text for a recommendation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationReason {
    pub string_for_display: String,
}

/// Localized title text for a recommendation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationTitle {
    pub string_for_display: String,
}

/// Named relationships of a personal recommendation.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecommendationRelationships {
    /// Heterogeneous by design: albums, playlists, and stations mix here
    pub contents: Option<Relationship>,
    /// Nested group recommendations
    pub recommendations: Option<Relationship>,
}
