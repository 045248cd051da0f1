//! Storefront resource shapes.

use serde::Deserialize;

/// Attributes of a regional storefront.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontAttributes {
    pub name: String,
    pub default_language_tag: Option<String>,
    #[serde(default)]
    pub supported_language_tags: Vec<String>,
    pub explicit_content_policy: Option<String>,
}
