//! Rating resource shapes.

use serde::Deserialize;

/// Attributes of a user rating for a catalog or library item.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingAttributes {
    /// 1 for liked, -1 for disliked
    pub value: i8,
}
