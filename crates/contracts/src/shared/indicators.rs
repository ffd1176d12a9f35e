use serde::{Deserialize, Serialize};

/// How a stat card formats its numeric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum ValueFormat {
    /// Thousands-separated integers, one decimal otherwise.
    Number,
    /// Value in `[0, 1]` rendered as a percentage with one decimal.
    Percent,
    /// Thousands-separated whole number.
    Integer,
}
