//! Theme and opinion records as served by the data provider.
//!
//! All stance math in this crate runs on one canonical unit: a score in
//! [-100, 100], -100 fully opposed, +100 fully in favor. Payloads that use
//! the legacy [-1, 1] convention are converted at the boundary with
//! [`score_from_unit`].

use serde::{Deserialize, Serialize};

/// Lower bound of the canonical score range.
pub const SCORE_MIN: f64 = -100.0;
/// Upper bound of the canonical score range.
pub const SCORE_MAX: f64 = 100.0;

/// Clamp a score into the canonical [-100, 100] range.
#[inline]
pub fn clamp_score(score: f64) -> f64 {
    score.clamp(SCORE_MIN, SCORE_MAX)
}

/// Convert a [-1, 1] unit-interval stance into the canonical range.
#[inline]
pub fn score_from_unit(unit: f64) -> f64 {
    clamp_score(unit * SCORE_MAX)
}

/// A single argumentative position within a theme.
///
/// `color` groups bubbles into alternating vertical bands during layout and
/// carries no semantic meaning. `source_url`/`source_name` are display-only
/// attribution fields and may be absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Opinion {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme_id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub body: String,
    /// Stance score, canonical [-100, 100]. Clamped before any layout math.
    pub score: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(rename = "sourceUrl", default, skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    #[serde(rename = "sourceName", default, skip_serializing_if = "Option::is_none")]
    pub source_name: Option<String>,
}

/// A topic under discussion, with its opinions in provider order.
///
/// The opinion list is immutable once loaded for a session; its order is the
/// iteration order the layout engine uses for deterministic row assignment.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default)]
    pub opinions: Vec<Opinion>,
}

impl Opinion {
    /// Band color for layout grouping: the opinion's own color, or the
    /// theme-level fallback the renderer would use.
    pub fn band_color<'a>(&'a self, theme_color: Option<&'a str>) -> &'a str {
        self.color.as_deref().or(theme_color).unwrap_or("")
    }
}
