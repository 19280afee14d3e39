//! Output types for React frontend consumption.
//!
//! These structs are serialized to JSON and sent to the React shell, which
//! paints a circle per bubble and animates the self marker.

use serde::Serialize;

use crate::layout::{OpinionMapLayout, Position};
use crate::model::{Opinion, Theme};

/// An opinion bubble ready to render.
#[derive(Debug, Clone, Serialize)]
pub struct BubbleOutput {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Viewport-relative percentages.
    pub left: f64,
    pub top: f64,
    /// The collision search gave up on this bubble; it may overlap a neighbor.
    pub degraded: bool,
}

/// The user's own marker.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SelfMarkerOutput {
    pub left: f64,
    pub top: f64,
}

/// A theme bubble on the selection overview.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeBubbleOutput {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub left: f64,
    pub top: f64,
}

/// Inline fallback error shown by the shell instead of the map.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorInfo {
    pub message: String,
    /// 1-based position within the offending JSON payload, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
}

impl ErrorInfo {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            line: None,
            column: None,
        }
    }

    pub fn from_json_error(err: &serde_json::Error) -> Self {
        Self {
            message: err.to_string(),
            line: Some(err.line()),
            column: Some(err.column()),
        }
    }
}

/// The combined opinion-map payload sent to React.
#[derive(Debug, Clone, Serialize)]
pub struct OpinionMapOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub bubbles: Vec<BubbleOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub self_marker: Option<SelfMarkerOutput>,
    pub degraded_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl OpinionMapOutput {
    /// Join a layout result with the opinions' display metadata.
    ///
    /// Placements come back in input order, so the two lists zip directly.
    pub fn from_layout(layout: &OpinionMapLayout, opinions: &[Opinion]) -> Self {
        let bubbles = layout
            .placements
            .iter()
            .zip(opinions)
            .map(|(placement, opinion)| BubbleOutput {
                id: opinion.id.clone(),
                title: opinion.title.clone(),
                color: opinion.color.clone(),
                left: placement.position.left,
                top: placement.position.top,
                degraded: placement.degraded,
            })
            .collect();

        Self {
            bubbles,
            self_marker: Some(SelfMarkerOutput {
                left: layout.self_position.left,
                top: layout.self_position.top,
            }),
            degraded_count: layout.degraded_count,
            error: None,
        }
    }

    pub fn error(error: ErrorInfo) -> Self {
        Self {
            bubbles: vec![],
            self_marker: None,
            degraded_count: 0,
            error: Some(error),
        }
    }
}

/// The theme-overview payload sent to React.
#[derive(Debug, Clone, Serialize)]
pub struct ThemeOverviewOutput {
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub themes: Vec<ThemeBubbleOutput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
}

impl ThemeOverviewOutput {
    pub fn from_themes(themes: &[Theme], positions: &[Position]) -> Self {
        let themes = themes
            .iter()
            .zip(positions)
            .map(|(theme, pos)| ThemeBubbleOutput {
                id: theme.id.clone(),
                title: theme.title.clone(),
                color: theme.color.clone(),
                left: pos.left,
                top: pos.top,
            })
            .collect();
        Self {
            themes,
            error: None,
        }
    }

    pub fn error(error: ErrorInfo) -> Self {
        Self {
            themes: vec![],
            error: Some(error),
        }
    }
}
