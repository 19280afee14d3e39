//! WASM bindings for the kaleido-core library.
//!
//! All functions exposed to JavaScript via wasm-bindgen are defined here.
//! The boundary is JSON strings: the shell fetches payloads from the data
//! provider and passes them straight through. Failures never throw; they
//! come back as an output record carrying an `error` field so the shell can
//! render an inline fallback.

use wasm_bindgen::prelude::*;
use web_sys::console;

use crate::api::parse_themes;
use crate::layout::{self, LayoutConfig};
use crate::output::{ErrorInfo, OpinionMapOutput, ThemeOverviewOutput};
use crate::stance::{Vote, update_stance};

fn console_error(msg: &str) {
    console::error_1(&JsValue::from_str(msg));
}

/// Lay out one theme's opinion map.
///
/// `themes_json` is the raw `GET /api/themes` response body; `self_score`
/// is the user's current stance for the theme. Returns an
/// `OpinionMapOutput` as JSON.
#[wasm_bindgen]
pub fn layout_theme(themes_json: &str, theme_id: &str, self_score: f64) -> String {
    let response = match parse_themes(themes_json) {
        Ok(response) => response,
        Err(e) => {
            console_error(&format!("Error parsing themes payload: {e}"));
            let output = OpinionMapOutput::error(ErrorInfo::from_json_error(&e));
            return serde_json::to_string(&output).unwrap();
        }
    };

    let Some(theme) = response.themes.iter().find(|t| t.id == theme_id) else {
        console_error(&format!("Theme '{theme_id}' not found"));
        let output =
            OpinionMapOutput::error(ErrorInfo::message(format!("theme not found: {theme_id}")));
        return serde_json::to_string(&output).unwrap();
    };

    let result = layout::layout(
        &theme.opinions,
        theme.color.as_deref(),
        self_score,
        &LayoutConfig::default(),
    );
    let output = OpinionMapOutput::from_layout(&result, &theme.opinions);
    serde_json::to_string(&output).unwrap()
}

/// Positions for the theme-selection overview screen.
#[wasm_bindgen]
pub fn theme_overview(themes_json: &str) -> String {
    let response = match parse_themes(themes_json) {
        Ok(response) => response,
        Err(e) => {
            console_error(&format!("Error parsing themes payload: {e}"));
            let output = ThemeOverviewOutput::error(ErrorInfo::from_json_error(&e));
            return serde_json::to_string(&output).unwrap();
        }
    };

    let positions = layout::theme_overview_positions(response.themes.len());
    let output = ThemeOverviewOutput::from_themes(&response.themes, &positions);
    serde_json::to_string(&output).unwrap()
}

/// Optimistic local stance update while the vote round trip is in flight.
///
/// `vote_type` is the wire spelling, `"agree"` or `"oppose"`; anything else
/// leaves the score unchanged, matching the vote service.
#[wasm_bindgen]
pub fn apply_vote(current_score: f64, opinion_score: f64, vote_type: &str) -> f64 {
    match Vote::from_wire(vote_type) {
        Some(vote) => update_stance(current_score, opinion_score, vote),
        None => {
            console_error(&format!("Unknown vote type '{vote_type}'"));
            crate::model::clamp_score(current_score)
        }
    }
}
