// Opinion-map bubble layouter.
//
// Places opinion bubbles on a normalized percentage viewport:
// - Deterministic: no randomness, no time budgets
// - Horizontal position is a pure linear rescale of the stance score
// - Vertical position comes from alternating per-color row bands
// - Pairwise collisions are resolved by a bounded jump search; exhausting
//   the budget degrades to an accepted overlap, never a failure
//
// Submodules:
// - bands: alternating per-color row band assignment
// - collision: threshold test and bounded jump search
//
// Output:
// - OpinionMapLayout with one placement per opinion + the self marker.

use serde::Serialize;
use tracing::{debug, warn};

use crate::model::{Opinion, clamp_score};

mod bands;
mod collision;

use bands::BandCycle;
use collision::resolve_vertical;

pub use collision::collides;

/// A viewport-relative position, both axes in percent.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone)]
pub struct LayoutConfig {
    /// Width of the usable horizontal span, in percent of the viewport.
    pub horizontal_range: f64,
    /// Left edge of the usable horizontal span.
    pub horizontal_offset: f64,
    /// Row bands cycled by the first color group.
    pub rows_a: [f64; 3],
    /// Row bands cycled by the second color group.
    pub rows_b: [f64; 3],
    /// Bubbles closer than this on BOTH axes count as colliding.
    pub collision_threshold: f64,
    /// Vertical jump sizes tried during collision search. Near-coprime to
    /// 100 so repeated application visits many distinct rows before cycling.
    pub jump_steps: [f64; 3],
    /// Attempts per jump step; total budget is steps * attempts.
    pub attempts_per_step: usize,
    /// Safe vertical band bubbles are clamped into after a wraparound.
    pub top_min: f64,
    pub top_max: f64,
    /// Upper-half bubbles within this distance of horizontal center are
    /// pushed down to clear the title area.
    pub center_half_width: f64,
    pub title_nudge: f64,
    /// Fixed vertical position of the user's own marker.
    pub self_top: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            horizontal_range: 90.0,
            horizontal_offset: 5.0,
            rows_a: [21.0, 51.0, 81.0],
            rows_b: [15.0, 45.0, 70.0],
            collision_threshold: 15.0,
            jump_steps: [37.0, 23.0, 17.0],
            attempts_per_step: 50,
            top_min: 15.0,
            top_max: 85.0,
            center_half_width: 18.0,
            title_nudge: 25.0,
            self_top: 70.0,
        }
    }
}

/// One opinion's computed position.
#[derive(Debug, Clone, Serialize)]
pub struct Placement {
    pub opinion_id: String,
    pub position: Position,
    /// True when the collision search budget ran out and the bubble was
    /// left overlapping a neighbor.
    pub degraded: bool,
}

/// Result of one layout pass. Purely derived state: recomputed whenever the
/// opinion set, the viewport, or the user stance changes, never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct OpinionMapLayout {
    /// One entry per opinion, in input order.
    pub placements: Vec<Placement>,
    /// The user's own marker.
    pub self_position: Position,
    pub degraded_count: usize,
}

impl OpinionMapLayout {
    pub fn position_of(&self, opinion_id: &str) -> Option<Position> {
        self.placements
            .iter()
            .find(|p| p.opinion_id == opinion_id)
            .map(|p| p.position)
    }
}

/// Map a stance score to its horizontal viewport position.
///
/// Monotonically non-decreasing in `score` and always within
/// `[horizontal_offset, horizontal_offset + horizontal_range]`. Shared by
/// every opinion bubble and the self marker: two equal scores always land at
/// the same horizontal position.
pub fn horizontal(score: f64, cfg: &LayoutConfig) -> f64 {
    ((clamp_score(score) + 100.0) / 200.0) * cfg.horizontal_range + cfg.horizontal_offset
}

/// Lay out a theme's opinions plus the user's own marker.
///
/// Deterministic for identical inputs and iteration order. Never fails:
/// every opinion gets exactly one position, an empty list yields an empty
/// placement list, and an exhausted collision search keeps the overlapping
/// position with the placement flagged degraded.
pub fn layout(
    opinions: &[Opinion],
    theme_color: Option<&str>,
    self_score: f64,
    cfg: &LayoutConfig,
) -> OpinionMapLayout {
    let mut bands = BandCycle::new(cfg);
    let mut placed: Vec<Position> = Vec::with_capacity(opinions.len());
    let mut placements = Vec::with_capacity(opinions.len());
    let mut degraded_count = 0;

    for opinion in opinions {
        let left = horizontal(opinion.score, cfg);
        let mut top = bands.next_row(opinion.band_color(theme_color));

        // Keep upper-center bubbles out of the title area.
        if top < 50.0 && (left - 50.0).abs() < cfg.center_half_width {
            top += cfg.title_nudge;
        }

        let candidate = Position { left, top };
        let (position, degraded) = resolve_vertical(candidate, &placed, cfg);
        if degraded {
            degraded_count += 1;
            warn!(
                opinion_id = %opinion.id,
                left = position.left,
                top = position.top,
                "collision search budget exhausted, accepting overlap"
            );
        }

        placed.push(position);
        placements.push(Placement {
            opinion_id: opinion.id.clone(),
            position,
            degraded,
        });
    }

    let self_position = Position {
        left: horizontal(self_score, cfg),
        top: cfg.self_top,
    };
    debug!(
        bubbles = placements.len(),
        degraded = degraded_count,
        "opinion map layout computed"
    );

    OpinionMapLayout {
        placements,
        self_position,
        degraded_count,
    }
}

/// Positions for the theme-selection overview: theme bubbles marching right
/// in 25% strides, alternating between two rows.
pub fn theme_overview_positions(theme_count: usize) -> Vec<Position> {
    (0..theme_count)
        .map(|i| Position {
            left: 20.0 + 25.0 * i as f64,
            top: 30.0 + 20.0 * (i % 2) as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn opinion(id: &str, score: f64, color: &str) -> Opinion {
        Opinion {
            id: id.to_string(),
            theme_id: None,
            title: id.to_string(),
            body: String::new(),
            score,
            color: Some(color.to_string()),
            source_url: None,
            source_name: None,
        }
    }

    #[test]
    fn test_horizontal_rescale() {
        let cfg = LayoutConfig::default();
        assert_eq!(horizontal(-100.0, &cfg), 5.0);
        assert_eq!(horizontal(0.0, &cfg), 50.0);
        assert_eq!(horizontal(100.0, &cfg), 95.0);
        // Out-of-range scores clamp instead of rendering off-canvas.
        assert_eq!(horizontal(250.0, &cfg), 95.0);
        assert_eq!(horizontal(-250.0, &cfg), 5.0);
    }

    #[test]
    fn test_same_color_near_scores_use_distinct_rows() {
        let cfg = LayoutConfig::default();
        let ops = vec![opinion("1", -80.0, "A"), opinion("2", -78.0, "A")];
        let result = layout(&ops, None, 0.0, &cfg);

        let p1 = result.position_of("1").unwrap();
        let p2 = result.position_of("2").unwrap();
        // Nearly identical horizontal positions...
        assert!((p1.left - 14.0).abs() < 1e-9);
        assert!((p2.left - 14.9).abs() < 1e-9);
        // ...but consecutive rows from the group A pattern.
        assert_eq!(p1.top, 21.0);
        assert_eq!(p2.top, 51.0);
        assert_eq!(result.degraded_count, 0);
    }

    #[test]
    fn test_band_cycle_overflow_triggers_collision_search() {
        let cfg = LayoutConfig::default();
        // Four same-color opinions at the same score: the fourth reuses row
        // 21, collides with the first, and the jump search must move it.
        let ops = vec![
            opinion("1", -80.0, "A"),
            opinion("2", -80.0, "A"),
            opinion("3", -80.0, "A"),
            opinion("4", -80.0, "A"),
        ];
        let result = layout(&ops, None, 0.0, &cfg);

        assert_eq!(result.degraded_count, 0);
        let tops: Vec<f64> = result.placements.iter().map(|p| p.position.top).collect();
        assert_eq!(&tops[..3], &[21.0, 51.0, 81.0]);
        // The fourth landed at least a threshold away from every other row.
        for other in &tops[..3] {
            assert!((tops[3] - other).abs() >= cfg.collision_threshold);
        }
    }

    #[test]
    fn test_exhausted_budget_degrades_instead_of_failing() {
        // Zero-length jumps can never escape a collision, forcing the
        // degraded path.
        let cfg = LayoutConfig {
            jump_steps: [0.0, 0.0, 0.0],
            ..LayoutConfig::default()
        };
        let ops = vec![
            opinion("1", -80.0, "A"),
            opinion("2", -80.0, "A"),
            opinion("3", -80.0, "A"),
            opinion("4", -80.0, "A"),
        ];
        let result = layout(&ops, None, 0.0, &cfg);

        assert_eq!(result.placements.len(), 4);
        assert_eq!(result.degraded_count, 1);
        assert!(result.placements[3].degraded);
        // The degraded bubble still got a position.
        assert_eq!(
            result.placements[3].position.top,
            result.placements[0].position.top
        );
    }

    #[test]
    fn test_two_colors_split_into_alternating_bands() {
        let cfg = LayoutConfig::default();
        let ops = vec![
            opinion("1", -90.0, "red"),
            opinion("2", 90.0, "yellow"),
            opinion("3", -60.0, "red"),
            opinion("4", 60.0, "yellow"),
        ];
        let result = layout(&ops, None, 0.0, &cfg);

        assert_eq!(result.position_of("1").unwrap().top, 21.0);
        assert_eq!(result.position_of("2").unwrap().top, 15.0);
        assert_eq!(result.position_of("3").unwrap().top, 51.0);
        assert_eq!(result.position_of("4").unwrap().top, 45.0);
    }

    #[test]
    fn test_single_color_degenerates_to_group_a() {
        let cfg = LayoutConfig::default();
        let ops = vec![opinion("1", -90.0, "red"), opinion("2", 90.0, "red")];
        let result = layout(&ops, None, 0.0, &cfg);
        assert_eq!(result.position_of("1").unwrap().top, 21.0);
        assert_eq!(result.position_of("2").unwrap().top, 51.0);
    }

    #[test]
    fn test_title_area_nudge() {
        let cfg = LayoutConfig::default();
        // Score 0 lands at left=50 and row 21 is in the upper half: the
        // bubble is pushed below the heading.
        let ops = vec![opinion("1", 0.0, "A")];
        let result = layout(&ops, None, 0.0, &cfg);
        assert_eq!(result.position_of("1").unwrap().top, 21.0 + cfg.title_nudge);
    }

    #[test]
    fn test_empty_list_still_places_self_marker() {
        let cfg = LayoutConfig::default();
        let result = layout(&[], None, 40.0, &cfg);
        assert!(result.placements.is_empty());
        assert_eq!(result.degraded_count, 0);
        assert_eq!(result.self_position.left, horizontal(40.0, &cfg));
        assert_eq!(result.self_position.top, cfg.self_top);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let cfg = LayoutConfig::default();
        let ops: Vec<Opinion> = (0..12)
            .map(|i| opinion(&i.to_string(), (i as f64) * 15.0 - 90.0, ["A", "B"][i % 2]))
            .collect();
        let first = layout(&ops, None, 10.0, &cfg);
        let second = layout(&ops, None, 10.0, &cfg);
        for (a, b) in first.placements.iter().zip(&second.placements) {
            assert_eq!(a.position, b.position);
            assert_eq!(a.degraded, b.degraded);
        }
    }

    #[test]
    fn test_theme_overview_positions() {
        let positions = theme_overview_positions(3);
        assert_eq!(positions.len(), 3);
        assert_eq!(positions[0], Position { left: 20.0, top: 30.0 });
        assert_eq!(positions[1], Position { left: 45.0, top: 50.0 });
        assert_eq!(positions[2], Position { left: 70.0, top: 30.0 });
    }

    proptest! {
        #[test]
        fn prop_horizontal_monotone_and_bounded(a in -150.0..=150.0f64, b in -150.0..=150.0f64) {
            let cfg = LayoutConfig::default();
            let (lo, hi) = (a.min(b), a.max(b));
            prop_assert!(horizontal(lo, &cfg) <= horizontal(hi, &cfg));
            let h = horizontal(a, &cfg);
            prop_assert!(h >= cfg.horizontal_offset);
            prop_assert!(h <= cfg.horizontal_offset + cfg.horizontal_range);
        }

        #[test]
        fn prop_every_opinion_gets_one_position(scores in proptest::collection::vec(-120.0..=120.0f64, 0..24)) {
            let cfg = LayoutConfig::default();
            let ops: Vec<Opinion> = scores
                .iter()
                .enumerate()
                .map(|(i, &s)| opinion(&i.to_string(), s, ["A", "B", "C"][i % 3]))
                .collect();
            let result = layout(&ops, None, 0.0, &cfg);
            prop_assert_eq!(result.placements.len(), ops.len());
            for p in &result.placements {
                prop_assert!(p.position.left >= cfg.horizontal_offset);
                prop_assert!(p.position.left <= cfg.horizontal_offset + cfg.horizontal_range);
                prop_assert!(p.position.top > 0.0 && p.position.top < 100.0);
            }
        }
    }
}
