// Pairwise collision test and bounded vertical jump search.
//
// Two bubbles collide when they are closer than the threshold on BOTH axes.
// A colliding candidate keeps its horizontal position (it encodes the stance
// score) and walks its vertical position through a cyclic sequence of jump
// sizes, wrapping modulo the viewport height and re-clamping into the safe
// band. The search budget is attempts_per_step * jump_steps.len(); on
// exhaustion the overlapping position is accepted.

use super::{LayoutConfig, Position};

/// Threshold-box collision test.
pub fn collides(a: Position, b: Position, threshold: f64) -> bool {
    (a.left - b.left).abs() < threshold && (a.top - b.top).abs() < threshold
}

fn collides_any(candidate: Position, placed: &[Position], threshold: f64) -> bool {
    placed.iter().any(|p| collides(candidate, *p, threshold))
}

/// Resolve a candidate against already-placed bubbles.
///
/// Returns the final position and whether the search budget was exhausted
/// (degraded placement, overlap accepted). Never fails.
pub fn resolve_vertical(
    candidate: Position,
    placed: &[Position],
    cfg: &LayoutConfig,
) -> (Position, bool) {
    if !collides_any(candidate, placed, cfg.collision_threshold) {
        return (candidate, false);
    }

    let mut top = candidate.top;
    for &step in &cfg.jump_steps {
        for _ in 0..cfg.attempts_per_step {
            top = (top + step) % 100.0;
            top = top.clamp(cfg.top_min, cfg.top_max);
            let moved = Position { top, ..candidate };
            if !collides_any(moved, placed, cfg.collision_threshold) {
                return (moved, false);
            }
        }
    }

    // Budget exhausted: keep the original overlapping position.
    (candidate, true)
}
