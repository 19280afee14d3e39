//! Stance aggregation: fold a single agree/oppose reaction into the user's
//! scalar position for a theme.
//!
//! This is a pure client-side mirror of the vote service's formula, used for
//! optimistic UI updates while the server round trip is in flight. The server
//! stays authoritative for the persisted score.

use serde::{Deserialize, Serialize};

use crate::model::clamp_score;

/// How far a single reaction moves the user toward the target stance.
///
/// Tunable. 0.2 means each reaction covers a fifth of the remaining distance,
/// so repeated agreement converges geometrically without ever overshooting.
pub const BLEND_WEIGHT: f64 = 0.2;

/// A reaction to one opinion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vote {
    Agree,
    Oppose,
}

impl Vote {
    /// Parse the wire spelling used by the vote endpoint.
    pub fn from_wire(s: &str) -> Option<Self> {
        match s {
            "agree" => Some(Vote::Agree),
            "oppose" => Some(Vote::Oppose),
            _ => None,
        }
    }
}

/// Compute the user's new stance after reacting to an opinion.
///
/// Agreeing moves toward the opinion's score; opposing moves toward its
/// mirror point (disagreeing with a pro-X opinion is evidence of an anti-X
/// stance). The result is clamped to [-100, 100].
///
/// Pure and total: same inputs always give the same output, and no input
/// produces an error. At-most-once voting per opinion is enforced by the
/// caller (see [`crate::session::SessionState`]), not here.
pub fn update_stance(current: f64, opinion: f64, vote: Vote) -> f64 {
    let current = clamp_score(current);
    let target = match vote {
        Vote::Agree => clamp_score(opinion),
        Vote::Oppose => -clamp_score(opinion),
    };
    clamp_score(current + BLEND_WEIGHT * (target - current))
}
