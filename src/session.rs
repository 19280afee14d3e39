//! Session-scoped user state: one stance scalar per theme plus the set of
//! opinions the user has already reacted to.
//!
//! The state is an explicit object passed into the core's pure functions,
//! never ambient. It carries no history: a vote replaces the old stance, it
//! does not version it.

use std::collections::{HashMap, HashSet};

use crate::stance::{Vote, update_stance};

/// Per-session voting state across themes.
#[derive(Debug, Default, Clone)]
pub struct SessionState {
    stances: HashMap<String, f64>,
    voted: HashSet<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current stance for a theme. A theme that has never been opened or
    /// voted on reads as neutral (0).
    pub fn stance(&self, theme_id: &str) -> f64 {
        self.stances.get(theme_id).copied().unwrap_or(0.0)
    }

    /// Seed a stance restored from the vote service for an authenticated user.
    pub fn restore(&mut self, theme_id: &str, score: f64) {
        self.stances
            .insert(theme_id.to_string(), crate::model::clamp_score(score));
    }

    /// Whether the user has already reacted to this opinion.
    pub fn has_voted(&self, opinion_id: &str) -> bool {
        self.voted.contains(opinion_id)
    }

    /// Register a reaction to an opinion and return the updated stance.
    ///
    /// Each opinion accepts at most one reaction per session: a repeat vote
    /// returns `None` and leaves all state untouched.
    pub fn apply_vote(
        &mut self,
        theme_id: &str,
        opinion_id: &str,
        opinion_score: f64,
        vote: Vote,
    ) -> Option<f64> {
        if !self.voted.insert(opinion_id.to_string()) {
            return None;
        }
        let new_score = update_stance(self.stance(theme_id), opinion_score, vote);
        self.stances.insert(theme_id.to_string(), new_score);
        Some(new_score)
    }
}
