// Alternating row band assignment.
//
// Opinions are split into two groups by the first-seen index of their color
// (mod 2). Each group hands out vertical rows from its own cyclic pattern in
// iteration order, spreading same-color bubbles across distinct rows before
// any row is reused.

use std::collections::HashMap;

use super::LayoutConfig;

pub struct BandCycle<'a> {
    cfg: &'a LayoutConfig,
    /// Color -> band group (0 or 1), in first-seen order.
    groups: HashMap<String, usize>,
    /// Per-group position within the row pattern.
    counters: [usize; 2],
}

impl<'a> BandCycle<'a> {
    pub fn new(cfg: &'a LayoutConfig) -> Self {
        Self {
            cfg,
            groups: HashMap::new(),
            counters: [0, 0],
        }
    }

    /// Next row for a bubble of the given color.
    ///
    /// A color seen for the first time joins group `distinct_colors % 2`, so
    /// a theme with a single color degenerates to cycling group A's pattern
    /// alone.
    pub fn next_row(&mut self, color: &str) -> f64 {
        let next_group = self.groups.len() % 2;
        let group = *self
            .groups
            .entry(color.to_string())
            .or_insert(next_group);

        let rows = if group == 0 {
            &self.cfg.rows_a
        } else {
            &self.cfg.rows_b
        };
        let row = rows[self.counters[group] % rows.len()];
        self.counters[group] += 1;
        row
    }
}
