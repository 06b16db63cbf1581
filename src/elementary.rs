use crate::{
    neighborhood::linear_pattern, Automaton, AutomatonError, Config, ElementaryRule, Grid, Result,
    RuleEngine,
};
use log::{debug, trace};

/// One-dimensional elementary automaton whose history is laid out top-down
/// in a `[height, width]` grid.
///
/// Row 0 is the seed and is never overwritten; each step derives the next
/// row from the previous one alone.
#[derive(Clone, Debug)]
pub struct ElementaryAutomaton {
    rule: ElementaryRule,
    history: Grid<2>,
    last_row: usize,
}

/// Rule 110 seeded with [`Config::RULE110_SEED`], see
/// [`ElementaryAutomaton::rule110`].
pub type Rule110 = ElementaryAutomaton;

impl ElementaryAutomaton {
    /// Zero row with `seed` right-aligned on it.
    pub fn new(rule: ElementaryRule, height: usize, width: usize, seed: &[u8]) -> Result<Self> {
        let mut history = Grid::blank([height, width])?;
        if seed.len() > width {
            return Err(AutomatonError::InvalidSeedPattern(format!(
                "seed of {} cells is wider than {}",
                seed.len(),
                width
            )));
        }
        if let Some(&value) = seed.iter().find(|&&v| v >= rule.states()) {
            return Err(AutomatonError::InvalidSeedPattern(format!(
                "seed holds state {}, rule {} is binary",
                value,
                rule.number()
            )));
        }
        history.cells_mut()[width - seed.len()..width].copy_from_slice(seed);
        debug!(
            "elementary rule {}: {}x{}, seed={:?}",
            rule.number(),
            height,
            width,
            seed
        );
        Ok(Self {
            rule,
            history,
            last_row: 0,
        })
    }

    pub fn rule110(height: usize, width: usize) -> Result<Self> {
        Self::new(ElementaryRule::RULE_110, height, width, &Config::RULE110_SEED)
    }

    pub fn rule(&self) -> ElementaryRule {
        self.rule
    }

    pub fn history(&self) -> &Grid<2> {
        &self.history
    }

    /// Most recently generated row.
    pub fn current_row(&self) -> &[u8] {
        self.history.row(self.last_row)
    }

    /// Whether every row of the history has been generated.
    pub fn is_complete(&self) -> bool {
        self.last_row + 1 == self.history.height()
    }

    /// Generates all remaining rows.
    pub fn generate(&mut self) -> &Grid<2> {
        while !self.is_complete() {
            self.advance();
        }
        &self.history
    }
}

impl Automaton for ElementaryAutomaton {
    type Snapshot<'a> = &'a Grid<2>;

    fn generation(&self) -> u64 {
        self.last_row as u64
    }

    fn population(&self) -> usize {
        self.history.population()
    }

    fn snapshot(&self) -> Self::Snapshot<'_> {
        &self.history
    }

    /// No-op once the history is complete.
    fn advance(&mut self) {
        if self.is_complete() {
            return;
        }
        let w = self.history.width();
        let (done, rest) = self
            .history
            .cells_mut()
            .split_at_mut((self.last_row + 1) * w);
        let prev = &done[self.last_row * w..];
        for (col, next) in rest[..w].iter_mut().enumerate() {
            *next = self.rule.next_state(prev[col], linear_pattern(prev, col));
        }
        self.last_row += 1;
        trace!("row {}: {:?}", self.last_row, self.current_row());
    }
}
