use crate::{Automaton, AutomatonError, Grid, Moore, MooreRule, Result};
use log::{debug, trace};

/// Synchronous driver of a cell-driven rule over an `N`-dimensional torus.
///
/// Every generation is computed from the frozen current grid into a second
/// buffer, and the buffers are swapped only after every cell is evaluated.
/// After a step, the spare buffer holds the previous generation.
#[derive(Clone, Debug)]
pub struct Stepper<R, const N: usize> {
    rule: R,
    moore: Moore<N>,
    cells_curr: Grid<N>,
    cells_next: Grid<N>,
    generation: u64,
}

impl<R: MooreRule, const N: usize> Stepper<R, N> {
    /// Wraps `grid` as generation 0; every cell must lie in the rule's alphabet.
    pub fn new(rule: R, grid: Grid<N>) -> Result<Self> {
        if let Some((index, value)) = grid.find_illegal(rule.states()) {
            return Err(AutomatonError::InvalidSeedPattern(format!(
                "cell {} holds state {}, alphabet has {} states",
                index,
                value,
                rule.states()
            )));
        }
        debug!(
            "stepper created: dims={:?}, population={}",
            grid.dims(),
            grid.population()
        );
        Ok(Self {
            rule,
            moore: Moore::new(),
            cells_next: grid.clone(),
            cells_curr: grid,
            generation: 0,
        })
    }

    pub fn rule(&self) -> &R {
        &self.rule
    }

    pub fn grid(&self) -> &Grid<N> {
        &self.cells_curr
    }

    /// Grid before the last step; equal to [`Stepper::grid`] at generation 0.
    pub fn previous(&self) -> &Grid<N> {
        &self.cells_next
    }

    /// Checks that every cell of the current generation is in the alphabet.
    pub fn validate(&self) -> Result<()> {
        match self.cells_curr.find_illegal(self.rule.states()) {
            Some((index, value)) => Err(AutomatonError::InvalidRuleState {
                index,
                value,
                states: self.rule.states(),
            }),
            None => Ok(()),
        }
    }

    fn update(&mut self) {
        let Self {
            rule,
            moore,
            cells_curr,
            cells_next,
            ..
        } = self;
        let counted = rule.counted_state();
        for (i, next) in cells_next.cells_mut().iter_mut().enumerate() {
            let count = moore.count_matching(cells_curr, cells_curr.position(i), counted);
            // counts past u8::MAX (N >= 6) saturate; no rule here distinguishes them
            let summary = u8::try_from(count).unwrap_or(u8::MAX);
            *next = rule.next_state(cells_curr.cells()[i], summary);
        }
        std::mem::swap(&mut self.cells_next, &mut self.cells_curr);
        self.generation += 1;
        debug_assert!(
            self.validate().is_ok(),
            "generation {}: {:?}",
            self.generation,
            self.validate()
        );
        trace!(
            "generation {}: population={}",
            self.generation,
            self.cells_curr.population()
        );
    }
}

impl<R: MooreRule, const N: usize> Automaton for Stepper<R, N> {
    type Snapshot<'a> = &'a Grid<N> where Self: 'a;

    fn generation(&self) -> u64 {
        self.generation
    }

    fn population(&self) -> usize {
        self.cells_curr.population()
    }

    fn snapshot(&self) -> Self::Snapshot<'_> {
        &self.cells_curr
    }

    fn advance(&mut self) {
        self.update();
    }
}
