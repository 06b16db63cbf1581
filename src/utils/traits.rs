use crate::Config;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Common driver interface of every variant.
///
/// A generation boundary is always a consistent snapshot, so a driver may
/// stop after any call to [`Automaton::step`].
pub trait Automaton {
    /// Borrowed view handed to the rendering side.
    type Snapshot<'a>
    where
        Self: 'a;

    /// Number of generations (agent ticks for Langton's ants) applied so far.
    fn generation(&self) -> u64;

    /// Number of cells in a non-zero state.
    fn population(&self) -> usize;

    fn snapshot(&self) -> Self::Snapshot<'_>;

    /// Applies exactly one generation.
    fn advance(&mut self);

    fn step(&mut self) -> Self::Snapshot<'_> {
        self.advance();
        self.snapshot()
    }

    /// Applies `n` generations and returns the final snapshot.
    fn run(&mut self, n: u64) -> Self::Snapshot<'_> {
        for _ in 0..n {
            self.advance();
        }
        self.snapshot()
    }
}

/// Generator for the random constructors.
///
/// Falls back to [`Config::default_seed`], then to entropy.
pub fn seeded_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed.or_else(Config::default_seed) {
        Some(x) => ChaCha8Rng::seed_from_u64(x),
        None => ChaCha8Rng::from_entropy(),
    }
}
