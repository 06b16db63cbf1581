mod format_int;
mod parse_rle;
mod topology;
mod traits;

pub use format_int::NiceInt;
pub use parse_rle::{parse_rle, rle_dims};
pub use topology::wrap;
pub use traits::{seeded_rng, Automaton};
