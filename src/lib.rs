#![warn(clippy::all)]

mod config;
mod elementary;
mod error;
mod grid;
mod langton;
mod life;
mod neighborhood;
mod rule;
mod stepper;
mod utils;
mod wireworld;

pub use config::Config;
pub use elementary::{ElementaryAutomaton, Rule110};
pub use error::{AutomatonError, Result};
pub use grid::Grid;
pub use langton::{hue_color, Ant, AntSnapshot, Heading, LangtonsAnt};
pub use life::{CellAge, Life2D, Life3D, Life3DSnapshot};
pub use neighborhood::{linear_pattern, Moore};
pub use rule::{ElementaryRule, LifeRule, MooreRule, RuleEngine, WireWorldRule};
pub use stepper::Stepper;
pub use utils::{parse_rle, rle_dims, seeded_rng, wrap, Automaton, NiceInt};
pub use wireworld::{Cell, WireWorld};
