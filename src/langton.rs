use crate::{
    utils::{seeded_rng, wrap},
    Automaton, AutomatonError, Config, Grid, Result,
};
use log::{debug, trace};
use rand::Rng;

/// Cardinal direction of an ant; the discriminants follow clockwise order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    North = 0,
    East = 1,
    South = 2,
    West = 3,
}

impl Heading {
    /// Reduces `index` modulo 4.
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Heading::North,
            1 => Heading::East,
            2 => Heading::South,
            _ => Heading::West,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Clockwise, +1.
    pub fn turn_right(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Counter-clockwise, -1.
    pub fn turn_left(self) -> Self {
        Self::from_index(self.index() + 3)
    }

    /// `[d_row, d_col]` of one step.
    pub fn offset(self) -> [isize; 2] {
        match self {
            Heading::North => [-1, 0],
            Heading::East => [0, 1],
            Heading::South => [1, 0],
            Heading::West => [0, -1],
        }
    }
}

/// Agent walking the shared tape, with a private record of where it has been.
#[derive(Clone, Debug)]
pub struct Ant {
    position: [usize; 2],
    heading: Heading,
    color: [f64; 3],
    trail: Grid<2>,
}

impl Ant {
    pub fn position(&self) -> [usize; 2] {
        self.position
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// RGB in `[0, 1]`, only meaningful to the renderer.
    pub fn color(&self) -> [f64; 3] {
        self.color
    }

    /// 1 on every cell the ant has ever left; never cleared.
    pub fn trail(&self) -> &Grid<2> {
        &self.trail
    }
}

/// RGB of the `index`-th of `count` ants: hue `index / count`, with
/// saturation and value from [`Config`].
pub fn hue_color(index: usize, count: usize) -> [f64; 3] {
    let (h, s, v) = (
        index as f64 / count.max(1) as f64,
        Config::ANT_SATURATION,
        Config::ANT_VALUE,
    );
    let sector = (h * 6.).floor();
    let f = h * 6. - sector;
    let (p, q, t) = (v * (1. - s), v * (1. - s * f), v * (1. - s * (1. - f)));
    match sector as i64 % 6 {
        0 => [v, t, p],
        1 => [q, v, p],
        2 => [p, v, t],
        3 => [p, q, v],
        4 => [t, p, v],
        _ => [v, p, q],
    }
}

/// Uniform in `[-ceil(extent / 4), extent / 4)`; the lower bound is floored
/// division of `-extent`, so extents below 4 always give -1.
fn center_offset<R: Rng>(rng: &mut R, extent: usize) -> isize {
    let extent = extent as isize;
    rng.gen_range((-extent).div_euclid(4)..extent / 4)
}

/// Borrowed frame of a [`LangtonsAnt`] colony.
#[derive(Clone, Copy, Debug)]
pub struct AntSnapshot<'a> {
    pub tape: &'a Grid<2>,
    pub ants: &'a [Ant],
}

impl<'a> AntSnapshot<'a> {
    pub fn trails(&self) -> impl Iterator<Item = (&'a Grid<2>, [f64; 3])> + 'a {
        self.ants.iter().map(|ant| (&ant.trail, ant.color))
    }

    /// Per-cell RGB: each trail weighted by its ant's color, summed, then
    /// scaled so that the brightest channel is 1.
    pub fn combined(&self) -> Vec<[f64; 3]> {
        let mut result = vec![[0.; 3]; self.tape.len()];
        for (trail, color) in self.trails() {
            for (pixel, &visited) in result.iter_mut().zip(trail.cells()) {
                for (channel, c) in pixel.iter_mut().zip(color) {
                    *channel += visited as f64 * c;
                }
            }
        }
        let max = result.iter().flatten().copied().fold(0., f64::max);
        if max > 0. {
            result.iter_mut().flatten().for_each(|c| *c /= max);
        }
        result
    }
}

/// Several Langton's ants sharing one binary tape on a torus.
///
/// Ants move in their stored order and each one writes the tape immediately,
/// so the order is part of the dynamics.
#[derive(Clone, Debug)]
pub struct LangtonsAnt {
    tape: Grid<2>,
    ants: Vec<Ant>,
    ticks: u64,
}

impl LangtonsAnt {
    /// `num_ants` ants placed within a quarter of each extent around the
    /// center, with random headings.
    pub fn random(
        height: usize,
        width: usize,
        num_ants: usize,
        seed: Option<u64>,
    ) -> Result<Self> {
        let tape = Grid::blank([height, width])?;
        let mut rng = seeded_rng(seed);
        let mut placements = Vec::with_capacity(num_ants);
        for _ in 0..num_ants {
            let row = wrap(height / 2, center_offset(&mut rng, height), height);
            let col = wrap(width / 2, center_offset(&mut rng, width), width);
            let heading = Heading::from_index(rng.gen_range(0..4));
            placements.push(([row, col], heading));
        }
        Self::with_ants(tape, &placements)
    }

    /// Ants at explicit positions, in the given order; positions wrap onto
    /// the tape.
    pub fn with_ants(tape: Grid<2>, placements: &[([usize; 2], Heading)]) -> Result<Self> {
        if placements.is_empty() {
            return Err(AutomatonError::InvalidSeedPattern(
                "at least one ant is required".to_string(),
            ));
        }
        if let Some((index, value)) = tape.find_illegal(2) {
            return Err(AutomatonError::InvalidSeedPattern(format!(
                "tape cell {} holds state {}, tape is binary",
                index, value
            )));
        }
        let [height, width] = tape.dims();
        let ants = placements
            .iter()
            .enumerate()
            .map(|(i, &([row, col], heading))| -> Result<Ant> {
                Ok(Ant {
                    position: [row % height, col % width],
                    heading,
                    color: hue_color(i, placements.len()),
                    trail: Grid::blank([height, width])?,
                })
            })
            .collect::<Result<Vec<_>>>()?;
        debug!(
            "langton's ants: {}x{}, ants={:?}",
            height,
            width,
            ants.iter().map(|a| (a.position, a.heading)).collect::<Vec<_>>()
        );
        Ok(Self {
            tape,
            ants,
            ticks: 0,
        })
    }

    pub fn tape(&self) -> &Grid<2> {
        &self.tape
    }

    pub fn ants(&self) -> &[Ant] {
        &self.ants
    }

    /// Moves every ant once, in order.
    pub fn tick(&mut self) {
        let Self { tape, ants, .. } = self;
        let [height, width] = tape.dims();
        for ant in ants.iter_mut() {
            let index = tape.index(ant.position);
            let current = tape.cells()[index];
            tape.cells_mut()[index] = 1 - current;
            ant.trail.cells_mut()[index] = 1;
            ant.heading = if current == 0 {
                ant.heading.turn_right()
            } else {
                ant.heading.turn_left()
            };
            let [dr, dc] = ant.heading.offset();
            let [row, col] = ant.position;
            ant.position = [wrap(row, dr, height), wrap(col, dc, width)];
        }
        self.ticks += 1;
    }

    /// Runs `substeps` ticks and returns the resulting frame.
    pub fn step(&mut self, substeps: usize) -> AntSnapshot<'_> {
        for _ in 0..substeps {
            self.tick();
        }
        trace!("tick {}: black={}", self.ticks, self.tape.population());
        self.snapshot()
    }
}

impl Automaton for LangtonsAnt {
    type Snapshot<'a> = AntSnapshot<'a>;

    fn generation(&self) -> u64 {
        self.ticks
    }

    fn population(&self) -> usize {
        self.tape.population()
    }

    fn snapshot(&self) -> Self::Snapshot<'_> {
        AntSnapshot {
            tape: &self.tape,
            ants: &self.ants,
        }
    }

    fn advance(&mut self) {
        self.tick();
    }
}
