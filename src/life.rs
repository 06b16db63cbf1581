use crate::{utils::seeded_rng, Automaton, Config, Grid, LifeRule, Result, Stepper};
use log::debug;

/// Conway's Game of Life (B3/S23) on a `[height, width]` torus.
pub type Life2D = Stepper<LifeRule, 2>;

impl Stepper<LifeRule, 2> {
    /// Random field; `density` defaults to [`Config::LIFE_2D_DENSITY`].
    pub fn random(
        height: usize,
        width: usize,
        density: Option<f64>,
        seed: Option<u64>,
    ) -> Result<Self> {
        let density = density.unwrap_or(Config::LIFE_2D_DENSITY);
        let grid = Grid::random([height, width], density, &mut seeded_rng(seed))?;
        debug!("life 2d: {}x{}, density={}", height, width, density);
        Self::from_grid(grid)
    }

    pub fn from_grid(grid: Grid<2>) -> Result<Self> {
        Stepper::new(LifeRule::CONWAY, grid)
    }

    /// Blank field with an RLE pattern stamped in its center.
    pub fn from_rle(height: usize, width: usize, data: &[u8]) -> Result<Self> {
        let mut grid = Grid::blank([height, width])?;
        let pattern = Grid::from_rle_within(data, 2, grid.dims())?;
        let origin = [
            height.saturating_sub(pattern.height()) / 2,
            width.saturating_sub(pattern.width()) / 2,
        ];
        grid.paste(origin, &pattern)?;
        Self::from_grid(grid)
    }
}

/// Consecutive generations each cell of a 3D life has been alive.
///
/// Carried alongside the cell states; it never feeds back into the rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellAge {
    ages: Vec<u32>,
}

impl CellAge {
    fn new(len: usize) -> Self {
        Self { ages: vec![0; len] }
    }

    /// Survivors age by one; newborn and dead cells restart at 0.
    fn advance<const N: usize>(&mut self, prev: &Grid<N>, curr: &Grid<N>) {
        let cells = prev.cells().iter().zip(curr.cells());
        for (age, (&before, &after)) in self.ages.iter_mut().zip(cells) {
            *age = if before == LifeRule::ALIVE && after == LifeRule::ALIVE {
                age.saturating_add(1)
            } else {
                0
            };
        }
    }

    pub fn as_slice(&self) -> &[u32] {
        &self.ages
    }

    pub fn max(&self) -> u32 {
        self.ages.iter().copied().max().unwrap_or(0)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Life3DSnapshot<'a> {
    pub cells: &'a Grid<3>,
    pub ages: &'a CellAge,
}

/// 3D life (B5/S45) on a cubic torus, tracking cell ages.
#[derive(Clone, Debug)]
pub struct Life3D {
    stepper: Stepper<LifeRule, 3>,
    ages: CellAge,
}

impl Life3D {
    /// Random `size`³ field; `density` defaults to [`Config::LIFE_3D_DENSITY`].
    pub fn random(size: usize, density: Option<f64>, seed: Option<u64>) -> Result<Self> {
        let density = density.unwrap_or(Config::LIFE_3D_DENSITY);
        let grid = Grid::random([size; 3], density, &mut seeded_rng(seed))?;
        debug!("life 3d: {}^3, density={}", size, density);
        Self::from_grid(grid)
    }

    /// Every cell starts with age 0.
    pub fn from_grid(grid: Grid<3>) -> Result<Self> {
        let ages = CellAge::new(grid.len());
        Ok(Self {
            stepper: Stepper::new(LifeRule::LIFE_3D, grid)?,
            ages,
        })
    }

    pub fn grid(&self) -> &Grid<3> {
        self.stepper.grid()
    }

    pub fn ages(&self) -> &CellAge {
        &self.ages
    }

    pub fn age(&self, pos: [usize; 3]) -> u32 {
        self.ages.ages[self.grid().index(pos)]
    }

    /// Oldest age on the field, for scaling a color gradient.
    pub fn max_age(&self) -> u32 {
        self.ages.max()
    }

    pub fn validate(&self) -> Result<()> {
        self.stepper.validate()
    }
}

impl Automaton for Life3D {
    type Snapshot<'a> = Life3DSnapshot<'a>;

    fn generation(&self) -> u64 {
        self.stepper.generation()
    }

    fn population(&self) -> usize {
        self.stepper.population()
    }

    fn snapshot(&self) -> Self::Snapshot<'_> {
        Life3DSnapshot {
            cells: self.stepper.grid(),
            ages: &self.ages,
        }
    }

    fn advance(&mut self) {
        self.stepper.advance();
        self.ages.advance(self.stepper.previous(), self.stepper.grid());
    }
}
