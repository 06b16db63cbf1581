use crate::{AutomatonError, Config, Grid, Result, RuleEngine, Stepper, WireWorldRule};
use log::debug;

/// WireWorld on a `[height, width]` torus.
pub type WireWorld = Stepper<WireWorldRule, 2>;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Cell {
    Empty = WireWorldRule::EMPTY,
    Conductor = WireWorldRule::CONDUCTOR,
    Head = WireWorldRule::HEAD,
    Tail = WireWorldRule::TAIL,
}

impl TryFrom<u8> for Cell {
    type Error = AutomatonError;

    fn try_from(state: u8) -> Result<Self> {
        match state {
            WireWorldRule::EMPTY => Ok(Cell::Empty),
            WireWorldRule::CONDUCTOR => Ok(Cell::Conductor),
            WireWorldRule::HEAD => Ok(Cell::Head),
            WireWorldRule::TAIL => Ok(Cell::Tail),
            _ => Err(AutomatonError::InvalidSeedPattern(format!(
                "{} is not a WireWorld state",
                state
            ))),
        }
    }
}

impl Stepper<WireWorldRule, 2> {
    /// A conductor segment across the middle row with one electron about to
    /// travel rightwards.
    pub fn segment(height: usize, width: usize) -> Result<Self> {
        Self::from_grid(Self::segment_grid(height, width)?)
    }

    /// Layout used by [`WireWorld::segment`]: a horizontal conductor of
    /// [`Config::WIREWORLD_SEGMENT`] cells centered on the middle row, with
    /// the head just left of the center and the tail behind it.
    pub fn segment_grid(height: usize, width: usize) -> Result<Grid<2>> {
        let len = Config::WIREWORLD_SEGMENT;
        let mut grid = Grid::blank([height, width])?;
        if width < len {
            return Err(AutomatonError::InvalidSeedPattern(format!(
                "segment of {} cells does not fit in width {}",
                len, width
            )));
        }
        let (row, mid) = (height / 2, width / 2);
        let start = mid - len / 2;
        for col in start..start + len {
            grid.set([row, col], WireWorldRule::CONDUCTOR);
        }
        grid.set([row, mid - 1], WireWorldRule::HEAD);
        grid.set([row, mid - 2], WireWorldRule::TAIL);
        debug!("wireworld segment: row={}, cols={}..{}", row, start, start + len);
        Ok(grid)
    }

    pub fn from_grid(grid: Grid<2>) -> Result<Self> {
        Stepper::new(WireWorldRule, grid)
    }

    /// Blank field with a multi-state RLE circuit (`.`, `A`, `B`, `C`)
    /// stamped at its origin.
    pub fn from_rle(height: usize, width: usize, data: &[u8]) -> Result<Self> {
        let mut grid = Grid::blank([height, width])?;
        let pattern = Grid::from_rle_within(data, WireWorldRule.states(), grid.dims())?;
        grid.paste([0, 0], &pattern)?;
        Self::from_grid(grid)
    }

    pub fn cell(&self, pos: [usize; 2]) -> Cell {
        match self.grid().get(pos) {
            WireWorldRule::CONDUCTOR => Cell::Conductor,
            WireWorldRule::HEAD => Cell::Head,
            WireWorldRule::TAIL => Cell::Tail,
            _ => Cell::Empty,
        }
    }
}
