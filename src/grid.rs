use crate::{utils::wrap, AutomatonError, Result};
use rand::Rng;

/// Dense toroidal array of small-integer cell states.
///
/// Axis 0 varies slowest: a 2D grid is `[height, width]` and
/// `pos = [row, col]`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<const N: usize> {
    dims: [usize; N],
    cells: Vec<u8>,
}

impl<const N: usize> Grid<N> {
    /// Creates a grid filled with state 0.
    pub fn blank(dims: [usize; N]) -> Result<Self> {
        let mut size = 1usize;
        for (axis, &extent) in dims.iter().enumerate() {
            size = match size.checked_mul(extent) {
                Some(s) if extent > 0 => s,
                _ => return Err(AutomatonError::InvalidDimension { axis, extent }),
            };
        }
        Ok(Self {
            dims,
            cells: vec![0; size],
        })
    }

    /// Creates a grid from row-major states, each of which must be below `states`.
    pub fn from_cells(dims: [usize; N], cells: Vec<u8>, states: u8) -> Result<Self> {
        let mut result = Self::blank(dims)?;
        if cells.len() != result.cells.len() {
            return Err(AutomatonError::InvalidSeedPattern(format!(
                "{} cells given for a grid of {}",
                cells.len(),
                result.cells.len()
            )));
        }
        result.cells = cells;
        if let Some((index, value)) = result.find_illegal(states) {
            return Err(AutomatonError::InvalidSeedPattern(format!(
                "cell {} holds state {}, alphabet has {} states",
                index, value, states
            )));
        }
        Ok(result)
    }

    /// Creates a binary grid where each cell is alive with probability `density`.
    pub fn random<R: Rng>(dims: [usize; N], density: f64, rng: &mut R) -> Result<Self> {
        if !(0.0..=1.0).contains(&density) {
            return Err(AutomatonError::InvalidSeedPattern(format!(
                "density {} is outside [0, 1]",
                density
            )));
        }
        let mut result = Self::blank(dims)?;
        for cell in result.cells.iter_mut() {
            *cell = rng.gen_bool(density) as u8;
        }
        Ok(result)
    }

    pub fn dims(&self) -> [usize; N] {
        self.dims
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row-major index of `pos`.
    ///
    /// # Panics
    ///
    /// If `pos` is outside the grid on any axis; use [`Grid::get_wrapped`]
    /// for toroidal access.
    pub fn index(&self, pos: [usize; N]) -> usize {
        let mut index = 0;
        for axis in 0..N {
            assert!(
                pos[axis] < self.dims[axis],
                "position {:?} is outside a grid of {:?}",
                pos,
                self.dims
            );
            index = index * self.dims[axis] + pos[axis];
        }
        index
    }

    pub fn position(&self, mut index: usize) -> [usize; N] {
        let mut pos = [0; N];
        for axis in (0..N).rev() {
            pos[axis] = index % self.dims[axis];
            index /= self.dims[axis];
        }
        pos
    }

    pub fn get(&self, pos: [usize; N]) -> u8 {
        self.cells[self.index(pos)]
    }

    pub fn set(&mut self, pos: [usize; N], state: u8) {
        let index = self.index(pos);
        self.cells[index] = state;
    }

    /// State of the cell at `pos + offset`, wrapped on every axis.
    pub fn get_wrapped(&self, pos: [usize; N], offset: [isize; N]) -> u8 {
        self.cells[self.wrapped_index(pos, offset)]
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [u8] {
        &mut self.cells
    }

    /// Number of cells in `state`.
    pub fn count(&self, state: u8) -> usize {
        self.cells.iter().filter(|&&c| c == state).count()
    }

    /// Number of cells in any state other than 0.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&c| c != 0).count()
    }

    /// Stamps `pattern` with its origin at `origin`, wrapping around the edges.
    pub fn paste(&mut self, origin: [usize; N], pattern: &Grid<N>) -> Result<()> {
        for axis in 0..N {
            if pattern.dims[axis] > self.dims[axis] {
                return Err(AutomatonError::InvalidSeedPattern(format!(
                    "pattern extent {} exceeds grid extent {} on axis {}",
                    pattern.dims[axis], self.dims[axis], axis
                )));
            }
        }
        for (i, &state) in pattern.cells.iter().enumerate() {
            let offset = pattern.position(i).map(|x| x as isize);
            let index = self.wrapped_index(origin, offset);
            self.cells[index] = state;
        }
        Ok(())
    }

    /// Returns a copy shifted by `shift` cells along every axis.
    pub fn rolled(&self, shift: [isize; N]) -> Self {
        let mut result = self.clone();
        for (i, &state) in self.cells.iter().enumerate() {
            let index = self.wrapped_index(self.position(i), shift);
            result.cells[index] = state;
        }
        result
    }

    /// First cell whose state is not below `states`.
    pub fn find_illegal(&self, states: u8) -> Option<(usize, u8)> {
        self.cells
            .iter()
            .enumerate()
            .find(|&(_, &value)| value >= states)
            .map(|(index, &value)| (index, value))
    }

    fn wrapped_index(&self, pos: [usize; N], offset: [isize; N]) -> usize {
        let mut index = 0;
        for axis in 0..N {
            index = index * self.dims[axis] + wrap(pos[axis], offset[axis], self.dims[axis]);
        }
        index
    }
}

impl Grid<2> {
    pub fn height(&self) -> usize {
        self.dims[0]
    }

    pub fn width(&self) -> usize {
        self.dims[1]
    }

    pub fn row(&self, row: usize) -> &[u8] {
        let w = self.width();
        &self.cells[row * w..(row + 1) * w]
    }

    /// Parses an RLE pattern into a grid of exactly the declared size.
    pub fn from_rle(data: &[u8], states: u8) -> Result<Self> {
        let (dims, cells) = crate::parse_rle(data)?;
        Self::from_cells(dims, cells, states)
    }

    /// Like [`Grid::from_rle`], but a declared size larger than `bounds` is
    /// rejected before any cell is decoded.
    pub fn from_rle_within(data: &[u8], states: u8, bounds: [usize; 2]) -> Result<Self> {
        let [height, width] = crate::rle_dims(data)?;
        if height > bounds[0] || width > bounds[1] {
            return Err(AutomatonError::InvalidSeedPattern(format!(
                "pattern of {}x{} does not fit in {}x{}",
                width, height, bounds[1], bounds[0]
            )));
        }
        Self::from_rle(data, states)
    }
}

impl std::fmt::Display for Grid<2> {
    /// One character per cell: `.` for 0, then `#`, `H`, `t`, and digits
    /// for higher states.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks_exact(self.width()) {
            let line = row
                .iter()
                .map(|&c| match c {
                    0 => '.',
                    1 => '#',
                    2 => 'H',
                    3 => 't',
                    c => char::from_digit(c as u32 % 10, 10).unwrap_or('?'),
                })
                .collect::<String>();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
