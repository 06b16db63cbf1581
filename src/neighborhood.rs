use crate::{utils::wrap, Grid};

/// Moore neighborhood in `N` dimensions: every cell at Chebyshev distance 1,
/// excluding the center (8 in 2D, 26 in 3D).
#[derive(Clone, Debug)]
pub struct Moore<const N: usize> {
    offsets: Vec<[isize; N]>,
}

impl<const N: usize> Default for Moore<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Moore<N> {
    pub fn new() -> Self {
        let total = 3usize.pow(N as u32);
        let mut offsets = Vec::with_capacity(total - 1);
        for code in 0..total {
            let mut offset = [0; N];
            let mut rest = code;
            for d in offset.iter_mut().rev() {
                *d = (rest % 3) as isize - 1;
                rest /= 3;
            }
            if offset.iter().any(|&d| d != 0) {
                offsets.push(offset);
            }
        }
        Self { offsets }
    }

    pub fn offsets(&self) -> &[[isize; N]] {
        &self.offsets
    }

    /// Counts neighbors of `pos` that are in state `target`.
    ///
    /// On extents below 3 the same cell is reached through several offsets
    /// and is counted once per offset, as the torus demands.
    pub fn count_matching(&self, grid: &Grid<N>, pos: [usize; N], target: u8) -> usize {
        self.offsets
            .iter()
            .filter(|&&offset| grid.get_wrapped(pos, offset) == target)
            .count()
    }
}

/// Three-bit pattern `left*4 + center*2 + right` of column `col`, wrapping
/// around the ends of `row`.
pub fn linear_pattern(row: &[u8], col: usize) -> u8 {
    let w = row.len();
    let left = row[wrap(col, -1, w)];
    let right = row[wrap(col, 1, w)];
    (left << 2) | (row[col] << 1) | right
}
