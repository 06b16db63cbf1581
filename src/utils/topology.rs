/// Maps `index + offset` back onto `0..extent`.
///
/// Every axis is closed on itself, so opposite edges are adjacent and no
/// neighbor is ever missing at a boundary.
#[inline]
pub fn wrap(index: usize, offset: isize, extent: usize) -> usize {
    debug_assert!(extent > 0);
    (index as isize + offset).rem_euclid(extent as isize) as usize
}
