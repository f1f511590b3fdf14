//! Ready-made correlation kernels.

use crate::dtype::Element;
use crate::error::Result;
use crate::grid::Grid;
use crate::shape::{self, Dims};

/// 3x3 sharpen filter `[[0,-1,0],[-1,5,-1],[0,-1,0]]`.
pub fn sharpen<T: Element>() -> Grid<T> {
    const TAPS: [i8; 9] = [0, -1, 0, -1, 5, -1, 0, -1, 0];
    Grid::from_fn(Dims::square(3), |i, j| T::from_i8(TAPS[i * 3 + j]))
}

/// `k x k` kernel with a single 1 at the centre; correlating with it copies
/// the image.
///
/// # Errors
/// Returns `TileError::EvenKernel` if `k` is even.
pub fn identity<T: Element>(k: usize) -> Result<Grid<T>> {
    shape::require_odd_kernel(k)?;
    let pad = k / 2;
    Ok(Grid::from_fn(Dims::square(k), |i, j| {
        if i == pad && j == pad {
            T::ONE
        } else {
            T::ZERO
        }
    }))
}
