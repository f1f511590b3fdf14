use std::fmt::Debug;

use crate::dtype::Element;
use crate::error::Result;
use crate::grid::Grid;

/// Trait for pluggable tiled-kernel backends (sequential CPU, rayon, ...).
///
/// Every backend validates its operands before touching any element, so a
/// call that returns an error leaves `c` / `output` unchanged. Backends must
/// produce results identical to the sequential tiled kernels.
pub trait TileBackend<T: Element>: Send + Sync + Debug {
    /// Returns the name of this backend (e.g., "cpu", "rayon").
    fn name(&self) -> &str;

    /// Tiled matrix product accumulated into C: `C += A * B`.
    ///
    /// - `a`, `b`, `c`: square grids sharing one dimension N
    /// - `tile_size`: tile edge T, at least 1; need not divide N
    fn multiply(&self, a: &Grid<T>, b: &Grid<T>, c: &mut Grid<T>, tile_size: usize) -> Result<()>;

    /// Tiled zero-padded correlation, overwriting every cell of `output`.
    ///
    /// - `image`: square grid of dimension N
    /// - `kernel`: square grid of odd dimension K (K may exceed N)
    /// - `output`: grid of dimension N
    /// - `tile_size`: tile edge T, at least 1
    fn convolve(
        &self,
        image: &Grid<T>,
        kernel: &Grid<T>,
        output: &mut Grid<T>,
        tile_size: usize,
    ) -> Result<()>;
}
