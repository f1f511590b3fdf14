use crate::backend::TileBackend;
use crate::config::TileConfig;
use crate::cpu::CpuBackend;
use crate::dtype::Element;
use crate::error::Result;
use crate::grid::Grid;
use crate::shape::require_dims;

/// Tiled `C += A * B` on the default CPU backend.
///
/// `c` is accumulated into: pass a zero-filled grid for a fresh product.
///
/// # Errors
/// Returns a `TileError` if the grids are not square with one shared
/// dimension, or if `tile_size` is zero. `c` is unchanged on error.
///
/// # Example
///
/// ```
/// use tk_core::{multiply, Dims, Grid};
///
/// let a: Grid<i32> = Grid::filled(Dims::square(4), 1);
/// let b: Grid<i32> = Grid::filled(Dims::square(4), 1);
/// let mut c: Grid<i32> = Grid::zeros(Dims::square(4));
///
/// multiply(&a, &b, &mut c, 2).unwrap();
/// assert!(c.as_slice().iter().all(|&v| v == 4));
/// ```
pub fn multiply<T: Element>(
    a: &Grid<T>,
    b: &Grid<T>,
    c: &mut Grid<T>,
    tile_size: usize,
) -> Result<()> {
    CpuBackend.multiply(a, b, c, tile_size)
}

/// Tiled zero-padded correlation on the default CPU backend.
///
/// Every cell of `output` is overwritten. The kernel is applied as-is (not
/// flipped); flip it beforehand for a true convolution.
///
/// # Errors
/// Returns a `TileError` if the image or kernel is not square, the kernel
/// edge is even, `output` does not match the image, or `tile_size` is zero.
///
/// # Example
///
/// ```
/// use tk_core::{convolve, presets, Dims, Grid};
///
/// let image: Grid<i32> = Grid::filled(Dims::square(3), 1);
/// let mut out = Grid::zeros(Dims::square(3));
///
/// convolve(&image, &presets::sharpen(), &mut out, 2).unwrap();
/// assert_eq!(out[(1, 1)], 1);
/// assert_eq!(out[(0, 0)], 3);
/// ```
pub fn convolve<T: Element>(
    image: &Grid<T>,
    kernel: &Grid<T>,
    output: &mut Grid<T>,
    tile_size: usize,
) -> Result<()> {
    CpuBackend.convolve(image, kernel, output, tile_size)
}

/// [`multiply`] driven by a [`TileConfig`] on the given backend.
///
/// The tile size is validated and all three grids must be
/// `dimension x dimension`. `kernel_size` is ignored.
pub fn multiply_with<T: Element>(
    backend: &dyn TileBackend<T>,
    a: &Grid<T>,
    b: &Grid<T>,
    c: &mut Grid<T>,
    config: &TileConfig,
) -> Result<()> {
    config.validate_matmul()?;
    require_dims("A", config.grid_dims(), a.dims())?;
    backend.multiply(a, b, c, config.tile_size)
}

/// [`convolve`] driven by a [`TileConfig`] on the given backend.
///
/// The image must be `dimension x dimension` and the kernel
/// `kernel_size x kernel_size`.
pub fn convolve_with<T: Element>(
    backend: &dyn TileBackend<T>,
    image: &Grid<T>,
    kernel: &Grid<T>,
    output: &mut Grid<T>,
    config: &TileConfig,
) -> Result<()> {
    config.validate()?;
    require_dims("image", config.grid_dims(), image.dims())?;
    require_dims("kernel", config.kernel_dims(), kernel.dims())?;
    backend.convolve(image, kernel, output, config.tile_size)
}
