pub mod conv;
pub mod matmul;
pub mod naive;

use crate::backend::TileBackend;
use crate::dtype::Element;
use crate::error::Result;
use crate::grid::Grid;
use crate::shape::{check_conv_operands, check_matmul_operands};

/// Single-threaded tiled CPU backend.
///
/// Runs the blocked loops exactly in (row-tile, col-tile[, k-tile]) order on
/// the calling thread. This is the default backend.
#[derive(Debug, Clone)]
pub struct CpuBackend;

impl CpuBackend {
    pub fn new() -> Self {
        CpuBackend
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> TileBackend<T> for CpuBackend {
    fn name(&self) -> &str {
        "cpu"
    }

    fn multiply(&self, a: &Grid<T>, b: &Grid<T>, c: &mut Grid<T>, tile_size: usize) -> Result<()> {
        let n = check_matmul_operands(a.dims(), b.dims(), c.dims(), tile_size)?;
        log::trace!("cpu multiply: {n}x{n} {} in {tile_size}x{tile_size} tiles", T::NAME);
        matmul::tiled_matmul(a.as_slice(), b.as_slice(), c.as_mut_slice(), n, tile_size);
        Ok(())
    }

    fn convolve(
        &self,
        image: &Grid<T>,
        kernel: &Grid<T>,
        output: &mut Grid<T>,
        tile_size: usize,
    ) -> Result<()> {
        let (n, k) = check_conv_operands(image.dims(), kernel.dims(), output.dims(), tile_size)?;
        log::trace!(
            "cpu convolve: {n}x{n} {} image, {k}x{k} kernel, {tile_size}x{tile_size} tiles",
            T::NAME
        );
        conv::tiled_correlate(
            image.as_slice(),
            kernel.as_slice(),
            output.as_mut_slice(),
            n,
            k,
            tile_size,
        );
        Ok(())
    }
}
