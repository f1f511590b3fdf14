// Rayon-backed tile scheduling.
//
// Output rows are split into bands of `tile_size` rows (one row of tiles)
// and the bands are handed to the rayon pool. A band owns its rows of C or
// the output exclusively, so workers never write the same cell. For matmul
// the k-tile reduction of a band stays on one worker.

use rayon::prelude::*;

use crate::backend::TileBackend;
use crate::cpu::conv::correlate_row_band;
use crate::cpu::matmul::matmul_row_band;
use crate::dtype::Element;
use crate::error::Result;
use crate::grid::Grid;
use crate::shape::{check_conv_operands, check_matmul_operands};

/// Tiled backend that runs row bands of tiles on the global rayon pool.
///
/// Produces exactly the same results as [`crate::CpuBackend`].
#[derive(Debug, Clone)]
pub struct RayonBackend;

impl RayonBackend {
    pub fn new() -> Self {
        RayonBackend
    }
}

impl Default for RayonBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> TileBackend<T> for RayonBackend {
    fn name(&self) -> &str {
        "rayon"
    }

    fn multiply(&self, a: &Grid<T>, b: &Grid<T>, c: &mut Grid<T>, tile_size: usize) -> Result<()> {
        let n = check_matmul_operands(a.dims(), b.dims(), c.dims(), tile_size)?;
        if n == 0 {
            return Ok(());
        }
        let tile_size = tile_size.min(n);
        log::trace!(
            "rayon multiply: {n}x{n} {} in {tile_size}x{tile_size} tiles on {} threads",
            T::NAME,
            rayon::current_num_threads()
        );

        let (a, b) = (a.as_slice(), b.as_slice());
        c.as_mut_slice()
            .par_chunks_mut(tile_size * n)
            .enumerate()
            .for_each(|(band, c_band)| {
                matmul_row_band(a, b, c_band, n, tile_size, band * tile_size)
            });
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
        if n == 0 {
            return Ok(());
        }
        let tile_size = tile_size.min(n);
        log::trace!(
            "rayon convolve: {n}x{n} {} image, {k}x{k} kernel, {tile_size}x{tile_size} tiles",
            T::NAME
        );

        let (image, kernel) = (image.as_slice(), kernel.as_slice());
        output
            .as_mut_slice()
            .par_chunks_mut(tile_size * n)
            .enumerate()
            .for_each(|(band, out_band)| {
                correlate_row_band(image, kernel, out_band, n, k, tile_size, band * tile_size)
            });
        Ok(())
    }
}
