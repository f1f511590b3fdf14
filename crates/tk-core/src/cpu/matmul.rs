//! Cache-blocked matrix multiplication.
//!
//! The iteration space is cut into `tile x tile x tile` blocks visited in
//! (row-tile, col-tile, k-tile) order. Each block accumulates a partial dot
//! product for every `(ii, jj)` in the block and adds it into C, so a cell
//! receives one partial sum per k-tile. Tile extents are clamped at N, which
//! makes the result independent of whether the tile size divides N.

use crate::dtype::Element;

/// Tiled `C += A * B` over square row-major `n x n` slices.
///
/// # Panics
///
/// Panics if `tile == 0` or any slice length differs from `n * n`.
pub fn tiled_matmul<T: Element>(a: &[T], b: &[T], c: &mut [T], n: usize, tile: usize) {
    assert!(tile > 0, "tile size must be at least 1");
    assert_eq!(a.len(), n * n, "A: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(b.len(), n * n, "B: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(c.len(), n * n, "C: expected {}x{}={} elements", n, n, n * n);
    if n == 0 {
        return;
    }
    // A tile wider than the matrix covers it in one block.
    let tile = tile.min(n);

    for (band, c_band) in c.chunks_mut(tile * n).enumerate() {
        matmul_row_band(a, b, c_band, n, tile, band * tile);
    }
}

/// One row-tile of the product: rows `row_start..row_start + c_band.len() / n`.
///
/// `c_band` holds exactly those rows of C. Distinct bands touch disjoint
/// rows, so bands may run on different threads.
pub(crate) fn matmul_row_band<T: Element>(
    a: &[T],
    b: &[T],
    c_band: &mut [T],
    n: usize,
    tile: usize,
    row_start: usize,
) {
    let band_rows = c_band.len() / n;

    for j in (0..n).step_by(tile) {
        let j_end = (j + tile).min(n);
        for k in (0..n).step_by(tile) {
            let k_end = (k + tile).min(n);

            for ii in 0..band_rows {
                let a_row = &a[(row_start + ii) * n..(row_start + ii + 1) * n];
                let c_row = &mut c_band[ii * n..(ii + 1) * n];
                for jj in j..j_end {
                    let mut sum = T::ZERO;
                    for kk in k..k_end {
                        sum += a_row[kk] * b[kk * n + jj];
                    }
                    c_row[jj] += sum;
                }
            }
        }
    }
}
