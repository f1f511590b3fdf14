//! Cache-blocked 2-D correlation with zero padding.
//!
//! The output is cut into `tile x tile` blocks. For each output cell the full
//! `k x k` kernel footprint is summed; taps that land outside the image are
//! skipped, which is the same as correlating against an image surrounded by
//! `k / 2` rings of zeros. The kernel is not flipped.
//!
//! Every output cell belongs to exactly one tile and is assigned once, so the
//! previous contents of the output are irrelevant.

use crate::dtype::Element;

/// Tiled zero-padded correlation of an `n x n` image with a `k x k` kernel.
///
/// `output[ii][jj] = Σ image[ii + ki - pad][jj + kj - pad] * kernel[ki][kj]`
/// over in-bounds taps, with `pad = k / 2`.
///
/// # Panics
///
/// Panics if `tile == 0` or a slice length does not match its dimension.
pub fn tiled_correlate<T: Element>(
    image: &[T],
    kernel: &[T],
    output: &mut [T],
    n: usize,
    k: usize,
    tile: usize,
) {
    assert!(tile > 0, "tile size must be at least 1");
    assert_eq!(image.len(), n * n, "image: expected {}x{}={} elements", n, n, n * n);
    assert_eq!(kernel.len(), k * k, "kernel: expected {}x{}={} elements", k, k, k * k);
    assert_eq!(output.len(), n * n, "output: expected {}x{}={} elements", n, n, n * n);
    if n == 0 {
        return;
    }
    let tile = tile.min(n);

    for (band, out_band) in output.chunks_mut(tile * n).enumerate() {
        correlate_row_band(image, kernel, out_band, n, k, tile, band * tile);
    }
}

/// One row of output tiles, starting at image row `row_start`.
#[allow(clippy::too_many_arguments)]
pub(crate) fn correlate_row_band<T: Element>(
    image: &[T],
    kernel: &[T],
    out_band: &mut [T],
    n: usize,
    k: usize,
    tile: usize,
    row_start: usize,
) {
    let pad = k / 2;
    let band_rows = out_band.len() / n;

    for j in (0..n).step_by(tile) {
        let j_end = (j + tile).min(n);
        for ii in 0..band_rows {
            let i = row_start + ii;
            for jj in j..j_end {
                out_band[ii * n + jj] = correlate_at(image, kernel, n, k, pad, i, jj);
            }
        }
    }
}

#[inline]
fn correlate_at<T: Element>(
    image: &[T],
    kernel: &[T],
    n: usize,
    k: usize,
    pad: usize,
    i: usize,
    j: usize,
) -> T {
    let mut sum = T::ZERO;
    for ki in 0..k {
        // Neighbor row i + ki - pad, skipped when outside [0, n).
        let ni = match (i + ki).checked_sub(pad) {
            Some(ni) if ni < n => ni,
            _ => continue,
        };
        let image_row = &image[ni * n..(ni + 1) * n];
        let kernel_row = &kernel[ki * k..(ki + 1) * k];
        for kj in 0..k {
            let nj = match (j + kj).checked_sub(pad) {
                Some(nj) => nj,
                None => continue,
            };
            if nj >= n {
                break;
            }
            sum += image_row[nj] * kernel_row[kj];
        }
    }
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::naive::naive_correlate;

    const SHARPEN: [i32; 9] = [0, -1, 0, -1, 5, -1, 0, -1, 0];

    #[test]
    fn test_sharpen_3x3_ones() {
        let image = vec![1i32; 9];
        let mut out = vec![0i32; 9];
        tiled_correlate(&image, &SHARPEN, &mut out, 3, 3, 2);
        // Corners lose two taps, edges lose one, the centre loses none.
        assert_eq!(out, vec![3, 2, 3, 2, 1, 2, 3, 2, 3]);
    }

    #[test]
    fn test_single_pixel_sees_only_centre_tap() {
        let kernel: Vec<i32> = (1..=25).collect();
        let mut out = vec![0i32; 1];
        tiled_correlate(&[1], &kernel, &mut out, 1, 5, 1);
        assert_eq!(out, vec![13]);
    }

    #[test]
    fn test_not_flipped() {
        // A kernel with a single tap to the right of centre reads the right neighbor.
        let kernel = vec![0i32, 0, 0, 0, 0, 1, 0, 0, 0];
        let image = vec![1i32, 2, 3, 4, 5, 6, 7, 8, 9];
        let mut out = vec![0i32; 9];
        tiled_correlate(&image, &kernel, &mut out, 3, 3, 3);
        assert_eq!(out, vec![2, 3, 0, 5, 6, 0, 8, 9, 0]);
    }

    #[test]
    fn test_overwrites_output() {
        let image = vec![1i32; 4];
        let kernel = vec![2i32];
        let mut out = vec![99i32; 4];
        tiled_correlate(&image, &kernel, &mut out, 2, 1, 1);
        assert_eq!(out, vec![2; 4]);
    }

    #[test]
    fn test_huge_tile_is_one_block() {
        let image = vec![1i32; 9];
        for tile in [usize::MAX, usize::MAX / 2 + 1] {
            let mut out = vec![0i32; 9];
            tiled_correlate(&image, &SHARPEN, &mut out, 3, 3, tile);
            assert_eq!(out, vec![3, 2, 3, 2, 1, 2, 3, 2, 3], "tile {}", tile);
        }
    }

    #[test]
    fn test_kernel_wider_than_image() {
        let image = vec![1i32, 2, 3, 4];
        let kernel: Vec<i32> = (0..49).collect();
        let mut expected = vec![0i32; 4];
        naive_correlate(&image, &kernel, &mut expected, 2, 7);
        let mut out = vec![0i32; 4];
        tiled_correlate(&image, &kernel, &mut out, 2, 7, 1);
        assert_eq!(out, expected);
    }

    #[test]
    fn test_tiles_match_naive() {
        let n = 11;
        let image: Vec<i64> = (0..n * n).map(|i| (i * 7 % 13) as i64 - 6).collect();
        let kernel: Vec<i64> = (0..25).map(|i| (i % 4) as i64 - 2).collect();
        let mut expected = vec![0i64; n * n];
        naive_correlate(&image, &kernel, &mut expected, n, 5);

        for tile in [1, 2, 3, 4, 8, 11, 16] {
            let mut out = vec![0i64; n * n];
            tiled_correlate(&image, &kernel, &mut out, n, 5, tile);
            assert_eq!(out, expected, "tile {}", tile);
        }
    }
}
