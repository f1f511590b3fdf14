//! Untiled reference kernels.
//!
//! These are the textbook loops the tiled kernels are checked against. Use
//! them as a correctness baseline, not for performance.

use crate::dtype::Element;

/// Naive `C += A * B` using i-j-k loop order.
///
/// * `a`, `b`, `c` - `n x n` row-major matrices; `c` is accumulated into.
pub fn naive_matmul<T: Element>(a: &[T], b: &[T], c: &mut [T], n: usize) {
    for i in 0..n {
        for j in 0..n {
            for p in 0..n {
                c[i * n + j] += a[i * n + p] * b[p * n + j];
            }
        }
    }
}

/// Naive zero-padded correlation.
///
/// Materializes the image surrounded by `k / 2` rings of zeros and slides
/// the kernel over it without any bounds checks.
pub fn naive_correlate<T: Element>(
    image: &[T],
    kernel: &[T],
    output: &mut [T],
    n: usize,
    k: usize,
) {
    let pad = k / 2;
    let padded_n = n + 2 * pad;
    let mut padded = vec![T::ZERO; padded_n * padded_n];
    for i in 0..n {
        let dst = (i + pad) * padded_n + pad;
        padded[dst..dst + n].copy_from_slice(&image[i * n..(i + 1) * n]);
    }

    for i in 0..n {
        for j in 0..n {
            let mut sum = T::ZERO;
            for ki in 0..k {
                for kj in 0..k {
                    sum += padded[(i + ki) * padded_n + j + kj] * kernel[ki * k + kj];
                }
            }
            output[i * n + j] = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naive_matmul() {
        // [1,2;3,4] @ [5,6;7,8] = [19,22;43,50]
        let mut c = vec![0i32; 4];
        naive_matmul(&[1, 2, 3, 4], &[5, 6, 7, 8], &mut c, 2);
        assert_eq!(c, vec![19, 22, 43, 50]);
    }

    #[test]
    fn test_naive_correlate_identity_kernel() {
        let image = vec![1i32, 2, 3, 4, 5, 6, 7, 8, 9];
        let kernel = vec![0i32, 0, 0, 0, 1, 0, 0, 0, 0];
        let mut out = vec![0i32; 9];
        naive_correlate(&image, &kernel, &mut out, 3, 3);
        assert_eq!(out, image);
    }

    #[test]
    fn test_naive_correlate_box() {
        let image = vec![1i32; 9];
        let kernel = vec![1i32; 9];
        let mut out = vec![0i32; 9];
        naive_correlate(&image, &kernel, &mut out, 3, 3);
        assert_eq!(out, vec![4, 6, 4, 6, 9, 6, 4, 6, 4]);
    }
}
