use crate::error::{Result, TileError};
use std::fmt;

/// Row and column counts of a 2-D grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dims {
    pub rows: usize,
    pub cols: usize,
}

impl Dims {
    /// Create dims for a `rows x cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Dims { rows, cols }
    }

    /// Dims of an `n x n` grid.
    pub fn square(n: usize) -> Self {
        Dims { rows: n, cols: n }
    }

    /// Total number of elements.
    pub fn numel(&self) -> usize {
        self.rows * self.cols
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Flat row-major offset of `(row, col)`, or `None` when out of bounds.
    pub fn offset(&self, row: usize, col: usize) -> Option<usize> {
        if row < self.rows && col < self.cols {
            Some(row * self.cols + col)
        } else {
            None
        }
    }
}

impl fmt::Display for Dims {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.rows, self.cols)
    }
}

/// Returns the edge length of a square operand.
pub(crate) fn require_square(operand: &'static str, dims: Dims) -> Result<usize> {
    if !dims.is_square() {
        log::debug!("rejecting {operand}: {dims} is not square");
        return Err(TileError::NotSquare { operand, got: dims });
    }
    Ok(dims.rows)
}

pub(crate) fn require_dims(operand: &'static str, expected: Dims, got: Dims) -> Result<()> {
    if expected != got {
        log::debug!("rejecting {operand}: expected {expected}, got {got}");
        return Err(TileError::InvalidDimension {
            operand,
            expected,
            got,
        });
    }
    Ok(())
}

pub(crate) fn require_tile_size(tile_size: usize) -> Result<()> {
    if tile_size == 0 {
        log::debug!("rejecting tile size 0");
        return Err(TileError::ZeroTileSize);
    }
    Ok(())
}

pub(crate) fn require_odd_kernel(kernel_size: usize) -> Result<()> {
    if kernel_size % 2 == 0 {
        log::debug!("rejecting kernel dimension {kernel_size}: not odd");
        return Err(TileError::EvenKernel(kernel_size));
    }
    Ok(())
}

/// Validate the operands of `C += A·B`, returning the shared dimension N.
///
/// A must be square, and B and C must have A's dims.
pub fn check_matmul_operands(a: Dims, b: Dims, c: Dims, tile_size: usize) -> Result<usize> {
    let n = require_square("A", a)?;
    require_dims("B", a, b)?;
    require_dims("C", a, c)?;
    require_tile_size(tile_size)?;
    Ok(n)
}

/// Validate the operands of a zero-padded correlation, returning `(N, K)`.
///
/// The image and kernel must be square, the kernel edge odd, and the output
/// must match the image. A kernel wider than the image is accepted.
pub fn check_conv_operands(
    image: Dims,
    kernel: Dims,
    output: Dims,
    tile_size: usize,
) -> Result<(usize, usize)> {
    let n = require_square("image", image)?;
    let k = require_square("kernel", kernel)?;
    require_odd_kernel(k)?;
    require_dims("output", image, output)?;
    require_tile_size(tile_size)?;
    Ok((n, k))
}
