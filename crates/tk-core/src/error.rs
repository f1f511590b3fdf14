use thiserror::Error;

use crate::shape::Dims;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TileError {
    #[error("invalid dimension for {operand}: expected {expected}, got {got}")]
    InvalidDimension {
        operand: &'static str,
        expected: Dims,
        got: Dims,
    },
    #[error("{operand} must be square, got {got}")]
    NotSquare { operand: &'static str, got: Dims },
    #[error("kernel dimension must be odd, got {0}")]
    EvenKernel(usize),
    #[error("tile size must be at least 1")]
    ZeroTileSize,
    #[error("buffer length {len} does not match {dims} (expected {expected} elements)")]
    BufferLength {
        len: usize,
        expected: usize,
        dims: Dims,
    },
    #[error("row {row} has {got} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },
}

pub type Result<T> = std::result::Result<T, TileError>;
