//! `tk-core` - cache-tiled integer kernels for tiled-kernels.
//!
//! This crate provides:
//! - A flat row-major `Grid` type with bounds-checked indexing
//! - Tiled matrix multiplication (`C += A * B`)
//! - Tiled 2-D correlation with zero padding at the image boundary
//! - A `TileBackend` trait with a sequential `CpuBackend` and, behind the
//!   `parallel` feature, a rayon-driven `RayonBackend`
//! - Untiled reference kernels used as a correctness baseline

pub mod backend;
pub mod config;
pub mod cpu;
pub mod dtype;
pub mod error;
pub mod grid;
pub mod ops;
#[cfg(feature = "parallel")]
pub mod parallel;
pub mod presets;
pub mod shape;

// Re-export primary types at the crate root for convenience.
pub use backend::TileBackend;
pub use config::TileConfig;
pub use cpu::CpuBackend;
pub use dtype::Element;
pub use error::{Result, TileError};
pub use grid::Grid;
pub use ops::{convolve, convolve_with, multiply, multiply_with};
#[cfg(feature = "parallel")]
pub use parallel::RayonBackend;
pub use shape::Dims;
