use crate::error::Result;
use crate::shape::{self, Dims};

/// Problem size and blocking parameters for one kernel invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileConfig {
    /// Edge length N of the square matrices or image.
    pub dimension: usize,
    /// Tile edge T. Need not divide `dimension`.
    pub tile_size: usize,
    /// Edge length K of the convolution kernel. Ignored by matmul.
    pub kernel_size: usize,
}

impl TileConfig {
    pub fn new(dimension: usize, tile_size: usize, kernel_size: usize) -> Self {
        TileConfig {
            dimension,
            tile_size,
            kernel_size,
        }
    }

    /// 64x64 matrices in 8x8 tiles.
    pub fn matmul_reference() -> Self {
        TileConfig::new(64, 8, 1)
    }

    /// 128x128 image, 3x3 kernel, 8x8 tiles.
    pub fn convolution_reference() -> Self {
        TileConfig::new(128, 8, 3)
    }

    /// Zero-padding radius `K / 2`.
    pub fn pad(&self) -> usize {
        self.kernel_size / 2
    }

    /// Dims of the matrices, image and output.
    pub fn grid_dims(&self) -> Dims {
        Dims::square(self.dimension)
    }

    /// Dims of the convolution kernel.
    pub fn kernel_dims(&self) -> Dims {
        Dims::square(self.kernel_size)
    }

    /// Check the parameters matmul uses: only the tile size.
    ///
    /// `kernel_size` is not inspected.
    pub fn validate_matmul(&self) -> Result<()> {
        shape::require_tile_size(self.tile_size)
    }

    /// Check the tile size and kernel parity.
    ///
    /// A zero dimension is accepted and makes every kernel a no-op.
    pub fn validate(&self) -> Result<()> {
        shape::require_tile_size(self.tile_size)?;
        shape::require_odd_kernel(self.kernel_size)?;
        Ok(())
    }
}

impl Default for TileConfig {
    fn default() -> Self {
        Self::matmul_reference()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TileError;

    #[test]
    fn test_reference_presets() {
        let m = TileConfig::matmul_reference();
        assert_eq!((m.dimension, m.tile_size), (64, 8));
        assert!(m.validate().is_ok());

        let c = TileConfig::convolution_reference();
        assert_eq!((c.dimension, c.tile_size, c.kernel_size), (128, 8, 3));
        assert_eq!(c.pad(), 1);
        assert_eq!(c.kernel_dims(), Dims::square(3));
        assert_eq!(c.grid_dims(), Dims::square(128));
    }

    #[test]
    fn test_validate() {
        assert_eq!(
            TileConfig::new(16, 0, 3).validate(),
            Err(TileError::ZeroTileSize)
        );
        assert_eq!(
            TileConfig::new(16, 4, 2).validate(),
            Err(TileError::EvenKernel(2))
        );
        // Non-divisor tile and tile larger than the grid are both fine.
        assert!(TileConfig::new(10, 3, 5).validate().is_ok());
        assert!(TileConfig::new(4, 9, 1).validate().is_ok());
    }

    #[test]
    fn test_validate_matmul_ignores_kernel_size() {
        assert!(TileConfig::new(4, 2, 0).validate_matmul().is_ok());
        assert!(TileConfig::new(4, 2, 2).validate_matmul().is_ok());
        assert_eq!(
            TileConfig::new(4, 0, 1).validate_matmul(),
            Err(TileError::ZeroTileSize)
        );
    }

    #[test]
    fn test_default_is_matmul_reference() {
        assert_eq!(TileConfig::default(), TileConfig::matmul_reference());
    }
}
