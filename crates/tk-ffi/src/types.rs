use tk_core::TileError;

/// Status codes returned by all FFI functions.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TKStatus {
    Ok = 0,
    ErrorInvalidArgument = 1,
    ErrorInvalidDimension = 2,
    ErrorInternal = 3,
}

impl From<&TileError> for TKStatus {
    fn from(err: &TileError) -> Self {
        match err {
            TileError::InvalidDimension { .. }
            | TileError::NotSquare { .. }
            | TileError::EvenKernel(_)
            | TileError::BufferLength { .. }
            | TileError::RaggedRows { .. } => TKStatus::ErrorInvalidDimension,
            TileError::ZeroTileSize => TKStatus::ErrorInvalidArgument,
        }
    }
}
