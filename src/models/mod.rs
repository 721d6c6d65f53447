pub mod conversion;
pub mod grid;

pub use conversion::Conversion;
pub use grid::VoxelGrid;
