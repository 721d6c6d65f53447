use super::VoxelGrid;

/// Result of one image-to-map conversion
///
/// Immutable once produced; the grid, the serialized text and the voxel
/// count always describe the same conversion run.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The land/water grid derived from the image
    pub grid: VoxelGrid,
    /// Serialized map data (header comment plus table literal)
    pub map_data: String,
    /// Total number of land cells in the grid
    pub voxel_count: usize,
}
