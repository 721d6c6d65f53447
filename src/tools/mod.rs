use crate::models::VoxelGrid;
use image::DynamicImage;
use std::path::Path;

/// Load an image from disk in whatever color mode it was saved in.
pub fn load_image<P: AsRef<Path>>(path: P) -> Result<DynamicImage, image::ImageError> {
    image::open(path)
}

/// Summary statistics for a converted grid.
#[derive(Debug, Clone, Copy)]
pub struct GridStats {
    /// Count of land cells.
    pub land_cells: usize,
    /// Count of water cells.
    pub water_cells: usize,
    /// Total cells in the grid.
    pub total_cells: usize,
    /// Ratio of land cells to total cells.
    pub land_ratio: f64,
}

/// Compute land/water stats for a grid.
pub fn grid_stats(grid: &VoxelGrid) -> GridStats {
    let land = grid.voxel_count();
    let total = grid.width() * grid.height();
    let ratio = if total == 0 {
        0.0
    } else {
        land as f64 / total as f64
    };
    GridStats {
        land_cells: land,
        water_cells: total - land,
        total_cells: total,
        land_ratio: ratio,
    }
}

/// Render a grid as ASCII art: `#` for land, `.` for water.
///
/// `max_rows` truncates tall grids for terminal display; `None` renders
/// everything.
pub fn render_preview(grid: &VoxelGrid, max_rows: Option<usize>) -> String {
    let rows = match max_rows {
        Some(limit) => grid.height().min(limit),
        None => grid.height(),
    };

    let mut out = String::with_capacity(rows * (grid.width() + 1));
    for y in 0..rows {
        for value in grid.row(y) {
            out.push(if value == 1 { '#' } else { '.' });
        }
        out.push('\n');
    }
    if rows < grid.height() {
        out.push_str(&format!("... ({} more rows)\n", grid.height() - rows));
    }
    out
}
