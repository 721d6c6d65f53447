use crate::models::VoxelGrid;

/// Render a grid as the map-data text consumed by the generator script.
///
/// Format: two header comment lines, a blank line, then a table literal with
/// one tab-indented row per grid row. Every row ends with `},` and the
/// closing brace gets its own line. Returns the text together with the
/// number of land cells emitted.
pub fn write_map_data(grid: &VoxelGrid) -> (String, usize) {
    let width = grid.width();
    let height = grid.height();

    // Header + "return {" + rows of up to 2 chars per cell + closing brace
    let mut out = String::with_capacity(64 + height * (width * 2 + 4));
    out.push_str("-- Auto-generated voxel map data\n");
    out.push_str(&format!("-- Dimensions: {}x{}\n", width, height));
    out.push('\n');
    out.push_str("return {\n");

    let mut voxel_count = 0usize;
    for y in 0..height {
        out.push_str("\t{");
        for (x, value) in grid.row(y).enumerate() {
            if x > 0 {
                out.push(',');
            }
            if value == 1 {
                out.push('1');
                voxel_count += 1;
            } else {
                out.push('0');
            }
        }
        out.push_str("},\n");
    }

    out.push_str("}\n");
    (out, voxel_count)
}
