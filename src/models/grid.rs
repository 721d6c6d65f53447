/// Compact bit-packed grid of land/water cells
///
/// `true`/`1` is land, `false`/`0` is water. Row-major, top-left origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoxelGrid {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl VoxelGrid {
    /// Create a new all-water grid with given dimensions
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height + 7) / 8;
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Get grid width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get grid height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at (x, y); out-of-bounds reads are water
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        (self.data[byte_index] >> bit_index) & 1 == 1
    }

    /// Set cell at (x, y); out-of-bounds writes are ignored
    pub fn set(&mut self, x: usize, y: usize, value: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        let byte_index = index / 8;
        let bit_index = index % 8;
        if value {
            self.data[byte_index] |= 1 << bit_index;
        } else {
            self.data[byte_index] &= !(1 << bit_index);
        }
    }

    /// Total number of land cells
    ///
    /// Padding bits in the last byte are never set, so a plain population
    /// count over the backing bytes is exact.
    pub fn voxel_count(&self) -> usize {
        self.data.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Iterate the 0/1 values of row `y` in x order
    pub fn row(&self, y: usize) -> impl Iterator<Item = u8> + '_ {
        (0..self.width).map(move |x| u8::from(self.get(x, y)))
    }
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
