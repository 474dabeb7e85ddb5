//! Dictionary metadata and packed marker codes.

/// A fixed ArUco/AprilTag-style dictionary.
#[derive(Clone, Copy, Debug)]
pub struct Dictionary {
    /// OpenCV-style name (for diagnostics and CLI round-trips).
    pub name: &'static str,
    /// Marker side length in inner bits (4 for 4x4 families, 6 for 36h11).
    pub marker_size: usize,
    /// One `u64` per marker id, encoding the inner `marker_size × marker_size`
    /// bits in row-major order with **white = 1**, LSB first.
    pub codes: &'static [u64],
}

impl Dictionary {
    /// Total number of inner bits per marker.
    #[inline]
    pub fn bit_count(&self) -> usize {
        self.marker_size * self.marker_size
    }

    /// Number of marker ids the dictionary can produce.
    #[inline]
    pub fn capacity(&self) -> u32 {
        self.codes.len() as u32
    }

    /// Packed code for a marker id, or `None` beyond capacity.
    #[inline]
    pub fn code(&self, id: u32) -> Option<u64> {
        self.codes.get(id as usize).copied()
    }

    /// Inner bit at `(row, col)` of the given code (white = true).
    #[inline]
    pub fn bit(&self, code: u64, row: usize, col: usize) -> bool {
        (code >> (row * self.marker_size + col)) & 1 == 1
    }
}
