//! Owned 8-bit grayscale page canvas.

/// Row-major 8-bit grayscale raster, `len = width * height`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GrayCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl GrayCanvas {
    /// Create a canvas filled with a uniform value (255 = white paper).
    pub fn filled(width: u32, height: u32, value: u8) -> Self {
        Self {
            width,
            height,
            data: vec![value; width as usize * height as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw row-major pixel data.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at `(x, y)`, or `None` outside the canvas.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u8> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[y as usize * self.width as usize + x as usize])
    }

    /// Write a pixel, ignoring coordinates outside the canvas.
    #[inline]
    pub fn put(&mut self, x: i64, y: i64, value: u8) {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return;
        }
        self.data[y as usize * self.width as usize + x as usize] = value;
    }

    /// Copy `tile` into this canvas with its top-left corner at `(x, y)`.
    ///
    /// Pixels falling outside the destination are dropped.
    pub fn blit(&mut self, tile: &GrayCanvas, x: u32, y: u32) {
        for ty in 0..tile.height {
            let dy = y as usize + ty as usize;
            if dy >= self.height as usize {
                break;
            }
            for tx in 0..tile.width {
                let dx = x as usize + tx as usize;
                if dx >= self.width as usize {
                    break;
                }
                self.data[dy * self.width as usize + dx] =
                    tile.data[ty as usize * tile.width as usize + tx as usize];
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filled_canvas_is_uniform() {
        let c = GrayCanvas::filled(4, 3, 255);
        assert_eq!(c.data().len(), 12);
        assert!(c.data().iter().all(|&p| p == 255));
    }

    #[test]
    fn blit_is_clipped_at_canvas_edge() {
        let mut page = GrayCanvas::filled(4, 4, 255);
        let tile = GrayCanvas::filled(3, 3, 0);
        page.blit(&tile, 2, 2);
        assert_eq!(page.get(2, 2), Some(0));
        assert_eq!(page.get(3, 3), Some(0));
        assert_eq!(page.get(1, 1), Some(255));
        // Out-of-range writes were dropped, not wrapped.
        assert_eq!(page.get(0, 3), Some(255));
    }

    #[test]
    fn put_ignores_negative_coordinates() {
        let mut c = GrayCanvas::filled(2, 2, 255);
        c.put(-1, 0, 0);
        c.put(0, -5, 0);
        assert!(c.data().iter().all(|&p| p == 255));
    }
}
