//! Embedded 5×7 bitmap font for id captions.
//!
//! Covers exactly the glyphs the captions use: digits, `:`, space, and the
//! letters of "ArUco id" / "April id". Unknown characters render as blanks.

use tagsheet_core::GrayCanvas;

pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
/// Horizontal advance includes one column of spacing.
pub const GLYPH_ADVANCE: u32 = GLYPH_WIDTH + 1;

/// Glyph rows, top to bottom; bit 4 is the leftmost column.
#[rustfmt::skip]
fn glyph(c: char) -> [u8; 7] {
    match c {
        '0' => [0x0E, 0x11, 0x13, 0x15, 0x19, 0x11, 0x0E],
        '1' => [0x04, 0x0C, 0x04, 0x04, 0x04, 0x04, 0x0E],
        '2' => [0x0E, 0x11, 0x01, 0x02, 0x04, 0x08, 0x1F],
        '3' => [0x1F, 0x02, 0x04, 0x02, 0x01, 0x11, 0x0E],
        '4' => [0x02, 0x06, 0x0A, 0x12, 0x1F, 0x02, 0x02],
        '5' => [0x1F, 0x10, 0x1E, 0x01, 0x01, 0x11, 0x0E],
        '6' => [0x06, 0x08, 0x10, 0x1E, 0x11, 0x11, 0x0E],
        '7' => [0x1F, 0x01, 0x02, 0x04, 0x08, 0x08, 0x08],
        '8' => [0x0E, 0x11, 0x11, 0x0E, 0x11, 0x11, 0x0E],
        '9' => [0x0E, 0x11, 0x11, 0x0F, 0x01, 0x02, 0x0C],
        'A' => [0x0E, 0x11, 0x11, 0x1F, 0x11, 0x11, 0x11],
        'U' => [0x11, 0x11, 0x11, 0x11, 0x11, 0x11, 0x0E],
        'c' => [0x00, 0x00, 0x0E, 0x10, 0x10, 0x11, 0x0E],
        'd' => [0x01, 0x01, 0x0D, 0x13, 0x11, 0x13, 0x0D],
        'i' => [0x04, 0x00, 0x0C, 0x04, 0x04, 0x04, 0x0E],
        'l' => [0x0C, 0x04, 0x04, 0x04, 0x04, 0x04, 0x0E],
        'o' => [0x00, 0x00, 0x0E, 0x11, 0x11, 0x11, 0x0E],
        'p' => [0x00, 0x00, 0x1E, 0x11, 0x1E, 0x10, 0x10],
        'r' => [0x00, 0x00, 0x16, 0x19, 0x10, 0x10, 0x10],
        ':' => [0x00, 0x0C, 0x0C, 0x00, 0x0C, 0x0C, 0x00],
        _ => [0x00; 7],
    }
}

/// Draw `text` in black with its bottom edge at `bottom_y`, left-aligned at
/// `x`, scaled by the integer factor `scale`. Pixels outside the canvas are
/// clipped.
pub fn draw_text(canvas: &mut GrayCanvas, text: &str, x: i64, bottom_y: i64, scale: u32) {
    let scale = i64::from(scale.max(1));
    let top_y = bottom_y - i64::from(GLYPH_HEIGHT) * scale;
    let mut pen_x = x;
    for c in text.chars() {
        let rows = glyph(c);
        for (gy, row) in rows.iter().enumerate() {
            for gx in 0..GLYPH_WIDTH {
                if row >> (GLYPH_WIDTH - 1 - gx) & 1 == 0 {
                    continue;
                }
                for sy in 0..scale {
                    for sx in 0..scale {
                        canvas.put(
                            pen_x + i64::from(gx) * scale + sx,
                            top_y + gy as i64 * scale + sy,
                            0,
                        );
                    }
                }
            }
        }
        pen_x += i64::from(GLYPH_ADVANCE) * scale;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ink(canvas: &GrayCanvas) -> usize {
        canvas.data().iter().filter(|&&p| p == 0).count()
    }

    #[test]
    fn caption_glyphs_leave_ink() {
        let mut canvas = GrayCanvas::filled(200, 20, 255);
        draw_text(&mut canvas, "ArUco id: 42", 2, 12, 1);
        assert!(ink(&canvas) > 50);
    }

    #[test]
    fn scale_doubles_glyph_extent() {
        let mut small = GrayCanvas::filled(100, 40, 255);
        let mut large = GrayCanvas::filled(100, 40, 255);
        draw_text(&mut small, "8", 0, 35, 1);
        draw_text(&mut large, "8", 0, 35, 2);
        assert_eq!(ink(&large), 4 * ink(&small));
    }

    #[test]
    fn drawing_off_canvas_is_safe() {
        let mut canvas = GrayCanvas::filled(10, 10, 255);
        draw_text(&mut canvas, "April id: 0", -3, 3, 2);
        // Clipped, not panicked; the visible corner got some ink.
        assert!(ink(&canvas) > 0);
    }

    #[test]
    fn unknown_characters_are_blank() {
        let mut canvas = GrayCanvas::filled(50, 20, 255);
        draw_text(&mut canvas, "???", 0, 15, 1);
        assert_eq!(ink(&canvas), 0);
    }
}
