//! In-memory framebuffer the render pipeline draws into.
//!
//! All stages (rasterizer, debug overlay, legend) target the [`Canvas`]
//! instead of the panel. Once the iteration is done the whole canvas is handed
//! to [`Panel::flush`](crate::hal::Panel::flush). Regions that are not redrawn
//! keep their previous contents, which is what lets a dropped sensor frame
//! leave the last image on screen.

use core::convert::Infallible;

use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;

use crate::colors::BLACK;
use crate::config::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// Canvas matching the physical panel.
pub type Screen = Canvas<{ SCREEN_WIDTH as usize }, { SCREEN_HEIGHT as usize }>;

/// Fixed-size RGB565 framebuffer, `W` pixels wide and `H` pixels tall.
#[derive(Clone, PartialEq, Eq)]
pub struct Canvas<const W: usize, const H: usize> {
    rows: [[Rgb565; W]; H],
}

impl<const W: usize, const H: usize> Canvas<W, H> {
    /// Create a canvas cleared to black.
    pub const fn new() -> Self { Self { rows: [[BLACK; W]; H] } }

    /// Color at `(x, y)`, or `None` outside the canvas.
    #[inline]
    pub fn pixel(
        &self,
        x: usize,
        y: usize,
    ) -> Option<Rgb565> {
        self.rows.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Rows of pixels, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Rgb565]> { self.rows.iter().map(<[Rgb565; W]>::as_slice) }

    /// All pixels in row-major order, suitable for `fill_contiguous`.
    pub fn pixels(&self) -> impl Iterator<Item = Rgb565> + '_ { self.rows.iter().flatten().copied() }

    #[inline]
    fn set_pixel(
        &mut self,
        x: i32,
        y: i32,
        color: Rgb565,
    ) {
        if x >= 0 && (x as usize) < W && y >= 0 && (y as usize) < H {
            self.rows[y as usize][x as usize] = color;
        }
    }
}

impl<const W: usize, const H: usize> Default for Canvas<W, H> {
    fn default() -> Self { Self::new() }
}

impl<const W: usize, const H: usize> core::fmt::Debug for Canvas<W, H> {
    fn fmt(
        &self,
        f: &mut core::fmt::Formatter<'_>,
    ) -> core::fmt::Result {
        f.debug_struct("Canvas").field("width", &W).field("height", &H).finish_non_exhaustive()
    }
}

impl<const W: usize, const H: usize> OriginDimensions for Canvas<W, H> {
    fn size(&self) -> Size { Size::new(W as u32, H as u32) }
}

impl<const W: usize, const H: usize> DrawTarget for Canvas<W, H> {
    type Color = Rgb565;
    type Error = Infallible;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_contiguous<I>(
        &mut self,
        area: &Rectangle,
        colors: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Self::Color>,
    {
        // Colors are laid out over the full area, so clipped pixels still
        // consume their slot in the iterator.
        let points = area.points();
        for (point, color) in points.zip(colors) {
            self.set_pixel(point.x, point.y, color);
        }
        Ok(())
    }

    fn fill_solid(
        &mut self,
        area: &Rectangle,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        let drawable_area = area.intersection(&self.bounding_box());
        if drawable_area.size == Size::zero() {
            return Ok(());
        }

        let x_start = drawable_area.top_left.x as usize;
        let x_end = x_start + drawable_area.size.width as usize;
        for y in drawable_area.rows() {
            self.rows[y as usize][x_start..x_end].fill(color);
        }
        Ok(())
    }

    fn clear(
        &mut self,
        color: Self::Color,
    ) -> Result<(), Self::Error> {
        for row in &mut self.rows {
            row.fill(color);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use embedded_graphics::primitives::PrimitiveStyle;

    use super::*;
    use crate::colors::WHITE;

    type Small = Canvas<8, 6>;

    #[test]
    fn test_new_canvas_is_black() {
        let canvas = Small::new();
        assert!(canvas.pixels().all(|p| p == BLACK));
        assert_eq!(canvas.pixels().count(), 48);
        assert_eq!(canvas.size(), Size::new(8, 6));
    }

    #[test]
    fn test_fill_solid_is_clipped() {
        let mut canvas = Small::new();
        canvas
            .fill_solid(&Rectangle::new(Point::new(6, 4), Size::new(10, 10)), WHITE)
            .ok();

        assert_eq!(canvas.pixel(6, 4), Some(WHITE));
        assert_eq!(canvas.pixel(7, 5), Some(WHITE));
        assert_eq!(canvas.pixel(5, 4), Some(BLACK));
        assert_eq!(canvas.pixel(8, 5), None);
        assert_eq!(canvas.pixels().filter(|p| *p == WHITE).count(), 4);
    }

    #[test]
    fn test_fill_solid_negative_origin() {
        let mut canvas = Small::new();
        canvas
            .fill_solid(&Rectangle::new(Point::new(-3, -3), Size::new(4, 4)), WHITE)
            .ok();
        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
        assert_eq!(canvas.pixels().filter(|p| *p == WHITE).count(), 1);
    }

    #[test]
    fn test_draw_iter_ignores_out_of_bounds() {
        let mut canvas = Small::new();
        canvas
            .draw_iter([
                Pixel(Point::new(1, 1), WHITE),
                Pixel(Point::new(-1, 1), WHITE),
                Pixel(Point::new(1, 60), WHITE),
            ])
            .ok();
        assert_eq!(canvas.pixel(1, 1), Some(WHITE));
        assert_eq!(canvas.pixels().filter(|p| *p == WHITE).count(), 1);
    }

    #[test]
    fn test_fill_contiguous_keeps_alignment_when_clipped() {
        let mut canvas = Small::new();
        let colors = [BLACK, WHITE, BLACK, WHITE];
        // 2x2 area hanging off the left edge: only the right column lands
        canvas
            .fill_contiguous(&Rectangle::new(Point::new(-1, 0), Size::new(2, 2)), colors)
            .ok();
        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
        assert_eq!(canvas.pixel(0, 1), Some(WHITE));
        assert_eq!(canvas.pixels().filter(|p| *p == WHITE).count(), 2);
    }

    #[test]
    fn test_clear_and_equality() {
        let mut a = Small::new();
        let b = Small::new();
        Rectangle::new(Point::new(2, 2), Size::new(2, 2))
            .into_styled(PrimitiveStyle::with_fill(WHITE))
            .draw(&mut a)
            .ok();
        assert_ne!(a, b);

        a.clear(BLACK).ok();
        assert_eq!(a, b);
    }

    #[test]
    fn test_rows_iterate_top_to_bottom() {
        let mut canvas = Small::new();
        canvas.draw_iter([Pixel(Point::new(3, 2), WHITE)]).ok();
        let row = canvas.rows().nth(2).unwrap();
        assert_eq!(row.len(), 8);
        assert_eq!(row[3], WHITE);
    }
}
