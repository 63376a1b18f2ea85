//! Rotation-capable text stamping.
//!
//! Mono fonts only draw glyph pixels; the background is left untouched, so the
//! glyph shape itself acts as the transparency mask. To rotate, the text is
//! laid out at the origin as usual and drawn through [`Rotated`], a
//! `DrawTarget` view that maps each pixel of the unrotated text box onto the
//! real target. No off-screen buffer is needed.
//!
//! Rotations are counter-clockwise. `position` is the top-left corner of the
//! rotated box, so a 90° stamp reads bottom to top and occupies `h x w` pixels.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics::text::{Baseline, Text, TextStyle, TextStyleBuilder};

/// Top-aligned text, so a stamp's position is its top-left corner.
pub const TOP_LEFT: TextStyle = TextStyleBuilder::new().baseline(Baseline::Top).build();

/// Counter-clockwise rotation in quarter turns.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum Rotation {
    #[default]
    Deg0,
    Deg90,
    Deg180,
    Deg270,
}

impl Rotation {
    /// Size of a `w x h` box after rotation.
    pub const fn rotated_size(
        self,
        size: Size,
    ) -> Size {
        match self {
            Self::Deg0 | Self::Deg180 => size,
            Self::Deg90 | Self::Deg270 => Size::new(size.height, size.width),
        }
    }

    /// Map a point inside an unrotated `w x h` box to the rotated box.
    pub const fn map(
        self,
        p: Point,
        size: Size,
    ) -> Point {
        let w = size.width as i32;
        let h = size.height as i32;
        match self {
            Self::Deg0 => p,
            Self::Deg90 => Point::new(p.y, w - 1 - p.x),
            Self::Deg180 => Point::new(w - 1 - p.x, h - 1 - p.y),
            Self::Deg270 => Point::new(h - 1 - p.y, p.x),
        }
    }
}

/// Rotating view over a draw target.
///
/// Pixels are given in the unrotated text box's coordinates and land inside
/// the rotated box placed at `origin`. Pixels outside the box are dropped.
pub struct Rotated<'a, D> {
    target: &'a mut D,
    origin: Point,
    size: Size,
    rotation: Rotation,
}

impl<'a, D> Rotated<'a, D> {
    pub fn new(
        target: &'a mut D,
        origin: Point,
        size: Size,
        rotation: Rotation,
    ) -> Self {
        Self {
            target,
            origin,
            size,
            rotation,
        }
    }
}

impl<D> OriginDimensions for Rotated<'_, D> {
    fn size(&self) -> Size { self.size }
}

impl<D> DrawTarget for Rotated<'_, D>
where
    D: DrawTarget,
{
    type Color = D::Color;
    type Error = D::Error;

    fn draw_iter<I>(
        &mut self,
        pixels: I,
    ) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let bounds = Rectangle::new(Point::zero(), self.size);
        let rotation = self.rotation;
        let size = self.size;
        let origin = self.origin;
        self.target.draw_iter(
            pixels
                .into_iter()
                .filter(|Pixel(p, _)| bounds.contains(*p))
                .map(|Pixel(p, c)| Pixel(origin + rotation.map(p, size), c)),
        )
    }
}

/// Measure `text` as laid out with a top-left anchor.
pub fn measure(
    text: &str,
    style: MonoTextStyle<'_, Rgb565>,
) -> Size {
    Text::with_text_style(text, Point::zero(), style, TOP_LEFT).bounding_box().size
}

/// Stamp `text` onto `target` with its rotated top-left corner at `position`.
///
/// Returns the area the stamp occupies on the target.
pub fn stamp_text<D>(
    target: &mut D,
    text: &str,
    position: Point,
    rotation: Rotation,
    style: MonoTextStyle<'_, Rgb565>,
) -> Rectangle
where
    D: DrawTarget<Color = Rgb565>,
{
    let size = measure(text, style);
    let mut view = Rotated::new(target, position, size, rotation);
    Text::with_text_style(text, Point::zero(), style, TOP_LEFT).draw(&mut view).ok();
    Rectangle::new(position, rotation.rotated_size(size))
}

// =============================================================================
// Unit Tests
// =============================================================================
