// THEORY:
// The `surface` module is the boundary between the matching engine and
// whatever supplies pixels. The engine only ever needs three things from an
// image: its dimensions and an equality-comparable color at a coordinate.
// `PixelSurface` captures exactly that, and `color_at` returns an `Option`
// so an out-of-bounds probe is an ordinary `None` every caller treats as
// "no match" - bounds handling is data flow, not control flow.
//
// `Color` is a packed RGBA word compared only for equality; no arithmetic is
// ever performed on it. Value 0 doubles as the scanner's "no current run"
// sentinel, so a genuinely transparent-black pixel cannot start a run.

use image::RgbaImage;

/// An opaque, equality-comparable pixel value (packed RGBA).
pub type Color = u32;

/// The scanner's "no current run" sentinel. Never a valid match color.
pub const NO_COLOR: Color = 0;

/// Packs RGBA channel bytes into a single comparable word.
pub fn pack_rgba(channels: [u8; 4]) -> Color {
    u32::from_be_bytes(channels)
}

/// A 2D indexed pixel surface the engine can sample.
pub trait PixelSurface {
    fn width(&self) -> u32;
    fn height(&self) -> u32;

    /// The color at (x, y), or `None` when the coordinate lies outside
    /// `[0, width) x [0, height)`.
    fn color_at(&self, x: i32, y: i32) -> Option<Color>;
}

impl PixelSurface for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn color_at(&self, x: i32, y: i32) -> Option<Color> {
        if x < 0 || y < 0 {
            return None;
        }
        let (width, height) = self.dimensions();
        let (x, y) = (x as u32, y as u32);
        if x >= width || y >= height {
            return None;
        }
        Some(pack_rgba(self.get_pixel(x, y).0))
    }
}
