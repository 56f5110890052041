// THEORY:
// The `scanner` drives the whole detection pipeline for one orientation. It
// walks the image interior along the orientation's scan axis (rows for
// `Horizontal`, columns for `Vertical`) keeping a run-length count of
// consecutive same-color pixels in an explicit `ScanContext` value. The
// context is reset at scan start, at every row/column crossing, and after
// every run event, so no state ever leaks between lines or between
// overlapping runs inside one color streak.
//
// When a run reaches five equal pixels (`consecutive == 4`), its midpoint is
// the candidate anchor. Before paying for validation, the four diagonal
// neighbors of the midpoint disambiguate which flip pair can possibly apply:
//
//     AL . AR        AL/BR in the run color  ->  [ZERO, BOTH]
//      .  m  .       AR/BL in the run color  ->  [HORIZONTAL, VERTICAL]
//     BL . BR        anything else           ->  not a shape, abandon
//
// Each flip in the proposed pair is handed to the validator in order; the
// first one that passes all three checks is recorded as a `Crewmate`. An
// out-of-bounds corner sample simply never matches, so runs flush against
// the image edge are dropped silently.
//
// The walk covers rows/columns `1 ..= dim-2` on the cross axis and
// `1 ..= dim-1` on the scan axis: the silhouette needs at least one pixel of
// contrasting context on every side, so anchors on the outermost border can
// never validate anyway.

use crate::core_modules::geometry::{Flip, Offset, Orientation};
use crate::core_modules::registry::{Crewmate, MatchRegistry};
use crate::core_modules::surface::{Color, NO_COLOR, PixelSurface};
use crate::core_modules::validator;

/// A run of five equal pixels triggers a candidate (the counter starts at
/// zero when a new color is locked onto).
const RUN_LENGTH_TRIGGER: u32 = 4;

/// Per-pass run-length state, threaded through the walk by value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanContext {
    current_color: Color,
    consecutive: u32,
}

impl ScanContext {
    pub fn new() -> Self {
        Self {
            current_color: NO_COLOR,
            consecutive: 0,
        }
    }

    pub fn reset(&mut self) {
        self.current_color = NO_COLOR;
        self.consecutive = 0;
    }

    /// Feeds one pixel into the run-length counter. Returns `true` when the
    /// run has just reached trigger length.
    fn observe(&mut self, color: Color) -> bool {
        if self.current_color == color {
            self.consecutive += 1;
        } else {
            self.current_color = color;
            self.consecutive = 0;
        }
        self.consecutive >= RUN_LENGTH_TRIGGER
    }
}

impl Default for ScanContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Scans the surface along one orientation, appending every confirmed match
/// to the registry in scan order.
pub fn scan<S: PixelSurface>(surface: &S, orientation: Orientation, registry: &mut MatchRegistry) {
    let width = surface.width() as i32;
    let height = surface.height() as i32;
    let (cross_end, scan_end) = match orientation {
        Orientation::Horizontal => (height - 2, width - 1),
        Orientation::Vertical => (width - 2, height - 1),
    };

    let mut context = ScanContext::new();
    for cross in 1..=cross_end {
        context.reset();
        for along in 1..=scan_end {
            let (x, y) = match orientation {
                Orientation::Horizontal => (along, cross),
                Orientation::Vertical => (cross, along),
            };
            let Some(color) = surface.color_at(x, y) else {
                context.reset();
                continue;
            };

            if context.observe(color) {
                let (mid_x, mid_y) = match orientation {
                    Orientation::Horizontal => (x - 2, y),
                    Orientation::Vertical => (x, y - 2),
                };

                if let Some(flips) = corner_flip_pair(surface, mid_x, mid_y, context.current_color)
                {
                    for flip in flips {
                        let offset = Offset {
                            x: mid_x,
                            y: mid_y,
                            orientation,
                            flip,
                        };
                        if validator::confirm(surface, &offset, context.current_color) {
                            registry.push(Crewmate {
                                offset,
                                color: context.current_color,
                            });
                            break;
                        }
                    }
                }

                // A processed run is spent either way; do not reconsider
                // overlapping runs within the same color streak.
                context.reset();
            }
        }
    }
}

/// Samples the four diagonal neighbors of a run midpoint and decides which
/// flip pair could place the silhouette there. `None` means the corners rule
/// the run out entirely, including when a corner lies out of bounds.
fn corner_flip_pair<S: PixelSurface>(
    surface: &S,
    mid_x: i32,
    mid_y: i32,
    run_color: Color,
) -> Option<[Flip; 2]> {
    let above_left = surface.color_at(mid_x - 1, mid_y - 1);
    let above_right = surface.color_at(mid_x + 1, mid_y - 1);
    let below_left = surface.color_at(mid_x - 1, mid_y + 1);
    let below_right = surface.color_at(mid_x + 1, mid_y + 1);

    if above_left == Some(run_color) && below_right == Some(run_color) {
        Some([Flip::ZERO, Flip::BOTH])
    } else if above_right == Some(run_color) && below_left == Some(run_color) {
        Some([Flip::HORIZONTAL, Flip::VERTICAL])
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::surface::pack_rgba;
    use image::{Rgba, RgbaImage};

    const BACKGROUND: Rgba<u8> = Rgba([10, 20, 30, 255]);
    const BODY: Rgba<u8> = Rgba([200, 30, 40, 255]);

    #[test]
    fn context_triggers_on_fifth_equal_pixel() {
        let mut context = ScanContext::new();
        let color = pack_rgba(BODY.0);
        assert!(!context.observe(color));
        assert!(!context.observe(color));
        assert!(!context.observe(color));
        assert!(!context.observe(color));
        assert!(context.observe(color));
    }

    #[test]
    fn color_change_resets_the_run() {
        let mut context = ScanContext::new();
        let first = pack_rgba([1, 1, 1, 255]);
        let second = pack_rgba([2, 2, 2, 255]);
        for _ in 0..4 {
            context.observe(first);
        }
        assert!(!context.observe(second));
        for _ in 0..3 {
            assert!(!context.observe(second));
        }
        assert!(context.observe(second));
    }

    #[test]
    fn sentinel_merges_with_color_zero_runs() {
        // Packed 0 is the sentinel, so a fresh context treats a
        // transparent-black pixel as a continuation of "no run". Documented
        // behavior carried over from the reference scanner.
        let mut context = ScanContext::new();
        assert!(!context.observe(NO_COLOR));
        assert_eq!(context.consecutive, 1);
    }

    #[test]
    fn corner_pair_selects_main_diagonal_flips() {
        let mut img = RgbaImage::from_pixel(9, 9, BACKGROUND);
        img.put_pixel(3, 3, BODY);
        img.put_pixel(5, 5, BODY);
        let pair = corner_flip_pair(&img, 4, 4, pack_rgba(BODY.0));
        assert_eq!(pair, Some([Flip::ZERO, Flip::BOTH]));
    }

    #[test]
    fn corner_pair_selects_anti_diagonal_flips() {
        let mut img = RgbaImage::from_pixel(9, 9, BACKGROUND);
        img.put_pixel(5, 3, BODY);
        img.put_pixel(3, 5, BODY);
        let pair = corner_flip_pair(&img, 4, 4, pack_rgba(BODY.0));
        assert_eq!(pair, Some([Flip::HORIZONTAL, Flip::VERTICAL]));
    }

    #[test]
    fn out_of_bounds_corner_abandons_the_run() {
        let img = RgbaImage::from_pixel(9, 9, BODY);
        assert_eq!(corner_flip_pair(&img, 0, 4, pack_rgba(BODY.0)), None);
        assert_eq!(corner_flip_pair(&img, 4, 8, pack_rgba(BODY.0)), None);
    }

    #[test]
    fn uniform_image_yields_no_matches() {
        let img = RgbaImage::from_pixel(32, 32, BODY);
        let mut registry = MatchRegistry::new();
        scan(&img, Orientation::Horizontal, &mut registry);
        scan(&img, Orientation::Vertical, &mut registry);
        assert!(registry.is_empty());
    }

    #[test]
    fn undersized_image_is_scanned_without_panicking() {
        let img = RgbaImage::from_pixel(3, 2, BODY);
        let mut registry = MatchRegistry::new();
        scan(&img, Orientation::Horizontal, &mut registry);
        scan(&img, Orientation::Vertical, &mut registry);
        assert!(registry.is_empty());
    }
}
