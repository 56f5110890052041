// THEORY:
// The `validator` confirms or rejects a candidate placement the scanner
// proposes. Three independent geometric checks run in order of increasing
// cost, and a candidate becomes a match only when all three pass for the
// same flip:
//
// 1.  **Visor check** (2 samples): the two visor pixels must be in bounds,
//     equal to each other, and different from the run color. This is the
//     cheap discriminator that throws away almost every false run.
// 2.  **Full-body check** (14 samples): every body pixel must be in bounds
//     and equal to the run color.
// 3.  **Border-tolerance check** (16 samples): strictly more than half of
//     the border ring must differ from the run color (out of bounds counts
//     as differing). This separates a real silhouette boundary from a solid
//     color field, which would otherwise pass the body check trivially.
//
// Every sample goes through `PixelSurface::color_at`, so an out-of-bounds
// probe is a failed comparison, never an error.

use crate::core_modules::geometry::Offset;
use crate::core_modules::surface::{Color, PixelSurface};
use crate::core_modules::template::template::{BODY_OFFSETS, BORDER_OFFSETS, VISOR_OFFSETS};

/// Runs all three checks against one candidate placement.
pub fn confirm<S: PixelSurface>(surface: &S, offset: &Offset, body_color: Color) -> bool {
    check_visor(surface, offset, body_color)
        && check_full_body(surface, offset, body_color)
        && check_borders(surface, offset, body_color)
}

fn sample<S: PixelSurface>(surface: &S, offset: &Offset, local: (i32, i32)) -> Option<Color> {
    let (x, y) = offset.transform(local.0, local.1);
    surface.color_at(x, y)
}

/// Both visor pixels in bounds, equal to each other, distinct from the body.
pub fn check_visor<S: PixelSurface>(surface: &S, offset: &Offset, body_color: Color) -> bool {
    let visor_a = sample(surface, offset, VISOR_OFFSETS[0]);
    let visor_b = sample(surface, offset, VISOR_OFFSETS[1]);
    match (visor_a, visor_b) {
        (Some(a), Some(b)) => a == b && a != body_color,
        _ => false,
    }
}

/// Every body pixel in bounds and equal to the run color.
pub fn check_full_body<S: PixelSurface>(surface: &S, offset: &Offset, body_color: Color) -> bool {
    BODY_OFFSETS
        .iter()
        .all(|&local| sample(surface, offset, local) == Some(body_color))
}

/// Strictly more than half of the border ring differs from the run color.
pub fn check_borders<S: PixelSurface>(surface: &S, offset: &Offset, body_color: Color) -> bool {
    let different = BORDER_OFFSETS
        .iter()
        .filter(|&&local| sample(surface, offset, local) != Some(body_color))
        .count();
    different * 2 > BORDER_OFFSETS.len()
}
