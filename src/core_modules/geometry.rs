// THEORY:
// The `geometry` module defines the placement transform that maps shape-local
// template offsets to absolute image coordinates. Every candidate the scanner
// proposes and every pixel the validator samples goes through this one
// composition, so the order of operations is fixed and load-bearing:
//
//     absolute = translate(rotate(flip(local)))
//
// 1.  **Flip**: mirrors the template along one or both local axes. The four
//     combinations of the two mirror bits cover the four variants a single
//     orientation can produce.
// 2.  **Rotate**: transposes (x, y) to (y, x) when the orientation is
//     `Vertical`, turning the template's row-aligned silhouette into a
//     column-aligned one. `Horizontal` is the identity.
// 3.  **Translate**: adds the candidate's anchor position.
//
// All three steps are bijective, so the whole transform is invertible, even
// though nothing in the engine ever needs to invert it at runtime. Everything
// here is pure integer math with no side effects.

/// The scan axis a silhouette's long run lies along.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// The five-pixel run lies along a row; local coordinates are used as-is.
    Horizontal,
    /// The run lies along a column; local (x, y) is transposed to (y, x).
    Vertical,
}

impl Orientation {
    /// Transposes the coordinate pair iff the orientation is `Vertical`.
    pub fn rotate(self, x: i32, y: i32) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (x, y),
            Orientation::Vertical => (y, x),
        }
    }
}

/// Mirroring of the template, expressed as two independent axes rather than
/// a packed bit flag so each bit's meaning stays explicit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flip {
    /// Negate the local x coordinate.
    pub mirror_x: bool,
    /// Negate the local y coordinate.
    pub mirror_y: bool,
}

impl Flip {
    pub const ZERO: Flip = Flip { mirror_x: false, mirror_y: false };
    pub const HORIZONTAL: Flip = Flip { mirror_x: true, mirror_y: false };
    pub const VERTICAL: Flip = Flip { mirror_x: false, mirror_y: true };
    pub const BOTH: Flip = Flip { mirror_x: true, mirror_y: true };

    /// Negates x and/or y according to the mirror axes.
    pub fn apply(self, x: i32, y: i32) -> (i32, i32) {
        let x = if self.mirror_x { -x } else { x };
        let y = if self.mirror_y { -y } else { y };
        (x, y)
    }
}

/// The full placement transform for one candidate or confirmed match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    /// Anchor column in absolute image coordinates.
    pub x: i32,
    /// Anchor row in absolute image coordinates.
    pub y: i32,
    pub orientation: Orientation,
    pub flip: Flip,
}

impl Offset {
    /// Maps a shape-local offset to absolute image coordinates.
    /// Flip first, then rotate, then translate by the anchor.
    pub fn transform(&self, local_x: i32, local_y: i32) -> (i32, i32) {
        let (x, y) = self.flip.apply(local_x, local_y);
        let (x, y) = self.orientation.rotate(x, y);
        (x + self.x, y + self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIENTATIONS: [Orientation; 2] = [Orientation::Horizontal, Orientation::Vertical];
    const FLIPS: [Flip; 4] = [Flip::ZERO, Flip::HORIZONTAL, Flip::VERTICAL, Flip::BOTH];

    /// The algebraic inverse: untranslate, unrotate, unflip. Rotate and flip
    /// are both self-inverse, so only the order is reversed.
    fn untransform(offset: &Offset, abs_x: i32, abs_y: i32) -> (i32, i32) {
        let (x, y) = (abs_x - offset.x, abs_y - offset.y);
        let (x, y) = offset.orientation.rotate(x, y);
        offset.flip.apply(x, y)
    }

    #[test]
    fn rotate_transposes_only_vertical() {
        assert_eq!(Orientation::Horizontal.rotate(3, -7), (3, -7));
        assert_eq!(Orientation::Vertical.rotate(3, -7), (-7, 3));
    }

    #[test]
    fn flip_negates_selected_axes() {
        assert_eq!(Flip::ZERO.apply(2, 5), (2, 5));
        assert_eq!(Flip::HORIZONTAL.apply(2, 5), (-2, 5));
        assert_eq!(Flip::VERTICAL.apply(2, 5), (2, -5));
        assert_eq!(Flip::BOTH.apply(2, 5), (-2, -5));
    }

    #[test]
    fn transform_applies_flip_before_rotation() {
        let offset = Offset {
            x: 10,
            y: 20,
            orientation: Orientation::Vertical,
            flip: Flip::HORIZONTAL,
        };
        // (2, 1) -> flip -> (-2, 1) -> rotate -> (1, -2) -> translate.
        assert_eq!(offset.transform(2, 1), (11, 18));
    }

    #[test]
    fn transform_round_trips_through_its_inverse() {
        let corners = [(-2, -1), (2, -1), (-2, 2), (2, 2)];
        for orientation in ORIENTATIONS {
            for flip in FLIPS {
                let offset = Offset { x: 37, y: -4, orientation, flip };
                for (lx, ly) in corners {
                    let (ax, ay) = offset.transform(lx, ly);
                    assert_eq!(
                        untransform(&offset, ax, ay),
                        (lx, ly),
                        "round trip failed for {orientation:?} {flip:?}"
                    );
                }
            }
        }
    }
}
