// THEORY:
// The `template` module is the single source of truth for the crewmate
// silhouette. Three fixed offset tables describe it in shape-local
// coordinates, anchor at the center of the five-pixel backbone run:
//
//       x: -3 -2 -1  0  1  2  3
//   y: -2    .  o  o  .  .  .        o  border
//   y: -1    o  #  #  o  o  .        #  body
//   y:  0 o  #  #  #  #  #  o        v  visor
//   y:  1 o  #  v  #  #  o  .
//   y:  2 o  #  v  #  #  #  o
//   y:  3    o  o  o  o  o  .
//
// - `BODY_OFFSETS` (14): every pixel that must carry the body color.
// - `BORDER_OFFSETS` (16): the ring just outside the silhouette, expected to
//   contrast with the body so a real shape boundary can be told apart from a
//   solid color field.
// - `VISOR_OFFSETS` (2): the two visor pixels, expected to agree with each
//   other and differ from the body.
// - `MASK_OFFSETS` (16): body plus visor; the pixels copied into the output
//   image for a confirmed match.
//
// The tables are constants and are never mutated. The backbone row at y = 0
// spans x in [-2, 2]; that run is what the scanner's run-length counter
// locks onto.

pub mod template {
    /// A shape-local pixel offset relative to the anchor.
    pub type LocalOffset = (i32, i32);

    /// Pixels that must all equal the run color for a full-body match.
    pub const BODY_OFFSETS: [LocalOffset; 14] = [
        // y = -1
        (-1, -1),
        (0, -1),
        // y = 0 (the backbone run)
        (-2, 0),
        (-1, 0),
        (0, 0),
        (1, 0),
        (2, 0),
        // y = 1
        (-2, 1),
        (0, 1),
        (1, 1),
        // y = 2
        (-2, 2),
        (0, 2),
        (1, 2),
        (2, 2),
    ];

    /// The contrasting ring one step outside the silhouette.
    pub const BORDER_OFFSETS: [LocalOffset; 16] = [
        // y = -2
        (-1, -2),
        (0, -2),
        // y = -1
        (-2, -1),
        (1, -1),
        (2, -1),
        // y = 0
        (-3, 0),
        (3, 0),
        // y = 1
        (-3, 1),
        (2, 1),
        // y = 2
        (-3, 2),
        (3, 2),
        // y = 3
        (-2, 3),
        (-1, 3),
        (0, 3),
        (1, 3),
        (2, 3),
    ];

    /// The two visor pixels inside the silhouette.
    pub const VISOR_OFFSETS: [LocalOffset; 2] = [(-1, 1), (-1, 2)];

    /// Body plus visor: everything rasterized into the output for a match.
    pub const MASK_OFFSETS: [LocalOffset; 16] = [
        (-1, -1),
        (0, -1),
        (-2, 0),
        (-1, 0),
        (0, 0),
        (1, 0),
        (2, 0),
        (-2, 1),
        (0, 1),
        (1, 1),
        (-2, 2),
        (0, 2),
        (1, 2),
        (2, 2),
        (-1, 1),
        (-1, 2),
    ];
}
