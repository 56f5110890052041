// THEORY:
// This file is the main entry point for the `crewmate_vision` library crate.
// It exposes the detection pipeline and the core building blocks it is made
// of: the coordinate-transform geometry, the silhouette templates, the
// run-length scanner, the geometric validator, the match registry, and the
// mask compositor.
//
// The `pipeline` module is the intended front door (scan an image, get a
// registry of matches, composite the cut-out); `parallel_pipeline` offers
// the same result with the two orientation passes running concurrently. The
// `core_modules` stay public so a consumer with its own pixel source can
// implement `PixelSurface` and drive the scanner directly.

pub mod core_modules;
pub mod parallel_pipeline;
pub mod pipeline;
