// THEORY:
// The `pipeline` module is the top-level API for the detection engine. It
// strings the core modules together in their reference order: a full
// horizontal scan, then a full vertical scan, both appending into one
// registry, which the compositor then turns into the cut-out image. The two
// passes are independent read-only walks over the same surface; the
// sequential ordering here is the contract the registry's match order is
// defined by (see `parallel_pipeline` for the concurrent variant that
// preserves it).
//
// `run` is the whole program in one call: decode, detect, composite, save,
// report the count. It is also the only place an error can surface - the
// core itself treats every out-of-bounds access as a failed check and never
// fails.

use crate::core_modules::compositor;
use crate::core_modules::geometry::Orientation;
use crate::core_modules::registry::MatchRegistry;
use crate::core_modules::scanner;
use crate::core_modules::surface::PixelSurface;
use image::RgbaImage;
use std::path::Path;
use thiserror::Error;

/// Failures of the I/O layer around the engine. The matching core itself
/// has no error states.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("image decode/encode failed: {0}")]
    Image(#[from] image::ImageError),
    #[error("filesystem error: {0}")]
    Io(#[from] std::io::Error),
}

/// Runs both orientation passes in reference order and returns every
/// confirmed match, horizontal matches first.
pub fn detect_crewmates<S: PixelSurface>(surface: &S) -> MatchRegistry {
    let mut registry = MatchRegistry::new();

    scanner::scan(surface, Orientation::Horizontal, &mut registry);
    let after_horizontal = registry.len();
    log::debug!("horizontal pass confirmed {after_horizontal} matches");

    scanner::scan(surface, Orientation::Vertical, &mut registry);
    log::debug!(
        "vertical pass confirmed {} matches",
        registry.len() - after_horizontal
    );

    registry
}

/// Loads a PNG, detects every crewmate silhouette, and writes the masked
/// cut-out. Returns the number of confirmed matches.
pub fn run(input: &Path, output: &Path) -> Result<usize, DetectError> {
    let source: RgbaImage = image::open(input)?.to_rgba8();
    log::info!(
        "scanning {} ({}x{})",
        input.display(),
        source.width(),
        source.height()
    );

    let registry = detect_crewmates(&source);

    let mask = compositor::rasterize_mask(&registry, source.width(), source.height());
    let cutout = compositor::composite(&source, &mask);
    compositor::save(output, &cutout)?;

    Ok(registry.len())
}
