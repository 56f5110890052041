// The two orientation passes never write anything but their own registry,
// so they can run concurrently as long as the merged result keeps the
// sequential contract: horizontal matches strictly before vertical ones.
// Each pass runs on its own blocking worker with a per-pass registry; the
// merge order, not completion order, decides the final sequence.

use crate::core_modules::geometry::Orientation;
use crate::core_modules::registry::MatchRegistry;
use crate::core_modules::scanner;
use crate::core_modules::surface::PixelSurface;
use futures::future;
use std::sync::Arc;
use tokio::task::{self, JoinError};

/// Runs both orientation passes concurrently. The returned registry is
/// identical to the sequential `pipeline::detect_crewmates` output.
pub async fn detect_crewmates<S>(surface: Arc<S>) -> Result<MatchRegistry, JoinError>
where
    S: PixelSurface + Send + Sync + 'static,
{
    let horizontal_surface = Arc::clone(&surface);
    let horizontal = task::spawn_blocking(move || {
        let mut registry = MatchRegistry::new();
        scanner::scan(
            horizontal_surface.as_ref(),
            Orientation::Horizontal,
            &mut registry,
        );
        registry
    });

    let vertical = task::spawn_blocking(move || {
        let mut registry = MatchRegistry::new();
        scanner::scan(surface.as_ref(), Orientation::Vertical, &mut registry);
        registry
    });

    let (horizontal, vertical) = future::join(horizontal, vertical).await;
    let mut registry = horizontal?;
    registry.merge(vertical?);
    Ok(registry)
}
