// THEORY:
// The `compositor` is the consumer side of the match registry. It rasterizes
// every confirmed match's 16 mask offsets through the match's stored
// transform into a flat boolean mask, then composites the source image
// against it: source pixel where the mask is set, fully transparent
// everywhere else. Mask writes that land outside the image are skipped, not
// errors - a match validated near the edge may still own out-of-frame mask
// pixels through its border tolerance.
//
// Saving goes through `image`'s PNG encoder directly so the output stays a
// byte-for-byte RGBA8 dump of the composited buffer.

use crate::core_modules::registry::MatchRegistry;
use crate::core_modules::template::template::MASK_OFFSETS;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage};
use std::path::Path;

/// Rasterizes the registry into a row-major boolean mask of the given
/// dimensions. Out-of-bounds mask pixels are clamped away silently.
pub fn rasterize_mask(registry: &MatchRegistry, width: u32, height: u32) -> Vec<bool> {
    let mut mask = vec![false; (width * height) as usize];
    for crewmate in registry.iter() {
        for &(local_x, local_y) in MASK_OFFSETS.iter() {
            let (x, y) = crewmate.offset.transform(local_x, local_y);
            if x >= 0 && y >= 0 && (x as u32) < width && (y as u32) < height {
                mask[(y as u32 * width + x as u32) as usize] = true;
            }
        }
    }
    mask
}

/// Keeps the source pixel wherever the mask is set, transparent elsewhere.
pub fn composite(source: &RgbaImage, mask: &[bool]) -> RgbaImage {
    let (width, height) = source.dimensions();
    let mut output = RgbaImage::from_pixel(width, height, Rgba([0, 0, 0, 0]));
    for (x, y, pixel) in source.enumerate_pixels() {
        if mask[(y * width + x) as usize] {
            output.put_pixel(x, y, *pixel);
        }
    }
    output
}

/// Persists the composited image as an RGBA8 PNG.
pub fn save(path: &Path, image: &RgbaImage) -> Result<(), image::ImageError> {
    let output = std::fs::File::create(path)?;
    let encoder = PngEncoder::new(output);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_modules::geometry::{Flip, Offset, Orientation};
    use crate::core_modules::registry::Crewmate;
    use crate::core_modules::surface::pack_rgba;

    fn single_match(x: i32, y: i32) -> MatchRegistry {
        let mut registry = MatchRegistry::new();
        registry.push(Crewmate {
            offset: Offset {
                x,
                y,
                orientation: Orientation::Horizontal,
                flip: Flip::ZERO,
            },
            color: pack_rgba([200, 30, 40, 255]),
        });
        registry
    }

    #[test]
    fn mask_covers_exactly_the_mask_offsets() {
        let registry = single_match(8, 8);
        let mask = rasterize_mask(&registry, 16, 16);
        assert_eq!(mask.iter().filter(|&&set| set).count(), MASK_OFFSETS.len());
        for &(lx, ly) in MASK_OFFSETS.iter() {
            let (x, y) = (8 + lx, 8 + ly);
            assert!(mask[(y * 16 + x) as usize]);
        }
    }

    #[test]
    fn out_of_bounds_mask_writes_are_skipped() {
        // Anchor at the very corner: most of the silhouette lies outside.
        let registry = single_match(0, 0);
        let mask = rasterize_mask(&registry, 16, 16);
        let in_bounds = MASK_OFFSETS
            .iter()
            .filter(|&&(lx, ly)| lx >= 0 && ly >= 0)
            .count();
        assert_eq!(mask.iter().filter(|&&set| set).count(), in_bounds);
    }

    #[test]
    fn composite_clears_everything_outside_the_mask() {
        let source = RgbaImage::from_pixel(16, 16, Rgba([200, 30, 40, 255]));
        let registry = single_match(8, 8);
        let mask = rasterize_mask(&registry, 16, 16);
        let output = composite(&source, &mask);
        for (x, y, pixel) in output.enumerate_pixels() {
            if mask[(y * 16 + x) as usize] {
                assert_eq!(pixel, &Rgba([200, 30, 40, 255]));
            } else {
                assert_eq!(pixel, &Rgba([0, 0, 0, 0]));
            }
        }
    }

    #[test]
    fn save_writes_a_png() {
        let image = RgbaImage::from_pixel(8, 8, Rgba([255, 255, 255, 255]));
        let path = std::env::temp_dir().join("crewmate_vision_save_test.png");
        save(&path, &image).expect("error saving file");
        let reloaded = image::open(&path).expect("error reloading file").to_rgba8();
        assert_eq!(reloaded, image);
        let _ = std::fs::remove_file(&path);
    }
}
