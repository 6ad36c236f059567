//! Text measurement and glyph drawing
//!
//! A [`Typeface`] measures the ink bounds of a string and draws it. Drawing is
//! anchored at the top-left of the layout box: the baseline sits one ascent
//! below `y`. Centering code uses the measured ink bounds, not the advance
//! width, so visually centered text lines up regardless of side bearings.

use std::fs;
use std::path::Path;

use ab_glyph::{point, Font, FontArc, GlyphId, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};

use crate::error::CardError;

use super::layout::Rect;

/// Trait for text measurement and drawing
pub trait Typeface: Send + Sync {
    /// Ink bounds of `text` drawn at the origin, or `None` if nothing is inked
    fn measure(&self, text: &str, size: f32) -> Option<Rect>;

    /// Draw `text` with its layout box anchored at (`x`, `y`)
    fn draw(&self, canvas: &mut RgbaImage, text: &str, size: f32, x: i32, y: i32, color: Rgba<u8>);
}

/// Outline font loaded from a TrueType/OpenType file
#[derive(Clone)]
pub struct FontFace {
    font: FontArc,
}

impl FontFace {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, CardError> {
        let font = FontArc::try_from_vec(bytes).map_err(|e| CardError::FontLoad(e.to_string()))?;
        Ok(Self { font })
    }

    pub fn from_file(path: &Path) -> Result<Self, CardError> {
        let fail = |reason: String| CardError::FontLoad(format!("{}: {}", path.display(), reason));
        let bytes = fs::read(path).map_err(|e| fail(e.to_string()))?;
        let font = FontArc::try_from_vec(bytes).map_err(|e| fail(e.to_string()))?;
        Ok(Self { font })
    }

    /// Visit every outlined glyph of `text` laid out from (`x`, `y`)
    fn for_each_glyph<F>(&self, text: &str, size: f32, x: f32, y: f32, mut visit: F)
    where
        F: FnMut(ab_glyph::OutlinedGlyph),
    {
        let scale = PxScale::from(size);
        let scaled = self.font.as_scaled(scale);
        let baseline = y + scaled.ascent();

        let mut caret = x;
        let mut prev: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(scale, point(caret, baseline));
            if let Some(outlined) = self.font.outline_glyph(glyph) {
                visit(outlined);
            }
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace").finish_non_exhaustive()
    }
}

impl Typeface for FontFace {
    fn measure(&self, text: &str, size: f32) -> Option<Rect> {
        let mut bounds: Option<Rect> = None;
        self.for_each_glyph(text, size, 0.0, 0.0, |glyph| {
            let b = glyph.px_bounds();
            let rect = Rect::new(
                b.min.x.floor() as i32,
                b.min.y.floor() as i32,
                b.max.x.ceil() as i32,
                b.max.y.ceil() as i32,
            );
            bounds = Some(match bounds {
                Some(acc) => acc.union(&rect),
                None => rect,
            });
        });
        bounds
    }

    fn draw(&self, canvas: &mut RgbaImage, text: &str, size: f32, x: i32, y: i32, color: Rgba<u8>) {
        self.for_each_glyph(text, size, x as f32, y as f32, |glyph| {
            let b = glyph.px_bounds();
            glyph.draw(|gx, gy, coverage| {
                let px = b.min.x as i32 + gx as i32;
                let py = b.min.y as i32 + gy as i32;
                blend_pixel(canvas, px, py, color, coverage);
            });
        });
    }
}

/// Blend `color` into the canvas at (`x`, `y`) with the given coverage.
/// Pixels outside the canvas are ignored.
pub fn blend_pixel(canvas: &mut RgbaImage, x: i32, y: i32, color: Rgba<u8>, coverage: f32) {
    if x < 0 || y < 0 || x >= canvas.width() as i32 || y >= canvas.height() as i32 {
        return;
    }
    let coverage = coverage.clamp(0.0, 1.0);
    if coverage <= 0.0 {
        return;
    }
    let pixel = canvas.get_pixel_mut(x as u32, y as u32);
    for channel in 0..3 {
        let under = pixel.0[channel] as f32;
        let over = color.0[channel] as f32;
        pixel.0[channel] = (under + (over - under) * coverage).round() as u8;
    }
    pixel.0[3] = 255;
}

#[cfg(test)]
pub(crate) mod test_face {
    //! Deterministic block typeface so rendering tests need no font files

    use super::*;

    /// Every non-space character is a solid block `size / 2` wide and
    /// `size * 0.7` tall, one ascent (`size * 0.8`) below the layout origin.
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BlockFace;

    impl BlockFace {
        fn advance(size: f32) -> i32 {
            (size * 0.6).round() as i32
        }

        fn glyphs(text: &str, size: f32) -> impl Iterator<Item = Rect> + '_ {
            let advance = Self::advance(size);
            let w = (size * 0.5).round() as i32;
            let top = (size * 0.1).round() as i32;
            let bottom = (size * 0.8).round() as i32;
            text.chars()
                .enumerate()
                .filter(|(_, ch)| !ch.is_whitespace())
                .map(move |(i, _)| {
                    let x0 = i as i32 * advance;
                    Rect::new(x0, top, x0 + w, bottom)
                })
        }
    }

    impl Typeface for BlockFace {
        fn measure(&self, text: &str, size: f32) -> Option<Rect> {
            Self::glyphs(text, size).reduce(|a, b| a.union(&b))
        }

        fn draw(&self, canvas: &mut RgbaImage, text: &str, size: f32, x: i32, y: i32, color: Rgba<u8>) {
            for glyph in Self::glyphs(text, size) {
                let glyph = glyph.translate(x, y);
                for py in glyph.y0..glyph.y1 {
                    for px in glyph.x0..glyph.x1 {
                        blend_pixel(canvas, px, py, color, 1.0);
                    }
                }
            }
        }
    }
}
