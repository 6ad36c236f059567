//! Team logo and headshot component

use image::RgbaImage;

use crate::config::Settings;
use crate::render::helpers::canvas::{square_within, Canvas};
use crate::render::helpers::colors::Palette;
use crate::render::helpers::layout::Rect;

/// Renderer for the logo square and the headshot box
pub struct PhotoRenderer<'a> {
    palette: Palette,
    settings: &'a Settings,
}

impl<'a> PhotoRenderer<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self {
            palette: Palette::from_settings(settings),
            settings,
        }
    }

    /// Gray box with the photo border, drawn when no bitmap is available
    pub fn render_placeholder(&self, canvas: &mut Canvas, rect: Rect) {
        canvas.draw_box(
            rect,
            self.palette.placeholder,
            self.palette.outline,
            self.settings.photo_border,
        );
    }

    /// Headshot scaled to fit and centered; placeholder when `None`
    pub fn render_headshot(&self, canvas: &mut Canvas, rect: Rect, bitmap: Option<&RgbaImage>) {
        let placed = bitmap.and_then(|bitmap| canvas.place_fit(bitmap, rect));
        if placed.is_none() {
            self.render_placeholder(canvas, rect);
        }
    }

    /// Logo scaled into the centered logo square; placeholder square when `None`
    pub fn render_logo(&self, canvas: &mut Canvas, rect: Rect, bitmap: Option<&RgbaImage>) {
        let ratio = self.settings.logo_fill_ratio;
        let placed = bitmap.and_then(|bitmap| canvas.place_square(bitmap, rect, ratio));
        if placed.is_none() {
            if let Some(square) = square_within(rect, ratio) {
                self.render_placeholder(canvas, square);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn test_missing_headshot_draws_placeholder() {
        let settings = Settings::default();
        let palette = Palette::from_settings(&settings);
        let mut canvas = Canvas::new(60, 60, palette.background);
        let rect = Rect::new(10, 10, 50, 50);
        PhotoRenderer::new(&settings).render_headshot(&mut canvas, rect, None);

        let img = canvas.image();
        assert_eq!(*img.get_pixel(10, 10), palette.outline);
        assert_eq!(*img.get_pixel(12, 12), palette.outline);
        assert_eq!(*img.get_pixel(13, 13), palette.placeholder);
        assert_eq!(*img.get_pixel(9, 9), palette.background);
        assert_eq!(*img.get_pixel(50, 50), palette.background);
    }

    #[test]
    fn test_headshot_has_no_border() {
        let settings = Settings::default();
        let palette = Palette::from_settings(&settings);
        let mut canvas = Canvas::new(60, 60, palette.background);
        let rect = Rect::new(10, 10, 50, 50);
        let photo = RgbaImage::from_pixel(40, 40, Rgba([1, 2, 3, 255]));
        PhotoRenderer::new(&settings).render_headshot(&mut canvas, rect, Some(&photo));
        assert_eq!(*canvas.image().get_pixel(10, 10), Rgba([1, 2, 3, 255]));
    }

    #[test]
    fn test_logo_fills_square_fraction() {
        let settings = Settings::default();
        let palette = Palette::from_settings(&settings);
        let mut canvas = Canvas::new(200, 200, palette.background);
        let rect = Rect::new(0, 0, 100, 200);
        let logo = RgbaImage::from_pixel(10, 10, Rgba([9, 9, 9, 255]));
        PhotoRenderer::new(&settings).render_logo(&mut canvas, rect, Some(&logo));

        let inked = canvas
            .image()
            .pixels()
            .filter(|p| **p != palette.background)
            .count();
        assert_eq!(inked, 82 * 82);
    }

    #[test]
    fn test_missing_logo_draws_placeholder_square() {
        let settings = Settings::default();
        let palette = Palette::from_settings(&settings);
        let mut canvas = Canvas::new(200, 200, palette.background);
        let rect = Rect::new(0, 0, 100, 200);
        PhotoRenderer::new(&settings).render_logo(&mut canvas, rect, None);

        // 82px square centered in the 100x200 cell
        let img = canvas.image();
        assert_eq!(*img.get_pixel(9, 59), palette.outline);
        assert_eq!(*img.get_pixel(90, 140), palette.outline);
        assert_eq!(*img.get_pixel(50, 100), palette.placeholder);
        assert_eq!(*img.get_pixel(8, 59), palette.background);
        assert_eq!(*img.get_pixel(91, 141), palette.background);
        assert_eq!(*img.get_pixel(50, 58), palette.background);
    }
}
