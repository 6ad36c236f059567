//! Drawing surface for one card
//!
//! Wraps an [`RgbaImage`] with the handful of primitives the components need:
//! filled and outlined boxes, anchored and centered text, and bitmaps scaled
//! to fit a rectangle.

use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_filled_rect_mut;

use super::layout::Rect;
use super::text_metrics::Typeface;

pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Blank canvas filled with `background`
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Self {
            image: RgbaImage::from_pixel(width, height, background),
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }

    pub fn fill_rect(&mut self, rect: Rect, color: Rgba<u8>) {
        if rect.is_empty() {
            return;
        }
        let area = imageproc::rect::Rect::at(rect.x0, rect.y0)
            .of_size(rect.width() as u32, rect.height() as u32);
        draw_filled_rect_mut(&mut self.image, area, color);
    }

    /// Filled box with an outline `border` pixels thick drawn inside `rect`
    pub fn draw_box(&mut self, rect: Rect, fill: Rgba<u8>, outline: Rgba<u8>, border: u32) {
        self.fill_rect(rect, fill);
        self.draw_border(rect, outline, border);
    }

    /// Outline `border` pixels thick, drawn inward from the edges of `rect`
    pub fn draw_border(&mut self, rect: Rect, color: Rgba<u8>, border: u32) {
        let b = (border as i32).min(rect.width() / 2).min(rect.height() / 2);
        if b <= 0 {
            return;
        }
        let Rect { x0, y0, x1, y1 } = rect;
        self.fill_rect(Rect::new(x0, y0, x1, y0 + b), color);
        self.fill_rect(Rect::new(x0, y1 - b, x1, y1), color);
        self.fill_rect(Rect::new(x0, y0 + b, x0 + b, y1 - b), color);
        self.fill_rect(Rect::new(x1 - b, y0 + b, x1, y1 - b), color);
    }

    pub fn draw_text(
        &mut self,
        face: &dyn Typeface,
        text: &str,
        size: f32,
        x: i32,
        y: i32,
        color: Rgba<u8>,
    ) {
        face.draw(&mut self.image, text, size, x, y, color);
    }

    /// Draw `text` with its ink bounds centered in `rect`
    pub fn draw_text_centered(
        &mut self,
        face: &dyn Typeface,
        text: &str,
        size: f32,
        rect: Rect,
        color: Rgba<u8>,
    ) {
        let Some(ink) = face.measure(text, size) else {
            return;
        };
        let x = center(rect.x0, rect.x1) - center(ink.x0, ink.x1);
        let y = center(rect.y0, rect.y1) - center(ink.y0, ink.y1);
        face.draw(&mut self.image, text, size, x, y, color);
    }

    /// Draw `text` starting at `x`, vertically centered in `rect`
    pub fn draw_text_left(
        &mut self,
        face: &dyn Typeface,
        text: &str,
        size: f32,
        x: i32,
        rect: Rect,
        color: Rgba<u8>,
    ) {
        let Some(ink) = face.measure(text, size) else {
            return;
        };
        let y = center(rect.y0, rect.y1) - center(ink.y0, ink.y1);
        face.draw(&mut self.image, text, size, x - ink.x0, y, color);
    }

    /// Draw `text` ending at `x`, vertically centered in `rect`
    pub fn draw_text_right(
        &mut self,
        face: &dyn Typeface,
        text: &str,
        size: f32,
        x: i32,
        rect: Rect,
        color: Rgba<u8>,
    ) {
        let Some(ink) = face.measure(text, size) else {
            return;
        };
        let y = center(rect.y0, rect.y1) - center(ink.y0, ink.y1);
        face.draw(&mut self.image, text, size, x - ink.x1, y, color);
    }

    /// Two title lines, each centered in its own rectangle
    pub fn draw_title_pair(
        &mut self,
        face: &dyn Typeface,
        titles: &[String; 2],
        size: f32,
        rects: &[Rect; 2],
        color: Rgba<u8>,
    ) {
        for (title, rect) in titles.iter().zip(rects) {
            self.draw_text_centered(face, title, size, *rect, color);
        }
    }

    /// Scale `bitmap` to fit inside `rect` keeping its aspect ratio, centered.
    /// Returns the rectangle actually covered.
    pub fn place_fit(&mut self, bitmap: &RgbaImage, rect: Rect) -> Option<Rect> {
        let target = fit_within(bitmap.width(), bitmap.height(), rect)?;
        self.overlay_scaled(bitmap, target);
        Some(target)
    }

    /// Resize `bitmap` to a centered square whose side is `ratio` of the
    /// shorter side of `rect`. The source aspect ratio is not kept.
    pub fn place_square(&mut self, bitmap: &RgbaImage, rect: Rect, ratio: f32) -> Option<Rect> {
        if bitmap.width() == 0 || bitmap.height() == 0 {
            return None;
        }
        let square = square_within(rect, ratio)?;
        self.overlay_scaled(bitmap, square);
        Some(square)
    }

    fn overlay_scaled(&mut self, bitmap: &RgbaImage, target: Rect) {
        let (w, h) = (target.width() as u32, target.height() as u32);
        let scaled = if (w, h) == bitmap.dimensions() {
            bitmap.clone()
        } else {
            imageops::resize(bitmap, w, h, FilterType::Lanczos3)
        };
        imageops::overlay(&mut self.image, &scaled, target.x0 as i64, target.y0 as i64);
    }
}

fn center(lo: i32, hi: i32) -> i32 {
    (lo + hi).div_euclid(2)
}

/// Largest rectangle with the source aspect ratio that fits in `rect`, centered.
/// `None` for empty sources or targets.
pub fn fit_within(src_width: u32, src_height: u32, rect: Rect) -> Option<Rect> {
    if src_width == 0 || src_height == 0 || rect.is_empty() {
        return None;
    }
    let scale = f64::min(
        rect.width() as f64 / src_width as f64,
        rect.height() as f64 / src_height as f64,
    );
    let w = ((src_width as f64 * scale).round() as i32).clamp(1, rect.width());
    let h = ((src_height as f64 * scale).round() as i32).clamp(1, rect.height());
    let x0 = rect.x0 + (rect.width() - w) / 2;
    let y0 = rect.y0 + (rect.height() - h) / 2;
    Some(Rect::new(x0, y0, x0 + w, y0 + h))
}

/// Centered square whose side is `ratio` of the shorter side of `rect`
pub fn square_within(rect: Rect, ratio: f32) -> Option<Rect> {
    let side = (rect.width().min(rect.height()) as f32 * ratio).floor() as i32;
    if side <= 0 {
        return None;
    }
    let x0 = rect.x0 + (rect.width() - side) / 2;
    let y0 = rect.y0 + (rect.height() - side) / 2;
    Some(Rect::new(x0, y0, x0 + side, y0 + side))
}

#[cfg(test)]
mod tests {
    use super::super::text_metrics::test_face::BlockFace;
    use super::*;

    const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);
    const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
    const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

    #[test]
    fn test_fit_within_keeps_aspect_and_centers() {
        // 2:1 source into a square: full width, half height, vertically centered
        let rect = Rect::new(10, 10, 110, 110);
        assert_eq!(fit_within(200, 100, rect), Some(Rect::new(10, 35, 110, 85)));
        // 1:2 source: full height, horizontally centered
        assert_eq!(fit_within(50, 100, rect), Some(Rect::new(35, 10, 85, 110)));
        // upscaling a small image
        assert_eq!(fit_within(10, 10, rect), Some(rect));
    }

    #[test]
    fn test_fit_within_stays_inside() {
        let rect = Rect::new(670, 106, 844, 294);
        for (w, h) in [(213, 320), (1, 1000), (1000, 1), (174, 188)] {
            let fitted = fit_within(w, h, rect).unwrap();
            assert!(fitted.x0 >= rect.x0 && fitted.x1 <= rect.x1);
            assert!(fitted.y0 >= rect.y0 && fitted.y1 <= rect.y1);
        }
    }

    #[test]
    fn test_fit_within_rejects_empty() {
        assert_eq!(fit_within(0, 10, Rect::new(0, 0, 10, 10)), None);
        assert_eq!(fit_within(10, 10, Rect::new(0, 0, 0, 10)), None);
    }

    #[test]
    fn test_square_within() {
        let rect = Rect::new(496, 106, 670, 294);
        let square = square_within(rect, 0.82).unwrap();
        assert_eq!(square.width(), square.height());
        assert_eq!(square.width(), 142);
        assert_eq!(square.x0 - rect.x0, rect.x1 - square.x1);
        assert!(square_within(rect, 0.0).is_none());
    }

    #[test]
    fn test_draw_box_border_is_inward() {
        let mut canvas = Canvas::new(20, 20, BLACK);
        canvas.draw_box(Rect::new(5, 5, 15, 15), WHITE, RED, 2);
        let img = canvas.image();
        assert_eq!(*img.get_pixel(4, 4), BLACK);
        assert_eq!(*img.get_pixel(5, 5), RED);
        assert_eq!(*img.get_pixel(6, 6), RED);
        assert_eq!(*img.get_pixel(7, 7), WHITE);
        assert_eq!(*img.get_pixel(14, 14), RED);
        assert_eq!(*img.get_pixel(15, 15), BLACK);
    }

    #[test]
    fn test_centered_text_is_centered() {
        let mut canvas = Canvas::new(100, 40, BLACK);
        let rect = Rect::new(0, 0, 100, 40);
        canvas.draw_text_centered(&BlockFace, "AB", 20.0, rect, WHITE);
        // ink: two 10px blocks with a 2px gap, 14px tall
        let inked: Vec<(u32, u32)> = canvas
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| **p == WHITE)
            .map(|(x, y, _)| (x, y))
            .collect();
        let min_x = inked.iter().map(|p| p.0).min().unwrap();
        let max_x = inked.iter().map(|p| p.0).max().unwrap();
        let min_y = inked.iter().map(|p| p.1).min().unwrap();
        let max_y = inked.iter().map(|p| p.1).max().unwrap();
        assert_eq!(min_x + max_x + 1, 100);
        assert_eq!(min_y + max_y + 1, 40);
    }

    #[test]
    fn test_place_fit_covers_only_target() {
        let mut canvas = Canvas::new(50, 50, BLACK);
        let bitmap = RgbaImage::from_pixel(20, 10, WHITE);
        let placed = canvas.place_fit(&bitmap, Rect::new(10, 10, 30, 30)).unwrap();
        assert_eq!(placed, Rect::new(10, 15, 30, 25));
        for (x, y, p) in canvas.image().enumerate_pixels() {
            let inside = placed.contains(x as i32, y as i32);
            assert_eq!(*p == WHITE, inside, "pixel ({}, {})", x, y);
        }
    }

    #[test]
    fn test_place_square_stretches_wide_source() {
        let mut canvas = Canvas::new(100, 100, BLACK);
        let logo = RgbaImage::from_pixel(100, 50, RED);
        let placed = canvas.place_square(&logo, Rect::new(0, 0, 100, 100), 0.82).unwrap();
        assert_eq!(placed, Rect::new(9, 9, 91, 91));
        let covered = canvas
            .image()
            .enumerate_pixels()
            .filter(|(_, _, p)| **p != BLACK)
            .count();
        assert_eq!(covered, 82 * 82);
        assert_ne!(*canvas.image().get_pixel(50, 12), BLACK);
        assert_eq!(*canvas.image().get_pixel(50, 5), BLACK);
    }
}
