//! Info cell component: a bordered white box with one centered value

use crate::config::Settings;
use crate::render::helpers::canvas::Canvas;
use crate::render::helpers::colors::Palette;
use crate::render::helpers::layout::Rect;
use crate::render::helpers::text_metrics::Typeface;

/// Renderer for position/level/team/score cells
pub struct InfoCellRenderer<'a> {
    font: &'a dyn Typeface,
    palette: Palette,
    settings: &'a Settings,
}

impl<'a> InfoCellRenderer<'a> {
    pub fn new(font: &'a dyn Typeface, settings: &'a Settings) -> Self {
        Self {
            font,
            palette: Palette::from_settings(settings),
            settings,
        }
    }

    /// Draw the cell; an empty value leaves the box blank
    pub fn render(&self, canvas: &mut Canvas, rect: Rect, value: &str) {
        canvas.draw_box(
            rect,
            self.palette.box_fill,
            self.palette.outline,
            self.settings.info_border,
        );
        canvas.draw_text_centered(
            self.font,
            value,
            self.settings.info_font_size,
            rect,
            self.palette.dark_text,
        );
    }
}
