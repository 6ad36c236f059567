//! Bottom panel component: framed box, two title lines and labelled rows
//!
//! Both the projections and the scouting grades panel use this renderer;
//! they differ only in title text, font sizes and row contents.

use crate::config::Settings;
use crate::render::format::Heat;
use crate::render::helpers::canvas::Canvas;
use crate::render::helpers::colors::Palette;
use crate::render::helpers::layout::PanelGeometry;
use crate::render::helpers::text_metrics::Typeface;

/// One labelled, color-coded row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelRow {
    pub label: String,
    pub value: String,
    pub heat: Heat,
}

/// Font sizes for a panel's rows
#[derive(Debug, Clone, Copy)]
pub struct RowFonts {
    pub label_size: f32,
    pub value_size: f32,
}

/// Renderer for the projections and scout grades panels
pub struct StatPanelRenderer<'a> {
    font: &'a dyn Typeface,
    palette: Palette,
    settings: &'a Settings,
}

impl<'a> StatPanelRenderer<'a> {
    pub fn new(font: &'a dyn Typeface, settings: &'a Settings) -> Self {
        Self {
            font,
            palette: Palette::from_settings(settings),
            settings,
        }
    }

    pub fn render(
        &self,
        canvas: &mut Canvas,
        panel: &PanelGeometry,
        titles: &[String; 2],
        rows: &[PanelRow],
        fonts: RowFonts,
    ) {
        let s = self.settings;
        canvas.draw_box(
            panel.frame,
            self.palette.box_fill,
            self.palette.outline,
            s.panel_border,
        );
        canvas.draw_title_pair(
            self.font,
            titles,
            s.panel_title_font_size,
            &panel.titles,
            self.palette.dark_text,
        );

        let label_x = panel.frame.x0 + s.panel_label_inset;
        let value_x = panel.frame.x1 - s.panel_value_offset;
        for (row, rect) in rows.iter().zip(&panel.rows) {
            canvas.draw_text_left(
                self.font,
                &row.label,
                fonts.label_size,
                label_x,
                *rect,
                self.palette.dark_text,
            );
            canvas.draw_text_left(
                self.font,
                &row.value,
                fonts.value_size,
                value_x,
                *rect,
                self.palette.heat(row.heat),
            );
        }
    }
}
