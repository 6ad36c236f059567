//! Rank box component
//!
//! Tall boxes stack a title above a large number; compact cells put a short
//! title on the left and the number on the right of a single line.

use crate::config::Settings;
use crate::render::helpers::canvas::Canvas;
use crate::render::helpers::colors::Palette;
use crate::render::helpers::layout::{RankCell, RankKind, RankStyle, Rect};
use crate::render::helpers::text_metrics::Typeface;

/// Renderer for the Top 100 and internal rank boxes
pub struct RankBoxRenderer<'a> {
    font: &'a dyn Typeface,
    palette: Palette,
    settings: &'a Settings,
}

impl<'a> RankBoxRenderer<'a> {
    pub fn new(font: &'a dyn Typeface, settings: &'a Settings) -> Self {
        Self {
            font,
            palette: Palette::from_settings(settings),
            settings,
        }
    }

    fn title(&self, cell: &RankCell) -> &str {
        let s = self.settings;
        match (cell.kind, cell.style) {
            (RankKind::Top100, RankStyle::Tall) => &s.top100_title,
            (RankKind::Internal, RankStyle::Tall) => &s.internal_rank_title,
            (RankKind::Top100, RankStyle::Compact) => &s.top100_short_title,
            (RankKind::Internal, RankStyle::Compact) => &s.internal_rank_short_title,
        }
    }

    pub fn render(&self, canvas: &mut Canvas, cell: &RankCell, rank: &str) {
        canvas.draw_box(
            cell.rect,
            self.palette.box_fill,
            self.palette.outline,
            self.settings.info_border,
        );
        match cell.style {
            RankStyle::Tall => self.render_tall(canvas, cell, rank),
            RankStyle::Compact => self.render_compact(canvas, cell, rank),
        }
    }

    fn render_tall(&self, canvas: &mut Canvas, cell: &RankCell, rank: &str) {
        let s = self.settings;
        let rect = cell.rect;
        let title = self.title(cell);

        let title_h = self
            .font
            .measure(title, s.rank_label_font_size)
            .map(|ink| ink.height())
            .unwrap_or(0);
        let title_rect = Rect::new(
            rect.x0,
            rect.y0 + s.rank_title_pad,
            rect.x1,
            rect.y0 + s.rank_title_pad + title_h,
        );
        canvas.draw_text_centered(
            self.font,
            title,
            s.rank_label_font_size,
            title_rect,
            self.palette.dark_text,
        );

        // Number centered in what remains below the title
        let number_rect = Rect::new(
            rect.x0,
            title_rect.y1 + s.rank_title_pad,
            rect.x1,
            rect.y1 - s.rank_title_pad,
        );
        canvas.draw_text_centered(
            self.font,
            rank,
            s.rank_number_font_size,
            number_rect,
            self.palette.dark_text,
        );
    }

    fn render_compact(&self, canvas: &mut Canvas, cell: &RankCell, rank: &str) {
        let s = self.settings;
        let rect = cell.rect;
        let inset = s.rank_title_pad + s.info_border as i32;
        canvas.draw_text_left(
            self.font,
            self.title(cell),
            s.rank_label_font_size,
            rect.x0 + inset,
            rect,
            self.palette.dark_text,
        );
        canvas.draw_text_right(
            self.font,
            rank,
            s.info_font_size,
            rect.x1 - inset,
            rect,
            self.palette.dark_text,
        );
    }
}
