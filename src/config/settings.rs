use crate::cli::{Args, LayoutVariant};

use super::defaults::*;

/// Runtime settings for card rendering
#[derive(Debug, Clone)]
pub struct Settings {
    // Canvas dimensions
    pub card_width: u32,
    pub card_height: u32,

    /// Info block arrangement
    pub layout: LayoutVariant,

    // Layout dimensions (pixels)
    pub side_margin: i32,
    pub top_margin: i32,
    pub row_gap: i32,
    pub box_gap: i32,
    pub name_padding: i32,
    pub info_box_height: i32,
    pub info_box_gap: i32,
    pub grid_row_gap: i32,
    pub bottom_box_width: i32,
    pub bottom_box_height: i32,
    pub panel_title_pad: i32,
    pub panel_title_height: i32,
    pub panel_title_overlap: i32,
    pub panel_label_inset: i32,
    pub panel_value_offset: i32,
    pub rank_title_pad: i32,
    pub logo_fill_ratio: f32,
    pub brand_mark_size: i32,
    pub footer_bottom_inset: i32,

    // Borders
    pub panel_border: u32,
    pub info_border: u32,
    pub photo_border: u32,

    // Typography (pixels)
    pub name_font_size: f32,
    pub info_font_size: f32,
    pub rank_label_font_size: f32,
    pub rank_number_font_size: f32,
    pub panel_title_font_size: f32,
    pub stat_label_font_size: f32,
    pub stat_value_font_size: f32,
    pub grade_label_font_size: f32,
    pub grade_value_font_size: f32,
    pub footer_font_size: f32,

    // Colors (RGB 0-255)
    pub background: (u8, u8, u8),
    pub light_text: (u8, u8, u8),
    pub dark_text: (u8, u8, u8),
    pub box_fill: (u8, u8, u8),
    pub outline: (u8, u8, u8),
    pub placeholder: (u8, u8, u8),
    pub cold: (u8, u8, u8),
    pub neutral: (u8, u8, u8),
    pub hot: (u8, u8, u8),

    // Branding text
    pub projections_title: [String; 2],
    pub grades_title: [String; 2],
    pub top100_title: String,
    pub internal_rank_title: String,
    /// Shorter rank titles for single-height grid cells
    pub top100_short_title: String,
    pub internal_rank_short_title: String,
    pub footer_text: String,

    // Network
    pub headshot_url_template: String,
    pub lookup_url: String,
    pub fetch_timeout_secs: u64,
    pub offline: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            card_width: CARD_WIDTH,
            card_height: CARD_HEIGHT,

            layout: LayoutVariant::Stacked,

            side_margin: SIDE_MARGIN,
            top_margin: TOP_MARGIN,
            row_gap: ROW_GAP,
            box_gap: BOX_GAP,
            name_padding: NAME_PADDING,
            info_box_height: INFO_BOX_HEIGHT,
            info_box_gap: INFO_BOX_GAP,
            grid_row_gap: GRID_ROW_GAP,
            bottom_box_width: BOTTOM_BOX_WIDTH,
            bottom_box_height: BOTTOM_BOX_HEIGHT,
            panel_title_pad: PANEL_TITLE_PAD,
            panel_title_height: PANEL_TITLE_HEIGHT,
            panel_title_overlap: PANEL_TITLE_OVERLAP,
            panel_label_inset: PANEL_LABEL_INSET,
            panel_value_offset: PANEL_VALUE_OFFSET,
            rank_title_pad: RANK_TITLE_PAD,
            logo_fill_ratio: LOGO_FILL_RATIO,
            brand_mark_size: BRAND_MARK_SIZE,
            footer_bottom_inset: FOOTER_BOTTOM_INSET,

            panel_border: PANEL_BORDER,
            info_border: INFO_BORDER,
            photo_border: PHOTO_BORDER,

            name_font_size: NAME_FONT_SIZE,
            info_font_size: INFO_FONT_SIZE,
            rank_label_font_size: RANK_LABEL_FONT_SIZE,
            rank_number_font_size: RANK_NUMBER_FONT_SIZE,
            panel_title_font_size: PANEL_TITLE_FONT_SIZE,
            stat_label_font_size: STAT_LABEL_FONT_SIZE,
            stat_value_font_size: STAT_VALUE_FONT_SIZE,
            grade_label_font_size: GRADE_LABEL_FONT_SIZE,
            grade_value_font_size: GRADE_VALUE_FONT_SIZE,
            footer_font_size: FOOTER_FONT_SIZE,

            background: BG_COLOR,
            light_text: WHITE,
            dark_text: BLACK,
            box_fill: WHITE,
            outline: BLACK,
            placeholder: GRAY,
            cold: BLUE,
            neutral: GRAY,
            hot: RED,

            projections_title: ["PLIVE+ PEAK".to_string(), "PROJECTIONS".to_string()],
            grades_title: ["PROSPECTS LIVE".to_string(), "SCOUT GRADES".to_string()],
            top100_title: "TOP 100".to_string(),
            internal_rank_title: "PLIVE+ RANK".to_string(),
            top100_short_title: "TOP 100".to_string(),
            internal_rank_short_title: "PLIVE+".to_string(),
            footer_text: "prospects live".to_string(),

            headshot_url_template: HEADSHOT_URL_TEMPLATE.to_string(),
            lookup_url: LOOKUP_URL.to_string(),
            fetch_timeout_secs: FETCH_TIMEOUT_SECS,
            offline: false,
        }
    }
}

impl Settings {
    /// Create settings from CLI arguments
    pub fn from_args(args: &Args) -> Self {
        Self {
            layout: args.layout,
            offline: args.offline,
            ..Default::default()
        }
    }

    /// Settings with the given info block arrangement
    pub fn for_layout(layout: LayoutVariant) -> Self {
        Self {
            layout,
            ..Default::default()
        }
    }

    /// Headshot URL for a resolved player id
    pub fn headshot_url(&self, id: &str) -> String {
        self.headshot_url_template.replace("{id}", id)
    }

    /// Width available between the side margins
    pub fn content_width(&self) -> i32 {
        self.card_width as i32 - 2 * self.side_margin
    }

    pub fn fetch_timeout(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.fetch_timeout_secs)
    }
}
