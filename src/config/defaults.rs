/// Card canvas width in pixels
pub const CARD_WIDTH: u32 = 900;

/// Card canvas height in pixels
pub const CARD_HEIGHT: u32 = 920;

/// Left/right margin shared by every left-aligned block
pub const SIDE_MARGIN: i32 = 56;

/// Distance from the top edge to the player name
pub const TOP_MARGIN: i32 = 32;

/// Gap below the name row
pub const ROW_GAP: i32 = 12;

/// Gap between major blocks (info block, photo block, bottom panels)
pub const BOX_GAP: i32 = 32;

/// Height of one info/rank cell
pub const INFO_BOX_HEIGHT: i32 = 56;

/// Horizontal gap between the two cells of an info row
pub const INFO_BOX_GAP: i32 = 16;

/// Vertical gap between info rows
pub const GRID_ROW_GAP: i32 = 10;

/// Extra breathing room between the name and the info block
pub const NAME_PADDING: i32 = 6;

/// Width of each bottom panel (projections, grades)
pub const BOTTOM_BOX_WIDTH: i32 = 392;

/// Height of each bottom panel
pub const BOTTOM_BOX_HEIGHT: i32 = 490;

/// Padding between a panel's top border and its first title line
pub const PANEL_TITLE_PAD: i32 = 18;

/// Height of one panel title line
pub const PANEL_TITLE_HEIGHT: i32 = 36;

/// The second title line is pulled up by this much
pub const PANEL_TITLE_OVERLAP: i32 = 6;

/// Inset of row labels from the panel's left edge
pub const PANEL_LABEL_INSET: i32 = 36;

/// Distance of the value column from the panel's right edge
pub const PANEL_VALUE_OFFSET: i32 = 172;

/// Border widths in pixels
pub const PANEL_BORDER: u32 = 7;
pub const INFO_BORDER: u32 = 4;
pub const PHOTO_BORDER: u32 = 3;

/// Fraction of the logo box's smaller side used for the team logo square
pub const LOGO_FILL_RATIO: f32 = 0.82;

/// Side of the brand mark square
pub const BRAND_MARK_SIZE: i32 = 92;

/// Brand mark nudges toward the right edge / bottom edge
pub const BRAND_MARK_RIGHT_NUDGE: i32 = 4;
pub const BRAND_MARK_BOTTOM_INSET: i32 = 8;

/// Distance between the footer text and the bottom edge
pub const FOOTER_BOTTOM_INSET: i32 = 16;

/// Padding between a rank box's top border and its title
pub const RANK_TITLE_PAD: i32 = 10;

// Font sizes in pixels

pub const NAME_FONT_SIZE: f32 = 56.0;
pub const INFO_FONT_SIZE: f32 = 36.0;
pub const RANK_LABEL_FONT_SIZE: f32 = 28.0;
pub const RANK_NUMBER_FONT_SIZE: f32 = 54.0;
pub const PANEL_TITLE_FONT_SIZE: f32 = 32.0;
pub const STAT_LABEL_FONT_SIZE: f32 = 28.0;
pub const STAT_VALUE_FONT_SIZE: f32 = 50.0;
pub const GRADE_LABEL_FONT_SIZE: f32 = 29.0;
pub const GRADE_VALUE_FONT_SIZE: f32 = 48.0;
pub const FOOTER_FONT_SIZE: f32 = 48.0;

// Colors (RGB 0-255)

pub const BG_COLOR: (u8, u8, u8) = (11, 27, 45);
pub const GRAY: (u8, u8, u8) = (80, 80, 80);
pub const BLUE: (u8, u8, u8) = (70, 160, 245);
pub const RED: (u8, u8, u8) = (228, 55, 50);
pub const WHITE: (u8, u8, u8) = (255, 255, 255);
pub const BLACK: (u8, u8, u8) = (0, 0, 0);

/// Timeout for every network request (bitmaps and identity lookups)
pub const FETCH_TIMEOUT_SECS: u64 = 8;

/// Headshot URL; `{id}` is replaced with the resolved player id
pub const HEADSHOT_URL_TEMPLATE: &str =
    "https://img.mlbstatic.com/mlb-photos/image/upload/v1/people/{id}/headshot/67/current.png";

/// Player search endpoint of the remote lookup service
pub const LOOKUP_URL: &str = "https://statsapi.mlb.com/api/v1/people/search";

/// Display value for an absent rank
pub const RANK_SENTINEL: &str = "NR";
