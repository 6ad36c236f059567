//! Drawing components for the card sections

pub mod info_cell;
pub mod photo;
pub mod rank_box;
pub mod stat_panel;

pub use info_cell::InfoCellRenderer;
pub use photo::PhotoRenderer;
pub use rank_box::RankBoxRenderer;
pub use stat_panel::{PanelRow, RowFonts, StatPanelRenderer};
