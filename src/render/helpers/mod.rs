//! Helper utilities for card rendering

pub mod bitmaps;
pub mod canvas;
pub mod colors;
pub mod layout;
pub mod text_metrics;

pub use bitmaps::{decode_bitmap, BitmapSource, HttpBitmapSource, OfflineBitmapSource};
pub use canvas::{fit_within, square_within, Canvas};
pub use colors::Palette;
pub use layout::{
    CardGeometry, GeometryPlanner, InfoCell, InfoField, PanelGeometry, RankCell, RankKind,
    RankStyle, Rect,
};
pub use text_metrics::{FontFace, Typeface};
