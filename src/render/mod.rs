//! Card rendering modules

pub mod components;
pub mod format;
pub mod helpers;
pub mod layouts;

// Re-export commonly used items for convenience
pub use format::{classify_grade, classify_stat, format_stat, ColorRule, Heat};
pub use helpers::{BitmapSource, FontFace, HttpBitmapSource, OfflineBitmapSource, Rect, Typeface};
pub use layouts::{CardFonts, CardRenderer, CardSources};
