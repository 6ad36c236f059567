//! Card renderers - one driver shared by every --layout option

pub mod card;

pub use card::{CardFonts, CardRenderer, CardSources, Stage};
