//! Color palette for card rendering

use image::Rgba;

use crate::config::Settings;
use crate::render::format::Heat;

/// Opaque RGBA from an RGB triple
pub fn rgba((r, g, b): (u8, u8, u8)) -> Rgba<u8> {
    Rgba([r, g, b, 255])
}

/// Resolved colors used while drawing one card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: Rgba<u8>,
    pub light_text: Rgba<u8>,
    pub dark_text: Rgba<u8>,
    pub box_fill: Rgba<u8>,
    pub outline: Rgba<u8>,
    pub placeholder: Rgba<u8>,
    pub cold: Rgba<u8>,
    pub neutral: Rgba<u8>,
    pub hot: Rgba<u8>,
}

impl Palette {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            background: rgba(settings.background),
            light_text: rgba(settings.light_text),
            dark_text: rgba(settings.dark_text),
            box_fill: rgba(settings.box_fill),
            outline: rgba(settings.outline),
            placeholder: rgba(settings.placeholder),
            cold: rgba(settings.cold),
            neutral: rgba(settings.neutral),
            hot: rgba(settings.hot),
        }
    }

    /// Text color for a classified value
    pub fn heat(&self, heat: Heat) -> Rgba<u8> {
        match heat {
            Heat::Cold => self.cold,
            Heat::Neutral => self.neutral,
            Heat::Hot => self.hot,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::from_settings(&Settings::default())
    }
}
