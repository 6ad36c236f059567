pub mod cli;
pub mod config;
pub mod error;
pub mod identity;
pub mod loader;
pub mod model;
pub mod render;

pub use cli::LayoutVariant;
pub use config::Settings;
pub use error::{CardError, FetchError, IdentityError, LayoutError, LoadError, LookupError};
pub use identity::{IdentityResolver, PlayerLookup, StatsApiLookup};
pub use model::{
    AttributeSource, IdentityCache, IdentityRegistry, PlayerRecord, ReferenceTables,
};
pub use render::{
    BitmapSource, CardFonts, CardRenderer, CardSources, FontFace, HttpBitmapSource,
    OfflineBitmapSource, Typeface,
};

use std::io::Cursor;

use image::{ImageFormat, RgbaImage};

/// High-level API for rendering one player card.
///
/// This is the recommended entry point for library consumers. It plans the
/// geometry for `layout`, then draws the card with the given reference data
/// and collaborators. Missing data and failed fetches are drawn as
/// placeholders; the returned image is always complete.
///
/// # Arguments
///
/// * `player` - The roster row to draw
/// * `sources` - Reference tables, identity resolver, bitmap source and fonts
/// * `layout` - The info block arrangement
///
/// # Returns
///
/// The card as an RGBA image, or a CardError if the layout constants are
/// unusable or the player name is empty.
///
/// # Example
///
/// ```no_run
/// use std::path::Path;
/// use std::sync::Arc;
/// use prospect_card::{
///     encode_png, render_card, CardFonts, CardSources, FontFace, HttpBitmapSource,
///     IdentityCache, IdentityRegistry, IdentityResolver, LayoutVariant, PlayerRecord,
///     ReferenceTables,
/// };
///
/// let bold = FontFace::from_file(Path::new("fonts/Bold.otf")).unwrap();
/// let italic = FontFace::from_file(Path::new("fonts/BoldItalic.otf")).unwrap();
/// let tables = ReferenceTables::default();
/// let resolver = IdentityResolver::standard(
///     Arc::new(IdentityRegistry::new()),
///     Arc::new(IdentityCache::new()),
///     None,
/// );
/// let bitmaps = HttpBitmapSource::new(std::time::Duration::from_secs(8)).unwrap();
/// let sources = CardSources {
///     tables: &tables,
///     resolver: &resolver,
///     bitmaps: &bitmaps,
///     fonts: CardFonts { bold: &bold, italic: &italic },
///     brand_mark: None,
///     attributes: None,
/// };
///
/// let player = PlayerRecord::from_pairs([("Name", "Jackson Holliday"), ("HR", "18")]).unwrap();
/// let card = render_card(&player, &sources, LayoutVariant::Stacked).unwrap();
/// std::fs::write("card.png", encode_png(&card).unwrap()).unwrap();
/// ```
pub fn render_card(
    player: &PlayerRecord,
    sources: &CardSources<'_>,
    layout: LayoutVariant,
) -> Result<RgbaImage, CardError> {
    let renderer = CardRenderer::new(Settings::for_layout(layout))?;
    renderer.render(player, sources)
}

/// Encode a rendered card as PNG bytes
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, CardError> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
