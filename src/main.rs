use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::sync::Arc;

use prospect_card::cli::{select_player, Args, Selection};
use prospect_card::config::Settings;
use prospect_card::identity::{IdentityResolver, PlayerLookup, StatsApiLookup};
use prospect_card::loader;
use prospect_card::model::{AttributeSource, RankTables, ReferenceTables};
use prospect_card::render::{
    BitmapSource, CardFonts, CardRenderer, CardSources, FontFace, HttpBitmapSource,
    OfflineBitmapSource,
};
use prospect_card::encode_png;

/// Number of roster names shown by --list
const LIST_LIMIT: usize = 20;

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(match args.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            _ => log::LevelFilter::Debug,
        })
        .init();

    // Read the roster
    let roster = loader::load_roster(&args.roster)
        .with_context(|| format!("Failed to read roster: {}", args.roster.display()))?;

    if args.list {
        println!("First {} players:", LIST_LIMIT.min(roster.len()));
        for (i, player) in roster.players.iter().take(LIST_LIMIT).enumerate() {
            println!("{}. {}", i + 1, player.name());
        }
        println!("...({} total)", roster.len());
        return Ok(());
    }

    let selector = args
        .player
        .as_deref()
        .context("A --player selector is required")?;
    let player = match select_player(&roster.players, selector) {
        Selection::Found(player) => player,
        Selection::Ambiguous(names) => {
            anyhow::bail!(
                "\"{}\" matches several players: {}",
                selector,
                names.join(", ")
            )
        }
        Selection::NotFound => anyhow::bail!("No player matches \"{}\"", selector),
    };
    log::info!("Selected {}", player.name());

    // Reference tables
    let top100 = loader::load_top100(&args.top100)
        .with_context(|| format!("Failed to read top 100 list: {}", args.top100.display()))?;
    let scouting = loader::load_scouting(&args.scouting)
        .with_context(|| format!("Failed to read scouting list: {}", args.scouting.display()))?;
    let logos = loader::load_logos(&args.logos)
        .with_context(|| format!("Failed to read logo list: {}", args.logos.display()))?;
    let tables = ReferenceTables {
        ranks: RankTables::new(top100, roster.internal_ranks()),
        scouting,
        logos,
    };
    let attributes = args
        .attributes
        .as_deref()
        .map(|path| {
            loader::load_attributes(path)
                .with_context(|| format!("Failed to read attributes: {}", path.display()))
        })
        .transpose()?;

    // Identity sources
    let settings = Settings::from_args(&args);
    let registry = loader::load_registry(&args.registry).with_context(|| {
        format!("Failed to read registry directory: {}", args.registry.display())
    })?;
    let cache = loader::load_id_cache(&args.id_cache)
        .with_context(|| format!("Failed to read identity cache: {}", args.id_cache.display()))?;
    let cache = Arc::new(cache);
    let remote: Option<Box<dyn PlayerLookup>> = if settings.offline {
        None
    } else {
        let lookup = StatsApiLookup::new(&settings.lookup_url, settings.fetch_timeout())
            .with_context(|| "Failed to build lookup client")?;
        Some(Box::new(lookup))
    };
    let resolver = IdentityResolver::standard(Arc::new(registry), Arc::clone(&cache), remote);

    let bitmaps: Box<dyn BitmapSource> = if settings.offline {
        Box::new(OfflineBitmapSource)
    } else {
        Box::new(
            HttpBitmapSource::new(settings.fetch_timeout())
                .with_context(|| "Failed to build image client")?,
        )
    };

    // Fonts and brand mark
    let bold = FontFace::from_file(&args.font_bold)
        .with_context(|| format!("Failed to load font: {}", args.font_bold.display()))?;
    let italic = FontFace::from_file(&args.font_italic)
        .with_context(|| format!("Failed to load font: {}", args.font_italic.display()))?;
    let brand_mark = loader::load_brand_mark(&args.brand_mark);

    // Render
    let renderer = CardRenderer::new(settings).with_context(|| "Invalid card layout")?;
    let sources = CardSources {
        tables: &tables,
        resolver: &resolver,
        bitmaps: bitmaps.as_ref(),
        fonts: CardFonts {
            bold: &bold,
            italic: &italic,
        },
        brand_mark: brand_mark.as_ref(),
        attributes: attributes.as_ref().map(|a| a as &dyn AttributeSource),
    };
    let card = renderer
        .render(player, &sources)
        .with_context(|| format!("Failed to render card for {}", player.name()))?;
    let png = encode_png(&card).with_context(|| "Failed to encode PNG")?;

    // Write output
    let output_path = args.output_path(player.name());
    fs::write(&output_path, png)
        .with_context(|| format!("Failed to write output file: {}", output_path.display()))?;

    loader::save_id_cache(&cache, &args.id_cache)
        .with_context(|| format!("Failed to save identity cache: {}", args.id_cache.display()))?;

    println!("Saved card for {} as {}", player.name(), output_path.display());

    Ok(())
}
