//! Card Assembly Renderer
//!
//! Draws one player card in a fixed sequence of stages. Geometry is planned
//! once when the renderer is built; every stage always draws its containers,
//! falling back to sentinel values when the player has no data for it.

use image::RgbaImage;

use crate::config::Settings;
use crate::error::{CardError, LayoutError};
use crate::identity::IdentityResolver;
use crate::model::{AttributeSource, GradeLabel, PlayerRecord, ReferenceTables};
use crate::render::components::{
    InfoCellRenderer, PanelRow, PhotoRenderer, RankBoxRenderer, RowFonts, StatPanelRenderer,
};
use crate::render::format::{classify_grade, classify_stat, format_stat, PROJECTION_LABELS};
use crate::render::helpers::bitmaps::BitmapSource;
use crate::render::helpers::canvas::Canvas;
use crate::render::helpers::colors::Palette;
use crate::render::helpers::layout::{CardGeometry, GeometryPlanner, InfoField, RankKind};
use crate::render::helpers::text_metrics::Typeface;

/// Drawing stages, in the only order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Start,
    DrawName,
    DrawInfoGrid,
    DrawRankPanels,
    DrawLogoAndHeadshot,
    DrawProjectionsPanel,
    DrawGradesPanel,
    DrawFooterAndBrand,
    Done,
}

impl Stage {
    pub fn next(self) -> Stage {
        match self {
            Stage::Start => Stage::DrawName,
            Stage::DrawName => Stage::DrawInfoGrid,
            Stage::DrawInfoGrid => Stage::DrawRankPanels,
            Stage::DrawRankPanels => Stage::DrawLogoAndHeadshot,
            Stage::DrawLogoAndHeadshot => Stage::DrawProjectionsPanel,
            Stage::DrawProjectionsPanel => Stage::DrawGradesPanel,
            Stage::DrawGradesPanel => Stage::DrawFooterAndBrand,
            Stage::DrawFooterAndBrand => Stage::Done,
            Stage::Done => Stage::Done,
        }
    }
}

/// Typefaces used on the card
#[derive(Clone, Copy)]
pub struct CardFonts<'a> {
    /// Name, boxes and panels
    pub bold: &'a dyn Typeface,
    /// Footer text
    pub italic: &'a dyn Typeface,
}

/// Everything a render reads besides the player record
pub struct CardSources<'a> {
    pub tables: &'a ReferenceTables,
    pub resolver: &'a IdentityResolver,
    pub bitmaps: &'a dyn BitmapSource,
    pub fonts: CardFonts<'a>,
    /// Brand mark drawn beside the footer, if one was loaded
    pub brand_mark: Option<&'a RgbaImage>,
    /// Fallback for missing team/level/position
    pub attributes: Option<&'a dyn AttributeSource>,
}

/// Renders player cards with one planned geometry
pub struct CardRenderer {
    settings: Settings,
    geometry: CardGeometry,
}

impl CardRenderer {
    /// Plan the card geometry; degenerate design constants fail here
    pub fn new(settings: Settings) -> Result<Self, LayoutError> {
        let geometry = GeometryPlanner::new(&settings)
            .plan(PROJECTION_LABELS.len(), GradeLabel::ALL.len())?;
        Ok(Self { settings, geometry })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn geometry(&self) -> &CardGeometry {
        &self.geometry
    }

    /// Draw the complete card for `player`.
    ///
    /// Missing reference data and failed fetches are drawn as sentinels or
    /// placeholders; only an unusable player name is an error.
    pub fn render(
        &self,
        player: &PlayerRecord,
        sources: &CardSources<'_>,
    ) -> Result<RgbaImage, CardError> {
        let palette = Palette::from_settings(&self.settings);
        let mut canvas = Canvas::new(
            self.settings.card_width,
            self.settings.card_height,
            palette.background,
        );
        let player = self.complete_attributes(player, sources.attributes);
        let key = player.lookup_key();

        let mut stage = Stage::Start;
        while stage != Stage::Done {
            log::debug!("{}: {:?}", player.name(), stage);
            match stage {
                Stage::Start | Stage::Done => {}
                Stage::DrawName => self.draw_name(&mut canvas, &player, sources),
                Stage::DrawInfoGrid => self.draw_info_grid(&mut canvas, &player, &key, sources),
                Stage::DrawRankPanels => self.draw_rank_panels(&mut canvas, &key, sources),
                Stage::DrawLogoAndHeadshot => {
                    self.draw_logo_and_headshot(&mut canvas, &player, sources)?
                }
                Stage::DrawProjectionsPanel => {
                    self.draw_projections(&mut canvas, &player, sources)
                }
                Stage::DrawGradesPanel => self.draw_grades(&mut canvas, &key, sources),
                Stage::DrawFooterAndBrand => self.draw_footer_and_brand(&mut canvas, sources),
            }
            stage = stage.next();
        }

        Ok(canvas.into_image())
    }

    fn complete_attributes(
        &self,
        player: &PlayerRecord,
        source: Option<&dyn AttributeSource>,
    ) -> PlayerRecord {
        let Some(source) = source else {
            return player.clone();
        };
        if player.team().is_some() && player.level().is_some() && player.position().is_some() {
            return player.clone();
        }
        match source.attributes(player.name()) {
            Ok(attributes) => player.with_attributes(&attributes),
            Err(e) => {
                log::warn!("Attribute lookup failed for {}: {}", player.name(), e);
                player.clone()
            }
        }
    }

    fn draw_name(&self, canvas: &mut Canvas, player: &PlayerRecord, sources: &CardSources<'_>) {
        let palette = Palette::from_settings(&self.settings);
        canvas.draw_text_centered(
            sources.fonts.bold,
            &player.name().to_uppercase(),
            self.settings.name_font_size,
            self.geometry.name,
            palette.light_text,
        );
    }

    fn draw_info_grid(
        &self,
        canvas: &mut Canvas,
        player: &PlayerRecord,
        key: &str,
        sources: &CardSources<'_>,
    ) {
        let renderer = InfoCellRenderer::new(sources.fonts.bold, &self.settings);
        for cell in &self.geometry.info_cells {
            let value = match cell.field {
                InfoField::Position => sources
                    .tables
                    .scouting
                    .position(key)
                    .or_else(|| player.position()),
                InfoField::Level => player.level(),
                InfoField::Team => player.team(),
                InfoField::Score => player.score(),
            };
            renderer.render(canvas, cell.rect, value.unwrap_or_default());
        }
    }

    fn draw_rank_panels(&self, canvas: &mut Canvas, key: &str, sources: &CardSources<'_>) {
        let renderer = RankBoxRenderer::new(sources.fonts.bold, &self.settings);
        let ranks = &sources.tables.ranks;
        for cell in &self.geometry.rank_cells {
            let rank = match cell.kind {
                RankKind::Top100 => ranks.top100(key),
                RankKind::Internal => ranks.internal(key),
            };
            renderer.render(canvas, cell, rank);
        }
    }

    fn draw_logo_and_headshot(
        &self,
        canvas: &mut Canvas,
        player: &PlayerRecord,
        sources: &CardSources<'_>,
    ) -> Result<(), CardError> {
        let photos = PhotoRenderer::new(&self.settings);
        let team = player.team();

        // No team or no logo on file: nothing drawn
        if let Some(url) = team.and_then(|t| sources.tables.logos.url_for(t)) {
            let logo = fetch_or_warn(sources.bitmaps, url, "logo");
            photos.render_logo(canvas, self.geometry.logo, logo.as_ref());
        }

        let headshot = match sources.resolver.resolve(player.name(), team)? {
            Some(id) => {
                let url = self.settings.headshot_url(&id);
                fetch_or_warn(sources.bitmaps, &url, "headshot")
            }
            None => None,
        };
        photos.render_headshot(canvas, self.geometry.headshot, headshot.as_ref());
        Ok(())
    }

    fn draw_projections(
        &self,
        canvas: &mut Canvas,
        player: &PlayerRecord,
        sources: &CardSources<'_>,
    ) {
        let rows: Vec<PanelRow> = PROJECTION_LABELS
            .iter()
            .map(|label| {
                let raw = player.stat(label);
                PanelRow {
                    label: label.to_string(),
                    value: format_stat(label, raw),
                    heat: classify_stat(label, raw),
                }
            })
            .collect();
        let fonts = RowFonts {
            label_size: self.settings.stat_label_font_size,
            value_size: self.settings.stat_value_font_size,
        };
        StatPanelRenderer::new(sources.fonts.bold, &self.settings).render(
            canvas,
            &self.geometry.projections,
            &self.settings.projections_title,
            &rows,
            fonts,
        );
    }

    fn draw_grades(&self, canvas: &mut Canvas, key: &str, sources: &CardSources<'_>) {
        let scouting = &sources.tables.scouting;
        let rows: Vec<PanelRow> = GradeLabel::ALL
            .iter()
            .map(|label| {
                let raw = scouting.grade(key, *label);
                PanelRow {
                    label: format!("{} -", label.column().to_uppercase()),
                    value: raw.to_string(),
                    heat: classify_grade(raw),
                }
            })
            .collect();
        let fonts = RowFonts {
            label_size: self.settings.grade_label_font_size,
            value_size: self.settings.grade_value_font_size,
        };
        StatPanelRenderer::new(sources.fonts.bold, &self.settings).render(
            canvas,
            &self.geometry.grades,
            &self.settings.grades_title,
            &rows,
            fonts,
        );
    }

    fn draw_footer_and_brand(&self, canvas: &mut Canvas, sources: &CardSources<'_>) {
        let palette = Palette::from_settings(&self.settings);
        canvas.draw_text_centered(
            sources.fonts.italic,
            &self.settings.footer_text,
            self.settings.footer_font_size,
            self.geometry.footer,
            palette.light_text,
        );
        if let Some(mark) = sources.brand_mark {
            canvas.place_fit(mark, self.geometry.brand_mark);
        }
    }
}

fn fetch_or_warn(bitmaps: &dyn BitmapSource, url: &str, what: &str) -> Option<RgbaImage> {
    match bitmaps.fetch(url) {
        Ok(bitmap) => Some(bitmap),
        Err(e) => {
            log::warn!("Could not fetch {} {}: {}", what, url, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::LayoutVariant;
    use crate::error::FetchError;
    use crate::model::{IdentityCache, IdentityRegistry, TableAttributes};
    use crate::render::helpers::text_metrics::test_face::BlockFace;
    use image::Rgba;
    use std::collections::HashMap;
    use std::sync::Arc;

    /// Serves a solid bitmap for every URL, or fails every fetch
    struct StubBitmaps {
        ok: bool,
    }

    impl BitmapSource for StubBitmaps {
        fn fetch(&self, url: &str) -> Result<RgbaImage, FetchError> {
            if self.ok {
                Ok(RgbaImage::from_pixel(60, 90, Rgba([200, 180, 160, 255])))
            } else {
                Err(FetchError::Unavailable(url.to_string()))
            }
        }
    }

    fn resolver_with(name: &str, id: &str) -> IdentityResolver {
        let cache = Arc::new(IdentityCache::new());
        cache.insert(name, id);
        IdentityResolver::standard(Arc::new(IdentityRegistry::new()), cache, None)
    }

    fn sources<'a>(
        tables: &'a ReferenceTables,
        resolver: &'a IdentityResolver,
        bitmaps: &'a dyn BitmapSource,
    ) -> CardSources<'a> {
        CardSources {
            tables,
            resolver,
            bitmaps,
            fonts: CardFonts {
                bold: &BlockFace,
                italic: &BlockFace,
            },
            brand_mark: None,
            attributes: None,
        }
    }

    #[test]
    fn test_stage_order_is_linear() {
        let mut stage = Stage::Start;
        let mut seen = vec![stage];
        while stage != Stage::Done {
            stage = stage.next();
            seen.push(stage);
        }
        assert_eq!(
            seen,
            vec![
                Stage::Start,
                Stage::DrawName,
                Stage::DrawInfoGrid,
                Stage::DrawRankPanels,
                Stage::DrawLogoAndHeadshot,
                Stage::DrawProjectionsPanel,
                Stage::DrawGradesPanel,
                Stage::DrawFooterAndBrand,
                Stage::Done,
            ]
        );
        assert_eq!(Stage::Done.next(), Stage::Done);
    }

    #[test]
    fn test_unknown_player_renders_complete_card() {
        for layout in [LayoutVariant::Stacked, LayoutVariant::Grid] {
            let renderer = CardRenderer::new(Settings::for_layout(layout)).unwrap();
            let tables = ReferenceTables::default();
            let resolver = resolver_with("Someone Else", "1");
            let bitmaps = StubBitmaps { ok: false };
            let player = PlayerRecord::from_pairs([("Name", "Nobody Anywhere")]).unwrap();

            let image = renderer
                .render(&player, &sources(&tables, &resolver, &bitmaps))
                .unwrap();
            assert_eq!(image.dimensions(), (900, 920));

            // placeholder headshot drawn: gray inside the border
            let palette = Palette::default();
            let headshot = renderer.geometry().headshot;
            let center = image.get_pixel(
                ((headshot.x0 + headshot.x1) / 2) as u32,
                ((headshot.y0 + headshot.y1) / 2) as u32,
            );
            assert_eq!(*center, palette.placeholder);

            // both bottom panels present
            for panel in [&renderer.geometry().projections, &renderer.geometry().grades] {
                let corner = image.get_pixel(panel.frame.x0 as u32, panel.frame.y0 as u32);
                assert_eq!(*corner, palette.outline);
            }
        }
    }

    #[test]
    fn test_headshot_failure_only_changes_headshot_box() {
        let renderer = CardRenderer::new(Settings::default()).unwrap();
        let tables = ReferenceTables::default();
        let resolver = resolver_with("Ethan Salas", "687462");
        let player =
            PlayerRecord::from_pairs([("Name", "Ethan Salas"), ("HR", "12")]).unwrap();

        let ok = StubBitmaps { ok: true };
        let failing = StubBitmaps { ok: false };
        let with_photo = renderer.render(&player, &sources(&tables, &resolver, &ok)).unwrap();
        let without = renderer
            .render(&player, &sources(&tables, &resolver, &failing))
            .unwrap();

        let headshot = renderer.geometry().headshot;
        let mut differs_inside = false;
        for (x, y, pixel) in with_photo.enumerate_pixels() {
            let other = without.get_pixel(x, y);
            if headshot.contains(x as i32, y as i32) {
                differs_inside |= pixel != other;
            } else {
                assert_eq!(pixel, other, "pixel ({}, {}) changed", x, y);
            }
        }
        assert!(differs_inside);
    }

    #[test]
    fn test_attributes_fill_missing_level() {
        let renderer = CardRenderer::new(Settings::default()).unwrap();
        let tables = ReferenceTables::default();
        let resolver = resolver_with("x y", "1");
        let bitmaps = StubBitmaps { ok: false };
        let player = PlayerRecord::from_pairs([("Name", "Ethan Salas")]).unwrap();

        let mut attributes = TableAttributes::new();
        attributes.insert("Ethan Salas", "Level", "AA");
        let plain = renderer
            .render(&player, &sources(&tables, &resolver, &bitmaps))
            .unwrap();
        let mut with_source = sources(&tables, &resolver, &bitmaps);
        with_source.attributes = Some(&attributes);
        let filled = renderer.render(&player, &with_source).unwrap();

        let level = renderer
            .geometry()
            .info_cell(InfoField::Level)
            .unwrap();
        let differs = |a: &RgbaImage, b: &RgbaImage| {
            (level.x0..level.x1).any(|x| {
                (level.y0..level.y1).any(|y| a.get_pixel(x as u32, y as u32) != b.get_pixel(x as u32, y as u32))
            })
        };
        assert!(differs(&plain, &filled));
    }

    #[test]
    fn test_brand_mark_drawn_when_present() {
        let renderer = CardRenderer::new(Settings::default()).unwrap();
        let tables = ReferenceTables::default();
        let resolver = resolver_with("x y", "1");
        let bitmaps = StubBitmaps { ok: false };
        let player = PlayerRecord::new(HashMap::from([(
            "Name".to_string(),
            "Ethan Salas".to_string(),
        )]))
        .unwrap();
        let mark = RgbaImage::from_pixel(92, 92, Rgba([1, 2, 3, 255]));

        let mut with_mark = sources(&tables, &resolver, &bitmaps);
        with_mark.brand_mark = Some(&mark);
        let image = renderer.render(&player, &with_mark).unwrap();
        let rect = renderer.geometry().brand_mark;
        assert_eq!(
            *image.get_pixel(rect.x0 as u32 + 46, rect.y0 as u32 + 46),
            Rgba([1, 2, 3, 255])
        );
    }
}
