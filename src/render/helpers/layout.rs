//! Card geometry
//!
//! Every rectangle on the card is derived here from the design constants in
//! [`Settings`]. Rectangles are half-open pixel ranges: `x0..x1`, `y0..y1`.
//! Planning is pure integer arithmetic, so the same settings always produce
//! the same rectangles.

use crate::cli::LayoutVariant;
use crate::config::Settings;
use crate::error::LayoutError;

/// Axis-aligned pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub const fn new(x0: i32, y0: i32, x1: i32, y1: i32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> i32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> i32 {
        self.y1 - self.y0
    }

    pub fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// True when the two rectangles share at least one pixel
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x0 < other.x1 && other.x0 < self.x1 && self.y0 < other.y1 && other.y0 < self.y1
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.x0 && x < self.x1 && y >= self.y0 && y < self.y1
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &Rect) -> Rect {
        Rect::new(
            self.x0.min(other.x0),
            self.y0.min(other.y0),
            self.x1.max(other.x1),
            self.y1.max(other.y1),
        )
    }

    pub fn translate(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x0 + dx, self.y0 + dy, self.x1 + dx, self.y1 + dy)
    }

    /// Split into `rows` stacked rectangles of equal (floored) height.
    /// The last row absorbs the remainder so heights sum to `self.height()`.
    pub fn split_rows(&self, rows: usize) -> Vec<Rect> {
        if rows == 0 {
            return Vec::new();
        }
        let n = rows as i32;
        let row_h = self.height() / n;
        (0..n)
            .map(|i| {
                let y0 = self.y0 + i * row_h;
                let y1 = if i == n - 1 { self.y1 } else { y0 + row_h };
                Rect::new(self.x0, y0, self.x1, y1)
            })
            .collect()
    }

    /// Split into two cells of equal width separated by `gap`
    pub fn split_pair(&self, gap: i32) -> [Rect; 2] {
        let cell_w = (self.width() - gap) / 2;
        [
            Rect::new(self.x0, self.y0, self.x0 + cell_w, self.y1),
            Rect::new(self.x0 + cell_w + gap, self.y0, self.x0 + 2 * cell_w + gap, self.y1),
        ]
    }
}

/// Content of an ordinary info cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoField {
    Position,
    Level,
    Team,
    Score,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankKind {
    Top100,
    Internal,
}

/// How a rank box lays out its title and number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankStyle {
    /// Double-height box: title on top, large number below
    Tall,
    /// Single-height cell: short title and number on one line
    Compact,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InfoCell {
    pub field: InfoField,
    pub rect: Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RankCell {
    pub kind: RankKind,
    pub style: RankStyle,
    pub rect: Rect,
}

/// Frame, title lines and row rectangles of one bottom panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelGeometry {
    pub frame: Rect,
    /// The two stacked title lines; the second overlaps the first slightly
    pub titles: [Rect; 2],
    /// Area below the titles that the rows subdivide
    pub interior: Rect,
    pub rows: Vec<Rect>,
}

/// Every rectangle on one card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardGeometry {
    pub width: u32,
    pub height: u32,
    pub name: Rect,
    pub info_cells: Vec<InfoCell>,
    pub rank_cells: Vec<RankCell>,
    /// Bounds of the info and rank cells together
    pub info_block: Rect,
    pub logo: Rect,
    pub headshot: Rect,
    pub projections: PanelGeometry,
    pub grades: PanelGeometry,
    pub footer: Rect,
    pub brand_mark: Rect,
}

impl CardGeometry {
    /// Top-level sibling elements with a label, in drawing order
    pub fn elements(&self) -> Vec<(&'static str, Rect)> {
        let mut out = vec![("name", self.name)];
        out.extend(self.info_cells.iter().map(|c| ("info cell", c.rect)));
        out.extend(self.rank_cells.iter().map(|c| ("rank cell", c.rect)));
        out.push(("logo", self.logo));
        out.push(("headshot", self.headshot));
        out.push(("projections panel", self.projections.frame));
        out.push(("grades panel", self.grades.frame));
        out.push(("footer", self.footer));
        out.push(("brand mark", self.brand_mark));
        out
    }

    pub fn info_cell(&self, field: InfoField) -> Option<Rect> {
        self.info_cells
            .iter()
            .find(|c| c.field == field)
            .map(|c| c.rect)
    }
}

/// Derives [`CardGeometry`] from the design constants
#[derive(Debug, Clone)]
pub struct GeometryPlanner<'a> {
    settings: &'a Settings,
}

impl<'a> GeometryPlanner<'a> {
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Plan the whole card with `projection_rows` stat rows and `grade_rows`
    /// grade rows in the bottom panels.
    pub fn plan(
        &self,
        projection_rows: usize,
        grade_rows: usize,
    ) -> Result<CardGeometry, LayoutError> {
        let s = self.settings;
        let width = s.card_width as i32;
        let height = s.card_height as i32;

        let name = Rect::new(
            s.side_margin,
            s.top_margin,
            s.side_margin + s.content_width(),
            s.top_margin + s.name_font_size as i32,
        );

        // Info block: two columns of cells, as wide as one bottom panel
        let block_top = name.y1 + s.row_gap + s.name_padding;
        let row_h = s.info_box_height;
        let row_step = row_h + s.grid_row_gap;
        let column_span = Rect::new(
            s.side_margin,
            0,
            s.side_margin + s.bottom_box_width,
            0,
        );
        let row = |index: i32, rows_tall: i32| -> [Rect; 2] {
            let y0 = block_top + index * row_step;
            let y1 = y0 + rows_tall * row_h + (rows_tall - 1) * s.grid_row_gap;
            Rect::new(column_span.x0, y0, column_span.x1, y1).split_pair(s.info_box_gap)
        };

        let (info_cells, rank_cells) = match s.layout {
            LayoutVariant::Stacked => {
                let [pos, level] = row(0, 1);
                // Double height: two rows plus the gap between them
                let [top100, internal] = row(1, 2);
                (
                    vec![
                        InfoCell { field: InfoField::Position, rect: pos },
                        InfoCell { field: InfoField::Level, rect: level },
                    ],
                    vec![
                        RankCell { kind: RankKind::Top100, style: RankStyle::Tall, rect: top100 },
                        RankCell { kind: RankKind::Internal, style: RankStyle::Tall, rect: internal },
                    ],
                )
            }
            LayoutVariant::Grid => {
                let [pos, level] = row(0, 1);
                let [team, score] = row(1, 1);
                let [top100, internal] = row(2, 1);
                (
                    vec![
                        InfoCell { field: InfoField::Position, rect: pos },
                        InfoCell { field: InfoField::Level, rect: level },
                        InfoCell { field: InfoField::Team, rect: team },
                        InfoCell { field: InfoField::Score, rect: score },
                    ],
                    vec![
                        RankCell { kind: RankKind::Top100, style: RankStyle::Compact, rect: top100 },
                        RankCell { kind: RankKind::Internal, style: RankStyle::Compact, rect: internal },
                    ],
                )
            }
        };

        let info_block = info_cells
            .iter()
            .map(|c| c.rect)
            .chain(rank_cells.iter().map(|c| c.rect))
            .reduce(|a, b| a.union(&b))
            .unwrap_or(Rect::new(s.side_margin, block_top, s.side_margin, block_top));

        // Logo and headshot share the block to the right, bottom-aligned with it
        let photo_left = info_block.x1 + s.info_box_gap + s.box_gap;
        let photo_block = Rect::new(photo_left, info_block.y0, width - s.side_margin, info_block.y1);
        let logo_w = photo_block.width() / 2;
        let logo = Rect::new(photo_block.x0, photo_block.y0, photo_block.x0 + logo_w, photo_block.y1);
        let headshot = Rect::new(logo.x1, photo_block.y0, photo_block.x1, photo_block.y1);

        // Bottom panels start one box gap below the photo block
        let panel_top = photo_block.y1 + s.box_gap;
        let projections = self.panel(
            Rect::new(
                s.side_margin,
                panel_top,
                s.side_margin + s.bottom_box_width,
                panel_top + s.bottom_box_height,
            ),
            projection_rows,
            "projections panel",
        )?;
        let grades_left = projections.frame.x1 + s.box_gap;
        let grades = self.panel(
            Rect::new(
                grades_left,
                panel_top,
                grades_left + s.bottom_box_width,
                panel_top + s.bottom_box_height,
            ),
            grade_rows,
            "grades panel",
        )?;

        let brand_x = width - s.side_margin - s.brand_mark_size + BRAND_MARK_NUDGE;
        let brand_y = height - s.brand_mark_size - BRAND_MARK_INSET;
        let brand_mark = Rect::new(
            brand_x,
            brand_y,
            brand_x + s.brand_mark_size,
            brand_y + s.brand_mark_size,
        );

        // Footer text is centered on the card, clear of the brand mark
        let footer_y = height - s.footer_font_size as i32 - s.footer_bottom_inset;
        let footer = Rect::new(
            width - brand_mark.x0,
            footer_y,
            brand_mark.x0,
            footer_y + s.footer_font_size as i32,
        );

        let geometry = CardGeometry {
            width: s.card_width,
            height: s.card_height,
            name,
            info_cells,
            rank_cells,
            info_block,
            logo,
            headshot,
            projections,
            grades,
            footer,
            brand_mark,
        };
        self.validate(&geometry)?;
        Ok(geometry)
    }

    fn panel(
        &self,
        frame: Rect,
        rows: usize,
        element: &'static str,
    ) -> Result<PanelGeometry, LayoutError> {
        let s = self.settings;
        if rows == 0 {
            return Err(LayoutError::NoRows { element });
        }

        let first_y = frame.y0 + s.panel_title_pad;
        let first = Rect::new(frame.x0, first_y, frame.x1, first_y + s.panel_title_height);
        let second = first.translate(0, s.panel_title_height - s.panel_title_overlap);

        let header = s.panel_title_pad + 2 * s.panel_title_height;
        let interior = Rect::new(frame.x0, frame.y0 + header, frame.x1, frame.y1);
        check(element, &interior)?;

        let row_rects = interior.split_rows(rows);
        for rect in &row_rects {
            check(element, rect)?;
        }

        Ok(PanelGeometry {
            frame,
            titles: [first, second],
            interior,
            rows: row_rects,
        })
    }

    fn validate(&self, geometry: &CardGeometry) -> Result<(), LayoutError> {
        let canvas = Rect::new(0, 0, geometry.width as i32, geometry.height as i32);
        for (element, rect) in geometry.elements() {
            check(element, &rect)?;
            let inside = rect.x0 >= canvas.x0
                && rect.y0 >= canvas.y0
                && rect.x1 <= canvas.x1
                && rect.y1 <= canvas.y1;
            if !inside {
                return Err(LayoutError::OutOfBounds {
                    element,
                    canvas_width: geometry.width,
                    canvas_height: geometry.height,
                });
            }
        }
        Ok(())
    }
}

/// The brand mark sits slightly outside the right margin and above the bottom edge
const BRAND_MARK_NUDGE: i32 = crate::config::defaults::BRAND_MARK_RIGHT_NUDGE;
const BRAND_MARK_INSET: i32 = crate::config::defaults::BRAND_MARK_BOTTOM_INSET;

fn check(element: &'static str, rect: &Rect) -> Result<(), LayoutError> {
    if rect.is_empty() {
        return Err(LayoutError::Degenerate {
            element,
            width: rect.width(),
            height: rect.height(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAT_ROWS: usize = 8;
    const GRADE_ROWS: usize = 6;

    fn plan(layout: LayoutVariant) -> CardGeometry {
        let settings = Settings::for_layout(layout);
        GeometryPlanner::new(&settings)
            .plan(STAT_ROWS, GRADE_ROWS)
            .unwrap()
    }

    #[test]
    fn test_stacked_reference_positions() {
        let g = plan(LayoutVariant::Stacked);
        assert_eq!(g.info_cells[0].rect, Rect::new(56, 106, 244, 162));
        assert_eq!(g.info_cells[1].rect, Rect::new(260, 106, 448, 162));
        assert_eq!(g.rank_cells[0].rect, Rect::new(56, 172, 244, 294));
        assert_eq!(g.rank_cells[1].rect, Rect::new(260, 172, 448, 294));
        assert_eq!(g.logo, Rect::new(496, 106, 670, 294));
        assert_eq!(g.headshot, Rect::new(670, 106, 844, 294));
        assert_eq!(g.projections.frame, Rect::new(56, 326, 448, 816));
        assert_eq!(g.grades.frame, Rect::new(480, 326, 872, 816));
        assert_eq!(g.brand_mark, Rect::new(756, 820, 848, 912));
    }

    #[test]
    fn test_double_height_spans_two_rows_and_gap() {
        let settings = Settings::default();
        let g = plan(LayoutVariant::Stacked);
        let tall = g.rank_cells[0].rect;
        assert_eq!(
            tall.height(),
            2 * settings.info_box_height + settings.grid_row_gap
        );
        // bottom-aligned with the photo block beside it
        assert_eq!(tall.y1, g.headshot.y1);
        assert_eq!(tall.y1, g.logo.y1);
    }

    #[test]
    fn test_variants_share_block_bottom() {
        let stacked = plan(LayoutVariant::Stacked);
        let grid = plan(LayoutVariant::Grid);
        assert_eq!(stacked.info_block.y1, grid.info_block.y1);
        assert_eq!(stacked.projections, grid.projections);
        assert_eq!(stacked.grades, grid.grades);
        assert_eq!(grid.info_cells.len(), 4);
        assert!(grid
            .rank_cells
            .iter()
            .all(|c| c.style == RankStyle::Compact));
    }

    #[test]
    fn test_siblings_never_overlap() {
        for layout in [LayoutVariant::Stacked, LayoutVariant::Grid] {
            let g = plan(layout);
            let elements = g.elements();
            for (i, (name_a, a)) in elements.iter().enumerate() {
                for (name_b, b) in &elements[i + 1..] {
                    assert!(
                        !a.overlaps(b),
                        "{:?}: {} {:?} overlaps {} {:?}",
                        layout,
                        name_a,
                        a,
                        name_b,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_panels_share_left_margin() {
        let settings = Settings::default();
        let g = plan(LayoutVariant::Stacked);
        assert_eq!(g.name.x0, settings.side_margin);
        assert_eq!(g.info_block.x0, settings.side_margin);
        assert_eq!(g.projections.frame.x0, settings.side_margin);
    }

    #[test]
    fn test_rows_fill_interior_exactly() {
        let g = plan(LayoutVariant::Stacked);
        for panel in [&g.projections, &g.grades] {
            let total: i32 = panel.rows.iter().map(Rect::height).sum();
            assert_eq!(total, panel.interior.height());
            assert_eq!(panel.rows.first().map(|r| r.y0), Some(panel.interior.y0));
            assert_eq!(panel.rows.last().map(|r| r.y1), Some(panel.interior.y1));
            for pair in panel.rows.windows(2) {
                assert_eq!(pair[0].y1, pair[1].y0);
            }
        }
        // 400px over 6 grade rows: 66 each, remainder in the last row
        let heights: Vec<i32> = g.grades.rows.iter().map(Rect::height).collect();
        assert_eq!(heights, vec![66, 66, 66, 66, 66, 70]);
    }

    #[test]
    fn test_split_rows_remainder_goes_last() {
        let rows = Rect::new(0, 0, 10, 11).split_rows(3);
        let heights: Vec<i32> = rows.iter().map(Rect::height).collect();
        assert_eq!(heights, vec![3, 3, 5]);
        assert!(Rect::new(0, 0, 10, 10).split_rows(0).is_empty());
    }

    #[test]
    fn test_planning_is_deterministic() {
        assert_eq!(plan(LayoutVariant::Grid), plan(LayoutVariant::Grid));
    }

    #[test]
    fn test_degenerate_constants_fail_fast() {
        let settings = Settings {
            bottom_box_width: 10,
            ..Settings::default()
        };
        let err = GeometryPlanner::new(&settings).plan(STAT_ROWS, GRADE_ROWS);
        assert!(matches!(err, Err(LayoutError::Degenerate { .. })));

        let settings = Settings {
            bottom_box_height: 60,
            ..Settings::default()
        };
        let err = GeometryPlanner::new(&settings).plan(STAT_ROWS, GRADE_ROWS);
        assert!(matches!(
            err,
            Err(LayoutError::Degenerate {
                element: "projections panel",
                ..
            })
        ));
    }

    #[test]
    fn test_zero_rows_rejected() {
        let settings = Settings::default();
        let err = GeometryPlanner::new(&settings).plan(0, GRADE_ROWS);
        assert_eq!(
            err,
            Err(LayoutError::NoRows {
                element: "projections panel"
            })
        );
    }

    #[test]
    fn test_oversized_card_content_is_out_of_bounds() {
        let settings = Settings {
            card_height: 700,
            ..Settings::default()
        };
        let err = GeometryPlanner::new(&settings).plan(STAT_ROWS, GRADE_ROWS);
        assert!(matches!(err, Err(LayoutError::OutOfBounds { .. })));
    }
}
