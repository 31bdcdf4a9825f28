//! Grid item placement algorithm.
//!
//! Spec: §8 Placing Grid Items
//! <https://www.w3.org/TR/css-grid-2/#placement>
//!
//! Lines are handled in "origin-zero" coordinates: line 0 is the start edge of the explicit grid
//! and implicit tracks created before it get negative lines. CSS line numbers (1-based, negative
//! from the end) are converted once, when a placement is resolved.

use core::ops::Range;

use css_box::{AbstractAxis, Line};
use css_orchestrator::{GridAutoFlow, GridPlacement};
use tracing::{debug, trace};

/// Line index with the start of the explicit grid at 0.
pub type OriginZeroLine = i16;

/// Largest span an item may take. Leaves headroom for line arithmetic in `i16`.
pub const MAX_SPAN: u16 = (i16::MAX / 4) as u16;

/// Convert a CSS line number into origin-zero coordinates.
///
/// `explicit_count` is the number of explicit tracks, so the explicit grid has lines
/// `1..=explicit_count + 1`, and `-1` names the last of them.
#[inline]
pub fn line_to_origin_zero(line: i16, explicit_count: u16) -> OriginZeroLine {
    if line > 0 {
        line - 1
    } else {
        explicit_count as i16 + 1 + line
    }
}

/// A placement resolved as far as the style allows.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResolvedPlacement {
    /// Both lines are known.
    Definite(Line<OriginZeroLine>),
    /// Only the number of tracks spanned is known.
    Auto(u16),
}

impl ResolvedPlacement {
    #[inline]
    pub const fn is_definite(self) -> bool {
        matches!(self, Self::Definite(_))
    }

    #[inline]
    pub fn span(self) -> u16 {
        match self {
            Self::Definite(line) => (line.end - line.start).unsigned_abs(),
            Self::Auto(span) => span,
        }
    }
}

/// Resolve a `grid-row` / `grid-column` pair.
///
/// Spec: §8.3 Line-based Placement, §8.3.1 Grid Placement Conflict Handling
pub fn resolve_placement(placement: Line<GridPlacement>, explicit_count: u16) -> ResolvedPlacement {
    let to_line = |line: i16| line_to_origin_zero(line, explicit_count);
    match (placement.start.normalized(), placement.end.normalized()) {
        (GridPlacement::Line(start), GridPlacement::Line(end)) => {
            let (start, end) = (to_line(start), to_line(end));
            if start == end {
                ResolvedPlacement::Definite(Line {
                    start,
                    end: start + 1,
                })
            } else {
                ResolvedPlacement::Definite(Line {
                    start: start.min(end),
                    end: start.max(end),
                })
            }
        }
        (GridPlacement::Line(start), GridPlacement::Span(span)) => {
            let start = to_line(start);
            ResolvedPlacement::Definite(Line {
                start,
                end: start.saturating_add(span.min(MAX_SPAN) as i16),
            })
        }
        (GridPlacement::Line(start), GridPlacement::Auto) => {
            let start = to_line(start);
            ResolvedPlacement::Definite(Line {
                start,
                end: start + 1,
            })
        }
        (GridPlacement::Span(span), GridPlacement::Line(end)) => {
            let end = to_line(end);
            ResolvedPlacement::Definite(Line {
                start: end.saturating_sub(span.min(MAX_SPAN) as i16),
                end,
            })
        }
        (GridPlacement::Auto, GridPlacement::Line(end)) => {
            let end = to_line(end);
            ResolvedPlacement::Definite(Line {
                start: end - 1,
                end,
            })
        }
        (GridPlacement::Span(span), GridPlacement::Span(_) | GridPlacement::Auto)
        | (GridPlacement::Auto, GridPlacement::Span(span)) => {
            ResolvedPlacement::Auto(span.min(MAX_SPAN))
        }
        (GridPlacement::Auto, GridPlacement::Auto) => ResolvedPlacement::Auto(1),
    }
}

/// Area occupied by a grid item, in origin-zero lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridArea {
    pub columns: Line<OriginZeroLine>,
    pub rows: Line<OriginZeroLine>,
}

impl GridArea {
    #[inline]
    pub const fn get(&self, axis: AbstractAxis) -> Line<OriginZeroLine> {
        match axis {
            AbstractAxis::Inline => self.columns,
            AbstractAxis::Block => self.rows,
        }
    }

    /// Number of tracks spanned along `axis`.
    #[inline]
    pub fn span(&self, axis: AbstractAxis) -> u16 {
        let line = self.get(axis);
        (line.end - line.start).unsigned_abs()
    }

    /// Check if this area overlaps with another area.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.rows.start < other.rows.end
            && self.rows.end > other.rows.start
            && self.columns.start < other.columns.end
            && self.columns.end > other.columns.start
    }

    fn from_axes(primary_axis: AbstractAxis, primary: Line<i16>, secondary: Line<i16>) -> Self {
        match primary_axis {
            AbstractAxis::Inline => Self {
                columns: primary,
                rows: secondary,
            },
            AbstractAxis::Block => Self {
                columns: secondary,
                rows: primary,
            },
        }
    }
}

/// How many tracks of each kind one axis of the grid has.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrackCounts {
    /// Implicit tracks before the explicit grid.
    pub negative_implicit: u16,
    pub explicit: u16,
    /// Implicit tracks after the explicit grid.
    pub positive_implicit: u16,
}

impl TrackCounts {
    #[inline]
    pub const fn from_explicit(explicit: u16) -> Self {
        Self {
            negative_implicit: 0,
            explicit,
            positive_implicit: 0,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.negative_implicit as usize + self.explicit as usize + self.positive_implicit as usize
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First line of the implicit grid.
    #[inline]
    pub const fn implicit_start_line(&self) -> OriginZeroLine {
        -(self.negative_implicit as i16)
    }

    /// Last line of the implicit grid.
    #[inline]
    pub const fn implicit_end_line(&self) -> OriginZeroLine {
        (self.explicit + self.positive_implicit) as i16
    }

    /// Index into the track list of the track that starts at `line`.
    #[inline]
    pub fn line_to_track(&self, line: OriginZeroLine) -> Option<usize> {
        usize::try_from(i32::from(line) + i32::from(self.negative_implicit)).ok()
    }

    /// Track indices spanned by the lines `line`.
    #[inline]
    pub fn track_range(&self, line: Line<OriginZeroLine>) -> Range<usize> {
        let start = self.line_to_track(line.start).unwrap_or(0);
        let end = self.line_to_track(line.end).unwrap_or(0).min(self.len());
        start.min(end)..end
    }

    /// Grow the implicit grid until `line` is inside it.
    fn expand_to_fit(&mut self, line: Line<OriginZeroLine>) {
        let start = self.implicit_start_line();
        if line.start < start {
            self.negative_implicit += (start - line.start).unsigned_abs();
        }
        let end = self.implicit_end_line();
        if line.end > end {
            self.positive_implicit += (line.end - end).unsigned_abs();
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CellOccupancyState {
    #[default]
    Unoccupied,
    /// Taken by an item with a definite position in both axes.
    DefinitelyPlaced,
    AutoPlaced,
}

/// Which cells of the implicit grid are taken, stored row by row.
#[derive(Debug, Clone)]
pub struct CellOccupancyMatrix {
    cells: Vec<CellOccupancyState>,
    columns: TrackCounts,
    rows: TrackCounts,
}

impl CellOccupancyMatrix {
    pub fn with_track_counts(columns: TrackCounts, rows: TrackCounts) -> Self {
        Self {
            cells: vec![CellOccupancyState::Unoccupied; columns.len() * rows.len()],
            columns,
            rows,
        }
    }

    #[inline]
    pub const fn track_counts(&self, axis: AbstractAxis) -> TrackCounts {
        match axis {
            AbstractAxis::Inline => self.columns,
            AbstractAxis::Block => self.rows,
        }
    }

    fn cell(&self, column: usize, row: usize) -> CellOccupancyState {
        self.cells
            .get(row * self.columns.len() + column)
            .copied()
            .unwrap_or_default()
    }

    /// Reallocate so that `area` lies inside the grid, keeping every occupied cell in place.
    fn expand_to_fit(&mut self, area: GridArea) {
        let mut columns = self.columns;
        let mut rows = self.rows;
        columns.expand_to_fit(area.columns);
        rows.expand_to_fit(area.rows);
        if columns == self.columns && rows == self.rows {
            return;
        }
        let column_shift = usize::from(columns.negative_implicit - self.columns.negative_implicit);
        let row_shift = usize::from(rows.negative_implicit - self.rows.negative_implicit);
        let mut cells = vec![CellOccupancyState::Unoccupied; columns.len() * rows.len()];
        for row in 0..self.rows.len() {
            for column in 0..self.columns.len() {
                let index = (row + row_shift) * columns.len() + column + column_shift;
                if let Some(cell) = cells.get_mut(index) {
                    *cell = self.cell(column, row);
                }
            }
        }
        trace!(
            target: "css::grid::placement",
            "expand occupancy matrix: columns={columns:?} rows={rows:?}"
        );
        self.cells = cells;
        self.columns = columns;
        self.rows = rows;
    }

    /// Whether no cell of `area` is taken. Cells outside the current grid are free.
    pub fn area_is_unoccupied(&self, area: GridArea) -> bool {
        let columns = self.columns.track_range(area.columns);
        let rows = self.rows.track_range(area.rows);
        rows.clone().all(|row| {
            columns
                .clone()
                .all(|column| self.cell(column, row) == CellOccupancyState::Unoccupied)
        })
    }

    pub fn mark_area_as(&mut self, area: GridArea, state: CellOccupancyState) {
        self.expand_to_fit(area);
        let width = self.columns.len();
        let columns = self.columns.track_range(area.columns);
        for row in self.rows.track_range(area.rows) {
            for column in columns.clone() {
                if let Some(cell) = self.cells.get_mut(row * width + column) {
                    *cell = state;
                }
            }
        }
    }

    /// Line just past the last cell of kind `state` in the track starting at `line` of
    /// `secondary_axis`, scanning along the other axis.
    pub fn last_of_type(
        &self,
        secondary_axis: AbstractAxis,
        line: OriginZeroLine,
        state: CellOccupancyState,
    ) -> Option<OriginZeroLine> {
        let primary_counts = self.track_counts(secondary_axis.other());
        let track = self.track_counts(secondary_axis).line_to_track(line)?;
        let last = (0..primary_counts.len()).rev().find(|&index| {
            let cell = match secondary_axis {
                AbstractAxis::Block => self.cell(index, track),
                AbstractAxis::Inline => self.cell(track, index),
            };
            cell == state
        })?;
        Some(last as i16 + 1 + primary_counts.implicit_start_line())
    }
}

/// The two placements of one item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemPlacement {
    pub columns: ResolvedPlacement,
    pub rows: ResolvedPlacement,
}

impl ItemPlacement {
    pub fn resolve(
        columns: Line<GridPlacement>,
        rows: Line<GridPlacement>,
        explicit: (u16, u16),
    ) -> Self {
        Self {
            columns: resolve_placement(columns, explicit.0),
            rows: resolve_placement(rows, explicit.1),
        }
    }

    #[inline]
    const fn get(&self, axis: AbstractAxis) -> ResolvedPlacement {
        match axis {
            AbstractAxis::Inline => self.columns,
            AbstractAxis::Block => self.rows,
        }
    }
}

/// Result of placing every in-flow item.
#[derive(Debug, Clone)]
pub struct GridPlacementResult {
    /// One area per input placement, in the same order.
    pub areas: Vec<GridArea>,
    pub columns: TrackCounts,
    pub rows: TrackCounts,
}

/// Place grid items according to the grid placement algorithm.
///
/// Spec: §8.5 Grid Item Placement Algorithm
/// <https://www.w3.org/TR/css-grid-2/#auto-placement-algo>
///
/// `explicit` is the number of explicit (columns, rows). Items keep source order within each step.
pub fn place_grid_items(
    placements: &[ItemPlacement],
    explicit: (u16, u16),
    auto_flow: GridAutoFlow,
) -> GridPlacementResult {
    let primary_axis = if auto_flow.is_row() {
        AbstractAxis::Inline
    } else {
        AbstractAxis::Block
    };
    let secondary_axis = primary_axis.other();
    let mut matrix = CellOccupancyMatrix::with_track_counts(
        TrackCounts::from_explicit(explicit.0),
        TrackCounts::from_explicit(explicit.1),
    );
    let mut areas: Vec<Option<GridArea>> = vec![None; placements.len()];

    // Step 1: items with a definite position in both axes.
    for (placement, slot) in placements.iter().zip(areas.iter_mut()) {
        if let (ResolvedPlacement::Definite(columns), ResolvedPlacement::Definite(rows)) =
            (placement.columns, placement.rows)
        {
            let area = GridArea { columns, rows };
            matrix.mark_area_as(area, CellOccupancyState::DefinitelyPlaced);
            *slot = Some(area);
        }
    }

    // Step 2: items locked to a given row (column for column flow).
    for (placement, slot) in placements.iter().zip(areas.iter_mut()) {
        if slot.is_some() {
            continue;
        }
        if let ResolvedPlacement::Definite(secondary) = placement.get(secondary_axis) {
            let span = placement.get(primary_axis).span() as i16;
            let start = if auto_flow.is_dense() {
                matrix.track_counts(primary_axis).implicit_start_line()
            } else {
                matrix
                    .last_of_type(secondary_axis, secondary.start, CellOccupancyState::AutoPlaced)
                    .unwrap_or_else(|| matrix.track_counts(primary_axis).implicit_start_line())
            };
            let area = (start..)
                .map(|position| {
                    GridArea::from_axes(
                        primary_axis,
                        Line {
                            start: position,
                            end: position + span,
                        },
                        secondary,
                    )
                })
                .find(|candidate| matrix.area_is_unoccupied(*candidate));
            if let Some(found) = area {
                matrix.mark_area_as(found, CellOccupancyState::AutoPlaced);
                *slot = Some(found);
            }
        }
    }

    // Step 3: the implicit grid must be wide enough for every remaining auto span.
    let widest_auto_span = placements
        .iter()
        .zip(areas.iter())
        .filter(|(placement, slot)| slot.is_none() && !placement.get(primary_axis).is_definite())
        .map(|(placement, _)| placement.get(primary_axis).span() as i16)
        .max()
        .unwrap_or(0);
    let primary_counts = matrix.track_counts(primary_axis);
    let primary_room = primary_counts.implicit_end_line() - primary_counts.implicit_start_line();
    if widest_auto_span > primary_room {
        let start = primary_counts.implicit_start_line();
        let widest_area = GridArea::from_axes(
            primary_axis,
            Line {
                start,
                end: start + widest_auto_span,
            },
            Line { start: 0, end: 0 },
        );
        matrix.expand_to_fit(widest_area);
    }

    // Step 4: everything else, following the auto-placement cursor.
    let mut cursor = (
        matrix.track_counts(primary_axis).implicit_start_line(),
        matrix.track_counts(secondary_axis).implicit_start_line(),
    );
    for (placement, slot) in placements.iter().zip(areas.iter_mut()) {
        if slot.is_some() {
            continue;
        }
        if auto_flow.is_dense() {
            cursor = (
                matrix.track_counts(primary_axis).implicit_start_line(),
                matrix.track_counts(secondary_axis).implicit_start_line(),
            );
        }
        let area = place_indefinitely_positioned_item(
            &matrix,
            *placement,
            primary_axis,
            auto_flow.is_dense(),
            cursor,
        );
        matrix.mark_area_as(area, CellOccupancyState::AutoPlaced);
        let primary = area.get(primary_axis);
        let secondary = area.get(secondary_axis);
        cursor = (primary.end, secondary.start);
        *slot = Some(area);
    }

    let columns = matrix.track_counts(AbstractAxis::Inline);
    let rows = matrix.track_counts(AbstractAxis::Block);
    debug!(
        target: "css::grid::placement",
        "place_grid_items: items={} flow={auto_flow:?} columns={columns:?} rows={rows:?}",
        placements.len()
    );
    GridPlacementResult {
        areas: areas
            .into_iter()
            .map(|slot| {
                slot.unwrap_or(GridArea {
                    columns: Line { start: 0, end: 1 },
                    rows: Line { start: 0, end: 1 },
                })
            })
            .collect(),
        columns,
        rows,
    }
}

/// Find the first free area for an item without a definite position in the secondary axis.
fn place_indefinitely_positioned_item(
    matrix: &CellOccupancyMatrix,
    placement: ItemPlacement,
    primary_axis: AbstractAxis,
    dense: bool,
    cursor: (OriginZeroLine, OriginZeroLine),
) -> GridArea {
    let secondary_axis = primary_axis.other();
    let secondary_span = placement.get(secondary_axis).span() as i16;
    let primary_counts = matrix.track_counts(primary_axis);
    let secondary_start = matrix.track_counts(secondary_axis).implicit_start_line();
    let (mut primary_index, mut secondary_index) = cursor;

    if let ResolvedPlacement::Definite(primary) = placement.get(primary_axis) {
        // The item is fixed along the primary axis, so only the secondary position moves.
        if dense {
            secondary_index = secondary_start;
        } else if primary.start < primary_index {
            secondary_index += 1;
        }
        loop {
            let area = GridArea::from_axes(
                primary_axis,
                primary,
                Line {
                    start: secondary_index,
                    end: secondary_index + secondary_span,
                },
            );
            if matrix.area_is_unoccupied(area) {
                return area;
            }
            secondary_index += 1;
        }
    }

    let primary_span = placement.get(primary_axis).span() as i16;
    loop {
        if primary_index + primary_span > primary_counts.implicit_end_line() {
            secondary_index += 1;
            primary_index = primary_counts.implicit_start_line();
            continue;
        }
        let area = GridArea::from_axes(
            primary_axis,
            Line {
                start: primary_index,
                end: primary_index + primary_span,
            },
            Line {
                start: secondary_index,
                end: secondary_index + secondary_span,
            },
        );
        if matrix.area_is_unoccupied(area) {
            return area;
        }
        primary_index += 1;
    }
}
