//! Grid container, track and item type definitions.
//!
//! Spec: CSS Grid Layout Module Level 2
//! <https://www.w3.org/TR/css-grid-2/>

use core::ops::Range;

use css_box::{AbstractAxis, Point, Rect, Size};
use css_core::{BoxSizes, LayoutPartialTree, NodeId};
use css_orchestrator::{
    AlignItems, Display, MaxTrackSizingFunction, MinTrackSizingFunction,
    NonRepeatedTrackSizingFunction, Overflow, Position, Style,
};
use css_orchestrator::grid_model::expand_template;
use css_values_units::LengthPercentage;

use crate::placement::{GridArea, ItemPlacement, TrackCounts, place_grid_items};

/// Type of track list (explicit or implicit).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackListType {
    /// Explicit tracks from grid-template-*
    Explicit,
    /// Implicit tracks from grid-auto-*
    Implicit,
}

/// A track in the grid together with its sizing state.
///
/// Spec: §12.4 Initialize Track Sizes
#[derive(Debug, Clone, PartialEq)]
pub struct GridTrack {
    pub kind: TrackListType,
    pub min: MinTrackSizingFunction,
    pub max: MaxTrackSizingFunction,
    pub base_size: f32,
    /// `f32::INFINITY` while unset.
    pub growth_limit: f32,
    /// Distance from the container's border-box edge, set once tracks are aligned.
    pub offset: f32,
}

impl GridTrack {
    pub const fn new(kind: TrackListType, sizing: NonRepeatedTrackSizingFunction) -> Self {
        Self {
            kind,
            min: sizing.min,
            max: sizing.max,
            base_size: 0.0,
            growth_limit: f32::INFINITY,
            offset: 0.0,
        }
    }

    /// Minimum sizing function, with percentages of an indefinite size treated as `auto`.
    #[inline]
    pub fn min_function(&self, inner_size: Option<f32>) -> MinTrackSizingFunction {
        if inner_size.is_none() && self.min.uses_percentage() {
            MinTrackSizingFunction::Auto
        } else {
            self.min
        }
    }

    /// Maximum sizing function, with percentages of an indefinite size treated as `auto`.
    #[inline]
    pub fn max_function(&self, inner_size: Option<f32>) -> MaxTrackSizingFunction {
        match self.max {
            MaxTrackSizingFunction::Fixed(LengthPercentage::Percent(_)) if inner_size.is_none() => {
                MaxTrackSizingFunction::Auto
            }
            other => other,
        }
    }

    #[inline]
    pub const fn is_flexible(&self) -> bool {
        self.max.is_flexible()
    }

    #[inline]
    pub const fn flex_factor(&self) -> f32 {
        self.max.flex_factor()
    }

    /// Growth limit, or the base size while the limit is still infinite.
    #[inline]
    pub fn finite_growth_limit(&self) -> f32 {
        if self.growth_limit.is_finite() {
            self.growth_limit
        } else {
            self.base_size
        }
    }
}

/// Build the track list of one axis: negative implicit, explicit, then positive implicit tracks.
///
/// Spec: §7.6 Implicit Track Sizing
///
/// Implicit tracks cycle through `auto_tracks`. Tracks after the explicit grid start with the
/// first entry; tracks before it count backwards from the last entry.
pub fn build_tracks(
    explicit: &[NonRepeatedTrackSizingFunction],
    auto_tracks: &[NonRepeatedTrackSizingFunction],
    counts: TrackCounts,
) -> Vec<GridTrack> {
    let implicit = |index: usize| {
        GridTrack::new(
            TrackListType::Implicit,
            auto_tracks
                .get(index % auto_tracks.len().max(1))
                .copied()
                .unwrap_or(NonRepeatedTrackSizingFunction::AUTO),
        )
    };
    let negative = usize::from(counts.negative_implicit);
    let auto_len = auto_tracks.len().max(1);
    let mut tracks = Vec::with_capacity(counts.len());
    tracks.extend((0..negative).map(|index| {
        // Distance from the explicit grid, 1 for the track right before it.
        let distance = negative - index;
        implicit((auto_len - distance % auto_len) % auto_len)
    }));
    tracks.extend(
        explicit
            .iter()
            .map(|sizing| GridTrack::new(TrackListType::Explicit, *sizing)),
    );
    tracks.extend((0..usize::from(counts.positive_implicit)).map(implicit));
    tracks
}

/// An in-flow child of a grid container.
#[derive(Debug, Clone)]
pub struct GridItem {
    pub node: NodeId,
    /// Position among the container's children.
    pub order: u32,
    pub area: GridArea,
    /// Track indices spanned in each axis.
    pub column_tracks: Range<usize>,
    pub row_tracks: Range<usize>,
    /// Box model resolved against the container's content box.
    pub sizes: BoxSizes,
    pub margin_is_auto: Rect<bool>,
    pub justify_self: AlignItems,
    pub align_self: AlignItems,
    pub overflow: Point<Overflow>,
    /// Size in each axis is `auto` (candidate for stretching).
    pub size_is_auto: Size<bool>,
}

impl GridItem {
    #[inline]
    pub fn tracks(&self, axis: AbstractAxis) -> Range<usize> {
        match axis {
            AbstractAxis::Inline => self.column_tracks.clone(),
            AbstractAxis::Block => self.row_tracks.clone(),
        }
    }

    #[inline]
    pub fn span(&self, axis: AbstractAxis) -> usize {
        self.tracks(axis).len()
    }

    /// Margin sum along `axis`.
    #[inline]
    pub fn margin_sum(&self, axis: AbstractAxis) -> f32 {
        self.sizes.margin.axis_sum(axis.as_abs())
    }

    /// Self-alignment along `axis`.
    #[inline]
    pub const fn alignment(&self, axis: AbstractAxis) -> AlignItems {
        match axis {
            AbstractAxis::Inline => self.justify_self,
            AbstractAxis::Block => self.align_self,
        }
    }

    /// Whether the item spans a track for which `predicate` holds.
    pub fn crosses(
        &self,
        axis: AbstractAxis,
        tracks: &[GridTrack],
        predicate: impl Fn(&GridTrack) -> bool,
    ) -> bool {
        tracks
            .get(self.tracks(axis))
            .is_some_and(|spanned| spanned.iter().any(predicate))
    }
}

/// Explicit tracks and placements of a grid container's children.
#[derive(Debug, Clone)]
pub struct GridSetup {
    pub items: Vec<GridItem>,
    pub columns: Vec<GridTrack>,
    pub rows: Vec<GridTrack>,
    pub column_counts: TrackCounts,
    pub row_counts: TrackCounts,
}

/// Children taking part in grid placement: not `display: none`, not absolutely positioned.
#[inline]
pub fn is_grid_item(style: &Style) -> bool {
    style.display != Display::None && style.position != Position::Absolute
}

/// Place the children of `node` and build the track lists of both axes.
///
/// `inner_size` is the percentage basis for item boxes (the container's content box).
pub fn collect_grid_items<Tree: LayoutPartialTree + ?Sized>(
    tree: &Tree,
    node: NodeId,
    style: &Style,
    inner_size: Size<Option<f32>>,
) -> GridSetup {
    let explicit_columns = expand_template(&style.grid_template_columns);
    let explicit_rows = expand_template(&style.grid_template_rows);
    let explicit = (
        u16::try_from(explicit_columns.len()).unwrap_or(u16::MAX),
        u16::try_from(explicit_rows.len()).unwrap_or(u16::MAX),
    );

    let children: Vec<(u32, NodeId)> = tree
        .children(node)
        .iter()
        .enumerate()
        .filter(|(_, child)| is_grid_item(tree.style(**child)))
        .map(|(order, child)| (order as u32, *child))
        .collect();
    let placements: Vec<ItemPlacement> = children
        .iter()
        .map(|(_, child)| {
            let child_style = tree.style(*child);
            ItemPlacement::resolve(child_style.grid_column, child_style.grid_row, explicit)
        })
        .collect();
    let placed = place_grid_items(&placements, explicit, style.grid_auto_flow);

    let align_items = style.align_items.unwrap_or(AlignItems::Stretch);
    let justify_items = style.justify_items.unwrap_or(AlignItems::Stretch);
    let items = children
        .iter()
        .zip(placed.areas.iter())
        .map(|((order, child), area)| {
            let child_style = tree.style(*child);
            GridItem {
                node: *child,
                order: *order,
                area: *area,
                column_tracks: placed.columns.track_range(area.columns),
                row_tracks: placed.rows.track_range(area.rows),
                sizes: BoxSizes::resolve(child_style, inner_size),
                margin_is_auto: child_style.margin.map(|side| side.is_auto()),
                justify_self: child_style.justify_self.unwrap_or(justify_items),
                align_self: child_style.align_self.unwrap_or(align_items),
                overflow: child_style.overflow,
                size_is_auto: child_style.size.map(|side| side.is_auto()),
            }
        })
        .collect();

    GridSetup {
        items,
        columns: build_tracks(&explicit_columns, &style.grid_auto_columns, placed.columns),
        rows: build_tracks(&explicit_rows, &style.grid_auto_rows, placed.rows),
        column_counts: placed.columns,
        row_counts: placed.rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test implicit tracks cycle through the auto track list in both directions.
    ///
    /// # Panics
    /// Panics if implicit tracks pick the wrong auto track sizing function.
    #[test]
    fn test_build_tracks_cycles_auto_tracks() {
        let auto_tracks = [
            NonRepeatedTrackSizingFunction::length(10.0),
            NonRepeatedTrackSizingFunction::length(20.0),
            NonRepeatedTrackSizingFunction::length(30.0),
        ];
        let counts = TrackCounts {
            negative_implicit: 1,
            explicit: 1,
            positive_implicit: 4,
        };
        let tracks = build_tracks(&[NonRepeatedTrackSizingFunction::fr(1.0)], &auto_tracks, counts);
        let mins: Vec<Option<f32>> = tracks
            .iter()
            .map(|track| track.min.definite_value(None))
            .collect();
        assert_eq!(
            mins,
            vec![Some(30.0), None, Some(10.0), Some(20.0), Some(30.0), Some(10.0)]
        );
        assert_eq!(tracks.get(1).map(|track| track.kind), Some(TrackListType::Explicit));
    }

    /// Test a missing auto track list yields `auto` implicit tracks.
    ///
    /// # Panics
    /// Panics if an implicit track is not `auto`.
    #[test]
    fn test_build_tracks_defaults_to_auto() {
        let counts = TrackCounts {
            negative_implicit: 0,
            explicit: 0,
            positive_implicit: 2,
        };
        let tracks = build_tracks(&[], &[], counts);
        assert_eq!(tracks.len(), 2);
        assert!(tracks.iter().all(|track| track.min == MinTrackSizingFunction::Auto
            && track.max == MaxTrackSizingFunction::Auto));
    }

    /// Test percentage tracks fall back to `auto` without a definite container size.
    ///
    /// # Panics
    /// Panics if percentage sizing functions are kept against an indefinite size.
    #[test]
    fn test_percentage_tracks_need_definite_size() {
        let track = GridTrack::new(
            TrackListType::Explicit,
            NonRepeatedTrackSizingFunction::percent(0.5),
        );
        assert_eq!(track.min_function(None), MinTrackSizingFunction::Auto);
        assert_eq!(track.max_function(None), MaxTrackSizingFunction::Auto);
        assert_eq!(track.max_function(Some(200.0)), track.max);
    }
}
