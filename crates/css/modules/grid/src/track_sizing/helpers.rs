//! Helper functions for track sizing: spanned sizes and item contributions.

use core::ops::Range;

use css_box::Size;
use css_core::{AvailableSpace, LayoutPartialTree, LayoutPartialTreeExt, SizingMode};
use css_orchestrator::AlignItems;

use super::TrackSizingContext;
use crate::types::{GridItem, GridTrack};

/// Sum of base sizes over `range` plus the gaps between those tracks.
pub fn spanned_size(tracks: &[GridTrack], range: Range<usize>, gap: f32) -> f32 {
    let spanned = tracks.get(range).unwrap_or_default();
    let sizes: f32 = spanned.iter().map(|track| track.base_size).sum();
    sizes + gap * spanned.len().saturating_sub(1) as f32
}

/// Sum of base sizes of every track plus every gap.
#[inline]
pub fn sum_track_sizes(tracks: &[GridTrack], gap: f32) -> f32 {
    spanned_size(tracks, 0..tracks.len(), gap)
}

/// Known dimensions and available space for measuring `item` along `ctx.axis`.
///
/// Once the other axis is sized, the item gets its grid area there: as a known size when it
/// stretches, as available space otherwise.
fn measure_constraints(
    item: &GridItem,
    ctx: &TrackSizingContext<'_>,
    space: AvailableSpace,
) -> (Size<Option<f32>>, Size<AvailableSpace>) {
    let other = ctx.axis.other();
    let other_abs = other.as_abs();
    let area_size = ctx
        .other_tracks
        .map(|tracks| spanned_size(tracks, item.tracks(other), ctx.other_gap));
    let margins = item.sizes.margin.axis_components(other_abs);
    let stretches = item.alignment(other) == AlignItems::Stretch
        && item.size_is_auto.get(other_abs)
        && !item.margin_is_auto.axis_components(other_abs).start
        && !item.margin_is_auto.axis_components(other_abs).end;

    let mut known = Size::NONE;
    if stretches {
        known.set(other_abs, area_size.map(|size| (size - margins.sum()).max(0.0)));
    }
    let mut available = Size {
        width: AvailableSpace::MaxContent,
        height: AvailableSpace::MaxContent,
    };
    available.set(ctx.axis.as_abs(), space);
    available.set(
        other_abs,
        area_size.map_or(AvailableSpace::MaxContent, AvailableSpace::Definite),
    );
    (known, available)
}

fn contribution<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    item: &GridItem,
    ctx: &TrackSizingContext<'_>,
    space: AvailableSpace,
) -> f32 {
    let (known, available) = measure_constraints(item, ctx, space);
    tree.measure_child_size(
        item.node,
        known,
        ctx.inner_size,
        available,
        SizingMode::InherentSize,
        ctx.axis.as_abs(),
    ) + item.margin_sum(ctx.axis)
}

/// Outer size of the item under a min-content constraint.
#[inline]
pub fn min_content_contribution<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    item: &GridItem,
    ctx: &TrackSizingContext<'_>,
) -> f32 {
    contribution(tree, item, ctx, AvailableSpace::MinContent)
}

/// Outer size of the item under a max-content constraint.
#[inline]
pub fn max_content_contribution<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    item: &GridItem,
    ctx: &TrackSizingContext<'_>,
) -> f32 {
    contribution(tree, item, ctx, AvailableSpace::MaxContent)
}

/// Outer size the item would have if its preferred size were its minimum size.
///
/// Spec: §6.6 Automatic Minimum Size of Grid Items
pub fn minimum_contribution<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    item: &GridItem,
    ctx: &TrackSizingContext<'_>,
) -> f32 {
    let abs = ctx.axis.as_abs();
    let margins = item.margin_sum(ctx.axis);
    if let Some(min_size) = item.sizes.min_size.get(abs) {
        return min_size + margins;
    }
    if item.overflow.get(abs).is_scroll_container() {
        return item.sizes.padding_border().axis_sum(abs) + margins;
    }
    let min_content = min_content_contribution(tree, item, ctx);
    item.sizes
        .size
        .get(abs)
        .map_or(min_content, |size| min_content.min(size + margins))
}

/// Number of gaps inside a span.
#[inline]
pub fn gaps_within(range: &Range<usize>, gap: f32) -> f32 {
    gap * range.len().saturating_sub(1) as f32
}

/// Whether `axis` is being sized under an intrinsic constraint.
#[inline]
pub const fn is_intrinsic_constraint(space: AvailableSpace) -> bool {
    matches!(space, AvailableSpace::MinContent | AvailableSpace::MaxContent)
}
