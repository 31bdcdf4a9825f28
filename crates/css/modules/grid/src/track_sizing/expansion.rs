//! Flexible track expansion.
//!
//! Spec: §12.7 Expand Flexible Tracks
//! <https://www.w3.org/TR/css-grid-2/#algo-flex-tracks>

use core::ops::Range;

use css_core::{AvailableSpace, LayoutPartialTree};
use tracing::debug;

use super::TrackSizingContext;
use super::helpers::{gaps_within, max_content_contribution, sum_track_sizes};
use crate::types::{GridItem, GridTrack};

/// Find the size of an `fr` that fills `space_to_fill` with the tracks in `range`.
///
/// Spec: §12.7.1 Find the Size of an fr
///
/// `space_to_fill` excludes gaps. Flexible tracks whose base size exceeds their share are
/// treated as inflexible and the size is recomputed without them.
pub fn find_fr_size(tracks: &[GridTrack], range: Range<usize>, space_to_fill: f32) -> f32 {
    let spanned = tracks.get(range).unwrap_or_default();
    let mut leftover = space_to_fill
        - spanned
            .iter()
            .filter(|track| !track.is_flexible())
            .map(|track| track.base_size)
            .sum::<f32>();
    let mut flexible: Vec<&GridTrack> = spanned.iter().filter(|track| track.is_flexible()).collect();

    loop {
        if flexible.is_empty() {
            return 0.0;
        }
        // A flex factor sum below one is floored so that `0.5fr` takes half the space.
        let flex_sum: f32 = flexible.iter().map(|track| track.flex_factor()).sum::<f32>().max(1.0);
        let hypothetical = leftover.max(0.0) / flex_sum;
        let before = flexible.len();
        flexible.retain(|track| {
            let keep = hypothetical * track.flex_factor() >= track.base_size;
            if !keep {
                leftover -= track.base_size;
            }
            keep
        });
        if flexible.len() == before {
            return hypothetical;
        }
    }
}

/// Grow flexible tracks to the used `fr` size.
///
/// With definite space the tracks fill it. Under a max-content constraint every flexible track
/// keeps at least its base size per `fr`, and every item crossing flexible tracks gets its
/// max-content contribution. Under a min-content constraint the `fr` size is zero.
pub fn expand_flexible_tracks<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    tracks: &mut [GridTrack],
    items: &[GridItem],
    ctx: &TrackSizingContext<'_>,
) {
    if !tracks.iter().any(GridTrack::is_flexible) {
        return;
    }
    let fr_size = match ctx.available {
        AvailableSpace::Definite(space) => {
            let gaps = ctx.gap * tracks.len().saturating_sub(1) as f32;
            find_fr_size(tracks, 0..tracks.len(), space - gaps)
        }
        AvailableSpace::MinContent => 0.0,
        AvailableSpace::MaxContent => {
            let mut fr_size = tracks
                .iter()
                .filter(|track| track.is_flexible())
                .map(|track| {
                    let factor = track.flex_factor();
                    if factor > 1.0 {
                        track.base_size / factor
                    } else {
                        track.base_size
                    }
                })
                .fold(0.0, f32::max);
            for item in items {
                let range = item.tracks(ctx.axis);
                if !item.crosses(ctx.axis, tracks, GridTrack::is_flexible) {
                    continue;
                }
                let contribution = max_content_contribution(tree, item, ctx);
                let space = contribution - gaps_within(&range, ctx.gap);
                fr_size = fr_size.max(find_fr_size(tracks, range, space));
            }
            fr_size
        }
    };

    let fr_size = fr_size_within_bounds(tracks, ctx, fr_size);

    for track in tracks.iter_mut().filter(|track| track.is_flexible()) {
        let size = fr_size * track.flex_factor();
        if size > track.base_size {
            track.base_size = size;
        }
        track.growth_limit = track.growth_limit.max(track.base_size);
    }
    debug!(
        target: "css::grid::tracks",
        "expand_flexible_tracks: axis={:?} space={:?} fr={fr_size} total={}",
        ctx.axis,
        ctx.available,
        sum_track_sizes(tracks, ctx.gap)
    );
}

/// Redo the `fr` size against the container's min or max inner size when the grid it would
/// produce falls outside them.
///
/// Spec: §12.7.1, indefinite free space
fn fr_size_within_bounds(
    tracks: &[GridTrack],
    ctx: &TrackSizingContext<'_>,
    fr_size: f32,
) -> f32 {
    let gaps = ctx.gap * tracks.len().saturating_sub(1) as f32;
    let hypothetical = gaps
        + tracks
            .iter()
            .map(|track| {
                if track.is_flexible() {
                    (fr_size * track.flex_factor()).max(track.base_size)
                } else {
                    track.base_size
                }
            })
            .sum::<f32>();
    let bound = match (ctx.min_inner, ctx.max_inner) {
        (Some(min), _) if hypothetical < min => min,
        (_, Some(max)) if hypothetical > max => max,
        _ => return fr_size,
    };
    debug!(
        target: "css::grid::tracks",
        "expand_flexible_tracks: axis={:?} grid={hypothetical} redone against {bound}",
        ctx.axis
    );
    find_fr_size(tracks, 0..tracks.len(), bound - gaps)
}
