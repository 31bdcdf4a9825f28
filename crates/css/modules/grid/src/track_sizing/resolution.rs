//! Intrinsic track size resolution.
//!
//! Spec: §12.5 Resolve Intrinsic Track Sizes
//! <https://www.w3.org/TR/css-grid-2/#algo-content>

use css_core::LayoutPartialTree;
use css_orchestrator::{MaxTrackSizingFunction, MinTrackSizingFunction};
use smallvec::SmallVec;
use tracing::trace;

use super::TrackSizingContext;
use super::distribution::{distribute_to_base_sizes, distribute_to_growth_limits};
use super::helpers::{
    gaps_within, is_intrinsic_constraint, max_content_contribution, min_content_contribution,
    minimum_contribution, spanned_size,
};
use crate::types::{GridItem, GridTrack};

/// Track indices an item spans, usually only a handful.
type SpannedTracks = SmallVec<usize, 4>;

/// Contributions of one item along the axis being sized.
#[derive(Debug, Clone, Copy)]
struct Contributions {
    minimum: f32,
    min_content: f32,
    max_content: f32,
}

impl Contributions {
    fn measure<Tree: LayoutPartialTree + ?Sized>(
        tree: &mut Tree,
        item: &GridItem,
        ctx: &TrackSizingContext<'_>,
    ) -> Self {
        Self {
            minimum: minimum_contribution(tree, item, ctx),
            min_content: min_content_contribution(tree, item, ctx),
            max_content: max_content_contribution(tree, item, ctx),
        }
    }

    /// What an intrinsic minimum sizing function asks of the track.
    fn for_min(self, function: MinTrackSizingFunction, ctx: &TrackSizingContext<'_>) -> f32 {
        match function {
            MinTrackSizingFunction::MinContent => self.min_content,
            MinTrackSizingFunction::MaxContent => self.max_content,
            MinTrackSizingFunction::Auto if is_intrinsic_constraint(ctx.available) => {
                self.min_content
            }
            MinTrackSizingFunction::Auto => self.minimum,
            MinTrackSizingFunction::Fixed(_) => 0.0,
        }
    }

    /// What an intrinsic maximum sizing function asks of the track.
    fn for_max(self, function: MaxTrackSizingFunction, inner_size: Option<f32>) -> f32 {
        match function {
            MaxTrackSizingFunction::MinContent => self.min_content,
            MaxTrackSizingFunction::MaxContent | MaxTrackSizingFunction::Auto => self.max_content,
            MaxTrackSizingFunction::FitContent(_) => function
                .definite_limit(inner_size)
                .map_or(self.max_content, |limit| self.max_content.min(limit)),
            MaxTrackSizingFunction::Fixed(_) | MaxTrackSizingFunction::Fraction(_) => 0.0,
        }
    }
}

/// Size tracks from the contributions of the items they hold.
///
/// Items spanning one track size it directly. Items spanning several non-flexible tracks, in
/// order of increasing span, share what they still need among the intrinsic tracks they span.
/// Items crossing a flexible track only feed the base sizes of those flexible tracks.
pub fn resolve_intrinsic_track_sizes<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    tracks: &mut [GridTrack],
    items: &[GridItem],
    ctx: &TrackSizingContext<'_>,
) {
    let axis = ctx.axis;
    let inner_size = ctx.inner_size.get(axis.as_abs());

    // Single-span items.
    let single: Vec<&GridItem> = items
        .iter()
        .filter(|item| item.span(axis) == 1 && !item.crosses(axis, tracks, GridTrack::is_flexible))
        .collect();
    for item in single {
        let index = item.tracks(axis).start;
        let Some(track) = tracks.get(index) else {
            continue;
        };
        let min_function = track.min_function(inner_size);
        let max_function = track.max_function(inner_size);
        if !min_function.is_intrinsic() && !max_function.is_intrinsic() {
            continue;
        }
        let contributions = Contributions::measure(tree, item, ctx);
        let Some(track) = tracks.get_mut(index) else {
            continue;
        };
        if min_function.is_intrinsic() {
            track.base_size = track.base_size.max(contributions.for_min(min_function, ctx));
        }
        if max_function.is_intrinsic() {
            let wanted = contributions.for_max(max_function, inner_size);
            track.growth_limit = if track.growth_limit.is_finite() {
                track.growth_limit.max(wanted)
            } else {
                wanted
            };
        }
        if track.growth_limit < track.base_size {
            track.growth_limit = track.base_size;
        }
        trace!(
            target: "css::grid::tracks",
            "resolve_intrinsic_track_sizes: axis={axis:?} track={index} base={} limit={}",
            track.base_size,
            track.growth_limit
        );
    }

    // Multi-span items, smallest spans first.
    let mut spanning: Vec<&GridItem> = items
        .iter()
        .filter(|item| item.span(axis) > 1 && !item.crosses(axis, tracks, GridTrack::is_flexible))
        .collect();
    spanning.sort_by_key(|item| item.span(axis));
    for item in spanning {
        let range = item.tracks(axis);
        let intrinsic_min: SpannedTracks = range
            .clone()
            .filter(|&index| {
                tracks
                    .get(index)
                    .is_some_and(|track| track.min_function(inner_size).is_intrinsic())
            })
            .collect();
        let intrinsic_max: SpannedTracks = range
            .clone()
            .filter(|&index| {
                tracks
                    .get(index)
                    .is_some_and(|track| track.max_function(inner_size).is_intrinsic())
            })
            .collect();
        if intrinsic_min.is_empty() && intrinsic_max.is_empty() {
            continue;
        }
        let contributions = Contributions::measure(tree, item, ctx);

        if !intrinsic_min.is_empty() {
            let asks_max_content = intrinsic_min.iter().any(|&index| {
                tracks.get(index).is_some_and(|track| {
                    track.min_function(inner_size) == MinTrackSizingFunction::MaxContent
                })
            });
            let wanted = if asks_max_content {
                contributions.max_content
            } else {
                contributions.for_min(MinTrackSizingFunction::Auto, ctx)
            };
            let extra = wanted - spanned_size(tracks, range.clone(), ctx.gap);
            distribute_to_base_sizes(tracks, &intrinsic_min, extra);
        }

        if !intrinsic_max.is_empty() {
            let only_min_content = intrinsic_max.iter().all(|&index| {
                tracks.get(index).is_some_and(|track| {
                    track.max_function(inner_size) == MaxTrackSizingFunction::MinContent
                })
            });
            let wanted = if only_min_content {
                contributions.min_content
            } else {
                contributions.max_content
            };
            let current: f32 = tracks
                .get(range.clone())
                .unwrap_or_default()
                .iter()
                .map(GridTrack::finite_growth_limit)
                .sum::<f32>()
                + gaps_within(&range, ctx.gap);
            distribute_to_growth_limits(tracks, &intrinsic_max, wanted - current, inner_size);
        }
    }

    // Items crossing flexible tracks.
    let crossing_flexible: Vec<&GridItem> = items
        .iter()
        .filter(|item| item.crosses(axis, tracks, GridTrack::is_flexible))
        .collect();
    for item in crossing_flexible {
        let range = item.tracks(axis);
        let flexible: SpannedTracks = range
            .clone()
            .filter(|&index| {
                tracks.get(index).is_some_and(|track| {
                    track.is_flexible() && track.min_function(inner_size).is_intrinsic()
                })
            })
            .collect();
        if flexible.is_empty() {
            continue;
        }
        let wanted = Contributions::measure(tree, item, ctx).for_min(MinTrackSizingFunction::Auto, ctx);
        let extra = wanted - spanned_size(tracks, range, ctx.gap);
        if extra <= 0.0 {
            continue;
        }
        let flex_sum: f32 = flexible
            .iter()
            .filter_map(|&index| tracks.get(index))
            .map(GridTrack::flex_factor)
            .sum();
        for &index in &flexible {
            if let Some(track) = tracks.get_mut(index) {
                let share = if flex_sum > 0.0 {
                    extra * track.flex_factor() / flex_sum
                } else {
                    extra / flexible.len() as f32
                };
                track.base_size += share;
                track.growth_limit = track.growth_limit.max(track.base_size);
            }
        }
    }

    for track in tracks.iter_mut() {
        if !track.growth_limit.is_finite() {
            track.growth_limit = track.base_size;
        }
    }
}
