//! Space distribution: extra item space, free space and `auto` track stretching.
//!
//! Spec: §12.5.1 Distributing Extra Space Across Spanned Tracks, §12.6, §12.8

use css_core::AvailableSpace;
use css_orchestrator::{AlignContent, MaxTrackSizingFunction};
use tracing::trace;

use super::helpers::sum_track_sizes;
use crate::types::GridTrack;

const EPSILON: f32 = 0.000_1;

/// Which size of a track is being grown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackProperty {
    BaseSize,
    GrowthLimit,
}

impl TrackProperty {
    #[inline]
    const fn get(self, track: &GridTrack) -> f32 {
        match self {
            Self::BaseSize => track.base_size,
            Self::GrowthLimit => track.growth_limit,
        }
    }

    #[inline]
    fn add(self, track: &mut GridTrack, amount: f32) {
        match self {
            Self::BaseSize => track.base_size += amount,
            Self::GrowthLimit => track.growth_limit += amount,
        }
    }
}

/// Share `space` equally between `affected` tracks, never taking one past its `limit`.
///
/// Returns the space nobody could take.
fn grow_up_to_limits(
    tracks: &mut [GridTrack],
    affected: &[usize],
    mut space: f32,
    property: TrackProperty,
    limit: impl Fn(&GridTrack) -> f32,
) -> f32 {
    let mut unfrozen: Vec<usize> = affected
        .iter()
        .copied()
        .filter(|&index| {
            tracks
                .get(index)
                .is_some_and(|track| property.get(track) + EPSILON < limit(track))
        })
        .collect();
    while space > EPSILON && !unfrozen.is_empty() {
        let share = space / unfrozen.len() as f32;
        unfrozen.retain(|&index| {
            let Some(track) = tracks.get_mut(index) else {
                return false;
            };
            let room = limit(track) - property.get(track);
            let grant = share.min(room);
            property.add(track, grant);
            space -= grant;
            grant < room
        });
    }
    space.max(0.0)
}

/// Raise the base sizes of `affected` tracks so that together they gain `extra`.
///
/// Tracks first grow up to their growth limits; whatever is left is then shared equally beyond.
pub fn distribute_to_base_sizes(tracks: &mut [GridTrack], affected: &[usize], extra: f32) {
    if extra <= 0.0 || affected.is_empty() {
        return;
    }
    let leftover = grow_up_to_limits(tracks, affected, extra, TrackProperty::BaseSize, |track| {
        track.growth_limit
    });
    if leftover > EPSILON {
        let share = leftover / affected.len() as f32;
        for &index in affected {
            if let Some(track) = tracks.get_mut(index) {
                track.base_size += share;
            }
        }
    }
    for &index in affected {
        if let Some(track) = tracks.get_mut(index)
            && track.growth_limit < track.base_size
        {
            track.growth_limit = track.base_size;
        }
    }
}

/// Raise the growth limits of `affected` tracks so that together they gain `extra`.
///
/// Infinite limits start from the base size. `fit-content()` tracks stop at their limit.
pub fn distribute_to_growth_limits(
    tracks: &mut [GridTrack],
    affected: &[usize],
    extra: f32,
    inner_size: Option<f32>,
) {
    for &index in affected {
        if let Some(track) = tracks.get_mut(index)
            && !track.growth_limit.is_finite()
        {
            track.growth_limit = track.base_size;
        }
    }
    if extra <= 0.0 || affected.is_empty() {
        return;
    }
    grow_up_to_limits(tracks, affected, extra, TrackProperty::GrowthLimit, |track| {
        match track.max_function(inner_size) {
            MaxTrackSizingFunction::FitContent(_) => track
                .max
                .definite_limit(inner_size)
                .unwrap_or(f32::INFINITY)
                .max(track.base_size),
            MaxTrackSizingFunction::Fixed(_)
            | MaxTrackSizingFunction::MinContent
            | MaxTrackSizingFunction::MaxContent
            | MaxTrackSizingFunction::Auto
            | MaxTrackSizingFunction::Fraction(_) => f32::INFINITY,
        }
    });
}

/// Grow every track towards its growth limit with the free space.
///
/// Spec: §12.6 Maximize Tracks
///
/// Under a max-content constraint the free space is infinite, so every track reaches its limit.
pub fn maximize_tracks(tracks: &mut [GridTrack], available: AvailableSpace, gap: f32) {
    match available {
        AvailableSpace::Definite(space) => {
            let free_space = space - sum_track_sizes(tracks, gap);
            if free_space > 0.0 {
                let all: Vec<usize> = (0..tracks.len()).collect();
                grow_up_to_limits(tracks, &all, free_space, TrackProperty::BaseSize, |track| {
                    track.growth_limit
                });
            }
        }
        AvailableSpace::MaxContent => {
            for track in tracks.iter_mut() {
                track.base_size = track.finite_growth_limit().max(track.base_size);
            }
        }
        AvailableSpace::MinContent => {}
    }
}

/// Share definite free space equally between tracks with an `auto` max sizing function.
///
/// Spec: §12.8 Stretch auto Tracks
///
/// Only applies when the content alignment of the axis is `normal` or `stretch`.
pub fn stretch_auto_tracks(
    tracks: &mut [GridTrack],
    available: AvailableSpace,
    gap: f32,
    content_alignment: Option<AlignContent>,
    inner_size: Option<f32>,
) {
    if !matches!(content_alignment, None | Some(AlignContent::Stretch)) {
        return;
    }
    let AvailableSpace::Definite(space) = available else {
        return;
    };
    let free_space = space - sum_track_sizes(tracks, gap);
    if free_space <= 0.0 {
        return;
    }
    let auto_tracks: Vec<usize> = tracks
        .iter()
        .enumerate()
        .filter(|(_, track)| track.max_function(inner_size) == MaxTrackSizingFunction::Auto)
        .map(|(index, _)| index)
        .collect();
    if auto_tracks.is_empty() {
        return;
    }
    let share = free_space / auto_tracks.len() as f32;
    trace!(
        target: "css::grid::tracks",
        "stretch_auto_tracks: free={free_space} tracks={} share={share}",
        auto_tracks.len()
    );
    for index in auto_tracks {
        if let Some(track) = tracks.get_mut(index) {
            track.base_size += share;
            track.growth_limit = track.growth_limit.max(track.base_size);
        }
    }
}
