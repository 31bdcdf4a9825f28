//! Grid track sizing algorithm.
//!
//! Spec: §12 Grid Sizing
//! <https://www.w3.org/TR/css-grid-2/#algo-track-sizing>
//!
//! ```text
//! 1. initialize          base size / growth limit from fixed sizing functions
//! 2. intrinsic sizes     resolution
//! 3. maximize            distribution
//! 4. flexible tracks     expansion
//! 5. stretch auto        distribution
//! ```

mod distribution;
mod expansion;
mod helpers;
mod resolution;

use css_box::{AbstractAxis, Size};
use css_core::{AvailableSpace, LayoutPartialTree};
use css_orchestrator::AlignContent;

use crate::types::{GridItem, GridTrack};

pub use distribution::{maximize_tracks, stretch_auto_tracks};
pub use expansion::expand_flexible_tracks;
pub use helpers::{spanned_size, sum_track_sizes};
pub use resolution::resolve_intrinsic_track_sizes;

/// Inputs for sizing the tracks of one axis.
#[derive(Debug, Clone, Copy)]
pub struct TrackSizingContext<'ctx> {
    /// Axis being sized
    pub axis: AbstractAxis,
    /// Gap between tracks of this axis
    pub gap: f32,
    /// Container content box, the percentage basis for tracks and items.
    pub inner_size: Size<Option<f32>>,
    /// Space the tracks may fill.
    pub available: AvailableSpace,
    /// Content-box `min-*` size of the container when its inner size is indefinite.
    pub min_inner: Option<f32>,
    /// Content-box `max-*` size of the container when its inner size is indefinite.
    pub max_inner: Option<f32>,
    /// `justify-content` for columns, `align-content` for rows.
    pub content_alignment: Option<AlignContent>,
    /// Tracks of the other axis once they have been sized.
    pub other_tracks: Option<&'ctx [GridTrack]>,
    pub other_gap: f32,
}

/// Set base sizes and growth limits from fixed sizing functions.
///
/// Spec: §12.4 Initialize Track Sizes
pub fn initialize_track_sizes(tracks: &mut [GridTrack], inner_size: Option<f32>) {
    for track in tracks {
        track.base_size = track
            .min_function(inner_size)
            .definite_value(inner_size)
            .unwrap_or(0.0);
        track.growth_limit = track
            .max_function(inner_size)
            .definite_value(inner_size)
            .unwrap_or(f32::INFINITY)
            .max(track.base_size);
    }
}

/// Run the track sizing algorithm for one axis.
pub fn resolve_track_sizes<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    tracks: &mut [GridTrack],
    items: &[GridItem],
    ctx: &TrackSizingContext<'_>,
) {
    let inner_size = ctx.inner_size.get(ctx.axis.as_abs());
    initialize_track_sizes(tracks, inner_size);
    resolve_intrinsic_track_sizes(tree, tracks, items, ctx);
    maximize_tracks(tracks, ctx.available, ctx.gap);
    expand_flexible_tracks(tree, tracks, items, ctx);
    // Indefinite free space is measured against a definite min size when there is one.
    let stretch_space = match (ctx.available, ctx.min_inner) {
        (AvailableSpace::Definite(_), _) | (_, None) => ctx.available,
        (_, Some(min)) => AvailableSpace::Definite(min),
    };
    stretch_auto_tracks(
        tracks,
        stretch_space,
        ctx.gap,
        ctx.content_alignment,
        inner_size,
    );

    tracing::debug!(
        "resolve_track_sizes: axis={:?}, available={:?}, sizes={:?}",
        ctx.axis,
        ctx.available,
        tracks.iter().map(|track| track.base_size).collect::<Vec<_>>()
    );
}

#[cfg(test)]
mod tests {
    use super::distribution::distribute_to_base_sizes;
    use super::expansion::find_fr_size;
    use super::*;
    use crate::types::TrackListType;
    use css_orchestrator::{MaxTrackSizingFunction, MinTrackSizingFunction, NonRepeatedTrackSizingFunction};
    use css_values_units::LengthPercentage;

    const EPSILON: f32 = 0.01;

    fn track(sizing: NonRepeatedTrackSizingFunction) -> GridTrack {
        GridTrack::new(TrackListType::Explicit, sizing)
    }

    fn sized(sizing: NonRepeatedTrackSizingFunction, base: f32, limit: f32) -> GridTrack {
        let mut sized_track = track(sizing);
        sized_track.base_size = base;
        sized_track.growth_limit = limit;
        sized_track
    }

    fn bases(tracks: &[GridTrack]) -> Vec<f32> {
        tracks.iter().map(|grid_track| grid_track.base_size).collect()
    }

    /// Test fixed and percentage tracks initialize from their sizing functions.
    ///
    /// # Panics
    /// Panics if base sizes or growth limits are initialized incorrectly.
    #[test]
    fn test_initialize_track_sizes() {
        let mut tracks = vec![
            track(NonRepeatedTrackSizingFunction::length(40.0)),
            track(NonRepeatedTrackSizingFunction::percent(0.25)),
            track(NonRepeatedTrackSizingFunction::AUTO),
            track(NonRepeatedTrackSizingFunction::minmax(
                MinTrackSizingFunction::Fixed(LengthPercentage::Length(30.0)),
                MaxTrackSizingFunction::Fixed(LengthPercentage::Length(10.0)),
            )),
        ];
        initialize_track_sizes(&mut tracks, Some(200.0));
        assert_eq!(bases(&tracks), vec![40.0, 50.0, 0.0, 30.0]);
        assert!(tracks.get(2).is_some_and(|auto| auto.growth_limit.is_infinite()));
        // A growth limit below the base size is raised to it.
        assert_eq!(tracks.get(3).map(|fixed| fixed.growth_limit), Some(30.0));

        initialize_track_sizes(&mut tracks, None);
        assert_eq!(tracks.get(1).map(|percent| percent.base_size), Some(0.0));
    }

    /// Test fr sizing with factors summing below one and with an oversized base.
    ///
    /// # Panics
    /// Panics if the fr size is computed incorrectly.
    #[test]
    fn test_find_fr_size() {
        let tracks = vec![
            sized(NonRepeatedTrackSizingFunction::fr(1.0), 0.0, 0.0),
            sized(NonRepeatedTrackSizingFunction::fr(2.0), 0.0, 0.0),
            sized(NonRepeatedTrackSizingFunction::length(60.0), 60.0, 60.0),
        ];
        let fr_size = find_fr_size(&tracks, 0..3, 360.0);
        assert!((fr_size - 100.0).abs() < EPSILON);

        let half = vec![sized(NonRepeatedTrackSizingFunction::fr(0.5), 0.0, 0.0)];
        assert!((find_fr_size(&half, 0..1, 200.0) - 200.0).abs() < EPSILON);

        // The first track's base size exceeds its share, so it stops being flexible.
        let oversized = vec![
            sized(NonRepeatedTrackSizingFunction::fr(1.0), 150.0, 150.0),
            sized(NonRepeatedTrackSizingFunction::fr(1.0), 0.0, 0.0),
        ];
        assert!((find_fr_size(&oversized, 0..2, 200.0) - 50.0).abs() < EPSILON);
    }

    /// Test free space grows tracks equally up to their growth limits.
    ///
    /// # Panics
    /// Panics if a track passes its growth limit or free space is lost.
    #[test]
    fn test_maximize_tracks_respects_limits() {
        let mut tracks = vec![
            sized(NonRepeatedTrackSizingFunction::AUTO, 10.0, 20.0),
            sized(NonRepeatedTrackSizingFunction::AUTO, 10.0, 200.0),
        ];
        maximize_tracks(&mut tracks, AvailableSpace::Definite(120.0), 0.0);
        let sizes = bases(&tracks);
        assert!((sizes.first().copied().unwrap_or_default() - 20.0).abs() < EPSILON);
        assert!((sizes.get(1).copied().unwrap_or_default() - 100.0).abs() < EPSILON);

        let mut unconstrained = vec![sized(NonRepeatedTrackSizingFunction::AUTO, 10.0, 70.0)];
        maximize_tracks(&mut unconstrained, AvailableSpace::MaxContent, 0.0);
        assert_eq!(bases(&unconstrained), vec![70.0]);
    }

    /// Test auto tracks stretch only under normal or stretch content alignment.
    ///
    /// # Panics
    /// Panics if auto tracks stretch under `center` or fixed tracks stretch at all.
    #[test]
    fn test_stretch_auto_tracks() {
        let make = || {
            vec![
                sized(NonRepeatedTrackSizingFunction::AUTO, 20.0, 20.0),
                sized(NonRepeatedTrackSizingFunction::length(30.0), 30.0, 30.0),
            ]
        };
        let mut tracks = make();
        stretch_auto_tracks(&mut tracks, AvailableSpace::Definite(100.0), 10.0, None, Some(100.0));
        assert_eq!(bases(&tracks), vec![60.0, 30.0]);

        let mut centered = make();
        stretch_auto_tracks(
            &mut centered,
            AvailableSpace::Definite(100.0),
            10.0,
            Some(AlignContent::Center),
            Some(100.0),
        );
        assert_eq!(bases(&centered), vec![20.0, 30.0]);
    }

    /// Test extra space for spanning items fills growth limits before going beyond.
    ///
    /// # Panics
    /// Panics if base sizes are not distributed as expected.
    #[test]
    fn test_distribute_to_base_sizes() {
        let mut tracks = vec![
            sized(NonRepeatedTrackSizingFunction::AUTO, 0.0, 10.0),
            sized(NonRepeatedTrackSizingFunction::AUTO, 0.0, 100.0),
        ];
        distribute_to_base_sizes(&mut tracks, &[0, 1], 60.0);
        assert_eq!(bases(&tracks), vec![10.0, 50.0]);

        distribute_to_base_sizes(&mut tracks, &[0, 1], 120.0);
        let sizes = bases(&tracks);
        assert!((sizes.iter().sum::<f32>() - 180.0).abs() < EPSILON);
        assert!(tracks.iter().all(|grown| grown.growth_limit >= grown.base_size));
    }

    /// Test spanned sizes include the gaps inside the span only.
    ///
    /// # Panics
    /// Panics if gaps are miscounted.
    #[test]
    fn test_spanned_size() {
        let tracks = vec![
            sized(NonRepeatedTrackSizingFunction::length(10.0), 10.0, 10.0),
            sized(NonRepeatedTrackSizingFunction::length(20.0), 20.0, 20.0),
            sized(NonRepeatedTrackSizingFunction::length(30.0), 30.0, 30.0),
        ];
        assert!((spanned_size(&tracks, 1..3, 5.0) - 55.0).abs() < EPSILON);
        assert!((sum_track_sizes(&tracks, 5.0) - 70.0).abs() < EPSILON);
        assert!((sum_track_sizes(&[], 5.0)).abs() < EPSILON);
    }
}
