//! CSS Grid Layout Module Level 2
//! Spec: <https://www.w3.org/TR/css-grid-2/>
//!
//! This module implements CSS Grid layout, a two-dimensional layout system
//! that lets you lay out content in rows and columns.

// Grid container and item types
mod types;
pub use types::{GridItem, GridSetup, GridTrack, TrackListType, build_tracks, collect_grid_items};

// Track sizing algorithm
mod track_sizing;
pub use track_sizing::{TrackSizingContext, resolve_track_sizes};

// Grid placement algorithm
mod placement;
pub use placement::{
    CellOccupancyMatrix, CellOccupancyState, GridArea, GridPlacementResult, ItemPlacement,
    OriginZeroLine, ResolvedPlacement, TrackCounts, line_to_origin_zero, place_grid_items,
    resolve_placement,
};

// Grid layout algorithm
mod layout;
pub use layout::compute_grid_layout;
