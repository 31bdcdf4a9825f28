//! Box layout for embedders that bring their own styles.
//!
//! A [`LayoutTree`] owns every node: its [`Style`], its children, an optional measure function for
//! content the engine cannot see (text, images), the measurement cache and the final [`Layout`].
//! Nodes are addressed by generation-tagged [`NodeId`] handles that go stale once the node is
//! removed.
//!
//! ```text
//! new_leaf / new_with_children ──▶ set_style / set_style_value / set_property ──▶ compute_layout
//!                                        │ (marks node and ancestors dirty)            │
//!                                        ▼                                             ▼
//!                                   is_dirty == true                         layout(node) / LayoutView
//! ```
//!
//! `compute_layout` dispatches on `display`: block, flex and grid containers run their formatting
//! context from the `css_*` crates, childless nodes and nodes with a measure function are sized
//! as leaves, and `display: none` subtrees collapse to zero.

mod compute;
mod config;
mod error;
mod measure;
mod round;
mod tree;
mod view;

pub use config::{LayoutConfig, MeasureErrorPolicy};
pub use error::{LayoutError, LayoutResult};
pub use measure::{MeasureFn, MeasureFunction};
pub use tree::LayoutTree;
pub use view::LayoutView;

pub use css_box::{Line, Point, Rect, Size};
pub use css_core::{AvailableSpace, Layout, NodeId};
pub use css_orchestrator::{
    AlignContent, AlignItems, AlignSelf, BoxSizing, Display, FlexDirection, FlexWrap,
    GridAutoFlow, GridPlacement, JustifyContent, JustifyItems, JustifySelf,
    MaxTrackSizingFunction, MinTrackSizingFunction, NonRepeatedTrackSizingFunction, Overflow,
    Position, Style, StyleProperty, StylePropertyKey, TrackSizingFunction,
};
pub use css_values_units::{
    Dimension, LengthPercentage, LengthPercentageAuto, StyleUnit, StyleValue,
};
