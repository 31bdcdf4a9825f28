//! Style model of the layout engine.
//!
//! Styles arrive already parsed: this crate holds the per-node [`style_model::Style`] record,
//! the grid track and placement values, and the keyed property setter surface embedders use to
//! mutate styles one property at a time.

pub mod grid_model;
pub mod style_model;
pub mod style_property;

pub use grid_model::{
    GridAutoFlow, GridPlacement, MaxTrackSizingFunction, MinTrackSizingFunction,
    NonRepeatedTrackSizingFunction, TrackSizingFunction,
};
pub use style_model::{
    AlignContent, AlignItems, AlignSelf, BoxSizing, Display, FlexDirection, FlexWrap,
    JustifyContent, JustifyItems, JustifySelf, Overflow, Position, Style,
};
pub use style_property::{InvalidUnit, StyleProperty, StylePropertyKey};
