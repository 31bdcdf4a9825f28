//! CSS Positioned Layout Module Level 3: relative offsets and absolutely positioned boxes.
//! Spec: <https://www.w3.org/TR/css-position-3/>
//!
//! Every formatting context lays out its in-flow children first, then hands each
//! `position: absolute` child to [`layout_absolute_child`] with the box its insets refer to.

#[path = "part_3_4_relative_positioning.rs"]
mod relative;

#[path = "part_4_absolute_positioning.rs"]
mod absolute;

pub use absolute::{AbsoluteContext, layout_absolute_child};
pub use relative::relative_offset;
