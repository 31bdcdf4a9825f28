//! CSS Box Model Module Level 3: geometry shared by every formatting context.
//! Spec: <https://www.w3.org/TR/css-box-3/>
//!
//! Layout code is written in terms of a main and a cross axis. The types here only know about
//! physical axes; the flex and grid crates pick which physical axis is "main" and project through
//! [`Size::main`]/[`Size::cross`] and friends.

mod axis;
mod line;
mod maybe_math;
mod point;
mod rect;
mod size;

pub use axis::{AbsoluteAxis, AbstractAxis, InBothAbsAxis};
pub use line::Line;
pub use maybe_math::MaybeMath;
pub use point::Point;
pub use rect::Rect;
pub use size::Size;
