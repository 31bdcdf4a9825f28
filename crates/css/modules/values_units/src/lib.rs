//! CSS Values and Units Module Level 3: the length value space used by layout.
//! Spec: <https://www.w3.org/TR/css-values-3/>
//!
//! Styles arrive already parsed; this crate only models the values and resolves them.

#![forbid(unsafe_code)]

// Per-chapter modules mirroring the spec table of contents.
pub mod chapter_4_numbers;
pub mod chapter_5_percentages;
pub mod chapter_6_dimensions;
pub mod style_unit;

pub use chapter_4_numbers::{NumericIssue, Sanitized, sanitize_number};
pub use chapter_5_percentages::{MaybeResolve, ResolveOrZero};
pub use chapter_6_dimensions::{Dimension, LengthPercentage, LengthPercentageAuto};
pub use style_unit::{StyleUnit, StyleValue, UnitMismatch};
