//! CSS Sizing Module - shared sizing rules for every layout context
//!
//! [Spec: CSS Box Sizing Module Level 3](https://www.w3.org/TR/css-sizing-3/)
//!
//! ## Design
//!
//! ```text
//! Style sizes (width/height/min/max, percentages already resolved)
//!   ↓
//! 1. Transfer through aspect-ratio where one axis is missing
//! 2. Transform to border-box (apply box-sizing)
//! 3. Apply min/max constraints (min wins over max)
//!   ↓
//! Border-box sizes (f32 pixels)
//! ```
//!
//! This crate only knows about numbers. It does not see the node tree.

mod available_space;

pub use available_space::{AvailableSize, AvailableSpace};

use css_box::{MaybeMath, Size};
use css_orchestrator::style_model::BoxSizing;
use serde::{Deserialize, Serialize};

//=============================================================================
// Sizing modes
//=============================================================================

/// Whether a node's own style sizes should be honoured when it is measured.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum SizingMode {
    /// Ignore the node's own size styles and size purely from content.
    ContentSize,
    /// Apply the node's size styles (the normal case).
    InherentSize,
}

//=============================================================================
// Box sizing
//=============================================================================

/// Transform a content-box size to border-box based on the box-sizing property.
///
/// [Spec: CSS Box Sizing Level 3 §3 Box Sizing]
///
/// ```text
/// box-sizing: content-box  → border_box = content + padding + border
/// box-sizing: border-box   → border_box = content (already includes padding/border)
/// ```
///
/// ```
/// # use css_sizing::apply_box_sizing;
/// # use css_orchestrator::style_model::BoxSizing;
/// assert_eq!(apply_box_sizing(100.0, BoxSizing::ContentBox, 20.0), 120.0);
/// assert_eq!(apply_box_sizing(100.0, BoxSizing::BorderBox, 20.0), 100.0);
/// ```
#[inline]
pub fn apply_box_sizing(content_size: f32, box_sizing: BoxSizing, padding_border: f32) -> f32 {
    match box_sizing {
        BoxSizing::ContentBox => content_size + padding_border,
        BoxSizing::BorderBox => content_size,
    }
}

/// [`apply_box_sizing`] over both axes of an optional size.
#[inline]
pub fn apply_box_sizing_to_size(
    size: Size<Option<f32>>,
    box_sizing: BoxSizing,
    padding_border: Size<f32>,
) -> Size<Option<f32>> {
    size.zip_map(padding_border, |value, extra| {
        value.map(|inner| apply_box_sizing(inner, box_sizing, extra))
    })
}

//=============================================================================
// Constraints
//=============================================================================

/// Apply min/max constraints to a border-box size.
///
/// [Spec: CSS 2.2 §10.4 Minimum and maximum widths]
///
/// When min exceeds max, min wins.
#[inline]
pub fn apply_constraints(size: f32, min: Option<f32>, max: Option<f32>) -> f32 {
    size.maybe_clamp(min, max)
}

/// If min and max in an axis are both set and `max <= min`, that axis is fully determined.
#[inline]
pub fn min_max_definite_size(
    min_size: Size<Option<f32>>,
    max_size: Size<Option<f32>>,
) -> Size<Option<f32>> {
    min_size.zip_map(max_size, |min, max| match (min, max) {
        (Some(min), Some(max)) if max <= min => Some(min),
        _ => None,
    })
}

//=============================================================================
// Aspect ratio
//=============================================================================

/// Fill a missing axis from the other one through `aspect_ratio` (width / height).
///
/// [Spec: CSS Sizing Level 4 §5 Aspect Ratios](https://www.w3.org/TR/css-sizing-4/#aspect-ratio)
#[inline]
pub fn maybe_apply_aspect_ratio(
    size: Size<Option<f32>>,
    aspect_ratio: Option<f32>,
) -> Size<Option<f32>> {
    match (aspect_ratio, size.width, size.height) {
        (Some(ratio), Some(width), None) => Size {
            width: Some(width),
            height: Some(width / ratio),
        },
        (Some(ratio), None, Some(height)) => Size {
            width: Some(height * ratio),
            height: Some(height),
        },
        _ => size,
    }
}

/// Size of one axis transferred from the other through the aspect ratio.
#[inline]
pub fn transferred_size(
    other_axis_size: Option<f32>,
    aspect_ratio: Option<f32>,
    target_is_width: bool,
) -> Option<f32> {
    let ratio = aspect_ratio?;
    let other = other_axis_size?;
    Some(if target_is_width {
        other * ratio
    } else {
        other / ratio
    })
}

//=============================================================================
// Automatic minimum size
//=============================================================================

/// Content-based automatic minimum size of a flex item.
///
/// [Spec: CSS Flexbox §4.5](https://www.w3.org/TR/css-flexbox-1/#min-size-auto)
///
/// The smaller of the content size suggestion and the specified size suggestion (or, when no
/// size is specified, the transferred size suggestion), capped by the max size.
#[inline]
pub fn automatic_minimum_size(
    content_size_suggestion: f32,
    specified_size_suggestion: Option<f32>,
    transferred_size_suggestion: Option<f32>,
    max_size: Option<f32>,
) -> f32 {
    let suggestion = specified_size_suggestion
        .or(transferred_size_suggestion)
        .map_or(content_size_suggestion, |limit| {
            content_size_suggestion.min(limit)
        });
    suggestion.maybe_min(max_size)
}

//=============================================================================
// Intrinsic Sizing
//=============================================================================

/// Min-content and max-content contributions of something along one axis.
///
/// [Spec: CSS Sizing Level 3 §4 Intrinsic Size Determination]
/// <https://www.w3.org/TR/css-sizing-3/#intrinsic-sizes>
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntrinsicSizes {
    /// Smallest size without overflow.
    pub min_content: f32,
    /// Size given infinite room.
    pub max_content: f32,
}

impl IntrinsicSizes {
    pub const fn zero() -> Self {
        Self {
            min_content: 0.0,
            max_content: 0.0,
        }
    }

    /// Both contributions equal (fixed-size content).
    pub const fn fixed(size: f32) -> Self {
        Self {
            min_content: size,
            max_content: size,
        }
    }

    /// The contribution selected by an intrinsic available-space sentinel.
    pub const fn for_available_space(self, space: AvailableSpace) -> f32 {
        match space {
            AvailableSpace::MinContent => self.min_content,
            AvailableSpace::MaxContent | AvailableSpace::Definite(_) => self.max_content,
        }
    }
}

impl Default for IntrinsicSizes {
    fn default() -> Self {
        Self::zero()
    }
}
