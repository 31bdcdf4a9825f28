//! Available space: the constraint a parent hands to a child along one axis.
//!
//! [Spec: CSS Sizing Level 3 §2.1 Available Space](https://www.w3.org/TR/css-sizing-3/#available)

use css_box::{MaybeMath, Size};
use serde::{Deserialize, Serialize};

/// How much room a node is offered along one axis.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AvailableSpace {
    /// "What size do you take if offered exactly this much?"
    Definite(f32),
    /// "What is the smallest size that avoids overflow?"
    MinContent,
    /// "What size do you take given infinite room?"
    MaxContent,
}

impl AvailableSpace {
    pub const ZERO: Self = Self::Definite(0.0);

    #[inline]
    pub const fn is_definite(self) -> bool {
        matches!(self, Self::Definite(_))
    }

    /// The definite value, if any.
    #[inline]
    pub const fn into_option(self) -> Option<f32> {
        match self {
            Self::Definite(value) => Some(value),
            Self::MinContent | Self::MaxContent => None,
        }
    }

    #[inline]
    pub fn unwrap_or(self, fallback: f32) -> f32 {
        self.into_option().unwrap_or(fallback)
    }

    /// A known size always wins over the available space.
    #[inline]
    #[must_use]
    pub fn maybe_set(self, known: Option<f32>) -> Self {
        known.map_or(self, Self::Definite)
    }

    #[inline]
    #[must_use]
    pub fn map_definite_value(self, func: impl FnOnce(f32) -> f32) -> Self {
        match self {
            Self::Definite(value) => Self::Definite(func(value)),
            other => other,
        }
    }

    /// Space left after `used_space`: infinite under max-content, nothing under min-content.
    #[inline]
    pub fn compute_free_space(self, used_space: f32) -> f32 {
        match self {
            Self::MaxContent => f32::INFINITY,
            Self::MinContent => 0.0,
            Self::Definite(available) => available - used_space,
        }
    }

    /// Equality with a tolerance for definite values; used for cache matching.
    #[inline]
    pub fn is_roughly_equal(self, other: Self) -> bool {
        match (self, other) {
            (Self::Definite(lhs), Self::Definite(rhs)) => (lhs - rhs).abs() < f32::EPSILON,
            (Self::MinContent, Self::MinContent) | (Self::MaxContent, Self::MaxContent) => true,
            _ => false,
        }
    }
}

impl From<f32> for AvailableSpace {
    fn from(value: f32) -> Self {
        Self::Definite(value)
    }
}

impl From<Option<f32>> for AvailableSpace {
    fn from(option: Option<f32>) -> Self {
        option.map_or(Self::MaxContent, Self::Definite)
    }
}

impl MaybeMath<f32, Self> for AvailableSpace {
    fn maybe_min(self, rhs: f32) -> Self {
        match self {
            Self::Definite(value) => Self::Definite(value.min(rhs)),
            Self::MinContent | Self::MaxContent => Self::Definite(rhs),
        }
    }

    fn maybe_max(self, rhs: f32) -> Self {
        self.map_definite_value(|value| value.max(rhs))
    }

    fn maybe_clamp(self, min: f32, max: f32) -> Self {
        self.map_definite_value(|value| value.min(max).max(min))
    }

    fn maybe_add(self, rhs: f32) -> Self {
        self.map_definite_value(|value| value + rhs)
    }

    fn maybe_sub(self, rhs: f32) -> Self {
        self.map_definite_value(|value| value - rhs)
    }
}

impl MaybeMath<Option<f32>, Self> for AvailableSpace {
    fn maybe_min(self, rhs: Option<f32>) -> Self {
        match (self, rhs) {
            (Self::Definite(value), Some(rhs)) => Self::Definite(value.min(rhs)),
            (Self::MinContent | Self::MaxContent, Some(rhs)) => Self::Definite(rhs),
            (other, None) => other,
        }
    }

    fn maybe_max(self, rhs: Option<f32>) -> Self {
        match (self, rhs) {
            (Self::Definite(value), Some(rhs)) => Self::Definite(value.max(rhs)),
            (other, _) => other,
        }
    }

    fn maybe_clamp(self, min: Option<f32>, max: Option<f32>) -> Self {
        match self {
            Self::Definite(value) => Self::Definite(value.maybe_clamp(min, max)),
            other => other,
        }
    }

    fn maybe_add(self, rhs: Option<f32>) -> Self {
        match (self, rhs) {
            (Self::Definite(value), Some(rhs)) => Self::Definite(value + rhs),
            (other, _) => other,
        }
    }

    fn maybe_sub(self, rhs: Option<f32>) -> Self {
        match (self, rhs) {
            (Self::Definite(value), Some(rhs)) => Self::Definite(value - rhs),
            (other, _) => other,
        }
    }
}

/// Helpers on a pair of available spaces.
pub trait AvailableSize {
    /// Definite values per axis.
    fn into_options(self) -> Size<Option<f32>>;
    /// Known sizes override the available space axis by axis.
    #[must_use]
    fn maybe_set(self, known: Size<Option<f32>>) -> Self;
}

impl AvailableSize for Size<AvailableSpace> {
    fn into_options(self) -> Size<Option<f32>> {
        self.map(AvailableSpace::into_option)
    }

    fn maybe_set(self, known: Size<Option<f32>>) -> Self {
        self.zip_map(known, AvailableSpace::maybe_set)
    }
}
