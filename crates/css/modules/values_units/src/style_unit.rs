//! The `(value, unit)` pair embedders use to hand over lengths.
//!
//! Every keyed style property accepts a subset of units; converting a pair into the typed value of
//! a property fails with [`UnitMismatch`] when the unit is outside that subset.

use serde::{Deserialize, Serialize};

use crate::{Dimension, LengthPercentage, LengthPercentageAuto};

/// Unit tag of a [`StyleValue`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum StyleUnit {
    Px,
    /// Fraction of the percentage basis (`0.5` is `50%`).
    Percent,
    Auto,
    MinContent,
    MaxContent,
    FitContentPx,
    FitContentPercent,
    Fr,
}

impl StyleUnit {
    /// Whether the `value` half of the pair carries meaning for this unit.
    #[inline]
    pub const fn has_value(self) -> bool {
        matches!(
            self,
            Self::Px | Self::Percent | Self::FitContentPx | Self::FitContentPercent | Self::Fr
        )
    }
}

impl TryFrom<u8> for StyleUnit {
    type Error = u8;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Px),
            1 => Ok(Self::Percent),
            2 => Ok(Self::Auto),
            3 => Ok(Self::MinContent),
            4 => Ok(Self::MaxContent),
            5 => Ok(Self::FitContentPx),
            6 => Ok(Self::FitContentPercent),
            7 => Ok(Self::Fr),
            other => Err(other),
        }
    }
}

/// A length as a `(value, unit)` pair.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StyleValue {
    pub value: f32,
    pub unit: StyleUnit,
}

impl StyleValue {
    #[inline]
    pub const fn new(value: f32, unit: StyleUnit) -> Self {
        Self { value, unit }
    }

    #[inline]
    pub const fn px(value: f32) -> Self {
        Self::new(value, StyleUnit::Px)
    }

    #[inline]
    pub const fn percent(value: f32) -> Self {
        Self::new(value, StyleUnit::Percent)
    }

    #[inline]
    pub const fn auto() -> Self {
        Self::new(0.0, StyleUnit::Auto)
    }
}

/// A unit that the target property does not accept.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct UnitMismatch(pub StyleUnit);

impl TryFrom<StyleValue> for LengthPercentage {
    type Error = UnitMismatch;

    fn try_from(pair: StyleValue) -> Result<Self, Self::Error> {
        match pair.unit {
            StyleUnit::Px => Ok(Self::Length(pair.value)),
            StyleUnit::Percent => Ok(Self::Percent(pair.value)),
            other => Err(UnitMismatch(other)),
        }
    }
}

impl TryFrom<StyleValue> for LengthPercentageAuto {
    type Error = UnitMismatch;

    fn try_from(pair: StyleValue) -> Result<Self, Self::Error> {
        match pair.unit {
            StyleUnit::Px => Ok(Self::Length(pair.value)),
            StyleUnit::Percent => Ok(Self::Percent(pair.value)),
            StyleUnit::Auto => Ok(Self::Auto),
            other => Err(UnitMismatch(other)),
        }
    }
}

impl TryFrom<StyleValue> for Dimension {
    type Error = UnitMismatch;

    fn try_from(pair: StyleValue) -> Result<Self, Self::Error> {
        match pair.unit {
            StyleUnit::Px => Ok(Self::Length(pair.value)),
            StyleUnit::Percent => Ok(Self::Percent(pair.value)),
            StyleUnit::Auto => Ok(Self::Auto),
            other => Err(UnitMismatch(other)),
        }
    }
}

impl From<Dimension> for StyleValue {
    fn from(value: Dimension) -> Self {
        match value {
            Dimension::Length(length) => Self::px(length),
            Dimension::Percent(percent) => Self::percent(percent),
            Dimension::Auto => Self::auto(),
        }
    }
}
