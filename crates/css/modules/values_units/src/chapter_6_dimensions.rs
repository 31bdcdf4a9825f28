//! CSS Values & Units Level 3: §6 Dimensions
//! Spec: <https://www.w3.org/TR/css-values-3/#lengths>
//!
//! Percentages are stored as fractions: `Percent(0.5)` is `50%`.

use serde::{Deserialize, Serialize};

use crate::chapter_4_numbers::{Sanitized, sanitize_number};

/// `<length-percentage>`: padding, border widths, gaps.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LengthPercentage {
    Length(f32),
    Percent(f32),
}

/// `<length-percentage> | auto`: margins and insets.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum LengthPercentageAuto {
    Length(f32),
    Percent(f32),
    Auto,
}

/// `<length-percentage> | auto` for box sizes and `flex-basis`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Dimension {
    Length(f32),
    Percent(f32),
    Auto,
}

impl LengthPercentage {
    pub const ZERO: Self = Self::Length(0.0);

    /// Sanitise the numeric payload (see [`sanitize_number`]).
    #[must_use]
    pub fn sanitized(self, allow_negative: bool) -> (Self, Option<crate::NumericIssue>) {
        match self {
            Self::Length(value) => {
                let Sanitized { value, issue } = sanitize_number(value, allow_negative);
                (Self::Length(value), issue)
            }
            Self::Percent(value) => {
                let Sanitized { value, issue } = sanitize_number(value, allow_negative);
                (Self::Percent(value), issue)
            }
        }
    }
}

impl LengthPercentageAuto {
    pub const ZERO: Self = Self::Length(0.0);

    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    #[must_use]
    pub fn sanitized(self, allow_negative: bool) -> (Self, Option<crate::NumericIssue>) {
        match self {
            Self::Length(value) => {
                let Sanitized { value, issue } = sanitize_number(value, allow_negative);
                (Self::Length(value), issue)
            }
            Self::Percent(value) => {
                let Sanitized { value, issue } = sanitize_number(value, allow_negative);
                (Self::Percent(value), issue)
            }
            Self::Auto => (Self::Auto, None),
        }
    }
}

impl Dimension {
    pub const ZERO: Self = Self::Length(0.0);

    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Whether the value can be resolved without a percentage basis.
    #[inline]
    pub const fn is_absolute(self) -> bool {
        matches!(self, Self::Length(_))
    }

    #[must_use]
    pub fn sanitized(self, allow_negative: bool) -> (Self, Option<crate::NumericIssue>) {
        match self {
            Self::Length(value) => {
                let Sanitized { value, issue } = sanitize_number(value, allow_negative);
                (Self::Length(value), issue)
            }
            Self::Percent(value) => {
                let Sanitized { value, issue } = sanitize_number(value, allow_negative);
                (Self::Percent(value), issue)
            }
            Self::Auto => (Self::Auto, None),
        }
    }
}

impl Default for LengthPercentage {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Default for LengthPercentageAuto {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Default for Dimension {
    fn default() -> Self {
        Self::Auto
    }
}

impl From<LengthPercentage> for LengthPercentageAuto {
    fn from(value: LengthPercentage) -> Self {
        match value {
            LengthPercentage::Length(length) => Self::Length(length),
            LengthPercentage::Percent(percent) => Self::Percent(percent),
        }
    }
}

impl From<LengthPercentage> for Dimension {
    fn from(value: LengthPercentage) -> Self {
        match value {
            LengthPercentage::Length(length) => Self::Length(length),
            LengthPercentage::Percent(percent) => Self::Percent(percent),
        }
    }
}

impl From<LengthPercentageAuto> for Dimension {
    fn from(value: LengthPercentageAuto) -> Self {
        match value {
            LengthPercentageAuto::Length(length) => Self::Length(length),
            LengthPercentageAuto::Percent(percent) => Self::Percent(percent),
            LengthPercentageAuto::Auto => Self::Auto,
        }
    }
}
