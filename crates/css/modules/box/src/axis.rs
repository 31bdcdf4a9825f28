//! Physical and logical axes.

use serde::{Deserialize, Serialize};

use crate::{Point, Size};

/// A physical axis.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AbsoluteAxis {
    /// The x axis.
    Horizontal,
    /// The y axis.
    Vertical,
}

impl AbsoluteAxis {
    /// The perpendicular axis.
    #[inline]
    #[must_use]
    pub const fn other_axis(self) -> Self {
        match self {
            Self::Horizontal => Self::Vertical,
            Self::Vertical => Self::Horizontal,
        }
    }

    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Horizontal)
    }
}

/// A logical axis in a horizontal-tb writing mode.
///
/// Grid uses these names: the inline axis holds the columns, the block axis the rows.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AbstractAxis {
    Inline,
    Block,
}

impl AbstractAxis {
    #[inline]
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Inline => Self::Block,
            Self::Block => Self::Inline,
        }
    }

    /// The physical axis this logical axis maps to.
    #[inline]
    pub const fn as_abs(self) -> AbsoluteAxis {
        match self {
            Self::Inline => AbsoluteAxis::Horizontal,
            Self::Block => AbsoluteAxis::Vertical,
        }
    }
}

/// A pair of values, one per physical axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InBothAbsAxis<T> {
    pub horizontal: T,
    pub vertical: T,
}

impl<T: Copy> InBothAbsAxis<T> {
    #[inline]
    pub const fn get(&self, axis: AbsoluteAxis) -> T {
        match axis {
            AbsoluteAxis::Horizontal => self.horizontal,
            AbsoluteAxis::Vertical => self.vertical,
        }
    }
}

impl<T> From<Size<T>> for InBothAbsAxis<T> {
    fn from(size: Size<T>) -> Self {
        Self {
            horizontal: size.width,
            vertical: size.height,
        }
    }
}

impl<T> From<Point<T>> for InBothAbsAxis<T> {
    fn from(point: Point<T>) -> Self {
        Self {
            horizontal: point.x,
            vertical: point.y,
        }
    }
}
