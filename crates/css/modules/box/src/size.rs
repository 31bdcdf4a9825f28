//! Two-dimensional sizes and the main/cross projection.

use core::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use crate::AbsoluteAxis;

/// A width and a height.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size<T> {
    pub width: T,
    pub height: T,
}

impl Size<f32> {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Component-wise maximum.
    #[inline]
    #[must_use]
    pub fn f32_max(self, rhs: Self) -> Self {
        Self {
            width: self.width.max(rhs.width),
            height: self.height.max(rhs.height),
        }
    }

    /// Component-wise minimum.
    #[inline]
    #[must_use]
    pub fn f32_min(self, rhs: Self) -> Self {
        Self {
            width: self.width.min(rhs.width),
            height: self.height.min(rhs.height),
        }
    }

    /// Whether both components are finite and not NaN.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.width.is_finite() && self.height.is_finite()
    }
}

impl Size<Option<f32>> {
    pub const NONE: Self = Self {
        width: None,
        height: None,
    };

    #[inline]
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width: Some(width),
            height: Some(height),
        }
    }

    /// Per axis: keep `self` when set, otherwise take `fallback`.
    #[inline]
    #[must_use]
    pub fn or(self, fallback: Self) -> Self {
        Self {
            width: self.width.or(fallback.width),
            height: self.height.or(fallback.height),
        }
    }

    #[inline]
    pub fn unwrap_or(self, fallback: Size<f32>) -> Size<f32> {
        Size {
            width: self.width.unwrap_or(fallback.width),
            height: self.height.unwrap_or(fallback.height),
        }
    }

    #[inline]
    pub const fn both_axis_defined(&self) -> bool {
        self.width.is_some() && self.height.is_some()
    }
}

impl<T> Size<T> {
    #[inline]
    pub fn map<R, F: Fn(T) -> R>(self, func: F) -> Size<R> {
        Size {
            width: func(self.width),
            height: func(self.height),
        }
    }

    /// Combine two sizes axis by axis.
    #[inline]
    pub fn zip_map<Other, Ret, F: Fn(T, Other) -> Ret>(self, other: Size<Other>, func: F) -> Size<Ret> {
        Size {
            width: func(self.width, other.width),
            height: func(self.height, other.height),
        }
    }
}

impl<T: Copy> Size<T> {
    #[inline]
    pub const fn get(&self, axis: AbsoluteAxis) -> T {
        match axis {
            AbsoluteAxis::Horizontal => self.width,
            AbsoluteAxis::Vertical => self.height,
        }
    }

    #[inline]
    pub fn set(&mut self, axis: AbsoluteAxis, value: T) {
        match axis {
            AbsoluteAxis::Horizontal => self.width = value,
            AbsoluteAxis::Vertical => self.height = value,
        }
    }

    /// The component along `main_axis`.
    #[inline]
    pub const fn main(&self, main_axis: AbsoluteAxis) -> T {
        self.get(main_axis)
    }

    /// The component perpendicular to `main_axis`.
    #[inline]
    pub const fn cross(&self, main_axis: AbsoluteAxis) -> T {
        self.get(main_axis.other_axis())
    }

    #[inline]
    pub fn set_main(&mut self, main_axis: AbsoluteAxis, value: T) {
        self.set(main_axis, value);
    }

    #[inline]
    pub fn set_cross(&mut self, main_axis: AbsoluteAxis, value: T) {
        self.set(main_axis.other_axis(), value);
    }

    /// Copy of `self` with the main component replaced.
    #[inline]
    #[must_use]
    pub fn with_main(mut self, main_axis: AbsoluteAxis, value: T) -> Self {
        self.set(main_axis, value);
        self
    }

    /// Copy of `self` with the cross component replaced.
    #[inline]
    #[must_use]
    pub fn with_cross(mut self, main_axis: AbsoluteAxis, value: T) -> Self {
        self.set(main_axis.other_axis(), value);
        self
    }

    /// Reverse projection from main/cross space.
    #[inline]
    pub const fn from_main_cross(main_axis: AbsoluteAxis, main: T, cross: T) -> Self {
        match main_axis {
            AbsoluteAxis::Horizontal => Self {
                width: main,
                height: cross,
            },
            AbsoluteAxis::Vertical => Self {
                width: cross,
                height: main,
            },
        }
    }
}

impl<T: Add<Output = T>> Add for Size<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            width: self.width + rhs.width,
            height: self.height + rhs.height,
        }
    }
}

impl<T: Sub<Output = T>> Sub for Size<T> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            width: self.width - rhs.width,
            height: self.height - rhs.height,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if main/cross projection does not follow the chosen main axis.
    fn main_cross_projection_round_trips_through_both_axes() {
        let size = Size {
            width: 10.0f32,
            height: 20.0f32,
        };
        assert_eq!(size.main(AbsoluteAxis::Horizontal), 10.0);
        assert_eq!(size.cross(AbsoluteAxis::Horizontal), 20.0);
        assert_eq!(size.main(AbsoluteAxis::Vertical), 20.0);
        assert_eq!(size.cross(AbsoluteAxis::Vertical), 10.0);
        let rebuilt = Size::from_main_cross(AbsoluteAxis::Vertical, 20.0f32, 10.0f32);
        assert_eq!(rebuilt, size);
    }

    #[test]
    /// # Panics
    /// Panics if `or` does not prefer the receiver's defined components.
    fn or_keeps_defined_components() {
        let partial = Size {
            width: Some(5.0f32),
            height: None,
        };
        let merged = partial.or(Size::new(1.0, 2.0));
        assert_eq!(merged, Size::new(5.0, 2.0));
    }
}
