//! Two-dimensional positions.

use core::ops::Add;

use serde::{Deserialize, Serialize};

use crate::AbsoluteAxis;

/// A position in 2D space.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl Point<f32> {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };
}

impl Point<Option<f32>> {
    pub const NONE: Self = Self { x: None, y: None };
}

impl<T> Point<T> {
    #[inline]
    pub fn map<R, F: Fn(T) -> R>(self, func: F) -> Point<R> {
        Point {
            x: func(self.x),
            y: func(self.y),
        }
    }

    /// Swap the two components.
    #[inline]
    #[must_use]
    pub fn transpose(self) -> Self {
        Self {
            x: self.y,
            y: self.x,
        }
    }
}

impl<T: Copy> Point<T> {
    #[inline]
    pub const fn get(&self, axis: AbsoluteAxis) -> T {
        match axis {
            AbsoluteAxis::Horizontal => self.x,
            AbsoluteAxis::Vertical => self.y,
        }
    }

    #[inline]
    pub fn set(&mut self, axis: AbsoluteAxis, value: T) {
        match axis {
            AbsoluteAxis::Horizontal => self.x = value,
            AbsoluteAxis::Vertical => self.y = value,
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

    /// Build a point from main/cross components.
    #[inline]
    pub const fn from_main_cross(main_axis: AbsoluteAxis, main: T, cross: T) -> Self {
        match main_axis {
            AbsoluteAxis::Horizontal => Self { x: main, y: cross },
            AbsoluteAxis::Vertical => Self { x: cross, y: main },
        }
    }
}

impl<T: Add<Output = T>> Add for Point<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}
