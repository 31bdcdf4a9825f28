//! Four-sided edges (margin, border, padding, inset).

use core::ops::Add;

use serde::{Deserialize, Serialize};

use crate::{AbsoluteAxis, Line, Size};

/// Values for each edge of a box.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect<T> {
    pub left: T,
    pub right: T,
    pub top: T,
    pub bottom: T,
}

impl Rect<f32> {
    pub const ZERO: Self = Self {
        left: 0.0,
        right: 0.0,
        top: 0.0,
        bottom: 0.0,
    };
}

impl<T> Rect<T> {
    #[inline]
    pub fn map<R, F: Fn(T) -> R>(self, func: F) -> Rect<R> {
        Rect {
            left: func(self.left),
            right: func(self.right),
            top: func(self.top),
            bottom: func(self.bottom),
        }
    }

    /// Combine each edge with the size component of its axis: left/right take the width,
    /// top/bottom take the height.
    #[inline]
    pub fn zip_size<U: Copy, R, F: Fn(T, U) -> R>(self, size: Size<U>, func: F) -> Rect<R> {
        Rect {
            left: func(self.left, size.width),
            right: func(self.right, size.width),
            top: func(self.top, size.height),
            bottom: func(self.bottom, size.height),
        }
    }
}

impl<T: Copy> Rect<T> {
    #[inline]
    pub const fn horizontal_components(&self) -> Line<T> {
        Line {
            start: self.left,
            end: self.right,
        }
    }

    #[inline]
    pub const fn vertical_components(&self) -> Line<T> {
        Line {
            start: self.top,
            end: self.bottom,
        }
    }

    /// Start/end edges along `axis`.
    #[inline]
    pub const fn axis_components(&self, axis: AbsoluteAxis) -> Line<T> {
        match axis {
            AbsoluteAxis::Horizontal => self.horizontal_components(),
            AbsoluteAxis::Vertical => self.vertical_components(),
        }
    }

    #[inline]
    pub const fn main_start(&self, main_axis: AbsoluteAxis) -> T {
        self.axis_components(main_axis).start
    }

    #[inline]
    pub const fn main_end(&self, main_axis: AbsoluteAxis) -> T {
        self.axis_components(main_axis).end
    }

    #[inline]
    pub const fn cross_start(&self, main_axis: AbsoluteAxis) -> T {
        self.axis_components(main_axis.other_axis()).start
    }

    #[inline]
    pub const fn cross_end(&self, main_axis: AbsoluteAxis) -> T {
        self.axis_components(main_axis.other_axis()).end
    }
}

impl<T: Add<Output = T> + Copy> Rect<T> {
    #[inline]
    pub fn horizontal_axis_sum(&self) -> T {
        self.left + self.right
    }

    #[inline]
    pub fn vertical_axis_sum(&self) -> T {
        self.top + self.bottom
    }

    /// Total extent of the edges per axis.
    #[inline]
    pub fn sum_axes(&self) -> Size<T> {
        Size {
            width: self.horizontal_axis_sum(),
            height: self.vertical_axis_sum(),
        }
    }

    #[inline]
    pub fn axis_sum(&self, axis: AbsoluteAxis) -> T {
        match axis {
            AbsoluteAxis::Horizontal => self.horizontal_axis_sum(),
            AbsoluteAxis::Vertical => self.vertical_axis_sum(),
        }
    }

    #[inline]
    pub fn main_axis_sum(&self, main_axis: AbsoluteAxis) -> T {
        self.axis_sum(main_axis)
    }

    #[inline]
    pub fn cross_axis_sum(&self, main_axis: AbsoluteAxis) -> T {
        self.axis_sum(main_axis.other_axis())
    }
}

impl<T: Add<Output = T>> Add for Rect<T> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            left: self.left + rhs.left,
            right: self.right + rhs.right,
            top: self.top + rhs.top,
            bottom: self.bottom + rhs.bottom,
        }
    }
}
