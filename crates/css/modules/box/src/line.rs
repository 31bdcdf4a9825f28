//! A start/end pair along one axis.

use core::ops::Add;

use serde::{Deserialize, Serialize};

/// The two edges of something along a single axis.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line<T> {
    pub start: T,
    pub end: T,
}

impl Line<bool> {
    pub const FALSE: Self = Self {
        start: false,
        end: false,
    };
}

impl<T> Line<T> {
    /// Apply `func` to both edges.
    #[inline]
    pub fn map<R, F: Fn(T) -> R>(self, func: F) -> Line<R> {
        Line {
            start: func(self.start),
            end: func(self.end),
        }
    }
}

impl<T: Add<Output = T> + Copy> Line<T> {
    /// `start + end`
    #[inline]
    pub fn sum(&self) -> T {
        self.start + self.end
    }
}
