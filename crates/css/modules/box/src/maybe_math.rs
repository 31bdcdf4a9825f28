//! Arithmetic where either side may be indefinite.
//!
//! `None` stands for an indefinite size. Operations against `None` leave the other operand
//! untouched, so `Some(x).maybe_min(None) == Some(x)` and `None.maybe_add(x) == None`.

use crate::Size;

/// Min/max/clamp/add/sub where operands may be `Option<f32>`.
pub trait MaybeMath<In, Out> {
    fn maybe_min(self, rhs: In) -> Out;
    fn maybe_max(self, rhs: In) -> Out;
    fn maybe_clamp(self, min: In, max: In) -> Out;
    fn maybe_add(self, rhs: In) -> Out;
    fn maybe_sub(self, rhs: In) -> Out;
}

impl MaybeMath<Self, Self> for Option<f32> {
    fn maybe_min(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Some(lhs), Some(rhs)) => Some(lhs.min(rhs)),
            (Some(lhs), None) => Some(lhs),
            (None, _) => None,
        }
    }

    fn maybe_max(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Some(lhs), Some(rhs)) => Some(lhs.max(rhs)),
            (Some(lhs), None) => Some(lhs),
            (None, _) => None,
        }
    }

    fn maybe_clamp(self, min: Self, max: Self) -> Self {
        // min wins over max when they conflict (CSS 2.1 §10.4)
        self.maybe_min(max).maybe_max(min)
    }

    fn maybe_add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Some(lhs), Some(rhs)) => Some(lhs + rhs),
            (Some(lhs), None) => Some(lhs),
            (None, _) => None,
        }
    }

    fn maybe_sub(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Some(lhs), Some(rhs)) => Some(lhs - rhs),
            (Some(lhs), None) => Some(lhs),
            (None, _) => None,
        }
    }
}

impl MaybeMath<f32, Self> for Option<f32> {
    fn maybe_min(self, rhs: f32) -> Self {
        self.map(|val| val.min(rhs))
    }

    fn maybe_max(self, rhs: f32) -> Self {
        self.map(|val| val.max(rhs))
    }

    fn maybe_clamp(self, min: f32, max: f32) -> Self {
        self.map(|val| val.min(max).max(min))
    }

    fn maybe_add(self, rhs: f32) -> Self {
        self.map(|val| val + rhs)
    }

    fn maybe_sub(self, rhs: f32) -> Self {
        self.map(|val| val - rhs)
    }
}

impl MaybeMath<Option<Self>, Self> for f32 {
    fn maybe_min(self, rhs: Option<Self>) -> Self {
        rhs.map_or(self, |val| self.min(val))
    }

    fn maybe_max(self, rhs: Option<Self>) -> Self {
        rhs.map_or(self, |val| self.max(val))
    }

    fn maybe_clamp(self, min: Option<Self>, max: Option<Self>) -> Self {
        self.maybe_min(max).maybe_max(min)
    }

    fn maybe_add(self, rhs: Option<Self>) -> Self {
        rhs.map_or(self, |val| self + val)
    }

    fn maybe_sub(self, rhs: Option<Self>) -> Self {
        rhs.map_or(self, |val| self - val)
    }
}

impl<In, Out, T: MaybeMath<In, Out>> MaybeMath<Size<In>, Size<Out>> for Size<T> {
    fn maybe_min(self, rhs: Size<In>) -> Size<Out> {
        Size {
            width: self.width.maybe_min(rhs.width),
            height: self.height.maybe_min(rhs.height),
        }
    }

    fn maybe_max(self, rhs: Size<In>) -> Size<Out> {
        Size {
            width: self.width.maybe_max(rhs.width),
            height: self.height.maybe_max(rhs.height),
        }
    }

    fn maybe_clamp(self, min: Size<In>, max: Size<In>) -> Size<Out> {
        Size {
            width: self.width.maybe_clamp(min.width, max.width),
            height: self.height.maybe_clamp(min.height, max.height),
        }
    }

    fn maybe_add(self, rhs: Size<In>) -> Size<Out> {
        Size {
            width: self.width.maybe_add(rhs.width),
            height: self.height.maybe_add(rhs.height),
        }
    }

    fn maybe_sub(self, rhs: Size<In>) -> Size<Out> {
        Size {
            width: self.width.maybe_sub(rhs.width),
            height: self.height.maybe_sub(rhs.height),
        }
    }
}
