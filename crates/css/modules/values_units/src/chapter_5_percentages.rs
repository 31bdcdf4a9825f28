//! CSS Values & Units Level 3: §5 Percentages
//! Spec: <https://www.w3.org/TR/css-values-3/#percentages>
//!
//! A percentage resolves against a basis chosen by the layout algorithm. When that basis is
//! indefinite the percentage is indefinite too.

use css_box::{Rect, Size};

use crate::{Dimension, LengthPercentage, LengthPercentageAuto};

/// Resolve a value to `Some(px)` when possible, `None` when it stays indefinite.
pub trait MaybeResolve<In, Out> {
    fn maybe_resolve(self, basis: In) -> Out;
}

/// Resolve a value to px, treating anything indefinite as zero.
pub trait ResolveOrZero<In, Out> {
    fn resolve_or_zero(self, basis: In) -> Out;
}

impl MaybeResolve<Option<f32>, Option<f32>> for LengthPercentage {
    #[inline]
    fn maybe_resolve(self, basis: Option<f32>) -> Option<f32> {
        match self {
            Self::Length(length) => Some(length),
            Self::Percent(percent) => basis.map(|dim| dim * percent),
        }
    }
}

impl MaybeResolve<Option<f32>, Option<f32>> for LengthPercentageAuto {
    #[inline]
    fn maybe_resolve(self, basis: Option<f32>) -> Option<f32> {
        match self {
            Self::Length(length) => Some(length),
            Self::Percent(percent) => basis.map(|dim| dim * percent),
            Self::Auto => None,
        }
    }
}

impl MaybeResolve<Option<f32>, Option<f32>> for Dimension {
    #[inline]
    fn maybe_resolve(self, basis: Option<f32>) -> Option<f32> {
        match self {
            Self::Length(length) => Some(length),
            Self::Percent(percent) => basis.map(|dim| dim * percent),
            Self::Auto => None,
        }
    }
}

impl MaybeResolve<f32, Option<f32>> for LengthPercentage {
    #[inline]
    fn maybe_resolve(self, basis: f32) -> Option<f32> {
        self.maybe_resolve(Some(basis))
    }
}

impl MaybeResolve<f32, Option<f32>> for LengthPercentageAuto {
    #[inline]
    fn maybe_resolve(self, basis: f32) -> Option<f32> {
        self.maybe_resolve(Some(basis))
    }
}

impl MaybeResolve<f32, Option<f32>> for Dimension {
    #[inline]
    fn maybe_resolve(self, basis: f32) -> Option<f32> {
        self.maybe_resolve(Some(basis))
    }
}

impl<In, Out, T: MaybeResolve<In, Out>> MaybeResolve<Size<In>, Size<Out>> for Size<T> {
    #[inline]
    fn maybe_resolve(self, basis: Size<In>) -> Size<Out> {
        Size {
            width: self.width.maybe_resolve(basis.width),
            height: self.height.maybe_resolve(basis.height),
        }
    }
}

impl ResolveOrZero<Option<f32>, f32> for LengthPercentage {
    #[inline]
    fn resolve_or_zero(self, basis: Option<f32>) -> f32 {
        self.maybe_resolve(basis).unwrap_or(0.0)
    }
}

impl ResolveOrZero<Option<f32>, f32> for LengthPercentageAuto {
    #[inline]
    fn resolve_or_zero(self, basis: Option<f32>) -> f32 {
        self.maybe_resolve(basis).unwrap_or(0.0)
    }
}

impl ResolveOrZero<Option<f32>, f32> for Dimension {
    #[inline]
    fn resolve_or_zero(self, basis: Option<f32>) -> f32 {
        self.maybe_resolve(basis).unwrap_or(0.0)
    }
}

impl<In, T: ResolveOrZero<In, f32>> ResolveOrZero<Size<In>, Size<f32>> for Size<T> {
    #[inline]
    fn resolve_or_zero(self, basis: Size<In>) -> Size<f32> {
        Size {
            width: self.width.resolve_or_zero(basis.width),
            height: self.height.resolve_or_zero(basis.height),
        }
    }
}

/// Box edges resolve every side against one basis: CSS resolves percentage margins, borders and
/// padding against the containing block's inline size, vertical sides included.
impl<T: ResolveOrZero<Option<f32>, f32>> ResolveOrZero<Option<f32>, Rect<f32>> for Rect<T> {
    #[inline]
    fn resolve_or_zero(self, basis: Option<f32>) -> Rect<f32> {
        Rect {
            left: self.left.resolve_or_zero(basis),
            right: self.right.resolve_or_zero(basis),
            top: self.top.resolve_or_zero(basis),
            bottom: self.bottom.resolve_or_zero(basis),
        }
    }
}
