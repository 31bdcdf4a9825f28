//! Measure functions: sizing for content only the embedder understands.
//!
//! A measure function receives the content-box sizes that are already known and the content-box
//! space on offer, and returns the content size it wants. Padding and border are added by the
//! leaf algorithm afterwards.

use core::fmt;

use css_box::Size;
use css_core::{AvailableSpace, NodeId};
use log::warn;

/// A plain function pointer measure function.
pub type MeasureFn = fn(Size<Option<f32>>, Size<AvailableSpace>) -> anyhow::Result<Size<f32>>;

type BoxedMeasure =
    Box<dyn Fn(Size<Option<f32>>, Size<AvailableSpace>) -> anyhow::Result<Size<f32>> + Send + Sync>;

/// Measure function attached to a node.
///
/// Closures carry the embedder's context (a text buffer, an image size) by capture.
pub enum MeasureFunction {
    Raw(MeasureFn),
    Boxed(BoxedMeasure),
}

impl MeasureFunction {
    /// Wrap a closure.
    pub fn boxed<Measure>(measure: Measure) -> Self
    where
        Measure: Fn(Size<Option<f32>>, Size<AvailableSpace>) -> anyhow::Result<Size<f32>>
            + Send
            + Sync
            + 'static,
    {
        Self::Boxed(Box::new(measure))
    }

    /// # Errors
    /// Returns whatever error the embedder's function returns.
    #[inline]
    pub fn measure(
        &self,
        known_dimensions: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
    ) -> anyhow::Result<Size<f32>> {
        match self {
            Self::Raw(measure) => measure(known_dimensions, available_space),
            Self::Boxed(measure) => measure(known_dimensions, available_space),
        }
    }
}

impl From<MeasureFn> for MeasureFunction {
    fn from(measure: MeasureFn) -> Self {
        Self::Raw(measure)
    }
}

impl fmt::Debug for MeasureFunction {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Raw(_) => formatter.write_str("MeasureFunction::Raw"),
            Self::Boxed(_) => formatter.write_str("MeasureFunction::Boxed"),
        }
    }
}

/// Clamp NaN, infinite and negative components of a measured size to zero.
pub(crate) fn sanitize_measured(node: NodeId, measured: Size<f32>) -> Size<f32> {
    let clamp = |value: f32| if value.is_finite() && value >= 0.0 { value } else { 0.0 };
    let sanitized = measured.map(clamp);
    if sanitized != measured {
        warn!(
            target: "boxflow::measure",
            "[MEASURE] node={node} returned {measured:?}, clamped to {sanitized:?}"
        );
    }
    sanitized
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(
        _known: Size<Option<f32>>,
        _available: Size<AvailableSpace>,
    ) -> anyhow::Result<Size<f32>> {
        Ok(Size {
            width: 12.0,
            height: 3.0,
        })
    }

    #[test]
    /// # Panics
    /// Panics if either function form does not forward its result.
    fn raw_and_boxed_forms_measure() {
        let available = Size {
            width: AvailableSpace::MaxContent,
            height: AvailableSpace::MaxContent,
        };
        let raw = MeasureFunction::from(fixed as MeasureFn);
        assert_eq!(raw.measure(Size::NONE, available).ok(), Some(Size { width: 12.0, height: 3.0 }));

        let text_width = 42.0_f32;
        let boxed = MeasureFunction::boxed(move |known, _available| {
            Ok(Size {
                width: known.width.unwrap_or(text_width),
                height: 10.0,
            })
        });
        let measured = boxed.measure(Size::NONE, available).ok();
        assert_eq!(measured.map(|size| size.width), Some(42.0));
    }

    #[test]
    /// # Panics
    /// Panics if invalid components survive sanitisation.
    fn invalid_measurements_are_clamped() {
        let node = NodeId::new(0, 0);
        let sanitized = sanitize_measured(
            node,
            Size {
                width: f32::NAN,
                height: -4.0,
            },
        );
        assert_eq!(sanitized, Size::ZERO);
        let infinite = sanitize_measured(
            node,
            Size {
                width: f32::INFINITY,
                height: 7.0,
            },
        );
        assert_eq!(infinite, Size { width: 0.0, height: 7.0 });
    }
}
