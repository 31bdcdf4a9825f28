//! Leaf sizing: a node without children, sized from its style or its measure function.

use css_box::{MaybeMath, Point, Size};
use css_orchestrator::Style;
use css_sizing::{AvailableSpace, SizingMode};
use log::trace;

use crate::{BoxSizes, LayoutInput, LayoutOutput, RunMode};

/// Size a leaf.
///
/// `measure` receives the content-box dimensions that are already known and the space available
/// to the content box, and returns the content-box size. Without one, the content is empty.
pub fn compute_leaf_layout<Measure>(
    inputs: LayoutInput,
    style: &Style,
    measure: Option<Measure>,
) -> LayoutOutput
where
    Measure: FnOnce(Size<Option<f32>>, Size<AvailableSpace>) -> Size<f32>,
{
    let LayoutInput {
        known_dimensions,
        parent_size,
        available_space,
        sizing_mode,
        run_mode,
        ..
    } = inputs;

    let sizes = BoxSizes::resolve(style, parent_size);
    let inset = sizes.content_box_inset().sum_axes();

    let (node_size, node_min_size, node_max_size, aspect_ratio) = match sizing_mode {
        SizingMode::ContentSize => (known_dimensions, Size::NONE, Size::NONE, None),
        SizingMode::InherentSize => (
            known_dimensions.or(sizes.size),
            sizes.min_size,
            sizes.max_size,
            sizes.aspect_ratio,
        ),
    };

    if run_mode == RunMode::ComputeSize
        && let (Some(width), Some(height)) = (node_size.width, node_size.height)
    {
        let size = Size { width, height }
            .maybe_clamp(node_min_size, node_max_size)
            .f32_max(inset);
        return LayoutOutput::from_outer_size(size);
    }

    if let Some(measure) = measure {
        let content_available = Size {
            width: available_space
                .width
                .maybe_set(node_size.width)
                .maybe_set(node_max_size.width)
                .map_definite_value(|space| {
                    (space.maybe_clamp(node_min_size.width, node_max_size.width) - inset.width)
                        .max(0.0)
                }),
            height: available_space
                .height
                .maybe_set(node_size.height)
                .maybe_set(node_max_size.height)
                .map_definite_value(|space| {
                    (space.maybe_clamp(node_min_size.height, node_max_size.height) - inset.height)
                        .max(0.0)
                }),
        };
        let content_known = node_size.zip_map(inset, |known, extra| {
            known.map(|outer| (outer - extra).max(0.0))
        });
        let measured = measure(content_known, content_available);
        trace!(
            target: "css::core::leaf",
            "[LEAF MEASURE] known={content_known:?} avail={content_available:?} -> {measured:?}"
        );

        let clamped = node_size
            .unwrap_or(measured + inset)
            .maybe_clamp(node_min_size, node_max_size);
        let size = Size {
            width: clamped.width,
            height: clamped
                .height
                .max(aspect_ratio.map_or(0.0, |ratio| clamped.width / ratio)),
        }
        .f32_max(inset);
        return LayoutOutput {
            size,
            content_size: measured + sizes.padding.sum_axes(),
            first_baselines: Point::NONE,
        };
    }

    let size = Size {
        width: node_size
            .width
            .unwrap_or(inset.width)
            .maybe_clamp(node_min_size.width, node_max_size.width),
        height: node_size
            .height
            .unwrap_or(inset.height)
            .maybe_clamp(node_min_size.height, node_max_size.height),
    };
    let size = Size {
        width: size
            .width
            .max(aspect_ratio.map_or(0.0, |ratio| size.height * ratio)),
        height: size
            .height
            .max(aspect_ratio.map_or(0.0, |ratio| size.width / ratio)),
    }
    .f32_max(inset);
    LayoutOutput::from_sizes(size, sizes.padding.sum_axes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_box::Rect;
    use css_values_units::{Dimension, LengthPercentage};

    type NoMeasure = fn(Size<Option<f32>>, Size<AvailableSpace>) -> Size<f32>;

    fn layout_input(available: f32) -> LayoutInput {
        LayoutInput {
            run_mode: RunMode::PerformLayout,
            sizing_mode: SizingMode::InherentSize,
            axis: crate::RequestedAxis::Both,
            known_dimensions: Size::NONE,
            parent_size: Size::new(available, available),
            available_space: Size {
                width: AvailableSpace::Definite(available),
                height: AvailableSpace::Definite(available),
            },
        }
    }

    #[test]
    /// # Panics
    /// Panics if a fixed-size leaf does not take its style size.
    fn fixed_leaf_takes_style_size() {
        let style = Style {
            size: Size {
                width: Dimension::Length(10.0),
                height: Dimension::Length(10.0),
            },
            ..Style::default()
        };
        let output = compute_leaf_layout(layout_input(100.0), &style, None::<NoMeasure>);
        assert_eq!(output.size, Size { width: 10.0, height: 10.0 });
    }

    #[test]
    /// # Panics
    /// Panics if the measured content is not wrapped in padding or ignores max-width.
    fn measured_leaf_adds_padding_and_clamps() {
        let style = Style {
            max_size: Size {
                width: Dimension::Length(50.0),
                height: Dimension::Auto,
            },
            padding: Rect {
                left: LengthPercentage::Length(5.0),
                right: LengthPercentage::Length(5.0),
                top: LengthPercentage::Length(2.0),
                bottom: LengthPercentage::Length(2.0),
            },
            ..Style::default()
        };
        let output = compute_leaf_layout(
            layout_input(100.0),
            &style,
            Some(|_known: Size<Option<f32>>, _avail: Size<AvailableSpace>| Size {
                width: 80.0,
                height: 10.0,
            }),
        );
        assert_eq!(output.size.width, 50.0);
        assert_eq!(output.size.height, 14.0);
    }

    #[test]
    /// # Panics
    /// Panics if the measure function is offered space that includes padding.
    fn measure_sees_content_box_space() {
        let style = Style {
            size: Size {
                width: Dimension::Length(40.0),
                height: Dimension::Auto,
            },
            padding: Rect {
                left: LengthPercentage::Length(5.0),
                right: LengthPercentage::Length(5.0),
                top: LengthPercentage::ZERO,
                bottom: LengthPercentage::ZERO,
            },
            ..Style::default()
        };
        let output = compute_leaf_layout(
            layout_input(100.0),
            &style,
            Some(|known: Size<Option<f32>>, avail: Size<AvailableSpace>| Size {
                width: known.width.unwrap_or(-1.0),
                height: avail.width.unwrap_or(-1.0),
            }),
        );
        assert_eq!(output.size.width, 40.0);
        assert_eq!(output.size.height, 30.0);
    }

    #[test]
    /// # Panics
    /// Panics if an aspect ratio does not derive the missing height.
    fn aspect_ratio_fills_missing_axis() {
        let style = Style {
            size: Size {
                width: Dimension::Length(40.0),
                height: Dimension::Auto,
            },
            aspect_ratio: Some(2.0),
            ..Style::default()
        };
        let output = compute_leaf_layout(layout_input(100.0), &style, None::<NoMeasure>);
        assert_eq!(output.size, Size { width: 40.0, height: 20.0 });
    }
}
