//! Collecting flex items into flex lines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#algo-line-break>

use css_core::AvailableSpace;
use log::debug;

use crate::chapter5::FlexContainer;
use crate::chapter6::FlexItem;

/// A run of consecutive items, `items[start..end]`, sharing one cross-axis line.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FlexLine {
    pub start: usize,
    pub end: usize,
    pub cross_size: f32,
    /// Leading space before the line, from `align-content`.
    pub offset_cross: f32,
}

impl FlexLine {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            cross_size: 0.0,
            offset_cross: 0.0,
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn items<'items>(&self, items: &'items [FlexItem]) -> &'items [FlexItem] {
        items.get(self.start..self.end).unwrap_or_default()
    }

    #[inline]
    pub fn items_mut<'items>(&self, items: &'items mut [FlexItem]) -> &'items mut [FlexItem] {
        items.get_mut(self.start..self.end).unwrap_or_default()
    }
}

/// Phase 4: greedily pack items into lines by their hypothetical outer main sizes.
///
/// A line always takes at least one item. Under a max-content constraint nothing wraps; under a
/// min-content constraint every wrapping opportunity is taken.
pub fn collect_flex_lines(
    items: &[FlexItem],
    container: &FlexContainer,
    main_space: AvailableSpace,
) -> Vec<FlexLine> {
    let count = items.len();
    let lines = if container.is_wrap {
        match main_space {
            AvailableSpace::MaxContent => vec![FlexLine::new(0, count)],
            AvailableSpace::MinContent => (0..count)
                .map(|index| FlexLine::new(index, index + 1))
                .collect(),
            AvailableSpace::Definite(limit) => break_into_lines(items, container, limit),
        }
    } else {
        vec![FlexLine::new(0, count)]
    };
    debug!(
        target: "css::flexbox::lines",
        "[FLEX-LINES] items={count} wrap={} space={main_space:?} -> lines={}",
        container.is_wrap,
        lines.len()
    );
    lines
}

fn break_into_lines(items: &[FlexItem], container: &FlexContainer, limit: f32) -> Vec<FlexLine> {
    let axis = container.main_axis;
    let gap = container.main_gap();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut line_length = 0.0_f32;
    for (index, item) in items.iter().enumerate() {
        let outer = item.hypothetical_outer_size.main(axis);
        if index == start {
            line_length = outer;
            continue;
        }
        let extended = line_length + gap + outer;
        if extended > limit {
            lines.push(FlexLine::new(start, index));
            start = index;
            line_length = outer;
        } else {
            line_length = extended;
        }
    }
    if start < items.len() {
        lines.push(FlexLine::new(start, items.len()));
    }
    if lines.is_empty() {
        lines.push(FlexLine::new(0, 0));
    }
    lines
}
