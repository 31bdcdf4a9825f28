//! Pixel rounding of final layouts.
//!
//! Edges are rounded in absolute coordinates and sizes are derived from the rounded edges, so two
//! boxes that touch before rounding still touch afterwards and errors never accumulate down the
//! tree.

use css_box::{Point, Size};
use css_core::{Layout, NodeId};

use crate::tree::{NodeArena, NodeData};

/// Extent between two absolute edges after rounding both.
#[inline]
fn rounded_extent(start: f32, extent: f32) -> f32 {
    (start + extent).round() - start.round()
}

/// Round `layout`, whose parent's border box starts at `parent_origin` (absolute, unrounded).
pub fn round_layout(layout: &Layout, parent_origin: Point<f32>) -> Layout {
    let origin = Point {
        x: parent_origin.x + layout.location.x,
        y: parent_origin.y + layout.location.y,
    };
    let rounded_size = |size: Size<f32>| Size {
        width: rounded_extent(origin.x, size.width),
        height: rounded_extent(origin.y, size.height),
    };
    Layout {
        order: layout.order,
        location: Point {
            x: origin.x.round() - parent_origin.x.round(),
            y: origin.y.round() - parent_origin.y.round(),
        },
        size: rounded_size(layout.size),
        content_size: rounded_size(layout.content_size),
        scrollbar_size: layout.scrollbar_size.map(f32::round),
        border: layout.border.map(f32::round),
        padding: layout.padding.map(f32::round),
    }
}

/// Round the subtree of `node` into the final layouts.
pub fn round_layouts(arena: &mut NodeArena, node: NodeId, parent_origin: Point<f32>) {
    let mut stack = vec![(node, parent_origin)];
    while let Some((current, origin)) = stack.pop() {
        let Some(data) = arena.get_mut(current) else {
            continue;
        };
        let unrounded = data.unrounded_layout;
        data.final_layout = round_layout(&unrounded, origin);
        let child_origin = Point {
            x: origin.x + unrounded.location.x,
            y: origin.y + unrounded.location.y,
        };
        stack.extend(data.children.iter().map(|&child| (child, child_origin)));
    }
}

/// Publish the unrounded layout as is.
pub fn copy_unrounded(data: &mut NodeData) {
    data.final_layout = data.unrounded_layout;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout_at(x: f32, width: f32) -> Layout {
        Layout {
            location: Point { x, y: 0.0 },
            size: Size {
                width,
                height: 10.0,
            },
            ..Layout::ZERO
        }
    }

    #[test]
    /// # Panics
    /// Panics if rounded neighbours gap or overlap.
    fn adjacent_boxes_stay_adjacent() {
        let parent = Point::ZERO;
        let first = round_layout(&layout_at(0.0, 33.3), parent);
        let second = round_layout(&layout_at(33.3, 33.3), parent);
        let third = round_layout(&layout_at(66.6, 33.4), parent);
        assert_eq!(first.location.x + first.size.width, second.location.x);
        assert_eq!(second.location.x + second.size.width, third.location.x);
        assert_eq!(third.location.x + third.size.width, 100.0);
    }

    #[test]
    /// # Panics
    /// Panics if rounding is relative instead of absolute.
    fn location_rounds_in_absolute_space() {
        // Parent starts at 0.4, child at 0.4 + 0.4 = 0.8 which rounds to 1.
        let child = round_layout(&layout_at(0.4, 10.0), Point { x: 0.4, y: 0.0 });
        assert_eq!(child.location.x, 1.0);
        assert_eq!(child.size.width, 10.0);
    }
}
