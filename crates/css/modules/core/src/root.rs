use css_box::{MaybeMath, Point, Size};
use css_orchestrator::Display;
use css_sizing::{AvailableSize, AvailableSpace, SizingMode, min_max_definite_size};
use log::debug;

use crate::{BoxSizes, Layout, LayoutPartialTree, LayoutPartialTreeExt, NodeId};

/// Lay out the subtree under `root` within `available_space` and record the root's layout at the
/// origin.
///
/// The available space doubles as the root's containing block, so percentage sizes on the root
/// resolve against it. A block root with an `auto` width fills the available width, as a block in
/// normal flow would.
pub fn compute_root_layout<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    root: NodeId,
    available_space: Size<AvailableSpace>,
) {
    let parent_size = available_space.into_options();
    let style = tree.style(root);
    let sizes = BoxSizes::resolve(style, parent_size);

    let known_dimensions = if style.display == Display::Block {
        let padding_border = sizes.padding_border().sum_axes();
        let fill_available = Size {
            width: parent_size
                .width
                .map(|width| width - sizes.margin.horizontal_axis_sum()),
            height: None,
        };
        min_max_definite_size(sizes.min_size, sizes.max_size)
            .or(sizes.clamped_size())
            .or(fill_available)
            .maybe_max(padding_border)
    } else {
        Size::NONE
    };

    debug!(
        target: "css::core",
        "[ROOT] node={root} display={:?} avail={available_space:?} known={known_dimensions:?}",
        style.display
    );

    let output = tree.perform_child_layout(
        root,
        known_dimensions,
        parent_size,
        available_space,
        SizingMode::InherentSize,
    );
    tree.set_unrounded_layout(
        root,
        &Layout {
            order: 0,
            location: Point::ZERO,
            size: output.size,
            content_size: output.content_size,
            scrollbar_size: sizes.scrollbar_size(),
            border: sizes.border,
            padding: sizes.padding,
        },
    );
}
