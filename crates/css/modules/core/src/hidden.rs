use log::trace;

use crate::{Layout, LayoutInput, LayoutOutput, LayoutPartialTree, NodeId};

/// Lay out a `display: none` subtree: every node gets a zero layout and an empty cache.
pub fn compute_hidden_layout<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    node: NodeId,
) -> LayoutOutput {
    if let Some(cache) = tree.cache_mut(node) {
        cache.clear();
    }
    tree.set_unrounded_layout(node, &Layout::ZERO);
    let children = tree.children(node).to_vec();
    trace!(target: "css::core", "[HIDDEN] node={node} children={}", children.len());
    for (order, child) in children.into_iter().enumerate() {
        tree.compute_child_layout(child, LayoutInput::HIDDEN);
        tree.set_unrounded_layout(child, &Layout::with_order(order as u32));
    }
    LayoutOutput::HIDDEN
}
