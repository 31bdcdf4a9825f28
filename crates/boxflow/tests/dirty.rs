mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use boxflow::{
    FlexDirection, LayoutConfig, LayoutResult, LayoutTree, MeasureErrorPolicy, MeasureFunction,
    NodeId, Size, Style,
};
use common::{MAX_CONTENT, assert_close, definite, init_logging, sized};

#[test]
/// # Panics
/// Panics if fresh nodes start clean or stay dirty after a run.
fn new_nodes_are_dirty_until_computed() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let leaf = tree.new_leaf(sized(10.0, 10.0));
    let root = tree.new_with_children(sized(50.0, 50.0), &[leaf])?;
    assert!(tree.is_dirty(leaf)?);
    assert!(tree.is_dirty(root)?);

    tree.compute_layout(root, definite(50.0, 50.0))?;
    assert!(!tree.is_dirty(leaf)?);
    assert!(!tree.is_dirty(root)?);
    Ok(())
}

#[test]
/// # Panics
/// Panics if a style change does not reach the ancestors or leaks into siblings.
fn style_change_dirties_ancestors_only() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let changed = tree.new_leaf(sized(10.0, 10.0));
    let sibling = tree.new_leaf(sized(10.0, 10.0));
    let middle = tree.new_with_children(sized(40.0, 40.0), &[changed, sibling])?;
    let root = tree.new_with_children(sized(80.0, 80.0), &[middle])?;
    tree.compute_layout(root, definite(80.0, 80.0))?;

    tree.set_style(changed, sized(20.0, 10.0))?;
    assert!(tree.is_dirty(changed)?);
    assert!(tree.is_dirty(middle)?);
    assert!(tree.is_dirty(root)?);
    assert!(!tree.is_dirty(sibling)?);

    let view = tree.compute_layout(root, definite(80.0, 80.0))?;
    let sibling_x = view
        .child(0)
        .and_then(|middle_view| middle_view.child(1))
        .map_or(f32::NAN, |sibling_view| sibling_view.x);
    assert_close(sibling_x, 20.0);
    Ok(())
}

#[test]
/// # Panics
/// Panics if a clean tree re-measures or a dirtied one does not.
fn clean_tree_skips_measuring() -> LayoutResult<()> {
    init_logging();
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let mut tree = LayoutTree::new();
    let leaf = tree.new_leaf_with_measure(
        Style::default(),
        MeasureFunction::boxed(move |_, _| {
            counter.fetch_add(1, Ordering::Relaxed);
            Ok(Size {
                width: 12.0,
                height: 6.0,
            })
        }),
    );
    let root = tree.new_with_children(sized(60.0, 60.0), &[leaf])?;

    tree.compute_layout(root, definite(60.0, 60.0))?;
    let after_first = calls.load(Ordering::Relaxed);
    assert!(after_first > 0);

    tree.compute_layout(root, definite(60.0, 60.0))?;
    assert_eq!(calls.load(Ordering::Relaxed), after_first);

    tree.mark_dirty(leaf)?;
    assert!(tree.is_dirty(root)?);
    tree.compute_layout(root, definite(60.0, 60.0))?;
    assert!(calls.load(Ordering::Relaxed) > after_first);

    // Different available space is a new run even when nothing is dirty.
    let before_resize = calls.load(Ordering::Relaxed);
    tree.compute_layout(root, definite(90.0, 60.0))?;
    assert!(calls.load(Ordering::Relaxed) > before_resize);
    Ok(())
}

#[test]
/// # Panics
/// Panics if toggling rounding keeps stale layouts.
fn rounding_toggle_dirties_everything() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let first = tree.new_leaf(sized(10.5, 10.0));
    let second = tree.new_leaf(sized(10.0, 10.0));
    let root = tree.new_with_children(sized(40.0, 40.0), &[first, second])?;
    tree.compute_layout(root, definite(40.0, 40.0))?;

    tree.set_config(LayoutConfig::new(false, MeasureErrorPolicy::Defer));
    for node in [first, second, root] {
        assert!(tree.is_dirty(node)?);
    }
    tree.compute_layout(root, definite(40.0, 40.0))?;
    assert_close(tree.layout(first)?.size.width, 10.5);

    // Changing only the error policy leaves layouts alone.
    tree.set_config(LayoutConfig::new(false, MeasureErrorPolicy::Abort));
    assert!(!tree.is_dirty(root)?);
    Ok(())
}

/// Wrap `leaf` in `depth` flex containers, alternating row and column when `alternate` is set.
fn nested_around(
    tree: &mut LayoutTree,
    leaf: NodeId,
    depth: usize,
    alternate: bool,
) -> LayoutResult<NodeId> {
    let mut inner = leaf;
    for level in 0..depth {
        let flex_direction = if alternate && level % 2 == 1 {
            FlexDirection::Column
        } else {
            FlexDirection::Row
        };
        inner = tree.new_with_children(
            Style {
                flex_direction,
                ..Style::default()
            },
            &[inner],
        )?;
    }
    Ok(inner)
}

#[test]
/// # Panics
/// Panics if the measure calls of a deeply nested leaf grow with its depth.
fn nesting_depth_does_not_multiply_measuring() -> LayoutResult<()> {
    init_logging();
    for (depth, alternate) in [(2, false), (12, false), (5, true), (15, true)] {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let mut tree = LayoutTree::new();
        let leaf = tree.new_leaf_with_measure(
            Style::default(),
            MeasureFunction::boxed(move |_, _| {
                counter.fetch_add(1, Ordering::Relaxed);
                Ok(Size {
                    width: 10.0,
                    height: 10.0,
                })
            }),
        );
        let root = nested_around(&mut tree, leaf, depth, alternate)?;
        let view = tree.compute_layout(root, MAX_CONTENT)?;
        assert_close(view.width, 10.0);
        assert_close(view.height, 10.0);
        let measured = calls.load(Ordering::Relaxed);
        assert!(measured <= 10, "depth {depth}: {measured} measure calls");
    }
    Ok(())
}
