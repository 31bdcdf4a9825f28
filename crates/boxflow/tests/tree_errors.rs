//! Rejected tree operations leave the tree untouched.

mod common;

use boxflow::{
    Dimension, LayoutError, LayoutResult, LayoutTree, LengthPercentage, LengthPercentageAuto,
    StyleProperty, StylePropertyKey, StyleUnit, StyleValue,
};
use common::{definite, init_logging, sized};

#[test]
/// # Panics
/// Panics if a removed node's handle is still accepted.
fn removed_handles_are_invalid() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let node = tree.new_leaf(sized(1.0, 1.0));
    tree.remove(node)?;
    assert!(matches!(tree.layout(node), Err(LayoutError::InvalidHandle(stale)) if stale == node));
    assert!(matches!(tree.style(node), Err(LayoutError::InvalidHandle(_))));

    // The slot is reused, but the old handle still does not reach the new node.
    let reused = tree.new_leaf(sized(2.0, 2.0));
    assert_eq!(reused.index(), node.index());
    assert!(matches!(tree.set_style(node, sized(3.0, 3.0)), Err(LayoutError::InvalidHandle(_))));
    assert_eq!(tree.total_node_count(), 1);
    Ok(())
}

#[test]
/// # Panics
/// Panics if a cycle is accepted or the rejected call mutates the tree.
fn cycles_are_rejected() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let leaf = tree.new_leaf(sized(1.0, 1.0));
    let middle = tree.new_with_children(sized(2.0, 2.0), &[leaf])?;
    let root = tree.new_with_children(sized(3.0, 3.0), &[middle])?;

    let result = tree.add_child(leaf, root);
    assert!(matches!(
        result,
        Err(LayoutError::CycleAttempted { parent, child }) if parent == leaf && child == root
    ));
    assert!(matches!(tree.add_child(middle, middle), Err(LayoutError::CycleAttempted { .. })));
    assert!(matches!(
        tree.replace_child_at_index(middle, 0, root),
        Err(LayoutError::CycleAttempted { .. })
    ));
    assert_eq!(tree.children(root)?, &[middle]);
    assert_eq!(tree.children(middle)?, &[leaf]);
    assert_eq!(tree.parent(root)?, None);
    Ok(())
}

#[test]
/// # Panics
/// Panics if child index errors do not report the bounds.
fn child_index_out_of_bounds() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let leaf = tree.new_leaf(sized(1.0, 1.0));
    let parent = tree.new_with_children(sized(2.0, 2.0), &[leaf])?;
    let other = tree.new_leaf(sized(1.0, 1.0));

    assert!(matches!(
        tree.child_at_index(parent, 3),
        Err(LayoutError::ChildIndexOutOfBounds { index: 3, child_count: 1, .. })
    ));
    assert!(matches!(
        tree.remove_child_at_index(parent, 1),
        Err(LayoutError::ChildIndexOutOfBounds { .. })
    ));
    assert!(matches!(
        tree.replace_child_at_index(parent, 1, other),
        Err(LayoutError::ChildIndexOutOfBounds { .. })
    ));
    assert!(matches!(
        tree.insert_child_at_index(parent, 2, other),
        Err(LayoutError::ChildIndexOutOfBounds { .. })
    ));
    assert_eq!(tree.child_count(parent)?, 1);
    assert_eq!(tree.parent(other)?, None);
    Ok(())
}

#[test]
/// # Panics
/// Panics if removing a non-child succeeds.
fn remove_child_requires_membership() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let stranger = tree.new_leaf(sized(1.0, 1.0));
    let parent = tree.new_with_children(sized(2.0, 2.0), &[])?;
    assert!(matches!(
        tree.remove_child(parent, stranger),
        Err(LayoutError::NotAChild { parent: reported, .. }) if reported == parent
    ));
    Ok(())
}

#[test]
/// # Panics
/// Panics if a unit mismatch is accepted or changes the style.
fn invalid_units_are_rejected() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let node = tree.new_leaf(sized(10.0, 10.0));
    let before = tree.style(node)?.clone();

    let result = tree.set_style_value(node, StylePropertyKey::Width, 1.0, StyleUnit::Fr);
    assert!(matches!(
        result,
        Err(LayoutError::InvalidStyleValue {
            property: StylePropertyKey::Width,
            unit: StyleUnit::Fr
        })
    ));
    let keyed = StyleProperty::Length(
        StylePropertyKey::PaddingLeft,
        StyleValue::new(0.0, StyleUnit::Auto),
    );
    assert!(matches!(tree.set_property(node, keyed), Err(LayoutError::InvalidStyleValue { .. })));
    assert_eq!(tree.style(node)?, &before);
    Ok(())
}

#[test]
/// # Panics
/// Panics if invalid numbers survive a setter or the node stays clean.
fn invalid_numbers_are_sanitized() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let node = tree.new_leaf(sized(10.0, 10.0));
    tree.compute_layout(node, definite(50.0, 50.0))?;
    assert!(!tree.is_dirty(node)?);

    tree.set_style_value(node, StylePropertyKey::Width, f32::NAN, StyleUnit::Px)?;
    tree.set_style_value(node, StylePropertyKey::PaddingTop, -3.0, StyleUnit::Px)?;
    tree.set_style_value(node, StylePropertyKey::MarginLeft, -4.0, StyleUnit::Px)?;
    assert!(tree.is_dirty(node)?);

    let style = tree.style(node)?;
    assert_eq!(style.size.width, Dimension::Length(0.0));
    assert_eq!(style.padding.top, LengthPercentage::Length(0.0));
    // Margins may be negative.
    assert_eq!(style.margin.left, LengthPercentageAuto::Length(-4.0));
    Ok(())
}

#[test]
/// # Panics
/// Panics if removing a parent does not orphan its children.
fn remove_orphans_children() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let first = tree.new_leaf(sized(1.0, 1.0));
    let second = tree.new_leaf(sized(1.0, 1.0));
    let parent = tree.new_with_children(sized(5.0, 5.0), &[first, second])?;
    let root = tree.new_with_children(sized(10.0, 10.0), &[parent])?;

    tree.remove(parent)?;
    assert_eq!(tree.parent(first)?, None);
    assert_eq!(tree.parent(second)?, None);
    assert_eq!(tree.child_count(root)?, 0);
    assert_eq!(tree.total_node_count(), 3);

    tree.clear();
    assert_eq!(tree.total_node_count(), 0);
    assert!(matches!(tree.children(root), Err(LayoutError::InvalidHandle(_))));
    Ok(())
}

#[test]
/// # Panics
/// Panics if re-parenting leaves the child in both lists.
fn moving_a_child_detaches_it() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let leaf = tree.new_leaf(sized(1.0, 1.0));
    let old_parent = tree.new_with_children(sized(5.0, 5.0), &[leaf])?;
    let new_parent = tree.new_with_children(sized(5.0, 5.0), &[])?;

    tree.add_child(new_parent, leaf)?;
    assert_eq!(tree.child_count(old_parent)?, 0);
    assert_eq!(tree.children(new_parent)?, &[leaf]);
    assert_eq!(tree.parent(leaf)?, Some(new_parent));

    let replacement = tree.new_leaf(sized(2.0, 2.0));
    let replaced = tree.replace_child_at_index(new_parent, 0, replacement)?;
    assert_eq!(replaced, leaf);
    assert_eq!(tree.parent(leaf)?, None);
    assert_eq!(tree.child_at_index(new_parent, 0)?, replacement);

    tree.insert_child_at_index(new_parent, 0, leaf)?;
    assert_eq!(tree.children(new_parent)?, &[leaf, replacement]);
    assert_eq!(tree.remove_child_at_index(new_parent, 1)?, replacement);
    Ok(())
}

#[test]
/// # Panics
/// Panics if a child listed twice is accepted or a rejected call changes the tree.
fn duplicate_children_are_rejected() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let leaf = tree.new_leaf(sized(10.0, 10.0));
    assert!(matches!(
        tree.new_with_children(sized(50.0, 50.0), &[leaf, leaf]),
        Err(LayoutError::DuplicateChild { child, .. }) if child == leaf
    ));
    assert_eq!(tree.total_node_count(), 1);
    assert_eq!(tree.parent(leaf)?, None);

    let parent = tree.new_with_children(sized(50.0, 50.0), &[leaf])?;
    let other = tree.new_leaf(sized(10.0, 10.0));
    assert!(matches!(
        tree.set_children(parent, &[other, leaf, other]),
        Err(LayoutError::DuplicateChild { parent: reported, .. }) if reported == parent
    ));
    assert_eq!(tree.children(parent)?, &[leaf]);
    assert_eq!(tree.parent(other)?, None);

    assert_eq!(tree.remove_child_at_index(parent, 0)?, leaf);
    assert_eq!(tree.child_count(parent)?, 0);
    Ok(())
}
