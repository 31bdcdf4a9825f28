//! Properties that hold for every layout, checked on representative trees.

mod common;

use boxflow::{
    Dimension, Display, FlexDirection, FlexWrap, LayoutResult, LayoutTree, LengthPercentage,
    NodeId, Size, Style,
};
use common::{EPSILON, MAX_CONTENT, assert_close, child, definite, init_logging, px, sized};

fn row_of(tree: &mut LayoutTree, container: Style, widths: &[f32]) -> LayoutResult<NodeId> {
    let children: Vec<NodeId> = widths
        .iter()
        .map(|&width| tree.new_leaf(sized(width, 10.0)))
        .collect();
    tree.new_with_children(container, &children)
}

#[test]
/// # Panics
/// Panics if a second run with the same space changes any layout.
fn compute_layout_is_idempotent() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row_of(
        &mut tree,
        Style {
            flex_wrap: FlexWrap::Wrap,
            ..sized(130.0, 80.0)
        },
        &[50.0, 60.0, 70.0],
    )?;
    let first = tree.compute_layout(root, definite(130.0, 80.0))?;
    let second = tree.compute_layout(root, definite(130.0, 80.0))?;
    assert_eq!(first, second);

    // A forced re-run produces the same result as the first.
    tree.mark_dirty(root)?;
    let third = tree.compute_layout(root, definite(130.0, 80.0))?;
    assert_eq!(first, third);
    Ok(())
}

#[test]
/// # Panics
/// Panics if `row-reverse` is not the mirror image of `row`.
fn row_reverse_mirrors_row() -> LayoutResult<()> {
    init_logging();
    let widths = [30.0, 50.0, 20.0];
    let mut tree = LayoutTree::new();
    let row = row_of(&mut tree, sized(200.0, 40.0), &widths)?;
    let reversed = row_of(
        &mut tree,
        Style {
            flex_direction: FlexDirection::RowReverse,
            ..sized(200.0, 40.0)
        },
        &widths,
    )?;
    let row_view = tree.compute_layout(row, definite(200.0, 40.0))?;
    let reversed_view = tree.compute_layout(reversed, definite(200.0, 40.0))?;
    for (forward, backward) in row_view.children.iter().zip(&reversed_view.children) {
        assert_close(backward.x, 200.0 - forward.x - forward.width);
        assert_close(backward.y, forward.y);
        assert_close(backward.width, forward.width);
        assert_close(backward.height, forward.height);
    }
    assert_close(child(&reversed_view, 0).x, 170.0);
    Ok(())
}

#[test]
/// # Panics
/// Panics if a hidden child takes space or keeps a size.
fn display_none_removes_contribution() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row_of(&mut tree, Style::default(), &[20.0, 20.0, 20.0])?;
    let hidden = tree.child_at_index(root, 1)?;
    tree.update_style(hidden, |style| style.display = Display::None)?;

    let view = tree.compute_layout(root, MAX_CONTENT)?;
    assert_close(view.width, 40.0);
    let hidden_view = child(&view, 1);
    assert_eq!((hidden_view.width, hidden_view.height), (0.0, 0.0));
    assert_close(child(&view, 2).x, 20.0);
    Ok(())
}

#[test]
/// # Panics
/// Panics if a hidden subtree leaves its descendants with stale sizes.
fn display_none_hides_descendants() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let grandchild = tree.new_leaf(sized(15.0, 15.0));
    let hidden = tree.new_with_children(
        Style {
            display: Display::None,
            ..sized(30.0, 30.0)
        },
        &[grandchild],
    )?;
    let root = tree.new_with_children(sized(100.0, 100.0), &[hidden])?;
    tree.compute_layout(root, definite(100.0, 100.0))?;
    assert_eq!(tree.layout(grandchild)?.size, Size::ZERO);
    assert_eq!(tree.layout(hidden)?.size, Size::ZERO);
    Ok(())
}

#[test]
/// # Panics
/// Panics if items and gaps on a wrapped line exceed the container.
fn wrapped_lines_fit_container() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let root = row_of(
        &mut tree,
        Style {
            flex_wrap: FlexWrap::Wrap,
            gap: Size {
                width: LengthPercentage::Length(10.0),
                height: LengthPercentage::Length(5.0),
            },
            size: Size {
                width: px(100.0),
                height: Dimension::Auto,
            },
            ..Style::default()
        },
        &[30.0, 30.0, 30.0, 30.0, 30.0],
    )?;
    let view = tree.compute_layout(root, definite(100.0, 500.0))?;
    let mut line_tops: Vec<f32> = view.children.iter().map(|item| item.y).collect();
    line_tops.dedup_by(|later, earlier| (*later - *earlier).abs() < EPSILON);
    assert_eq!(line_tops.len(), 3);
    for top in line_tops {
        let line: Vec<_> = view
            .children
            .iter()
            .filter(|item| (item.y - top).abs() < EPSILON)
            .collect();
        let used: f32 = line.iter().map(|item| item.width).sum::<f32>()
            + 10.0 * (line.len().saturating_sub(1)) as f32;
        assert!(used <= 100.0 + EPSILON, "line at {top} uses {used}");
    }
    // Lines are 10 high and separated by the 5px row gap.
    assert_close(view.height, 40.0);
    Ok(())
}

#[test]
/// # Panics
/// Panics if a definite-width node does not keep its width in matching space.
fn definite_width_round_trips() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    for width in [1.0, 37.0, 250.0] {
        let node = tree.new_leaf(sized(width, 5.0));
        let view = tree.compute_layout(node, definite(width, 100.0))?;
        assert_close(view.width, width);
    }
    Ok(())
}
