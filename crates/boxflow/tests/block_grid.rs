//! Block and grid containers driven through the public tree.

mod common;

use boxflow::{
    Dimension, Display, GridAutoFlow, GridPlacement, LayoutResult, LayoutTree, LayoutView,
    LengthPercentage, Line, NodeId, NonRepeatedTrackSizingFunction, Size, Style,
    TrackSizingFunction,
};
use common::{assert_close, child, definite, init_logging, px};

/// Auto-width leaf of the given height.
fn line_box(height: f32) -> Style {
    Style {
        size: Size {
            width: Dimension::Auto,
            height: px(height),
        },
        ..Style::default()
    }
}

const fn auto_height(width: f32) -> Size<Dimension> {
    Size {
        width: px(width),
        height: Dimension::Auto,
    }
}

fn columns(tracks: &[NonRepeatedTrackSizingFunction]) -> Vec<TrackSizingFunction> {
    tracks.iter().copied().map(TrackSizingFunction::from).collect()
}

fn origins(view: &LayoutView) -> Vec<(f32, f32)> {
    view.children.iter().map(|item| (item.x, item.y)).collect()
}

/// Grid of two 50px columns holding `children`.
fn two_column_grid(
    tree: &mut LayoutTree,
    flow: GridAutoFlow,
    children: &[NodeId],
) -> LayoutResult<NodeId> {
    tree.new_with_children(
        Style {
            display: Display::Grid,
            size: auto_height(100.0),
            grid_template_columns: columns(&[
                NonRepeatedTrackSizingFunction::length(50.0),
                NonRepeatedTrackSizingFunction::length(50.0),
            ]),
            grid_auto_flow: flow,
            ..Style::default()
        },
        children,
    )
}

#[test]
/// # Panics
/// Panics if block children are not stacked at full width.
fn block_children_stack_vertically() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let first = tree.new_leaf(line_box(30.0));
    let second = tree.new_leaf(line_box(50.0));
    let root = tree.new_with_children(
        Style {
            display: Display::Block,
            size: auto_height(200.0),
            ..Style::default()
        },
        &[first, second],
    )?;
    let view = tree.compute_layout(root, definite(200.0, 500.0))?;
    assert_close(view.width, 200.0);
    assert_close(view.height, 80.0);
    assert_eq!(origins(&view), vec![(0.0, 0.0), (0.0, 30.0)]);
    assert_close(child(&view, 0).width, 200.0);
    assert_close(child(&view, 1).width, 200.0);
    Ok(())
}

#[test]
/// # Panics
/// Panics if fixed and flexible grid columns are sized wrongly.
fn grid_fr_columns_share_leftover() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let items: Vec<NodeId> = (0..3).map(|_| tree.new_leaf(line_box(10.0))).collect();
    let root = tree.new_with_children(
        Style {
            display: Display::Grid,
            size: auto_height(400.0),
            grid_template_columns: columns(&[
                NonRepeatedTrackSizingFunction::length(100.0),
                NonRepeatedTrackSizingFunction::fr(1.0),
                NonRepeatedTrackSizingFunction::fr(2.0),
            ]),
            ..Style::default()
        },
        &items,
    )?;
    let view = tree.compute_layout(root, definite(400.0, 400.0))?;
    let spans: Vec<(f32, f32)> = view.children.iter().map(|item| (item.x, item.width)).collect();
    assert_eq!(spans, vec![(0.0, 100.0), (100.0, 100.0), (200.0, 200.0)]);
    assert_close(view.height, 10.0);
    Ok(())
}

#[test]
/// # Panics
/// Panics if sparse auto-placement back-fills cells before a column-locked item.
fn grid_sparse_placement_follows_cursor() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let locked = tree.new_leaf(Style {
        grid_column: Line {
            start: GridPlacement::Line(2),
            end: GridPlacement::Auto,
        },
        ..line_box(10.0)
    });
    let second = tree.new_leaf(line_box(10.0));
    let third = tree.new_leaf(line_box(10.0));
    let root = two_column_grid(&mut tree, GridAutoFlow::Row, &[locked, second, third])?;
    let view = tree.compute_layout(root, definite(100.0, 100.0))?;
    assert_eq!(origins(&view), vec![(50.0, 0.0), (0.0, 10.0), (50.0, 10.0)]);
    assert_close(view.height, 20.0);
    Ok(())
}

#[test]
/// # Panics
/// Panics if dense auto-placement does not fill the hole before a column-locked item.
fn grid_dense_placement_fills_holes() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let locked = tree.new_leaf(Style {
        grid_column: Line {
            start: GridPlacement::Line(2),
            end: GridPlacement::Auto,
        },
        ..line_box(10.0)
    });
    let second = tree.new_leaf(line_box(10.0));
    let third = tree.new_leaf(line_box(10.0));
    let root = two_column_grid(&mut tree, GridAutoFlow::RowDense, &[locked, second, third])?;
    let view = tree.compute_layout(root, definite(100.0, 100.0))?;
    assert_eq!(origins(&view), vec![(50.0, 0.0), (0.0, 0.0), (0.0, 10.0)]);
    Ok(())
}

#[test]
/// # Panics
/// Panics if the column gap does not separate grid columns.
fn grid_column_gap_offsets_tracks() -> LayoutResult<()> {
    init_logging();
    let mut tree = LayoutTree::new();
    let first = tree.new_leaf(line_box(10.0));
    let second = tree.new_leaf(line_box(10.0));
    let root = two_column_grid(&mut tree, GridAutoFlow::Row, &[first, second])?;
    tree.update_style(root, |style| {
        style.gap = Size {
            width: LengthPercentage::Length(10.0),
            height: LengthPercentage::Length(0.0),
        };
    })?;
    let view = tree.compute_layout(root, definite(200.0, 100.0))?;
    assert_eq!(origins(&view), vec![(0.0, 0.0), (60.0, 0.0)]);
    assert_close(child(&view, 1).width, 50.0);
    Ok(())
}

#[test]
/// # Panics
/// Panics if `fr` or `auto` rows stay collapsed inside a grid that only has a min height.
fn grid_min_height_sizes_tracks() -> LayoutResult<()> {
    init_logging();
    for row in [
        NonRepeatedTrackSizingFunction::fr(1.0),
        NonRepeatedTrackSizingFunction::AUTO,
    ] {
        let mut tree = LayoutTree::new();
        let item = tree.new_leaf(Style::default());
        let root = tree.new_with_children(
            Style {
                display: Display::Grid,
                min_size: Size {
                    width: Dimension::Auto,
                    height: px(100.0),
                },
                grid_template_rows: columns(&[row]),
                ..Style::default()
            },
            &[item],
        )?;
        let view = tree.compute_layout(root, definite(100.0, 400.0))?;
        assert_close(view.height, 100.0);
        assert_close(child(&view, 0).height, 100.0);
    }
    Ok(())
}
