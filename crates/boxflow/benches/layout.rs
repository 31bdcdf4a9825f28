//! Full layout passes over synthetic trees.

use std::hint::black_box;

use boxflow::{
    AvailableSpace, Dimension, Display, FlexDirection, FlexWrap, LayoutResult, LayoutTree, NodeId,
    NonRepeatedTrackSizingFunction, Size, Style, TrackSizingFunction,
};
use criterion::{Criterion, criterion_group, criterion_main};

const VIEWPORT: Size<AvailableSpace> = Size {
    width: AvailableSpace::Definite(1024.0),
    height: AvailableSpace::Definite(768.0),
};

fn leaf_style(width: f32, height: f32) -> Style {
    Style {
        size: Size {
            width: Dimension::Length(width),
            height: Dimension::Length(height),
        },
        flex_grow: 1.0,
        ..Style::default()
    }
}

/// Columns nested `depth` levels deep, each holding `fan_out` leaves and the next level.
fn deep_tree(tree: &mut LayoutTree, depth: usize, fan_out: usize) -> LayoutResult<NodeId> {
    let column = Style {
        flex_direction: FlexDirection::Column,
        ..Style::default()
    };
    let mut inner = tree.new_leaf(leaf_style(8.0, 8.0));
    for level in 0..depth {
        let mut children: Vec<NodeId> = (0..fan_out)
            .map(|index| tree.new_leaf(leaf_style((index + level) as f32, 4.0)))
            .collect();
        children.push(inner);
        inner = tree.new_with_children(column.clone(), &children)?;
    }
    Ok(inner)
}

fn wide_row(tree: &mut LayoutTree, count: usize, wrap: FlexWrap) -> LayoutResult<NodeId> {
    let children: Vec<NodeId> = (0..count)
        .map(|index| tree.new_leaf(leaf_style(20.0 + (index % 7) as f32 * 5.0, 12.0)))
        .collect();
    tree.new_with_children(
        Style {
            flex_wrap: wrap,
            ..Style::default()
        },
        &children,
    )
}

fn auto_placed_grid(tree: &mut LayoutTree, count: usize) -> LayoutResult<NodeId> {
    let children: Vec<NodeId> = (0..count)
        .map(|_| tree.new_leaf(Style::default()))
        .collect();
    tree.new_with_children(
        Style {
            display: Display::Grid,
            grid_template_columns: vec![TrackSizingFunction::Repeat(
                6,
                vec![NonRepeatedTrackSizingFunction::fr(1.0)],
            )],
            grid_auto_rows: vec![NonRepeatedTrackSizingFunction::length(24.0)],
            ..Style::default()
        },
        &children,
    )
}

/// Time a forced relayout of the tree `build` returns.
fn bench_relayout(
    criterion: &mut Criterion,
    name: &str,
    build: impl Fn(&mut LayoutTree) -> LayoutResult<NodeId>,
) {
    let mut tree = LayoutTree::new();
    let Ok(root) = build(&mut tree) else {
        log::error!("benchmark tree {name} could not be built");
        return;
    };
    criterion.bench_function(name, |bencher| {
        bencher.iter(|| {
            let _dirtied = tree.mark_dirty(root);
            black_box(tree.compute_layout(root, black_box(VIEWPORT)).map(|view| view.width))
        });
    });
}

fn bench_layouts(criterion: &mut Criterion) {
    bench_relayout(criterion, "flex_deep_20x8", |tree| deep_tree(tree, 20, 8));
    bench_relayout(criterion, "flex_wide_1000", |tree| {
        wide_row(tree, 1000, FlexWrap::NoWrap)
    });
    bench_relayout(criterion, "flex_wrapped_1000", |tree| {
        wide_row(tree, 1000, FlexWrap::Wrap)
    });
    bench_relayout(criterion, "grid_auto_placed_600", |tree| {
        auto_placed_grid(tree, 600)
    });
}

fn bench_clean_tree(criterion: &mut Criterion) {
    let mut tree = LayoutTree::new();
    let Ok(root) = wide_row(&mut tree, 1000, FlexWrap::Wrap) else {
        return;
    };
    let _warmed = tree.compute_layout(root, VIEWPORT);
    criterion.bench_function("clean_tree_noop_1000", |bencher| {
        bencher.iter(|| black_box(tree.compute_layout(root, VIEWPORT).map(|view| view.child_count)));
    });
}

criterion_group!(layout_benches, bench_layouts, bench_clean_tree);
criterion_main!(layout_benches);
