//! Grid layout algorithm.
//!
//! Spec: §12 Grid Sizing
//! <https://www.w3.org/TR/css-grid-2/#layout-algorithm>

use css_box::{AbsoluteAxis, AbstractAxis, Line, MaybeMath, Point, Rect, Size};
use css_core::{
    AvailableSpace, BoxSizes, Layout, LayoutInput, LayoutOutput, LayoutPartialTree,
    LayoutPartialTreeExt, NodeId, RunMode, SizingMode, apply_alignment_fallback,
    compute_alignment_offset, compute_content_size_contribution,
};
use css_orchestrator::{AlignContent, AlignItems, Display, Position};
use css_position::{AbsoluteContext, layout_absolute_child, relative_offset};
use css_sizing::min_max_definite_size;
use css_values_units::ResolveOrZero;

use crate::placement::{ResolvedPlacement, TrackCounts, resolve_placement};
use crate::track_sizing::{
    TrackSizingContext, resolve_track_sizes, spanned_size, sum_track_sizes,
};
use crate::types::{GridItem, GridTrack, collect_grid_items};

/// Container values read from the style before the tree is borrowed mutably.
#[derive(Debug, Clone, Copy)]
struct GridContainer {
    sizes: BoxSizes,
    /// Padding, border and scrollbar gutter.
    inset: Rect<f32>,
    gap: Size<f32>,
    justify_content: Option<AlignContent>,
    align_content: Option<AlignContent>,
}

/// Lay out `node` as a grid container.
///
/// Under [`RunMode::ComputeSize`] only the container's size is produced; under
/// [`RunMode::PerformLayout`] every child's layout is written through the tree as well.
pub fn compute_grid_layout<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    node: NodeId,
    inputs: LayoutInput,
) -> LayoutOutput {
    let LayoutInput {
        known_dimensions,
        parent_size,
        sizing_mode,
        run_mode,
        available_space,
        ..
    } = inputs;
    let style = tree.style(node);
    let sizes = BoxSizes::resolve(style, parent_size);
    let (min_size, max_size, clamped_style_size) = match sizing_mode {
        SizingMode::InherentSize => (sizes.min_size, sizes.max_size, sizes.clamped_size()),
        SizingMode::ContentSize => (Size::NONE, Size::NONE, Size::NONE),
    };
    let padding_border = sizes.padding_border().sum_axes();
    let known = known_dimensions
        .or(min_max_definite_size(min_size, max_size).or(clamped_style_size))
        .maybe_max(padding_border);

    if run_mode == RunMode::ComputeSize
        && let (Some(width), Some(height)) = (known.width, known.height)
    {
        return LayoutOutput::from_outer_size(Size { width, height });
    }

    let inset = sizes.content_box_inset();
    let inset_sum = inset.sum_axes();
    let inner_size = known.zip_map(inset_sum, |size, inset_axis| {
        size.map(|outer| (outer - inset_axis).max(0.0))
    });
    let container = GridContainer {
        sizes,
        inset,
        gap: style.gap.resolve_or_zero(inner_size),
        justify_content: style.justify_content,
        align_content: style.align_content,
    };
    let mut setup = collect_grid_items(tree, node, style, inner_size);

    // Space the tracks of each axis may fill.
    let track_space = |axis: AbsoluteAxis| match inner_size.get(axis) {
        Some(inner) => AvailableSpace::Definite(inner),
        None => match available_space.get(axis) {
            AvailableSpace::Definite(room) if axis.is_horizontal() => {
                let outer = (room - sizes.margin.axis_sum(axis)).maybe_min(max_size.get(axis));
                AvailableSpace::Definite((outer - inset_sum.get(axis)).max(0.0))
            }
            // An auto block size is content-sized.
            AvailableSpace::Definite(_) => AvailableSpace::MaxContent,
            intrinsic => intrinsic,
        },
    };

    // Content-box bound of an axis whose inner size is indefinite.
    let inner_bound = |bound: Size<Option<f32>>, axis: AbsoluteAxis| {
        if inner_size.get(axis).is_some() {
            return None;
        }
        bound
            .get(axis)
            .map(|outer| (outer - inset_sum.get(axis)).max(0.0))
    };

    let column_ctx = TrackSizingContext {
        axis: AbstractAxis::Inline,
        gap: container.gap.width,
        inner_size,
        available: track_space(AbsoluteAxis::Horizontal),
        min_inner: inner_bound(min_size, AbsoluteAxis::Horizontal),
        max_inner: inner_bound(max_size, AbsoluteAxis::Horizontal),
        content_alignment: container.justify_content,
        other_tracks: None,
        other_gap: container.gap.height,
    };
    resolve_track_sizes(tree, &mut setup.columns, &setup.items, &column_ctx);
    let row_ctx = TrackSizingContext {
        axis: AbstractAxis::Block,
        gap: container.gap.height,
        inner_size,
        available: track_space(AbsoluteAxis::Vertical),
        min_inner: inner_bound(min_size, AbsoluteAxis::Vertical),
        max_inner: inner_bound(max_size, AbsoluteAxis::Vertical),
        content_alignment: container.align_content,
        other_tracks: Some(&setup.columns),
        other_gap: container.gap.width,
    };
    resolve_track_sizes(tree, &mut setup.rows, &setup.items, &row_ctx);

    let grid_size = Size {
        width: sum_track_sizes(&setup.columns, container.gap.width),
        height: sum_track_sizes(&setup.rows, container.gap.height),
    };
    let container_size = known.unwrap_or(
        (grid_size + inset_sum)
            .maybe_clamp(min_size, max_size)
            .f32_max(padding_border),
    );
    tracing::debug!(
        "compute_grid_layout: node={node}, mode={run_mode:?}, columns={}, rows={}, size={container_size:?}",
        setup.columns.len(),
        setup.rows.len()
    );
    if run_mode == RunMode::ComputeSize {
        return LayoutOutput::from_outer_size(container_size);
    }

    let final_inner = Size {
        width: (container_size.width - inset_sum.width).max(0.0),
        height: (container_size.height - inset_sum.height).max(0.0),
    };
    align_tracks(
        &mut setup.columns,
        final_inner.width,
        container.gap.width,
        container.justify_content,
        container.inset.left,
    );
    align_tracks(
        &mut setup.rows,
        final_inner.height,
        container.gap.height,
        container.align_content,
        container.inset.top,
    );

    let mut content_size = Size::ZERO;
    let mut first_baseline: Option<(usize, f32)> = None;
    for item in &setup.items {
        let placed = place_item(tree, item, &setup.columns, &setup.rows, &container, final_inner);
        content_size = content_size.f32_max(placed.contribution);
        let in_first_row = item.row_tracks.start == 0;
        if in_first_row
            && first_baseline.is_none_or(|(column, _)| item.column_tracks.start < column)
        {
            first_baseline = Some((item.column_tracks.start, placed.baseline));
        }
    }
    content_size.width += container.sizes.padding.right;
    content_size.height += container.sizes.padding.bottom;

    let absolute_size = layout_absolute_children(
        tree,
        node,
        &container,
        container_size,
        &setup.columns,
        &setup.rows,
        (setup.column_counts, setup.row_counts),
    );
    layout_hidden_children(tree, node);

    LayoutOutput {
        size: container_size,
        content_size: content_size.f32_max(absolute_size),
        first_baselines: Point {
            x: None,
            y: first_baseline.map(|(_, baseline)| baseline),
        },
    }
}

/// Offset each track from the container's border-box edge according to the content alignment.
///
/// Spec: §10.5 Aligning the Grid
fn align_tracks(
    tracks: &mut [GridTrack],
    inner_size: f32,
    gap: f32,
    alignment: Option<AlignContent>,
    start: f32,
) {
    let free_space = inner_size - sum_track_sizes(tracks, gap);
    let count = tracks.len();
    let mode = apply_alignment_fallback(
        free_space,
        count,
        alignment.unwrap_or(AlignContent::Stretch),
        false,
    );
    let mut cursor = start;
    for (index, track) in tracks.iter_mut().enumerate() {
        cursor += compute_alignment_offset(free_space, count, gap, mode, false, index == 0);
        track.offset = cursor;
        cursor += track.base_size;
    }
}

/// Result of laying out one item in its area.
struct PlacedItem {
    contribution: Size<f32>,
    /// First baseline in the container's coordinates.
    baseline: f32,
}

fn place_item<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    item: &GridItem,
    columns: &[GridTrack],
    rows: &[GridTrack],
    container: &GridContainer,
    inner_size: Size<f32>,
) -> PlacedItem {
    let parent_size = inner_size.map(Some);
    let sizes = BoxSizes::resolve(tree.style(item.node), parent_size);
    let area_origin = Point {
        x: columns.get(item.column_tracks.start).map_or(container.inset.left, |track| track.offset),
        y: rows.get(item.row_tracks.start).map_or(container.inset.top, |track| track.offset),
    };
    let area_size = Size {
        width: spanned_size(columns, item.column_tracks.clone(), container.gap.width),
        height: spanned_size(rows, item.row_tracks.clone(), container.gap.height),
    };

    let stretch_size = |axis: AbstractAxis| {
        let abs = axis.as_abs();
        let margin_is_auto = item.margin_is_auto.axis_components(abs);
        let stretches = item.alignment(axis) == AlignItems::Stretch
            && item.size_is_auto.get(abs)
            && !margin_is_auto.start
            && !margin_is_auto.end;
        stretches.then(|| {
            (area_size.get(abs) - sizes.margin.axis_sum(abs))
                .maybe_clamp(sizes.min_size.get(abs), sizes.max_size.get(abs))
                .max(0.0)
        })
    };
    let known = Size {
        width: stretch_size(AbstractAxis::Inline),
        height: stretch_size(AbstractAxis::Block),
    };
    let available = Size {
        width: AvailableSpace::Definite(
            (area_size.width - sizes.margin.horizontal_axis_sum()).max(0.0),
        ),
        height: AvailableSpace::Definite(
            (area_size.height - sizes.margin.vertical_axis_sum()).max(0.0),
        ),
    };
    let output = tree.perform_child_layout(
        item.node,
        known,
        parent_size,
        available,
        SizingMode::InherentSize,
    );
    let size = output.size;

    let offset_in_area = |axis: AbstractAxis| {
        let abs = axis.as_abs();
        let margin = sizes.margin.axis_components(abs);
        let margin_is_auto = item.margin_is_auto.axis_components(abs);
        let free_space = area_size.get(abs) - size.get(abs) - margin.sum();
        let leading = match (margin_is_auto.start, margin_is_auto.end) {
            (true, true) => free_space.max(0.0) / 2.0,
            (true, false) => free_space.max(0.0),
            (false, true) => 0.0,
            (false, false) => match item.alignment(axis) {
                AlignItems::Start
                | AlignItems::FlexStart
                | AlignItems::Stretch
                | AlignItems::Baseline => 0.0,
                AlignItems::End | AlignItems::FlexEnd => free_space,
                AlignItems::Center => free_space / 2.0,
            },
        };
        margin.start + leading
    };
    let flow_position = Point {
        x: area_origin.x + offset_in_area(AbstractAxis::Inline),
        y: area_origin.y + offset_in_area(AbstractAxis::Block),
    };
    let location = flow_position + relative_offset(tree.style(item.node), parent_size);

    tracing::trace!(
        "place_item: node={}, area={:?}, location={location:?}, size={size:?}",
        item.node,
        item.area
    );
    tree.set_unrounded_layout(
        item.node,
        &Layout {
            order: item.order,
            location,
            size,
            content_size: output.content_size,
            scrollbar_size: sizes.scrollbar_size(),
            border: sizes.border,
            padding: sizes.padding,
        },
    );
    PlacedItem {
        contribution: compute_content_size_contribution(
            location,
            size,
            output.content_size,
            item.overflow,
        ),
        baseline: flow_position.y + output.first_baselines.y.unwrap_or(size.height),
    }
}

/// Position of a grid line along one axis, `None` outside the implicit grid.
fn line_position(tracks: &[GridTrack], counts: TrackCounts, line: i16) -> Option<f32> {
    let index = counts.line_to_track(line)?;
    match tracks.get(index) {
        Some(track) => Some(track.offset),
        None if index == tracks.len() => tracks.last().map(|last| last.offset + last.base_size),
        None => None,
    }
}

/// Narrow the inset box of one axis to the grid area between `lines`, where both resolve.
fn restrict_to_area(
    context: &mut AbsoluteContext,
    axis: AbsoluteAxis,
    placement: ResolvedPlacement,
    tracks: &[GridTrack],
    counts: TrackCounts,
) {
    let ResolvedPlacement::Definite(Line { start, end }) = placement else {
        return;
    };
    let padding_start = context.inset_origin.get(axis);
    let padding_end = padding_start + context.inset_size.get(axis);
    let from = line_position(tracks, counts, start).unwrap_or(padding_start);
    let to = line_position(tracks, counts, end).unwrap_or(padding_end);
    context.inset_origin.set(axis, from);
    context.inset_size.set(axis, (to - from).max(0.0));
    context.static_origin.set(axis, from);
    context.static_size.set(axis, (to - from).max(0.0));
}

/// Place `position: absolute` children against their grid area, or the padding box where their
/// lines are `auto`.
///
/// Spec: §9 Absolute Positioning
///
/// Returns their content size contribution; they never affect the container's own size.
fn layout_absolute_children<Tree: LayoutPartialTree + ?Sized>(
    tree: &mut Tree,
    node: NodeId,
    container: &GridContainer,
    container_size: Size<f32>,
    columns: &[GridTrack],
    rows: &[GridTrack],
    counts: (TrackCounts, TrackCounts),
) -> Size<f32> {
    let padding_box = AbsoluteContext::padding_box(
        container_size,
        container.sizes.border,
        container.sizes.padding,
        container.sizes.scrollbar_size(),
    );
    let children = tree.children(node).to_vec();
    let mut content_size = Size::ZERO;
    for (order, child) in children.into_iter().enumerate() {
        let style = tree.style(child);
        if style.display == Display::None || style.position != Position::Absolute {
            continue;
        }
        let column_placement = resolve_placement(style.grid_column, counts.0.explicit);
        let row_placement = resolve_placement(style.grid_row, counts.1.explicit);
        let mut context = padding_box;
        restrict_to_area(
            &mut context,
            AbsoluteAxis::Horizontal,
            column_placement,
            columns,
            counts.0,
        );
        restrict_to_area(&mut context, AbsoluteAxis::Vertical, row_placement, rows, counts.1);
        let contribution = layout_absolute_child(tree, child, order as u32, &context);
        content_size = content_size.f32_max(contribution);
    }
    content_size
}

/// Give `display: none` children (and their subtrees) zero layouts.
fn layout_hidden_children<Tree: LayoutPartialTree + ?Sized>(tree: &mut Tree, node: NodeId) {
    let children = tree.children(node).to_vec();
    for (order, child) in children.into_iter().enumerate() {
        if tree.style(child).display == Display::None {
            tree.compute_child_layout(child, LayoutInput::HIDDEN);
            tree.set_unrounded_layout(child, &Layout::with_order(order as u32));
        }
    }
}
