//! Resolving flexible lengths of one flex line.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#resolve-flexible-lengths>

use css_box::{AbsoluteAxis, MaybeMath};
use log::debug;

use crate::chapter5::sum_axis_gaps;
use crate::chapter6::{FlexItem, FreezeState};

/// Phase 5: set every item's target main size so the line fills `inner_main`.
///
/// Growing hands out free space by `flex-grow`; shrinking takes it back by `flex-shrink` weighted by
/// the inner flex basis. Items violating their min/max are clamped and frozen, and the rest of the
/// line is resolved again until every item is frozen.
pub fn resolve_flexible_lengths(
    items: &mut [FlexItem],
    axis: AbsoluteAxis,
    gap: f32,
    inner_main: f32,
) {
    let gaps = sum_axis_gaps(gap, items.len());
    let hypothetical_total: f32 = gaps
        + items
            .iter()
            .map(|item| item.hypothetical_outer_size.main(axis))
            .sum::<f32>();
    let growing = hypothetical_total < inner_main;
    let shrinking = hypothetical_total > inner_main;

    // Size inflexible items.
    for item in items.iter_mut() {
        let hypothetical = item.hypothetical_inner_size.main(axis);
        item.target_size.set_main(axis, hypothetical);
        item.outer_target_size
            .set_main(axis, hypothetical + item.margin.main_axis_sum(axis));
        item.violation = 0.0;
        let factor = if growing {
            item.flex_grow
        } else {
            item.flex_shrink
        };
        let inflexible = (!growing && !shrinking)
            || factor == 0.0
            || (growing && item.flex_basis > hypothetical)
            || (shrinking && item.flex_basis < hypothetical);
        item.freeze = if inflexible {
            FreezeState::FrozenForViolation
        } else {
            FreezeState::Unfrozen
        };
    }
    if !growing && !shrinking {
        return;
    }

    let initial_free_space = inner_main - used_space(items, axis, gaps);
    debug!(
        target: "css::flexbox::resolve",
        "[FLEX-RESOLVE] items={} inner_main={inner_main} free={initial_free_space} growing={growing}",
        items.len()
    );

    // Every pass freezes at least one item, so the loop ends within `len + 1` passes.
    for _ in 0..=items.len() {
        if items.iter().all(|item| item.freeze.is_frozen()) {
            break;
        }
        let remaining = inner_main - used_space(items, axis, gaps);
        let (sum_grow, sum_shrink) = items
            .iter()
            .filter(|item| !item.freeze.is_frozen())
            .fold((0.0_f32, 0.0_f32), |(grow, shrink), item| {
                (grow + item.flex_grow, shrink + item.flex_shrink)
            });
        let factor_sum = if growing { sum_grow } else { sum_shrink };
        let free_space = if factor_sum < 1.0 {
            let scaled = initial_free_space * factor_sum;
            if scaled.abs() < remaining.abs() {
                scaled
            } else {
                remaining
            }
        } else {
            remaining
        };

        if free_space.is_normal() {
            distribute(items, axis, free_space, growing, sum_grow);
        }

        let mut total_violation = 0.0_f32;
        for item in items.iter_mut().filter(|item| !item.freeze.is_frozen()) {
            let target = item.target_size.main(axis);
            let clamped = target
                .maybe_clamp(Some(item.resolved_minimum_main_size), item.max_size.main(axis))
                .max(0.0);
            item.violation = clamped - target;
            item.target_size.set_main(axis, clamped);
            item.outer_target_size
                .set_main(axis, clamped + item.margin.main_axis_sum(axis));
            total_violation += item.violation;
        }

        for item in items.iter_mut().filter(|item| !item.freeze.is_frozen()) {
            item.freeze = if total_violation > 0.0 {
                if item.violation > 0.0 {
                    FreezeState::FrozenAtMin
                } else {
                    FreezeState::Unfrozen
                }
            } else if total_violation < 0.0 {
                if item.violation < 0.0 {
                    FreezeState::FrozenAtMax
                } else {
                    FreezeState::Unfrozen
                }
            } else {
                FreezeState::FrozenForViolation
            };
        }
    }
}

/// Outer space taken by the line: frozen items at their target, others at their flex base size.
fn used_space(items: &[FlexItem], axis: AbsoluteAxis, gaps: f32) -> f32 {
    gaps + items
        .iter()
        .map(|item| {
            if item.freeze.is_frozen() {
                item.outer_target_size.main(axis)
            } else {
                item.flex_basis + item.margin.main_axis_sum(axis)
            }
        })
        .sum::<f32>()
}

fn distribute(
    items: &mut [FlexItem],
    axis: AbsoluteAxis,
    free_space: f32,
    growing: bool,
    sum_grow: f32,
) {
    if growing {
        if sum_grow <= 0.0 {
            return;
        }
        for item in items.iter_mut().filter(|item| !item.freeze.is_frozen()) {
            item.target_size.set_main(
                axis,
                item.flex_basis + free_space * (item.flex_grow / sum_grow),
            );
        }
        return;
    }
    let sum_scaled_shrink: f32 = items
        .iter()
        .filter(|item| !item.freeze.is_frozen())
        .map(|item| item.inner_flex_basis * item.flex_shrink)
        .sum();
    if sum_scaled_shrink <= 0.0 {
        return;
    }
    for item in items.iter_mut().filter(|item| !item.freeze.is_frozen()) {
        let scaled = item.inner_flex_basis * item.flex_shrink;
        item.target_size.set_main(
            axis,
            item.flex_basis + free_space * (scaled / sum_scaled_shrink),
        );
    }
}
