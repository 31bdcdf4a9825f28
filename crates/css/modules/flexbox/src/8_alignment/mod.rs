//! Alignment: auto margins, `justify-content`, `align-self`, `align-content` and baselines.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#alignment>

mod align_content;
mod align_items;
mod auto_margins;
mod baseline;
mod justify_content;

pub use align_content::{align_lines, stretch_lines};
pub use align_items::align_items_in_lines;
#[cfg(test)]
pub use align_items::cross_offset;
pub use baseline::{
    baseline_adjusted_outer_cross, compute_item_baselines, container_first_baseline,
    line_max_baseline,
};
pub use justify_content::distribute_remaining_free_space;
