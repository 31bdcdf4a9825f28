//! CSS Flexible Box Layout Module Level 1: Flex formatting context.
//! Spec: <https://www.w3.org/TR/css-flexbox-1/>

// Chapter modules mapped to the Flexbox Level 1 spec structure.
// Spec: §4 Flex Formatting Context
#[path = "4_flex_formatting_context/mod.rs"]
mod chapter4;
// Spec: §5 Flex Containers
#[path = "5_flex_containers/mod.rs"]
mod chapter5;
// Spec: §6 Flex Items
#[path = "6_flex_items/mod.rs"]
mod chapter6;
// Spec: §7 Axis and Order
#[path = "7_axis_and_order/mod.rs"]
mod chapter7;
// Spec: §8 Alignment
#[path = "8_alignment/mod.rs"]
mod chapter8;
// Spec: §9 Flex Layout Algorithm
#[path = "9_flex_layout_algorithm/mod.rs"]
mod chapter9;

pub use chapter4::{establishes_flex_formatting_context, is_flex_item};
pub use chapter5::FlexContainer;
pub use chapter6::{FlexItem, FreezeState};
pub use chapter9::{FlexLine, compute_flexbox_layout};
