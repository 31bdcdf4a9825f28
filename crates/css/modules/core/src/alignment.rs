//! Distribution of free space among a run of boxes (flex lines, flex items, grid tracks).
//!
//! Spec: <https://www.w3.org/TR/css-align-3/#distribution-values>

use css_orchestrator::AlignContent;

/// Resolve a distributed alignment that cannot apply to the given free space.
///
/// A single item or non-positive free space cannot be distributed: `stretch` and `space-between`
/// fall back to `flex-start`, `space-around` and `space-evenly` to `center`. Fallbacks are safe, so
/// they become `start` when the run overflows.
pub fn apply_alignment_fallback(
    free_space: f32,
    num_items: usize,
    alignment_mode: AlignContent,
    is_safe: bool,
) -> AlignContent {
    let (mode, safe) = if num_items <= 1 || free_space <= 0.0 {
        match alignment_mode {
            AlignContent::Stretch | AlignContent::SpaceBetween => (AlignContent::FlexStart, true),
            AlignContent::SpaceAround | AlignContent::SpaceEvenly => (AlignContent::Center, true),
            AlignContent::Start
            | AlignContent::End
            | AlignContent::FlexStart
            | AlignContent::FlexEnd
            | AlignContent::Center => (alignment_mode, is_safe),
        }
    } else {
        (alignment_mode, is_safe)
    };
    if free_space <= 0.0 && safe {
        AlignContent::Start
    } else {
        mode
    }
}

/// Offset before one box of a run.
///
/// For the first box this is the leading space; for later ones it is the gap plus the share of
/// distributed space between two boxes.
pub fn compute_alignment_offset(
    free_space: f32,
    num_items: usize,
    gap: f32,
    alignment_mode: AlignContent,
    layout_is_flex_reversed: bool,
    is_first: bool,
) -> f32 {
    let count = num_items.max(1) as f32;
    if is_first {
        match alignment_mode {
            AlignContent::Start | AlignContent::Stretch | AlignContent::SpaceBetween => 0.0,
            AlignContent::End => free_space,
            AlignContent::FlexStart => {
                if layout_is_flex_reversed {
                    free_space
                } else {
                    0.0
                }
            }
            AlignContent::FlexEnd => {
                if layout_is_flex_reversed {
                    0.0
                } else {
                    free_space
                }
            }
            AlignContent::Center => free_space / 2.0,
            AlignContent::SpaceAround => {
                if free_space >= 0.0 {
                    free_space / count / 2.0
                } else {
                    free_space / 2.0
                }
            }
            AlignContent::SpaceEvenly => {
                if free_space >= 0.0 {
                    free_space / (count + 1.0)
                } else {
                    free_space / 2.0
                }
            }
        }
    } else {
        let free_space = free_space.max(0.0);
        gap + match alignment_mode {
            AlignContent::Start
            | AlignContent::FlexStart
            | AlignContent::End
            | AlignContent::FlexEnd
            | AlignContent::Center
            | AlignContent::Stretch => 0.0,
            AlignContent::SpaceBetween => {
                if num_items > 1 {
                    free_space / (count - 1.0)
                } else {
                    0.0
                }
            }
            AlignContent::SpaceAround => free_space / count,
            AlignContent::SpaceEvenly => free_space / (count + 1.0),
        }
    }
}
