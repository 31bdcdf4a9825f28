//! Flex Formatting Context (FFC)
//! Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>

use css_orchestrator::{Display, Position, Style};

/// Returns true when the element establishes a Flex Formatting Context (FFC).
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#flex-containers>
#[inline]
pub const fn establishes_flex_formatting_context(display: Display) -> bool {
    matches!(display, Display::Flex)
}

/// Returns true when a child of a flex container participates in flex layout.
///
/// Absolutely positioned children do not: they are laid out against the container's padding box
/// after the flex lines are placed. `display: none` children generate no box at all.
///
/// Spec: <https://www.w3.org/TR/css-flexbox-1/#abspos-items>
#[inline]
pub fn is_flex_item(style: &Style) -> bool {
    style.display != Display::None && style.position != Position::Absolute
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if `establishes_flex_formatting_context` does not return true for Flex only.
    fn flex_formats_established_for_flex_keyword() {
        assert!(establishes_flex_formatting_context(Display::Flex));
        assert!(!establishes_flex_formatting_context(Display::Block));
        assert!(!establishes_flex_formatting_context(Display::Grid));
        assert!(!establishes_flex_formatting_context(Display::None));
    }

    #[test]
    /// # Panics
    /// Panics if hidden or absolutely positioned children are treated as flex items.
    fn out_of_flow_children_are_not_items() {
        let hidden = Style {
            display: Display::None,
            ..Style::DEFAULT
        };
        let absolute = Style {
            position: Position::Absolute,
            ..Style::DEFAULT
        };
        assert!(is_flex_item(&Style::DEFAULT));
        assert!(!is_flex_item(&hidden));
        assert!(!is_flex_item(&absolute));
    }
}
