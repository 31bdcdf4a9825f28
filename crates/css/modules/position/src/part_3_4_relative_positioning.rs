//! Spec: CSS Position 3 §3.4 Relative positioning
//! <https://www.w3.org/TR/css-position-3/#relpos-insets>

use css_box::{Point, Size};
use css_orchestrator::{Position, Style};
use css_values_units::MaybeResolve;

/// Visual offset of a relatively positioned box.
///
/// The offset moves the box after layout without affecting any other box. When both insets of an
/// axis are set, `left`/`top` win. Absolute boxes get no offset here: their insets place them.
pub fn relative_offset(style: &Style, containing_block: Size<Option<f32>>) -> Point<f32> {
    if style.position != Position::Relative {
        return Point::ZERO;
    }
    let left = style.inset.left.maybe_resolve(containing_block.width);
    let right = style.inset.right.maybe_resolve(containing_block.width);
    let top = style.inset.top.maybe_resolve(containing_block.height);
    let bottom = style.inset.bottom.maybe_resolve(containing_block.height);
    Point {
        x: left.or(right.map(|value| -value)).unwrap_or(0.0),
        y: top.or(bottom.map(|value| -value)).unwrap_or(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use css_box::Rect;
    use css_values_units::LengthPercentageAuto;

    #[test]
    /// # Panics
    /// Panics if start insets do not win or end insets are not negated.
    fn start_inset_wins_and_end_inset_negates() {
        let style = Style {
            inset: Rect {
                left: LengthPercentageAuto::Length(5.0),
                right: LengthPercentageAuto::Length(50.0),
                top: LengthPercentageAuto::Auto,
                bottom: LengthPercentageAuto::Percent(0.1),
            },
            ..Style::default()
        };
        let offset = relative_offset(&style, Size::new(100.0, 200.0));
        assert_eq!(offset, Point { x: 5.0, y: -20.0 });
    }

    #[test]
    /// # Panics
    /// Panics if an absolute box is shifted by the relative offset helper.
    fn absolute_boxes_are_not_offset() {
        let style = Style {
            position: Position::Absolute,
            inset: Rect {
                left: LengthPercentageAuto::Length(5.0),
                ..Style::default().inset
            },
            ..Style::default()
        };
        assert_eq!(relative_offset(&style, Size::NONE), Point::ZERO);
    }
}
