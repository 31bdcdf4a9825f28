//! Keyed property setters.
//!
//! Embedders that do not build a whole [`Style`] mutate one property at a time: lengths arrive as
//! `(value, unit)` pairs addressed by [`StylePropertyKey`], keywords and lists as typed
//! [`StyleProperty`] variants.

use css_values_units::{
    Dimension, LengthPercentage, LengthPercentageAuto, NumericIssue, StyleUnit, StyleValue,
    sanitize_number,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::grid_model::{GridAutoFlow, GridPlacement, NonRepeatedTrackSizingFunction, TrackSizingFunction};
use crate::style_model::{
    AlignContent, AlignItems, Display, FlexDirection, FlexWrap, Overflow, Position, Style,
};

/// Every property set through a `(value, unit)` pair.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum StylePropertyKey {
    InsetLeft,
    InsetRight,
    InsetTop,
    InsetBottom,
    Width,
    Height,
    MinWidth,
    MinHeight,
    MaxWidth,
    MaxHeight,
    AspectRatio,
    MarginLeft,
    MarginRight,
    MarginTop,
    MarginBottom,
    PaddingLeft,
    PaddingRight,
    PaddingTop,
    PaddingBottom,
    BorderLeft,
    BorderRight,
    BorderTop,
    BorderBottom,
    RowGap,
    ColumnGap,
    ScrollbarWidth,
    FlexGrow,
    FlexShrink,
    FlexBasis,
}

/// A unit the addressed property does not accept.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Error)]
#[error("property {property:?} does not accept unit {unit:?}")]
pub struct InvalidUnit {
    pub property: StylePropertyKey,
    pub unit: StyleUnit,
}

/// One style property assignment.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum StyleProperty {
    Length(StylePropertyKey, StyleValue),
    Display(Display),
    Position(Position),
    OverflowX(Overflow),
    OverflowY(Overflow),
    AlignItems(Option<AlignItems>),
    AlignSelf(Option<AlignItems>),
    JustifyItems(Option<AlignItems>),
    JustifySelf(Option<AlignItems>),
    AlignContent(Option<AlignContent>),
    JustifyContent(Option<AlignContent>),
    FlexDirection(FlexDirection),
    FlexWrap(FlexWrap),
    GridAutoFlow(GridAutoFlow),
    GridRowStart(GridPlacement),
    GridRowEnd(GridPlacement),
    GridColumnStart(GridPlacement),
    GridColumnEnd(GridPlacement),
    GridTemplateRows(Vec<TrackSizingFunction>),
    GridTemplateColumns(Vec<TrackSizingFunction>),
    GridAutoRows(Vec<NonRepeatedTrackSizingFunction>),
    GridAutoColumns(Vec<NonRepeatedTrackSizingFunction>),
}

impl StyleProperty {
    /// Write the property into `style`.
    ///
    /// Numbers that had to be replaced during sanitisation are returned; the write still happens.
    ///
    /// # Errors
    /// Returns [`InvalidUnit`] if a `(value, unit)` pair uses a unit its property rejects. `style`
    /// is left untouched in that case.
    pub fn apply(self, style: &mut Style) -> Result<Vec<NumericIssue>, InvalidUnit> {
        let mut issues = Vec::new();
        match self {
            Self::Length(key, value) => issues.extend(apply_length(style, key, value)?),
            Self::Display(display) => style.display = display,
            Self::Position(position) => style.position = position,
            Self::OverflowX(overflow) => style.overflow.x = overflow,
            Self::OverflowY(overflow) => style.overflow.y = overflow,
            Self::AlignItems(align) => style.align_items = align,
            Self::AlignSelf(align) => style.align_self = align,
            Self::JustifyItems(align) => style.justify_items = align,
            Self::JustifySelf(align) => style.justify_self = align,
            Self::AlignContent(align) => style.align_content = align,
            Self::JustifyContent(align) => style.justify_content = align,
            Self::FlexDirection(direction) => style.flex_direction = direction,
            Self::FlexWrap(wrap) => style.flex_wrap = wrap,
            Self::GridAutoFlow(flow) => style.grid_auto_flow = flow,
            Self::GridRowStart(placement) => style.grid_row.start = placement,
            Self::GridRowEnd(placement) => style.grid_row.end = placement,
            Self::GridColumnStart(placement) => style.grid_column.start = placement,
            Self::GridColumnEnd(placement) => style.grid_column.end = placement,
            Self::GridTemplateRows(mut tracks) => {
                tracks.iter_mut().for_each(|track| issues.extend(track.sanitize()));
                style.grid_template_rows = tracks;
            }
            Self::GridTemplateColumns(mut tracks) => {
                tracks.iter_mut().for_each(|track| issues.extend(track.sanitize()));
                style.grid_template_columns = tracks;
            }
            Self::GridAutoRows(mut tracks) => {
                tracks.iter_mut().for_each(|track| issues.extend(track.sanitize()));
                style.grid_auto_rows = tracks;
            }
            Self::GridAutoColumns(mut tracks) => {
                tracks.iter_mut().for_each(|track| issues.extend(track.sanitize()));
                style.grid_auto_columns = tracks;
            }
        }
        if !issues.is_empty() {
            log::warn!(
                target: "css::style",
                "[STYLE-SANITIZE] replaced invalid numeric input: {issues:?}"
            );
        }
        Ok(issues)
    }
}

fn apply_length(
    style: &mut Style,
    key: StylePropertyKey,
    value: StyleValue,
) -> Result<Option<NumericIssue>, InvalidUnit> {
    use StylePropertyKey as Key;

    let invalid = |mismatch: css_values_units::UnitMismatch| InvalidUnit {
        property: key,
        unit: mismatch.0,
    };

    let inset_or_margin = |slot: &mut LengthPercentageAuto| -> Result<Option<NumericIssue>, InvalidUnit> {
        let parsed = LengthPercentageAuto::try_from(value).map_err(invalid)?;
        let (sanitized, issue) = parsed.sanitized(true);
        *slot = sanitized;
        Ok(issue)
    };
    let spacing = |slot: &mut LengthPercentage| -> Result<Option<NumericIssue>, InvalidUnit> {
        let parsed = LengthPercentage::try_from(value).map_err(invalid)?;
        let (sanitized, issue) = parsed.sanitized(false);
        *slot = sanitized;
        Ok(issue)
    };
    let dimension = |slot: &mut Dimension| -> Result<Option<NumericIssue>, InvalidUnit> {
        let parsed = Dimension::try_from(value).map_err(invalid)?;
        let (sanitized, issue) = parsed.sanitized(false);
        *slot = sanitized;
        Ok(issue)
    };
    let number = |slot: &mut f32| -> Result<Option<NumericIssue>, InvalidUnit> {
        if value.unit != StyleUnit::Px {
            return Err(InvalidUnit {
                property: key,
                unit: value.unit,
            });
        }
        let sanitized = sanitize_number(value.value, false);
        *slot = sanitized.value;
        Ok(sanitized.issue)
    };

    match key {
        Key::InsetLeft => inset_or_margin(&mut style.inset.left),
        Key::InsetRight => inset_or_margin(&mut style.inset.right),
        Key::InsetTop => inset_or_margin(&mut style.inset.top),
        Key::InsetBottom => inset_or_margin(&mut style.inset.bottom),
        Key::MarginLeft => inset_or_margin(&mut style.margin.left),
        Key::MarginRight => inset_or_margin(&mut style.margin.right),
        Key::MarginTop => inset_or_margin(&mut style.margin.top),
        Key::MarginBottom => inset_or_margin(&mut style.margin.bottom),
        Key::Width => dimension(&mut style.size.width),
        Key::Height => dimension(&mut style.size.height),
        Key::MinWidth => dimension(&mut style.min_size.width),
        Key::MinHeight => dimension(&mut style.min_size.height),
        Key::MaxWidth => dimension(&mut style.max_size.width),
        Key::MaxHeight => dimension(&mut style.max_size.height),
        Key::FlexBasis => dimension(&mut style.flex_basis),
        Key::PaddingLeft => spacing(&mut style.padding.left),
        Key::PaddingRight => spacing(&mut style.padding.right),
        Key::PaddingTop => spacing(&mut style.padding.top),
        Key::PaddingBottom => spacing(&mut style.padding.bottom),
        Key::BorderLeft => spacing(&mut style.border.left),
        Key::BorderRight => spacing(&mut style.border.right),
        Key::BorderTop => spacing(&mut style.border.top),
        Key::BorderBottom => spacing(&mut style.border.bottom),
        Key::RowGap => spacing(&mut style.gap.height),
        Key::ColumnGap => spacing(&mut style.gap.width),
        Key::ScrollbarWidth => number(&mut style.scrollbar_width),
        Key::FlexGrow => number(&mut style.flex_grow),
        Key::FlexShrink => number(&mut style.flex_shrink),
        Key::AspectRatio => match value.unit {
            StyleUnit::Auto => {
                style.aspect_ratio = None;
                Ok(None)
            }
            StyleUnit::Px => {
                let ratio = value.value;
                if ratio.is_finite() && ratio > 0.0 {
                    style.aspect_ratio = Some(ratio);
                    Ok(None)
                } else {
                    style.aspect_ratio = None;
                    Ok(Some(if ratio.is_nan() {
                        NumericIssue::NaN
                    } else if ratio.is_infinite() {
                        NumericIssue::Infinite
                    } else {
                        NumericIssue::Negative
                    }))
                }
            }
            other => Err(InvalidUnit {
                property: key,
                unit: other,
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if keyed lengths land in the wrong slot or bypass sanitisation.
    fn keyed_lengths_are_validated_and_sanitized() {
        let mut style = Style::default();
        let width = StyleProperty::Length(StylePropertyKey::Width, StyleValue::percent(0.5))
            .apply(&mut style);
        assert_eq!(width, Ok(Vec::new()));
        assert_eq!(style.size.width, Dimension::Percent(0.5));

        let negative_padding =
            StyleProperty::Length(StylePropertyKey::PaddingTop, StyleValue::px(-4.0))
                .apply(&mut style);
        assert_eq!(negative_padding, Ok(vec![NumericIssue::Negative]));
        assert_eq!(style.padding.top, LengthPercentage::Length(0.0));

        let negative_margin =
            StyleProperty::Length(StylePropertyKey::MarginTop, StyleValue::px(-4.0))
                .apply(&mut style);
        assert_eq!(negative_margin, Ok(Vec::new()));
        assert_eq!(style.margin.top, LengthPercentageAuto::Length(-4.0));
    }

    #[test]
    /// # Panics
    /// Panics if a rejected unit is reported for the wrong property or still written.
    fn rejected_unit_leaves_style_untouched() {
        let mut style = Style::default();
        let result = StyleProperty::Length(
            StylePropertyKey::Width,
            StyleValue::new(1.0, StyleUnit::Fr),
        )
        .apply(&mut style);
        assert_eq!(
            result,
            Err(InvalidUnit {
                property: StylePropertyKey::Width,
                unit: StyleUnit::Fr,
            })
        );
        assert_eq!(style.size.width, Dimension::Auto);
    }

    #[test]
    /// # Panics
    /// Panics if aspect ratios are not cleared by `auto` or by non-positive input.
    fn aspect_ratio_accepts_numbers_and_auto() {
        let mut style = Style::default();
        let set = StyleProperty::Length(StylePropertyKey::AspectRatio, StyleValue::px(2.0))
            .apply(&mut style);
        assert_eq!(set, Ok(Vec::new()));
        assert_eq!(style.aspect_ratio, Some(2.0));
        let cleared = StyleProperty::Length(StylePropertyKey::AspectRatio, StyleValue::px(-1.0))
            .apply(&mut style);
        assert_eq!(cleared, Ok(vec![NumericIssue::Negative]));
        assert_eq!(style.aspect_ratio, None);
    }

    #[test]
    /// # Panics
    /// Panics if keyword setters do not write their field.
    fn keyword_properties_write_fields() {
        let mut style = Style::default();
        let applied = [
            StyleProperty::Display(Display::Grid),
            StyleProperty::OverflowY(Overflow::Scroll),
            StyleProperty::GridColumnStart(GridPlacement::Line(2)),
            StyleProperty::JustifyContent(Some(AlignContent::SpaceBetween)),
        ]
        .into_iter()
        .map(|property| property.apply(&mut style))
        .all(|result| result.is_ok_and(|issues| issues.is_empty()));
        assert!(applied);
        assert_eq!(style.display, Display::Grid);
        assert_eq!(style.overflow.y, Overflow::Scroll);
        assert_eq!(style.grid_column.start, GridPlacement::Line(2));
        assert_eq!(style.justify_content, Some(AlignContent::SpaceBetween));
    }
}
