//! Grid track sizing functions and item placement values.
//!
//! Spec: <https://www.w3.org/TR/css-grid-1/#track-sizing>

use css_values_units::{LengthPercentage, NumericIssue, StyleUnit, StyleValue, sanitize_number};
use serde::{Deserialize, Serialize};

/// Minimum half of `minmax()`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MinTrackSizingFunction {
    Fixed(LengthPercentage),
    MinContent,
    MaxContent,
    Auto,
}

/// Maximum half of `minmax()`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MaxTrackSizingFunction {
    Fixed(LengthPercentage),
    MinContent,
    MaxContent,
    FitContent(LengthPercentage),
    Auto,
    /// `fr` flex factor.
    Fraction(f32),
}

impl MinTrackSizingFunction {
    #[inline]
    pub const fn is_intrinsic(self) -> bool {
        matches!(self, Self::MinContent | Self::MaxContent | Self::Auto)
    }

    /// Fixed length resolved against the container's inner size, if resolvable.
    pub fn definite_value(self, parent_size: Option<f32>) -> Option<f32> {
        match self {
            Self::Fixed(LengthPercentage::Length(length)) => Some(length),
            Self::Fixed(LengthPercentage::Percent(fraction)) => parent_size.map(|size| fraction * size),
            Self::MinContent | Self::MaxContent | Self::Auto => None,
        }
    }

    /// Percentages resolve against an indefinite container as if they were `auto`.
    #[inline]
    pub fn uses_percentage(self) -> bool {
        matches!(self, Self::Fixed(LengthPercentage::Percent(_)))
    }
}

impl MaxTrackSizingFunction {
    #[inline]
    pub const fn is_intrinsic(self) -> bool {
        matches!(
            self,
            Self::MinContent | Self::MaxContent | Self::FitContent(_) | Self::Auto
        )
    }

    #[inline]
    pub const fn is_max_content_alike(self) -> bool {
        matches!(self, Self::MaxContent | Self::FitContent(_) | Self::Auto)
    }

    #[inline]
    pub const fn is_flexible(self) -> bool {
        matches!(self, Self::Fraction(_))
    }

    /// Fixed length resolved against the container's inner size, if resolvable.
    pub fn definite_value(self, parent_size: Option<f32>) -> Option<f32> {
        match self {
            Self::Fixed(LengthPercentage::Length(length)) => Some(length),
            Self::Fixed(LengthPercentage::Percent(fraction)) => parent_size.map(|size| fraction * size),
            Self::MinContent
            | Self::MaxContent
            | Self::FitContent(_)
            | Self::Auto
            | Self::Fraction(_) => None,
        }
    }

    /// Fixed limit or fit-content argument resolved against the container's inner size.
    pub fn definite_limit(self, parent_size: Option<f32>) -> Option<f32> {
        match self {
            Self::FitContent(LengthPercentage::Length(length)) => Some(length),
            Self::FitContent(LengthPercentage::Percent(fraction)) => {
                parent_size.map(|size| fraction * size)
            }
            other => other.definite_value(parent_size),
        }
    }

    #[inline]
    pub const fn flex_factor(self) -> f32 {
        match self {
            Self::Fraction(factor) => factor,
            Self::Fixed(_)
            | Self::MinContent
            | Self::MaxContent
            | Self::FitContent(_)
            | Self::Auto => 0.0,
        }
    }
}

/// `minmax(min, max)` or a single value standing for both halves.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NonRepeatedTrackSizingFunction {
    pub min: MinTrackSizingFunction,
    pub max: MaxTrackSizingFunction,
}

impl NonRepeatedTrackSizingFunction {
    pub const AUTO: Self = Self {
        min: MinTrackSizingFunction::Auto,
        max: MaxTrackSizingFunction::Auto,
    };

    pub const fn length(value: f32) -> Self {
        Self {
            min: MinTrackSizingFunction::Fixed(LengthPercentage::Length(value)),
            max: MaxTrackSizingFunction::Fixed(LengthPercentage::Length(value)),
        }
    }

    pub const fn percent(fraction: f32) -> Self {
        Self {
            min: MinTrackSizingFunction::Fixed(LengthPercentage::Percent(fraction)),
            max: MaxTrackSizingFunction::Fixed(LengthPercentage::Percent(fraction)),
        }
    }

    /// `Nfr`, whose minimum is `auto`.
    pub const fn fr(factor: f32) -> Self {
        Self {
            min: MinTrackSizingFunction::Auto,
            max: MaxTrackSizingFunction::Fraction(factor),
        }
    }

    pub const fn min_content() -> Self {
        Self {
            min: MinTrackSizingFunction::MinContent,
            max: MaxTrackSizingFunction::MinContent,
        }
    }

    pub const fn max_content() -> Self {
        Self {
            min: MinTrackSizingFunction::MaxContent,
            max: MaxTrackSizingFunction::MaxContent,
        }
    }

    pub const fn fit_content(limit: LengthPercentage) -> Self {
        Self {
            min: MinTrackSizingFunction::Auto,
            max: MaxTrackSizingFunction::FitContent(limit),
        }
    }

    pub const fn minmax(min: MinTrackSizingFunction, max: MaxTrackSizingFunction) -> Self {
        Self { min, max }
    }

    /// Zero out NaN, infinite and negative payloads.
    pub fn sanitize(&mut self) -> Vec<NumericIssue> {
        let mut issues = Vec::new();
        if let MinTrackSizingFunction::Fixed(length) = &mut self.min {
            let (value, issue) = length.sanitized(false);
            *length = value;
            issues.extend(issue);
        }
        match &mut self.max {
            MaxTrackSizingFunction::Fixed(length) | MaxTrackSizingFunction::FitContent(length) => {
                let (value, issue) = length.sanitized(false);
                *length = value;
                issues.extend(issue);
            }
            MaxTrackSizingFunction::Fraction(factor) => {
                let sanitized = sanitize_number(*factor, false);
                *factor = sanitized.value;
                issues.extend(sanitized.issue);
            }
            MaxTrackSizingFunction::MinContent
            | MaxTrackSizingFunction::MaxContent
            | MaxTrackSizingFunction::Auto => {}
        }
        issues
    }
}

impl Default for NonRepeatedTrackSizingFunction {
    fn default() -> Self {
        Self::AUTO
    }
}

impl From<StyleValue> for NonRepeatedTrackSizingFunction {
    /// Tracks accept every unit, so the conversion cannot fail.
    fn from(pair: StyleValue) -> Self {
        match pair.unit {
            StyleUnit::Px => Self::length(pair.value),
            StyleUnit::Percent => Self::percent(pair.value),
            StyleUnit::Auto => Self::AUTO,
            StyleUnit::MinContent => Self::min_content(),
            StyleUnit::MaxContent => Self::max_content(),
            StyleUnit::FitContentPx => Self::fit_content(LengthPercentage::Length(pair.value)),
            StyleUnit::FitContentPercent => Self::fit_content(LengthPercentage::Percent(pair.value)),
            StyleUnit::Fr => Self::fr(pair.value),
        }
    }
}

/// One entry of a `grid-template-*` list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum TrackSizingFunction {
    Single(NonRepeatedTrackSizingFunction),
    /// `repeat(count, tracks)`.
    Repeat(u16, Vec<NonRepeatedTrackSizingFunction>),
}

impl TrackSizingFunction {
    /// Number of explicit tracks this entry expands to.
    pub fn track_count(&self) -> usize {
        match self {
            Self::Single(_) => 1,
            Self::Repeat(count, tracks) => usize::from(*count) * tracks.len(),
        }
    }

    pub fn sanitize(&mut self) -> Vec<NumericIssue> {
        match self {
            Self::Single(track) => track.sanitize(),
            Self::Repeat(_, tracks) => tracks.iter_mut().flat_map(NonRepeatedTrackSizingFunction::sanitize).collect(),
        }
    }
}

impl From<NonRepeatedTrackSizingFunction> for TrackSizingFunction {
    fn from(track: NonRepeatedTrackSizingFunction) -> Self {
        Self::Single(track)
    }
}

/// Expand `repeat()` entries into a flat list of explicit tracks.
pub fn expand_template(template: &[TrackSizingFunction]) -> Vec<NonRepeatedTrackSizingFunction> {
    let mut tracks = Vec::with_capacity(template.iter().map(TrackSizingFunction::track_count).sum());
    for entry in template {
        match entry {
            TrackSizingFunction::Single(track) => tracks.push(*track),
            TrackSizingFunction::Repeat(count, repeated) => {
                for _ in 0..*count {
                    tracks.extend_from_slice(repeated);
                }
            }
        }
    }
    tracks
}

/// One end of a `grid-row` / `grid-column` placement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridPlacement {
    #[default]
    Auto,
    /// 1-based line; negative counts from the end of the explicit grid. `0` is treated as `auto`.
    Line(i16),
    /// `span N` with `N >= 1`.
    Span(u16),
}

impl GridPlacement {
    /// Line 0 and span 0 are invalid in CSS and fall back to `auto` / `span 1`.
    #[inline]
    pub const fn normalized(self) -> Self {
        match self {
            Self::Line(0) => Self::Auto,
            Self::Span(0) => Self::Span(1),
            other => other,
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GridAutoFlow {
    #[default]
    Row,
    Column,
    RowDense,
    ColumnDense,
}

impl GridAutoFlow {
    /// Whether auto-placed items fill rows before columns.
    #[inline]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowDense)
    }

    #[inline]
    pub const fn is_dense(self) -> bool {
        matches!(self, Self::RowDense | Self::ColumnDense)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// # Panics
    /// Panics if `repeat()` does not expand into its tracks in order.
    fn repeat_expands_in_order() {
        let template = vec![
            TrackSizingFunction::Single(NonRepeatedTrackSizingFunction::length(10.0)),
            TrackSizingFunction::Repeat(
                2,
                vec![
                    NonRepeatedTrackSizingFunction::fr(1.0),
                    NonRepeatedTrackSizingFunction::AUTO,
                ],
            ),
        ];
        let tracks = expand_template(&template);
        assert_eq!(tracks.len(), 5);
        assert_eq!(tracks.get(1), Some(&NonRepeatedTrackSizingFunction::fr(1.0)));
        assert_eq!(tracks.get(4), Some(&NonRepeatedTrackSizingFunction::AUTO));
    }

    #[test]
    /// # Panics
    /// Panics if a unit pair maps onto the wrong track sizing function.
    fn style_values_map_to_tracks() {
        let fit: NonRepeatedTrackSizingFunction = StyleValue::new(40.0, StyleUnit::FitContentPx).into();
        assert_eq!(fit.min, MinTrackSizingFunction::Auto);
        assert_eq!(
            fit.max,
            MaxTrackSizingFunction::FitContent(LengthPercentage::Length(40.0))
        );
        let flex: NonRepeatedTrackSizingFunction = StyleValue::new(2.0, StyleUnit::Fr).into();
        assert_eq!(flex.max.flex_factor(), 2.0);
        assert!(flex.min.is_intrinsic());
    }

    #[test]
    /// # Panics
    /// Panics if invalid placements are not normalised.
    fn zero_line_and_span_are_normalized() {
        assert_eq!(GridPlacement::Line(0).normalized(), GridPlacement::Auto);
        assert_eq!(GridPlacement::Span(0).normalized(), GridPlacement::Span(1));
        assert_eq!(GridPlacement::Line(-1).normalized(), GridPlacement::Line(-1));
    }
}
