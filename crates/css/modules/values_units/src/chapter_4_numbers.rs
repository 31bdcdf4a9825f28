//! CSS Values & Units Level 3: §4 Numbers
//! Spec: <https://www.w3.org/TR/css-values-3/#numbers>
//!
//! Layout never sees NaN or infinities: every number entering a style is sanitised here first.

use serde::{Deserialize, Serialize};

/// What was wrong with a number that had to be replaced.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum NumericIssue {
    NaN,
    Infinite,
    Negative,
}

/// A sanitised number plus the issue that forced a replacement, if any.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Sanitized {
    pub value: f32,
    pub issue: Option<NumericIssue>,
}

/// Replace NaN and infinities by 0, and negatives by 0 unless `allow_negative`.
///
/// Margins and insets may be negative in CSS; sizes, padding, borders, gaps and flex factors
/// may not.
#[inline]
pub fn sanitize_number(value: f32, allow_negative: bool) -> Sanitized {
    let issue = if value.is_nan() {
        Some(NumericIssue::NaN)
    } else if value.is_infinite() {
        Some(NumericIssue::Infinite)
    } else if value < 0.0 && !allow_negative {
        Some(NumericIssue::Negative)
    } else {
        None
    };
    Sanitized {
        value: if issue.is_some() { 0.0 } else { value },
        issue,
    }
}
