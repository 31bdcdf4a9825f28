//! Helpers shared by the integration tests.

#![allow(dead_code, reason = "each test binary uses a different subset")]

use boxflow::{AvailableSpace, Dimension, LayoutView, Size, Style};

pub const EPSILON: f32 = 0.01;

pub fn init_logging() {
    let _ignored = env_logger::builder().is_test(true).try_init();
}

/// # Panics
/// Panics if `actual` is further than [`EPSILON`] from `expected`.
pub fn assert_close(actual: f32, expected: f32) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

pub const fn px(value: f32) -> Dimension {
    Dimension::Length(value)
}

pub const fn fixed_size(width: f32, height: f32) -> Size<Dimension> {
    Size {
        width: px(width),
        height: px(height),
    }
}

/// Style with a definite border-box size.
pub fn sized(width: f32, height: f32) -> Style {
    Style {
        size: fixed_size(width, height),
        ..Style::default()
    }
}

pub const fn definite(width: f32, height: f32) -> Size<AvailableSpace> {
    Size {
        width: AvailableSpace::Definite(width),
        height: AvailableSpace::Definite(height),
    }
}

pub const MAX_CONTENT: Size<AvailableSpace> = Size {
    width: AvailableSpace::MaxContent,
    height: AvailableSpace::MaxContent,
};

/// The `index`-th child view.
///
/// # Panics
/// Panics if the view has no such child.
pub fn child(view: &LayoutView, index: usize) -> &LayoutView {
    assert!(
        index < view.child_count,
        "view has {} children, no child {index}",
        view.child_count
    );
    &view.children[index]
}
