use css_core::Layout;
use serde::{Deserialize, Serialize};

/// Owned snapshot of a laid out subtree.
///
/// `x`/`y` are relative to the parent's border box, like [`Layout::location`]. Children appear in
/// source order, whatever the flex direction.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LayoutView {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub child_count: usize,
    pub children: Vec<Self>,
}

impl LayoutView {
    pub(crate) fn from_layout(layout: &Layout, children: Vec<Self>) -> Self {
        Self {
            x: layout.location.x,
            y: layout.location.y,
            width: layout.size.width,
            height: layout.size.height,
            child_count: children.len(),
            children,
        }
    }

    #[inline]
    pub fn child(&self, index: usize) -> Option<&Self> {
        self.children.get(index)
    }

    /// Right edge in the parent's frame.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge in the parent's frame.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}
