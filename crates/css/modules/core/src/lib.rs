//! Layout core shared by every formatting context.
//!
//! Algorithms never own nodes. They see the tree through [`LayoutPartialTree`], ask children for
//! sizes through [`LayoutPartialTreeExt`], and write each child's final [`Layout`] back through the
//! same seam. Memoisation of child queries lives in [`Cache`].

mod alignment;
mod box_sizes;
mod cache;
mod content_size;
mod hidden;
mod layout;
mod leaf;
mod node;
mod root;
mod tree;

pub use alignment::{apply_alignment_fallback, compute_alignment_offset};
pub use box_sizes::BoxSizes;
pub use cache::{CACHE_SIZE, Cache, compute_cached_layout};
pub use content_size::compute_content_size_contribution;
pub use hidden::compute_hidden_layout;
pub use layout::Layout;
pub use leaf::compute_leaf_layout;
pub use node::NodeId;
pub use root::compute_root_layout;
pub use tree::{LayoutInput, LayoutOutput, LayoutPartialTree, LayoutPartialTreeExt, RequestedAxis, RunMode};

pub use css_sizing::{AvailableSize, AvailableSpace, SizingMode};
