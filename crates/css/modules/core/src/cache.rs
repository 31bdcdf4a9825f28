//! Per-node memo of layout calls.
//!
//! Intrinsic sizing asks the same child for its size many times per run (min-content, then
//! max-content, then under the final constraints). Each distinct question is answered once.

use css_box::Size;
use css_sizing::{AvailableSpace, SizingMode};
use log::trace;

use crate::{LayoutInput, LayoutOutput, LayoutPartialTree, NodeId, RunMode};

/// Number of size-only slots per node.
pub const CACHE_SIZE: usize = 9;

#[derive(Copy, Clone, Debug, PartialEq)]
struct CacheEntry {
    known_dimensions: Size<Option<f32>>,
    available_space: Size<AvailableSpace>,
    sizing_mode: SizingMode,
    output: LayoutOutput,
}

impl CacheEntry {
    /// An entry answers a query when every known dimension either matches the one it was computed
    /// under or equals the size it produced, and unknown dimensions saw the same available space.
    ///
    /// The parent size is not part of the key: percentages are resolved by the caller into the
    /// known dimensions and available space before a child is asked.
    fn answers(
        &self,
        known_dimensions: Size<Option<f32>>,
        available_space: Size<AvailableSpace>,
        sizing_mode: SizingMode,
    ) -> bool {
        let cached = self.output.size;
        self.sizing_mode == sizing_mode
            && (known_dimensions.width == self.known_dimensions.width
                || known_dimensions.width == Some(cached.width))
            && (known_dimensions.height == self.known_dimensions.height
                || known_dimensions.height == Some(cached.height))
            && (known_dimensions.width.is_some()
                || self
                    .available_space
                    .width
                    .is_roughly_equal(available_space.width))
            && (known_dimensions.height.is_some()
                || self
                    .available_space
                    .height
                    .is_roughly_equal(available_space.height))
    }
}

/// Memo of one node's layout calls: a final-layout slot plus [`CACHE_SIZE`] size-only slots.
#[derive(Clone, Debug, Default)]
pub struct Cache {
    final_layout: Option<CacheEntry>,
    measure_entries: [Option<CacheEntry>; CACHE_SIZE],
}

impl Cache {
    pub const fn new() -> Self {
        Self {
            final_layout: None,
            measure_entries: [None; CACHE_SIZE],
        }
    }

    /// Slot for a size-only query.
    ///
    /// Queries that fix both axes share slot 0. The rest are keyed on which axes are fixed and on
    /// whether the free axes are min-content constrained.
    fn slot(known_dimensions: Size<Option<f32>>, available_space: Size<AvailableSpace>) -> usize {
        let is_min = |space: AvailableSpace| usize::from(space == AvailableSpace::MinContent);
        match (known_dimensions.width, known_dimensions.height) {
            (Some(_), Some(_)) => 0,
            (Some(_), None) => 1 + is_min(available_space.height),
            (None, Some(_)) => 3 + is_min(available_space.width),
            (None, None) => 5 + is_min(available_space.height) + 2 * is_min(available_space.width),
        }
    }

    pub fn get(&self, inputs: &LayoutInput) -> Option<LayoutOutput> {
        let LayoutInput {
            known_dimensions,
            available_space,
            sizing_mode,
            run_mode,
            ..
        } = *inputs;
        match run_mode {
            RunMode::PerformLayout => self
                .final_layout
                .filter(|entry| {
                    entry.answers(known_dimensions, available_space, sizing_mode)
                })
                .map(|entry| entry.output),
            RunMode::ComputeSize => self
                .final_layout
                .iter()
                .chain(self.measure_entries.iter().flatten())
                .find(|entry| {
                    entry.answers(known_dimensions, available_space, sizing_mode)
                })
                .map(|entry| entry.output),
            RunMode::PerformHiddenLayout => None,
        }
    }

    pub fn store(&mut self, inputs: &LayoutInput, output: LayoutOutput) {
        let entry = CacheEntry {
            known_dimensions: inputs.known_dimensions,
            available_space: inputs.available_space,
            sizing_mode: inputs.sizing_mode,
            output,
        };
        match inputs.run_mode {
            RunMode::PerformLayout => self.final_layout = Some(entry),
            RunMode::ComputeSize => {
                let slot = Self::slot(inputs.known_dimensions, inputs.available_space);
                if let Some(target) = self.measure_entries.get_mut(slot) {
                    *target = Some(entry);
                }
            }
            RunMode::PerformHiddenLayout => {}
        }
    }

    pub fn clear(&mut self) {
        self.final_layout = None;
        self.measure_entries = [None; CACHE_SIZE];
    }

    pub fn is_empty(&self) -> bool {
        self.final_layout.is_none() && self.measure_entries.iter().all(Option::is_none)
    }
}

/// Answer `inputs` for `node` from its cache, or compute and remember the answer.
pub fn compute_cached_layout<Tree, Compute>(
    tree: &mut Tree,
    node: NodeId,
    inputs: LayoutInput,
    compute_uncached: Compute,
) -> LayoutOutput
where
    Tree: LayoutPartialTree + ?Sized,
    Compute: FnOnce(&mut Tree, NodeId, LayoutInput) -> LayoutOutput,
{
    if let Some(cached) = tree.cache_mut(node).and_then(|cache| cache.get(&inputs)) {
        trace!(
            target: "css::core::cache",
            "[CACHE HIT] node={node} mode={:?} known={:?} avail={:?} -> {:?}",
            inputs.run_mode,
            inputs.known_dimensions,
            inputs.available_space,
            cached.size
        );
        return cached;
    }
    let output = compute_uncached(tree, node, inputs);
    if let Some(cache) = tree.cache_mut(node) {
        cache.store(&inputs, output);
    }
    output
}
