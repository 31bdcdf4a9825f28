//! Dispatch of one layout run over the node arena.

use css_block::compute_block_layout;
use css_box::Size;
use css_core::{
    AvailableSpace, Cache, Layout, LayoutInput, LayoutOutput, LayoutPartialTree, NodeId, RunMode,
    compute_cached_layout, compute_hidden_layout, compute_leaf_layout,
};
use css_flexbox::compute_flexbox_layout;
use css_grid::compute_grid_layout;
use css_orchestrator::{Display, Style};
use log::{trace, warn};

use crate::config::MeasureErrorPolicy;
use crate::measure::sanitize_measured;
use crate::tree::NodeArena;

/// Style seen for handles that are not live. Algorithms never receive such handles from a
/// consistent tree.
static DETACHED_STYLE: Style = Style::DEFAULT;

type NoMeasure = fn(Size<Option<f32>>, Size<AvailableSpace>) -> Size<f32>;

/// The arena as seen by the layout algorithms during one `compute_layout` call.
pub struct LayoutPass<'tree> {
    arena: &'tree mut NodeArena,
    policy: MeasureErrorPolicy,
    /// First measure failure of the run.
    failure: Option<anyhow::Error>,
}

impl<'tree> LayoutPass<'tree> {
    pub fn new(arena: &'tree mut NodeArena, policy: MeasureErrorPolicy) -> Self {
        Self {
            arena,
            policy,
            failure: None,
        }
    }

    pub fn into_failure(self) -> Option<anyhow::Error> {
        self.failure
    }

    fn measuring_stopped(&self) -> bool {
        self.policy == MeasureErrorPolicy::Abort && self.failure.is_some()
    }

    fn compute_leaf(&mut self, node: NodeId, inputs: LayoutInput) -> LayoutOutput {
        let stopped = self.measuring_stopped();
        let Some(data) = self.arena.get(node) else {
            return LayoutOutput::HIDDEN;
        };
        let mut failure = None;
        let output = match &data.measure {
            Some(_) if stopped => compute_leaf_layout(
                inputs,
                &data.style,
                Some(|_known: Size<Option<f32>>, _available: Size<AvailableSpace>| Size::ZERO),
            ),
            Some(measure) => compute_leaf_layout(
                inputs,
                &data.style,
                Some(|known: Size<Option<f32>>, available: Size<AvailableSpace>| {
                    match measure.measure(known, available) {
                        Ok(measured) => sanitize_measured(node, measured),
                        Err(err) => {
                            failure = Some(err);
                            Size::ZERO
                        }
                    }
                }),
            ),
            None => compute_leaf_layout(inputs, &data.style, None::<NoMeasure>),
        };
        if let Some(err) = failure {
            self.record_failure(node, err);
        }
        output
    }

    fn record_failure(&mut self, node: NodeId, err: anyhow::Error) {
        warn!(
            target: "boxflow::measure",
            "[MEASURE] node={node} failed ({:?} policy): {err:#}",
            self.policy
        );
        if self.failure.is_none() {
            self.failure = Some(err.context(format!("measure function of node {node} failed")));
        }
    }
}

impl LayoutPartialTree for LayoutPass<'_> {
    fn children(&self, node: NodeId) -> &[NodeId] {
        self.arena
            .get(node)
            .map(|data| data.children.as_slice())
            .unwrap_or_default()
    }

    fn style(&self, node: NodeId) -> &Style {
        self.arena
            .get(node)
            .map_or(&DETACHED_STYLE, |data| &data.style)
    }

    fn cache_mut(&mut self, node: NodeId) -> Option<&mut Cache> {
        self.arena.get_mut(node).map(|data| &mut data.cache)
    }

    fn set_unrounded_layout(&mut self, node: NodeId, layout: &Layout) {
        if let Some(data) = self.arena.get_mut(node) {
            data.unrounded_layout = *layout;
        }
    }

    fn compute_child_layout(&mut self, node: NodeId, inputs: LayoutInput) -> LayoutOutput {
        if inputs.run_mode == RunMode::PerformHiddenLayout {
            return compute_hidden_layout(self, node);
        }
        compute_cached_layout(self, node, inputs, |pass, child, query| {
            let Some(data) = pass.arena.get(child) else {
                return LayoutOutput::HIDDEN;
            };
            let display = data.style.display;
            // A measure function only sizes childless nodes; containers lay out their children.
            let is_leaf = data.children.is_empty();
            trace!(
                target: "boxflow::compute",
                "compute_child_layout: {child} display={display:?} leaf={is_leaf} mode={:?}",
                query.run_mode
            );
            match display {
                Display::None => compute_hidden_layout(pass, child),
                Display::Block | Display::Flex | Display::Grid if is_leaf => {
                    pass.compute_leaf(child, query)
                }
                Display::Block => compute_block_layout(pass, child, query),
                Display::Flex => compute_flexbox_layout(pass, child, query),
                Display::Grid => compute_grid_layout(pass, child, query),
            }
        })
    }
}
