use css_core::NodeId;
use css_orchestrator::{InvalidUnit, StylePropertyKey};
use css_values_units::StyleUnit;
use thiserror::Error;

/// Failures of tree operations and layout runs.
///
/// Handle, cycle and index errors leave the tree exactly as it was.
#[derive(Debug, Error)]
pub enum LayoutError {
    /// Stale generation, freed slot, or an index outside the arena.
    #[error("node {0} is not a live node of this tree")]
    InvalidHandle(NodeId),
    #[error("adding {child} under {parent} would create a cycle")]
    CycleAttempted { parent: NodeId, child: NodeId },
    #[error("child index {index} is out of bounds for node {parent} with {child_count} children")]
    ChildIndexOutOfBounds {
        parent: NodeId,
        index: usize,
        child_count: usize,
    },
    #[error("node {child} is not a child of {parent}")]
    NotAChild { parent: NodeId, child: NodeId },
    #[error("node {child} appears more than once in the new children of {parent}")]
    DuplicateChild { parent: NodeId, child: NodeId },
    #[error("property {property:?} does not accept unit {unit:?}")]
    InvalidStyleValue {
        property: StylePropertyKey,
        unit: StyleUnit,
    },
    /// A measure function failed during `compute_layout`. Carries the node as context.
    #[error(transparent)]
    Measure(anyhow::Error),
}

impl From<InvalidUnit> for LayoutError {
    fn from(invalid: InvalidUnit) -> Self {
        Self::InvalidStyleValue {
            property: invalid.property,
            unit: invalid.unit,
        }
    }
}

pub type LayoutResult<T> = Result<T, LayoutError>;
