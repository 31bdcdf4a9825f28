//! Style setters. Every successful write marks the node and its ancestors dirty.

use css_core::NodeId;
use css_orchestrator::{Style, StyleProperty, StylePropertyKey};
use css_values_units::{StyleUnit, StyleValue};
use log::{trace, warn};

use super::{LayoutTree, sanitized};
use crate::error::LayoutResult;

impl LayoutTree {
    /// # Errors
    /// Returns [`crate::LayoutError::InvalidHandle`] if `node` is not live.
    pub fn style(&self, node: NodeId) -> LayoutResult<&Style> {
        Ok(&self.arena.node(node)?.style)
    }

    /// Replace the whole style of `node`. Invalid numbers are sanitised first.
    ///
    /// # Errors
    /// Returns [`crate::LayoutError::InvalidHandle`] if `node` is not live.
    pub fn set_style(&mut self, node: NodeId, style: Style) -> LayoutResult<()> {
        self.arena.node_mut(node)?.style = sanitized(style);
        self.arena.mark_dirty(node);
        Ok(())
    }

    /// Edit the style of `node` in place.
    ///
    /// # Errors
    /// Returns [`crate::LayoutError::InvalidHandle`] if `node` is not live.
    pub fn update_style(&mut self, node: NodeId, edit: impl FnOnce(&mut Style)) -> LayoutResult<()> {
        let data = self.arena.node_mut(node)?;
        edit(&mut data.style);
        let replaced = data.style.sanitize();
        if replaced > 0 {
            warn!(
                target: "boxflow::tree",
                "update_style: {node} replaced {replaced} invalid numeric values"
            );
        }
        self.arena.mark_dirty(node);
        Ok(())
    }

    /// Set one length-like property from a `(value, unit)` pair.
    ///
    /// NaN and infinite values become 0, as do negatives for properties that cannot be negative.
    ///
    /// # Errors
    /// Returns [`crate::LayoutError::InvalidHandle`] if `node` is not live and
    /// [`crate::LayoutError::InvalidStyleValue`] if `unit` is not accepted by `key`. The style is
    /// unchanged on error.
    pub fn set_style_value(
        &mut self,
        node: NodeId,
        key: StylePropertyKey,
        value: f32,
        unit: StyleUnit,
    ) -> LayoutResult<()> {
        self.set_property(node, StyleProperty::Length(key, StyleValue::new(value, unit)))
    }

    /// Set any single property.
    ///
    /// # Errors
    /// Returns [`crate::LayoutError::InvalidHandle`] if `node` is not live and
    /// [`crate::LayoutError::InvalidStyleValue`] for a `(value, unit)` pair with a rejected unit.
    pub fn set_property(&mut self, node: NodeId, property: StyleProperty) -> LayoutResult<()> {
        trace!(target: "boxflow::tree", "set_property: {node} {property:?}");
        property.apply(&mut self.arena.node_mut(node)?.style)?;
        self.arena.mark_dirty(node);
        Ok(())
    }
}
