//! Per-tree layout configuration.
//!
//! Defaults can be overridden from the environment:
//! - `BOXFLOW_ROUNDING`: `0` turns pixel rounding off (default: on)
//! - `BOXFLOW_MEASURE_ERRORS`: `defer` or `abort` (default: `defer`)

use core::str::FromStr;
use std::env;

use log::warn;
use serde::{Deserialize, Serialize};

/// What a layout run does once a measure function has failed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasureErrorPolicy {
    /// Treat the failure as `(0, 0)`, keep measuring, and report the first error after the run.
    #[default]
    Defer,
    /// Stop calling measure functions for the rest of the run and report the error.
    Abort,
}

impl FromStr for MeasureErrorPolicy {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "defer" => Ok(Self::Defer),
            "abort" => Ok(Self::Abort),
            other => Err(format!("unknown measure error policy `{other}`")),
        }
    }
}

/// Configuration of a [`crate::LayoutTree`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Round final layouts to whole pixels.
    pub use_rounding: bool,
    pub measure_error_policy: MeasureErrorPolicy,
}

impl LayoutConfig {
    #[inline]
    #[must_use]
    pub const fn new(use_rounding: bool, measure_error_policy: MeasureErrorPolicy) -> Self {
        Self {
            use_rounding,
            measure_error_policy,
        }
    }

    /// Load configuration from `BOXFLOW_*` environment variables.
    ///
    /// Unset variables keep their default; unparsable ones are logged and ignored.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(rounding) = lookup("BOXFLOW_ROUNDING") {
            config.use_rounding = rounding.trim() != "0";
        }
        if let Some(policy) = lookup("BOXFLOW_MEASURE_ERRORS") {
            match policy.parse::<MeasureErrorPolicy>() {
                Ok(parsed) => config.measure_error_policy = parsed,
                Err(err) => warn!(target: "boxflow::config", "BOXFLOW_MEASURE_ERRORS: {err}"),
            }
        }
        config
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self::new(true, MeasureErrorPolicy::Defer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup_from<'vars>(
        vars: &'vars [(&'vars str, &'vars str)],
    ) -> impl Fn(&str) -> Option<String> + 'vars {
        move |name| {
            vars.iter()
                .find(|(key, _)| *key == name)
                .map(|(_, value)| (*value).to_owned())
        }
    }

    #[test]
    /// # Panics
    /// Panics if unset variables do not leave the defaults in place.
    fn defaults_without_environment() {
        let config = LayoutConfig::from_lookup(lookup_from(&[]));
        assert_eq!(config, LayoutConfig::default());
        assert!(config.use_rounding);
        assert_eq!(config.measure_error_policy, MeasureErrorPolicy::Defer);
    }

    #[test]
    /// # Panics
    /// Panics if the environment overrides are not applied.
    fn environment_overrides() {
        let config = LayoutConfig::from_lookup(lookup_from(&[
            ("BOXFLOW_ROUNDING", "0"),
            ("BOXFLOW_MEASURE_ERRORS", "Abort"),
        ]));
        assert!(!config.use_rounding);
        assert_eq!(config.measure_error_policy, MeasureErrorPolicy::Abort);
    }

    #[test]
    /// # Panics
    /// Panics if an unknown policy replaces the default.
    fn unknown_policy_is_ignored() {
        let config = LayoutConfig::from_lookup(lookup_from(&[("BOXFLOW_MEASURE_ERRORS", "retry")]));
        assert_eq!(config.measure_error_policy, MeasureErrorPolicy::Defer);
    }
}
