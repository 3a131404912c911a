//! SIP Calculator
//!
//! Owns the configuration, the optional projection cache and the current
//! [`CalculatorState`]. Each update swaps in a freshly computed state.

use crate::config::SipConfig;
use crate::error::Result;
use crate::presets::Preset;
use crate::source::ProjectionSource;
use crate::state::CalculatorState;
use sip_engine::{ProjectionCache, Projector, Validator};
use sip_model::{Field, FieldIssues, ProjectionResult, SipParameters};
use std::sync::Arc;

/// The calculator a front end drives
#[derive(Debug)]
pub struct SipCalculator {
    /// Configuration
    config: SipConfig,
    /// Memoized projections, absent when capacity is zero
    cache: Option<ProjectionCache>,
    /// Uncached projection path
    projector: Projector,
    /// Current snapshot
    state: CalculatorState,
}

impl SipCalculator {
    /// Create calculator from a checked configuration
    ///
    /// # Errors
    /// Anything [`SipConfig::validate`] rejects.
    pub fn new(config: SipConfig) -> Result<Self> {
        config.validate()?;

        let cache =
            (config.cache_capacity > 0).then(|| ProjectionCache::new(config.cache_capacity));
        let projector = Projector::new();
        let source: &dyn ProjectionSource = match &cache {
            Some(cache) => cache,
            None => &projector,
        };
        let state =
            CalculatorState::evaluate(config.defaults, config.defaults, config.policy, source);

        tracing::debug!(
            cache_capacity = config.cache_capacity,
            min_duration_years = config.policy.min_duration_years,
            "calculator created"
        );

        Ok(Self {
            config,
            cache,
            projector,
            state,
        })
    }

    /// Current snapshot
    #[inline]
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Configuration in use
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SipConfig {
        &self.config
    }

    /// Projection cache, when enabled
    #[inline]
    #[must_use]
    pub fn cache(&self) -> Option<&ProjectionCache> {
        self.cache.as_ref()
    }

    /// Replace one field
    pub fn update(&mut self, field: Field, value: f64) -> &CalculatorState {
        tracing::debug!(%field, value, "parameter updated");
        let params = self.state.params().with(field, value);
        self.transition(params)
    }

    /// Replace one field from typed text
    pub fn update_text(&mut self, field: Field, text: &str) -> &CalculatorState {
        tracing::debug!(%field, text, "text input");
        let params = self.state.params().with(field, sip_model::parse_input(text));
        self.transition(params)
    }

    /// Replace all parameters
    pub fn set_parameters(&mut self, params: SipParameters) -> &CalculatorState {
        self.transition(params)
    }

    /// Switch to a preset plan
    pub fn apply_preset(&mut self, preset: Preset) -> &CalculatorState {
        tracing::info!(%preset, "applying preset");
        self.transition(preset.parameters())
    }

    /// Restore the configured defaults
    pub fn reset(&mut self) -> &CalculatorState {
        tracing::info!("resetting to defaults");
        self.transition(self.config.defaults)
    }

    /// Validate and project without touching the current state
    ///
    /// # Returns
    /// The issues, and the projection only when there were none.
    #[must_use]
    pub fn evaluate(&self, params: &SipParameters) -> (FieldIssues, Option<Arc<ProjectionResult>>) {
        let issues = Validator::new(self.config.policy).validate(params);
        if issues.is_empty() {
            let result = self.source().projection(params);
            (issues, Some(result))
        } else {
            (issues, None)
        }
    }

    fn source(&self) -> &dyn ProjectionSource {
        match &self.cache {
            Some(cache) => cache,
            None => &self.projector,
        }
    }

    fn transition(&mut self, params: SipParameters) -> &CalculatorState {
        let next = self.state.with_parameters_from(params, self.source());

        if next.is_valid() {
            tracing::debug!(
                maturity_value = next.result().maturity_value,
                years = next.result().yearly_points.len(),
                "projection updated"
            );
        } else {
            tracing::debug!(
                issues = next.issues().len(),
                fields = ?next.issues().fields().collect::<Vec<_>>(),
                "validation blocked projection"
            );
        }

        self.state = next;
        &self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use sip_engine::RuleSet;

    #[test]
    fn starts_at_defaults() {
        let calc = SipCalculator::new(SipConfig::new()).unwrap();
        assert!(calc.state().is_valid());
        assert_eq!(calc.state().result().maturity_value, 1_161_695);
        assert!(calc.cache().is_some());
    }

    #[test]
    fn updates_replace_state() {
        let mut calc = SipCalculator::new(SipConfig::new()).unwrap();
        let before = calc.state().clone();

        calc.update(Field::AnnualGrowthRatePercent, 0.0);
        assert_eq!(calc.state().result().total_growth, 0);
        assert_eq!(before.result().maturity_value, 1_161_695);
    }

    #[test]
    fn invalid_then_reset() {
        let mut calc = SipCalculator::new(SipConfig::new()).unwrap();
        calc.update_text(Field::MonthlyContribution, "-100");
        assert!(!calc.state().is_valid());
        assert!(calc.state().result().is_empty());

        calc.reset();
        assert!(calc.state().is_valid());
        assert_eq!(calc.state().params(), &SipParameters::default());
    }

    #[test]
    fn cache_is_used_for_repeat_inputs() {
        let mut calc = SipCalculator::new(SipConfig::new()).unwrap();
        calc.apply_preset(Preset::Aggressive);
        let first = calc.state().result_arc();

        calc.apply_preset(Preset::Conservative);
        calc.apply_preset(Preset::Aggressive);
        assert!(Arc::ptr_eq(&first, &calc.state().result_arc()));
    }

    #[test]
    fn zero_capacity_disables_cache() {
        let config = SipConfig::new().with_cache_capacity(0);
        let calc = SipCalculator::new(config).unwrap();
        assert!(calc.cache().is_none());
        assert!(calc.state().is_valid());
    }

    #[test]
    fn evaluate_does_not_change_state() {
        let config = SipConfig::new().with_rule_set(RuleSet::Standard);
        let calc = SipCalculator::new(config).unwrap();
        let (issues, result) = calc.evaluate(&SipParameters::new(5_000.0, 12.0, 0.5));
        assert_eq!(issues.len(), 1);
        assert!(result.is_none());
        assert_eq!(calc.state().params(), &SipParameters::default());
    }

    #[test]
    fn rejects_invalid_config() {
        let config = SipConfig::new().with_defaults(SipParameters::new(5_000.0, 12.0, f64::NAN));
        assert!(SipCalculator::new(config).is_err());
    }
}
