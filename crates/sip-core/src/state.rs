//! Immutable calculator state
//!
//! A [`CalculatorState`] is a snapshot: parameters, the issues they raise and
//! the projection they produce. Every transition returns a new snapshot with
//! issues and projection recomputed from scratch; nothing is edited in place.

use crate::controls::SliderRange;
use crate::presets::Preset;
use crate::source::ProjectionSource;
use serde::Serialize;
use sip_engine::{Projector, ValidationPolicy, Validator};
use sip_model::{parse_input, Field, FieldIssues, ProjectionResult, SipParameters};
use std::sync::Arc;

/// Snapshot of calculator inputs and outputs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorState {
    params: SipParameters,
    issues: FieldIssues,
    result: Arc<ProjectionResult>,
    #[serde(skip)]
    defaults: SipParameters,
    #[serde(skip)]
    policy: ValidationPolicy,
}

impl CalculatorState {
    /// State at the given defaults
    #[must_use]
    pub fn new(defaults: SipParameters, policy: ValidationPolicy) -> Self {
        Self::evaluate(defaults, defaults, policy, &Projector::new())
    }

    /// Validate `params` and project them if no issues were found
    ///
    /// While issues exist the result is the empty placeholder and the source
    /// is not consulted.
    #[must_use]
    pub fn evaluate<S: ProjectionSource + ?Sized>(
        params: SipParameters,
        defaults: SipParameters,
        policy: ValidationPolicy,
        source: &S,
    ) -> Self {
        let issues = Validator::new(policy).validate(&params);
        let result = if issues.is_empty() {
            source.projection(&params)
        } else {
            Arc::new(ProjectionResult::default())
        };

        Self {
            params,
            issues,
            result,
            defaults,
            policy,
        }
    }

    /// New state with all parameters replaced
    #[must_use]
    pub fn with_parameters(&self, params: SipParameters) -> Self {
        self.with_parameters_from(params, &Projector::new())
    }

    /// New state with all parameters replaced, projecting through `source`
    #[must_use]
    pub fn with_parameters_from<S: ProjectionSource + ?Sized>(
        &self,
        params: SipParameters,
        source: &S,
    ) -> Self {
        Self::evaluate(params, self.defaults, self.policy, source)
    }

    /// New state with one field replaced
    #[must_use]
    pub fn with_parameter(&self, field: Field, value: f64) -> Self {
        self.with_parameters(self.params.with(field, value))
    }

    /// New state from raw text typed into a field
    ///
    /// Text is not clamped; unparseable text becomes a missing value.
    #[must_use]
    pub fn with_text_input(&self, field: Field, text: &str) -> Self {
        self.with_parameter(field, parse_input(text))
    }

    /// New state from a slider movement, clamped and snapped to the slider
    #[must_use]
    pub fn with_slider_value(&self, field: Field, value: f64) -> Self {
        match SliderRange::for_field(field) {
            Some(range) => self.with_parameter(field, range.clamp(value)),
            None => self.clone(),
        }
    }

    /// New state at a preset plan
    #[must_use]
    pub fn with_preset(&self, preset: Preset) -> Self {
        self.with_parameters(preset.parameters())
    }

    /// New state back at the defaults, with no issues
    #[must_use]
    pub fn reset(&self) -> Self {
        self.with_parameters(self.defaults)
    }

    /// Current parameters
    #[inline]
    #[must_use]
    pub fn params(&self) -> &SipParameters {
        &self.params
    }

    /// Issues raised by the current parameters
    #[inline]
    #[must_use]
    pub fn issues(&self) -> &FieldIssues {
        &self.issues
    }

    /// Projection, empty while issues exist
    #[inline]
    #[must_use]
    pub fn result(&self) -> &ProjectionResult {
        &self.result
    }

    /// Shared handle to the projection
    #[inline]
    #[must_use]
    pub fn result_arc(&self) -> Arc<ProjectionResult> {
        Arc::clone(&self.result)
    }

    /// True when no issues block projection
    #[inline]
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Message to show next to a field, if any
    #[inline]
    #[must_use]
    pub fn field_error(&self, field: Field) -> Option<&str> {
        self.issues.message(field)
    }

    /// Parameters restored by [`CalculatorState::reset`]
    #[inline]
    #[must_use]
    pub fn defaults(&self) -> &SipParameters {
        &self.defaults
    }

    /// Policy used for validation
    #[inline]
    #[must_use]
    pub fn policy(&self) -> &ValidationPolicy {
        &self.policy
    }
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new(SipParameters::default(), ValidationPolicy::default())
    }
}
