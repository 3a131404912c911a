//! Where projections come from
//!
//! [`ProjectionSource`] lets state transitions run against either a plain
//! [`Projector`] or a [`ProjectionCache`] without caring which.

use sip_engine::{ProjectionCache, Projector};
use sip_model::{ProjectionResult, SipParameters};
use std::sync::Arc;

/// Produces projection results for validated parameters
///
/// Implementations must be deterministic: equal parameters give equal
/// results.
pub trait ProjectionSource: std::fmt::Debug {
    /// Project validated parameters
    fn projection(&self, params: &SipParameters) -> Arc<ProjectionResult>;
}

impl ProjectionSource for Projector {
    fn projection(&self, params: &SipParameters) -> Arc<ProjectionResult> {
        Arc::new(self.project(params))
    }
}

impl ProjectionSource for ProjectionCache {
    fn projection(&self, params: &SipParameters) -> Arc<ProjectionResult> {
        self.get_or_project(params)
    }
}
