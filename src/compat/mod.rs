//! License-compatibility evaluator port
//!
//! The one external collaborator in the portal: a validate endpoint that
//! scores a trade name against candidate business activities. Split into
//! wire types, the HTTP client, pure score/badge display logic, and the
//! evaluation lifecycle with cancellation.

mod client;
mod score;
mod state;
mod types;

pub use client::{CompatClient, CompatError};
pub use score::{classify, normalize_score, CompatibilityBadge};
pub use state::{
    assemble_insights, Evaluation, EvaluationOutcome, LicenseInsight, UNAVAILABLE_MESSAGE,
};
pub use types::{
    build_request, license_profiles, ActivityMatch, CompatibilityRequest, CompatibilityResponse,
    LicenseProfile,
};
