//! Evaluation lifecycle for the licensing focus view
//!
//! Each selection of the licensing focus spawns one validate call. The
//! generation counter pairs every spawned task with the selection that
//! started it: superseding selections abort the old task, and a stale
//! generation's result is discarded on receipt so no outdated insight is
//! ever rendered.

use tokio::task::JoinHandle;

use super::client::CompatError;
use super::score::{classify, normalize_score, CompatibilityBadge};
use super::types::{license_profiles, CompatibilityResponse, LicenseProfile};

/// The single user-visible message for any non-abort failure
pub const UNAVAILABLE_MESSAGE: &str = "Unable to load license compatibility insights.";

/// Display-ready evaluation of one license profile
#[derive(Debug, Clone, PartialEq)]
pub struct LicenseInsight {
    pub profile: LicenseProfile,
    pub score: Option<u8>,
    pub badge: CompatibilityBadge,
    pub reason: Option<String>,
    pub threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum EvaluationOutcome {
    Idle,
    Loading,
    Ready(Vec<LicenseInsight>),
    Failed(String),
}

pub struct Evaluation {
    generation: u64,
    handle: Option<JoinHandle<()>>,
    pub outcome: EvaluationOutcome,
    /// Raw detail of the last failure, reported to stderr after the
    /// terminal is restored
    pub last_error: Option<String>,
}

impl Evaluation {
    pub fn new() -> Self {
        Self {
            generation: 0,
            handle: None,
            outcome: EvaluationOutcome::Idle,
            last_error: None,
        }
    }

    /// Start a new evaluation: aborts any in-flight task and returns the
    /// generation the caller must tag its task with.
    pub fn begin(&mut self) -> u64 {
        self.abort_in_flight();
        self.generation += 1;
        self.outcome = EvaluationOutcome::Loading;
        self.generation
    }

    pub fn attach(&mut self, handle: JoinHandle<()>) {
        self.handle = Some(handle);
    }

    /// Cancel without replacement (the focus moved away). Aborted work
    /// produces no error state.
    pub fn cancel(&mut self) {
        self.abort_in_flight();
        self.generation += 1;
        if self.outcome == EvaluationOutcome::Loading {
            self.outcome = EvaluationOutcome::Idle;
        }
    }

    fn abort_in_flight(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }

    /// Apply a finished task's result. Returns false (and changes
    /// nothing) when the generation is stale.
    pub fn accept(
        &mut self,
        generation: u64,
        result: Result<CompatibilityResponse, CompatError>,
    ) -> bool {
        if generation != self.generation {
            return false;
        }
        self.handle = None;
        self.outcome = match result {
            Ok(response) => EvaluationOutcome::Ready(assemble_insights(&response)),
            Err(error) => {
                self.last_error = Some(error.to_string());
                EvaluationOutcome::Failed(UNAVAILABLE_MESSAGE.to_string())
            }
        };
        true
    }
}

impl Default for Evaluation {
    fn default() -> Self {
        Self::new()
    }
}

/// Match response entries back to the fixed profiles by exact activity
/// description and derive each card's score and badge.
pub fn assemble_insights(response: &CompatibilityResponse) -> Vec<LicenseInsight> {
    license_profiles()
        .iter()
        .map(|profile| {
            let entry = response
                .results
                .iter()
                .find(|item| item.activity_description == profile.activity_prompt);
            LicenseInsight {
                profile: *profile,
                score: entry.map(|item| normalize_score(item.compatibility_score)),
                badge: classify(entry),
                reason: entry.and_then(|item| item.reason.clone()),
                threshold: entry
                    .and_then(|item| item.threshold)
                    .or(Some(response.threshold_used)),
            }
        })
        .collect()
}
