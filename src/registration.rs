//! Trade-name automation check
//!
//! The registration focus runs an automated availability check against a
//! fixed approved-name set. The check animates: progress steps up on a
//! timer and the verdict lands when it reaches 100. Editing the input
//! resets everything.

use std::time::{Duration, Instant};

use crate::utils::title_case;

/// Names the reservation service will accept, compared upper-cased
pub const APPROVED_TRADE_NAMES: &[&str] =
    &["MARWAH RESTAURANT SOLE LLC", "MARWAH HOSPITALITY SOLE LLC"];

/// Default trade name used by the licensing evaluator before any check runs
pub const DEFAULT_TRADE_NAME: &str = "MARWAH";

/// Progress added per animation step while a check runs
pub const CHECK_STEP: u8 = 14;

/// Delay between animation steps
pub const CHECK_TICK: Duration = Duration::from_millis(420);

pub struct TradeNameCheck {
    /// Raw input buffer edited from the UI
    pub input: String,
    /// Name captured at submit time, display-cased
    active_name: Option<String>,
    pub progress: u8,
    pub checking: bool,
    /// Whether any check has finished since the last edit
    pub performed: bool,
    pub available: bool,
    pub failure_reason: Option<String>,
    last_step: Instant,
}

impl TradeNameCheck {
    pub fn new(now: Instant) -> Self {
        Self {
            input: String::new(),
            active_name: None,
            progress: 0,
            checking: false,
            performed: false,
            available: false,
            failure_reason: None,
            last_step: now,
        }
    }

    /// Name the compatibility evaluator should use: the last submitted
    /// name, upper-cased, or the demo default before any submission.
    pub fn evaluation_name(&self) -> String {
        self.active_name
            .as_deref()
            .map(|name| name.to_uppercase())
            .unwrap_or_else(|| DEFAULT_TRADE_NAME.to_string())
    }

    pub fn active_name(&self) -> Option<&str> {
        self.active_name.as_deref()
    }

    /// Start a check for the current input. Empty input fails immediately
    /// with a prompt-for-input reason instead of animating.
    pub fn submit(&mut self, now: Instant) {
        if self.checking {
            return;
        }

        let trimmed = self.input.trim();
        if trimmed.is_empty() {
            self.performed = true;
            self.available = false;
            self.progress = 0;
            self.failure_reason =
                Some("Please enter a trade name to run the automated checks.".to_string());
            return;
        }

        self.active_name = Some(title_case(trimmed));
        self.progress = 0;
        self.checking = true;
        self.performed = false;
        self.available = false;
        self.failure_reason = None;
        self.last_step = now;
    }

    /// Replace the input buffer and reset any prior verdict
    pub fn set_input(&mut self, value: String) {
        self.input = value;
        self.performed = false;
        self.available = false;
        self.progress = 0;
        self.checking = false;
        self.failure_reason = None;
    }

    pub fn push_char(&mut self, c: char) {
        let mut next = self.input.clone();
        next.push(c);
        self.set_input(next);
    }

    pub fn pop_char(&mut self) {
        let mut next = self.input.clone();
        next.pop();
        self.set_input(next);
    }

    /// Advance the check animation; lands the verdict at 100.
    pub fn tick(&mut self, now: Instant) {
        if !self.checking || now.duration_since(self.last_step) < CHECK_TICK {
            return;
        }
        self.last_step = now;
        self.progress = self.progress.saturating_add(CHECK_STEP).min(100);
        if self.progress >= 100 {
            self.finish();
        }
    }

    fn finish(&mut self) {
        let display = self.active_name.clone().unwrap_or_default();
        let normalized = display.to_uppercase();
        let approved = APPROVED_TRADE_NAMES.contains(&normalized.as_str());

        self.checking = false;
        self.performed = true;
        self.available = approved;
        self.failure_reason = if approved {
            None
        } else {
            Some(format!(
                "We couldn't reserve {}. Try Marwah Restaurant Sole LLC, Marwah Hospitality \
                 Sole LLC, or another unique variation aligned to your activity.",
                display
            ))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_completion(check: &mut TradeNameCheck, start: Instant) {
        let mut now = start;
        for _ in 0..20 {
            now += CHECK_TICK + Duration::from_millis(10);
            check.tick(now);
            if !check.checking {
                break;
            }
        }
    }

    #[test]
    fn test_approved_name_is_available() {
        let start = Instant::now();
        let mut check = TradeNameCheck::new(start);
        check.set_input("marwah restaurant sole llc".to_string());
        check.submit(start);
        assert!(check.checking);

        run_to_completion(&mut check, start);
        assert!(check.performed);
        assert!(check.available);
        assert!(check.failure_reason.is_none());
        assert_eq!(check.evaluation_name(), "MARWAH RESTAURANT SOLE LLC");
    }

    #[test]
    fn test_unapproved_name_fails_with_reason() {
        let start = Instant::now();
        let mut check = TradeNameCheck::new(start);
        check.set_input("Corniche Culinary Collective".to_string());
        check.submit(start);
        run_to_completion(&mut check, start);

        assert!(check.performed);
        assert!(!check.available);
        let reason = check.failure_reason.as_deref().unwrap();
        assert!(reason.contains("Corniche Culinary Collective"));
        assert!(reason.contains("Marwah Restaurant Sole LLC"));
    }

    #[test]
    fn test_empty_input_prompts_without_animating() {
        let start = Instant::now();
        let mut check = TradeNameCheck::new(start);
        check.submit(start);

        assert!(!check.checking);
        assert!(check.performed);
        assert!(!check.available);
        assert!(
            check
                .failure_reason
                .as_deref()
                .unwrap()
                .contains("enter a trade name")
        );
    }

    #[test]
    fn test_progress_steps_and_clamps() {
        let start = Instant::now();
        let mut check = TradeNameCheck::new(start);
        check.set_input("Marwah Hospitality Sole LLC".to_string());
        check.submit(start);

        let mut now = start + CHECK_TICK + Duration::from_millis(10);
        check.tick(now);
        assert_eq!(check.progress, CHECK_STEP);

        // A tick inside the step window does nothing
        check.tick(now + Duration::from_millis(50));
        assert_eq!(check.progress, CHECK_STEP);

        for _ in 0..20 {
            now += CHECK_TICK + Duration::from_millis(10);
            check.tick(now);
        }
        assert_eq!(check.progress, 100);
        assert!(!check.checking);
        assert!(check.available);
    }

    #[test]
    fn test_editing_resets_verdict() {
        let start = Instant::now();
        let mut check = TradeNameCheck::new(start);
        check.set_input("MARWAH RESTAURANT SOLE LLC".to_string());
        check.submit(start);
        run_to_completion(&mut check, start);
        assert!(check.available);

        check.push_char('X');
        assert!(!check.performed);
        assert!(!check.available);
        assert_eq!(check.progress, 0);
    }

    #[test]
    fn test_default_evaluation_name() {
        let check = TradeNameCheck::new(Instant::now());
        assert_eq!(check.evaluation_name(), DEFAULT_TRADE_NAME);
    }
}
