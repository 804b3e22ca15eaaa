//! Journey orchestration state machine
//!
//! Holds the stage catalog plus the automation loop that cycles through
//! the fixed animation phases. All transitions are reducer methods on
//! `JourneyState`; `tick` takes the current `Instant` so tests can drive
//! the clock without real timers.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::models::{
    animation_phases, applicant_journey, next_actions, next_step_message, remaining_action_count,
    timeline_items, AnimationPhase, JourneyStage, NextActionItem, TimelineItem,
};

/// How long each automation phase is highlighted before advancing
pub const PHASE_INTERVAL: Duration = Duration::from_millis(5500);

/// Displayed progress moves toward the phase target by this much per tick
pub const PROGRESS_STEP: u8 = 3;

pub struct JourneyState {
    pub stages: Vec<JourneyStage>,
    pub timeline: Vec<TimelineItem>,
    pub actions: Vec<NextActionItem>,
    /// Completion map for the to-do bank, keyed by action id
    pub completion: HashMap<&'static str, bool>,
    phases: Vec<AnimationPhase>,
    phase_index: usize,
    /// Currently focused stage in the timeline
    pub selected_stage_id: &'static str,
    /// Set when the user picks a stage; the automation loop holds until
    /// resume_automation clears it
    pub manual_hold: bool,
    /// Displayed automation progress percentage
    pub progress: u8,
    last_phase_change: Instant,
}

impl JourneyState {
    pub fn new(now: Instant) -> Self {
        let stages = applicant_journey();
        let timeline = timeline_items(&stages);
        let actions = next_actions(&stages);
        let completion = actions
            .iter()
            .map(|action| (action.id, action.status.initially_complete()))
            .collect();
        let phases = animation_phases();
        let selected_stage_id = phases[0].stage_id;

        Self {
            stages,
            timeline,
            actions,
            completion,
            phases,
            phase_index: 0,
            selected_stage_id,
            manual_hold: false,
            progress: 0,
            last_phase_change: now,
        }
    }

    pub fn current_phase(&self) -> &AnimationPhase {
        &self.phases[self.phase_index]
    }

    pub fn selected_stage(&self) -> Option<&JourneyStage> {
        crate::models::find_stage(&self.stages, self.selected_stage_id)
    }

    /// Advance the clock: step the progress bar toward the phase target,
    /// and cycle to the next phase when the interval elapses and no manual
    /// hold is active.
    pub fn tick(&mut self, now: Instant) {
        let target = self.current_phase().percent;
        if self.progress < target {
            self.progress = (self.progress + PROGRESS_STEP).min(target);
        } else if self.progress > target {
            self.progress = self.progress.saturating_sub(PROGRESS_STEP).max(target);
        }

        if !self.manual_hold
            && now.duration_since(self.last_phase_change) >= PHASE_INTERVAL
        {
            self.advance_phase(now);
        }
    }

    fn advance_phase(&mut self, now: Instant) {
        self.phase_index = (self.phase_index + 1) % self.phases.len();
        self.selected_stage_id = self.phases[self.phase_index].stage_id;
        self.last_phase_change = now;
    }

    /// Manual stage selection from the timeline; latches the automation
    /// loop until resume_automation.
    pub fn select_stage(&mut self, stage_id: &str) {
        if let Some(stage) = crate::models::find_stage(&self.stages, stage_id) {
            self.selected_stage_id = stage.id;
            self.manual_hold = true;
        }
    }

    /// Move the selection left/right along the timeline (manual select)
    pub fn select_adjacent(&mut self, offset: isize) {
        let current = self
            .stages
            .iter()
            .position(|stage| stage.id == self.selected_stage_id)
            .unwrap_or(0);
        let len = self.stages.len() as isize;
        let next = (current as isize + offset).rem_euclid(len) as usize;
        let id = self.stages[next].id;
        self.select_stage(id);
    }

    /// Clear the manual hold and snap back to the automation-driven stage.
    /// The phase interval restarts so the resumed phase gets its full dwell.
    pub fn resume_automation(&mut self, now: Instant) {
        self.manual_hold = false;
        self.selected_stage_id = self.current_phase().stage_id;
        self.last_phase_change = now;
    }

    /// Idempotent to-do toggle: a boolean flip keyed by action id
    pub fn toggle_action(&mut self, action_id: &str) {
        if let Some(action) = self.actions.iter().find(|a| a.id == action_id) {
            let entry = self.completion.entry(action.id).or_insert(false);
            *entry = !*entry;
        }
    }

    pub fn remaining_count(&self) -> usize {
        remaining_action_count(&self.actions, &self.completion)
    }

    pub fn next_step(&self) -> String {
        next_step_message(self.selected_stage_id, &self.actions, &self.completion)
    }

    pub fn is_action_complete(&self, action_id: &str) -> bool {
        self.completion.get(action_id).copied().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn after(start: Instant, cycles: u32) -> Instant {
        start + PHASE_INTERVAL * cycles + Duration::from_millis(50)
    }

    #[test]
    fn test_phases_cycle_through_all() {
        let start = Instant::now();
        let mut state = JourneyState::new(start);
        let phase_count = state.phases.len();

        let mut seen = vec![state.current_phase().message];
        for cycle in 1..=phase_count as u32 {
            state.tick(after(start, cycle));
            seen.push(state.current_phase().message);
        }

        // Every phase visited once, then back to the first
        assert_eq!(seen.len(), phase_count + 1);
        assert_eq!(seen[0], seen[phase_count]);
        let unique: std::collections::HashSet<_> = seen.iter().collect();
        assert_eq!(unique.len(), phase_count);
    }

    #[test]
    fn test_tick_before_interval_does_not_advance() {
        let start = Instant::now();
        let mut state = JourneyState::new(start);
        let initial = state.current_phase().message;

        state.tick(start + Duration::from_millis(100));
        assert_eq!(state.current_phase().message, initial);
    }

    #[test]
    fn test_manual_selection_latches_automation() {
        let start = Instant::now();
        let mut state = JourneyState::new(start);

        state.select_stage("questionnaire");
        assert!(state.manual_hold);
        assert_eq!(state.selected_stage_id, "questionnaire");

        // Interval elapses but the hold keeps both phase and selection
        let phase_before = state.current_phase().message;
        state.tick(after(start, 3));
        assert_eq!(state.current_phase().message, phase_before);
        assert_eq!(state.selected_stage_id, "questionnaire");
    }

    #[test]
    fn test_resume_automation_unlatches() {
        let start = Instant::now();
        let mut state = JourneyState::new(start);

        state.select_stage("questionnaire");
        let resumed_at = after(start, 1);
        state.resume_automation(resumed_at);
        assert!(!state.manual_hold);
        assert_eq!(state.selected_stage_id, state.current_phase().stage_id);

        // Advancing works again once the interval elapses post-resume
        let phase_before = state.current_phase().message;
        state.tick(after(resumed_at, 1));
        assert_ne!(state.current_phase().message, phase_before);
    }

    #[test]
    fn test_select_stage_unknown_id_is_ignored() {
        let start = Instant::now();
        let mut state = JourneyState::new(start);
        let before = state.selected_stage_id;

        state.select_stage("not-a-stage");
        assert_eq!(state.selected_stage_id, before);
        assert!(!state.manual_hold);
    }

    #[test]
    fn test_select_adjacent_wraps() {
        let start = Instant::now();
        let mut state = JourneyState::new(start);
        state.select_stage("questionnaire");

        state.select_adjacent(-1);
        assert_eq!(state.selected_stage_id, "pre-operational-inspection");
        state.select_adjacent(1);
        assert_eq!(state.selected_stage_id, "questionnaire");
    }

    #[test]
    fn test_toggle_action_is_idempotent_pairwise() {
        let start = Instant::now();
        let mut state = JourneyState::new(start);
        let original = state.is_action_complete("licensing-fee");

        state.toggle_action("licensing-fee");
        assert_eq!(state.is_action_complete("licensing-fee"), !original);
        state.toggle_action("licensing-fee");
        assert_eq!(state.is_action_complete("licensing-fee"), original);
    }

    #[test]
    fn test_toggle_unknown_action_is_ignored() {
        let start = Instant::now();
        let mut state = JourneyState::new(start);
        let remaining = state.remaining_count();

        state.toggle_action("nonexistent");
        assert_eq!(state.remaining_count(), remaining);
    }

    #[test]
    fn test_progress_steps_toward_target_and_clamps() {
        let start = Instant::now();
        let mut state = JourneyState::new(start);
        let target = state.current_phase().percent;

        // Never overshoots the phase target
        for _ in 0..100 {
            state.tick(start + Duration::from_millis(100));
        }
        assert_eq!(state.progress, target);
    }
}
