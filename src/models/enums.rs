//! Enums used throughout the portal TUI
//!
//! Status vocabularies for journey stages, tasks, and the to-do bank,
//! plus the modal input mode for key handling.

/// Highlight state of a journey stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightState {
    Done,
    Current,
    Upcoming,
}

impl HighlightState {
    /// Badge label shown on timeline cards
    pub fn label(&self) -> &'static str {
        match self {
            HighlightState::Done => "Completed",
            HighlightState::Current => "In progress",
            HighlightState::Upcoming => "Next",
        }
    }
}

/// Status of a single stage task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Completed,
    InProgress,
    Pending,
}

impl TaskStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "Completed",
            TaskStatus::InProgress => "In progress",
            TaskStatus::Pending => "Waiting on you",
        }
    }
}

/// Status of a to-do bank entry: the task statuses plus two
/// informational kinds that never require applicant action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextActionStatus {
    Task(TaskStatus),
    Guidance,
    Workflow,
}

impl NextActionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NextActionStatus::Task(status) => status.label(),
            NextActionStatus::Guidance => "Guidance",
            NextActionStatus::Workflow => "Automated",
        }
    }

    /// Whether the entry starts out already complete
    pub fn initially_complete(&self) -> bool {
        matches!(self, NextActionStatus::Task(TaskStatus::Completed))
    }
}

/// Mode for the modal input system
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal, // Keys drive navigation and toggles
    TradeName, // Keystrokes edit the trade-name field
    Chat,      // Keystrokes edit the chat composer
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_labels() {
        assert_eq!(HighlightState::Done.label(), "Completed");
        assert_eq!(HighlightState::Current.label(), "In progress");
        assert_eq!(HighlightState::Upcoming.label(), "Next");
    }

    #[test]
    fn test_task_status_labels() {
        assert_eq!(TaskStatus::Pending.label(), "Waiting on you");
        assert_eq!(TaskStatus::InProgress.label(), "In progress");
    }

    #[test]
    fn test_next_action_initial_completion() {
        assert!(NextActionStatus::Task(TaskStatus::Completed).initially_complete());
        assert!(!NextActionStatus::Task(TaskStatus::Pending).initially_complete());
        assert!(!NextActionStatus::Guidance.initially_complete());
    }

    #[test]
    fn test_input_mode_default() {
        assert_eq!(InputMode::default(), InputMode::Normal);
    }
}
