//! Data models for the portal TUI
//!
//! This module contains the core view-model data:
//! - Journey stage catalog, animation phases, and their derivations
//! - Scripted chat content and breakout research cards
//! - Enums for state management

pub mod chat;
pub mod enums;
pub mod journey;

// Re-exports for convenient access
pub use chat::{
    breakout_cards, business_categories, initial_message, resolve_category, scripted_replies,
    BreakoutCard, ChatMessage, ChatRole, DEFAULT_CATEGORY,
};
pub use enums::{HighlightState, InputMode, NextActionStatus, TaskStatus};
pub use journey::{
    animation_phases, applicant_journey, find_stage, next_actions, next_step_message,
    remaining_action_count, timeline_items, AnimationPhase, JourneyStage, JourneyTask,
    NextActionItem, TimelineItem, AUTOMATION_MESSAGE, TASKS_COMPLETE_MESSAGE,
};
