//! Journey stage catalog and view-model derivations
//!
//! The applicant journey is a fixed, hand-authored sequence of stages,
//! each with a highlight state and task list. Timeline items and the
//! to-do bank are derived from it by pure functions so the orchestration
//! panel can render without owning any state of its own.

use super::enums::{HighlightState, NextActionStatus, TaskStatus};

/// A single task inside a journey stage
#[derive(Debug, Clone)]
pub struct JourneyTask {
    pub id: &'static str,
    pub label: &'static str,
    pub status: TaskStatus,
    pub owner: &'static str,
    pub due_date: Option<&'static str>,
    pub completed_on: Option<&'static str>,
    pub tag: Option<&'static str>,
    pub description: Option<&'static str>,
}

/// A named phase of the licensing journey
#[derive(Debug, Clone)]
pub struct JourneyStage {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub state: HighlightState,
    pub status_detail: Option<&'static str>,
    pub tasks: Vec<JourneyTask>,
}

/// One automation animation phase: which stage it highlights, the status
/// message, the progress target, and the context chips shown with it.
#[derive(Debug, Clone)]
pub struct AnimationPhase {
    pub stage_id: &'static str,
    pub message: &'static str,
    pub percent: u8,
    pub key_considerations: &'static [&'static str],
    pub data_tags: &'static [&'static str],
}

/// Timeline entry derived from a stage for the tab strip
#[derive(Debug, Clone)]
pub struct TimelineItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub state: HighlightState,
    pub status_detail: Option<&'static str>,
    pub is_current: bool,
    pub show_progress: bool,
}

/// An outstanding applicant-owned item surfaced in the to-do bank
#[derive(Debug, Clone)]
pub struct NextActionItem {
    pub id: &'static str,
    pub label: &'static str,
    pub status: NextActionStatus,
    pub stage_id: &'static str,
    pub stage_title: &'static str,
    pub description: Option<&'static str>,
    pub due_date: Option<&'static str>,
}

/// Shown when every task in the selected stage is complete
pub const TASKS_COMPLETE_MESSAGE: &str =
    "All tasks for this stage are complete. Monitor automation updates.";

/// Shown when the selected stage has no applicant-owned tasks at all
pub const AUTOMATION_MESSAGE: &str = "Automation is handling the remaining work for you.";

/// The fixed applicant journey for the restaurant-licensing demo
pub fn applicant_journey() -> Vec<JourneyStage> {
    vec![
        JourneyStage {
            id: "questionnaire",
            title: "Questionnaire",
            description: "Personalized intake is complete and responses now prefill every downstream form automatically.",
            state: HighlightState::Done,
            status_detail: Some("Finished 12 Mar 2024"),
            tasks: vec![
                JourneyTask {
                    id: "questionnaire-intake",
                    label: "Complete smart intake questionnaire",
                    status: TaskStatus::Completed,
                    owner: "Applicant",
                    due_date: None,
                    completed_on: Some("2024-03-12"),
                    tag: Some("Intake"),
                    description: Some("AI prompts captured business profile, ownership, and activity preferences."),
                },
                JourneyTask {
                    id: "questionnaire-review",
                    label: "Review generated business profile summary",
                    status: TaskStatus::Completed,
                    owner: "Applicant",
                    due_date: None,
                    completed_on: Some("2024-03-12"),
                    tag: Some("Review"),
                    description: Some("Confirmed trade name spelling and legal representatives before submission."),
                },
            ],
        },
        JourneyStage {
            id: "business-registration",
            title: "Business Registration",
            description: "Trade name is reserved and the entity profile has been registered with the Department of Economic Development.",
            state: HighlightState::Done,
            status_detail: Some("Certificate issued 14 Mar 2024"),
            tasks: vec![
                JourneyTask {
                    id: "registration-tradename",
                    label: "Confirm reserved trade name",
                    status: TaskStatus::Completed,
                    owner: "DED Licensing",
                    due_date: None,
                    completed_on: Some("2024-03-14"),
                    tag: Some("Approval"),
                    description: Some("DED licensing team verified the trade name reservation reference."),
                },
                JourneyTask {
                    id: "registration-shareholder",
                    label: "Upload shareholder resolution",
                    status: TaskStatus::Completed,
                    owner: "Applicant",
                    due_date: None,
                    completed_on: Some("2024-03-13"),
                    tag: Some("Documents"),
                    description: Some("Signed resolution stored in the corporate documents vault."),
                },
                JourneyTask {
                    id: "registration-payment",
                    label: "Pay registration fees",
                    status: TaskStatus::Completed,
                    owner: "Applicant",
                    due_date: None,
                    completed_on: Some("2024-03-14"),
                    tag: Some("Payment"),
                    description: Some("Receipt #INV-09231 is available in the payment center."),
                },
            ],
        },
        JourneyStage {
            id: "submit-documents",
            title: "Submit Documents",
            description: "All mandatory files are uploaded and validated, including Emirates ID, tenancy contract, and shareholder agreements.",
            state: HighlightState::Done,
            status_detail: Some("5 documents verified"),
            tasks: vec![
                JourneyTask {
                    id: "documents-tenancy",
                    label: "Tenancy contract upload",
                    status: TaskStatus::Completed,
                    owner: "Applicant",
                    due_date: None,
                    completed_on: Some("2024-03-15"),
                    tag: Some("Documents"),
                    description: Some("Verified by licensing operations with no exceptions."),
                },
                JourneyTask {
                    id: "documents-shareholder-ids",
                    label: "Shareholder Emirates IDs",
                    status: TaskStatus::Completed,
                    owner: "Applicant",
                    due_date: None,
                    completed_on: Some("2024-03-15"),
                    tag: Some("Identity"),
                    description: Some("5 Emirates ID cards validated through UAE PASS."),
                },
                JourneyTask {
                    id: "documents-projections",
                    label: "Financial projections workbook",
                    status: TaskStatus::Completed,
                    owner: "Applicant",
                    due_date: None,
                    completed_on: Some("2024-03-15"),
                    tag: Some("Finance"),
                    description: Some("Used by compliance to confirm capital adequacy."),
                },
            ],
        },
        JourneyStage {
            id: "business-licensing",
            title: "Business Licensing",
            description: "Licensing specialists are reviewing the financial plan, compliance attachments, and fee payments.",
            state: HighlightState::Current,
            status_detail: Some("In review now"),
            tasks: vec![
                JourneyTask {
                    id: "licensing-financials",
                    label: "Upload revised financial projections",
                    status: TaskStatus::InProgress,
                    owner: "Applicant",
                    due_date: Some("2024-03-22"),
                    completed_on: None,
                    tag: Some("Documents"),
                    description: Some("Analyst requested an additional 12-month cash-flow scenario."),
                },
                JourneyTask {
                    id: "licensing-fee",
                    label: "Settle AED 2,500 licensing fee",
                    status: TaskStatus::Pending,
                    owner: "Applicant",
                    due_date: Some("2024-03-21"),
                    completed_on: None,
                    tag: Some("Payment"),
                    description: Some("Secure payment link is available in the invoices hub."),
                },
                JourneyTask {
                    id: "licensing-review",
                    label: "Compliance analyst review",
                    status: TaskStatus::InProgress,
                    owner: "Licensing analyst (Layla Al Mazrouei)",
                    due_date: Some("2024-03-24"),
                    completed_on: None,
                    tag: Some("Internal"),
                    description: Some("Layla is checking safety, staffing, and food handling attachments."),
                },
            ],
        },
        JourneyStage {
            id: "pre-operational-inspection",
            title: "Pre-Operational Inspection",
            description: "Inspection will be scheduled once licensing is approved so you can activate utilities and begin fit-out.",
            state: HighlightState::Upcoming,
            status_detail: Some("Awaiting scheduling"),
            tasks: vec![
                JourneyTask {
                    id: "inspection-windows",
                    label: "Propose inspection windows",
                    status: TaskStatus::Pending,
                    owner: "Applicant",
                    due_date: Some("2024-03-28"),
                    completed_on: None,
                    tag: Some("Scheduling"),
                    description: Some("Choose two preferred two-hour slots for facilities inspection."),
                },
                JourneyTask {
                    id: "inspection-checklist",
                    label: "Upload fit-out readiness checklist",
                    status: TaskStatus::Pending,
                    owner: "Applicant",
                    due_date: Some("2024-03-30"),
                    completed_on: None,
                    tag: Some("Checklist"),
                    description: Some("Include kitchen calibration logs and health & safety sign-off."),
                },
            ],
        },
    ]
}

/// The fixed automation timeline the orchestration panel cycles through
pub fn animation_phases() -> Vec<AnimationPhase> {
    vec![
        AnimationPhase {
            stage_id: "business-registration",
            message: "Generating application...",
            percent: 15,
            key_considerations: &["Legal Structure", "Business Activities", "Physical Space"],
            data_tags: &["UAE PASS profile", "Business intentions", "Workspace readiness"],
        },
        AnimationPhase {
            stage_id: "business-registration",
            message: "Verifying trade name reservation with DED...",
            percent: 34,
            key_considerations: &["Trade name availability"],
            data_tags: &["Reservation reference", "Entity profile"],
        },
        AnimationPhase {
            stage_id: "submit-documents",
            message: "Validating submitted documents...",
            percent: 52,
            key_considerations: &["Document completeness"],
            data_tags: &["Emirates ID", "Tenancy contract", "Shareholder agreements"],
        },
        AnimationPhase {
            stage_id: "business-licensing",
            message: "Coordinating licensing review with compliance...",
            percent: 68,
            key_considerations: &["Compliance attachments"],
            data_tags: &["Financial projections", "Safety sign-off"],
        },
        AnimationPhase {
            stage_id: "business-licensing",
            message: "Automating license issuance and regulatory approvals.",
            percent: 82,
            key_considerations: &["Regulatory approvals"],
            data_tags: &["DED licensing queue"],
        },
        AnimationPhase {
            stage_id: "pre-operational-inspection",
            message: "Preparing inspection scheduling options...",
            percent: 91,
            key_considerations: &["Inspection readiness"],
            data_tags: &["Fit-out checklist", "Facility calendar"],
        },
    ]
}

/// Derive the timeline tab entries from the stage catalog
pub fn timeline_items(stages: &[JourneyStage]) -> Vec<TimelineItem> {
    stages
        .iter()
        .map(|stage| {
            let is_current = stage.state == HighlightState::Current;
            TimelineItem {
                id: stage.id,
                title: stage.title,
                description: stage.description,
                state: stage.state,
                status_detail: stage.status_detail,
                is_current,
                show_progress: is_current,
            }
        })
        .collect()
}

/// Stage-level guidance entries surfaced alongside the task-derived ones
const STAGE_GUIDANCE: &[(&str, &str, &str, &str)] = &[(
    "pre-operational-inspection",
    "inspection-guidance",
    "Review inspection preparation guidance",
    "Covers utility activation, fit-out readiness, and inspector expectations.",
)];

/// Derive the to-do bank, in stage order: applicant-owned tasks become
/// actionable entries, outstanding tasks owned by reviewers or automation
/// become informational workflow entries, and stage guidance is appended
/// where the catalog defines it.
pub fn next_actions(stages: &[JourneyStage]) -> Vec<NextActionItem> {
    let mut actions = Vec::new();
    for stage in stages {
        for task in &stage.tasks {
            if task.owner == "Applicant" {
                actions.push(NextActionItem {
                    id: task.id,
                    label: task.label,
                    status: NextActionStatus::Task(task.status),
                    stage_id: stage.id,
                    stage_title: stage.title,
                    description: task.description,
                    due_date: task.due_date,
                });
            } else if task.status != TaskStatus::Completed {
                actions.push(NextActionItem {
                    id: task.id,
                    label: task.label,
                    status: NextActionStatus::Workflow,
                    stage_id: stage.id,
                    stage_title: stage.title,
                    description: task.description,
                    due_date: task.due_date,
                });
            }
        }
        for &(stage_id, id, label, description) in STAGE_GUIDANCE {
            if stage_id == stage.id {
                actions.push(NextActionItem {
                    id,
                    label,
                    status: NextActionStatus::Guidance,
                    stage_id: stage.id,
                    stage_title: stage.title,
                    description: Some(description),
                    due_date: None,
                });
            }
        }
    }
    actions
}

/// Count the applicant-actionable entries still outstanding under the
/// given completion map. Workflow and guidance entries are informational
/// and never counted.
pub fn remaining_action_count(
    actions: &[NextActionItem],
    completion: &std::collections::HashMap<&'static str, bool>,
) -> usize {
    actions
        .iter()
        .filter(|action| matches!(action.status, NextActionStatus::Task(_)))
        .filter(|action| !completion.get(action.id).copied().unwrap_or(false))
        .count()
}

/// "Your next step" message for a stage: the first outstanding action's
/// label, or the tasks-complete copy when the stage has actions but none
/// outstanding, or the automation copy when the stage has no actions.
pub fn next_step_message(
    stage_id: &str,
    actions: &[NextActionItem],
    completion: &std::collections::HashMap<&'static str, bool>,
) -> String {
    let stage_actions: Vec<&NextActionItem> =
        actions.iter().filter(|action| action.stage_id == stage_id).collect();

    if let Some(outstanding) = stage_actions
        .iter()
        .filter(|action| matches!(action.status, NextActionStatus::Task(_)))
        .find(|action| !completion.get(action.id).copied().unwrap_or(false))
    {
        return outstanding.label.to_string();
    }

    if !stage_actions.is_empty() {
        return TASKS_COMPLETE_MESSAGE.to_string();
    }

    AUTOMATION_MESSAGE.to_string()
}

/// Find a stage by id
pub fn find_stage<'a>(stages: &'a [JourneyStage], id: &str) -> Option<&'a JourneyStage> {
    stages.iter().find(|stage| stage.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_catalog_shape() {
        let stages = applicant_journey();
        assert_eq!(stages.len(), 5);
        assert_eq!(
            stages.iter().filter(|s| s.state == HighlightState::Current).count(),
            1
        );
        assert_eq!(stages[3].id, "business-licensing");
    }

    #[test]
    fn test_timeline_marks_current() {
        let stages = applicant_journey();
        let items = timeline_items(&stages);
        assert_eq!(items.len(), stages.len());
        let current: Vec<_> = items.iter().filter(|i| i.is_current).collect();
        assert_eq!(current.len(), 1);
        assert_eq!(current[0].id, "business-licensing");
        assert!(current[0].show_progress);
    }

    #[test]
    fn test_next_actions_classification() {
        let stages = applicant_journey();
        let actions = next_actions(&stages);

        // Completed reviewer-owned tasks never surface
        assert!(actions.iter().all(|a| a.id != "registration-tradename"));
        // Outstanding reviewer-owned work appears as a workflow entry
        let review = actions.iter().find(|a| a.id == "licensing-review").unwrap();
        assert_eq!(review.status, NextActionStatus::Workflow);
        // Applicant tasks are actionable entries
        let fee = actions.iter().find(|a| a.id == "licensing-fee").unwrap();
        assert_eq!(fee.status, NextActionStatus::Task(TaskStatus::Pending));
        // Stage guidance lands after the stage's tasks
        let guidance = actions.iter().find(|a| a.id == "inspection-guidance").unwrap();
        assert_eq!(guidance.status, NextActionStatus::Guidance);
        assert_eq!(guidance.stage_id, "pre-operational-inspection");
    }

    #[test]
    fn test_remaining_count_respects_completion_map() {
        let stages = applicant_journey();
        let actions = next_actions(&stages);
        let mut completion: HashMap<&'static str, bool> = actions
            .iter()
            .map(|a| (a.id, a.status.initially_complete()))
            .collect();
        let before = remaining_action_count(&actions, &completion);
        completion.insert("licensing-fee", true);
        assert_eq!(remaining_action_count(&actions, &completion), before - 1);

        // Informational entries never affect the remaining count
        completion.insert("licensing-review", true);
        completion.insert("inspection-guidance", true);
        assert_eq!(remaining_action_count(&actions, &completion), before - 1);
    }

    #[test]
    fn test_next_step_message_prefers_first_outstanding() {
        let stages = applicant_journey();
        let actions = next_actions(&stages);
        let completion: HashMap<&'static str, bool> = actions
            .iter()
            .map(|a| (a.id, a.status.initially_complete()))
            .collect();

        let message = next_step_message("business-licensing", &actions, &completion);
        assert_eq!(message, "Upload revised financial projections");
    }

    #[test]
    fn test_next_step_message_fallbacks() {
        let stages = applicant_journey();
        let actions = next_actions(&stages);
        let mut completion: HashMap<&'static str, bool> = HashMap::new();
        for action in &actions {
            completion.insert(action.id, true);
        }

        assert_eq!(
            next_step_message("business-licensing", &actions, &completion),
            TASKS_COMPLETE_MESSAGE
        );
        assert_eq!(
            next_step_message("no-such-stage", &actions, &completion),
            AUTOMATION_MESSAGE
        );
    }

    #[test]
    fn test_animation_phases_reference_real_stages() {
        let stages = applicant_journey();
        for phase in animation_phases() {
            assert!(
                find_stage(&stages, phase.stage_id).is_some(),
                "phase references unknown stage {}",
                phase.stage_id
            );
            assert!(phase.percent <= 100);
        }
    }
}
