//! Game staffing status and health score, derived fresh on every call.
//!
//! Staffing status is a pure function of the current active assignment
//! count — no transitions are stored anywhere. The health score is a 0–100
//! heuristic over staffing completeness and the conflict/warning load.

use chrono::{DateTime, Utc};
use log::warn;
use serde::{Deserialize, Serialize};

use crate::conflict::ConflictEngine;
use crate::error::{EngineError, Result};
use crate::records::AssignmentStatus;
use crate::store::ScheduleStore;

const UNDERSTAFFED_PENALTY: f64 = 40.0;
const ISSUE_PENALTY: f64 = 20.0;
const WARNING_PENALTY: f64 = 5.0;

/// Staffing state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StaffingStatus {
    Unassigned,
    PartiallyAssigned,
    FullyAssigned,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    AssignmentConflict,
    VenueConflict,
    ValidationError,
}

/// Something wrong with the game's current staffing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameIssue {
    pub kind: IssueKind,
    pub message: String,
    /// The referee whose assignment raised the issue, when one is involved.
    pub referee_id: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusWarningKind {
    SchedulingCheckError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusWarning {
    pub kind: StatusWarningKind,
    pub message: String,
}

/// Headcount summary of a game's active assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentSummary {
    pub required: u32,
    pub accepted: u32,
    pub pending: u32,
    pub total: u32,
}

/// Derived staffing state of one game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStatusResult {
    pub status: StaffingStatus,
    pub status_reason: String,
    /// 0–100; see the scoring rules on [`ConflictEngine::calculate_game_status`].
    pub health_score: u8,
    pub assignment_summary: AssignmentSummary,
    pub issues: Vec<GameIssue>,
    pub warnings: Vec<StatusWarning>,
    pub last_updated: DateTime<Utc>,
}

impl<S: ScheduleStore> ConflictEngine<S> {
    /// Recompute a game's staffing status and health score.
    ///
    /// Each active assignment is re-checked for conflicts; a conflicted
    /// assignment becomes an `assignment_conflict` issue, and a check that
    /// fails outright becomes a `validation_error` issue without aborting
    /// the remaining assignments. The game's own venue slot is checked too:
    /// each venue conflict is an issue, and a failed venue lookup a
    /// `scheduling_check_error` warning.
    ///
    /// Scoring starts at 100, subtracts `missing/required * 40` when
    /// understaffed, 20 per issue, 5 per warning, then clamps to 0–100.
    ///
    /// # Errors
    /// `EngineError::GameNotFound` when the game does not exist; store
    /// failures on the game or assignment-list reads are fatal here.
    pub fn calculate_game_status(&self, game_id: &str) -> Result<GameStatusResult> {
        let game = self
            .store()
            .find_game(game_id)?
            .ok_or_else(|| EngineError::GameNotFound(game_id.to_string()))?;
        let assignments = self.store().find_active_assignments(game_id)?;

        let accepted = assignments
            .iter()
            .filter(|a| a.status == AssignmentStatus::Accepted)
            .count() as u32;
        let pending = assignments
            .iter()
            .filter(|a| a.status == AssignmentStatus::Pending)
            .count() as u32;
        let total = accepted + pending;
        let required = game.refs_needed;

        let (status, status_reason) = if total == 0 {
            (StaffingStatus::Unassigned, "No referees assigned".to_string())
        } else if total < required {
            (
                StaffingStatus::PartiallyAssigned,
                format!("{} of {} positions filled", total, required),
            )
        } else {
            (StaffingStatus::FullyAssigned, "Fully staffed".to_string())
        };

        let mut issues = Vec::new();
        let mut warnings = Vec::new();

        for assignment in &assignments {
            match self.check_assignment_conflicts(&assignment.referee_id, game_id) {
                Ok(report) if report.has_conflicts => {
                    issues.push(GameIssue {
                        kind: IssueKind::AssignmentConflict,
                        message: report.errors.join("; "),
                        referee_id: Some(assignment.referee_id.clone()),
                    });
                }
                Ok(_) => {}
                Err(err) => {
                    warn!(
                        "conflict check failed for referee {} on game {game_id}: {err}",
                        assignment.referee_id
                    );
                    issues.push(GameIssue {
                        kind: IssueKind::ValidationError,
                        message: format!("Conflict check failed: {}", err),
                        referee_id: Some(assignment.referee_id.clone()),
                    });
                }
            }
        }

        match self.check_game_scheduling_conflicts(&game, Some(game_id)) {
            Ok(result) => {
                for entry in result.conflicts {
                    issues.push(GameIssue {
                        kind: IssueKind::VenueConflict,
                        message: entry.message,
                        referee_id: None,
                    });
                }
            }
            Err(err) => {
                warn!("scheduling check failed for game {game_id}: {err}");
                warnings.push(StatusWarning {
                    kind: StatusWarningKind::SchedulingCheckError,
                    message: format!("Could not verify venue availability: {}", err),
                });
            }
        }

        let mut score = 100.0;
        if required > 0 && total < required {
            score -= (f64::from(required - total) / f64::from(required)) * UNDERSTAFFED_PENALTY;
        }
        score -= ISSUE_PENALTY * issues.len() as f64;
        score -= WARNING_PENALTY * warnings.len() as f64;
        let health_score = score.clamp(0.0, 100.0).round() as u8;

        Ok(GameStatusResult {
            status,
            status_reason,
            health_score,
            assignment_summary: AssignmentSummary {
                required,
                accepted,
                pending,
                total,
            },
            issues,
            warnings,
            last_updated: Utc::now(),
        })
    }
}
