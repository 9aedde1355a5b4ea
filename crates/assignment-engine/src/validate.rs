//! The synchronous precondition gate run before an assignment is persisted.
//!
//! Prerequisite checks (fields, existence, availability, uniqueness,
//! capacity) run before conflict detection so missing data never reaches the
//! conflict engine. Validation always returns a structured result rather
//! than failing; the only fatal condition is a malformed bulk batch size.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::conflict::{ConflictEngine, ConflictEntry};
use crate::error::{EngineError, Result};
use crate::store::ScheduleStore;

/// Upper bound on a bulk validation batch.
pub const MAX_BATCH_SIZE: usize = 50;

/// A candidate assignment as submitted by a caller. Fields arrive optional
/// because the request may come straight off the wire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentRequest {
    #[serde(default)]
    pub game_id: Option<String>,
    #[serde(default)]
    pub referee_id: Option<String>,
    #[serde(default)]
    pub position_id: Option<String>,
}

impl AssignmentRequest {
    pub fn new(
        game_id: impl Into<String>,
        referee_id: impl Into<String>,
        position_id: impl Into<String>,
    ) -> Self {
        Self {
            game_id: Some(game_id.into()),
            referee_id: Some(referee_id.into()),
            position_id: Some(position_id.into()),
        }
    }
}

/// Outcome of validating one assignment.
///
/// Invariants: `is_valid` iff `errors` is empty, and `can_assign` implies
/// `is_valid`. Warnings never block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub can_assign: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub conflicts: Vec<ConflictEntry>,
}

impl ValidationResult {
    fn invalid(errors: Vec<String>, warnings: Vec<String>) -> Self {
        Self {
            is_valid: false,
            can_assign: false,
            errors,
            warnings,
            conflicts: Vec::new(),
        }
    }
}

/// One item's outcome within a bulk validation, keyed by input index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkItemOutcome {
    pub index: usize,
    pub request: AssignmentRequest,
    pub result: ValidationResult,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkSummary {
    pub total: usize,
    pub valid_count: usize,
    pub invalid_count: usize,
    pub can_assign_count: usize,
}

/// Outcome of validating a batch, split into valid and invalid items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkValidationResult {
    pub valid: Vec<BulkItemOutcome>,
    pub invalid: Vec<BulkItemOutcome>,
    /// Per-item warnings surfaced at batch level, prefixed with the item
    /// index.
    pub warnings: Vec<String>,
    pub summary: BulkSummary,
}

impl<S: ScheduleStore> ConflictEngine<S> {
    /// Validate one candidate assignment end to end.
    ///
    /// Checks run in order: required fields, game/referee/position
    /// existence, referee availability, duplicate referee/position on the
    /// game, game capacity, then full conflict analysis. Missing entities
    /// stop validation before any conflict analysis. A store read that
    /// fails is downgraded to a warning so the remaining checks still run;
    /// a conflict analysis that cannot run at all likewise becomes a
    /// warning, never an error.
    pub fn validate_assignment(&self, request: &AssignmentRequest) -> ValidationResult {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        fn present(field: &Option<String>) -> Option<&str> {
            field.as_deref().filter(|v| !v.is_empty())
        }
        let (Some(game_id), Some(referee_id), Some(position_id)) = (
            present(&request.game_id),
            present(&request.referee_id),
            present(&request.position_id),
        ) else {
            for (field, value) in [
                ("game_id", &request.game_id),
                ("referee_id", &request.referee_id),
                ("position_id", &request.position_id),
            ] {
                if present(value).is_none() {
                    errors.push(format!("Missing required field: {}", field));
                }
            }
            return ValidationResult::invalid(errors, warnings);
        };

        let game = match self.store().find_game(game_id) {
            Ok(Some(game)) => Some(game),
            Ok(None) => {
                errors.push("Game not found".to_string());
                None
            }
            Err(err) => {
                warn!("game lookup failed for {game_id}: {err}");
                warnings.push(format!("Could not verify game: {}", err));
                None
            }
        };
        let referee = match self.store().find_referee(referee_id) {
            Ok(Some(referee)) => {
                if !referee.is_referee {
                    errors.push("User is not a referee".to_string());
                }
                Some(referee)
            }
            Ok(None) => {
                errors.push("Referee not found".to_string());
                None
            }
            Err(err) => {
                warn!("referee lookup failed for {referee_id}: {err}");
                warnings.push(format!("Could not verify referee: {}", err));
                None
            }
        };
        match self.store().position_exists(position_id) {
            Ok(true) => {}
            Ok(false) => errors.push("Position not found".to_string()),
            Err(err) => {
                warn!("position lookup failed for {position_id}: {err}");
                warnings.push(format!("Could not verify position: {}", err));
            }
        }

        // Nothing to analyze conflicts against when a referenced entity is
        // missing.
        if !errors.is_empty() {
            return ValidationResult::invalid(errors, warnings);
        }

        if let Some(referee) = &referee {
            if !referee.is_available {
                errors.push("Referee is not available".to_string());
            }
        }

        match self.store().find_active_assignments(game_id) {
            Ok(active) => {
                if active.iter().any(|a| a.referee_id == referee_id) {
                    errors.push("Referee is already assigned to this game".to_string());
                }
                if active.iter().any(|a| a.position_id == position_id) {
                    errors.push("Position is already filled".to_string());
                }
                if let Some(game) = &game {
                    if active.len() as u32 >= game.refs_needed {
                        errors.push(
                            "Game already has the required number of officials".to_string(),
                        );
                    }
                }
            }
            Err(err) => {
                warn!("active-assignment lookup failed for game {game_id}: {err}");
                warnings.push(format!("Could not verify existing assignments: {}", err));
            }
        }

        let mut conflicts = Vec::new();
        let mut has_conflicts = false;
        match self.check_assignment_conflicts(referee_id, game_id) {
            Ok(report) => {
                has_conflicts = report.has_conflicts;
                errors.extend(report.errors);
                warnings.extend(report.warnings);
                conflicts = report.conflicts;
            }
            Err(err) => {
                warn!("conflict analysis failed for referee {referee_id} on game {game_id}: {err}");
                warnings.push("Could not complete full conflict analysis".to_string());
            }
        }

        let is_valid = errors.is_empty();
        ValidationResult {
            is_valid,
            can_assign: is_valid && !has_conflicts,
            errors,
            warnings,
            conflicts,
        }
    }

    /// Validate a batch of 1–50 candidate assignments.
    ///
    /// An empty or oversized batch is rejected whole with
    /// `EngineError::BatchSize` and no per-item processing. Items are
    /// validated independently in input order; one item's findings never
    /// affect another's.
    pub fn validate_bulk(&self, requests: &[AssignmentRequest]) -> Result<BulkValidationResult> {
        if requests.is_empty() || requests.len() > MAX_BATCH_SIZE {
            return Err(EngineError::BatchSize {
                got: requests.len(),
                max: MAX_BATCH_SIZE,
            });
        }

        let mut valid = Vec::new();
        let mut invalid = Vec::new();
        let mut warnings = Vec::new();
        let mut can_assign_count = 0;

        for (index, request) in requests.iter().enumerate() {
            let result = self.validate_assignment(request);
            if !result.warnings.is_empty() {
                warnings.push(format!(
                    "Assignment {}: {}",
                    index,
                    result.warnings.join("; ")
                ));
            }
            if result.can_assign {
                can_assign_count += 1;
            }
            let outcome = BulkItemOutcome {
                index,
                request: request.clone(),
                result,
            };
            if outcome.result.is_valid {
                valid.push(outcome);
            } else {
                invalid.push(outcome);
            }
        }

        let summary = BulkSummary {
            total: requests.len(),
            valid_count: valid.len(),
            invalid_count: invalid.len(),
            can_assign_count,
        };

        Ok(BulkValidationResult {
            valid,
            invalid,
            warnings,
            summary,
        })
    }
}
