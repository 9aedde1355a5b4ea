//! Conflict detection across a referee's schedule, a venue's schedule, and a
//! referee's qualification.
//!
//! Conflicts are findings, not failures: every check returns them as data.
//! Store failures inside the aggregate check are downgraded to non-blocking
//! warnings so one unreadable table never blocks a whole validation.

use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};

use crate::clock::DEFAULT_GAME_DURATION_HOURS;
use crate::error::Result;
use crate::overlap::{has_travel_conflict, overlaps, TimeWindow, DEFAULT_MIN_TRAVEL_GAP_MINUTES};
use crate::records::GameRecord;
use crate::store::ScheduleStore;

/// Setup/teardown buffer applied around a game when testing venue overlap.
pub const DEFAULT_VENUE_BUFFER_MINUTES: i64 = 15;

/// Game level whose tournament games carry an experience requirement.
pub const ELITE_LEVEL: &str = "Elite";
/// Game type that triggers the experience requirement at the elite level.
pub const TOURNAMENT_TYPE: &str = "Tournament";

/// What kind of scheduling conflict was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConflictKind {
    RefereeDoubleBooking,
    TravelTimeConflict,
    VenueConflict,
}

/// A single detected conflict, carrying the conflicting game's identifying
/// info alongside a human-readable message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictEntry {
    pub kind: ConflictKind,
    pub game_id: String,
    pub game_date: NaiveDate,
    pub window: TimeWindow,
    pub location: String,
    pub message: String,
}

/// Result of a single-source conflict check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictResult {
    pub has_conflict: bool,
    pub conflicts: Vec<ConflictEntry>,
}

impl ConflictResult {
    fn from_conflicts(conflicts: Vec<ConflictEntry>) -> Self {
        Self {
            has_conflict: !conflicts.is_empty(),
            conflicts,
        }
    }
}

/// Result of a qualification check. Errors block an assignment; warnings
/// never do.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualificationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Aggregated conflict report for one referee/game candidate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentConflictResult {
    pub has_conflicts: bool,
    pub conflicts: Vec<ConflictEntry>,
    pub warnings: Vec<String>,
    pub errors: Vec<String>,
    pub is_qualified: bool,
}

/// Named policy knobs for conflict detection.
///
/// `skip_venue_check_for_patterns` holds location-name substrings for which
/// the venue check is skipped entirely — a performance shortcut for
/// single-purpose facilities that can miss a genuine venue conflict when a
/// multi-use venue happens to match a pattern. Set it empty to always check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConflictConfig {
    pub min_travel_gap_minutes: i64,
    pub venue_buffer_minutes: i64,
    pub default_game_duration_hours: f64,
    pub skip_venue_check_for_patterns: Vec<String>,
}

impl Default for ConflictConfig {
    fn default() -> Self {
        Self {
            min_travel_gap_minutes: DEFAULT_MIN_TRAVEL_GAP_MINUTES,
            venue_buffer_minutes: DEFAULT_VENUE_BUFFER_MINUTES,
            default_game_duration_hours: DEFAULT_GAME_DURATION_HOURS,
            skip_venue_check_for_patterns: vec!["Field".to_string(), "Court".to_string()],
        }
    }
}

/// The conflict detection engine. Stateless apart from its config and the
/// injected store — safe for unlimited concurrent invocation.
pub struct ConflictEngine<S> {
    store: S,
    config: ConflictConfig,
}

impl<S: ScheduleStore> ConflictEngine<S> {
    pub fn new(store: S) -> Self {
        Self::with_config(store, ConflictConfig::default())
    }

    pub fn with_config(store: S, config: ConflictConfig) -> Self {
        Self { store, config }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &ConflictConfig {
        &self.config
    }

    /// Check a referee's other same-day assignments against a candidate
    /// window.
    ///
    /// Each other assignment yields at most one conflict: a
    /// `referee_double_booking` when the windows overlap, otherwise a
    /// `travel_time_conflict` when the locations differ and the gap between
    /// the windows is under the configured travel buffer. Overlap takes
    /// precedence — never both.
    pub fn check_double_booking(
        &self,
        referee_id: &str,
        date: NaiveDate,
        window: &TimeWindow,
        exclude_game_id: Option<&str>,
        location: Option<&str>,
    ) -> Result<ConflictResult> {
        let others =
            self.store
                .find_referee_assignments_on_date(referee_id, date, exclude_game_id)?;

        let mut conflicts = Vec::new();
        for other in &others {
            let Some(game) = &other.game else {
                continue;
            };
            let other_window = game.window(self.config.default_game_duration_hours)?;

            if overlaps(window, &other_window)? {
                conflicts.push(ConflictEntry {
                    kind: ConflictKind::RefereeDoubleBooking,
                    game_id: game.id.clone(),
                    game_date: game.date,
                    window: other_window.clone(),
                    location: game.location.clone(),
                    message: format!(
                        "Referee already has an assignment from {} to {} at {}",
                        other_window.start, other_window.end, game.location
                    ),
                });
            } else if let Some(location) = location {
                if location != game.location
                    && has_travel_conflict(
                        &other_window,
                        &game.location,
                        window,
                        location,
                        self.config.min_travel_gap_minutes,
                    )?
                {
                    conflicts.push(ConflictEntry {
                        kind: ConflictKind::TravelTimeConflict,
                        game_id: game.id.clone(),
                        game_date: game.date,
                        window: other_window.clone(),
                        location: game.location.clone(),
                        message: format!(
                            "Less than {} minutes of travel time between {} and {}",
                            self.config.min_travel_gap_minutes, game.location, location
                        ),
                    });
                }
            }
        }

        Ok(ConflictResult::from_conflicts(conflicts))
    }

    /// Check other games at the same venue on the same date against a
    /// candidate window, widened by the setup/teardown buffer on both sides.
    pub fn check_venue_conflict(
        &self,
        location: &str,
        date: NaiveDate,
        window: &TimeWindow,
        exclude_game_id: Option<&str>,
    ) -> Result<ConflictResult> {
        let buffer = self.config.venue_buffer_minutes;
        let buffered = TimeWindow::new(
            crate::clock::subtract_minutes(&window.start, buffer)?,
            crate::clock::add_minutes(&window.end, buffer)?,
        );

        let others = self
            .store
            .find_venue_games_on_date(location, date, exclude_game_id)?;

        let mut conflicts = Vec::new();
        for game in &others {
            let game_window = game.window(self.config.default_game_duration_hours)?;
            if overlaps(&buffered, &game_window)? {
                conflicts.push(ConflictEntry {
                    kind: ConflictKind::VenueConflict,
                    game_id: game.id.clone(),
                    game_date: game.date,
                    window: game_window.clone(),
                    location: game.location.clone(),
                    message: format!(
                        "{} already hosts a game from {} to {}",
                        location, game_window.start, game_window.end
                    ),
                });
            }
        }

        Ok(ConflictResult::from_conflicts(conflicts))
    }

    /// Check a referee's qualification against a game's level and type.
    ///
    /// Errors: unknown user, not a referee, unavailable. Warnings: division
    /// mismatch or no assigned divisions, and an experience shortfall on
    /// elite tournament games (missing experience data counts as a
    /// shortfall — a warning, never an error).
    pub fn check_qualification(
        &self,
        referee_id: &str,
        level: &str,
        game_type: &str,
    ) -> Result<QualificationResult> {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        let Some(referee) = self.store.find_referee(referee_id)? else {
            return Ok(QualificationResult {
                is_valid: false,
                errors: vec!["Referee not found".to_string()],
                warnings,
            });
        };

        if !referee.is_referee {
            errors.push("User is not a referee".to_string());
        }
        if !referee.is_available {
            errors.push("Referee is not available".to_string());
        }

        match &referee.allowed_divisions {
            Some(divisions) if !divisions.iter().any(|d| d == level) => {
                warnings.push(format!("Referee is not assigned to the {} division", level));
            }
            Some(_) => {}
            None => {
                warnings.push("Referee has no assigned divisions".to_string());
            }
        }

        if level == ELITE_LEVEL && game_type == TOURNAMENT_TYPE {
            let sufficient = matches!(
                (referee.experience_years, referee.min_experience_for_level),
                (Some(years), Some(minimum)) if years >= minimum
            );
            if !sufficient {
                warnings.push(
                    "Referee may lack the experience required for an Elite tournament game"
                        .to_string(),
                );
            }
        }

        Ok(QualificationResult {
            is_valid: errors.is_empty(),
            errors,
            warnings,
        })
    }

    /// Run every applicable conflict check for a referee/game candidate and
    /// aggregate the findings.
    ///
    /// Double-booking and qualification always run; the venue check runs
    /// only when the game's location matches none of the configured skip
    /// patterns. A sub-check whose store read fails contributes a warning
    /// instead of aborting the aggregate.
    ///
    /// `errors` holds qualification errors plus one message per
    /// double-booking or venue conflict; travel-time conflicts appear only
    /// in `conflicts`. `has_conflicts` is true exactly when `errors` is
    /// non-empty.
    pub fn check_assignment_conflicts(
        &self,
        referee_id: &str,
        game_id: &str,
    ) -> Result<AssignmentConflictResult> {
        let Some(game) = self.store.find_game(game_id)? else {
            return Ok(AssignmentConflictResult {
                has_conflicts: true,
                conflicts: Vec::new(),
                warnings: Vec::new(),
                errors: vec!["Game not found".to_string()],
                is_qualified: false,
            });
        };

        let window = game.window(self.config.default_game_duration_hours)?;

        let mut conflicts = Vec::new();
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let mut is_qualified = true;

        match self.check_double_booking(
            referee_id,
            game.date,
            &window,
            Some(game_id),
            Some(&game.location),
        ) {
            Ok(result) => {
                for entry in &result.conflicts {
                    if entry.kind == ConflictKind::RefereeDoubleBooking {
                        errors.push(entry.message.clone());
                    }
                }
                conflicts.extend(result.conflicts);
            }
            Err(err) => {
                warn!("double-booking check failed for referee {referee_id}: {err}");
                warnings.push(format!("Could not check for double-booking: {err}"));
            }
        }

        match self.check_qualification(referee_id, &game.level, &game.game_type) {
            Ok(result) => {
                is_qualified = result.is_valid;
                errors.extend(result.errors);
                warnings.extend(result.warnings);
            }
            Err(err) => {
                warn!("qualification check failed for referee {referee_id}: {err}");
                warnings.push(format!("Could not check qualification: {err}"));
            }
        }

        let skip_venue = self
            .config
            .skip_venue_check_for_patterns
            .iter()
            .any(|pattern| game.location.contains(pattern.as_str()));
        if !skip_venue {
            match self.check_venue_conflict(&game.location, game.date, &window, Some(game_id)) {
                Ok(result) => {
                    for entry in &result.conflicts {
                        errors.push(entry.message.clone());
                    }
                    conflicts.extend(result.conflicts);
                }
                Err(err) => {
                    warn!("venue check failed for game {game_id}: {err}");
                    warnings.push(format!("Could not check venue availability: {err}"));
                }
            }
        }

        Ok(AssignmentConflictResult {
            has_conflicts: !errors.is_empty(),
            conflicts,
            warnings,
            errors,
            is_qualified,
        })
    }

    /// Venue-only check used when creating or editing a game itself, before
    /// any referee is involved.
    pub fn check_game_scheduling_conflicts(
        &self,
        game: &GameRecord,
        exclude_game_id: Option<&str>,
    ) -> Result<ConflictResult> {
        let window = game.window(self.config.default_game_duration_hours)?;
        self.check_venue_conflict(&game.location, game.date, &window, exclude_game_id)
    }
}
