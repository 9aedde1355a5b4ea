//! Data records exchanged with the data-access collaborator.
//!
//! These are plain value records: the engine constructs nothing long-lived
//! from them and holds no state between calls. Loosely-typed storage fields
//! (statuses, division lists) are decoded into enums and vectors at the
//! data-access boundary, before they reach this crate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::clock;
use crate::error::Result;
use crate::overlap::TimeWindow;

/// Lifecycle status of a scheduled game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Completed,
    Cancelled,
}

/// Lifecycle status of an assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssignmentStatus {
    Pending,
    Accepted,
    Declined,
    Cancelled,
}

impl AssignmentStatus {
    /// Only pending and accepted assignments count toward conflicts and
    /// capacity.
    pub fn is_active(self) -> bool {
        matches!(self, AssignmentStatus::Pending | AssignmentStatus::Accepted)
    }
}

/// A scheduled event at a venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: String,
    pub date: NaiveDate,
    /// `HH:MM` start time.
    pub start_time: String,
    /// `HH:MM` end time; absent means "derive from the default duration".
    pub end_time: Option<String>,
    pub location: String,
    pub level: String,
    pub game_type: String,
    /// How many officials the game needs staffed.
    pub refs_needed: u32,
    pub status: GameStatus,
}

impl GameRecord {
    /// The game's time window, deriving the end time from
    /// `default_duration_hours` when none is recorded.
    pub fn window(&self, default_duration_hours: f64) -> Result<TimeWindow> {
        let end = match &self.end_time {
            Some(end) => end.clone(),
            None => clock::default_end_time(&self.start_time, default_duration_hours)?,
        };
        Ok(TimeWindow::new(self.start_time.clone(), end))
    }
}

/// A proposed or existing binding of a referee to a position on a game.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentCandidate {
    pub referee_id: String,
    pub game_id: String,
    pub position_id: String,
    pub status: AssignmentStatus,
    /// The assignment's game, joined in by queries that return rows across
    /// games. Single-game queries may leave it `None`.
    pub game: Option<GameRecord>,
}

/// A referee's role, availability, and qualification attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RefereeQualification {
    pub referee_id: String,
    /// Whether the looked-up user actually holds the referee role.
    pub is_referee: bool,
    pub is_available: bool,
    /// Name of the referee level, if one has been assigned.
    pub level_name: Option<String>,
    /// Divisions the referee may officiate. Absent means no divisions have
    /// been assigned at all.
    pub allowed_divisions: Option<Vec<String>>,
    pub experience_years: Option<u32>,
    /// Minimum experience the referee's level demands, if recorded.
    pub min_experience_for_level: Option<u32>,
}
