//! The injected read-only data-access collaborator.
//!
//! The engine performs no writes and owns no persistence — every lookup it
//! needs goes through this trait. Each method returns `Result` so a store
//! failure is an explicit value the caller at each boundary decides how to
//! handle (fatal, or downgraded to a non-blocking warning).

use chrono::NaiveDate;

use crate::error::Result;
use crate::records::{AssignmentCandidate, GameRecord, RefereeQualification};

pub trait ScheduleStore {
    /// Look up a game by id.
    fn find_game(&self, game_id: &str) -> Result<Option<GameRecord>>;

    /// Look up a user's referee qualification record. Returns `None` for
    /// unknown users; role and availability are expressed on the record.
    fn find_referee(&self, user_id: &str) -> Result<Option<RefereeQualification>>;

    /// Whether a position id exists.
    fn position_exists(&self, position_id: &str) -> Result<bool>;

    /// Pending/accepted assignments on one game.
    fn find_active_assignments(&self, game_id: &str) -> Result<Vec<AssignmentCandidate>>;

    /// A referee's pending/accepted assignments on a date, with each
    /// assignment's game joined in, optionally excluding one game.
    fn find_referee_assignments_on_date(
        &self,
        referee_id: &str,
        date: NaiveDate,
        exclude_game_id: Option<&str>,
    ) -> Result<Vec<AssignmentCandidate>>;

    /// Non-cancelled games at a location on a date, optionally excluding one
    /// game.
    fn find_venue_games_on_date(
        &self,
        location: &str,
        date: NaiveDate,
        exclude_game_id: Option<&str>,
    ) -> Result<Vec<GameRecord>>;
}
