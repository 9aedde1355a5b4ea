//! Shared in-memory `ScheduleStore` and record helpers for integration tests.

#![allow(dead_code)]

use chrono::NaiveDate;

use assignment_engine::error::{EngineError, Result};
use assignment_engine::records::{
    AssignmentCandidate, AssignmentStatus, GameRecord, GameStatus, RefereeQualification,
};
use assignment_engine::store::ScheduleStore;

/// In-memory store. Ops listed in `failing` return `EngineError::Store`, to
/// exercise the downgrade-to-warning paths.
#[derive(Default)]
pub struct MockStore {
    pub games: Vec<GameRecord>,
    pub referees: Vec<RefereeQualification>,
    pub positions: Vec<String>,
    pub assignments: Vec<AssignmentCandidate>,
    pub failing: Vec<&'static str>,
}

impl MockStore {
    fn fail_if(&self, op: &'static str) -> Result<()> {
        if self.failing.contains(&op) {
            Err(EngineError::Store(format!("{op} unavailable")))
        } else {
            Ok(())
        }
    }
}

impl ScheduleStore for MockStore {
    fn find_game(&self, game_id: &str) -> Result<Option<GameRecord>> {
        self.fail_if("find_game")?;
        Ok(self.games.iter().find(|g| g.id == game_id).cloned())
    }

    fn find_referee(&self, user_id: &str) -> Result<Option<RefereeQualification>> {
        self.fail_if("find_referee")?;
        Ok(self
            .referees
            .iter()
            .find(|r| r.referee_id == user_id)
            .cloned())
    }

    fn position_exists(&self, position_id: &str) -> Result<bool> {
        self.fail_if("position_exists")?;
        Ok(self.positions.iter().any(|p| p == position_id))
    }

    fn find_active_assignments(&self, game_id: &str) -> Result<Vec<AssignmentCandidate>> {
        self.fail_if("find_active_assignments")?;
        Ok(self
            .assignments
            .iter()
            .filter(|a| a.game_id == game_id && a.status.is_active())
            .cloned()
            .collect())
    }

    fn find_referee_assignments_on_date(
        &self,
        referee_id: &str,
        date: NaiveDate,
        exclude_game_id: Option<&str>,
    ) -> Result<Vec<AssignmentCandidate>> {
        self.fail_if("find_referee_assignments_on_date")?;
        Ok(self
            .assignments
            .iter()
            .filter(|a| {
                a.referee_id == referee_id
                    && a.status.is_active()
                    && a.game.as_ref().is_some_and(|g| g.date == date)
                    && Some(a.game_id.as_str()) != exclude_game_id
            })
            .cloned()
            .collect())
    }

    fn find_venue_games_on_date(
        &self,
        location: &str,
        date: NaiveDate,
        exclude_game_id: Option<&str>,
    ) -> Result<Vec<GameRecord>> {
        self.fail_if("find_venue_games_on_date")?;
        Ok(self
            .games
            .iter()
            .filter(|g| {
                g.location == location
                    && g.date == date
                    && g.status != GameStatus::Cancelled
                    && Some(g.id.as_str()) != exclude_game_id
            })
            .cloned()
            .collect())
    }
}

/// Every helper game lands on the same date; cross-day cases build their own.
pub fn game_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 9, 12).unwrap()
}

pub fn game(id: &str, start: &str, end: &str, location: &str) -> GameRecord {
    GameRecord {
        id: id.to_string(),
        date: game_date(),
        start_time: start.to_string(),
        end_time: Some(end.to_string()),
        location: location.to_string(),
        level: "Competitive".to_string(),
        game_type: "League".to_string(),
        refs_needed: 2,
        status: GameStatus::Scheduled,
    }
}

pub fn referee(id: &str) -> RefereeQualification {
    RefereeQualification {
        referee_id: id.to_string(),
        is_referee: true,
        is_available: true,
        level_name: Some("Competitive".to_string()),
        allowed_divisions: Some(vec!["Competitive".to_string()]),
        experience_years: Some(5),
        min_experience_for_level: Some(3),
    }
}

pub fn assignment(
    referee_id: &str,
    game: &GameRecord,
    position_id: &str,
    status: AssignmentStatus,
) -> AssignmentCandidate {
    AssignmentCandidate {
        referee_id: referee_id.to_string(),
        game_id: game.id.clone(),
        position_id: position_id.to_string(),
        status,
        game: Some(game.clone()),
    }
}
