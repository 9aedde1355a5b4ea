//! # assignment-engine
//!
//! Scheduling conflict detection and game-status scoring for referee
//! assignment.
//!
//! The engine guarantees that no official is double-booked, no venue hosts
//! overlapping games, and every assignment satisfies qualification rules. It
//! owns no state and performs no writes: every call is a pure function of
//! its inputs plus the read-only lookups it makes through an injected
//! [`ScheduleStore`]. Conflicts are returned as data, never raised.
//!
//! ## Modules
//!
//! - [`clock`] — `HH:MM` arithmetic with day-wrap handling
//! - [`overlap`] — half-open window overlap and travel-gap detection
//! - [`records`] — game / assignment / referee records
//! - [`store`] — the injected read-only data collaborator
//! - [`conflict`] — double-booking, venue, and qualification checks
//! - [`status`] — staffing status and 0–100 health score per game
//! - [`validate`] — the precondition gate run before persisting, single and
//!   bulk
//! - [`error`] — error types

pub mod clock;
pub mod conflict;
pub mod error;
pub mod overlap;
pub mod records;
pub mod status;
pub mod store;
pub mod validate;

pub use conflict::{AssignmentConflictResult, ConflictConfig, ConflictEngine, ConflictEntry,
    ConflictKind};
pub use error::EngineError;
pub use overlap::{has_travel_conflict, overlaps, TimeWindow};
pub use records::{AssignmentCandidate, AssignmentStatus, GameRecord, GameStatus,
    RefereeQualification};
pub use status::{GameStatusResult, StaffingStatus};
pub use store::ScheduleStore;
pub use validate::{AssignmentRequest, BulkValidationResult, ValidationResult};
