//! Errors for snapshots that violate data-integrity invariants.

use thiserror::Error;

use crate::model::{MatchId, MissionId, PlayerId};

/// A snapshot the projectors refuse to render.
///
/// Missing data is never reported here; only states that cannot be produced
/// by a well-formed API response.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnapshotError {
    #[error("match {match_id} lists viewer {player_id} {count} times")]
    DuplicateViewer {
        match_id: MatchId,
        player_id: PlayerId,
        count: usize,
    },

    #[error("match {match_id} lists player {player_id} more than once")]
    DuplicatePlayer {
        match_id: MatchId,
        player_id: PlayerId,
    },

    #[error("mission {mission_id} has progress for {count} objectives, expected one")]
    MultipleObjectiveProgress { mission_id: MissionId, count: usize },
}
