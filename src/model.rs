use std::collections::HashMap;
use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => {
        $(
            $(#[$meta])*
            #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
            #[serde(transparent)]
            pub struct $name(pub String);

            impl $name {
                pub fn new(raw: impl Into<String>) -> Self {
                    Self(raw.into())
                }

                pub fn as_str(&self) -> &str {
                    &self.0
                }
            }

            impl fmt::Display for $name {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.0)
                }
            }

            impl From<&str> for $name {
                fn from(raw: &str) -> Self {
                    Self(raw.to_string())
                }
            }
        )*
    };
}

string_id!(
    /// Account ID. Users and in-match players share the same ID space.
    PlayerId,
    MatchId,
    /// `Blue`/`Red` in standard modes, player IDs in deathmatch.
    TeamId,
    PartyId,
    AgentId,
    MissionId,
    ObjectiveId,
    ContractId,
);

pub type UserId = PlayerId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub game_name: String,
    pub tag_line: String,
}

impl User {
    pub fn from_player(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            game_name: player.game_name.clone(),
            tag_line: player.tag_line.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerIdentity {
    pub id: PlayerId,
    pub card_id: String,
    pub account_level: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CareerSummary {
    pub user_id: UserId,
    pub competitive_tier: u32,
    #[serde(default)]
    pub ranked_rating: u32,
    #[serde(default)]
    pub games_played: u32,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub score: u32,
    #[serde(default)]
    pub kills: u32,
    #[serde(default)]
    pub deaths: u32,
    #[serde(default)]
    pub assists: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub game_name: String,
    pub tag_line: String,
    pub team_id: TeamId,
    pub party_id: PartyId,
    #[serde(default)]
    pub agent_id: Option<AgentId>,
    pub stats: PlayerStats,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchInfo {
    pub map_id: String,
    #[serde(default)]
    pub queue_id: Option<String>,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub is_ranked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchDetails {
    pub id: MatchId,
    pub info: MatchInfo,
    pub players: Vec<Player>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHistoryEntry {
    pub match_id: MatchId,
    pub map_id: String,
    pub started_at: DateTime<Utc>,
    #[serde(default)]
    pub tier_after: Option<u32>,
    #[serde(default)]
    pub rating_change: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchHistory {
    pub user_id: UserId,
    pub entries: Vec<MatchHistoryEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveValue {
    pub objective_id: ObjectiveId,
    pub value: u32,
}

/// Catalog entry for a mission, shared across accounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MissionInfo {
    pub id: MissionId,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    pub xp_grant: u32,
    pub progress_to_complete: u32,
    #[serde(default)]
    pub objectives: Vec<ObjectiveValue>,
}

impl MissionInfo {
    /// Objective by ID, or the first declared objective when no ID is known.
    pub fn objective(&self, id: Option<&ObjectiveId>) -> Option<&ObjectiveValue> {
        match id {
            Some(id) => self.objectives.iter().find(|o| &o.objective_id == id),
            None => self.objectives.first(),
        }
    }
}

/// Per-account mission state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub id: MissionId,
    #[serde(default)]
    pub is_complete: bool,
    #[serde(default)]
    pub objective_progress: HashMap<ObjectiveId, u32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContractDetails {
    pub user_id: UserId,
    #[serde(default)]
    pub active_contract: Option<ContractId>,
    pub missions: Vec<Mission>,
}
