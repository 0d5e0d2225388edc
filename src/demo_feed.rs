use std::collections::HashMap;
use std::time::{Duration, Instant};

use anyhow::{Result, anyhow};
use chrono::{Duration as ChronoDuration, Utc};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::model::{
    AgentId, CareerSummary, ContractDetails, ContractId, MatchDetails, MatchHistory,
    MatchHistoryEntry, MatchId, MatchInfo, Mission, MissionId, ObjectiveId, PartyId, Player,
    PlayerIdentity, PlayerStats, TeamId, User, UserId,
};
use crate::provider::GameClient;
use crate::state::Delta;

pub const DEMO_VIEWER: &str = "acc-0000";

const MATCH_COUNT: usize = 12;
const TEAM_SIZE: usize = 5;
const KILLS_MISSION: &str = "daily-kills";

const ROSTER: [(&str, &str); 16] = [
    ("Sentinel", "EUW"),
    ("Hexfire", "0001"),
    ("Quietstep", "NA1"),
    ("Lumen", "2077"),
    ("Driftwood", "EUW"),
    ("Parallax", "1337"),
    ("Kestrel", "NA1"),
    ("Moth", "4242"),
    ("Overclock", "APAC"),
    ("Vantage", "9000"),
    ("Sable", "EUW"),
    ("Tidewater", "0420"),
    ("Ember", "NA1"),
    ("Halcyon", "1111"),
    ("Rook", "EUNE"),
    ("Nightjar", "7777"),
];

const AGENTS: [&str; 10] = [
    "jett", "sova", "sage", "omen", "killjoy", "raze", "brimstone", "viper", "reyna", "skye",
];

const MAPS: [&str; 5] = [
    "/Game/Maps/Ascent/Ascent",
    "/Game/Maps/Bonsai/Bonsai",
    "/Game/Maps/Duality/Duality",
    "/Game/Maps/Triad/Triad",
    "/Game/Maps/Port/Port",
];

/// In-process stand-in for the game API, seeded once at startup.
pub struct DemoClient {
    rng: StdRng,
    users: HashMap<UserId, User>,
    identities: HashMap<UserId, PlayerIdentity>,
    summaries: HashMap<UserId, CareerSummary>,
    matches: HashMap<MatchId, MatchDetails>,
    histories: HashMap<UserId, MatchHistory>,
    contract: ContractDetails,
    contract_requested: bool,
    progress_interval: Duration,
    last_progress: Instant,
}

impl DemoClient {
    pub fn new(seed: Option<u64>, viewer: &UserId) -> Self {
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        let ids: Vec<UserId> = (0..ROSTER.len())
            .map(|i| {
                if i == 0 {
                    viewer.clone()
                } else {
                    UserId::new(format!("acc-{i:04}"))
                }
            })
            .collect();

        let mut users = HashMap::with_capacity(ROSTER.len());
        let mut identities = HashMap::with_capacity(ROSTER.len());
        let mut summaries = HashMap::with_capacity(ROSTER.len());
        for (idx, (id, (name, tag))) in ids.iter().zip(ROSTER).enumerate() {
            users.insert(
                id.clone(),
                User {
                    id: id.clone(),
                    game_name: name.to_string(),
                    tag_line: tag.to_string(),
                },
            );
            identities.insert(
                id.clone(),
                PlayerIdentity {
                    id: id.clone(),
                    card_id: format!("card-{idx:02}"),
                    account_level: rng.gen_range(20..300),
                },
            );
            summaries.insert(
                id.clone(),
                CareerSummary {
                    user_id: id.clone(),
                    competitive_tier: rng.gen_range(3..=27),
                    ranked_rating: rng.gen_range(0..100),
                    games_played: rng.gen_range(10..400),
                },
            );
        }

        let mut client = Self {
            rng,
            users,
            identities,
            summaries,
            matches: HashMap::with_capacity(MATCH_COUNT),
            histories: HashMap::with_capacity(ROSTER.len()),
            contract: seed_contract(viewer),
            contract_requested: false,
            progress_interval: Duration::from_secs(20),
            last_progress: Instant::now(),
        };
        for n in 0..MATCH_COUNT {
            // The viewer plays in most of the generated matches.
            client.seed_match(n, &ids, n % 4 != 3);
        }
        client
    }

    fn seed_match(&mut self, n: usize, ids: &[UserId], with_viewer: bool) {
        let rng = &mut self.rng;
        let mut picks: Vec<usize> = (1..ids.len()).collect();
        picks.shuffle(rng);
        picks.truncate(TEAM_SIZE * 2);
        if with_viewer {
            picks[0] = 0;
            picks.shuffle(rng);
        }

        let match_id = MatchId::new(format!("match-{n:03}"));
        let started_at = Utc::now() - ChronoDuration::hours(5 * n as i64 + 1);
        let map_id = MAPS[rng.gen_range(0..MAPS.len())].to_string();

        let mut players = Vec::with_capacity(picks.len());
        for (team_idx, team) in picks.chunks(TEAM_SIZE).enumerate() {
            let team_id = TeamId::new(if team_idx == 0 { "Blue" } else { "Red" });
            let mut agents: Vec<&str> = AGENTS.to_vec();
            agents.shuffle(rng);
            let premade = rng.gen_range(1..=3);
            for (slot, idx) in team.iter().enumerate() {
                let id = &ids[*idx];
                let user = &self.users[id];
                let party_id = if slot < premade {
                    PartyId::new(format!("party-{n}-{team_idx}"))
                } else {
                    PartyId::new(format!("party-{n}-{team_idx}-{slot}"))
                };
                let kills = rng.gen_range(2..30);
                let assists = rng.gen_range(0..15);
                players.push(Player {
                    id: id.clone(),
                    game_name: user.game_name.clone(),
                    tag_line: user.tag_line.clone(),
                    team_id: team_id.clone(),
                    party_id,
                    agent_id: Some(AgentId::new(agents[slot])),
                    stats: PlayerStats {
                        score: kills * 200 + assists * 50 + rng.gen_range(0..1500),
                        kills,
                        deaths: rng.gen_range(5..25),
                        assists,
                    },
                });
            }
        }

        for player in &players {
            let tier_after = self.summaries.get(&player.id).map(|s| s.competitive_tier);
            let entry = MatchHistoryEntry {
                match_id: match_id.clone(),
                map_id: map_id.clone(),
                started_at,
                tier_after,
                rating_change: Some(rng.gen_range(-25..=25)),
            };
            self.histories
                .entry(player.id.clone())
                .or_insert_with(|| MatchHistory {
                    user_id: player.id.clone(),
                    entries: Vec::new(),
                })
                .entries
                .push(entry);
        }

        self.matches.insert(
            match_id.clone(),
            MatchDetails {
                id: match_id,
                info: MatchInfo {
                    map_id,
                    queue_id: Some("competitive".to_string()),
                    started_at,
                    is_ranked: true,
                },
                players,
            },
        );
    }
}

fn seed_contract(viewer: &UserId) -> ContractDetails {
    let mission = |id: &str, objective: Option<(&str, u32)>, is_complete: bool| Mission {
        id: MissionId::new(id),
        is_complete,
        objective_progress: objective
            .map(|(objective, progress)| (ObjectiveId::new(objective), progress))
            .into_iter()
            .collect(),
    };
    ContractDetails {
        user_id: viewer.clone(),
        active_contract: Some(ContractId::new("contract-sova")),
        missions: vec![
            mission(KILLS_MISSION, Some(("obj-kills", 12)), false),
            mission("weekly-spikes", Some(("obj-plant-defuse", 3)), false),
            mission("weekly-rounds", Some(("obj-win-rounds", 30)), true),
            mission("weekly-games", None, false),
            mission("event-retired", Some(("obj-kills", 1)), false),
        ],
    }
}

impl GameClient for DemoClient {
    fn user(&mut self, id: &UserId) -> Result<User> {
        self.users
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("unknown user {id}"))
    }

    fn identity(&mut self, id: &UserId) -> Result<PlayerIdentity> {
        self.identities
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("no identity for {id}"))
    }

    fn career_summary(&mut self, id: &UserId) -> Result<CareerSummary> {
        let summary = self
            .summaries
            .get_mut(id)
            .ok_or_else(|| anyhow!("no career summary for {id}"))?;
        summary.ranked_rating = (summary.ranked_rating + self.rng.gen_range(0..3)).min(99);
        Ok(summary.clone())
    }

    fn match_history(&mut self, id: &UserId) -> Result<MatchHistory> {
        Ok(self.histories.get(id).cloned().unwrap_or_else(|| MatchHistory {
            user_id: id.clone(),
            entries: Vec::new(),
        }))
    }

    fn match_details(&mut self, id: &MatchId) -> Result<MatchDetails> {
        self.matches
            .get(id)
            .cloned()
            .ok_or_else(|| anyhow!("unknown match {id}"))
    }

    fn contract_details(&mut self, id: &UserId) -> Result<ContractDetails> {
        if id != &self.contract.user_id {
            return Err(anyhow!("contracts are only visible for the signed-in user"));
        }
        self.contract_requested = true;
        Ok(self.contract.clone())
    }

    fn poll_updates(&mut self) -> Vec<Delta> {
        if !self.contract_requested || self.last_progress.elapsed() < self.progress_interval {
            return Vec::new();
        }
        self.last_progress = Instant::now();

        let gained = self.rng.gen_range(1..4);
        let Some(mission) = self
            .contract
            .missions
            .iter_mut()
            .find(|m| m.id.as_str() == KILLS_MISSION && !m.is_complete)
        else {
            return Vec::new();
        };
        let mut progress = 0;
        for count in mission.objective_progress.values_mut() {
            *count += gained;
            progress = *count;
        }
        if progress >= 40 {
            mission.is_complete = true;
        }
        vec![
            Delta::SetContractDetails(self.contract.clone()),
            Delta::Log(format!("[INFO] Mission progress: {progress} kills")),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_matches_have_ten_unique_players() {
        let viewer = UserId::new(DEMO_VIEWER);
        let client = DemoClient::new(Some(7), &viewer);
        assert_eq!(client.matches.len(), MATCH_COUNT);
        for details in client.matches.values() {
            let mut ids: Vec<_> = details.players.iter().map(|p| p.id.clone()).collect();
            ids.sort();
            ids.dedup();
            assert_eq!(ids.len(), TEAM_SIZE * 2);
        }
        assert!(client.histories.get(&viewer).is_some_and(|h| !h.entries.is_empty()));
    }
}
