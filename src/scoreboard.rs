use std::collections::HashMap;
use std::fmt;

use crate::match_view::{MatchViewData, PaletteColor};
use crate::model::{CareerSummary, PartyId, Player, PlayerId, PlayerStats};

/// Sorts players by descending score. Ties keep their input order.
pub fn rank(players: &[Player]) -> Vec<&Player> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| b.stats.score.cmp(&a.stats.score));
    ranked
}

/// Premade parties (two or more members), in first-seen order over `ranked`.
pub fn party_order(ranked: &[&Player]) -> Vec<PartyId> {
    let mut sizes: HashMap<&PartyId, usize> = HashMap::new();
    for player in ranked {
        *sizes.entry(&player.party_id).or_default() += 1;
    }
    assign_party_order(ranked, |party| sizes.get(party).copied().unwrap_or(0) > 1)
}

pub fn assign_party_order(
    ranked: &[&Player],
    is_recognized: impl Fn(&PartyId) -> bool,
) -> Vec<PartyId> {
    let mut order: Vec<PartyId> = Vec::new();
    for player in ranked {
        if is_recognized(&player.party_id) && !order.contains(&player.party_id) {
            order.push(player.party_id.clone());
        }
    }
    order
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PartyLabel {
    Letter(char),
    Unknown,
}

impl fmt::Display for PartyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PartyLabel::Letter(letter) => write!(f, "Party {letter}"),
            PartyLabel::Unknown => f.write_str("–"),
        }
    }
}

pub fn party_label(party: &PartyId, parties: &[PartyId]) -> PartyLabel {
    parties
        .iter()
        .position(|p| p == party)
        .and_then(|idx| u8::try_from(idx).ok())
        .filter(|idx| *idx < 26)
        .map(|idx| PartyLabel::Letter(char::from(b'A' + idx)))
        .unwrap_or(PartyLabel::Unknown)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    Regular,
    Medium,
    Semibold,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartyCell {
    pub label: PartyLabel,
    pub emphasized: bool,
    pub faded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreboardRow<'a> {
    pub player: &'a Player,
    pub color: PaletteColor,
    pub icon_faded: bool,
    pub name_weight: FontWeight,
    /// `None` when the match has no premade parties and the column is hidden.
    pub party: Option<PartyCell>,
    /// The viewer has no link to their own profile.
    pub can_open_profile: bool,
    pub rank_tier: Option<u32>,
}

pub fn build_rows<'a>(
    data: &'a MatchViewData,
    summary_for: impl Fn(&PlayerId) -> Option<CareerSummary>,
) -> Vec<ScoreboardRow<'a>> {
    let highlight = data.highlight();
    rank(&data.details().players)
        .into_iter()
        .map(|player| {
            let name_weight = match highlight.is_highlighting_party(&player.party_id) {
                None => FontWeight::Medium,
                Some(true) => FontWeight::Semibold,
                Some(false) => FontWeight::Regular,
            };
            let party = (!data.parties().is_empty()).then(|| PartyCell {
                label: party_label(&player.party_id, data.parties()),
                emphasized: highlight.is_highlighting_party(&player.party_id) == Some(true),
                faded: highlight.should_fade_party(&player.party_id),
            });
            ScoreboardRow {
                player,
                color: data.relative_color_of_player(player),
                icon_faded: data.should_fade(&player.id),
                name_weight,
                party,
                can_open_profile: !data.is_myself(&player.id),
                rank_tier: summary_for(&player.id).map(|s| s.competitive_tier),
            }
        })
        .collect()
}

/// Everyone whose career summary "Update Ranks" should refresh.
pub fn rank_refresh_targets(data: &MatchViewData) -> Vec<PlayerId> {
    let mut ids: Vec<PlayerId> = data.player_ids().cloned().collect();
    ids.sort();
    ids
}

pub fn kda_summary(stats: &PlayerStats) -> String {
    format!("{} / {} / {}", stats.kills, stats.deaths, stats.assists)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn party_letters_stop_at_z() {
        let parties: Vec<PartyId> = (0..30).map(|i| PartyId::new(format!("p{i}"))).collect();
        assert_eq!(party_label(&parties[0], &parties), PartyLabel::Letter('A'));
        assert_eq!(party_label(&parties[25], &parties), PartyLabel::Letter('Z'));
        assert_eq!(party_label(&parties[26], &parties), PartyLabel::Unknown);
    }

    #[test]
    fn party_label_renders_dash_for_unknown() {
        assert_eq!(PartyLabel::Unknown.to_string(), "–");
        assert_eq!(PartyLabel::Letter('C').to_string(), "Party C");
    }
}
