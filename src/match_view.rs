use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::error::SnapshotError;
use crate::model::{MatchDetails, PartyId, Player, PlayerId, TeamId};
use crate::scoreboard;

/// Colors the match screens distinguish between.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaletteColor {
    Myself,
    Blue,
    Red,
}

impl TeamId {
    /// Absolute color for the standard two-team modes.
    pub fn color(&self) -> Option<PaletteColor> {
        match self.as_str() {
            "Blue" => Some(PaletteColor::Blue),
            "Red" => Some(PaletteColor::Red),
            _ => None,
        }
    }
}

/// Player-level and party-level highlight, tracked side by side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerHighlight {
    player: Option<PlayerId>,
    party: Option<PartyId>,
}

impl PlayerHighlight {
    pub fn player(&self) -> Option<&PlayerId> {
        self.player.as_ref()
    }

    pub fn party(&self) -> Option<&PartyId> {
        self.party.as_ref()
    }

    pub fn is_active(&self) -> bool {
        self.player.is_some()
    }

    /// Highlights `player`, or clears the highlight if it is already theirs.
    pub fn switch_to(&mut self, player: &PlayerId, party: Option<&PartyId>) {
        if self.player.as_ref() == Some(player) {
            self.player = None;
            self.party = None;
        } else {
            self.player = Some(player.clone());
            self.party = party.cloned();
        }
    }

    pub fn should_fade_player(&self, player: &PlayerId) -> bool {
        matches!(&self.player, Some(highlighted) if highlighted != player)
    }

    pub fn should_fade_party(&self, party: &PartyId) -> bool {
        matches!(&self.party, Some(highlighted) if highlighted != party)
    }

    /// `None` while nothing is highlighted.
    pub fn is_highlighting_party(&self, party: &PartyId) -> Option<bool> {
        self.party.as_ref().map(|highlighted| highlighted == party)
    }
}

/// View data for one match, shared by every match detail screen.
#[derive(Debug, Clone)]
pub struct MatchViewData {
    details: MatchDetails,
    myself: Option<Player>,
    players: HashMap<PlayerId, Player>,
    /// Premade parties in the order their letters are assigned.
    parties: Vec<PartyId>,
    highlight: PlayerHighlight,
}

impl MatchViewData {
    pub fn new(details: MatchDetails, viewer: Option<&PlayerId>) -> Result<Self, SnapshotError> {
        let candidates: Vec<&Player> = details
            .players
            .iter()
            .filter(|p| Some(&p.id) == viewer)
            .collect();
        if candidates.len() > 1 {
            return Err(SnapshotError::DuplicateViewer {
                match_id: details.id.clone(),
                player_id: candidates[0].id.clone(),
                count: candidates.len(),
            });
        }
        let myself = candidates.first().map(|p| (*p).clone());

        let mut players = HashMap::with_capacity(details.players.len());
        for player in &details.players {
            match players.entry(player.id.clone()) {
                Entry::Occupied(_) => {
                    return Err(SnapshotError::DuplicatePlayer {
                        match_id: details.id.clone(),
                        player_id: player.id.clone(),
                    });
                }
                Entry::Vacant(slot) => {
                    slot.insert(player.clone());
                }
            }
        }

        let ranked = scoreboard::rank(&details.players);
        let parties = scoreboard::party_order(&ranked);

        Ok(Self {
            details,
            myself,
            players,
            parties,
            highlight: PlayerHighlight::default(),
        })
    }

    pub fn details(&self) -> &MatchDetails {
        &self.details
    }

    pub fn myself(&self) -> Option<&Player> {
        self.myself.as_ref()
    }

    pub fn player(&self, id: &PlayerId) -> Option<&Player> {
        self.players.get(id)
    }

    pub fn player_ids(&self) -> impl Iterator<Item = &PlayerId> {
        self.players.keys()
    }

    pub fn parties(&self) -> &[PartyId] {
        &self.parties
    }

    pub fn highlight(&self) -> &PlayerHighlight {
        &self.highlight
    }

    pub fn highlighted_player(&self) -> Option<&PlayerId> {
        self.highlight.player()
    }

    pub fn is_myself(&self, player: &PlayerId) -> bool {
        self.myself.as_ref().is_some_and(|me| &me.id == player)
    }

    /// Switch highlight to this player or toggle it off.
    pub fn switch_highlight(&mut self, player: &PlayerId) {
        let party = self.players.get(player).map(|p| &p.party_id);
        self.highlight.switch_to(player, party);
    }

    pub fn should_fade(&self, player: &PlayerId) -> bool {
        self.highlight.should_fade_player(player)
    }

    pub fn relative_color_of_player(&self, other: &Player) -> PaletteColor {
        if self.is_myself(&other.id) {
            return PaletteColor::Myself;
        }
        self.relative_color_of_team(&other.team_id)
            .unwrap_or(PaletteColor::Blue)
    }

    pub fn relative_color_of_team(&self, team: &TeamId) -> Option<PaletteColor> {
        match &self.myself {
            Some(me) if &me.team_id == team => Some(PaletteColor::Blue),
            Some(_) => Some(PaletteColor::Red),
            None => team.color(),
        }
    }
}
