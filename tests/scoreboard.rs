use std::fs;
use std::path::PathBuf;

use valorant_companion::match_view::{MatchViewData, PaletteColor};
use valorant_companion::model::{
    CareerSummary, MatchDetails, PartyId, Player, PlayerId, PlayerStats, TeamId,
};
use valorant_companion::scoreboard::{
    FontWeight, PartyLabel, assign_party_order, build_rows, kda_summary, party_label, party_order,
    rank, rank_refresh_targets,
};

fn read_fixture(name: &str) -> String {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.push("tests");
    path.push("fixtures");
    path.push(name);
    fs::read_to_string(path).expect("fixture file should be readable")
}

fn fixture_match() -> MatchDetails {
    serde_json::from_str(&read_fixture("match_details.json")).expect("fixture should parse")
}

fn player(id: &str, score: u32, party: &str) -> Player {
    Player {
        id: PlayerId::new(id),
        game_name: id.to_uppercase(),
        tag_line: "TAG".to_string(),
        team_id: TeamId::new("Blue"),
        party_id: PartyId::new(party),
        agent_id: None,
        stats: PlayerStats {
            score,
            ..PlayerStats::default()
        },
    }
}

fn ids(players: &[&Player]) -> Vec<String> {
    players.iter().map(|p| p.id.to_string()).collect()
}

#[test]
fn ranking_is_stable_on_ties() {
    let players = vec![player("1", 10, "a"), player("2", 10, "b"), player("3", 20, "c")];
    assert_eq!(ids(&rank(&players)), vec!["3", "1", "2"]);
}

#[test]
fn party_letters_follow_ranked_first_occurrence() {
    let players = vec![
        player("w", 40, "P2"),
        player("x", 30, "P1"),
        player("y", 20, "P2"),
        player("z", 10, "P3"),
    ];
    let ranked = rank(&players);
    let order = assign_party_order(&ranked, |_| true);
    let labels: Vec<PartyLabel> = ranked
        .iter()
        .map(|p| party_label(&p.party_id, &order))
        .collect();
    assert_eq!(
        labels,
        vec![
            PartyLabel::Letter('A'),
            PartyLabel::Letter('B'),
            PartyLabel::Letter('A'),
            PartyLabel::Letter('C'),
        ]
    );
}

#[test]
fn only_premades_are_recognized() {
    let details = fixture_match();
    let ranked = rank(&details.players);
    assert_eq!(
        ids(&ranked),
        vec!["p-ally", "p-red1", "p-me", "p-red3", "p-blue3", "p-red2"]
    );
    assert_eq!(
        party_order(&ranked),
        vec![PartyId::new("party-1"), PartyId::new("party-3")]
    );
}

#[test]
fn solo_only_match_hides_the_party_column() {
    let players = vec![player("a", 3, "solo-a"), player("b", 2, "solo-b")];
    let ranked = rank(&players);
    assert!(party_order(&ranked).is_empty());

    let mut details = fixture_match();
    for (idx, p) in details.players.iter_mut().enumerate() {
        p.party_id = PartyId::new(format!("solo-{idx}"));
    }
    let data = MatchViewData::new(details, None).unwrap();
    let rows = build_rows(&data, |_| None);
    assert!(rows.iter().all(|row| row.party.is_none()));
}

#[test]
fn rows_without_highlight() {
    let data = MatchViewData::new(fixture_match(), Some(&PlayerId::new("p-me"))).unwrap();
    let rows = build_rows(&data, |_| None);

    let labels: Vec<String> = rows
        .iter()
        .map(|row| row.party.as_ref().expect("party column").label.to_string())
        .collect();
    assert_eq!(labels, vec!["Party A", "Party B", "Party A", "–", "–", "Party B"]);
    assert!(rows.iter().all(|row| row.name_weight == FontWeight::Medium));
    assert!(rows.iter().all(|row| !row.icon_faded));

    let me = rows.iter().find(|row| row.player.id.as_str() == "p-me").unwrap();
    assert_eq!(me.color, PaletteColor::Myself);
    assert!(!me.can_open_profile);
    let enemy = rows.iter().find(|row| row.player.id.as_str() == "p-red3").unwrap();
    assert_eq!(enemy.color, PaletteColor::Red);
    assert!(enemy.can_open_profile);
}

#[test]
fn rows_with_highlight_fade_player_and_party_independently() {
    let mut data = MatchViewData::new(fixture_match(), Some(&PlayerId::new("p-me"))).unwrap();
    data.switch_highlight(&PlayerId::new("p-ally"));
    let rows = build_rows(&data, |_| None);

    let ally = rows.iter().find(|row| row.player.id.as_str() == "p-ally").unwrap();
    assert!(!ally.icon_faded);
    assert_eq!(ally.name_weight, FontWeight::Semibold);

    // Party mate of the highlighted player: icon fades, party label does not.
    let me = rows.iter().find(|row| row.player.id.as_str() == "p-me").unwrap();
    assert!(me.icon_faded);
    let party = me.party.as_ref().unwrap();
    assert!(!party.faded);
    assert!(party.emphasized);
    assert_eq!(me.name_weight, FontWeight::Semibold);

    let enemy = rows.iter().find(|row| row.player.id.as_str() == "p-red1").unwrap();
    assert!(enemy.icon_faded);
    assert!(enemy.party.as_ref().unwrap().faded);
    assert_eq!(enemy.name_weight, FontWeight::Regular);
}

#[test]
fn rows_pick_up_cached_ranks() {
    let data = MatchViewData::new(fixture_match(), None).unwrap();
    let rows = build_rows(&data, |id| {
        (id.as_str() == "p-red2").then(|| CareerSummary {
            user_id: id.clone(),
            competitive_tier: 12,
            ranked_rating: 40,
            games_played: 80,
        })
    });
    let red2 = rows.iter().find(|row| row.player.id.as_str() == "p-red2").unwrap();
    assert_eq!(red2.rank_tier, Some(12));
    assert!(rows.iter().filter(|row| row.rank_tier.is_some()).count() == 1);
}

#[test]
fn rank_refresh_targets_every_participant() {
    let data = MatchViewData::new(fixture_match(), None).unwrap();
    let targets = rank_refresh_targets(&data);
    assert_eq!(targets.len(), 6);
    assert!(targets.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn kda_reads_kills_deaths_assists() {
    let stats = PlayerStats {
        score: 4200,
        kills: 21,
        deaths: 14,
        assists: 6,
    };
    assert_eq!(kda_summary(&stats), "21 / 14 / 6");
}
