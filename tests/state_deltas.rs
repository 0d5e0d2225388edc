use std::fs;
use std::path::PathBuf;
use std::sync::mpsc;
use std::time::Duration;

use valorant_companion::assets::AssetCatalog;
use valorant_companion::demo_feed::{DEMO_VIEWER, DemoClient};
use valorant_companion::load::LoadManager;
use valorant_companion::model::{
    ContractDetails, MatchDetails, MatchHistory, MatchHistoryEntry, MatchId, UserId,
};
use valorant_companion::provider::handle_command;
use valorant_companion::state::{AppState, CareerScreen, Delta, ProviderCommand, apply_delta};

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

fn signed_in_state() -> AppState {
    AppState::new(Some(UserId::new("p-me")), AssetCatalog::demo())
}

#[test]
fn match_view_is_built_once_details_arrive() {
    let mut state = signed_in_state();
    let match_id = MatchId::new("match-fixture");

    state.open_match(match_id.clone());
    assert!(state.match_view().is_none());
    assert_eq!(
        state.career_screen(),
        &CareerScreen::MatchDetails {
            match_id: match_id.clone()
        }
    );

    apply_delta(&mut state, Delta::SetMatchDetails(fixture_match()));
    let view = state.match_view().expect("view after details");
    assert_eq!(view.myself().map(|p| p.id.as_str()), Some("p-me"));
    assert_eq!(state.users.get(&UserId::new("p-red3")).map(|u| u.game_name.as_str()), Some("Parallax"));

    state.back();
    assert!(state.match_view().is_none());
    assert_eq!(state.career_screen(), &CareerScreen::Bookmarks);
}

#[test]
fn details_for_another_match_do_not_open_a_view() {
    let mut state = signed_in_state();
    state.open_match(MatchId::new("match-other"));
    apply_delta(&mut state, Delta::SetMatchDetails(fixture_match()));

    assert!(state.match_view().is_none());
    assert!(state.match_details.contains_key(&MatchId::new("match-fixture")));
}

#[test]
fn corrupt_match_is_refused_with_a_warning() {
    let mut details = fixture_match();
    let me = details.players[0].clone();
    details.players.push(me);

    let mut state = signed_in_state();
    apply_delta(&mut state, Delta::SetMatchDetails(details));
    state.open_match(MatchId::new("match-fixture"));

    assert!(state.match_view().is_none());
    assert!(
        state
            .logs
            .back()
            .is_some_and(|line| line.starts_with("[WARN]") && line.contains("p-me"))
    );
}

#[test]
fn highlight_follows_the_ranked_cursor() {
    let mut state = signed_in_state();
    apply_delta(&mut state, Delta::SetMatchDetails(fixture_match()));
    state.open_match(MatchId::new("match-fixture"));

    assert_eq!(state.selected_player(), Some(UserId::new("p-ally")));
    state.toggle_selected_highlight();
    let highlighted = state
        .match_view()
        .and_then(|v| v.highlighted_player().cloned());
    assert_eq!(highlighted, Some(UserId::new("p-ally")));

    state.toggle_selected_highlight();
    assert!(state.match_view().unwrap().highlighted_player().is_none());

    state.select_prev();
    assert_eq!(state.selected_player(), Some(UserId::new("p-red2")));
}

#[test]
fn nested_match_keeps_the_outer_session() {
    let mut state = signed_in_state();
    let mut second = fixture_match();
    second.id = MatchId::new("match-b");
    apply_delta(&mut state, Delta::SetMatchDetails(fixture_match()));
    apply_delta(&mut state, Delta::SetMatchDetails(second));

    state.open_match(MatchId::new("match-fixture"));
    state.toggle_selected_highlight();
    state.select_next();
    assert_eq!(state.selected_player(), Some(UserId::new("p-red1")));

    state.open_match_list(UserId::new("p-red1"));
    state.open_match(MatchId::new("match-b"));
    assert_eq!(state.career_depth(), 4);
    let inner = state.match_view().expect("inner view");
    assert_eq!(inner.details().id, MatchId::new("match-b"));
    assert!(inner.highlighted_player().is_none());
    state.toggle_selected_highlight();

    state.back();
    state.back();
    let outer = state.match_view().expect("outer view");
    assert_eq!(outer.details().id, MatchId::new("match-fixture"));
    assert_eq!(outer.highlighted_player(), Some(&UserId::new("p-ally")));
    assert_eq!(state.selected, 1);
    assert_eq!(state.selected_player(), Some(UserId::new("p-red1")));

    // Reopening the inner match starts a fresh session.
    state.open_match(MatchId::new("match-b"));
    assert!(state.match_view().unwrap().highlighted_player().is_none());
}

#[test]
fn back_restores_the_list_cursor() {
    let mut state = signed_in_state();
    state.toggle_bookmark(&UserId::new("p-ally"));
    state.toggle_bookmark(&UserId::new("p-red1"));
    state.select_next();
    state.select_next();
    assert_eq!(state.selected_user(), Some(UserId::new("p-red1")));

    state.open_match_list(UserId::new("p-red1"));
    assert_eq!(state.selected, 0);
    state.back();
    assert_eq!(state.selected, 2);
    assert_eq!(state.selected_user(), Some(UserId::new("p-red1")));

    // The root screen cannot be popped.
    state.back();
    assert_eq!(state.career_depth(), 1);
    assert_eq!(state.career_screen(), &CareerScreen::Bookmarks);
}

#[test]
fn bookmarks_list_the_viewer_first() {
    let mut state = signed_in_state();
    state.toggle_bookmark(&UserId::new("p-ally"));
    state.toggle_bookmark(&UserId::new("p-red1"));
    state.toggle_bookmark(&UserId::new("p-me"));

    assert_eq!(
        state.listed_users(),
        vec![UserId::new("p-me"), UserId::new("p-ally"), UserId::new("p-red1")]
    );
    assert_eq!(state.logs.back().map(String::as_str), Some("[INFO] Bookmarked p-red1"));

    state.toggle_bookmark(&UserId::new("p-ally"));
    assert_eq!(state.listed_users().len(), 2);

    let cells = state.user_cells();
    assert_eq!(cells[0].title(), "Unknown Player");
    assert_eq!(cells[0].rank_label(), "—");
}

#[test]
fn contract_for_another_user_is_ignored() {
    let details: ContractDetails =
        serde_json::from_str(&read_fixture("contract_details.json")).expect("fixture should parse");

    let mut stranger = signed_in_state();
    stranger.viewer = Some(UserId::new("someone-else"));
    apply_delta(&mut stranger, Delta::SetContractDetails(details.clone()));
    assert!(stranger.contract.is_none());
    assert!(stranger.contract_entries().is_empty());

    let mut state = signed_in_state();
    apply_delta(&mut state, Delta::SetContractDetails(details));
    assert_eq!(state.contract_entries().len(), 6);
}

#[test]
fn match_list_rows_are_newest_first_with_stats() {
    let mut state = signed_in_state();
    let viewer = UserId::new("p-me");
    let history: MatchHistory = MatchHistory {
        user_id: viewer.clone(),
        entries: vec![
            MatchHistoryEntry {
                match_id: MatchId::new("match-older"),
                map_id: "/Game/Maps/Port/Port".to_string(),
                started_at: "2024-04-01T12:00:00Z".parse().unwrap(),
                tier_after: None,
                rating_change: None,
            },
            MatchHistoryEntry {
                match_id: MatchId::new("match-fixture"),
                map_id: "/Game/Maps/Ascent/Ascent".to_string(),
                started_at: "2024-05-01T18:30:00Z".parse().unwrap(),
                tier_after: Some(12),
                rating_change: Some(-14),
            },
        ],
    };
    apply_delta(&mut state, Delta::SetMatchDetails(fixture_match()));
    apply_delta(&mut state, Delta::SetMatchHistory(history));
    state.open_match_list(viewer.clone());

    let rows = state.match_list_rows(&viewer);
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].match_id, MatchId::new("match-fixture"));
    assert_eq!(rows[0].map_name, "Ascent");
    assert_eq!(rows[0].score, Some(3000));
    assert_eq!(rows[0].rating_label(), "-14 RR");
    assert_eq!(rows[0].tier_after, Some("Gold 1"));
    assert_eq!(rows[1].map_name, "Icebox");
    assert_eq!(rows[1].score, None);
    assert_eq!(rows[1].rating_label(), "");

    assert_eq!(state.selected_match_id(), Some(MatchId::new("match-fixture")));
}

#[test]
fn provider_reports_unknown_match_as_warning() {
    let viewer = UserId::new(DEMO_VIEWER);
    let mut client = DemoClient::new(Some(42), &viewer);
    let (tx, rx) = mpsc::channel();

    handle_command(
        &mut client,
        &ProviderCommand::FetchMatchDetails {
            match_id: MatchId::new("no-such-match"),
        },
        &tx,
    );
    match rx.try_recv() {
        Ok(Delta::Log(line)) => {
            assert!(line.starts_with("[WARN] Match details fetch error"), "{line}");
        }
        other => panic!("expected a warning, got {other:?}"),
    }

    handle_command(
        &mut client,
        &ProviderCommand::FetchUser {
            user_id: viewer.clone(),
        },
        &tx,
    );
    match rx.try_recv() {
        Ok(Delta::SetUser(user)) => assert_eq!(user.id, viewer),
        other => panic!("expected the viewer, got {other:?}"),
    }
}

#[test]
fn demo_contract_is_only_served_to_the_viewer() {
    let viewer = UserId::new(DEMO_VIEWER);
    let mut client = DemoClient::new(Some(42), &viewer);
    let (tx, rx) = mpsc::channel();

    handle_command(
        &mut client,
        &ProviderCommand::FetchContractDetails {
            user_id: UserId::new("acc-0003"),
        },
        &tx,
    );
    assert!(matches!(rx.try_recv(), Ok(Delta::Log(_))));

    handle_command(
        &mut client,
        &ProviderCommand::FetchContractDetails {
            user_id: viewer.clone(),
        },
        &tx,
    );
    let Ok(Delta::SetContractDetails(details)) = rx.try_recv() else {
        panic!("expected contract details");
    };
    let mut state = AppState::new(Some(viewer), AssetCatalog::demo());
    apply_delta(&mut state, Delta::SetContractDetails(details));
    assert_eq!(state.contract_entries().len(), 5);
}

#[test]
fn load_manager_without_provider_reports_unavailable() {
    let mut state = signed_in_state();
    let mut loads = LoadManager::new(None);
    let sent = loads.load(
        &mut state,
        ProviderCommand::FetchMatchHistory {
            user_id: UserId::new("p-me"),
        },
        true,
    );
    assert!(!sent);
    assert_eq!(
        state.logs.back().map(String::as_str),
        Some("[INFO] Match history fetch unavailable")
    );
}

#[test]
fn load_if_stale_skips_fresh_requests() {
    let mut state = signed_in_state();
    let (tx, rx) = mpsc::channel();
    let mut loads = LoadManager::new(Some(tx));
    let cmd = ProviderCommand::FetchCareerSummary {
        user_id: UserId::new("p-ally"),
    };

    assert!(loads.load_if_stale(&mut state, cmd.clone(), Duration::from_secs(60)));
    assert!(!loads.load_if_stale(&mut state, cmd.clone(), Duration::from_secs(60)));
    assert!(loads.load_if_stale(&mut state, cmd.clone(), Duration::ZERO));
    assert_eq!(rx.try_iter().count(), 2);
    assert!(state.logs.is_empty());
}
