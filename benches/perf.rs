use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use valorant_companion::assets::AssetCatalog;
use valorant_companion::demo_feed::{DEMO_VIEWER, DemoClient};
use valorant_companion::match_view::MatchViewData;
use valorant_companion::mission::contract_rows;
use valorant_companion::model::{MatchDetails, MatchId, UserId};
use valorant_companion::provider::GameClient;
use valorant_companion::scoreboard::{build_rows, party_order, rank};

fn demo_match() -> (UserId, MatchDetails) {
    let viewer = UserId::new(DEMO_VIEWER);
    let mut client = DemoClient::new(Some(1), &viewer);
    let details = client
        .match_details(&MatchId::new("match-000"))
        .expect("demo match");
    (viewer, details)
}

fn bench_match_view_construct(c: &mut Criterion) {
    let (viewer, details) = demo_match();
    c.bench_function("match_view_construct", |b| {
        b.iter(|| {
            let view = MatchViewData::new(black_box(details.clone()), Some(&viewer)).unwrap();
            black_box(view.parties().len());
        })
    });
}

fn bench_rank_and_parties(c: &mut Criterion) {
    let (_, details) = demo_match();
    c.bench_function("rank_and_parties", |b| {
        b.iter(|| {
            let ranked = rank(black_box(&details.players));
            black_box(party_order(&ranked).len());
        })
    });
}

fn bench_scoreboard_rows(c: &mut Criterion) {
    let (viewer, details) = demo_match();
    let mut view = MatchViewData::new(details, Some(&viewer)).unwrap();
    if let Some(first) = view.details().players.first().map(|p| p.id.clone()) {
        view.switch_highlight(&first);
    }
    c.bench_function("scoreboard_rows", |b| {
        b.iter(|| {
            let rows = build_rows(black_box(&view), |_| None);
            black_box(rows.len());
        })
    });
}

fn bench_contract_rows(c: &mut Criterion) {
    let viewer = UserId::new(DEMO_VIEWER);
    let mut client = DemoClient::new(Some(1), &viewer);
    let contract = client.contract_details(&viewer).expect("demo contract");
    let assets = AssetCatalog::demo();
    c.bench_function("contract_rows", |b| {
        b.iter(|| {
            let rows = contract_rows(black_box(&contract), &assets);
            black_box(rows.len());
        })
    });
}

criterion_group!(
    perf,
    bench_match_view_construct,
    bench_rank_and_parties,
    bench_scoreboard_rows,
    bench_contract_rows
);
criterion_main!(perf);
