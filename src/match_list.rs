use std::collections::HashMap;

use chrono::Local;

use crate::assets::{AssetCatalog, tier_name};
use crate::model::{MatchDetails, MatchHistory, MatchId, UserId};
use crate::scoreboard::kda_summary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchListRow {
    pub match_id: MatchId,
    pub map_name: String,
    pub started: String,
    /// Filled once the match details are cached.
    pub score: Option<u32>,
    pub kda: Option<String>,
    pub rating_change: Option<i32>,
    pub tier_after: Option<&'static str>,
}

impl MatchListRow {
    pub fn rating_label(&self) -> String {
        match self.rating_change {
            Some(change) => format!("{change:+} RR"),
            None => String::new(),
        }
    }
}

/// History rows for `user`, newest first.
pub fn build_match_list(
    history: &MatchHistory,
    details: &HashMap<MatchId, MatchDetails>,
    user: &UserId,
    assets: &AssetCatalog,
) -> Vec<MatchListRow> {
    let mut entries: Vec<_> = history.entries.iter().collect();
    entries.sort_by(|a, b| b.started_at.cmp(&a.started_at));
    entries
        .into_iter()
        .map(|entry| {
            let stats = details
                .get(&entry.match_id)
                .and_then(|d| d.players.iter().find(|p| &p.id == user))
                .map(|p| p.stats);
            MatchListRow {
                match_id: entry.match_id.clone(),
                map_name: assets.map_name(&entry.map_id).to_string(),
                started: entry
                    .started_at
                    .with_timezone(&Local)
                    .format("%Y-%m-%d %H:%M")
                    .to_string(),
                score: stats.map(|s| s.score),
                kda: stats.as_ref().map(kda_summary),
                rating_change: entry.rating_change,
                tier_after: entry.tier_after.map(tier_name),
            }
        })
        .collect()
}
