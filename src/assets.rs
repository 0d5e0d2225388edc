use std::collections::HashMap;

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::model::{AgentId, MissionId, MissionInfo, ObjectiveId, ObjectiveValue};

const DIVISIONS: [&str; 8] = [
    "Iron",
    "Bronze",
    "Silver",
    "Gold",
    "Platinum",
    "Diamond",
    "Ascendant",
    "Immortal",
];

static TIER_NAMES: Lazy<Vec<String>> = Lazy::new(|| {
    let mut names = vec!["Unranked".to_string(); 3];
    for division in DIVISIONS {
        for step in 1..=3 {
            names.push(format!("{division} {step}"));
        }
    }
    names.push("Radiant".to_string());
    names
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveInfo {
    pub id: ObjectiveId,
    #[serde(default)]
    pub directive: Option<String>,
}

impl ObjectiveInfo {
    pub fn localized_directive(&self, number: u32) -> Option<String> {
        self.directive
            .as_deref()
            .map(|template| localize_number(template, number))
    }
}

/// Fills the `{Num}` placeholder used by objective directives.
pub fn localize_number(template: &str, number: u32) -> String {
    template.replace("{Num}", &number.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentInfo {
    pub id: AgentId,
    pub name: String,
}

/// Read-only display metadata keyed by game IDs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetCatalog {
    #[serde(default)]
    pub missions: HashMap<MissionId, MissionInfo>,
    #[serde(default)]
    pub objectives: HashMap<ObjectiveId, ObjectiveInfo>,
    #[serde(default)]
    pub agents: HashMap<AgentId, AgentInfo>,
    #[serde(default)]
    pub maps: HashMap<String, String>,
}

impl AssetCatalog {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("parse asset catalog")
    }

    pub fn agent_name(&self, id: Option<&AgentId>) -> &str {
        id.and_then(|id| self.agents.get(id))
            .map(|agent| agent.name.as_str())
            .unwrap_or("?")
    }

    pub fn map_name<'a>(&'a self, map_id: &'a str) -> &'a str {
        self.maps.get(map_id).map(String::as_str).unwrap_or(map_id)
    }

    /// Catalog the demo provider's data refers to.
    pub fn demo() -> Self {
        let mut catalog = Self::default();

        for (id, name) in [
            ("jett", "Jett"),
            ("sova", "Sova"),
            ("sage", "Sage"),
            ("omen", "Omen"),
            ("killjoy", "Killjoy"),
            ("raze", "Raze"),
            ("brimstone", "Brimstone"),
            ("viper", "Viper"),
            ("reyna", "Reyna"),
            ("skye", "Skye"),
        ] {
            let id = AgentId::new(id);
            catalog.agents.insert(
                id.clone(),
                AgentInfo {
                    id,
                    name: name.to_string(),
                },
            );
        }

        for (id, name) in [
            ("/Game/Maps/Ascent/Ascent", "Ascent"),
            ("/Game/Maps/Bonsai/Bonsai", "Split"),
            ("/Game/Maps/Duality/Duality", "Bind"),
            ("/Game/Maps/Triad/Triad", "Haven"),
            ("/Game/Maps/Port/Port", "Icebox"),
        ] {
            catalog.maps.insert(id.to_string(), name.to_string());
        }

        for (id, directive) in [
            ("obj-kills", Some("Get {Num} kills")),
            ("obj-plant-defuse", Some("You or your allies plant or defuse {Num} spikes")),
            ("obj-win-rounds", Some("Win {Num} rounds")),
            ("obj-play-games", None),
        ] {
            let id = ObjectiveId::new(id);
            catalog.objectives.insert(
                id.clone(),
                ObjectiveInfo {
                    id,
                    directive: directive.map(str::to_string),
                },
            );
        }

        let missions = [
            MissionInfo {
                id: MissionId::new("daily-kills"),
                display_name: Some("Daily: Eliminations".to_string()),
                title: None,
                xp_grant: 2_000,
                progress_to_complete: 40,
                objectives: vec![ObjectiveValue {
                    objective_id: ObjectiveId::new("obj-kills"),
                    value: 40,
                }],
            },
            // Nominal count disagrees with the objective on purpose; the API ships it this way.
            MissionInfo {
                id: MissionId::new("weekly-spikes"),
                display_name: None,
                title: Some("Weekly: Spike Duty".to_string()),
                xp_grant: 10_000,
                progress_to_complete: 1,
                objectives: vec![ObjectiveValue {
                    objective_id: ObjectiveId::new("obj-plant-defuse"),
                    value: 5,
                }],
            },
            MissionInfo {
                id: MissionId::new("weekly-rounds"),
                display_name: Some("Weekly: Round Wins".to_string()),
                title: None,
                xp_grant: 12_000,
                progress_to_complete: 30,
                objectives: vec![ObjectiveValue {
                    objective_id: ObjectiveId::new("obj-win-rounds"),
                    value: 30,
                }],
            },
            MissionInfo {
                id: MissionId::new("weekly-games"),
                display_name: None,
                title: None,
                xp_grant: 8_000,
                progress_to_complete: 3,
                objectives: Vec::new(),
            },
        ];
        for mission in missions {
            catalog.missions.insert(mission.id.clone(), mission);
        }

        catalog
    }
}

pub fn tier_name(tier: u32) -> &'static str {
    TIER_NAMES
        .get(tier as usize)
        .map(String::as_str)
        .unwrap_or("Unknown")
}
