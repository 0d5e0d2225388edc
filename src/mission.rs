use crate::assets::AssetCatalog;
use crate::error::SnapshotError;
use crate::model::{ContractDetails, Mission, MissionId, MissionInfo, ObjectiveId};

pub const UNNAMED_MISSION: &str = "<Unnamed Mission>";

/// The one `(objective, progress)` pair a mission in progress carries.
pub fn single_progress_entry(mission: &Mission) -> Result<Option<(&ObjectiveId, u32)>, SnapshotError> {
    let count = mission.objective_progress.len();
    if count > 1 {
        return Err(SnapshotError::MultipleObjectiveProgress {
            mission_id: mission.id.clone(),
            count,
        });
    }
    Ok(mission
        .objective_progress
        .iter()
        .next()
        .map(|(id, progress)| (id, *progress)))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMission {
    pub name: String,
    /// `None` until the account has a record for the mission.
    pub progress: Option<u32>,
    pub to_complete: u32,
}

impl ResolvedMission {
    pub fn resolve(
        info: &MissionInfo,
        mission: Option<&Mission>,
        assets: Option<&AssetCatalog>,
    ) -> Result<Self, SnapshotError> {
        let entry = match mission {
            Some(mission) => single_progress_entry(mission)?,
            None => None,
        };
        let objective_id = entry.map(|(id, _)| id);
        let progress = entry.map(|(_, progress)| progress);

        let objective_value = info.objective(objective_id);
        // Wrong for objectives whose catalog target differs from the nominal
        // count (e.g. plant/defuse spikes lists 1 here but 5 on the objective).
        let to_complete = objective_value
            .map(|o| o.value)
            .unwrap_or(info.progress_to_complete);

        let objective = objective_id
            .or(objective_value.map(|o| &o.objective_id))
            .and_then(|id| assets.and_then(|a| a.objectives.get(id)));

        let name = objective
            .and_then(|o| o.localized_directive(to_complete))
            .or_else(|| info.display_name.clone())
            .or_else(|| info.title.clone())
            .unwrap_or_else(|| UNNAMED_MISSION.to_string());

        Ok(Self {
            name,
            progress,
            to_complete,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProgressIndicator {
    Complete,
    InProgress { progress: u32, to_complete: u32 },
    NotStarted,
}

impl ProgressIndicator {
    /// Fill fraction for the bar; may exceed 1 when the data does.
    pub fn fraction(&self) -> f64 {
        match *self {
            ProgressIndicator::Complete => 1.0,
            ProgressIndicator::InProgress {
                progress,
                to_complete: 0,
            } => {
                if progress > 0 { 1.0 } else { 0.0 }
            }
            ProgressIndicator::InProgress {
                progress,
                to_complete,
            } => f64::from(progress) / f64::from(to_complete),
            ProgressIndicator::NotStarted => 0.0,
        }
    }

    pub fn label(&self) -> Option<String> {
        match self {
            ProgressIndicator::InProgress {
                progress,
                to_complete,
            } => Some(format!("{progress}/{to_complete}")),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissionRow {
    pub id: MissionId,
    pub name: String,
    pub xp_grant: u32,
    pub is_complete: bool,
    pub indicator: ProgressIndicator,
}

impl MissionRow {
    pub fn build(
        info: &MissionInfo,
        mission: Option<&Mission>,
        assets: Option<&AssetCatalog>,
    ) -> Result<Self, SnapshotError> {
        let resolved = ResolvedMission::resolve(info, mission, assets)?;
        let is_complete = mission.is_some_and(|m| m.is_complete);
        let indicator = match resolved.progress {
            _ if is_complete => ProgressIndicator::Complete,
            Some(progress) => ProgressIndicator::InProgress {
                progress,
                to_complete: resolved.to_complete,
            },
            None => ProgressIndicator::NotStarted,
        };
        Ok(Self {
            id: info.id.clone(),
            name: resolved.name,
            xp_grant: info.xp_grant,
            is_complete,
            indicator,
        })
    }

    pub fn xp_label(&self) -> String {
        format!("+{} XP", self.xp_grant)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContractEntry {
    Mission(MissionRow),
    Unknown(MissionId),
    Corrupt(SnapshotError),
}

/// One entry per mission in the contract, in contract order.
pub fn contract_rows(details: &ContractDetails, assets: &AssetCatalog) -> Vec<ContractEntry> {
    details
        .missions
        .iter()
        .map(|mission| {
            let Some(info) = assets.missions.get(&mission.id) else {
                return ContractEntry::Unknown(mission.id.clone());
            };
            match MissionRow::build(info, Some(mission), Some(assets)) {
                Ok(row) => ContractEntry::Mission(row),
                Err(err) => {
                    tracing::warn!(mission = %mission.id, error = %err, "skipping corrupt mission");
                    ContractEntry::Corrupt(err)
                }
            }
        })
        .collect()
}
