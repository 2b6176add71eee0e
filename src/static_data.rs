use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::time::Duration;

use crate::analysis::ChampionId;
use crate::api::endpoints;
use crate::api::models::{ChampionListDto, RealmDto};
use crate::error::AppError;

/// Current data-set version and the champion id→name table, fetched once
/// per run from the public static-asset service. No API key involved.
pub struct StaticData {
    base: String,
    pub version: String,
    champion_names: HashMap<ChampionId, String>,
}

impl StaticData {
    pub fn fetch(static_base: &str) -> Result<Self, AppError> {
        let realm: RealmDto = get_json(&format!("{}/{}", static_base, endpoints::REALM))?;
        let champions: ChampionListDto = get_json(&format!(
            "{}/cdn/{}/data/en_US/champion.json",
            static_base, realm.v
        ))?;
        Ok(Self::from_parts(static_base, realm.v, champions))
    }

    pub fn from_parts(base: &str, version: String, champions: ChampionListDto) -> Self {
        let mut champion_names = HashMap::new();
        for champion in champions.data.into_values() {
            if let Ok(id) = champion.key.parse::<ChampionId>() {
                champion_names.insert(id, champion.name);
            }
        }
        StaticData {
            base: base.to_string(),
            version,
            champion_names,
        }
    }

    /// Resolve a champion id to its display name. Falls back to the raw id
    /// when the match history references a champion the current data set
    /// does not know about.
    pub fn champion_name(&self, id: ChampionId) -> String {
        self.champion_names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }

    pub fn profile_icon_url(&self, icon_id: i32) -> String {
        format!(
            "{}/cdn/{}/img/profileicon/{}.png",
            self.base, self.version, icon_id
        )
    }
}

fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, AppError> {
    let body = ureq::get(url)
        .timeout(Duration::from_secs(30))
        .call()
        .map_err(|e| match e {
            ureq::Error::Status(status, _) => AppError::Http {
                status,
                path: url.to_string(),
            },
            ureq::Error::Transport(_) => AppError::Connectivity,
        })?
        .into_string()
        .map_err(|e| AppError::Io(e.to_string()))?;
    serde_json::from_str(&body).map_err(|e| AppError::Json(e.to_string()))
}
