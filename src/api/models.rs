use serde::Deserialize;
use std::collections::HashMap;

// Summoner V4 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerDto {
    pub id: String,
    pub account_id: String,
    pub name: String,
    pub profile_icon_id: i32,
}

// Match V4 matchlist response
#[derive(Debug, Deserialize)]
pub struct MatchlistDto {
    pub matches: Vec<MatchReferenceDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchReferenceDto {
    pub game_id: i64,
}

// Match V4 match response. Only the fields the parser consumes are
// modeled; the cache file keeps the full record as raw JSON.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDto {
    #[serde(default)]
    pub game_id: i64,
    pub participant_identities: Vec<ParticipantIdentityDto>,
    pub participants: Vec<ParticipantDto>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantIdentityDto {
    pub participant_id: i32,
    pub player: PlayerDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub summoner_name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub participant_id: i32,
    pub team_id: i32,
    pub champion_id: i32,
    pub stats: ParticipantStatsDto,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantStatsDto {
    pub win: bool,
}

// Champion Mastery V4 response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMasteryDto {
    pub champion_id: i32,
    pub champion_points: i64,
}

// Data Dragon realm descriptor
#[derive(Debug, Deserialize)]
pub struct RealmDto {
    pub v: String,
}

// Data Dragon champion table
#[derive(Debug, Deserialize)]
pub struct ChampionListDto {
    pub data: HashMap<String, ChampionDto>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ChampionDto {
    /// Numeric champion id, serialized as a string in the static data.
    pub key: String,
    pub name: String,
}
