use crate::error::AppError;
use std::env;

/// Development key shipped with the tool; `RIOT_API_KEY` overrides it.
const DEFAULT_API_KEY: &str = "RGAPI-fa695a0d-056b-48fd-8546-e05e28120a29";

const API_BASE: &str = "https://na1.api.riotgames.com/lol/";
const STATIC_BASE: &str = "https://ddragon.leagueoflegends.com";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub api_base: String,
    pub static_base: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_key =
            env::var("RIOT_API_KEY").unwrap_or_else(|_| DEFAULT_API_KEY.to_string());
        if api_key.trim().is_empty() {
            return Err(AppError::Config(
                "RIOT_API_KEY is set but empty".to_string(),
            ));
        }

        Ok(Config {
            api_key,
            api_base: API_BASE.to_string(),
            static_base: STATIC_BASE.to_string(),
        })
    }
}
