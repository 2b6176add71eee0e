use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Connection error: the game data service did not respond")]
    Connectivity,

    #[error("HTTP error {status} for {path}")]
    Http { status: u16, path: String },

    #[error("Rate limit exceeded, gave up after retrying")]
    RateLimited,

    #[error("Player not found: {0}")]
    PlayerNotFound(String),

    #[error("Match {index} in the downloaded history is missing or null")]
    DataIntegrity { index: usize },

    #[error("Player is not listed among the participants of game {game_id}")]
    PlayerNotInMatch { game_id: i64 },

    #[error("No matches found for this player in the selected season and queue")]
    NoMatches,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON parsing error: {0}")]
    Json(String),

    #[error("I/O error: {0}")]
    Io(String),
}
