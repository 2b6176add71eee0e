use crate::api::models::MatchDto;
use crate::error::AppError;

use super::ChampionId;

/// One match reduced to the target player's point of view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMatch {
    pub won: bool,
    pub champion: ChampionId,
    /// Champions on the player's team, excluding the player. At most 4.
    pub teammates: Vec<ChampionId>,
    /// Champions on the opposing team. 5 in a full match.
    pub opponents: Vec<ChampionId>,
}

/// Extract the player's win flag and champion, and split the remaining
/// participants into teammates and opponents by team id.
///
/// The name comparison is exact and case-sensitive; a player renamed since
/// the match was recorded will not be found.
pub fn parse_match(game: &MatchDto, summoner_name: &str) -> Result<ParsedMatch, AppError> {
    let identity = game
        .participant_identities
        .iter()
        .find(|entry| entry.player.summoner_name == summoner_name)
        .ok_or(AppError::PlayerNotInMatch {
            game_id: game.game_id,
        })?;

    let player = game
        .participants
        .iter()
        .find(|p| p.participant_id == identity.participant_id)
        .ok_or(AppError::PlayerNotInMatch {
            game_id: game.game_id,
        })?;

    let mut teammates = Vec::new();
    let mut opponents = Vec::new();
    for participant in &game.participants {
        if participant.participant_id == player.participant_id {
            continue;
        }
        if participant.team_id == player.team_id {
            teammates.push(participant.champion_id);
        } else {
            opponents.push(participant.champion_id);
        }
    }

    Ok(ParsedMatch {
        won: player.stats.win,
        champion: player.champion_id,
        teammates,
        opponents,
    })
}

/// Parse the whole cached history, preserving its order.
pub fn parse_matches(games: &[MatchDto], summoner_name: &str) -> Result<Vec<ParsedMatch>, AppError> {
    games
        .iter()
        .map(|game| parse_match(game, summoner_name))
        .collect()
}
