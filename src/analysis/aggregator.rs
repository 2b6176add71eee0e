use std::collections::HashMap;

use super::parser::ParsedMatch;
use super::ChampionId;

/// Cumulative counters for one champion across the analyzed history.
/// `wins_*` can never exceed its corresponding total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChampionStatRow {
    pub id: ChampionId,
    pub played_as: u32,
    pub same_team: u32,
    pub other_team: u32,
    pub wins_as: u32,
    pub wins_with: u32,
    pub wins_against: u32,
}

impl ChampionStatRow {
    fn new(id: ChampionId) -> Self {
        ChampionStatRow {
            id,
            ..Default::default()
        }
    }
}

/// Fold the parsed history into per-champion counters. Rows are created
/// all-zero on a champion's first appearance, then only ever incremented.
pub fn aggregate(matches: &[ParsedMatch]) -> HashMap<ChampionId, ChampionStatRow> {
    let mut stats: HashMap<ChampionId, ChampionStatRow> = HashMap::new();

    for game in matches {
        let row = stats
            .entry(game.champion)
            .or_insert_with(|| ChampionStatRow::new(game.champion));
        row.played_as += 1;
        if game.won {
            row.wins_as += 1;
        }

        for &champion in &game.teammates {
            let row = stats
                .entry(champion)
                .or_insert_with(|| ChampionStatRow::new(champion));
            row.same_team += 1;
            if game.won {
                row.wins_with += 1;
            }
        }

        for &champion in &game.opponents {
            let row = stats
                .entry(champion)
                .or_insert_with(|| ChampionStatRow::new(champion));
            row.other_team += 1;
            if game.won {
                row.wins_against += 1;
            }
        }
    }

    stats
}
