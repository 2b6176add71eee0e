use std::collections::HashMap;

use super::aggregator::ChampionStatRow;
use super::mastery::MasteryEntry;
use super::ChampionId;

const TOP_N: usize = 5;
const MIN_GAMES: u32 = 5;

/// The six ranked views over the aggregated table. The wins-family sorts
/// descending, the losses-family ascending over the same win counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    WinsAs,
    WinsWith,
    WinsAgainst,
    LossesAs,
    LossesWith,
    LossesAgainst,
}

pub const ALL_METRICS: [Metric; 6] = [
    Metric::WinsAs,
    Metric::WinsWith,
    Metric::WinsAgainst,
    Metric::LossesAs,
    Metric::LossesWith,
    Metric::LossesAgainst,
];

impl Metric {
    pub fn label(self) -> &'static str {
        match self {
            Metric::WinsAs => "Most frequently played as",
            Metric::WinsWith => "Most frequently played with",
            Metric::WinsAgainst => "Most frequently played against",
            Metric::LossesAs => "Least frequently played as",
            Metric::LossesWith => "Least frequently played with",
            Metric::LossesAgainst => "Least frequently played against",
        }
    }

    /// The games counter this metric thresholds and reports on.
    pub fn games(self, row: &ChampionStatRow) -> u32 {
        match self {
            Metric::WinsAs | Metric::LossesAs => row.played_as,
            Metric::WinsWith | Metric::LossesWith => row.same_team,
            Metric::WinsAgainst | Metric::LossesAgainst => row.other_team,
        }
    }

    /// The win counter this metric sorts by.
    pub fn wins(self, row: &ChampionStatRow) -> u32 {
        match self {
            Metric::WinsAs | Metric::LossesAs => row.wins_as,
            Metric::WinsWith | Metric::LossesWith => row.wins_with,
            Metric::WinsAgainst | Metric::LossesAgainst => row.wins_against,
        }
    }

    // WinsAs admits single-game champions; every other view requires a
    // track record of MIN_GAMES before it says anything about a champion.
    fn min_games(self) -> u32 {
        match self {
            Metric::WinsAs => 1,
            _ => MIN_GAMES,
        }
    }

    fn descending(self) -> bool {
        matches!(self, Metric::WinsAs | Metric::WinsWith | Metric::WinsAgainst)
    }
}

/// Top five rows for the given metric. Rows below the metric's minimum
/// game count are dropped before sorting; ties break by champion id so
/// the output is deterministic.
pub fn rank(stats: &HashMap<ChampionId, ChampionStatRow>, metric: Metric) -> Vec<ChampionStatRow> {
    let mut qualified: Vec<ChampionStatRow> = stats
        .values()
        .filter(|row| metric.games(row) >= metric.min_games())
        .cloned()
        .collect();

    qualified.sort_by(|a, b| {
        let by_wins = metric.wins(a).cmp(&metric.wins(b));
        let by_wins = if metric.descending() {
            by_wins.reverse()
        } else {
            by_wins
        };
        by_wins.then(a.id.cmp(&b.id))
    });
    qualified.truncate(TOP_N);
    qualified
}

/// Restrict the table to the player's mastery-ranked champions, ordered by
/// how often the player beat them. Deliberately uncapped: the mastery list
/// is already at most five entries.
pub fn rank_by_mastery(
    stats: &HashMap<ChampionId, ChampionStatRow>,
    mastery: &[MasteryEntry],
) -> Vec<ChampionStatRow> {
    let mut picked: Vec<ChampionStatRow> = mastery
        .iter()
        .filter_map(|entry| stats.get(&entry.champion).cloned())
        .collect();
    picked.sort_by(|a, b| b.wins_against.cmp(&a.wins_against).then(a.id.cmp(&b.id)));
    picked
}
