use crate::api::models::ChampionMasteryDto;

use super::ChampionId;

pub const TOP_MASTERIES: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MasteryEntry {
    pub champion: ChampionId,
    pub points: i64,
}

/// Keep the `count` highest-mastery champions, descending by points with
/// ties broken by champion id. An empty mastery list is not an error.
pub fn top_masteries(entries: &[ChampionMasteryDto], count: usize) -> Vec<MasteryEntry> {
    let mut ranked: Vec<MasteryEntry> = entries
        .iter()
        .map(|entry| MasteryEntry {
            champion: entry.champion_id,
            points: entry.champion_points,
        })
        .collect();
    ranked.sort_by(|a, b| b.points.cmp(&a.points).then(a.champion.cmp(&b.champion)));
    ranked.truncate(count);
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(champion_id: i32, champion_points: i64) -> ChampionMasteryDto {
        ChampionMasteryDto {
            champion_id,
            champion_points,
        }
    }

    #[test]
    fn keeps_the_top_five_by_points() {
        let entries = vec![
            entry(1, 100),
            entry(2, 700),
            entry(3, 300),
            entry(4, 900),
            entry(5, 500),
            entry(6, 200),
            entry(7, 800),
        ];
        let top = top_masteries(&entries, TOP_MASTERIES);

        let champions: Vec<i32> = top.iter().map(|m| m.champion).collect();
        assert_eq!(champions, vec![4, 7, 2, 5, 3]);
    }

    #[test]
    fn short_and_empty_lists_pass_through() {
        assert!(top_masteries(&[], TOP_MASTERIES).is_empty());

        let top = top_masteries(&[entry(9, 10)], TOP_MASTERIES);
        assert_eq!(top.len(), 1);
        assert_eq!(top[0], MasteryEntry { champion: 9, points: 10 });
    }

    #[test]
    fn equal_points_order_by_champion_id() {
        let top = top_masteries(&[entry(5, 100), entry(2, 100), entry(8, 100)], TOP_MASTERIES);
        let champions: Vec<i32> = top.iter().map(|m| m.champion).collect();
        assert_eq!(champions, vec![2, 5, 8]);
    }
}
