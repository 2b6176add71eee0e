use colored::*;
use std::collections::HashMap;
use tabled::{settings::Style, Table, Tabled};

use crate::analysis::aggregator::ChampionStatRow;
use crate::analysis::mastery::MasteryEntry;
use crate::analysis::parser::ParsedMatch;
use crate::analysis::ranker::Metric;
use crate::static_data::StaticData;

#[derive(Tabled)]
struct ChampionRow {
    rank: String,
    champion: String,
    games: String,
    wins: String,
}

#[derive(Tabled)]
struct MasteryRow {
    champion: String,
    mastery: String,
    faced: String,
    #[tabled(rename = "wins against")]
    wins_against: String,
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}

pub fn display_info(message: &str) {
    println!("{} {}", "·".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_profile(name: &str, icon_url: &str) {
    println!("\n{}", format!("Summoner: {}", name).bold().cyan());
    println!("Profile icon: {}\n", icon_url);
}

/// Overall record across the parsed history.
pub fn display_summary(matches: &[ParsedMatch]) {
    let total = matches.len();
    let wins = matches.iter().filter(|m| m.won).count();
    let losses = total - wins;
    let win_rate = if total == 0 {
        0.0
    } else {
        (wins as f64 / total as f64) * 100.0
    };

    println!(
        "\n{} {} W / {} L over {} games ({:.1}% WR)",
        "Record:".bold(),
        wins.to_string().green(),
        losses.to_string().red(),
        total,
        win_rate
    );
}

pub fn display_ranked_list(
    metric: Metric,
    rows: &[ChampionStatRow],
    static_data: &StaticData,
) {
    println!("\n{}", metric.label().bold().cyan());

    if rows.is_empty() {
        println!("{}", "No champions qualified (not enough games)".yellow());
        return;
    }

    let table_rows: Vec<ChampionRow> = rows
        .iter()
        .enumerate()
        .map(|(idx, row)| ChampionRow {
            rank: format!("#{}", idx + 1),
            champion: static_data.champion_name(row.id),
            games: format!("{} games", metric.games(row)),
            wins: format!("{} wins", metric.wins(row)),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    println!("{}", table);
}

/// The player's highest-mastery champions, cross-referenced against how
/// often they were faced and beaten in the analyzed history.
pub fn display_mastery_crossref(
    rows: &[ChampionStatRow],
    mastery: &[MasteryEntry],
    static_data: &StaticData,
) {
    println!("\n{}", "Highest mastery, by wins against".bold().cyan());

    if rows.is_empty() {
        println!(
            "{}",
            "None of the top mastery champions appeared in the analyzed games".yellow()
        );
        return;
    }

    let points: HashMap<_, _> = mastery
        .iter()
        .map(|entry| (entry.champion, entry.points))
        .collect();

    let table_rows: Vec<MasteryRow> = rows
        .iter()
        .map(|row| MasteryRow {
            champion: static_data.champion_name(row.id),
            mastery: points
                .get(&row.id)
                .map(|p| p.to_string())
                .unwrap_or_default(),
            faced: format!("{} games", row.other_team),
            wins_against: format!("{} wins", row.wins_against),
        })
        .collect();

    let mut table = Table::new(table_rows);
    table.with(Style::rounded());
    println!("{}", table);
}
