mod analysis;
mod api;
mod cache;
mod config;
mod display;
mod error;
mod input;
mod static_data;

use std::path::Path;

use analysis::{aggregator, mastery, parser, ranker};
use api::client::ApiClient;
use api::models::MatchReferenceDto;
use clap::Parser;
use config::Config;
use display::output::{
    display_error, display_info, display_mastery_crossref, display_profile, display_ranked_list,
    display_success, display_summary,
};
use error::AppError;
use indicatif::ProgressBar;
use static_data::StaticData;

const SEASON: u32 = 13;
const QUEUE: u32 = 400;
const MATCH_CAP: usize = 100;

#[derive(Parser, Debug)]
#[command(name = "Summoner Stats")]
#[command(about = "Aggregate a summoner's win/loss statistics by champion", long_about = None)]
struct Args {
    /// Summoner name (prompted interactively when omitted)
    summoner: Option<String>,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let config = Config::from_env()?;
    let client = ApiClient::new(config.clone());

    // Fail before prompting; nothing else works without the service.
    if !client.check_connection() {
        return Err(AppError::Connectivity);
    }

    let name = input::acquire_name(args.summoner)?;

    display_info("Loading static champion data...");
    let static_data = StaticData::fetch(&config.static_base)?;
    display_success(&format!("Data set version {}", static_data.version));

    display_info(&format!("Looking up summoner {}...", name));
    let summoner = client.get_summoner_by_name(&name)?;
    display_profile(
        &summoner.name,
        &static_data.profile_icon_url(summoner.profile_icon_id),
    );

    display_info("Fetching match history...");
    let matchlist = client.get_matchlist(&summoner.account_id, SEASON, QUEUE)?;
    if matchlist.matches.is_empty() {
        return Err(AppError::NoMatches);
    }
    let fetched = compile_match_file(&client, &matchlist.matches, Path::new(cache::MATCH_FILE))?;
    display_success(&format!("Stats updated ({} matches).", fetched));

    display_info("Fetching champion mastery...");
    let mastery_entries = client.get_champion_masteries(&summoner.id)?;
    let mastery = mastery::top_masteries(&mastery_entries, mastery::TOP_MASTERIES);

    let matches = cache::read_matches(Path::new(cache::MATCH_FILE))?;
    let parsed = parser::parse_matches(&matches, &summoner.name)?;
    display_summary(&parsed);

    let stats = aggregator::aggregate(&parsed);
    for metric in ranker::ALL_METRICS {
        let ranked = ranker::rank(&stats, metric);
        display_ranked_list(metric, &ranked, &static_data);
    }

    let mastery_view = ranker::rank_by_mastery(&stats, &mastery);
    display_mastery_crossref(&mastery_view, &mastery, &static_data);

    Ok(())
}

/// Download full detail for up to MATCH_CAP matches, streaming each record
/// to the intermediate file as it arrives.
fn compile_match_file(
    client: &ApiClient,
    references: &[MatchReferenceDto],
    path: &Path,
) -> Result<usize, AppError> {
    let references = &references[..references.len().min(MATCH_CAP)];

    let mut writer = cache::MatchFileWriter::create(path)?;
    let pb = ProgressBar::new(references.len() as u64);
    pb.set_message("Updating stats");

    for reference in references {
        let record = client.get_match(reference.game_id)?;
        writer.push(&record)?;
        pb.inc(1);
    }

    let count = writer.finish()?;
    pb.finish_with_message("Stats updated");
    Ok(count)
}
