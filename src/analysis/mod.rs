pub mod aggregator;
pub mod mastery;
pub mod parser;
pub mod ranker;

/// Opaque numeric champion identifier, stable per data-set version.
pub type ChampionId = i32;
