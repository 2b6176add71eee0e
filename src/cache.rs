use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::api::models::MatchDto;
use crate::error::AppError;

/// Fixed working-directory file holding the downloaded match details.
/// Overwritten on every run; not cleaned up on failure.
pub const MATCH_FILE: &str = "match_data.json";

#[derive(Debug, Deserialize)]
struct MatchFile {
    #[allow(dead_code)]
    fetched_at: DateTime<Utc>,
    // Entries deserialize to None when the stored record is JSON null.
    matches: Vec<Option<MatchDto>>,
}

/// Streams match records to disk one at a time, so the full history never
/// has to sit in memory alongside the fetch loop.
pub struct MatchFileWriter {
    out: BufWriter<File>,
    count: usize,
}

impl MatchFileWriter {
    pub fn create(path: &Path) -> Result<Self, AppError> {
        let file = File::create(path).map_err(|e| AppError::Io(e.to_string()))?;
        let mut out = BufWriter::new(file);
        let stamp = serde_json::to_string(&Utc::now()).map_err(|e| AppError::Json(e.to_string()))?;
        write!(out, "{{\"fetched_at\":{},\"matches\":[", stamp)
            .map_err(|e| AppError::Io(e.to_string()))?;
        Ok(MatchFileWriter { out, count: 0 })
    }

    pub fn push(&mut self, record: &serde_json::Value) -> Result<(), AppError> {
        if self.count > 0 {
            self.out
                .write_all(b",")
                .map_err(|e| AppError::Io(e.to_string()))?;
        }
        serde_json::to_writer(&mut self.out, record).map_err(|e| AppError::Json(e.to_string()))?;
        self.count += 1;
        Ok(())
    }

    pub fn finish(mut self) -> Result<usize, AppError> {
        self.out
            .write_all(b"]}")
            .map_err(|e| AppError::Io(e.to_string()))?;
        self.out.flush().map_err(|e| AppError::Io(e.to_string()))?;
        Ok(self.count)
    }
}

/// Re-read the match file and reject it if any entry is null. The fetch
/// loop fails loudly on its own, so this is a final integrity check on
/// what actually landed on disk.
pub fn read_matches(path: &Path) -> Result<Vec<MatchDto>, AppError> {
    let file = File::open(path).map_err(|e| AppError::Io(e.to_string()))?;
    let parsed: MatchFile =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| AppError::Json(e.to_string()))?;

    let mut matches = Vec::with_capacity(parsed.matches.len());
    for (index, record) in parsed.matches.into_iter().enumerate() {
        match record {
            Some(record) => matches.push(record),
            None => return Err(AppError::DataIntegrity { index }),
        }
    }
    Ok(matches)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::path::PathBuf;

    fn scratch_file(tag: &str) -> PathBuf {
        std::env::temp_dir().join(format!("summoner_stats_{}_{}.json", tag, std::process::id()))
    }

    fn sample_match(game_id: i64) -> serde_json::Value {
        json!({
            "gameId": game_id,
            "participantIdentities": [],
            "participants": [],
        })
    }

    #[test]
    fn written_matches_round_trip() {
        let path = scratch_file("roundtrip");
        let mut writer = MatchFileWriter::create(&path).unwrap();
        writer.push(&sample_match(101)).unwrap();
        writer.push(&sample_match(102)).unwrap();
        assert_eq!(writer.finish().unwrap(), 2);

        let matches = read_matches(&path).unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].game_id, 101);
        assert_eq!(matches[1].game_id, 102);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn null_entries_fail_naming_their_index() {
        let path = scratch_file("null_entry");
        let mut writer = MatchFileWriter::create(&path).unwrap();
        writer.push(&sample_match(101)).unwrap();
        writer.push(&serde_json::Value::Null).unwrap();
        writer.push(&sample_match(103)).unwrap();
        writer.finish().unwrap();

        match read_matches(&path) {
            Err(AppError::DataIntegrity { index }) => assert_eq!(index, 1),
            other => panic!("expected DataIntegrity, got {:?}", other),
        }

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn empty_history_round_trips() {
        let path = scratch_file("empty");
        let writer = MatchFileWriter::create(&path).unwrap();
        assert_eq!(writer.finish().unwrap(), 0);
        assert!(read_matches(&path).unwrap().is_empty());

        let _ = std::fs::remove_file(&path);
    }
}
