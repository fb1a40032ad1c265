//! CSV ingestion with the lenient coercion policy: numeric cells that fail to
//! parse become 0 and are counted, never fatal. Structural problems (missing
//! required columns) are real errors.

use crate::error::{Error, Result};
use crate::record::Record;
use serde::Serialize;
use std::io::Read;
use std::path::Path;

/// Data-quality summary for one ingestion pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Records produced.
    pub rows: usize,
    /// Numeric cells that were empty or unparseable and coerced to 0.
    pub coerced: usize,
}

struct Columns {
    overall_pick: usize,
    year: usize,
    player: usize,
    nationality: usize,
    position: usize,
    goals: usize,
    assists: usize,
    points: usize,
    games_played: usize,
}

impl Columns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |column: &'static str| -> Result<usize> {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(column))
                .ok_or(Error::MissingColumn { column })
        };
        Ok(Self {
            overall_pick: find("overall_pick")?,
            year: find("year")?,
            player: find("player")?,
            nationality: find("nationality")?,
            position: find("position")?,
            goals: find("goals")?,
            assists: find("assists")?,
            points: find("points")?,
            games_played: find("games_played")?,
        })
    }
}

/// Reads records from CSV text. Column order is free; columns are located by
/// header name (case-insensitive). Returns records in file order.
pub fn read_records_sync<R: Read>(reader: R) -> Result<(Vec<Record>, IngestReport)> {
    let mut csv = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
    let columns = Columns::from_headers(csv.headers()?)?;

    let mut records = Vec::new();
    let mut coerced = 0usize;
    for (row, line) in csv.records().enumerate() {
        let line = line?;
        let cell = |idx: usize| line.get(idx).unwrap_or("").trim();
        records.push(Record {
            overall_pick: coerce_u32(cell(columns.overall_pick), row, "overall_pick", &mut coerced),
            year: coerce_i32(cell(columns.year), row, "year", &mut coerced),
            player: cell(columns.player).to_string(),
            nationality: cell(columns.nationality).to_string(),
            position: cell(columns.position).to_string(),
            goals: coerce_u32(cell(columns.goals), row, "goals", &mut coerced),
            assists: coerce_u32(cell(columns.assists), row, "assists", &mut coerced),
            points: coerce_u32(cell(columns.points), row, "points", &mut coerced),
            games_played: coerce_u32(cell(columns.games_played), row, "games_played", &mut coerced),
        });
    }

    let report = IngestReport {
        rows: records.len(),
        coerced,
    };
    tracing::debug!(rows = report.rows, coerced = report.coerced, "ingested records");
    Ok((records, report))
}

pub async fn read_records<R: Read>(reader: R) -> Result<(Vec<Record>, IngestReport)> {
    read_records_sync(reader)
}

pub fn read_records_path_sync<P: AsRef<Path>>(path: P) -> Result<(Vec<Record>, IngestReport)> {
    let file = std::fs::File::open(path.as_ref()).map_err(csv::Error::from)?;
    read_records_sync(std::io::BufReader::new(file))
}

pub async fn read_records_path<P: AsRef<Path>>(path: P) -> Result<(Vec<Record>, IngestReport)> {
    read_records_path_sync(path)
}

fn coerce_u32(raw: &str, row: usize, column: &'static str, coerced: &mut usize) -> u32 {
    match parse_int::<u32>(raw) {
        Some(v) => v,
        None => {
            note_coercion(raw, row, column, coerced);
            0
        }
    }
}

fn coerce_i32(raw: &str, row: usize, column: &'static str, coerced: &mut usize) -> i32 {
    match parse_int::<i32>(raw) {
        Some(v) => v,
        None => {
            note_coercion(raw, row, column, coerced);
            0
        }
    }
}

fn parse_int<T: std::str::FromStr>(raw: &str) -> Option<T> {
    if raw.is_empty() {
        return None;
    }
    raw.parse::<T>().ok()
}

fn note_coercion(raw: &str, row: usize, column: &'static str, coerced: &mut usize) {
    *coerced += 1;
    // Empty stat cells are routine (skaters who never played a game); only
    // junk text is worth a warning.
    if !raw.is_empty() {
        tracing::warn!(row, column, raw, "non-numeric field coerced to 0");
    }
}
