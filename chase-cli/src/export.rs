use anyhow::{Context, Result};
use chase_core::RoundSnapshot;
use chase_shared::{AliveCount, RoundRecord, ALIVE_SUMMARY_HEADER};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const POSITIONS_FILE: &str = "pos.json";
pub const ALIVE_FILE: &str = "alive.csv";

pub fn to_record(snapshot: &RoundSnapshot) -> RoundRecord {
    RoundRecord::new(
        snapshot.round_no,
        snapshot.wolf_pos.to_array(),
        snapshot
            .sheep_pos
            .iter()
            .map(|pos| pos.map(|p| p.to_array()))
            .collect(),
    )
}

pub fn to_records(snapshots: &[RoundSnapshot]) -> Vec<RoundRecord> {
    snapshots.iter().map(to_record).collect()
}

/// Writes the records as a JSON array indented by four spaces
pub fn export_json(records: &[RoundRecord], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
    records
        .serialize(&mut serializer)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    writer.flush()?;
    log::debug!("exported {} rounds to {}", records.len(), path.display());
    Ok(())
}

/// Writes the `(round number, alive sheep)` table with a header row
pub fn export_csv(rows: &[AliveCount], path: &Path) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    writeln!(writer, "{}", ALIVE_SUMMARY_HEADER.join(","))?;
    for row in rows {
        writeln!(writer, "{},{}", row.round_no, row.alive_sheep)?;
    }
    writer.flush()?;
    log::debug!("exported {} summary rows to {}", rows.len(), path.display());
    Ok(())
}
