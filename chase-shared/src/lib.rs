use serde::{Deserialize, Serialize};

/// Header row of the alive sheep summary table
pub const ALIVE_SUMMARY_HEADER: [&str; 2] = ["Round number", "Alive sheep"];

/// A position as exported, `[x, y]`
pub type Coordinates = [f64; 2];

/// One exported round of a chase simulation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoundRecord {
    pub round_no: u32,
    pub wolf_pos: Coordinates,
    /// Indexed by roster order; `None` (serialized as `null`) for eaten sheep
    pub sheep_pos: Vec<Option<Coordinates>>,
}

impl RoundRecord {
    pub fn new(round_no: u32, wolf_pos: Coordinates, sheep_pos: Vec<Option<Coordinates>>) -> Self {
        Self {
            round_no,
            wolf_pos,
            sheep_pos,
        }
    }

    /// Number of sheep still alive at the end of this round
    pub fn alive_sheep(&self) -> usize {
        self.sheep_pos.iter().filter(|pos| pos.is_some()).count()
    }
}

/// One row of the derived `(round_no, alive_sheep_count)` table
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AliveCount {
    pub round_no: u32,
    pub alive_sheep: usize,
}

impl From<&RoundRecord> for AliveCount {
    fn from(record: &RoundRecord) -> Self {
        Self {
            round_no: record.round_no,
            alive_sheep: record.alive_sheep(),
        }
    }
}

/// Derives the alive sheep summary, one row per exported round
pub fn alive_counts(records: &[RoundRecord]) -> Vec<AliveCount> {
    records.iter().map(AliveCount::from).collect()
}
