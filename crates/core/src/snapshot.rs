use serde::{Deserialize, Serialize};

/// Progression state that survives a save/restore cycle.
///
/// Everything else (mode, seed, difficulty, grids) is rebuilt from the original
/// constructor arguments, which the host keeps on its side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressSnapshot {
    pub current_index: usize,
    pub row_offset: u8,
}

impl ProgressSnapshot {
    pub fn new(current_index: usize, row_offset: u8) -> Self {
        Self {
            current_index,
            row_offset,
        }
    }
}
