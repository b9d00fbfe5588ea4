//! JSONL frame replay source
//!
//! Reads serialized per-frame detector output: one JSON object per line,
//! each holding the detected hands as `21 x [x, y, z]` landmark arrays.
//! An empty `hands` array (or a missing field) is a hand-absent frame.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::pose::{Hand, Landmark};

/// One serialized frame of detector output
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameRecord {
    #[serde(default)]
    pub hands: Vec<Vec<[f32; 3]>>,
}

impl FrameRecord {
    /// Convert to pipeline hands, enforcing 21 landmarks per hand
    pub fn to_hands(&self) -> crate::Result<Vec<Hand>> {
        self.hands
            .iter()
            .map(|points| {
                let landmarks: Vec<Landmark> = points
                    .iter()
                    .map(|[x, y, z]| Landmark::new(*x, *y, *z))
                    .collect();
                Hand::from_landmarks(&landmarks)
            })
            .collect()
    }
}

/// Streaming reader over a JSONL frame file.
///
/// Yields one `Vec<Hand>` per line; blank lines are skipped. Malformed lines
/// are reported with their line number and stop the replay.
pub struct FrameSource {
    lines: Lines<BufReader<File>>,
    line_no: usize,
    path: String,
}

impl FrameSource {
    pub fn open(path: &Path) -> crate::Result<Self> {
        let file = File::open(path).map_err(|e| {
            crate::Error::FrameSource(format!("cannot open {}: {}", path.display(), e))
        })?;
        Ok(Self {
            lines: BufReader::new(file).lines(),
            line_no: 0,
            path: path.display().to_string(),
        })
    }
}

impl Iterator for FrameSource {
    type Item = crate::Result<Vec<Hand>>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.line_no += 1;
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            if line.trim().is_empty() {
                continue;
            }

            let record: FrameRecord = match serde_json::from_str(&line) {
                Ok(record) => record,
                Err(e) => {
                    return Some(Err(crate::Error::FrameSource(format!(
                        "{}:{}: {}",
                        self.path, self.line_no, e
                    ))))
                }
            };
            return Some(record.to_hands());
        }
    }
}
