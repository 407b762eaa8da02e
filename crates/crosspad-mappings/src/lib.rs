//! Parser for line-oriented controller mapping records.
//!
//! One record per line: `guid,display name,field:code,field:code,...`.
//! The first field is the device's stable identifier, the second its display
//! name, and the rest map logical control names (`a`, `leftshoulder`,
//! `leftx`, `dpup`, ...) to platform codes (`b0`, `a3`, `h0.1`, ...). The
//! same shape is produced by SDL's `GameController::mapping()` and by the
//! embedded controller-database assets some backends ship.
//!
//! Malformed `field:code` pairs are skipped, never fatal: a capability query
//! must survive a partially unparseable record.

mod record;

pub use record::{MappingError, MappingRecord};

use ahash::AHashMap;

/// A set of mapping records indexed by device guid.
#[derive(Debug, Default)]
pub struct MappingDb {
    records: AHashMap<String, MappingRecord>,
}

impl MappingDb {
    /// Parse a multi-line database. `#` comments, blank lines and lines too
    /// malformed to carry a guid are skipped.
    pub fn parse(input: &str) -> Self {
        let mut records = AHashMap::new();
        for line in input.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            match MappingRecord::parse(line) {
                Ok(record) => {
                    records.insert(record.guid.clone(), record);
                }
                Err(e) => {
                    log::debug!("skipping mapping line: {e}");
                }
            }
        }
        Self { records }
    }

    pub fn get(&self, guid: &str) -> Option<&MappingRecord> {
        self.records.get(guid)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
