//! JSON entry loading
//!
//! Reads a JSON array of entries:
//!
//! ```json
//! [
//!   {
//!     "label": "cat",
//!     "senses": [{"pos": ["n"], "gloss": ["feline"]}],
//!     "orthos": [{"value": "cat", "rank": 0, "inflgrps": {"pl": ["cats"]}}]
//!   }
//! ]
//! ```
//!
//! `pos` and `inflgrps` may be omitted.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::entry::Entry;
use crate::error::{DictError, Result};

/// Parse and validate entries from a reader
pub fn load_entries<R: Read>(reader: R) -> Result<Vec<Entry>> {
    let entries: Vec<Entry> = serde_json::from_reader(reader)?;
    for (index, entry) in entries.iter().enumerate() {
        entry
            .validate()
            .map_err(|reason| DictError::InvalidEntry {
                index,
                label: entry.label.clone(),
                reason,
            })?;
    }
    tracing::debug!("Loaded {} entries", entries.len());
    Ok(entries)
}

/// Parse and validate entries from a JSON file
pub fn load_entries_from_path(path: impl AsRef<Path>) -> Result<Vec<Entry>> {
    let file = File::open(path)?;
    load_entries(BufReader::new(file))
}
