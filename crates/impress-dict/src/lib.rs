//! Dictionary index generation for e-readers
//!
//! This crate turns a dictionary entry set into a Mobipocket/Kindle index
//! source document.
//!
//! Features:
//! - Orthography deduplication by rank (`prune`)
//! - Inflection group cleanup
//! - XHTML index writer with `idx:` lookup markup
//! - JSON entry loading
//! - TOML/JSON configuration

pub mod config;
mod entry;
pub mod error;
pub mod loader;
mod prune;
pub mod report;
mod writer;

pub use config::{DictConfig, PruneConfig, WriterConfig};
pub use entry::{Entry, InflectionGroups, Ortho, Sense};
pub use error::{DictError, Result};
pub use loader::{load_entries, load_entries_from_path};
pub use prune::{prune, prune_with_config};
pub use report::{Diagnostic, RecordingReporter, Reporter, StreamReporter, TracingReporter};
pub use writer::{format_index, write_index, write_index_with_config};
