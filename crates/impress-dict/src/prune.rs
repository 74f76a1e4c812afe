//! Orthography conflict resolution
//!
//! Entries may claim the same written form. Each form is kept by exactly one
//! entry: the claim with the lowest rank wins, the first claim wins ties.
//! Entries left without orthographies are dropped.

use std::collections::HashMap;

use crate::config::PruneConfig;
use crate::entry::Entry;
use crate::report::{Diagnostic, Reporter};

/// Current winning claim on an orthography value
#[derive(Debug, Clone, Copy)]
struct Claim {
    /// Index of the owning entry
    entry: usize,
    rank: u32,
}

/// Resolve orthography collisions with the default [`PruneConfig`].
pub fn prune<R: Reporter + ?Sized>(entries: Vec<Entry>, reporter: &mut R) -> Vec<Entry> {
    prune_with_config(entries, &PruneConfig::default(), reporter)
}

/// Resolve orthography collisions across `entries`.
///
/// Output order follows input order minus the dropped entries.
pub fn prune_with_config<R: Reporter + ?Sized>(
    mut entries: Vec<Entry>,
    config: &PruneConfig,
    reporter: &mut R,
) -> Vec<Entry> {
    reporter.report(Diagnostic::EntriesIn(entries.len()));

    let mut claims: HashMap<String, Claim> = HashMap::new();

    for index in 0..entries.len() {
        // Removals below mutate this entry's orthos, so walk a copy.
        let snapshot: Vec<(String, u32)> = entries[index]
            .orthos
            .iter()
            .map(|o| (o.value.clone(), o.rank))
            .collect();

        for (value, rank) in snapshot {
            let Some(prev) = claims.get(&value).copied() else {
                claims.insert(value, Claim { entry: index, rank });
                continue;
            };

            if rank == 0 && prev.rank == 0 && config.warn_ambiguous {
                reporter.report(Diagnostic::Ambiguous {
                    value: value.clone(),
                    rank,
                });
            }

            if rank < prev.rank {
                tracing::debug!(
                    value = %value,
                    winner = %entries[index].label,
                    loser = %entries[prev.entry].label,
                    "orthography reclaimed"
                );
                entries[prev.entry].remove(&value);
                claims.insert(value, Claim { entry: index, rank });
            } else {
                entries[index].remove(&value);
            }
        }
    }

    // TODO: squash conflicting entries into their winners instead of dropping them
    if config.drop_empty_entries {
        entries.retain(|entry| !entry.orthos.is_empty());
    }

    reporter.report(Diagnostic::EntriesOut(entries.len()));

    entries
}
