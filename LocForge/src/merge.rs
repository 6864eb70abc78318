//! Translation merge engine
//!
//! Applies an externally supplied translation table onto a decoded locres
//! container. Entries are matched by a stable identifier derived from the
//! namespace, key and source hash; matched entries get their translation
//! replaced, everything else is left untouched.

use std::collections::HashMap;

use crate::formats::locres::LocresResource;

/// Mapping from stable identifier to translated text.
pub type TranslationTable = HashMap<String, String>;

/// Counts from one merge pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeReport {
    /// Entries visited.
    pub total: usize,
    /// Entries whose translation was replaced.
    pub updated: usize,
    /// Entries with no match in the table.
    pub missing: usize,
}

/// Derive the stable identifier for one entry.
///
/// `<namespace>/<key>#<hash>` with the hash as 8-digit uppercase hex.
/// Empty segments are dropped; a fully anonymous entry falls back to the
/// hash alone. Pure and deterministic, so the same triple always lands on
/// the same table key.
#[must_use]
pub fn stable_id(namespace: &str, key: &str, source_hash: u32) -> String {
    let namespace = namespace.trim();
    let key = key.trim();
    match (namespace.is_empty(), key.is_empty()) {
        (false, false) => format!("{namespace}/{key}#{source_hash:08X}"),
        (true, false) => format!("{key}#{source_hash:08X}"),
        (false, true) => format!("{namespace}#{source_hash:08X}"),
        (true, true) => format!("{source_hash:08X}"),
    }
}

/// Apply a translation table onto a container in place.
///
/// Every entry of every namespace is visited in file order; a table hit
/// with non-empty text replaces the entry's translation. Keys, hashes,
/// namespace names and entry order are never touched, so the container
/// re-encodes with identical structure.
pub fn merge_translations(
    resource: &mut LocresResource,
    table: &TranslationTable,
) -> MergeReport {
    let mut report = MergeReport::default();

    for namespace in &mut resource.namespaces {
        for entry in &mut namespace.entries {
            report.total += 1;
            let id = stable_id(&namespace.name, &entry.key, entry.source_hash);
            match table.get(&id) {
                Some(text) if !text.is_empty() => {
                    entry.translation = text.clone();
                    report.updated += 1;
                }
                _ => report.missing += 1,
            }
        }
    }

    tracing::info!(
        "merged translations: {} total, {} updated, {} missing",
        report.total,
        report.updated,
        report.missing
    );
    report
}
