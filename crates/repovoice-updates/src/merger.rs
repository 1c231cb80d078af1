// SPDX-FileCopyrightText: 2026 Repovoice Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Pure merging of update records into repository metadata, and the speech
//! rendering of the result.
//!
//! `merge` returns new metadata rather than mutating shared state, so
//! nothing fetched during one turn can leak into another user's turn.
//! Rendering iterates the metadata's sorted field map, so speech is
//! independent of record arrival order.

use repovoice_core::{CatalogEntry, RepoMetadata, UpdateRecord};

/// Folds records into a copy of `metadata`.
///
/// Each record overwrites `fields[record.field]`. Duplicate field names are
/// last-write-wins in record order; for distinct field names the result is
/// independent of order. Records are applied regardless of their
/// `repo_key` — use [`merge_for`] when records from several repositories
/// are mixed together.
pub fn merge(metadata: &RepoMetadata, records: &[UpdateRecord]) -> RepoMetadata {
    let mut merged = metadata.clone();
    for record in records {
        merged
            .fields
            .insert(record.field.clone(), record.value.clone());
    }
    merged
}

/// Builds fresh metadata for one catalog entry from a mixed record batch,
/// keeping only the records that originated from that entry.
pub fn merge_for(entry: &CatalogEntry, records: &[UpdateRecord]) -> RepoMetadata {
    let mut metadata = RepoMetadata::new(entry.display_name.clone());
    for record in records.iter().filter(|r| r.repo_key == entry.key) {
        metadata
            .fields
            .insert(record.field.clone(), record.value.clone());
    }
    metadata
}

/// Renders metadata as one spoken sentence.
///
/// Only present fields are rendered; absent fields are silently skipped,
/// never spoken as "unknown". Metadata with no fields renders as the empty
/// string. Output ends with a trailing space so per-repository sentences
/// concatenate cleanly.
pub fn render_speech(metadata: &RepoMetadata) -> String {
    if metadata.fields.is_empty() {
        return String::new();
    }
    let parts: Vec<String> = metadata
        .fields
        .iter()
        .map(|(field, value)| format!("{field} is {value}"))
        .collect();
    format!("For {}, {}. ", metadata.display_name, parts.join(", "))
}

#[cfg(test)]
mod tests {
    use repovoice_core::RepoKey;

    use super::*;

    fn record(key: &str, field: &str, value: &str) -> UpdateRecord {
        UpdateRecord {
            repo_key: RepoKey::from_normalized(key),
            field: field.into(),
            value: value.into(),
        }
    }

    fn entry(key: &str, display: &str) -> CatalogEntry {
        CatalogEntry {
            key: RepoKey::from_normalized(key),
            display_name: display.into(),
            full_name: format!("owner/{key}"),
        }
    }

    #[test]
    fn merge_overwrites_fields_and_leaves_input_untouched() {
        let base = RepoMetadata::new("Node");
        let merged = merge(
            &base,
            &[
                record("node", "stars", "112000"),
                record("node", "open issues", "1968"),
            ],
        );
        assert!(base.fields.is_empty());
        assert_eq!(merged.fields["stars"], "112000");
        assert_eq!(merged.fields["open issues"], "1968");
    }

    #[test]
    fn merge_result_independent_of_record_order() {
        let base = RepoMetadata::new("Node");
        let forward = merge(
            &base,
            &[
                record("node", "stars", "112000"),
                record("node", "last release", "v22.12.0"),
            ],
        );
        let reversed = merge(
            &base,
            &[
                record("node", "last release", "v22.12.0"),
                record("node", "stars", "112000"),
            ],
        );
        assert_eq!(forward, reversed);
        assert_eq!(render_speech(&forward), render_speech(&reversed));
    }

    #[test]
    fn duplicate_field_is_last_write_wins() {
        let merged = merge(
            &RepoMetadata::new("Node"),
            &[
                record("node", "stars", "1"),
                record("node", "stars", "2"),
            ],
        );
        assert_eq!(merged.fields["stars"], "2");
    }

    #[test]
    fn merge_for_keeps_only_matching_records() {
        let batch = [
            record("node", "stars", "112000"),
            record("react", "stars", "230000"),
            record("node", "open issues", "1968"),
        ];
        let node = merge_for(&entry("node", "Node"), &batch);
        assert_eq!(node.fields.len(), 2);
        assert!(!node.fields.values().any(|v| v == "230000"));

        let react = merge_for(&entry("react", "React"), &batch);
        assert_eq!(react.fields.len(), 1);
        assert_eq!(react.fields["stars"], "230000");
    }

    #[test]
    fn render_speaks_present_fields_only() {
        let merged = merge(
            &RepoMetadata::new("Node"),
            &[
                record("node", "stars", "112000"),
                record("node", "open issues", "1968"),
            ],
        );
        assert_eq!(
            render_speech(&merged),
            "For Node, open issues is 1968, stars is 112000. "
        );
    }

    #[test]
    fn render_of_empty_metadata_is_empty() {
        assert_eq!(render_speech(&RepoMetadata::new("Node")), "");
    }
}
