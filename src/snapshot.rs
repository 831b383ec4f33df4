//! Snapshot model and persistence
//!
//! One extraction run produces one [`Snapshot`]: the extraction timestamp,
//! the scraped field values grouped by section, and the scraped grids.
//! [`SnapshotWriter`] persists it as a pretty-printed JSON document under
//! a timestamped filename, one independent file per run.

use crate::error::{Result, SnapshotError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{info, instrument};

/// One grid row: 0-based, contiguous column index to trimmed cell text
pub type GridRow = BTreeMap<u32, String>;

/// The complete record produced by one extraction run
///
/// Never mutated after being written. Field values are plain strings;
/// empty string is the defined fallback for an unreadable or absent field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Snapshot {
    /// Wall-clock time captured once at the start of orchestration
    pub extraction_date: DateTime<Utc>,
    /// Section name -> field name -> extracted value
    pub sections: BTreeMap<String, BTreeMap<String, String>>,
    /// Grid name -> qualifying rows in on-page order
    pub grids: BTreeMap<String, Vec<GridRow>>,
}

impl Snapshot {
    /// Create an empty snapshot stamped with the given time
    pub fn new(extraction_date: DateTime<Utc>) -> Self {
        Self {
            extraction_date,
            sections: BTreeMap::new(),
            grids: BTreeMap::new(),
        }
    }

    /// Assign a field value into its section slot
    pub fn set_field(&mut self, section: &str, key: &str, value: String) {
        self.sections
            .entry(section.to_string())
            .or_default()
            .insert(key.to_string(), value);
    }

    /// Look up a field value
    pub fn field(&self, section: &str, key: &str) -> Option<&str> {
        self.sections
            .get(section)
            .and_then(|s| s.get(key))
            .map(String::as_str)
    }

    /// Total number of extracted fields across all sections
    pub fn field_count(&self) -> usize {
        self.sections.values().map(BTreeMap::len).sum()
    }

    /// Total number of grid rows across all grids
    pub fn grid_row_count(&self) -> usize {
        self.grids.values().map(Vec::len).sum()
    }

    /// Whether two snapshots carry the same data, timestamp aside
    pub fn same_data(&self, other: &Snapshot) -> bool {
        self.sections == other.sections && self.grids == other.grids
    }
}

/// Persists snapshots to disk
pub struct SnapshotWriter;

impl SnapshotWriter {
    /// Serialize the snapshot and write it under `output_dir`
    ///
    /// Creates the directory tree if absent (idempotent). The filename
    /// embeds the snapshot's own extraction timestamp at millisecond
    /// resolution, which is collision-resistant for manual, infrequent
    /// runs. Returns the path of the written file.
    #[instrument(skip(snapshot))]
    pub fn write(snapshot: &Snapshot, output_dir: &Path) -> Result<PathBuf> {
        std::fs::create_dir_all(output_dir).map_err(|e| SnapshotError::CreateDirFailed {
            path: output_dir.display().to_string(),
            source: e,
        })?;

        let path = output_dir.join(Self::file_name(&snapshot.extraction_date));
        let json = serde_json::to_string_pretty(snapshot)?;

        std::fs::write(&path, json).map_err(|e| SnapshotError::WriteFailed {
            path: path.display().to_string(),
            source: e,
        })?;

        info!(
            "Wrote snapshot: {} ({} fields, {} grid rows)",
            path.display(),
            snapshot.field_count(),
            snapshot.grid_row_count()
        );

        Ok(path)
    }

    /// Filename for a snapshot taken at `ts`
    ///
    /// ISO 8601 with `:` and `.` replaced by `-` so the name is valid on
    /// every filesystem: `worker-data-2024-03-01T09-30-00-123Z.json`.
    pub fn file_name(ts: &DateTime<Utc>) -> String {
        format!("worker-data-{}.json", ts.format("%Y-%m-%dT%H-%M-%S-%3fZ"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_snapshot() -> Snapshot {
        let mut snap = Snapshot::new(Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap());
        snap.set_field("identification", "nom", "DUPONT".to_string());
        snap.set_field("identification", "prenom", "Marie".to_string());
        snap.set_field("contrat", "typeContrat", "CDI".to_string());
        snap.grids.insert(
            "historiqueContrats".to_string(),
            vec![GridRow::from([(0, "01/01/2020".to_string()), (1, "CDI".to_string())])],
        );
        snap
    }

    #[test]
    fn test_field_count_spans_sections() {
        let snap = sample_snapshot();
        assert_eq!(snap.field_count(), 3);
        assert_eq!(snap.grid_row_count(), 1);
    }

    #[test]
    fn test_field_lookup() {
        let snap = sample_snapshot();
        assert_eq!(snap.field("identification", "nom"), Some("DUPONT"));
        assert_eq!(snap.field("identification", "missing"), None);
        assert_eq!(snap.field("missing", "nom"), None);
    }

    #[test]
    fn test_same_data_ignores_timestamp() {
        let a = sample_snapshot();
        let mut b = sample_snapshot();
        b.extraction_date = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        assert!(a.same_data(&b));
        assert_ne!(a, b);

        b.set_field("identification", "nom", "MARTIN".to_string());
        assert!(!a.same_data(&b));
    }

    #[test]
    fn test_file_name_replaces_separators() {
        let ts = Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap()
            + chrono::Duration::milliseconds(123);
        let name = SnapshotWriter::file_name(&ts);
        assert_eq!(name, "worker-data-2024-03-01T09-30-00-123Z.json");
        assert!(!name.contains(':'));
        assert_eq!(name.matches('.').count(), 1); // only the extension
    }

    #[test]
    fn test_serialized_shape_uses_camel_case_stamp() {
        let snap = sample_snapshot();
        let json = serde_json::to_string_pretty(&snap).unwrap();
        assert!(json.contains("\"extractionDate\""));
        assert!(json.contains("\"identification\""));
        assert!(json.contains("\"nom\": \"DUPONT\""));
    }

    #[test]
    fn test_grid_row_keys_serialize_as_column_indices() {
        let snap = sample_snapshot();
        let json = serde_json::to_string(&snap).unwrap();
        assert!(json.contains("\"0\":\"01/01/2020\""));
        assert!(json.contains("\"1\":\"CDI\""));
    }
}
