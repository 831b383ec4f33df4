//! Extraction orchestration
//!
//! Walks a declarative [`ExtractionPlan`] against a page that the session
//! gate has already confirmed, producing one [`Snapshot`]. Reads are
//! issued strictly in declaration order — the page is a shared browsing
//! context with no internal locking, so there is no fan-out across
//! fields. If the operator mutates the page mid-run the reads can skew;
//! that is accepted and not corrected.

use crate::extraction::{FieldReader, GridReader};
use crate::page::PageSurface;
use crate::plan::ExtractionPlan;
use crate::snapshot::Snapshot;
use chrono::Utc;
use tracing::{debug, info, instrument};

/// Drives one extraction run
pub struct WorkerExtractor;

impl WorkerExtractor {
    /// Extract every field and grid of `plan` from `page`
    ///
    /// The timestamp is captured once, before the first read. Individual
    /// read failures have already been degraded to empty values by the
    /// readers, so this never fails: every field spec of the plan ends up
    /// with exactly one value in the snapshot.
    #[instrument(skip(page, plan))]
    pub async fn extract<P: PageSurface>(page: &P, plan: &ExtractionPlan) -> Snapshot {
        let mut snapshot = Snapshot::new(Utc::now());

        info!(
            "Extracting {} fields and {} grids",
            plan.field_count(),
            plan.grid_count()
        );

        for spec in plan.fields() {
            let value = FieldReader::read_field(page, spec.locator).await;
            snapshot.set_field(spec.section, spec.key, value);
        }

        for grid in plan.grids() {
            let rows = GridReader::read_grid(page, grid.grid_id).await;
            debug!("Grid {}: {} rows", grid.name, rows.len());
            snapshot.grids.insert(grid.name.to_string(), rows);
        }

        debug!(
            "Extraction done: {} fields, {} grid rows",
            snapshot.field_count(),
            snapshot.grid_row_count()
        );

        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockPage;

    fn worker_page() -> MockPage {
        MockPage::new()
            .with_text_field("#edtNom", "DUPONT")
            .with_text_field("#edtPrenom", "Marie")
            .with_select("#cmbSexe", &["", "M", "F"], Some(2))
    }

    #[tokio::test]
    async fn test_every_field_spec_gets_a_value() {
        let page = worker_page();
        let plan = ExtractionPlan::worker_full();

        let snapshot = WorkerExtractor::extract(&page, &plan).await;

        // One value per spec, present fields populated, absent ones empty
        assert_eq!(snapshot.field_count(), plan.field_count());
        assert_eq!(snapshot.field("identification", "nom"), Some("DUPONT"));
        assert_eq!(snapshot.field("identification", "sexe"), Some("F"));
        assert_eq!(snapshot.field("contrat", "typeContrat"), Some(""));
    }

    #[tokio::test]
    async fn test_every_grid_spec_gets_a_slot() {
        let page = worker_page();
        let plan = ExtractionPlan::worker_full();

        let snapshot = WorkerExtractor::extract(&page, &plan).await;

        assert_eq!(snapshot.grids.len(), plan.grid_count());
        for grid in plan.grids() {
            assert!(snapshot.grids.contains_key(grid.name), "{}", grid.name);
        }
    }

    #[tokio::test]
    async fn test_repeat_extraction_differs_only_in_timestamp() {
        let page = worker_page();
        let plan = ExtractionPlan::worker_full();

        let first = WorkerExtractor::extract(&page, &plan).await;
        let second = WorkerExtractor::extract(&page, &plan).await;

        assert!(first.same_data(&second));
        assert!(second.extraction_date >= first.extraction_date);
    }

    #[tokio::test]
    async fn test_name_only_plan_extracts_single_field() {
        let page = worker_page();
        let plan = ExtractionPlan::worker_name_only();

        let snapshot = WorkerExtractor::extract(&page, &plan).await;

        assert_eq!(snapshot.field_count(), 1);
        assert_eq!(snapshot.field("identification", "nom"), Some("DUPONT"));
        assert!(snapshot.grids.is_empty());
    }
}
