//! Extraction behavior tests
//!
//! These exercise the field reader, grid reader, and orchestrator against
//! a scripted mock page — no browser involved.

use easypay_extract::extraction::{FieldReader, GridReader, WorkerExtractor};
use easypay_extract::page::RawGridRow;
use easypay_extract::plan::ExtractionPlan;
use easypay_extract::testing::MockPage;
use pretty_assertions::assert_eq;

fn data_row(id: &str, cells: &[&str]) -> RawGridRow {
    RawGridRow {
        id: Some(id.to_string()),
        cells: cells.iter().map(|c| c.to_string()).collect(),
    }
}

#[tokio::test]
async fn absent_fields_all_read_as_empty() {
    // Completely blank page: every one of the ~90 reads must degrade to ""
    let page = MockPage::new();
    let plan = ExtractionPlan::worker_full();

    let snapshot = WorkerExtractor::extract(&page, &plan).await;

    assert_eq!(snapshot.field_count(), plan.field_count());
    for spec in plan.fields() {
        assert_eq!(snapshot.field(spec.section, spec.key), Some(""));
    }
}

#[tokio::test]
async fn select_example_from_the_sexe_combo() {
    let page = MockPage::new().with_select("#cmbSexe", &["", "M", "F"], Some(2));
    assert_eq!(FieldReader::read_field(&page, "#cmbSexe").await, "F");

    let page = MockPage::new().with_select("#cmbSexe", &["", "M", "F"], None);
    assert_eq!(FieldReader::read_field(&page, "#cmbSexe").await, "");
}

#[tokio::test]
async fn textarea_and_label_kinds_are_read() {
    let page = MockPage::new()
        .with_text_field("#memRemarque", "Contrat renouvelé en 2023")
        .with_label("#lblAnciennete", "12 ans");

    assert_eq!(
        FieldReader::read_field(&page, "#memRemarque").await,
        "Contrat renouvelé en 2023"
    );
    assert_eq!(FieldReader::read_field(&page, "#lblAnciennete").await, "12 ans");
}

#[tokio::test]
async fn grid_rows_keep_page_order_and_drop_blanks() {
    let page = MockPage::new().with_grid(
        "grdContrats",
        vec![
            data_row("grdContrats_HeaderRow", &["Du", "Au", "Type"]),
            data_row("grdContrats_DXDataRow0", &["01/01/2020", "31/12/2020", "CDD"]),
            data_row("grdContrats_DXDataRow1", &["  ", "", " "]),
            data_row("grdContrats_DXDataRow2", &["01/01/2021", "", "CDI"]),
        ],
    );

    let rows = GridReader::read_grid(&page, "grdContrats").await;

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].get(&0).unwrap(), "01/01/2020");
    assert_eq!(rows[0].get(&2).unwrap(), "CDD");
    assert_eq!(rows[1].get(&0).unwrap(), "01/01/2021");
    assert_eq!(rows[1].get(&1).unwrap(), "");
}

#[tokio::test]
async fn header_plus_placeholder_only_grid_is_empty() {
    let page = MockPage::new().with_grid(
        "grdEnfants",
        vec![
            data_row("grdEnfants_HeaderRow", &["Nom", "Date de naissance"]),
            data_row("grdEnfants_EmptyRow", &["Aucune donnée à afficher"]),
        ],
    );

    let rows = GridReader::read_grid(&page, "grdEnfants").await;
    assert!(rows.is_empty());
}

#[tokio::test]
async fn full_extraction_populates_fields_and_grids() {
    let page = MockPage::new()
        .with_text_field("#edtNom", "DUPONT")
        .with_text_field("#edtPrenom", "Marie")
        .with_text_field("#edtNumNational", "85.07.30-033.28")
        .with_select("#cmbSexe", &["", "M", "F"], Some(2))
        .with_select("#cmbTypeContrat", &["CDD", "CDI"], Some(1))
        .with_label("#lblAnciennete", "12 ans")
        .with_grid(
            "grdContrats",
            vec![
                data_row("grdContrats_HeaderRow", &["Du", "Au", "Type"]),
                data_row("grdContrats_DXDataRow0", &["01/01/2012", "", "CDI"]),
            ],
        );

    let snapshot = WorkerExtractor::extract(&page, &ExtractionPlan::worker_full()).await;

    assert_eq!(snapshot.field("identification", "nom"), Some("DUPONT"));
    assert_eq!(snapshot.field("identification", "prenom"), Some("Marie"));
    assert_eq!(snapshot.field("identification", "sexe"), Some("F"));
    assert_eq!(snapshot.field("contrat", "typeContrat"), Some("CDI"));
    assert_eq!(snapshot.field("contrat", "anciennete"), Some("12 ans"));
    // Field the page does not have
    assert_eq!(snapshot.field("paiement", "iban"), Some(""));

    assert_eq!(snapshot.grids["historiqueContrats"].len(), 1);
    assert!(snapshot.grids["occupations"].is_empty());
    assert!(snapshot.grids["enfants"].is_empty());
}

#[tokio::test]
async fn repeat_extraction_is_deterministic_up_to_timestamp() {
    let page = MockPage::new()
        .with_text_field("#edtNom", "DUPONT")
        .with_select("#cmbLangue", &["FR", "NL", "DE"], Some(0));
    let plan = ExtractionPlan::worker_full();

    let first = WorkerExtractor::extract(&page, &plan).await;
    let second = WorkerExtractor::extract(&page, &plan).await;

    assert!(first.same_data(&second));
}

#[tokio::test]
async fn failing_page_still_yields_a_complete_snapshot() {
    let page = MockPage::new().with_text_field("#edtNom", "DUPONT").failing();
    let plan = ExtractionPlan::worker_full();

    let snapshot = WorkerExtractor::extract(&page, &plan).await;

    assert_eq!(snapshot.field_count(), plan.field_count());
    for spec in plan.fields() {
        assert_eq!(snapshot.field(spec.section, spec.key), Some(""));
    }
    for rows in snapshot.grids.values() {
        assert!(rows.is_empty());
    }
}
