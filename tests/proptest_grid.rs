//! Property tests for the grid qualification rules

use easypay_extract::extraction::GridReader;
use easypay_extract::page::RawGridRow;
use proptest::prelude::*;

/// Arbitrary cell text: whitespace-heavy on purpose so the trim rules
/// actually get exercised
fn cell_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        Just("\t \t".to_string()),
        "[a-zA-Z0-9À-ÿ/.-]{1,12}",
        "  [a-zA-Z0-9]{1,8}  ",
    ]
}

fn row_strategy() -> impl Strategy<Value = RawGridRow> {
    (
        prop_oneof![
            Just(None),
            Just(Some("grdContrats_HeaderRow".to_string())),
            Just(Some("grdContrats_EmptyRow".to_string())),
            (0usize..50).prop_map(|n| Some(format!("grdContrats_DXDataRow{n}"))),
        ],
        prop::collection::vec(cell_strategy(), 0..8),
    )
        .prop_map(|(id, cells)| RawGridRow { id, cells })
}

proptest! {
    /// A row survives qualification iff it is not a meta row and at least
    /// one cell is non-empty after trimming.
    #[test]
    fn row_kept_iff_some_cell_survives_trim(rows in prop::collection::vec(row_strategy(), 0..20)) {
        let expected: usize = rows
            .iter()
            .filter(|r| {
                let meta = r.id.as_deref().is_some_and(|id| {
                    id.ends_with("_HeaderRow") || id.ends_with("_EmptyRow")
                });
                !meta && r.cells.iter().any(|c| !c.trim().is_empty())
            })
            .count();

        let qualified = GridReader::qualify(rows);
        prop_assert_eq!(qualified.len(), expected);
    }

    /// Column keys are always 0-based and contiguous, matching cell order.
    #[test]
    fn column_keys_contiguous(rows in prop::collection::vec(row_strategy(), 0..20)) {
        for row in GridReader::qualify(rows) {
            let keys: Vec<u32> = row.keys().copied().collect();
            let expected: Vec<u32> = (0..row.len() as u32).collect();
            prop_assert_eq!(keys, expected);
        }
    }

    /// Every materialized cell is trimmed.
    #[test]
    fn cells_are_trimmed(rows in prop::collection::vec(row_strategy(), 0..20)) {
        for row in GridReader::qualify(rows) {
            for value in row.values() {
                prop_assert_eq!(value.as_str(), value.trim());
            }
        }
    }

    /// Meta rows never survive, whatever their cells contain.
    #[test]
    fn meta_rows_never_survive(cells in prop::collection::vec(cell_strategy(), 0..8)) {
        let rows = vec![
            RawGridRow { id: Some("grdX_HeaderRow".to_string()), cells: cells.clone() },
            RawGridRow { id: Some("grdX_EmptyRow".to_string()), cells },
        ];
        prop_assert!(GridReader::qualify(rows).is_empty());
    }

    /// Qualification preserves relative row order.
    #[test]
    fn order_preserved(n in 1usize..15) {
        let rows: Vec<RawGridRow> = (0..n)
            .map(|i| RawGridRow {
                id: Some(format!("grd_DXDataRow{i}")),
                cells: vec![format!("row-{i}")],
            })
            .collect();

        let qualified = GridReader::qualify(rows);
        prop_assert_eq!(qualified.len(), n);
        for (i, row) in qualified.iter().enumerate() {
            prop_assert_eq!(row.get(&0).unwrap(), &format!("row-{i}"));
        }
    }
}
