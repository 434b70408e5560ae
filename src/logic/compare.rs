use crate::error::SelectionError;
use crate::logic::selection::{COMPARE_MINIMUM, SelectionSet};
use crate::state::types::VehicleRecord;
use crate::store::RecordStore;

/// One labelled row of the comparison table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompareRow {
    /// Spec label (e.g., "Engine").
    pub label: &'static str,
    /// One cell per compared vehicle; `-` for missing values.
    pub cells: Vec<String>,
}

/// Side-by-side view of the selected vehicles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Comparison {
    /// Vehicles in selection order.
    pub records: Vec<VehicleRecord>,
    /// Spec rows.
    pub rows: Vec<CompareRow>,
}

/// Rows shown in the comparison table, top to bottom.
const SPEC_LABELS: [&str; 5] = ["Price", "Engine", "Power", "0-100", "Year"];

/// Field behind a spec label.
fn spec_value<'a>(rec: &'a VehicleRecord, label: &str) -> &'a str {
    match label {
        "Price" => &rec.price,
        "Engine" => &rec.engine,
        "Power" => &rec.power,
        "0-100" => &rec.acceleration,
        "Year" => &rec.year,
        _ => "",
    }
}

/// What: Build the comparison table for the current selection.
///
/// Inputs:
/// - `selection`: Compare selection (ids only)
/// - `store`: Record store to resolve ids against
///
/// Output:
/// - `Ok(Comparison)` with records in selection order.
///
/// # Errors
/// - `SelectionError::InsufficientSelection` when fewer than two ids are selected.
///
/// Details:
/// - Ids that no longer resolve are dropped from the table instead of failing the build.
pub fn build_comparison(
    selection: &SelectionSet,
    store: &RecordStore,
) -> Result<Comparison, SelectionError> {
    if !selection.compare_eligible() {
        return Err(SelectionError::InsufficientSelection {
            selected: selection.len(),
            required: COMPARE_MINIMUM,
        });
    }
    let records: Vec<VehicleRecord> = selection
        .ids()
        .iter()
        .filter_map(|&id| match store.require(id) {
            Ok(r) => Some(r.clone()),
            Err(e) => {
                tracing::debug!(error = %e, "[Compare] Dropping stale selection id");
                None
            }
        })
        .collect();
    let rows = SPEC_LABELS
        .into_iter()
        .map(|label| CompareRow {
            label,
            cells: records
                .iter()
                .map(|r| {
                    let v = spec_value(r, label).trim();
                    if v.is_empty() { "-".to_string() } else { v.to_string() }
                })
                .collect(),
        })
        .collect();
    Ok(Comparison { records, rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::types::RecordId;

    fn rec(id: RecordId, name: &str, price: &str) -> VehicleRecord {
        VehicleRecord {
            id,
            name: name.to_string(),
            brand: "Porsche".to_string(),
            price: price.to_string(),
            engine: "4.0L Flat-6".to_string(),
            year: "2024".to_string(),
            ..Default::default()
        }
    }

    fn store() -> RecordStore {
        RecordStore::new(vec![
            rec(1, "GT3", "$200,000"),
            rec(2, "Turbo S", "$230,000"),
            rec(3, "Carrera", ""),
        ])
        .expect("unique ids")
    }

    #[test]
    /// What: A single selected id is not enough
    ///
    /// - Input: Selection `[1]`
    /// - Output: `InsufficientSelection { selected: 1, required: 2 }`
    fn one_selected_is_insufficient() {
        let mut sel = SelectionSet::new();
        sel.toggle(1);
        assert_eq!(
            build_comparison(&sel, &store()),
            Err(SelectionError::InsufficientSelection {
                selected: 1,
                required: 2
            })
        );
    }

    #[test]
    /// What: Two and three selected ids build a table in selection order
    ///
    /// - Input: Selection `[3, 1]`, then `[3, 1, 2]`
    /// - Output: Records follow the selection; empty price renders as `-`
    fn two_or_three_selected_succeed() {
        let s = store();
        let mut sel = SelectionSet::new();
        sel.toggle(3);
        sel.toggle(1);
        let cmp = build_comparison(&sel, &s).expect("two selected");
        let names: Vec<&str> = cmp.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Carrera", "GT3"]);
        let price = cmp.rows.iter().find(|r| r.label == "Price").expect("price row");
        assert_eq!(price.cells, vec!["-", "$200,000"]);
        assert_eq!(cmp.rows.len(), 5);

        sel.toggle(2);
        let cmp = build_comparison(&sel, &s).expect("three selected");
        assert_eq!(cmp.records.len(), 3);
        assert!(cmp.rows.iter().all(|r| r.cells.len() == 3));
    }

    #[test]
    /// What: Stale ids are dropped silently
    ///
    /// - Input: Selection `[1, 2, 99]` where 99 is unknown
    /// - Output: Table with two columns
    fn stale_ids_are_dropped() {
        let mut sel = SelectionSet::new();
        for id in [1, 2, 99] {
            sel.toggle(id);
        }
        let cmp = build_comparison(&sel, &store()).expect("eligible selection");
        let ids: Vec<RecordId> = cmp.records.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }
}
