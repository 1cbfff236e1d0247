use itertools::Itertools;

use super::{FacetOrder, ListRecord};

/// Distinct defined facet values present in `records`, ordered per the
/// record type's [`FACET_ORDER`](ListRecord::FACET_ORDER).
///
/// Facets are a property of the loaded collection, not of the current
/// filter state: recompute when the collection changes, not on every
/// keystroke.
pub fn extract<R: ListRecord>(records: &[R]) -> Vec<R::Facet> {
    let present = records.iter().filter_map(ListRecord::facet);
    match R::FACET_ORDER {
        FacetOrder::NewestFirst => present.sorted().rev().dedup().collect(),
        FacetOrder::Encounter => {
            let mut seen: Vec<R::Facet> = Vec::new();
            for value in present {
                if !seen.contains(&value) {
                    seen.push(value);
                }
            }
            seen
        }
    }
}
