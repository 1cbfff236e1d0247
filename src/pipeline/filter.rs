//! The visible-subset computation shared by the list pages.
//!
//! Two sequential, order-preserving passes: facet first, then free text.
//! Neither pass re-sorts; the result keeps the store's ordering. Zero
//! matches is a valid result, not an error.

use super::ListRecord;

/// The active facet selection; [`All`](FacetSelection::All) means no
/// facet filter is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetSelection<F> {
    All,
    Only(F),
}

impl<F> Default for FacetSelection<F> {
    fn default() -> Self {
        FacetSelection::All
    }
}

impl<F: PartialEq> FacetSelection<F> {
    fn admits(&self, value: Option<F>) -> bool {
        match self {
            FacetSelection::All => true,
            FacetSelection::Only(facet) => value.as_ref() == Some(facet),
        }
    }
}

/// Keep the records whose facet field equals the selection exactly;
/// `All` keeps everything, including records without a facet value.
pub fn facet_pass<'a, R: ListRecord>(
    records: &'a [R],
    selection: &FacetSelection<R::Facet>,
) -> Vec<&'a R> {
    records
        .iter()
        .filter(|r| selection.admits(r.facet()))
        .collect()
}

/// Keep the records where `query` is a case-insensitive substring of at
/// least one searchable field; an empty query keeps everything.
pub fn text_pass<'a, R: ListRecord>(records: Vec<&'a R>, query: &str) -> Vec<&'a R> {
    if query.is_empty() {
        return records;
    }
    let needle = query.to_lowercase();
    records
        .into_iter()
        .filter(|r| {
            r.search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .collect()
}

/// The visible subset: facet pass then text pass.
pub fn apply<'a, R: ListRecord>(
    records: &'a [R],
    selection: &FacetSelection<R::Facet>,
    query: &str,
) -> Vec<&'a R> {
    text_pass(facet_pass(records, selection), query)
}
