//! Per-page load and filter state.
//!
//! One [`ListController`] is created per page mount, honors exactly one
//! load result, and from then on recomputes the visible subset
//! synchronously on every filter input. A failed load is terminal for
//! the mount; recovery is a fresh controller on the next mount.

use tracing::{debug, warn};

use crate::error::{Result, SiteError};
use crate::pipeline::filter::FacetSelection;
use crate::pipeline::{facets, filter, ListRecord};

/// How the two filter inputs interact when one changes.
///
/// The shipped pages clear the search box when a batch is selected but
/// keep the selected batch while the user types. Both directions stay
/// configurable until product settles whether the asymmetry is wanted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterBehavior {
    pub facet_resets_query: bool,
    pub query_resets_facet: bool,
}

impl Default for FilterBehavior {
    fn default() -> Self {
        Self {
            facet_resets_query: true,
            query_resets_facet: false,
        }
    }
}

enum Phase {
    Loading,
    Ready,
    Failed(SiteError),
}

/// What the view renders for the current state.
#[derive(Debug)]
pub enum RenderState<'a, R> {
    /// Fetch still in flight; show skeleton placeholders.
    Skeleton,
    /// Loaded with at least one visible record.
    Grid(Vec<&'a R>),
    /// Loaded, but the collection or the filtered subset is empty.
    NoResults,
    /// The load failed; show the inline error.
    Error(&'a SiteError),
}

/// Snapshot handed to the view layer on each render.
pub struct ListView<'a, R: ListRecord> {
    pub state: RenderState<'a, R>,
    pub facets: &'a [R::Facet],
    pub active_facet: &'a FacetSelection<R::Facet>,
    pub query: &'a str,
}

/// Owns one list page's state for the lifetime of a mount.
pub struct ListController<R: ListRecord> {
    phase: Phase,
    records: Vec<R>,
    facets: Vec<R::Facet>,
    active_facet: FacetSelection<R::Facet>,
    query: String,
    behavior: FilterBehavior,
}

impl<R: ListRecord> ListController<R> {
    /// A controller for a freshly mounted page, awaiting its fetch.
    pub fn new() -> Self {
        Self::with_behavior(FilterBehavior::default())
    }

    pub fn with_behavior(behavior: FilterBehavior) -> Self {
        Self {
            phase: Phase::Loading,
            records: Vec::new(),
            facets: Vec::new(),
            active_facet: FacetSelection::All,
            query: String::new(),
            behavior,
        }
    }

    /// Settle the mount's single fetch.
    ///
    /// Facet options are extracted once here. A result arriving after the
    /// controller has settled is discarded, so a late resolution cannot
    /// clobber the state of a page that already rendered.
    pub fn finish_load(&mut self, outcome: Result<Vec<R>>) {
        if !matches!(self.phase, Phase::Loading) {
            warn!("discarding load result for a settled list");
            return;
        }
        match outcome {
            Ok(records) => {
                self.facets = facets::extract(&records);
                debug!(
                    count = records.len(),
                    facets = self.facets.len(),
                    "list loaded"
                );
                self.records = records;
                self.phase = Phase::Ready;
            }
            Err(error) => {
                warn!(error = %error, "list load failed");
                self.phase = Phase::Failed(error);
            }
        }
    }

    /// Update the free-text query. No-op until the list has loaded.
    pub fn set_query(&mut self, query: impl Into<String>) {
        if !matches!(self.phase, Phase::Ready) {
            return;
        }
        self.query = query.into();
        if self.behavior.query_resets_facet {
            self.active_facet = FacetSelection::All;
        }
    }

    /// Update the facet selection. No-op until the list has loaded.
    pub fn set_facet(&mut self, selection: FacetSelection<R::Facet>) {
        if !matches!(self.phase, Phase::Ready) {
            return;
        }
        self.active_facet = selection;
        if self.behavior.facet_resets_query {
            self.query.clear();
        }
    }

    /// Reset both inputs, returning to the unfiltered listing.
    pub fn clear_filters(&mut self) {
        self.active_facet = FacetSelection::All;
        self.query.clear();
    }

    /// Whether any filter input is active.
    pub fn is_filtered(&self) -> bool {
        !matches!(self.active_facet, FacetSelection::All) || !self.query.is_empty()
    }

    /// Facet options extracted from the loaded collection.
    pub fn facets(&self) -> &[R::Facet] {
        &self.facets
    }

    /// The records that survive the active facet and query, in store
    /// order.
    pub fn visible(&self) -> Vec<&R> {
        filter::apply(&self.records, &self.active_facet, &self.query)
    }

    /// Snapshot for the view layer.
    pub fn view(&self) -> ListView<'_, R> {
        let state = match &self.phase {
            Phase::Loading => RenderState::Skeleton,
            Phase::Failed(error) => RenderState::Error(error),
            Phase::Ready => {
                let visible = self.visible();
                if visible.is_empty() {
                    RenderState::NoResults
                } else {
                    RenderState::Grid(visible)
                }
            }
        };
        ListView {
            state,
            facets: &self.facets,
            active_facet: &self.active_facet,
            query: &self.query,
        }
    }
}

impl<R: ListRecord> Default for ListController<R> {
    fn default() -> Self {
        Self::new()
    }
}
