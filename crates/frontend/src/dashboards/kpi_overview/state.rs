use contracts::dashboards::kpi_daily::{summarize, KpiSummary};
use contracts::domain::warehouse::Warehouse;
use contracts::shared::filters::{FilterState, ValidationError};
use leptos::prelude::*;
use std::collections::HashSet;

/// Reactive state owned by the KPI overview page.
///
/// Constructed when the page mounts and handed around by value (signals
/// are cheap copies); nothing here is process-global, so two mounts of the
/// page never share state.
#[derive(Clone, Copy)]
pub struct KpiOverviewState {
    /// Validated filter selection; the only source for data-source queries.
    pub filters: RwSignal<FilterState>,
    /// Warehouse directory backing the checkbox panel, loaded once.
    pub warehouses: RwSignal<Vec<Warehouse>>,
    /// Aggregation of the most recently fetched rows.
    pub summary: RwSignal<KpiSummary>,
    pub loading: RwSignal<bool>,
    pub load_failed: RwSignal<bool>,
    /// Inline validation error for the date inputs.
    pub date_error: RwSignal<Option<ValidationError>>,
    /// Raw yyyy-mm-dd values bound to the date inputs.
    pub start_input: RwSignal<String>,
    pub end_input: RwSignal<String>,
    /// Warehouse ids currently ticked in the panel.
    pub checked: RwSignal<HashSet<String>>,
}

impl KpiOverviewState {
    pub fn new() -> Self {
        let defaults = FilterState::new().to_query();
        Self {
            filters: RwSignal::new(FilterState::new()),
            warehouses: RwSignal::new(Vec::new()),
            summary: RwSignal::new(summarize(&[])),
            loading: RwSignal::new(true),
            load_failed: RwSignal::new(false),
            date_error: RwSignal::new(None),
            start_input: RwSignal::new(defaults.start.to_string()),
            end_input: RwSignal::new(defaults.end.to_string()),
            checked: RwSignal::new(HashSet::new()),
        }
    }

    /// Ids of every known warehouse, in directory order.
    pub fn known_ids(&self) -> Vec<String> {
        self.warehouses
            .get_untracked()
            .iter()
            .map(|w| w.warehouse_id.clone())
            .collect()
    }
}

impl Default for KpiOverviewState {
    fn default() -> Self {
        Self::new()
    }
}
