//! Selection state behind the date-range / warehouse filter panel.
//!
//! The state is owned by the page that created it and mutated only through
//! the methods here; `to_query` is the single point where a selection
//! becomes a data-source query.

use crate::dashboards::kpi_daily::KpiDailyQuery;
use chrono::{Duration, NaiveDate, Utc};
use std::fmt;

/// Width of the default reporting window, in days back from today.
pub const DEFAULT_WINDOW_DAYS: i64 = 30;

/// Which filter input an error refers to, so the UI can flag the exact
/// field inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterField {
    StartDate,
    EndDate,
}

/// Rejected filter input. The selection is left untouched whenever one of
/// these is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Raw input that does not parse as an ISO `YYYY-MM-DD` date.
    InvalidDate { field: FilterField, value: String },
    /// Both dates were provided and the start fell after the end.
    EndBeforeStart,
}

impl ValidationError {
    /// The input the UI should mark as invalid. The range error is
    /// surfaced on the end-date field.
    pub fn field(&self) -> FilterField {
        match self {
            ValidationError::InvalidDate { field, .. } => *field,
            ValidationError::EndBeforeStart => FilterField::EndDate,
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::InvalidDate { value, .. } => {
                write!(f, "Not a valid date: {value}")
            }
            ValidationError::EndBeforeStart => {
                write!(f, "Start date must be before end date.")
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Parse one raw date input. Empty input means "unset" (fall back to the
/// default window); anything else must be a strict ISO date.
pub fn parse_date_input(
    field: FilterField,
    raw: &str,
) -> Result<Option<NaiveDate>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(Some)
        .map_err(|_| ValidationError::InvalidDate {
            field,
            value: raw.to_string(),
        })
}

/// Date range and warehouse subset currently selected in the filter panel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    warehouse_ids: Vec<String>,
}

impl FilterState {
    /// Fresh state: default date window, every warehouse selected.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn start_date(&self) -> Option<NaiveDate> {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn warehouse_ids(&self) -> &[String] {
        &self.warehouse_ids
    }

    /// Replace the date range. With both dates present the start must not
    /// fall after the end; on failure the previous range is kept and the
    /// error points at the end-date field.
    pub fn set_date_range(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Result<(), ValidationError> {
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(ValidationError::EndBeforeStart);
            }
        }
        self.start_date = start;
        self.end_date = end;
        Ok(())
    }

    /// Replace the warehouse subset. An empty subset selects every known
    /// warehouse (public contract, not an incidental default) and is passed
    /// through to the query unmodified.
    pub fn set_warehouse_selection(&mut self, ids: Vec<String>) {
        self.warehouse_ids = ids;
    }

    /// Number of criteria that differ from the defaults; feeds the filter
    /// panel badge.
    pub fn active_filter_count(&self) -> usize {
        let mut count = 0;
        if self.start_date.is_some() || self.end_date.is_some() {
            count += 1;
        }
        if !self.warehouse_ids.is_empty() {
            count += 1;
        }
        count
    }

    /// Build the data-source query, defaulting unset dates to the trailing
    /// 30-day window ending today (evaluated at call time).
    pub fn to_query(&self) -> KpiDailyQuery {
        self.to_query_at(Utc::now().date_naive())
    }

    /// [`FilterState::to_query`] with an explicit "today", so tests control
    /// the clock.
    pub fn to_query_at(&self, today: NaiveDate) -> KpiDailyQuery {
        KpiDailyQuery {
            start: self
                .start_date
                .unwrap_or(today - Duration::days(DEFAULT_WINDOW_DAYS)),
            end: self.end_date.unwrap_or(today),
            warehouse_ids: self.warehouse_ids.clone(),
        }
    }

    /// Clear back to the default date window and the full warehouse
    /// selection. Idempotent.
    pub fn reset(&mut self) {
        self.start_date = None;
        self.end_date = None;
        self.warehouse_ids.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn fresh_state_queries_the_trailing_thirty_day_window() {
        let today = date(2025, 1, 27);
        let query = FilterState::new().to_query_at(today);
        assert_eq!(query.start, date(2024, 12, 28));
        assert_eq!(query.end, today);
        assert!(query.warehouse_ids.is_empty());
    }

    #[test]
    fn inverted_range_is_rejected_and_state_unchanged() {
        let mut state = FilterState::new();
        state
            .set_date_range(Some(date(2025, 1, 1)), Some(date(2025, 1, 15)))
            .unwrap();

        let err = state
            .set_date_range(Some(date(2025, 2, 1)), Some(date(2025, 1, 1)))
            .unwrap_err();
        assert_eq!(err, ValidationError::EndBeforeStart);
        assert_eq!(err.field(), FilterField::EndDate);

        // Prior selection survives the failed update.
        assert_eq!(state.start_date(), Some(date(2025, 1, 1)));
        assert_eq!(state.end_date(), Some(date(2025, 1, 15)));
    }

    #[test]
    fn equal_start_and_end_are_a_valid_single_day_range() {
        let mut state = FilterState::new();
        let day = date(2025, 1, 15);
        state.set_date_range(Some(day), Some(day)).unwrap();
        let query = state.to_query_at(date(2025, 1, 27));
        assert_eq!(query.start, day);
        assert_eq!(query.end, day);
    }

    #[test]
    fn half_open_ranges_fill_the_missing_side_from_the_default_window() {
        let mut state = FilterState::new();
        state.set_date_range(Some(date(2025, 1, 10)), None).unwrap();
        let query = state.to_query_at(date(2025, 1, 27));
        assert_eq!(query.start, date(2025, 1, 10));
        assert_eq!(query.end, date(2025, 1, 27));
    }

    #[test]
    fn empty_warehouse_selection_passes_through_as_all() {
        let mut state = FilterState::new();
        state.set_warehouse_selection(vec!["WH1".into(), "WH2".into()]);
        state.set_warehouse_selection(Vec::new());
        let query = state.to_query_at(date(2025, 1, 27));
        assert!(query.warehouse_ids.is_empty());
    }

    #[test]
    fn reset_restores_defaults_and_is_idempotent() {
        let mut state = FilterState::new();
        state
            .set_date_range(Some(date(2025, 1, 1)), Some(date(2025, 1, 15)))
            .unwrap();
        state.set_warehouse_selection(vec!["WH3".into()]);
        assert_eq!(state.active_filter_count(), 2);

        state.reset();
        assert_eq!(state, FilterState::new());
        assert_eq!(state.active_filter_count(), 0);

        state.reset();
        assert_eq!(state, FilterState::new());
    }

    #[test]
    fn parse_date_input_handles_empty_valid_and_garbage() {
        assert_eq!(parse_date_input(FilterField::StartDate, "  "), Ok(None));
        assert_eq!(
            parse_date_input(FilterField::StartDate, "2025-02-01"),
            Ok(Some(date(2025, 2, 1)))
        );
        let err = parse_date_input(FilterField::EndDate, "02/01/2025").unwrap_err();
        assert_eq!(err.field(), FilterField::EndDate);
    }
}
