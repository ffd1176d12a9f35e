use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Staleness classification of an upstream source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FreshnessStatus {
    Ok,
    Warn,
    Error,
}

impl FreshnessStatus {
    /// Classify a source age against its thresholds.
    ///
    /// Sources without configured thresholds always count as fresh; an age
    /// exactly at a threshold already trips it.
    pub fn for_age(
        age_hours: f64,
        warn_threshold_hours: Option<f64>,
        error_threshold_hours: Option<f64>,
    ) -> Self {
        if error_threshold_hours.is_some_and(|t| age_hours >= t) {
            FreshnessStatus::Error
        } else if warn_threshold_hours.is_some_and(|t| age_hours >= t) {
            FreshnessStatus::Warn
        } else {
            FreshnessStatus::Ok
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FreshnessStatus::Ok => "OK",
            FreshnessStatus::Warn => "WARN",
            FreshnessStatus::Error => "ERROR",
        }
    }
}

/// Freshness of one upstream source relative to its thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceFreshness {
    pub source_name: String,
    pub last_updated: DateTime<Utc>,
    pub status: FreshnessStatus,
    #[serde(default)]
    pub warn_threshold_hours: Option<f64>,
    #[serde(default)]
    pub error_threshold_hours: Option<f64>,
    pub age_hours: f64,
}

impl SourceFreshness {
    /// Build a row with its status derived from the age and thresholds, so
    /// the displayed status can never disagree with the displayed age.
    pub fn classified(
        source_name: impl Into<String>,
        last_updated: DateTime<Utc>,
        warn_threshold_hours: Option<f64>,
        error_threshold_hours: Option<f64>,
        age_hours: f64,
    ) -> Self {
        Self {
            source_name: source_name.into(),
            last_updated,
            status: FreshnessStatus::for_age(
                age_hours,
                warn_threshold_hours,
                error_threshold_hours,
            ),
            warn_threshold_hours,
            error_threshold_hours,
            age_hours,
        }
    }
}

/// `{ data, meta }` envelope for the freshness endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreshnessResponse {
    pub data: Vec<SourceFreshness>,
    pub meta: FreshnessMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FreshnessMeta {
    pub last_check: DateTime<Utc>,
}

/// Outcome of one dbt-style model test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    Pass,
    Fail,
}

impl TestStatus {
    pub fn label(&self) -> &'static str {
        match self {
            TestStatus::Pass => "PASS",
            TestStatus::Fail => "FAIL",
        }
    }
}

/// One model/test combination from the latest test run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelTest {
    pub model_name: String,
    pub test_name: String,
    pub status: TestStatus,
    pub last_run: DateTime<Utc>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// `{ data, meta }` envelope for the model-tests endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelTestsResponse {
    pub data: Vec<ModelTest>,
    pub meta: ModelTestsMeta,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelTestsMeta {
    pub total_tests: usize,
    pub passed_tests: usize,
    pub failed_tests: usize,
    pub last_run: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_below_thresholds_is_ok() {
        assert_eq!(
            FreshnessStatus::for_age(0.5, Some(2.0), Some(6.0)),
            FreshnessStatus::Ok
        );
    }

    #[test]
    fn age_at_or_past_warn_threshold_warns() {
        assert_eq!(
            FreshnessStatus::for_age(2.0, Some(2.0), Some(6.0)),
            FreshnessStatus::Warn
        );
        assert_eq!(
            FreshnessStatus::for_age(2.5, Some(2.0), Some(6.0)),
            FreshnessStatus::Warn
        );
    }

    #[test]
    fn age_past_error_threshold_errors() {
        assert_eq!(
            FreshnessStatus::for_age(6.5, Some(2.0), Some(6.0)),
            FreshnessStatus::Error
        );
    }

    #[test]
    fn missing_thresholds_always_count_as_fresh() {
        assert_eq!(FreshnessStatus::for_age(48.0, None, None), FreshnessStatus::Ok);
        // A configured error threshold still applies without a warn one.
        assert_eq!(
            FreshnessStatus::for_age(8.0, None, Some(6.0)),
            FreshnessStatus::Error
        );
    }

    #[test]
    fn status_serializes_to_upper_case_wire_values() {
        assert_eq!(
            serde_json::to_string(&FreshnessStatus::Warn).unwrap(),
            r#""WARN""#
        );
        assert_eq!(serde_json::to_string(&TestStatus::Fail).unwrap(), r#""FAIL""#);
    }
}
