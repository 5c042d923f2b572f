//! Reporting feature slice.
//!
//! Assembles the fixed aggregates the report widgets display: the severity
//! density distribution, the monthly trend series, and the composite risk
//! score. Like everything in this product, the data is hardcoded sample
//! data; the slice only shapes it for the presentation layer.

mod error;

pub use crate::error::ReportingError;

use dscope_domain::registry::{FeatureSlice, InitializedSlice};
use dscope_domain::reporting::{
    DensityBucket, RiskScore, SAMPLE_RISK_SCORE, TrendPoint, sample_density, sample_trend,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Everything the reporting tab renders, in one value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioReport {
    pub density: Vec<DensityBucket>,
    pub trend: Vec<TrendPoint>,
    pub risk: RiskScore,
}

impl PortfolioReport {
    /// The fixed sample report.
    #[must_use]
    pub fn sample() -> Self {
        Self {
            density: sample_density(),
            trend: sample_trend(),
            risk: RiskScore::new(SAMPLE_RISK_SCORE),
        }
    }

    /// Total vulnerabilities across all density buckets.
    #[must_use]
    pub fn density_total(&self) -> u32 {
        self.density.iter().map(|bucket| bucket.count).sum()
    }

    /// The most recent trend point, if the series is non-empty.
    #[must_use]
    pub fn latest_trend(&self) -> Option<&TrendPoint> {
        self.trend.last()
    }
}

/// Reporting feature state: the assembled report shared across sessions.
#[derive(Debug, Clone)]
pub struct Reporting {
    report: PortfolioReport,
}

impl FeatureSlice for Reporting {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl Reporting {
    #[must_use]
    pub const fn report(&self) -> &PortfolioReport {
        &self.report
    }
}

/// Initialize the reporting feature with the fixed sample aggregates.
///
/// # Errors
/// Infallible today; the `Result` keeps the slice signature uniform.
pub fn init() -> Result<InitializedSlice, ReportingError> {
    let report = PortfolioReport::sample();
    tracing::info!(
        total = report.density_total(),
        risk = report.risk.value(),
        "Reporting slice initialized"
    );
    Ok(InitializedSlice::new("reporting", Reporting { report }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dscope_domain::reporting::Severity;

    #[test]
    fn sample_report_matches_the_fixed_data() {
        let report = PortfolioReport::sample();

        assert_eq!(report.density.len(), 4);
        assert_eq!(report.density[0].severity, Severity::Critical);
        assert_eq!(report.density[0].count, 5);
        assert_eq!(report.density_total(), 67);

        assert_eq!(report.trend.len(), 6);
        assert_eq!(report.trend[0].month, "Apr");
        assert_eq!(report.latest_trend().map(|p| p.vulns), Some(69));

        assert_eq!(report.risk.value(), 64);
    }

    #[test]
    fn trend_is_oldest_first() {
        let report = PortfolioReport::sample();
        let vulns: Vec<_> = report.trend.iter().map(|p| p.vulns).collect();
        let mut sorted = vulns.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(vulns, sorted, "sample trend should decrease month over month");
    }

    #[test]
    fn risk_score_clamps_out_of_range_input() {
        assert_eq!(RiskScore::new(-20).value(), 0);
        assert_eq!(RiskScore::new(64).value(), 64);
        assert_eq!(RiskScore::new(250).value(), 100);
    }

    #[test]
    fn report_round_trips_through_json() {
        let report = PortfolioReport::sample();
        let json = serde_json::to_string(&report).unwrap();
        let back: PortfolioReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
