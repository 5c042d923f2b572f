//! Reporting data: the fixed aggregates behind the report widgets
//! (severity density, monthly trend, composite risk score).

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Vulnerability severity, most severe first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Critical,
    High,
    Medium,
    Low,
}

/// One slice of the vulnerability density distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DensityBucket {
    pub severity: Severity,
    pub count: u32,
}

/// One point of the monthly vulnerability trend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub vulns: u32,
}

impl TrendPoint {
    pub fn new(month: impl Into<String>, vulns: u32) -> Self {
        Self { month: month.into(), vulns }
    }
}

/// Composite portfolio risk score on a 0..=100 scale.
///
/// Construction clamps out-of-range input instead of rejecting it, keeping
/// the reporting surface total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RiskScore(u8);

impl RiskScore {
    #[must_use]
    pub const fn new(score: i32) -> Self {
        let clamped = if score < 0 {
            0
        } else if score > 100 {
            100
        } else {
            score
        };
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        Self(clamped as u8)
    }

    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }
}

/// Sample risk score shown by the portfolio gauge.
pub const SAMPLE_RISK_SCORE: i32 = 64;

/// The fixed severity density distribution.
#[must_use]
pub fn sample_density() -> Vec<DensityBucket> {
    vec![
        DensityBucket { severity: Severity::Critical, count: 5 },
        DensityBucket { severity: Severity::High, count: 12 },
        DensityBucket { severity: Severity::Medium, count: 20 },
        DensityBucket { severity: Severity::Low, count: 30 },
    ]
}

/// The fixed monthly trend series, oldest first.
#[must_use]
pub fn sample_trend() -> Vec<TrendPoint> {
    vec![
        TrendPoint::new("Apr", 95),
        TrendPoint::new("May", 88),
        TrendPoint::new("Jun", 82),
        TrendPoint::new("Jul", 76),
        TrendPoint::new("Aug", 72),
        TrendPoint::new("Sep", 69),
    ]
}
