use serde::Serialize;

/// Coarse reading of a percent-of-baseline figure: short bars are good.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EfficiencyBand {
    /// Below half of the baseline.
    Good,
    /// Below 80% of the baseline.
    Moderate,
    Critical,
}

impl EfficiencyBand {
    pub fn from_percent(percent_remaining: u32) -> Self {
        if percent_remaining < 50 {
            EfficiencyBand::Good
        } else if percent_remaining < 80 {
            EfficiencyBand::Moderate
        } else {
            EfficiencyBand::Critical
        }
    }
}

/// One bar of the bullet chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulletRow {
    pub label: &'static str,
    pub percent_remaining: u32,
    pub band: EfficiencyBand,
}

impl BulletRow {
    pub(crate) fn new(label: &'static str, percent_remaining: u32) -> Self {
        Self {
            label,
            percent_remaining,
            band: EfficiencyBand::from_percent(percent_remaining),
        }
    }
}

/// The headline figures above the chart.
///
/// Until an optimization strategy has been applied the headline is the baseline cost
/// alone; afterwards it shows the projected cost and what was recovered.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum Headline {
    Baseline {
        annual_cost: f64,
    },
    Optimized {
        annual_cost: f64,
        annual_savings: f64,
        /// The projected cost as a percent of the baseline cost.
        footprint_percent: u32,
        hours_recovered_per_year: f64,
    },
}
