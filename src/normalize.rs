/// Expresses `current` as a share of `baseline`, in whole percent.
///
/// The result is what the dashboard calls "percent of baseline remaining": 100 means
/// the scenario consumes as much as the baseline did, lower is better. Values above
/// the baseline are capped at 100 rather than reported as an overrun.
///
/// A non-positive (or NaN) baseline has no meaningful ratio and yields 0.
///
/// ```
/// use friction::normalize::percent_remaining;
///
/// assert_eq!(percent_remaining(25.0, 50.0), 50);
/// assert_eq!(percent_remaining(80.0, 50.0), 100);
/// assert_eq!(percent_remaining(10.0, 0.0), 0);
/// ```
pub fn percent_remaining(current: f64, baseline: f64) -> u32 {
    if baseline.is_nan() || baseline <= 0.0 {
        return 0;
    }
    let ratio = (current / baseline * 100.0).round();
    if ratio.is_nan() {
        return 0;
    }
    ratio.clamp(0.0, 100.0) as u32
}
