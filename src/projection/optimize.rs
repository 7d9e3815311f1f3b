use super::parameters::TunableParameters;

/// Applies best-practice targets to a set of parameters.
///
/// Approvals are halved toward at most two gates, the team shrinks to 60% with a floor
/// of two people, and tools are halved toward one to three. Monthly volume is left
/// alone. The heuristic never consults the projection model; callers re-project the
/// returned parameters themselves.
///
/// This is a single shot transform, not a fixed point: applying it again keeps
/// shrinking the inputs.
///
/// ```
/// use friction::projection::{TunableParameters, auto_optimize};
///
/// let current = TunableParameters::new(10, 4, 6, 50);
/// let optimized = auto_optimize(&current);
/// assert_eq!(optimized.approvals(), 2);
/// assert_eq!(optimized.team_size(), 6);
/// assert_eq!(optimized.tool_count(), 3);
/// ```
pub fn auto_optimize(current: &TunableParameters) -> TunableParameters {
    let approvals = ((current.approvals() as f64 * 0.5).floor() as u32).clamp(0, 2);
    let team_size = ((current.team_size() as f64 * 0.6).floor() as u32).max(2);
    let tool_count = ((current.tool_count() as f64 * 0.5).floor() as u32).clamp(1, 3);

    TunableParameters::new(team_size, approvals, tool_count, current.monthly_volume())
}
