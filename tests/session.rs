//! Tests for the simulation session and the view models it derives.
mod common;
use common::*;
use friction::prelude::*;

fn create_reference_session() -> SimulationSession {
    SimulationSession::new(create_reference_config(), &create_reference_baseline())
}

#[test]
fn test_session_starts_at_configured_parameters() {
    let session = create_reference_session();

    assert_eq!(*session.parameters(), TunableParameters::new(8, 3, 6, 12));
    assert_eq!(session.parameters(), session.initial_parameters());
    assert_close(session.baseline_cost(), 50.0 * 250_000.0);
    assert_close(session.projection().time_loss_per_run_hours, 530.5);
    assert!(!session.is_optimized());
}

#[test]
fn test_edit_recomputes_projection() {
    let mut session = create_reference_session();
    let before = session.projection().annual_projected_cost;

    let after = session.set_approvals(1).annual_projected_cost;
    assert!(after < before);
    assert_eq!(session.parameters().approvals(), 1);

    let expected = session.model().project(session.parameters());
    assert_eq!(*session.projection(), expected);
}

#[test]
fn test_edits_are_clamped() {
    let mut session = create_reference_session();
    session.set_team_size(500);
    session.set_approvals(-3);
    session.set_tool_count(0);
    session.set_monthly_volume(10_000);

    assert_eq!(*session.parameters(), TunableParameters::new(50, 0, 1, 500));
}

#[test]
fn test_baseline_cost_is_fixed_across_edits() {
    let mut session = create_reference_session();
    let baseline = session.baseline_cost();

    session.set(Parameter::TeamSize, 2);
    session.apply_auto_optimize();
    session.set(Parameter::MonthlyVolume, 300);

    assert_eq!(session.baseline_cost(), baseline);
    assert_eq!(session.projection().baseline_cost, baseline);
}

#[test]
fn test_bullet_rows_at_start() {
    let session = create_reference_session();
    let rows = session.bullet_rows();

    let labels: Vec<_> = rows.iter().map(|r| r.label).collect();
    assert_eq!(
        labels,
        vec![
            "Financial Cost",
            "Team Overhead",
            "Approval Drag",
            "Tool Complexity"
        ]
    );
    // The projection exceeds the baseline, so the cost bar is capped.
    assert!(rows.iter().all(|r| r.percent_remaining == 100));
    assert!(rows.iter().all(|r| r.band == EfficiencyBand::Critical));
}

#[test]
fn test_bullet_rows_compare_against_initial_values() {
    let mut session = create_reference_session();
    session.set_team_size(4);
    session.set_approvals(0);
    session.set_tool_count(3);

    let rows = session.bullet_rows();
    assert_eq!(rows[1].percent_remaining, 50);
    assert_eq!(rows[1].band, EfficiencyBand::Moderate);
    assert_eq!(rows[2].percent_remaining, 0);
    assert_eq!(rows[2].band, EfficiencyBand::Good);
    assert_eq!(rows[3].percent_remaining, 50);
}

#[test]
fn test_zero_configured_approvals_row_is_zero() {
    let config = create_topology_config(0, &["a"], 0.0);
    let mut session = SimulationSession::new(config, &BaselineAnalysis::new(1000.0));
    session.set_approvals(5);

    assert_eq!(session.bullet_rows()[2].percent_remaining, 0);
}

#[test]
fn test_auto_optimize_updates_session() {
    let saved = SavedAnalysis::default();
    let mut session = saved.session();
    assert_close(session.baseline_cost(), 68_752_800.0);

    let projection = *session.apply_auto_optimize();
    assert_eq!(*session.parameters(), TunableParameters::new(4, 1, 3, 12));
    assert_close(projection.time_loss_per_run_hours, 166.15);
    assert_close(projection.annual_projected_cost, 21_533_040.0);
    assert_close(projection.annual_savings, 47_219_760.0);
    assert!(session.is_optimized());

    match session.headline() {
        Headline::Optimized {
            annual_cost,
            annual_savings,
            footprint_percent,
            hours_recovered_per_year,
        } => {
            assert_close(annual_cost, 21_533_040.0);
            assert_close(annual_savings, 47_219_760.0);
            assert_eq!(footprint_percent, 31);
            assert_close(hours_recovered_per_year, 52_466.4);
        }
        other => panic!("Expected an optimized headline, got {:?}", other),
    }

    assert_eq!(session.bullet_rows()[0].percent_remaining, 31);
    assert_eq!(session.bullet_rows()[0].band, EfficiencyBand::Good);
}

#[test]
fn test_reset_restores_configured_state() {
    let mut session = create_reference_session();
    let original = *session.projection();

    session.set_monthly_volume(200);
    session.apply_auto_optimize();
    session.reset();

    assert_eq!(session.parameters(), session.initial_parameters());
    assert_eq!(*session.projection(), original);
    assert!(!session.is_optimized());
    assert_eq!(
        session.headline(),
        Headline::Baseline {
            annual_cost: 12_500_000.0
        }
    );
}

#[test]
fn test_builder_applies_edits_then_optimizes() {
    let session = SimulationSession::builder(create_reference_config(), create_reference_baseline())
        .with_edit(Parameter::TeamSize, 20)
        .with_edit(Parameter::ToolCount, 8)
        .optimized(true)
        .build();

    // 20 * 0.6 = 12, 3 * 0.5 = 1, 8 * 0.5 = 4 capped at 3
    assert_eq!(*session.parameters(), TunableParameters::new(12, 1, 3, 12));
    assert_eq!(*session.initial_parameters(), TunableParameters::new(8, 3, 6, 12));
    assert!(session.is_optimized());
}

#[test]
fn test_efficiency_band_thresholds() {
    assert_eq!(EfficiencyBand::from_percent(0), EfficiencyBand::Good);
    assert_eq!(EfficiencyBand::from_percent(49), EfficiencyBand::Good);
    assert_eq!(EfficiencyBand::from_percent(50), EfficiencyBand::Moderate);
    assert_eq!(EfficiencyBand::from_percent(79), EfficiencyBand::Moderate);
    assert_eq!(EfficiencyBand::from_percent(80), EfficiencyBand::Critical);
    assert_eq!(EfficiencyBand::from_percent(100), EfficiencyBand::Critical);
}
