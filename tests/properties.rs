//! Property tests for the invariants that must hold over every input.
mod common;
use common::*;
use friction::prelude::*;
use proptest::prelude::*;

fn arb_config() -> impl Strategy<Value = WorkflowConfig> {
    (
        1u32..=60,
        0u32..=12,
        0usize..=16,
        0.0f64..200.0,
        0.0f64..=100.0,
        prop::option::of(0u32..=600),
        prop::option::of(0.0f64..5_000_000.0),
    )
        .prop_map(
            |(people, approvals, tool_count, delay, rejection, volume, salary)| WorkflowConfig {
                people_involved: people,
                approvals_per_task: approvals,
                tools_used: (0..tool_count).map(|i| format!("tool-{}", i)).collect(),
                avg_delay_hours: delay,
                rejection_rate_percent: rejection,
                monthly_volume: volume,
                avg_annual_salary: salary,
                ..Default::default()
            },
        )
}

fn arb_parameters() -> impl Strategy<Value = TunableParameters> {
    (0u32..=60, 0u32..=12, 0u32..=20, 0u32..=600).prop_map(|(team, approvals, tools, volume)| {
        TunableParameters::new(team, approvals, tools, volume)
    })
}

proptest! {
    #[test]
    fn prop_non_positive_baseline_is_zero(current in -1e9f64..1e9, baseline in -1e9f64..=0.0) {
        prop_assert_eq!(percent_remaining(current, baseline), 0);
    }

    #[test]
    fn prop_percent_is_bounded_and_monotonic(
        a in 0.0f64..1e7,
        b in 0.0f64..1e7,
        baseline in 1e-3f64..1e7,
    ) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let low_pct = percent_remaining(low, baseline);
        let high_pct = percent_remaining(high, baseline);
        prop_assert!(low_pct <= 100 && high_pct <= 100);
        prop_assert!(low_pct <= high_pct);
    }

    #[test]
    fn prop_savings_and_projection_add_up_to_baseline(
        config in arb_config(),
        loss in 0.0f64..1e7,
        params in arb_parameters(),
    ) {
        let model = FrictionModel::new(&config, &BaselineAnalysis::new(loss));
        let result = model.project(&params);
        let tolerance = 1e-9 * result.baseline_cost.abs().max(result.annual_projected_cost.abs()).max(1.0);
        prop_assert!((result.annual_savings + result.annual_projected_cost - result.baseline_cost).abs() <= tolerance);
        prop_assert!(result.time_loss_per_run_hours >= 0.0);
        prop_assert!(result.time_loss_per_run_hours.is_finite());
    }

    #[test]
    fn prop_configured_parameters_follow_calibration(config in arb_config()) {
        let params = TunableParameters::from_config(&config);
        let result = FrictionModel::new(&config, &BaselineAnalysis::new(1.0)).project(&params);

        let team = params.team_size() as f64;
        let approvals = params.approvals() as f64;
        let delay = config.avg_delay_hours;
        let per_gate = if config.approvals_per_task == 0 {
            0.0
        } else {
            delay * 0.5 / config.approvals_per_task as f64
        };
        let tool = (params.tool_count() as f64 - 2.0).max(0.0) * 0.5 * team;
        let approval = approvals * team * 1.5;
        let delay_impact = (delay * 0.5 + per_gate * approvals) * team;
        let rework = (delay_impact + approval) * (config.rejection_rate_percent / 100.0) * 1.5;
        let expected = (tool + approval + delay_impact + rework)
            * (config.effective_annual_salary() / 2000.0)
            * params.monthly_volume() as f64
            * 12.0;

        let tolerance = 1e-9 * expected.abs().max(1.0);
        prop_assert!((result.annual_projected_cost - expected).abs() <= tolerance);
    }

    #[test]
    fn prop_parameters_stay_in_bounds(params in arb_parameters(), edit in any::<i64>()) {
        for parameter in Parameter::ALL {
            let edited = params.with(parameter, edit);
            prop_assert!(parameter.bounds().contains(&edited.get(parameter)));
        }
    }

    #[test]
    fn prop_auto_optimize_hits_targets(params in arb_parameters()) {
        let optimized = auto_optimize(&params);
        prop_assert!(optimized.approvals() <= 2);
        prop_assert!(optimized.team_size() >= 2);
        prop_assert!((1..=3).contains(&optimized.tool_count()));
        prop_assert_eq!(optimized.monthly_volume(), params.monthly_volume());
    }

    #[test]
    fn prop_topology_shape(config in arb_config()) {
        let graph = topology::generate(&config);
        let nodes = graph.nodes();

        prop_assert_eq!(nodes[0].kind, StageKind::Start);
        prop_assert_eq!(nodes[nodes.len() - 1].kind, StageKind::End);
        prop_assert_eq!(graph.sequential_edges().count(), nodes.len() - 1);

        let approvals = nodes.iter().filter(|n| n.kind == StageKind::Approval).count();
        prop_assert_eq!(approvals as u32, config.approvals_per_task.min(4));

        let rework: Vec<_> = graph.edges().iter().filter(|e| e.kind == TransitionKind::Rework).collect();
        let expects_loop = config.rejection_rate_percent > 0.0 && nodes.len() > 2;
        prop_assert_eq!(rework.len(), usize::from(expects_loop));
        if let Some(edge) = rework.first() {
            prop_assert_eq!(edge.target.as_str(), "start");
        }

        prop_assert_eq!(graph, topology::generate(&config));
    }
}

#[test]
fn test_fixture_matches_reference_figures() {
    let config = create_reference_config();
    let result = FrictionModel::new(&config, &create_reference_baseline())
        .project(&TunableParameters::from_config(&config));
    assert_close(result.annual_projected_cost, 68_752_800.0);
}
