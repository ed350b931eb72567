//! 반복법 습구온도 계산 회귀 테스트.
use std::time::Duration;

use approx::assert_abs_diff_eq;
use psychro_toolbox::air::{
    actual_humidity_ratio, solve_wet_bulb, solve_wet_bulb_with, HumidityRatioEstimator,
    WetBulbOptions,
};
use psychro_toolbox::{PsychroError, StopReason};

#[test]
fn wet_bulb_scenario_65f_14pct() {
    let t_wb = solve_wet_bulb(65.0, 0.14).expect("wet-bulb");
    assert_abs_diff_eq!(t_wb, 45.26, epsilon = 0.01);
}

#[test]
fn solution_reports_iterations_and_residual() {
    let options = WetBulbOptions::default();
    let solution = solve_wet_bulb_with(65.0, 0.14, &options).expect("wet-bulb");
    assert_eq!(solution.iterations, 69);
    assert!(solution.residual.abs() <= options.tolerance);
    assert_abs_diff_eq!(
        solution.target_humidity_ratio,
        actual_humidity_ratio(65.0, 0.14).expect("w"),
        epsilon = 1e-15
    );
}

#[test]
fn wet_bulb_below_dry_bulb_for_unsaturated_air() {
    for (t_db, rh, expected) in [(80.0, 0.5, 66.76), (95.0, 0.4, 75.21), (40.0, 0.8, 37.55)] {
        let t_wb = solve_wet_bulb(t_db, rh).expect("wet-bulb");
        assert!(t_wb < t_db, "t_db={t_db} t_wb={t_wb}");
        assert_abs_diff_eq!(t_wb, expected, epsilon = 0.02);
    }
}

#[test]
fn saturated_air_converges_immediately() {
    let solution = solve_wet_bulb_with(65.0, 1.0, &WetBulbOptions::default()).expect("saturated");
    assert_eq!(solution.iterations, 0);
    assert_eq!(solution.wet_bulb_f, 65.0);
}

#[test]
fn resolving_from_converged_value_takes_at_most_one_step() {
    let first = solve_wet_bulb_with(65.0, 0.14, &WetBulbOptions::default()).expect("first");
    let options = WetBulbOptions::default().initial_guess_f(first.wet_bulb_f);
    let second = solve_wet_bulb_with(65.0, 0.14, &options).expect("second");
    assert!(second.iterations <= 1);
    assert_abs_diff_eq!(second.wet_bulb_f, first.wet_bulb_f, epsilon = 1e-3);
}

#[test]
fn constant_cp_estimator_gives_close_answer() {
    let options = WetBulbOptions::default().estimator(HumidityRatioEstimator::ConstantCp);
    let solution = solve_wet_bulb_with(65.0, 0.14, &options).expect("constant cp");
    assert_abs_diff_eq!(solution.wet_bulb_f, 45.25, epsilon = 0.01);
}

#[test]
fn zero_humidity_fails_without_hanging() {
    let err = solve_wet_bulb(65.0, 0.0).expect_err("rh = 0");
    match err {
        PsychroError::ConvergenceFailure {
            iterations, reason, ..
        } => {
            assert_eq!(iterations, 1);
            assert_eq!(reason, StopReason::LeftDomain);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn very_dry_air_leaves_domain() {
    // 분율 0.0014에서는 첫 보정으로 시도값이 약 -408 °F가 된다.
    let err = solve_wet_bulb(65.0, 0.0014).expect_err("rh = 0.0014");
    match err {
        PsychroError::ConvergenceFailure {
            iterations,
            last_trial_f,
            reason,
            ..
        } => {
            assert_eq!(iterations, 1);
            assert_eq!(reason, StopReason::LeftDomain);
            assert_abs_diff_eq!(last_trial_f, -408.49, epsilon = 0.1);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn subzero_dry_bulb_hits_iteration_limit() {
    let options = WetBulbOptions::default().max_iterations(50);
    let err = solve_wet_bulb_with(-10.0, 0.5, &options).expect_err("t_db < 0");
    assert!(matches!(
        err,
        PsychroError::ConvergenceFailure {
            iterations: 50,
            reason: StopReason::IterationLimit,
            ..
        }
    ));
}

#[test]
fn exhausted_time_budget_stops_solver() {
    let options = WetBulbOptions::default().time_budget(Duration::ZERO);
    let err = solve_wet_bulb_with(65.0, 0.14, &options).expect_err("no time");
    assert!(matches!(
        err,
        PsychroError::ConvergenceFailure {
            iterations: 0,
            reason: StopReason::TimeBudget,
            ..
        }
    ));
}

#[test]
fn invalid_inputs_rejected_before_iterating() {
    assert!(matches!(
        solve_wet_bulb(65.0, 14.0),
        Err(PsychroError::InvalidInput { parameter: "rh", .. })
    ));
    assert!(matches!(
        solve_wet_bulb(f64::NAN, 0.5),
        Err(PsychroError::InvalidInput { parameter: "t_db_f", .. })
    ));
    let options = WetBulbOptions::default().tolerance(0.0);
    assert!(matches!(
        solve_wet_bulb_with(65.0, 0.5, &options),
        Err(PsychroError::InvalidInput { parameter: "tolerance", .. })
    ));
}
