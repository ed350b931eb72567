//! 포화압력, 비열, 습도비 회귀 테스트.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use psychro_toolbox::air::{
    actual_humidity_ratio, cp_dry_air, cp_vapor, cp_water, estimate_humidity_ratio_constant_cp,
    estimate_humidity_ratio_variable_cp, humidity_ratio_from_vapor_pressure,
    saturated_humidity_ratio, saturation_pressure, saturation_pressure_over_ice,
    saturation_pressure_over_water, HumidityRatioEstimator,
};
use psychro_toolbox::PsychroError;

fn assert_close(actual: f64, expected: f64, rel: f64) {
    assert!(
        ((actual - expected) / expected).abs() < rel,
        "actual={actual} expected={expected}"
    );
}

#[test]
fn saturation_pressure_at_65f() {
    let p = saturation_pressure(65.0).expect("p_ws");
    assert_close(p, 0.3057, 1e-3);
}

#[test]
fn saturation_pressure_branch_switch_at_freezing() {
    let below = saturation_pressure(31.9).expect("ice branch");
    let above = saturation_pressure(32.1).expect("water branch");
    assert_eq!(below, saturation_pressure_over_ice(31.9).expect("ice"));
    assert_eq!(above, saturation_pressure_over_water(32.1).expect("water"));
    assert_close(below, 0.08824, 1e-3);
    assert_close(above, 0.08901, 1e-3);
    // 32 °F는 물 분기
    assert_eq!(
        saturation_pressure(32.0).expect("at freezing"),
        saturation_pressure_over_water(32.0).expect("water")
    );
}

#[test]
fn water_saturation_pressure_strictly_increasing() {
    let mut prev = 0.0;
    for t in 40..=100 {
        let p = saturation_pressure_over_water(t as f64).expect("p_ws");
        assert!(p > prev, "t={t} p={p} prev={prev}");
        prev = p;
    }
}

#[test]
fn water_branch_accepts_subfreezing_temperatures() {
    let p = saturation_pressure_over_water(0.0).expect("supercooled water");
    let p_ice = saturation_pressure_over_ice(0.0).expect("ice");
    assert!(p > p_ice);
}

#[test]
fn saturation_pressure_rejects_out_of_domain() {
    for t in [-200.0, 250.0, f64::NAN, f64::INFINITY] {
        let err = saturation_pressure(t).expect_err("out of domain");
        assert!(
            matches!(err, PsychroError::InvalidInput { parameter: "t_db_f", .. }),
            "t={t} err={err:?}"
        );
    }
}

#[test]
fn specific_heats_near_reference_values() {
    assert_abs_diff_eq!(cp_water(65.0).expect("cp_w"), 0.99887, epsilon = 1e-4);
    assert_abs_diff_eq!(cp_vapor(65.0).expect("cp_v"), 0.44475, epsilon = 1e-4);
    assert_abs_diff_eq!(cp_dry_air(65.0, 65.0).expect("cp_da"), 0.24033, epsilon = 1e-4);
    assert_abs_diff_eq!(cp_water(32.0).expect("cp_w"), 1.00449, epsilon = 1e-4);
}

#[test]
fn specific_heat_rejects_nan() {
    assert!(cp_dry_air(65.0, f64::NAN).is_err());
    assert!(cp_vapor(f64::NEG_INFINITY).is_err());
}

#[test]
fn saturated_humidity_ratio_at_65f() {
    assert_close(saturated_humidity_ratio(65.0).expect("ws"), 0.01321, 1e-3);
}

#[test]
fn saturated_humidity_ratio_positive_and_increasing() {
    let mut prev = 0.0;
    let mut t = -148.0;
    while t <= 200.0 {
        let ws = saturated_humidity_ratio(t).expect("ws");
        assert!(ws > prev, "t={t} ws={ws} prev={prev}");
        prev = ws;
        t += 4.0;
    }
}

#[test]
fn actual_humidity_ratio_scenario() {
    assert_close(actual_humidity_ratio(65.0, 0.14).expect("w"), 0.001817, 1e-3);
    // 분압에 대해 비선형이므로 0.14일 때 값의 1/100이 아니다.
    let p_w = saturation_pressure_over_water(65.0).expect("p_ws") * 0.0014;
    let w_dry = actual_humidity_ratio(65.0, 0.0014).expect("w");
    assert_relative_eq!(w_dry, 0.62198 * p_w / (14.696 - p_w), max_relative = 1e-12);
    assert_close(w_dry, 1.8116e-5, 1e-3);
}

#[test]
fn actual_humidity_ratio_zero_and_monotone_in_rh() {
    assert_eq!(actual_humidity_ratio(65.0, 0.0).expect("dry air"), 0.0);
    let mut prev = 0.0;
    for i in 1..=10 {
        let w = actual_humidity_ratio(70.0, i as f64 / 10.0).expect("w");
        assert!(w >= prev);
        prev = w;
    }
    // 빙점 이상에서 RH=1이면 포화 습도비와 같다.
    assert_relative_eq!(
        actual_humidity_ratio(65.0, 1.0).expect("w"),
        saturated_humidity_ratio(65.0).expect("ws"),
        max_relative = 1e-12
    );
}

#[test]
fn actual_humidity_ratio_rejects_percent_input() {
    let err = actual_humidity_ratio(65.0, 14.0).expect_err("percent");
    assert!(matches!(err, PsychroError::InvalidInput { parameter: "rh", .. }));
    assert!(actual_humidity_ratio(65.0, -0.1).is_err());
}

#[test]
fn humidity_ratio_physical_limit() {
    let err = humidity_ratio_from_vapor_pressure(14.696).expect_err("p_w >= p_atm");
    assert!(matches!(err, PsychroError::PhysicalLimitExceeded { .. }));
    let err = humidity_ratio_from_vapor_pressure(-0.1).expect_err("negative");
    assert!(matches!(err, PsychroError::InvalidInput { parameter: "p_w_psi", .. }));
}

#[test]
fn variable_cp_estimate_at_saturation_matches_ws() {
    for t in [40.0, 65.0, 90.0] {
        assert_relative_eq!(
            estimate_humidity_ratio_variable_cp(t, t).expect("w0"),
            saturated_humidity_ratio(t).expect("ws"),
            max_relative = 1e-9
        );
    }
}

#[test]
fn estimators_agree_closely() {
    let w0 = estimate_humidity_ratio_variable_cp(65.0, 50.0).expect("w0");
    let w1 = estimate_humidity_ratio_constant_cp(65.0, 50.0).expect("w1");
    assert!(w0 > 0.0 && w1 > 0.0);
    assert_abs_diff_eq!(w0, w1, epsilon = 5e-5);
    assert_eq!(
        HumidityRatioEstimator::ConstantCp.estimate(65.0, 50.0).expect("enum"),
        w1
    );
    assert_eq!(HumidityRatioEstimator::default(), HumidityRatioEstimator::VariableCp);
}
