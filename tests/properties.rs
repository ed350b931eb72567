//! 파생 물성 및 상태점 테스트.
use approx::{assert_abs_diff_eq, assert_relative_eq};
use psychro_toolbox::air::{
    degree_of_saturation, density, dew_point, enthalpy, grains_of_moisture,
    relative_humidity_from_dew_point, specific_volume, standard_atmospheric_pressure,
    vapor_partial_pressure, wet_bulb_regression, HumidAirState, WetBulbOptions,
};
use psychro_toolbox::units::{celsius_to_fahrenheit, fahrenheit_to_celsius};
use psychro_toolbox::PsychroError;

#[test]
fn stull_regression_at_20c_50pct() {
    let t_wb_f = wet_bulb_regression(celsius_to_fahrenheit(20.0), 0.5).expect("stull");
    assert_abs_diff_eq!(fahrenheit_to_celsius(t_wb_f), 13.7, epsilon = 0.05);
}

#[test]
fn dew_point_round_trip_through_magnus() {
    let t_dp = dew_point(65.0, 0.5).expect("dew point");
    assert_abs_diff_eq!(t_dp, 45.99, epsilon = 0.05);
    let rh = relative_humidity_from_dew_point(65.0, t_dp).expect("rh");
    assert_abs_diff_eq!(rh, 0.5, epsilon = 0.01);
}

#[test]
fn dew_point_requires_moisture() {
    assert!(matches!(
        dew_point(65.0, 0.0),
        Err(PsychroError::InvalidInput { parameter: "rh", .. })
    ));
}

#[test]
fn standard_pressure_by_elevation() {
    assert_relative_eq!(
        standard_atmospheric_pressure(0.0).expect("sea level"),
        14.696,
        max_relative = 1e-12
    );
    assert_abs_diff_eq!(
        standard_atmospheric_pressure(5_000.0).expect("5000 ft"),
        12.228,
        epsilon = 1e-3
    );
    assert!(standard_atmospheric_pressure(-1_400.0).is_err());
    assert!(standard_atmospheric_pressure(30_001.0).is_err());
}

#[test]
fn volume_density_and_moisture_content() {
    let v = specific_volume(65.0, 0.5).expect("v");
    assert_abs_diff_eq!(v, 13.363, epsilon = 1e-3);
    assert_relative_eq!(density(65.0, 0.5).expect("rho"), 1.0 / v, max_relative = 1e-12);
    assert_abs_diff_eq!(grains_of_moisture(65.0, 0.5).expect("gr"), 45.77, epsilon = 0.01);
    assert_abs_diff_eq!(degree_of_saturation(65.0, 0.5).expect("mu"), 49.47, epsilon = 0.01);
    assert_abs_diff_eq!(vapor_partial_pressure(65.0, 0.5).expect("p_w"), 0.15287, epsilon = 1e-4);
}

#[test]
fn moist_air_enthalpy() {
    let h = enthalpy(65.0, 0.5, &WetBulbOptions::default()).expect("h");
    assert_abs_diff_eq!(h, 22.80, epsilon = 0.01);
}

#[test]
fn humid_air_state_collects_properties() {
    let state = HumidAirState::evaluate(65.0, 0.5, &WetBulbOptions::default()).expect("state");
    assert_abs_diff_eq!(state.wet_bulb_f, 54.44, epsilon = 0.01);
    assert!(state.wet_bulb_depression_f() > 0.0);
    assert_abs_diff_eq!(state.enthalpy_btu_per_lbm(), 22.80, epsilon = 0.01);
    let t_dp = state.dew_point_f;
    assert_abs_diff_eq!(t_dp, 45.99, epsilon = 0.05);
    assert!(t_dp < state.wet_bulb_f && state.wet_bulb_f < state.dry_bulb_f);
    assert!(state.humidity_ratio < state.saturated_humidity_ratio);

    let text = state.to_string();
    assert!(text.contains("T_wb"));
    assert!(text.contains("T_dp  = 45.99 °F"));
    assert!(text.contains("Btu/lbm"));
}

#[test]
fn humid_air_state_propagates_solver_failure() {
    let err = HumidAirState::evaluate(65.0, 0.0, &WetBulbOptions::default()).expect_err("dry");
    assert!(matches!(err, PsychroError::ConvergenceFailure { .. }));
}
