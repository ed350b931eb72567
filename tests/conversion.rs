use approx::assert_abs_diff_eq;
use psychro_toolbox::conversion::{self, ConversionError};
use psychro_toolbox::quantity::QuantityKind;
use psychro_toolbox::units::{
    convert_pressure, kj_per_kg_k_to_btu_per_lbm_f, pascal_to_psi, to_fahrenheit, PressureUnit,
    TemperatureUnit,
};

#[test]
fn temperature_strings() {
    let f = conversion::convert(QuantityKind::Temperature, 20.0, "C", "F").expect("C->F");
    assert_abs_diff_eq!(f, 68.0, epsilon = 1e-9);
    let k = conversion::convert_named("temperature", 65.0, "°F", "K").expect("F->K");
    assert_abs_diff_eq!(k, 291.483_333, epsilon = 1e-5);
    assert_abs_diff_eq!(to_fahrenheit(491.67, TemperatureUnit::Rankine), 32.0, epsilon = 1e-9);
}

#[test]
fn temperature_difference_ignores_offset() {
    let dt = conversion::convert(QuantityKind::TemperatureDifference, 18.0, "F", "C")
        .expect("dF->dC");
    assert_abs_diff_eq!(dt, 10.0, epsilon = 1e-9);
}

#[test]
fn pressure_factors() {
    assert_abs_diff_eq!(pascal_to_psi(6_894.757_293_168_361), 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(
        convert_pressure(1.0, PressureUnit::Atm, PressureUnit::Psi),
        14.696,
        epsilon = 1e-3
    );
    let kpa = conversion::convert_named("p", 14.696, "psia", "kPa").expect("psi->kPa");
    assert_abs_diff_eq!(kpa, 101.325, epsilon = 1e-2);
}

#[test]
fn specific_heat_and_enthalpy_factors() {
    assert_abs_diff_eq!(kj_per_kg_k_to_btu_per_lbm_f(1.0), 0.238846, epsilon = 1e-12);
    let btu = conversion::convert_named("cp", 4.186, "kJ/kg-K", "Btu/lbm-F").expect("cp");
    assert_abs_diff_eq!(btu, 0.99981, epsilon = 1e-4);
    let kj = conversion::convert_named("h", 10.0, "Btu/lbm", "kJ/kg").expect("h");
    assert_abs_diff_eq!(kj, 23.26, epsilon = 1e-9);
}

#[test]
fn unknown_units_and_quantities() {
    assert_eq!(
        conversion::convert_named("temperature", 1.0, "X", "F"),
        Err(ConversionError::UnknownUnit("X".to_string()))
    );
    assert_eq!(
        conversion::convert_named("length", 1.0, "m", "ft"),
        Err(ConversionError::UnsupportedQuantity("length".to_string()))
    );
}
