//! 단위 정의 및 변환 모듈 모음.
//!
//! 습공기 계산은 단위 태그 없이 `f64`로 수행하므로, 경계에서 이 모듈로 명시적으로 환산한다.

pub mod pressure;
pub mod specific_enthalpy;
pub mod specific_heat;
pub mod temperature;

pub use pressure::{convert_pressure, pascal_to_psi, psi_to_pascal, PressureUnit};
pub use specific_enthalpy::{convert_specific_enthalpy, SpecificEnthalpyUnit};
pub use specific_heat::{
    convert_specific_heat, kj_per_kg_k_to_btu_per_lbm_f, SpecificHeatUnit,
};
pub use temperature::{
    celsius_to_fahrenheit, convert_temperature, convert_temperature_diff, fahrenheit_to_celsius,
    fahrenheit_to_kelvin, fahrenheit_to_rankine, from_fahrenheit, to_fahrenheit,
    TemperatureDiffUnit, TemperatureUnit,
};
