//! 습공기 계산 로직을 라이브러리로 분리하여 CLI 외의 호출자도 같은 함수를 쓰게 한다.

pub mod air;
pub mod app;
pub mod config;
pub mod conversion;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod quantity;
pub mod ui_cli;
pub mod units;

pub use air::{
    actual_humidity_ratio, cp_dry_air, cp_vapor, cp_water, estimate_humidity_ratio_constant_cp,
    estimate_humidity_ratio_variable_cp, saturated_humidity_ratio, saturation_pressure,
    saturation_pressure_over_ice, saturation_pressure_over_water, solve_wet_bulb,
    solve_wet_bulb_with, HumidAirState, HumidityRatioEstimator, WetBulbOptions, WetBulbSolution,
};
pub use error::{PsychroError, Result, StopReason};
