//! 습공기(psychrometrics) 계산 모듈 모음. 영국 단위계(°F, psia, Btu/lbm) 기준.
//!
//! 의존 순서: 포화압력 → 비열 → 습도비 → 습구온도 반복 계산 → 파생 물성.

pub mod constants;
pub mod humid_air;
pub mod humidity_ratio;
pub mod properties;
pub mod saturation;
pub mod specific_heat;
pub mod wet_bulb;

pub use humid_air::HumidAirState;
pub use humidity_ratio::{
    actual_humidity_ratio, estimate_humidity_ratio_constant_cp,
    estimate_humidity_ratio_variable_cp, humidity_ratio_from_vapor_pressure,
    saturated_humidity_ratio, HumidityRatioEstimator,
};
pub use properties::*;
pub use saturation::{
    saturation_pressure, saturation_pressure_over_ice, saturation_pressure_over_water,
};
pub use specific_heat::{cp_dry_air, cp_vapor, cp_water};
pub use wet_bulb::{solve_wet_bulb, solve_wet_bulb_with, WetBulbOptions, WetBulbSolution};

use crate::error::{PsychroError, Result};
use constants::{MAX_TEMPERATURE_F, MIN_TEMPERATURE_F};

/// 온도 [°F]가 유한하고 상관식 범위(-148 ~ 200 °F) 안에 있는지 확인한다.
pub(crate) fn validate_temperature(parameter: &'static str, t_f: f64) -> Result<()> {
    if !t_f.is_finite() || !(MIN_TEMPERATURE_F..=MAX_TEMPERATURE_F).contains(&t_f) {
        return Err(PsychroError::InvalidInput {
            parameter,
            value: t_f,
            reason: "온도는 -148 °F 이상 200 °F 이하여야 합니다",
        });
    }
    Ok(())
}

/// 상대습도가 0~1 분율인지 확인한다. 백분율 입력은 거부한다.
pub(crate) fn validate_relative_humidity(rh: f64) -> Result<()> {
    if !rh.is_finite() || !(0.0..=1.0).contains(&rh) {
        return Err(PsychroError::InvalidInput {
            parameter: "rh",
            value: rh,
            reason: "상대습도는 0~1 사이의 분율이어야 합니다",
        });
    }
    Ok(())
}
