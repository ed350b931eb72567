//! 습도비 계산 (ASHRAE 2005 식, Al-Ismaili & Al-Azri 2016 추정식).
//!
//! 모든 온도는 °F, 압력은 psia, 습도비는 lbm 수증기 / lbm 건공기.

use serde::{Deserialize, Serialize};

use super::constants::{
    CP_DRY_AIR_CONST, CP_VAPOR_CONST, CP_WATER_CONST, LATENT_HEAT_VAPORIZATION,
    MOLECULAR_MASS_RATIO, STD_ATM_PRESSURE_PSI,
};
use super::saturation::{saturation_pressure, saturation_pressure_over_water};
use super::specific_heat::{cp_dry_air, cp_vapor, cp_water};
use super::validate_relative_humidity;
use crate::error::{PsychroError, Result};

/// 수증기 분압 [psia]으로부터 표준 대기압 기준 습도비를 구한다.
///
/// 분압이 대기압 이상이면 분모가 0 이하가 되므로 `PhysicalLimitExceeded`를 돌려준다.
pub fn humidity_ratio_from_vapor_pressure(p_w_psi: f64) -> Result<f64> {
    if !p_w_psi.is_finite() || p_w_psi < 0.0 {
        return Err(PsychroError::InvalidInput {
            parameter: "p_w_psi",
            value: p_w_psi,
            reason: "수증기 분압은 0 이상의 유한값이어야 합니다",
        });
    }
    if p_w_psi >= STD_ATM_PRESSURE_PSI {
        return Err(PsychroError::PhysicalLimitExceeded {
            vapor_pressure_psi: p_w_psi,
            atmospheric_pressure_psi: STD_ATM_PRESSURE_PSI,
        });
    }
    Ok(MOLECULAR_MASS_RATIO * p_w_psi / (STD_ATM_PRESSURE_PSI - p_w_psi))
}

/// 포화 습도비 Ws(T). 빙점 미만은 얼음 위 포화압력을 사용한다.
pub fn saturated_humidity_ratio(t_db_f: f64) -> Result<f64> {
    humidity_ratio_from_vapor_pressure(saturation_pressure(t_db_f)?)
}

/// 건구온도와 상대습도(0~1)로부터 실제 습도비 W.
///
/// `saturated_humidity_ratio`와 달리 빙점 미만에서도 물 위 포화압력을 사용한다.
pub fn actual_humidity_ratio(t_db_f: f64, rh: f64) -> Result<f64> {
    validate_relative_humidity(rh)?;
    let p_ws = saturation_pressure_over_water(t_db_f)?;
    humidity_ratio_from_vapor_pressure(p_ws * rh)
}

/// 가변 비열 기반 습도비 추정 W0(T_db, T_wb). 습구온도 반복 계산의 기본 추정식.
///
/// 경험식이 화씨 눈금으로 맞춰져 있으므로 온도는 °F 크기 그대로 대입한다.
pub fn estimate_humidity_ratio_variable_cp(t_db_f: f64, t_wb_f: f64) -> Result<f64> {
    let cp_w = cp_water(t_wb_f)?;
    let cp_v = cp_vapor(t_db_f)?;
    let cp_da = cp_dry_air(t_db_f, t_wb_f)?;
    estimate_with(t_db_f, t_wb_f, cp_da, cp_w, cp_v)
}

/// 상수 비열 기반 습도비 추정 W1(T_db, T_wb).
pub fn estimate_humidity_ratio_constant_cp(t_db_f: f64, t_wb_f: f64) -> Result<f64> {
    estimate_with(t_db_f, t_wb_f, CP_DRY_AIR_CONST, CP_WATER_CONST, CP_VAPOR_CONST)
}

fn estimate_with(t_db_f: f64, t_wb_f: f64, cp_da: f64, cp_w: f64, cp_v: f64) -> Result<f64> {
    let h_fg = LATENT_HEAT_VAPORIZATION;
    let ws_wb = saturated_humidity_ratio(t_wb_f)?;
    let a = (h_fg - (cp_w - cp_v) * t_wb_f) * ws_wb - cp_da * (t_db_f - t_wb_f);
    let b = h_fg + cp_v * t_db_f - cp_w * t_wb_f;
    Ok(a / b)
}

/// 습구온도 반복 계산에 사용할 습도비 추정식 선택.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HumidityRatioEstimator {
    /// 온도 의존 비열 (W0)
    #[default]
    VariableCp,
    /// 상수 비열 (W1)
    ConstantCp,
}

impl HumidityRatioEstimator {
    /// 선택된 추정식으로 W(T_db, T_wb)를 계산한다.
    pub fn estimate(&self, t_db_f: f64, t_wb_f: f64) -> Result<f64> {
        match self {
            HumidityRatioEstimator::VariableCp => {
                estimate_humidity_ratio_variable_cp(t_db_f, t_wb_f)
            }
            HumidityRatioEstimator::ConstantCp => {
                estimate_humidity_ratio_constant_cp(t_db_f, t_wb_f)
            }
        }
    }
}
