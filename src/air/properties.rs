//! 습구온도·습도비로부터 파생되는 습공기 물성.
//!
//! 모두 해수면 표준 대기압(14.696 psia)을 고정으로 사용한다.

use super::constants::{
    FREEZING_POINT_F, GRAINS_PER_LBM, LATENT_HEAT_VAPORIZATION, STD_ATM_PRESSURE_PSI,
};
use super::humidity_ratio::{actual_humidity_ratio, saturated_humidity_ratio};
use super::saturation::saturation_pressure;
use super::specific_heat::{cp_dry_air, cp_vapor};
use super::wet_bulb::{solve_wet_bulb_with, WetBulbOptions};
use super::{validate_relative_humidity, validate_temperature};
use crate::error::{PsychroError, Result};
use crate::units::{celsius_to_fahrenheit, fahrenheit_to_celsius, fahrenheit_to_rankine};

/// 허용 고도 하한 (사해) [ft]
pub const MIN_ELEVATION_FT: f64 = -1_400.0;
/// 허용 고도 상한 (에베레스트) [ft]
pub const MAX_ELEVATION_FT: f64 = 30_000.0;

/// 고도 [ft]에 따른 표준 대기압 [psia].
///
/// 참고용 값이다. 습도비 계산은 항상 해수면 표준 대기압을 사용한다.
pub fn standard_atmospheric_pressure(elevation_ft: f64) -> Result<f64> {
    if !elevation_ft.is_finite() || elevation_ft <= MIN_ELEVATION_FT || elevation_ft > MAX_ELEVATION_FT
    {
        return Err(PsychroError::InvalidInput {
            parameter: "elevation_ft",
            value: elevation_ft,
            reason: "고도는 -1400 ft 초과 30000 ft 이하여야 합니다",
        });
    }
    Ok(STD_ATM_PRESSURE_PSI * (1.0 - elevation_ft * 6.8754e-6).powf(5.2559))
}

/// 수증기 분압 [psia] = RH · Pws(T_db).
pub fn vapor_partial_pressure(t_db_f: f64, rh: f64) -> Result<f64> {
    validate_relative_humidity(rh)?;
    Ok(rh * saturation_pressure(t_db_f)?)
}

/// 이슬점 온도 [°F]. ASHRAE 영국 단위 회귀식.
pub fn dew_point(t_db_f: f64, rh: f64) -> Result<f64> {
    let p_w = vapor_partial_pressure(t_db_f, rh)?;
    if p_w <= 0.0 {
        return Err(PsychroError::InvalidInput {
            parameter: "rh",
            value: rh,
            reason: "이슬점 계산에는 0보다 큰 상대습도가 필요합니다",
        });
    }
    let a = p_w.ln();
    let t_dp = if t_db_f >= FREEZING_POINT_F {
        100.45 + 33.193 * a + 2.319 * a.powi(2) + 0.17074 * a.powi(3) + 1.2063 * p_w.powf(0.1984)
    } else {
        90.12 + 26.142 * a + 0.8927 * a.powi(2)
    };
    Ok(t_dp)
}

/// 건구·이슬점 온도로부터 상대습도(0~1). Magnus 근사 (a=17.625, b=243.04 °C).
pub fn relative_humidity_from_dew_point(t_db_f: f64, t_dp_f: f64) -> Result<f64> {
    validate_temperature("t_db_f", t_db_f)?;
    validate_temperature("t_dp_f", t_dp_f)?;
    const A: f64 = 17.625;
    const B: f64 = 243.04;
    let magnus = |t_c: f64| (A * t_c / (B + t_c)).exp();
    Ok(magnus(fahrenheit_to_celsius(t_dp_f)) / magnus(fahrenheit_to_celsius(t_db_f)))
}

/// 회귀식 습구온도 [°F]. Stull (2011), 해수면 기준.
pub fn wet_bulb_regression(t_db_f: f64, rh: f64) -> Result<f64> {
    validate_temperature("t_db_f", t_db_f)?;
    validate_relative_humidity(rh)?;
    let t = fahrenheit_to_celsius(t_db_f);
    let rh_pct = rh * 100.0;
    let t_wb_c = t * (0.151_977 * (rh_pct + 8.313_659).sqrt()).atan() + (t + rh_pct).atan()
        - (rh_pct - 1.676_331).atan()
        + 0.003_918_38 * rh_pct.powf(1.5) * (0.023_101 * rh_pct).atan()
        - 4.686_035;
    Ok(celsius_to_fahrenheit(t_wb_c))
}

/// 포화도 [%] = W / Ws · 100.
pub fn degree_of_saturation(t_db_f: f64, rh: f64) -> Result<f64> {
    let w = actual_humidity_ratio(t_db_f, rh)?;
    let ws = saturated_humidity_ratio(t_db_f)?;
    Ok(w / ws * 100.0)
}

/// 수분량 [grains/lbm 건공기].
pub fn grains_of_moisture(t_db_f: f64, rh: f64) -> Result<f64> {
    Ok(GRAINS_PER_LBM * actual_humidity_ratio(t_db_f, rh)?)
}

/// 비체적 [ft³/lbm 건공기].
pub fn specific_volume(t_db_f: f64, rh: f64) -> Result<f64> {
    let w = actual_humidity_ratio(t_db_f, rh)?;
    Ok(0.3704 * fahrenheit_to_rankine(t_db_f) * (1.0 + 1.6078 * w) / STD_ATM_PRESSURE_PSI)
}

/// 습공기 밀도 [lbm/ft³] = 1 / 비체적.
pub fn density(t_db_f: f64, rh: f64) -> Result<f64> {
    Ok(1.0 / specific_volume(t_db_f, rh)?)
}

/// 건공기 엔탈피 [Btu/lbm] = Cp_da(T_db, T_wb) · T_db.
pub fn enthalpy_dry_air(t_db_f: f64, t_wb_f: f64) -> Result<f64> {
    Ok(cp_dry_air(t_db_f, t_wb_f)? * t_db_f)
}

/// 수증기 엔탈피 [Btu/lbm 건공기] = W · (Cp_v · T_db + h_fg).
pub fn enthalpy_vapor(t_db_f: f64, rh: f64) -> Result<f64> {
    let w = actual_humidity_ratio(t_db_f, rh)?;
    Ok(w * (cp_vapor(t_db_f)? * t_db_f + LATENT_HEAT_VAPORIZATION))
}

/// 습공기 전엔탈피 [Btu/lbm 건공기]. 건공기 비열 평가에 습구온도가 필요하므로 반복 계산을 포함한다.
pub fn enthalpy(t_db_f: f64, rh: f64, options: &WetBulbOptions) -> Result<f64> {
    let t_wb = solve_wet_bulb_with(t_db_f, rh, options)?.wet_bulb_f;
    Ok(enthalpy_dry_air(t_db_f, t_wb)? + enthalpy_vapor(t_db_f, rh)?)
}
