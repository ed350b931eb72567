//! 수증기 포화압력. Hyland-Wexler 상관식 (ASHRAE Fundamentals).
//!
//! 입력 온도는 °F, 상관식은 K에서 평가하고 결과는 psia로 돌려준다.

use super::constants::{FREEZING_POINT_F, ICE_COEFFS, WATER_COEFFS};
use super::validate_temperature;
use crate::error::Result;
use crate::units::{fahrenheit_to_kelvin, pascal_to_psi};

/// 얼음 위 포화 수증기압 [psia].
///
/// ASHRAE 권장 범위는 `t_db_f < 32 °F`이다.
pub fn saturation_pressure_over_ice(t_db_f: f64) -> Result<f64> {
    validate_temperature("t_db_f", t_db_f)?;
    let t = fahrenheit_to_kelvin(t_db_f);
    let c = &ICE_COEFFS;
    let ln_p = c[0] / t
        + c[1]
        + c[2] * t
        + c[3] * t.powi(2)
        + c[4] * t.powi(3)
        + c[5] * t.powi(4)
        + c[6] * t.ln();
    Ok(pascal_to_psi(ln_p.exp()))
}

/// 물 위 포화 수증기압 [psia].
///
/// ASHRAE 권장 범위는 `t_db_f >= 32 °F`이지만, 실제 습도비 계산이 빙점 이하에서도
/// 물 분기를 사용하므로 라이브러리 전체 온도 범위에서 평가를 허용한다.
pub fn saturation_pressure_over_water(t_db_f: f64) -> Result<f64> {
    validate_temperature("t_db_f", t_db_f)?;
    let t = fahrenheit_to_kelvin(t_db_f);
    let c = &WATER_COEFFS;
    let ln_p = c[0] / t + c[1] + c[2] * t + c[3] * t.powi(2) + c[4] * t.powi(3) + c[5] * t.ln();
    Ok(pascal_to_psi(ln_p.exp()))
}

/// 포화 수증기압 [psia]. 32 °F 미만이면 얼음, 이상이면 물 분기.
pub fn saturation_pressure(t_db_f: f64) -> Result<f64> {
    if t_db_f < FREEZING_POINT_F {
        saturation_pressure_over_ice(t_db_f)
    } else {
        saturation_pressure_over_water(t_db_f)
    }
}
