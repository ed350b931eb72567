//! 온도 의존 비열 상관식 (Al-Ismaili 2009, Raznjevic 1975).
//!
//! 상관식은 °C에서 J/(kg·K) 단위로 주어지므로 ×10⁻³ 으로 kJ/(kg·K)로 바꾼 뒤
//! Btu/(lbm·°F)로 환산한다.

use super::validate_temperature;
use crate::error::Result;
use crate::units::{fahrenheit_to_celsius, kj_per_kg_k_to_btu_per_lbm_f};

/// 물의 비열 [Btu/(lbm·°F)]. 입력은 습구온도 °F.
pub fn cp_water(t_wb_f: f64) -> Result<f64> {
    validate_temperature("t_wb_f", t_wb_f)?;
    let t = fahrenheit_to_celsius(t_wb_f);
    let cp_kj = (0.0265 * t * t - 1.7688 * t + 4205.6) * 1e-3;
    Ok(kj_per_kg_k_to_btu_per_lbm_f(cp_kj))
}

/// 수증기의 정압비열 [Btu/(lbm·°F)]. 입력은 건구온도 °F.
pub fn cp_vapor(t_db_f: f64) -> Result<f64> {
    validate_temperature("t_db_f", t_db_f)?;
    let t = fahrenheit_to_celsius(t_db_f);
    let cp_kj = (0.0016 * t * t + 0.1546 * t + 1858.7) * 1e-3;
    Ok(kj_per_kg_k_to_btu_per_lbm_f(cp_kj))
}

/// 건공기의 정압비열 [Btu/(lbm·°F)]. 건구·습구 평균온도(°C)에 대한 1차식.
pub fn cp_dry_air(t_db_f: f64, t_wb_f: f64) -> Result<f64> {
    validate_temperature("t_db_f", t_db_f)?;
    validate_temperature("t_wb_f", t_wb_f)?;
    let t_mean = (fahrenheit_to_celsius(t_db_f) + fahrenheit_to_celsius(t_wb_f)) / 2.0;
    let cp_kj = (0.0667 * t_mean + 1005.0) * 1e-3;
    Ok(kj_per_kg_k_to_btu_per_lbm_f(cp_kj))
}
