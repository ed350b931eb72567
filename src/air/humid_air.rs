use std::fmt;

use super::humidity_ratio::{actual_humidity_ratio, saturated_humidity_ratio};
use super::properties::{
    degree_of_saturation, density, dew_point, enthalpy_dry_air, enthalpy_vapor,
    grains_of_moisture, specific_volume, vapor_partial_pressure,
};
use super::saturation::saturation_pressure;
use super::wet_bulb::{solve_wet_bulb_with, WetBulbOptions};
use crate::error::Result;

/// 한 상태점(건구온도, 상대습도)의 습공기 물성 묶음. 영국 단위계.
#[derive(Debug, Clone, PartialEq)]
pub struct HumidAirState {
    /// 건구온도 [°F]
    pub dry_bulb_f: f64,
    /// 상대습도 [0~1]
    pub relative_humidity: f64,
    /// 습구온도 [°F] (반복법)
    pub wet_bulb_f: f64,
    /// 습구온도 계산 반복 횟수
    pub wet_bulb_iterations: usize,
    /// 이슬점 [°F]
    pub dew_point_f: f64,
    /// 포화 수증기압 [psia]
    pub saturation_pressure_psi: f64,
    /// 수증기 분압 [psia]
    pub vapor_pressure_psi: f64,
    /// 습도비 [lbm/lbm]
    pub humidity_ratio: f64,
    /// 포화 습도비 [lbm/lbm]
    pub saturated_humidity_ratio: f64,
    /// 포화도 [%]
    pub degree_of_saturation_pct: f64,
    /// 수분량 [grains/lbm]
    pub grains_per_lbm: f64,
    /// 비체적 [ft³/lbm]
    pub specific_volume_ft3_per_lbm: f64,
    /// 밀도 [lbm/ft³]
    pub density_lbm_per_ft3: f64,
    /// 건공기 엔탈피 [Btu/lbm]
    pub enthalpy_dry_air_btu_per_lbm: f64,
    /// 수증기 엔탈피 [Btu/lbm]
    pub enthalpy_vapor_btu_per_lbm: f64,
}

impl HumidAirState {
    /// 건구온도 [°F]와 상대습도(0~1)로 모든 물성을 계산한다.
    pub fn evaluate(dry_bulb_f: f64, rh: f64, options: &WetBulbOptions) -> Result<Self> {
        // RH = 0이면 반복 계산이 먼저 실패하므로 이슬점은 항상 정의된다.
        let solution = solve_wet_bulb_with(dry_bulb_f, rh, options)?;
        let dew_point_f = dew_point(dry_bulb_f, rh)?;
        Ok(Self {
            dry_bulb_f,
            relative_humidity: rh,
            wet_bulb_f: solution.wet_bulb_f,
            wet_bulb_iterations: solution.iterations,
            dew_point_f,
            saturation_pressure_psi: saturation_pressure(dry_bulb_f)?,
            vapor_pressure_psi: vapor_partial_pressure(dry_bulb_f, rh)?,
            humidity_ratio: actual_humidity_ratio(dry_bulb_f, rh)?,
            saturated_humidity_ratio: saturated_humidity_ratio(dry_bulb_f)?,
            degree_of_saturation_pct: degree_of_saturation(dry_bulb_f, rh)?,
            grains_per_lbm: grains_of_moisture(dry_bulb_f, rh)?,
            specific_volume_ft3_per_lbm: specific_volume(dry_bulb_f, rh)?,
            density_lbm_per_ft3: density(dry_bulb_f, rh)?,
            enthalpy_dry_air_btu_per_lbm: enthalpy_dry_air(dry_bulb_f, solution.wet_bulb_f)?,
            enthalpy_vapor_btu_per_lbm: enthalpy_vapor(dry_bulb_f, rh)?,
        })
    }

    /// 습공기 전엔탈피 [Btu/lbm 건공기]
    pub fn enthalpy_btu_per_lbm(&self) -> f64 {
        self.enthalpy_dry_air_btu_per_lbm + self.enthalpy_vapor_btu_per_lbm
    }

    /// 습구 강하 T_db - T_wb [°F]
    pub fn wet_bulb_depression_f(&self) -> f64 {
        self.dry_bulb_f - self.wet_bulb_f
    }
}

impl fmt::Display for HumidAirState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "T_db  = {:.2} °F", self.dry_bulb_f)?;
        writeln!(f, "RH    = {:.2} %", self.relative_humidity * 100.0)?;
        writeln!(f, "T_wb  = {:.2} °F ({} iter)", self.wet_bulb_f, self.wet_bulb_iterations)?;
        writeln!(f, "T_dp  = {:.2} °F", self.dew_point_f)?;
        writeln!(f, "P_ws  = {:.5} psia", self.saturation_pressure_psi)?;
        writeln!(f, "P_w   = {:.5} psia", self.vapor_pressure_psi)?;
        writeln!(f, "W     = {:.6} lbm/lbm", self.humidity_ratio)?;
        writeln!(f, "W_s   = {:.6} lbm/lbm", self.saturated_humidity_ratio)?;
        writeln!(f, "mu    = {:.2} %", self.degree_of_saturation_pct)?;
        writeln!(f, "gr    = {:.2} gr/lbm", self.grains_per_lbm)?;
        writeln!(f, "v     = {:.4} ft³/lbm", self.specific_volume_ft3_per_lbm)?;
        writeln!(f, "rho   = {:.5} lbm/ft³", self.density_lbm_per_ft3)?;
        write!(f, "h     = {:.3} Btu/lbm", self.enthalpy_btu_per_lbm())
    }
}
