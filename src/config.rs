use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;
use thiserror::Error;

use crate::air::wet_bulb::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use crate::air::{HumidityRatioEstimator, WetBulbOptions};
use crate::units::*;

/// 기본 설정 파일 이름
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// 출력 단위 시스템 프리셋을 정의한다. 계산 자체는 항상 영국 단위계로 수행한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// °F, psia, Btu 기준. 내부 계산 기본값.
    Imperial,
    /// °C, kPa, kJ 기준
    SI,
}

/// 각 물리량별 표시 단위 설정을 담는다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub temperature: TemperatureUnit,
    pub temperature_diff: TemperatureDiffUnit,
    pub pressure: PressureUnit,
    pub specific_heat: SpecificHeatUnit,
    pub specific_enthalpy: SpecificEnthalpyUnit,
}

impl DefaultUnits {
    /// 단위 시스템 프리셋에 맞는 표시 단위.
    pub fn for_system(system: UnitSystem) -> Self {
        match system {
            UnitSystem::Imperial => Self {
                temperature: TemperatureUnit::Fahrenheit,
                temperature_diff: TemperatureDiffUnit::Fahrenheit,
                pressure: PressureUnit::Psi,
                specific_heat: SpecificHeatUnit::BtuPerLbmF,
                specific_enthalpy: SpecificEnthalpyUnit::BtuPerLbm,
            },
            UnitSystem::SI => Self {
                temperature: TemperatureUnit::Celsius,
                temperature_diff: TemperatureDiffUnit::Kelvin,
                pressure: PressureUnit::KiloPascal,
                specific_heat: SpecificHeatUnit::KjPerKgK,
                specific_enthalpy: SpecificEnthalpyUnit::KjPerKg,
            },
        }
    }
}

impl Default for DefaultUnits {
    fn default() -> Self {
        Self::for_system(UnitSystem::Imperial)
    }
}

/// 습구온도 반복 계산 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// 수렴 허용오차 (습도비 절대차)
    pub tolerance: f64,
    /// 최대 반복 횟수
    pub max_iterations: usize,
    /// 시간 예산 [ms]. 생략하면 반복 상한만 적용한다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_budget_ms: Option<u64>,
    /// 습도비 추정식 (variable_cp | constant_cp)
    pub estimator: HumidityRatioEstimator,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            time_budget_ms: None,
            estimator: HumidityRatioEstimator::VariableCp,
        }
    }
}

impl SolverConfig {
    /// 반복 계산 옵션으로 변환한다.
    pub fn to_options(&self) -> WetBulbOptions {
        WetBulbOptions {
            tolerance: self.tolerance,
            max_iterations: self.max_iterations,
            time_budget: self.time_budget_ms.map(Duration::from_millis),
            estimator: self.estimator,
            initial_guess_f: None,
        }
    }
}

/// 로그 설정. `RUST_LOG` 환경변수가 있으면 그쪽이 우선한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// tracing 필터 문자열 (예: "warn", "psychro_toolbox=debug")
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    /// 언어 코드 (ko, en, auto). None이면 시스템 로케일을 따른다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    pub solver: SolverConfig,
    pub logging: LoggingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Imperial,
            default_units: DefaultUnits::default(),
            language: None,
            solver: SolverConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// 파일 입출력 오류
    #[error("파일 입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// TOML 역직렬화 오류
    #[error("설정 파싱 오류: {0}")]
    Serde(#[from] toml::de::Error),
    /// TOML 직렬화 오류
    #[error("설정 직렬화 오류: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        Ok(cfg)
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        Ok(cfg)
    }
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        save_config(self, path)
    }

    /// 단위 시스템을 바꾸고 표시 단위를 프리셋으로 맞춘다.
    pub fn set_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = DefaultUnits::for_system(system);
    }
}
