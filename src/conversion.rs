use thiserror::Error;

use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    #[error("알 수 없는 단위: {0}")]
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    #[error("지원하지 않는 물리량: {0}")]
    UnsupportedQuantity(String),
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `F`, `C`, `psi`, `kPa`, `btu/lb-f`, `kj/kg` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::TemperatureDifference => {
            let from = parse_temperature_unit(from_unit_str)?.diff_unit();
            let to = parse_temperature_unit(to_unit_str)?.diff_unit();
            Ok(convert_temperature_diff(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::SpecificHeat => {
            let from = parse_specific_heat_unit(from_unit_str)?;
            let to = parse_specific_heat_unit(to_unit_str)?;
            Ok(convert_specific_heat(value, from, to))
        }
        QuantityKind::SpecificEnthalpy => {
            let from = parse_specific_enthalpy_unit(from_unit_str)?;
            let to = parse_specific_enthalpy_unit(to_unit_str)?;
            Ok(convert_specific_enthalpy(value, from, to))
        }
    }
}

/// 물리량 이름과 단위 문자열을 함께 받아 변환한다. CLI 진입점에서 사용한다.
pub fn convert_named(
    kind: &str,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    let kind = QuantityKind::parse(kind)
        .ok_or_else(|| ConversionError::UnsupportedQuantity(kind.to_string()))?;
    convert(kind, value, from_unit_str, to_unit_str)
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "r" | "rankine" | "°r" => Ok(TemperatureUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "psi" | "psia" => Ok(PressureUnit::Psi),
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "bar" | "bara" => Ok(PressureUnit::Bar),
        "atm" => Ok(PressureUnit::Atm),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_specific_heat_unit(s: &str) -> Result<SpecificHeatUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "btu/lb-f" | "btu/lbm-f" | "btu/(lbm·°f)" => Ok(SpecificHeatUnit::BtuPerLbmF),
        "kj/kg-k" | "kj/kgk" | "kj/(kg·k)" => Ok(SpecificHeatUnit::KjPerKgK),
        "j/kg-k" | "j/kgk" | "j/(kg·k)" => Ok(SpecificHeatUnit::JPerKgK),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

fn parse_specific_enthalpy_unit(s: &str) -> Result<SpecificEnthalpyUnit, ConversionError> {
    match s.trim().to_lowercase().as_str() {
        "btu/lb" | "btu/lbm" => Ok(SpecificEnthalpyUnit::BtuPerLbm),
        "kj/kg" => Ok(SpecificEnthalpyUnit::KjPerKg),
        "kcal/kg" => Ok(SpecificEnthalpyUnit::KcalPerKg),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
