/// 단위 변환기에서 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    TemperatureDifference,
    Pressure,
    SpecificHeat,
    SpecificEnthalpy,
}

impl QuantityKind {
    /// CLI 인자 문자열을 물리량 종류로 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "t" | "temp" | "temperature" => Some(QuantityKind::Temperature),
            "dt" | "temp-diff" | "temperature-difference" => {
                Some(QuantityKind::TemperatureDifference)
            }
            "p" | "pressure" => Some(QuantityKind::Pressure),
            "cp" | "specific-heat" => Some(QuantityKind::SpecificHeat),
            "h" | "enthalpy" | "specific-enthalpy" => Some(QuantityKind::SpecificEnthalpy),
            _ => None,
        }
    }
}
