use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다. 라이브러리 내부 기준은 화씨(°F)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Fahrenheit,
    Celsius,
    Kelvin,
    Rankine,
}

/// 온도차 단위를 정의한다. 스케일만 고려한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureDiffUnit {
    Fahrenheit,
    Rankine,
    Celsius,
    Kelvin,
}

impl TemperatureUnit {
    /// 출력용 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Rankine => "°R",
        }
    }

    /// 같은 눈금 간격을 가진 온도차 단위.
    pub fn diff_unit(&self) -> TemperatureDiffUnit {
        match self {
            TemperatureUnit::Fahrenheit => TemperatureDiffUnit::Fahrenheit,
            TemperatureUnit::Celsius => TemperatureDiffUnit::Celsius,
            TemperatureUnit::Kelvin => TemperatureDiffUnit::Kelvin,
            TemperatureUnit::Rankine => TemperatureDiffUnit::Rankine,
        }
    }
}

impl TemperatureDiffUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureDiffUnit::Fahrenheit => "Δ°F",
            TemperatureDiffUnit::Rankine => "Δ°R",
            TemperatureDiffUnit::Celsius => "Δ°C",
            TemperatureDiffUnit::Kelvin => "ΔK",
        }
    }
}

/// °F → °C
pub fn fahrenheit_to_celsius(t_f: f64) -> f64 {
    (t_f - 32.0) * 5.0 / 9.0
}

/// °C → °F
pub fn celsius_to_fahrenheit(t_c: f64) -> f64 {
    t_c * 9.0 / 5.0 + 32.0
}

/// °F → K. Hyland-Wexler 상관식은 절대온도(K)로 평가한다.
pub fn fahrenheit_to_kelvin(t_f: f64) -> f64 {
    fahrenheit_to_celsius(t_f) + 273.15
}

/// °F → °R
pub fn fahrenheit_to_rankine(t_f: f64) -> f64 {
    t_f + 459.67
}

/// 주어진 값을 화씨로 변환한다.
pub fn to_fahrenheit(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => value,
        TemperatureUnit::Celsius => celsius_to_fahrenheit(value),
        TemperatureUnit::Kelvin => celsius_to_fahrenheit(value - 273.15),
        TemperatureUnit::Rankine => value - 459.67,
    }
}

/// 화씨 값을 원하는 단위로 변환한다.
pub fn from_fahrenheit(value_f: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Fahrenheit => value_f,
        TemperatureUnit::Celsius => fahrenheit_to_celsius(value_f),
        TemperatureUnit::Kelvin => fahrenheit_to_kelvin(value_f),
        TemperatureUnit::Rankine => fahrenheit_to_rankine(value_f),
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_fahrenheit(to_fahrenheit(value, from), to)
}

/// 온도차를 서로 다른 단위로 변환한다. 절대 기준점 없이 배율만 고려한다.
pub fn convert_temperature_diff(
    value: f64,
    from: TemperatureDiffUnit,
    to: TemperatureDiffUnit,
) -> f64 {
    // 화씨/랭킨은 1:1, 섭씨/켈빈은 1:1.8 배율
    let base_f = match from {
        TemperatureDiffUnit::Fahrenheit | TemperatureDiffUnit::Rankine => value,
        TemperatureDiffUnit::Celsius | TemperatureDiffUnit::Kelvin => value * 9.0 / 5.0,
    };
    match to {
        TemperatureDiffUnit::Fahrenheit | TemperatureDiffUnit::Rankine => base_f,
        TemperatureDiffUnit::Celsius | TemperatureDiffUnit::Kelvin => base_f * 5.0 / 9.0,
    }
}
