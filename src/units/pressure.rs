use serde::{Deserialize, Serialize};

/// 절대 압력 단위. 내부 기준은 psia이며 게이지 압력은 다루지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Psi,
    Pascal,
    KiloPascal,
    Bar,
    Atm,
}

/// 1 psi = 6894.757... Pa
pub const PA_PER_PSI: f64 = 6_894.757_293_168_361;
const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_ATM: f64 = 101_325.0;

impl PressureUnit {
    /// 출력용 단위 기호.
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Psi => "psia",
            PressureUnit::Pascal => "Pa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Atm => "atm",
        }
    }
}

/// Pa → psi
pub fn pascal_to_psi(p_pa: f64) -> f64 {
    p_pa / PA_PER_PSI
}

/// psi → Pa
pub fn psi_to_pascal(p_psi: f64) -> f64 {
    p_psi * PA_PER_PSI
}

fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => psi_to_pascal(value),
        PressureUnit::Pascal => value,
        PressureUnit::KiloPascal => value * 1000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Atm => value * PA_PER_ATM,
    }
}

fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => pascal_to_psi(value_pa),
        PressureUnit::Pascal => value_pa,
        PressureUnit::KiloPascal => value_pa / 1000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Atm => value_pa / PA_PER_ATM,
    }
}

/// 절대 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    if from == to {
        return value;
    }
    from_pascal(to_pascal(value, from), to)
}
