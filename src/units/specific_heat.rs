use serde::{Deserialize, Serialize};

/// 비열 단위. 내부 기준은 Btu/(lbm·°F)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificHeatUnit {
    BtuPerLbmF,
    KjPerKgK,
    JPerKgK,
}

/// kJ/(kg·K) → Btu/(lbm·°F) 환산 계수
pub const BTU_PER_LBM_F_PER_KJ_PER_KG_K: f64 = 0.238846;

impl SpecificHeatUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            SpecificHeatUnit::BtuPerLbmF => "Btu/(lbm·°F)",
            SpecificHeatUnit::KjPerKgK => "kJ/(kg·K)",
            SpecificHeatUnit::JPerKgK => "J/(kg·K)",
        }
    }
}

/// kJ/(kg·K) → Btu/(lbm·°F)
pub fn kj_per_kg_k_to_btu_per_lbm_f(value: f64) -> f64 {
    value * BTU_PER_LBM_F_PER_KJ_PER_KG_K
}

fn to_base(value: f64, unit: SpecificHeatUnit) -> f64 {
    match unit {
        SpecificHeatUnit::BtuPerLbmF => value,
        SpecificHeatUnit::KjPerKgK => kj_per_kg_k_to_btu_per_lbm_f(value),
        SpecificHeatUnit::JPerKgK => kj_per_kg_k_to_btu_per_lbm_f(value / 1000.0),
    }
}

fn from_base(value: f64, unit: SpecificHeatUnit) -> f64 {
    match unit {
        SpecificHeatUnit::BtuPerLbmF => value,
        SpecificHeatUnit::KjPerKgK => value / BTU_PER_LBM_F_PER_KJ_PER_KG_K,
        SpecificHeatUnit::JPerKgK => value / BTU_PER_LBM_F_PER_KJ_PER_KG_K * 1000.0,
    }
}

/// 비열을 변환한다.
pub fn convert_specific_heat(value: f64, from: SpecificHeatUnit, to: SpecificHeatUnit) -> f64 {
    from_base(to_base(value, from), to)
}
