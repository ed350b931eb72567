use serde::{Deserialize, Serialize};

/// 비엔탈피 단위. 습공기 계산의 내부 기준은 Btu/lbm(건공기 기준)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpecificEnthalpyUnit {
    BtuPerLbm,
    KjPerKg,
    KcalPerKg,
}

const KJ_PER_KG_PER_BTU_PER_LBM: f64 = 2.326;

impl SpecificEnthalpyUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            SpecificEnthalpyUnit::BtuPerLbm => "Btu/lbm",
            SpecificEnthalpyUnit::KjPerKg => "kJ/kg",
            SpecificEnthalpyUnit::KcalPerKg => "kcal/kg",
        }
    }
}

fn to_base(value: f64, unit: SpecificEnthalpyUnit) -> f64 {
    match unit {
        SpecificEnthalpyUnit::BtuPerLbm => value,
        SpecificEnthalpyUnit::KjPerKg => value / KJ_PER_KG_PER_BTU_PER_LBM,
        SpecificEnthalpyUnit::KcalPerKg => value * 4.184 / KJ_PER_KG_PER_BTU_PER_LBM,
    }
}

fn from_base(value: f64, unit: SpecificEnthalpyUnit) -> f64 {
    match unit {
        SpecificEnthalpyUnit::BtuPerLbm => value,
        SpecificEnthalpyUnit::KjPerKg => value * KJ_PER_KG_PER_BTU_PER_LBM,
        SpecificEnthalpyUnit::KcalPerKg => value * KJ_PER_KG_PER_BTU_PER_LBM / 4.184,
    }
}

/// 비엔탈피를 변환한다.
pub fn convert_specific_enthalpy(
    value: f64,
    from: SpecificEnthalpyUnit,
    to: SpecificEnthalpyUnit,
) -> f64 {
    from_base(to_base(value, from), to)
}
