//! 습공기 계산에 쓰이는 고정 상수 (영국 단위계).

/// 해수면 표준 대기압 [psia]. 습도비 계산에 고정값으로 사용한다.
pub const STD_ATM_PRESSURE_PSI: f64 = 14.696;

/// 수증기/건공기 분자량 비 Mw/Mda
pub const MOLECULAR_MASS_RATIO: f64 = 0.62198;

/// 증발 잠열 [Btu/lbm]
pub const LATENT_HEAT_VAPORIZATION: f64 = 1069.9;

/// 건공기 정압비열(상수) [Btu/(lbm·°F)]
pub const CP_DRY_AIR_CONST: f64 = 0.240;
/// 물 비열(상수) [Btu/(lbm·°F)]
pub const CP_WATER_CONST: f64 = 0.999;
/// 수증기 정압비열(상수) [Btu/(lbm·°F)]
pub const CP_VAPOR_CONST: f64 = 0.451;

/// 순수한 물의 빙점 [°F]. 포화압력 얼음/물 분기 기준.
pub const FREEZING_POINT_F: f64 = 32.0;

/// 상관식 유효 하한 [°F]
pub const MIN_TEMPERATURE_F: f64 = -148.0;
/// 상관식 유효 상한 [°F]. 포화압력이 대기압보다 충분히 낮은 영역으로 제한한다.
pub const MAX_TEMPERATURE_F: f64 = 200.0;

/// 1 lbm = 7000 grains
pub const GRAINS_PER_LBM: f64 = 7000.0;

/// Hyland-Wexler(1983) 얼음 위 포화압력 계수. ln(P[Pa]) 기준, T[K].
pub const ICE_COEFFS: [f64; 7] = [
    -5.674_535_9e3,
    6.392_524_7,
    -9.677_843e-3,
    6.221_570_1e-7,
    2.074_782_5e-9,
    -9.484_024_0e-13,
    4.163_501_9,
];

/// Hyland-Wexler(1983) 물 위 포화압력 계수. ln(P[Pa]) 기준, T[K].
pub const WATER_COEFFS: [f64; 6] = [
    -5.800_220_6e3,
    1.391_499_4,
    -4.864_023_9e-2,
    4.176_476_8e-5,
    -1.445_209_3e-8,
    6.545_967_3,
];
