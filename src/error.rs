use std::fmt;

use thiserror::Error;

/// 습구온도 반복 계산이 멈춘 원인.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// 최대 반복 횟수 도달
    IterationLimit,
    /// 외부에서 지정한 시간 예산 초과
    TimeBudget,
    /// 시도값이 상관식 유효 온도 범위를 벗어남
    LeftDomain,
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::IterationLimit => write!(f, "최대 반복 횟수 도달"),
            StopReason::TimeBudget => write!(f, "시간 예산 초과"),
            StopReason::LeftDomain => write!(f, "유효 온도 범위 이탈"),
        }
    }
}

/// 습공기 물성 계산 중 발생 가능한 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PsychroError {
    /// 상관식 범위를 벗어난 입력 (온도, 상대습도, 압력, 고도)
    #[error("입력값 오류 `{parameter}` = {value}: {reason}")]
    InvalidInput {
        parameter: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// 수증기 분압이 대기압 이상이 되어 습도비 분모가 0 이하가 됨
    #[error(
        "물리적 한계 초과: 수증기압 {vapor_pressure_psi:.5} psia >= 대기압 {atmospheric_pressure_psi:.3} psia"
    )]
    PhysicalLimitExceeded {
        vapor_pressure_psi: f64,
        atmospheric_pressure_psi: f64,
    },

    /// 습구온도 반복 계산 수렴 실패
    #[error(
        "습구온도 수렴 실패({reason}): 반복 {iterations}회, 마지막 시도값 {last_trial_f} °F, 잔차 {residual:e}"
    )]
    ConvergenceFailure {
        iterations: usize,
        last_trial_f: f64,
        residual: f64,
        reason: StopReason,
    },
}

pub type Result<T> = std::result::Result<T, PsychroError>;
