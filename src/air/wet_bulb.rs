//! 반복법 습구온도 계산.
//!
//! Al-Ismaili & Al-Azri (2016), "Simple Iterative Approach to Calculate Wet-Bulb
//! Temperature for Estimating Evaporative Cooling Efficiency"의 방식을 따른다.
//! 건구온도에서 출발해 추정 습도비가 실제 습도비에 tolerance 이내로 들어올 때까지
//! 시도 습구온도(°F 크기)를 곱셈 보정한다. Newton 법이 아닌 휴리스틱 보정이므로
//! 수렴이 보장되지 않으며, 반복 상한과 시간 예산으로 종료를 보장한다.

use std::time::{Duration, Instant};

use tracing::{debug, trace, warn};

use super::constants::{MAX_TEMPERATURE_F, MIN_TEMPERATURE_F};
use super::humidity_ratio::{actual_humidity_ratio, HumidityRatioEstimator};
use super::{validate_relative_humidity, validate_temperature};
use crate::error::{PsychroError, Result, StopReason};

/// 기본 수렴 허용오차 (습도비 절대차)
pub const DEFAULT_TOLERANCE: f64 = 1e-6;
/// 기본 최대 반복 횟수
pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// 습구온도 반복 계산 옵션.
#[derive(Debug, Clone, PartialEq)]
pub struct WetBulbOptions {
    /// 수렴 허용오차 |W - W_est|
    pub tolerance: f64,
    /// 최대 보정 횟수
    pub max_iterations: usize,
    /// 계산 시간 상한. None이면 반복 상한만 적용한다.
    pub time_budget: Option<Duration>,
    /// 반복 중 사용할 습도비 추정식
    pub estimator: HumidityRatioEstimator,
    /// 초기 시도값 [°F]. None이면 건구온도에서 시작한다.
    pub initial_guess_f: Option<f64>,
}

impl Default for WetBulbOptions {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
            time_budget: None,
            estimator: HumidityRatioEstimator::VariableCp,
            initial_guess_f: None,
        }
    }
}

impl WetBulbOptions {
    pub fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
    pub fn max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }
    pub fn time_budget(mut self, budget: Duration) -> Self {
        self.time_budget = Some(budget);
        self
    }
    pub fn estimator(mut self, e: HumidityRatioEstimator) -> Self {
        self.estimator = e;
        self
    }
    pub fn initial_guess_f(mut self, t_f: f64) -> Self {
        self.initial_guess_f = Some(t_f);
        self
    }
}

/// 수렴한 습구온도와 반복 정보.
#[derive(Debug, Clone, PartialEq)]
pub struct WetBulbSolution {
    /// 습구온도 [°F]
    pub wet_bulb_f: f64,
    /// 수행한 보정 횟수 (초기 추정이 이미 수렴했으면 0)
    pub iterations: usize,
    /// 최종 잔차 W - W_est
    pub residual: f64,
    /// 목표 습도비 W(T_db, RH)
    pub target_humidity_ratio: f64,
}

/// 기본 옵션으로 습구온도 [°F]를 계산한다. 상대습도는 0~1 분율.
pub fn solve_wet_bulb(t_db_f: f64, rh: f64) -> Result<f64> {
    solve_wet_bulb_with(t_db_f, rh, &WetBulbOptions::default()).map(|s| s.wet_bulb_f)
}

/// 옵션을 지정해 습구온도를 계산하고 반복 정보를 함께 돌려준다.
pub fn solve_wet_bulb_with(
    t_db_f: f64,
    rh: f64,
    options: &WetBulbOptions,
) -> Result<WetBulbSolution> {
    validate_temperature("t_db_f", t_db_f)?;
    validate_relative_humidity(rh)?;
    if !options.tolerance.is_finite() || options.tolerance <= 0.0 {
        return Err(PsychroError::InvalidInput {
            parameter: "tolerance",
            value: options.tolerance,
            reason: "허용오차는 양의 유한값이어야 합니다",
        });
    }

    let started = Instant::now();
    let w_target = actual_humidity_ratio(t_db_f, rh)?;
    let mut t_wb = match options.initial_guess_f {
        Some(guess) => {
            validate_temperature("initial_guess_f", guess)?;
            guess
        }
        None => t_db_f,
    };
    let mut w_est = options.estimator.estimate(t_db_f, t_wb)?;
    let mut iterations = 0usize;
    debug!(
        t_db_f,
        rh,
        w_target,
        initial_t_wb_f = t_wb,
        estimator = ?options.estimator,
        "wet-bulb solve started"
    );

    while (w_target - w_est).abs() > options.tolerance {
        let residual = w_target - w_est;
        if iterations >= options.max_iterations {
            return Err(convergence_failure(iterations, t_wb, residual, StopReason::IterationLimit));
        }
        if let Some(budget) = options.time_budget {
            if started.elapsed() >= budget {
                return Err(convergence_failure(iterations, t_wb, residual, StopReason::TimeBudget));
            }
        }

        // W가 0이면 delta가 무한대가 되어 시도값이 -inf로 튄다 (아래 범위 검사에서 종료).
        let delta = (residual.abs() / w_target) / 100.0;
        if residual.abs() > 0.0 {
            t_wb *= 1.0 - delta;
        } else {
            // 루프 조건(|잔차| > tolerance) 아래에서는 도달할 수 없는 분기.
            // 잔차 부호에 따라 방향을 바꾸는 ASHRAE 절차와 대조하기 전까지 구조만 유지한다.
            t_wb *= 1.0 + delta;
        }
        iterations += 1;

        if !t_wb.is_finite() || !(MIN_TEMPERATURE_F..=MAX_TEMPERATURE_F).contains(&t_wb) {
            return Err(convergence_failure(iterations, t_wb, residual, StopReason::LeftDomain));
        }
        w_est = options.estimator.estimate(t_db_f, t_wb)?;
        trace!(iteration = iterations, t_wb_f = t_wb, w_est, "wet-bulb step");
    }

    let residual = w_target - w_est;
    debug!(t_db_f, rh, wet_bulb_f = t_wb, iterations, residual, "wet-bulb solve converged");
    Ok(WetBulbSolution {
        wet_bulb_f: t_wb,
        iterations,
        residual,
        target_humidity_ratio: w_target,
    })
}

fn convergence_failure(
    iterations: usize,
    last_trial_f: f64,
    residual: f64,
    reason: StopReason,
) -> PsychroError {
    warn!(iterations, last_trial_f, residual, %reason, "wet-bulb solve did not converge");
    PsychroError::ConvergenceFailure {
        iterations,
        last_trial_f,
        residual,
        reason,
    }
}
