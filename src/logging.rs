//! tracing 기반 로그 초기화.
//!
//! 로그는 표준 오류로 출력하여 계산 결과(표준 출력)와 섞이지 않게 한다.
//! `RUST_LOG` 환경변수가 설정되어 있으면 설정 파일/CLI 레벨보다 우선한다.

use tracing_subscriber::EnvFilter;

/// 필터 문자열이 잘못되었을 때 사용하는 기본 레벨
pub const FALLBACK_LEVEL: &str = "warn";

/// 로그 필터를 결정한다. `RUST_LOG` → 지정 레벨 → `warn` 순으로 적용한다.
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

/// 전역 tracing subscriber를 설치한다. 이미 설치되어 있으면 아무 것도 하지 않는다.
pub fn init_logging(level: &str) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(build_filter(level))
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
