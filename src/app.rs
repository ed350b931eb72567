use std::path::Path;

use thiserror::Error;
use tracing::info;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::error::PsychroError;
use crate::i18n::{self, Translator};
use crate::ui_cli;
use crate::ui_cli::MenuChoice;

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일 입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 단위 변환 오류
    #[error("단위 변환 오류: {0}")]
    Conversion(#[from] ConversionError),
    /// 습공기 계산 오류
    #[error("습공기 계산 오류: {0}")]
    Psychro(#[from] PsychroError),
}

impl AppError {
    /// 메뉴 루프를 유지한 채 사용자에게 알리고 넘어갈 수 있는 오류인지 여부.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, AppError::Conversion(_) | AppError::Psychro(_))
    }
}

/// CLI 애플리케이션의 메인 루프를 실행한다. 설정 변경과 종료 시 설정 파일을 저장한다.
pub fn run(config: &mut Config, tr: &Translator, config_path: &Path) -> Result<(), AppError> {
    info!(path = %config_path.display(), "interactive menu started");
    loop {
        let outcome = match ui_cli::main_menu(tr)? {
            MenuChoice::WetBulb => ui_cli::handle_wet_bulb(tr, config),
            MenuChoice::MoistAirState => ui_cli::handle_state(tr, config),
            MenuChoice::Saturation => ui_cli::handle_saturation(tr, config),
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr, config),
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save(config_path)?;
                Ok(())
            }
            MenuChoice::Exit => {
                config.save(config_path)?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        };
        match outcome {
            Err(err) if err.is_recoverable() => {
                println!("{}: {err}", tr.t(i18n::keys::ERROR_PREFIX));
            }
            other => other?,
        }
    }
    Ok(())
}
