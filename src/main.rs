use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;

use psychro_toolbox::air::{self, HumidAirState, HumidityRatioEstimator};
use psychro_toolbox::app::{self, AppError};
use psychro_toolbox::config::{self, Config, DefaultUnits};
use psychro_toolbox::conversion;
use psychro_toolbox::i18n::{self, keys, Translator};
use psychro_toolbox::logging;
use psychro_toolbox::ui_cli;
use psychro_toolbox::units::{to_fahrenheit, TemperatureUnit};

#[derive(Parser, Debug)]
#[command(author, version, about = "Psychrometric toolbox (wet-bulb, moist air properties)")]
struct Cli {
    /// 설정 파일 경로
    #[arg(long, global = true, default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// 언어 (ko, en, auto)
    #[arg(long, global = true, default_value = "auto")]
    lang: String,

    /// 로그 필터 (예: warn, debug, psychro_toolbox=trace). 설정 파일 값보다 우선한다.
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// 건구온도와 상대습도로 습구온도를 반복 계산한다.
    WetBulb {
        #[command(flatten)]
        point: StatePointArgs,
        /// 습도비 추정식
        #[arg(long, value_enum)]
        estimator: Option<EstimatorArg>,
        /// 최대 반복 횟수
        #[arg(long)]
        max_iterations: Option<usize>,
    },
    /// 상태점의 모든 습공기 물성을 계산한다.
    State {
        #[command(flatten)]
        point: StatePointArgs,
    },
    /// 포화 수증기압과 비열을 계산한다.
    Saturation {
        /// 온도
        #[arg(long, allow_negative_numbers = true)]
        temperature: f64,
        /// 입력 온도 단위 (생략하면 설정의 표시 단위)
        #[arg(long, value_enum, ignore_case = true)]
        unit: Option<TemperatureUnitArg>,
    },
    /// 단위를 변환한다. 예: convert temperature 20 C F
    Convert {
        kind: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
        from: String,
        to: String,
    },
    /// 대화형 메뉴를 실행한다 (기본값).
    Menu,
}

#[derive(clap::Args, Debug)]
struct StatePointArgs {
    /// 건구온도
    #[arg(long, allow_negative_numbers = true)]
    dry_bulb: f64,
    /// 상대습도 (0~1 분율)
    #[arg(long)]
    rh: f64,
    /// 입력 온도 단위 (생략하면 설정의 표시 단위)
    #[arg(long, value_enum, ignore_case = true)]
    unit: Option<TemperatureUnitArg>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum TemperatureUnitArg {
    F,
    C,
    K,
    R,
}

impl From<TemperatureUnitArg> for TemperatureUnit {
    fn from(value: TemperatureUnitArg) -> Self {
        match value {
            TemperatureUnitArg::F => TemperatureUnit::Fahrenheit,
            TemperatureUnitArg::C => TemperatureUnit::Celsius,
            TemperatureUnitArg::K => TemperatureUnit::Kelvin,
            TemperatureUnitArg::R => TemperatureUnit::Rankine,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum EstimatorArg {
    Variable,
    Constant,
}

impl From<EstimatorArg> for HumidityRatioEstimator {
    fn from(value: EstimatorArg) -> Self {
        match value {
            EstimatorArg::Variable => HumidityRatioEstimator::VariableCp,
            EstimatorArg::Constant => HumidityRatioEstimator::ConstantCp,
        }
    }
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 하위 명령 또는 대화형 메뉴를 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut cfg = match config::load_or_default(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            let tr = Translator::new(&i18n::resolve_language(&cli.lang, None));
            eprintln!("{}: {}", tr.t(keys::ERROR_PREFIX), AppError::from(err));
            return ExitCode::FAILURE;
        }
    };

    let level = cli.log_level.as_deref().unwrap_or(&cfg.logging.level);
    logging::init_logging(level);
    debug!(path = %cli.config.display(), "configuration loaded");

    let lang = i18n::resolve_language(&cli.lang, cfg.language.as_deref());
    let tr = Translator::new_with_pack(&lang, None);

    match dispatch(cli.command, &mut cfg, &tr, &cli.config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{}: {err}", tr.t(keys::ERROR_PREFIX));
            ExitCode::FAILURE
        }
    }
}

fn dispatch(
    command: Option<Command>,
    cfg: &mut Config,
    tr: &Translator,
    config_path: &Path,
) -> Result<(), AppError> {
    match command.unwrap_or(Command::Menu) {
        Command::WetBulb {
            point,
            estimator,
            max_iterations,
        } => {
            let mut options = cfg.solver.to_options();
            if let Some(estimator) = estimator {
                options = options.estimator(estimator.into());
            }
            if let Some(n) = max_iterations {
                options = options.max_iterations(n);
            }
            let units = display_units(cfg, point.unit);
            let t_db_f = to_fahrenheit(point.dry_bulb, units.temperature);
            let solution = air::solve_wet_bulb_with(t_db_f, point.rh, &options)?;
            ui_cli::print_wet_bulb(tr, &units, t_db_f, point.rh, &solution);
        }
        Command::State { point } => {
            let units = display_units(cfg, point.unit);
            let t_db_f = to_fahrenheit(point.dry_bulb, units.temperature);
            let state = HumidAirState::evaluate(t_db_f, point.rh, &cfg.solver.to_options())?;
            ui_cli::print_state(tr, &units, &state);
        }
        Command::Saturation { temperature, unit } => {
            let units = display_units(cfg, unit);
            let t_f = to_fahrenheit(temperature, units.temperature);
            ui_cli::print_saturation(tr, &units, t_f)?;
        }
        Command::Convert {
            kind,
            value,
            from,
            to,
        } => {
            let result = conversion::convert_named(&kind, value, &from, &to)?;
            println!("{result} {to}");
        }
        Command::Menu => app::run(cfg, tr, config_path)?,
    }
    Ok(())
}

/// 설정의 표시 단위에 명령행 온도 단위를 덮어쓴다.
fn display_units(cfg: &Config, unit: Option<TemperatureUnitArg>) -> DefaultUnits {
    let mut units = cfg.default_units.clone();
    if let Some(unit) = unit {
        let unit = TemperatureUnit::from(unit);
        units.temperature = unit;
        units.temperature_diff = unit.diff_unit();
    }
    units
}
