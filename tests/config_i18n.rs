//! 설정 파일과 언어팩 테스트.
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use psychro_toolbox::air::HumidityRatioEstimator;
use psychro_toolbox::config::{self, Config, UnitSystem};
use psychro_toolbox::i18n::{self, keys, Language, Translator};
use psychro_toolbox::units::{PressureUnit, TemperatureUnit};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("psychro_toolbox_{}_{name}", std::process::id()))
}

#[test]
fn missing_config_is_created_with_defaults() {
    let path = temp_path("default.toml");
    let _ = fs::remove_file(&path);
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg, Config::default());
    assert!(path.exists());
    let _ = fs::remove_file(&path);
}

#[test]
fn config_round_trip() {
    let path = temp_path("round_trip.toml");
    let mut cfg = Config::default();
    cfg.set_unit_system(UnitSystem::SI);
    cfg.language = Some("en".to_string());
    cfg.solver.max_iterations = 500;
    cfg.solver.time_budget_ms = Some(250);
    cfg.solver.estimator = HumidityRatioEstimator::ConstantCp;
    cfg.save(&path).expect("save");

    let loaded = config::load_or_default(&path).expect("load");
    assert_eq!(loaded, cfg);
    assert_eq!(loaded.default_units.temperature, TemperatureUnit::Celsius);
    assert_eq!(loaded.default_units.pressure, PressureUnit::KiloPascal);

    let options = loaded.solver.to_options();
    assert_eq!(options.max_iterations, 500);
    assert_eq!(options.time_budget, Some(Duration::from_millis(250)));
    assert_eq!(options.estimator, HumidityRatioEstimator::ConstantCp);
    let _ = fs::remove_file(&path);
}

#[test]
fn partial_config_fills_defaults() {
    let path = temp_path("partial.toml");
    fs::write(&path, "unit_system = \"SI\"\n[solver]\nestimator = \"constant_cp\"\n")
        .expect("write");
    let cfg = config::load_or_default(&path).expect("load");
    assert_eq!(cfg.unit_system, UnitSystem::SI);
    assert_eq!(cfg.solver.estimator, HumidityRatioEstimator::ConstantCp);
    assert_eq!(cfg.solver.max_iterations, 10_000);
    assert_eq!(cfg.logging.level, "warn");
    let _ = fs::remove_file(&path);
}

#[test]
fn malformed_config_is_an_error() {
    let path = temp_path("malformed.toml");
    fs::write(&path, "unit_system = [").expect("write");
    assert!(matches!(
        config::load_or_default(&path),
        Err(config::ConfigError::Serde(_))
    ));
    let _ = fs::remove_file(&path);
}

#[test]
fn translator_falls_back_to_korean() {
    let en = Translator::new("en-US");
    assert_eq!(en.language(), Language::En);
    assert_eq!(en.t(keys::APP_EXIT), "Exiting application.");
    let unknown = Translator::new("fr");
    assert_eq!(unknown.language(), Language::Ko);
    assert_eq!(unknown.t(keys::APP_EXIT), "프로그램을 종료합니다.");
}

#[test]
fn language_pack_overrides_builtin_strings() {
    let dir = temp_path("locales");
    fs::create_dir_all(&dir).expect("mkdir");
    fs::write(dir.join("en.toml"), "[general]\napp_exit = \"Bye\"\n").expect("write");
    let tr = Translator::new_with_pack("en", dir.to_str());
    assert_eq!(tr.t(keys::APP_EXIT), "Bye");
    assert_eq!(tr.t(keys::ERROR_PREFIX), "Error");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn language_resolution_order() {
    assert_eq!(i18n::resolve_language("en", Some("ko")), "en");
    assert_eq!(i18n::resolve_language("auto", Some("ko")), "ko");
    let detected = i18n::resolve_language("auto", None);
    assert!(detected == "ko" || detected == "en");
}
