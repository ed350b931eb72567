use psychro_toolbox::config::{DefaultUnits, UnitSystem};
use psychro_toolbox::logging;
use psychro_toolbox::ui_cli::{parse_menu_choice, MenuChoice};
use psychro_toolbox::units::TemperatureUnit;

#[test]
fn menu_numbers_map_to_choices() {
    assert_eq!(parse_menu_choice("1\n"), Some(MenuChoice::WetBulb));
    assert_eq!(parse_menu_choice(" 2 "), Some(MenuChoice::MoistAirState));
    assert_eq!(parse_menu_choice("3"), Some(MenuChoice::Saturation));
    assert_eq!(parse_menu_choice("4"), Some(MenuChoice::UnitConversion));
    assert_eq!(parse_menu_choice("5"), Some(MenuChoice::Settings));
    assert_eq!(parse_menu_choice("0"), Some(MenuChoice::Exit));
    assert_eq!(parse_menu_choice("9"), None);
    assert_eq!(parse_menu_choice(""), None);
}

#[test]
fn unit_presets() {
    assert_eq!(
        DefaultUnits::for_system(UnitSystem::SI).temperature,
        TemperatureUnit::Celsius
    );
    assert_eq!(DefaultUnits::default().temperature, TemperatureUnit::Fahrenheit);
}

#[test]
fn invalid_log_filter_falls_back_to_warn() {
    std::env::remove_var("RUST_LOG");
    assert_eq!(
        logging::build_filter("psychro_toolbox=loud").to_string(),
        logging::FALLBACK_LEVEL
    );
    assert_eq!(logging::build_filter("debug").to_string(), "debug");
}
