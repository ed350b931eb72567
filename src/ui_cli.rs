use std::io::{self, Write};

use crate::air::{
    self, cp_dry_air, cp_vapor, cp_water, saturation_pressure, saturation_pressure_over_ice,
    saturation_pressure_over_water, wet_bulb_regression, HumidAirState, WetBulbSolution,
};
use crate::app::AppError;
use crate::config::{Config, DefaultUnits, UnitSystem};
use crate::conversion;
use crate::i18n::{keys, Translator};
use crate::quantity::QuantityKind;
use crate::units::{
    convert_pressure, convert_specific_enthalpy, convert_specific_heat, convert_temperature_diff,
    from_fahrenheit, to_fahrenheit, PressureUnit, SpecificEnthalpyUnit, SpecificHeatUnit,
    TemperatureDiffUnit,
};

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    WetBulb,
    MoistAirState,
    Saturation,
    UnitConversion,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_WET_BULB));
    println!("{}", tr.t(keys::MAIN_MENU_STATE));
    println!("{}", tr.t(keys::MAIN_MENU_SATURATION));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match parse_menu_choice(&sel) {
            Some(choice) => return Ok(choice),
            None => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 메뉴 번호 문자열을 선택지로 해석한다.
pub fn parse_menu_choice(sel: &str) -> Option<MenuChoice> {
    match sel.trim() {
        "1" => Some(MenuChoice::WetBulb),
        "2" => Some(MenuChoice::MoistAirState),
        "3" => Some(MenuChoice::Saturation),
        "4" => Some(MenuChoice::UnitConversion),
        "5" => Some(MenuChoice::Settings),
        "0" => Some(MenuChoice::Exit),
        _ => None,
    }
}

/// 습구온도 메뉴를 처리한다.
pub fn handle_wet_bulb(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::WET_BULB_HEADING));
    let units = &cfg.default_units;
    let t_db_f = read_temperature_f(tr, keys::PROMPT_DRY_BULB, units)?;
    let rh = read_f64(tr, tr.t(keys::PROMPT_RELATIVE_HUMIDITY))?;
    let solution = air::solve_wet_bulb_with(t_db_f, rh, &cfg.solver.to_options())?;
    print_wet_bulb(tr, units, t_db_f, rh, &solution);
    Ok(())
}

/// 습공기 상태점 메뉴를 처리한다.
pub fn handle_state(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::STATE_HEADING));
    let units = &cfg.default_units;
    let t_db_f = read_temperature_f(tr, keys::PROMPT_DRY_BULB, units)?;
    let rh = read_f64(tr, tr.t(keys::PROMPT_RELATIVE_HUMIDITY))?;
    let state = HumidAirState::evaluate(t_db_f, rh, &cfg.solver.to_options())?;
    print_state(tr, units, &state);
    Ok(())
}

/// 포화압력/비열 메뉴를 처리한다.
pub fn handle_saturation(tr: &Translator, cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SATURATION_HEADING));
    let units = &cfg.default_units;
    let t_f = read_temperature_f(tr, keys::PROMPT_TEMPERATURE, units)?;
    print_saturation(tr, units, t_f)?;
    Ok(())
}

/// 단위 변환 메뉴를 처리한다.
pub fn handle_unit_conversion(tr: &Translator, _cfg: &Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));
    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        if let Some(kind) = sel.trim().parse::<u32>().ok().and_then(map_quantity) {
            break kind;
        }
        println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED));
    };
    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;
    let result = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {result} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(n: u32) -> Option<QuantityKind> {
    match n {
        1 => Some(QuantityKind::Temperature),
        2 => Some(QuantityKind::TemperatureDifference),
        3 => Some(QuantityKind::Pressure),
        4 => Some(QuantityKind::SpecificHeat),
        5 => Some(QuantityKind::SpecificEnthalpy),
        _ => None,
    }
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{} {:?}",
        tr.t(keys::SETTINGS_CURRENT_UNIT_SYSTEM),
        cfg.unit_system
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => cfg.set_unit_system(UnitSystem::Imperial),
        "2" => cfg.set_unit_system(UnitSystem::SI),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{} {:?}", tr.t(keys::SETTINGS_SAVED), cfg.unit_system);
    Ok(())
}

/// 습구온도 결과를 표시 단위로 출력한다.
pub fn print_wet_bulb(
    tr: &Translator,
    units: &DefaultUnits,
    t_db_f: f64,
    rh: f64,
    solution: &WetBulbSolution,
) {
    let t_unit = units.temperature;
    let depression = convert_temperature_diff(
        t_db_f - solution.wet_bulb_f,
        TemperatureDiffUnit::Fahrenheit,
        units.temperature_diff,
    );
    println!(
        "{}: {:.2} {}",
        tr.t(keys::RESULT_WET_BULB),
        from_fahrenheit(solution.wet_bulb_f, t_unit),
        t_unit.symbol()
    );
    println!("{}: {}", tr.t(keys::RESULT_ITERATIONS), solution.iterations);
    println!(
        "{}: {:.2} {}",
        tr.t(keys::RESULT_DEPRESSION),
        depression,
        units.temperature_diff.symbol()
    );
    println!(
        "{}: {:.6}",
        tr.t(keys::RESULT_HUMIDITY_RATIO),
        solution.target_humidity_ratio
    );
    if let Ok(t_regression) = wet_bulb_regression(t_db_f, rh) {
        println!(
            "{}: {:.2} {}",
            tr.t(keys::RESULT_REGRESSION),
            from_fahrenheit(t_regression, t_unit),
            t_unit.symbol()
        );
    }
}

/// 습공기 상태점을 표시 단위로 출력한다.
pub fn print_state(tr: &Translator, units: &DefaultUnits, state: &HumidAirState) {
    let t_unit = units.temperature;
    let p_unit = units.pressure;
    println!(
        "{}: {:.2} {}  ({}: {})",
        tr.t(keys::RESULT_WET_BULB),
        from_fahrenheit(state.wet_bulb_f, t_unit),
        t_unit.symbol(),
        tr.t(keys::RESULT_ITERATIONS),
        state.wet_bulb_iterations
    );
    println!(
        "{}: {:.2} {}",
        tr.t(keys::STATE_DEW_POINT),
        from_fahrenheit(state.dew_point_f, t_unit),
        t_unit.symbol()
    );
    println!(
        "{}: {:.5} {}",
        tr.t(keys::RESULT_SATURATION_PRESSURE),
        convert_pressure(state.saturation_pressure_psi, PressureUnit::Psi, p_unit),
        p_unit.symbol()
    );
    println!(
        "{}: {:.5} {}",
        tr.t(keys::STATE_VAPOR_PRESSURE),
        convert_pressure(state.vapor_pressure_psi, PressureUnit::Psi, p_unit),
        p_unit.symbol()
    );
    println!(
        "{}: {:.6}",
        tr.t(keys::RESULT_HUMIDITY_RATIO),
        state.humidity_ratio
    );
    println!(
        "{}: {:.6}",
        tr.t(keys::STATE_SATURATED_HUMIDITY_RATIO),
        state.saturated_humidity_ratio
    );
    println!(
        "{}: {:.2}",
        tr.t(keys::STATE_DEGREE_OF_SATURATION),
        state.degree_of_saturation_pct
    );
    println!("{}: {:.2}", tr.t(keys::STATE_GRAINS), state.grains_per_lbm);
    println!(
        "{}: {:.4}",
        tr.t(keys::STATE_SPECIFIC_VOLUME),
        state.specific_volume_ft3_per_lbm
    );
    println!(
        "{}: {:.5}",
        tr.t(keys::STATE_DENSITY),
        state.density_lbm_per_ft3
    );
    let h_unit = units.specific_enthalpy;
    println!(
        "{}: {:.3} {}",
        tr.t(keys::STATE_ENTHALPY),
        convert_specific_enthalpy(
            state.enthalpy_btu_per_lbm(),
            SpecificEnthalpyUnit::BtuPerLbm,
            h_unit
        ),
        h_unit.symbol()
    );
}

/// 온도 [°F]에서의 포화압력과 비열을 표시 단위로 출력한다.
pub fn print_saturation(
    tr: &Translator,
    units: &DefaultUnits,
    t_f: f64,
) -> crate::error::Result<()> {
    let p_unit = units.pressure;
    let show_p = |psi: f64| convert_pressure(psi, PressureUnit::Psi, p_unit);
    println!(
        "{}: {:.6} {}",
        tr.t(keys::RESULT_SATURATION_PRESSURE),
        show_p(saturation_pressure(t_f)?),
        p_unit.symbol()
    );
    println!(
        "{}: {:.6} {}",
        tr.t(keys::RESULT_SATURATION_OVER_ICE),
        show_p(saturation_pressure_over_ice(t_f)?),
        p_unit.symbol()
    );
    println!(
        "{}: {:.6} {}",
        tr.t(keys::RESULT_SATURATION_OVER_WATER),
        show_p(saturation_pressure_over_water(t_f)?),
        p_unit.symbol()
    );
    let cp_unit = units.specific_heat;
    let show_cp = |btu: f64| convert_specific_heat(btu, SpecificHeatUnit::BtuPerLbmF, cp_unit);
    println!(
        "{}: {:.5} / {:.5} / {:.5} {}",
        tr.t(keys::RESULT_SPECIFIC_HEATS),
        show_cp(cp_water(t_f)?),
        show_cp(cp_vapor(t_f)?),
        show_cp(cp_dry_air(t_f, t_f)?),
        cp_unit.symbol()
    );
    Ok(())
}

fn read_temperature_f(tr: &Translator, key: &str, units: &DefaultUnits) -> Result<f64, AppError> {
    let unit = units.temperature;
    let prompt = format!("{} [{}]: ", tr.t(key), unit.symbol());
    let value = read_f64(tr, &prompt)?;
    Ok(to_fahrenheit(value, unit))
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    if io::stdin().read_line(&mut buf)? == 0 {
        return Err(io::Error::from(io::ErrorKind::UnexpectedEof).into());
    }
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let s = read_line(prompt)?;
        match s.trim().parse::<f64>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
