use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_WET_BULB: &str = "main_menu.wet_bulb";
    pub const MAIN_MENU_STATE: &str = "main_menu.state";
    pub const MAIN_MENU_SATURATION: &str = "main_menu.saturation";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PROMPT_DRY_BULB: &str = "prompt.dry_bulb";
    pub const PROMPT_RELATIVE_HUMIDITY: &str = "prompt.relative_humidity";
    pub const PROMPT_TEMPERATURE: &str = "prompt.temperature";

    pub const WET_BULB_HEADING: &str = "wet_bulb.heading";
    pub const RESULT_WET_BULB: &str = "result.wet_bulb";
    pub const RESULT_ITERATIONS: &str = "result.iterations";
    pub const RESULT_DEPRESSION: &str = "result.depression";
    pub const RESULT_HUMIDITY_RATIO: &str = "result.humidity_ratio";
    pub const RESULT_REGRESSION: &str = "result.regression";

    pub const STATE_HEADING: &str = "state.heading";
    pub const STATE_DEW_POINT: &str = "state.dew_point";
    pub const STATE_VAPOR_PRESSURE: &str = "state.vapor_pressure";
    pub const STATE_SATURATED_HUMIDITY_RATIO: &str = "state.saturated_humidity_ratio";
    pub const STATE_DEGREE_OF_SATURATION: &str = "state.degree_of_saturation";
    pub const STATE_GRAINS: &str = "state.grains";
    pub const STATE_SPECIFIC_VOLUME: &str = "state.specific_volume";
    pub const STATE_DENSITY: &str = "state.density";
    pub const STATE_ENTHALPY: &str = "state.enthalpy";

    pub const SATURATION_HEADING: &str = "saturation.heading";
    pub const RESULT_SATURATION_PRESSURE: &str = "result.saturation_pressure";
    pub const RESULT_SATURATION_OVER_ICE: &str = "result.saturation_over_ice";
    pub const RESULT_SATURATION_OVER_WATER: &str = "result.saturation_over_water";
    pub const RESULT_SPECIFIC_HEATS: &str = "result.specific_heats";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT_UNIT_SYSTEM: &str = "settings.current_unit_system";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("en") {
            Language::En
        } else {
            Language::Ko
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::Ko => "ko",
            Language::En => "en",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 ko로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 번역을 가져온다. 언어팩 → 선택 언어 → 한국어 순으로 찾는다.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LC_ALL", "LANG"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let path = Path::new(dir).join(format!("{lang}.toml"));
    let content = fs::read_to_string(path).ok()?;
    parse_toml_to_map(&content)
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== Psychrometric Toolbox ===",
        MAIN_MENU_WET_BULB => "1) 습구온도 (반복법)",
        MAIN_MENU_STATE => "2) 습공기 상태점",
        MAIN_MENU_SATURATION => "3) 포화압력 / 비열",
        MAIN_MENU_UNIT_CONVERSION => "4) 단위 변환기",
        MAIN_MENU_SETTINGS => "5) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        PROMPT_DRY_BULB => "건구온도",
        PROMPT_RELATIVE_HUMIDITY => "상대습도 [0~1]: ",
        PROMPT_TEMPERATURE => "온도",
        WET_BULB_HEADING => "\n-- 습구온도 --",
        RESULT_WET_BULB => "습구온도",
        RESULT_ITERATIONS => "반복 횟수",
        RESULT_DEPRESSION => "습구 강하",
        RESULT_HUMIDITY_RATIO => "습도비 [lbm/lbm]",
        RESULT_REGRESSION => "회귀식 습구온도(Stull)",
        STATE_HEADING => "\n-- 습공기 상태점 --",
        STATE_DEW_POINT => "이슬점",
        STATE_VAPOR_PRESSURE => "수증기 분압",
        STATE_SATURATED_HUMIDITY_RATIO => "포화 습도비 [lbm/lbm]",
        STATE_DEGREE_OF_SATURATION => "포화도 [%]",
        STATE_GRAINS => "수분량 [gr/lbm]",
        STATE_SPECIFIC_VOLUME => "비체적 [ft³/lbm]",
        STATE_DENSITY => "밀도 [lbm/ft³]",
        STATE_ENTHALPY => "엔탈피",
        SATURATION_HEADING => "\n-- 포화압력 / 비열 --",
        RESULT_SATURATION_PRESSURE => "포화압력",
        RESULT_SATURATION_OVER_ICE => "  얼음 위",
        RESULT_SATURATION_OVER_WATER => "  물 위",
        RESULT_SPECIFIC_HEATS => "비열 (물 / 수증기 / 건공기)",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 온도  2) 온도차  3) 압력  4) 비열  5) 비엔탈피",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: F, psi, kJ/kg): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: C, kPa, Btu/lbm): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "현재 단위 시스템:",
        SETTINGS_OPTIONS => "1) Imperial  2) SI",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "단위 시스템이 변경되었습니다:",
        _ => "",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Psychrometric Toolbox ===",
        MAIN_MENU_WET_BULB => "1) Wet-bulb temperature (iterative)",
        MAIN_MENU_STATE => "2) Moist air state",
        MAIN_MENU_SATURATION => "3) Saturation pressure / specific heats",
        MAIN_MENU_UNIT_CONVERSION => "4) Unit converter",
        MAIN_MENU_SETTINGS => "5) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PROMPT_DRY_BULB => "Dry-bulb temperature",
        PROMPT_RELATIVE_HUMIDITY => "Relative humidity [0-1]: ",
        PROMPT_TEMPERATURE => "Temperature",
        WET_BULB_HEADING => "\n-- Wet-bulb temperature --",
        RESULT_WET_BULB => "Wet-bulb",
        RESULT_ITERATIONS => "Iterations",
        RESULT_DEPRESSION => "Wet-bulb depression",
        RESULT_HUMIDITY_RATIO => "Humidity ratio [lbm/lbm]",
        RESULT_REGRESSION => "Regression wet-bulb (Stull)",
        STATE_HEADING => "\n-- Moist air state --",
        STATE_DEW_POINT => "Dew point",
        STATE_VAPOR_PRESSURE => "Vapor pressure",
        STATE_SATURATED_HUMIDITY_RATIO => "Saturated humidity ratio [lbm/lbm]",
        STATE_DEGREE_OF_SATURATION => "Degree of saturation [%]",
        STATE_GRAINS => "Moisture [gr/lbm]",
        STATE_SPECIFIC_VOLUME => "Specific volume [ft³/lbm]",
        STATE_DENSITY => "Density [lbm/ft³]",
        STATE_ENTHALPY => "Enthalpy",
        SATURATION_HEADING => "\n-- Saturation pressure / specific heats --",
        RESULT_SATURATION_PRESSURE => "Saturation pressure",
        RESULT_SATURATION_OVER_ICE => "  over ice",
        RESULT_SATURATION_OVER_WATER => "  over water",
        RESULT_SPECIFIC_HEATS => "Specific heats (water / vapor / dry air)",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => {
            "1) Temperature  2) ΔTemperature  3) Pressure  4) Specific heat  5) Specific enthalpy"
        }
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: F, psi, kJ/kg): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: C, kPa, Btu/lbm): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT_UNIT_SYSTEM => "Current unit system:",
        SETTINGS_OPTIONS => "1) Imperial  2) SI",
        SETTINGS_PROMPT_CHANGE => "Number to change (Enter to cancel): ",
        SETTINGS_INVALID => "Invalid input, keeping current setting.",
        SETTINGS_SAVED => "Unit system set to:",
        _ => return None,
    })
}
