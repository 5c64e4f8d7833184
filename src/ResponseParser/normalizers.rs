//! Field normalizers: thermodynamic values, reaction conditions and pH.
//!
//! Thermodynamic values keep only the numeric token when they are found in the
//! text; placeholders drawn by `fallback` carry their unit. The difference is
//! recorded in `ThermoParameter::origin`.
use super::fallback::synthesize_thermo_value;
use super::possibility::{Conditions, ThermoParameter, ThermoSymbol};
use super::sections::{SectionMap, labeled_value};
use log::debug;
use rand::Rng;
use regex::Regex;
use std::sync::OnceLock;

pub const DEFAULT_TEMPERATURE: &str = "25-30°C";
pub const DEFAULT_PRESSURE: &str = "1 atm";
pub const DEFAULT_PH: &str = "6.5-8.2";
pub const DEFAULT_CATALYST: &str = "None";

/// half-width of the range built around a single pH value
const PH_HALF_WIDTH: f64 = 0.2;

fn thermo_regex(symbol: ThermoSymbol) -> &'static Regex {
    static DH: OnceLock<Regex> = OnceLock::new();
    static DS: OnceLock<Regex> = OnceLock::new();
    static DG: OnceLock<Regex> = OnceLock::new();
    static KEQ: OnceLock<Regex> = OnceLock::new();
    // numeric token: optional sign (ASCII or U+2212), digits, optional decimals
    let (cell, pattern) = match symbol {
        ThermoSymbol::DeltaH => (&DH, r"(?i)ΔH\s*:\s*([-+−]?\d+(?:\.\d+)?)"),
        ThermoSymbol::DeltaS => (&DS, r"(?i)ΔS\s*:\s*([-+−]?\d+(?:\.\d+)?)"),
        ThermoSymbol::DeltaG => (&DG, r"(?i)ΔG\s*:\s*([-+−]?\d+(?:\.\d+)?)"),
        // "Equilibrium constant (Keq): 12" closes the parenthesis before the colon
        ThermoSymbol::Keq => (&KEQ, r"(?i)\bKeq\)?\s*:\s*([-+−]?\d+(?:\.\d+)?)"),
    };
    cell.get_or_init(|| Regex::new(pattern).expect("valid thermodynamics pattern"))
}

fn ph_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\bpH\s*:\s*(\d+(?:\.\d+)?)(?:\s*[-–]\s*(\d+(?:\.\d+)?))?")
            .expect("valid pH pattern")
    })
}

/// numeric token following "<symbol>:" anywhere in the chunk
pub fn extract_thermo_value(text: &str, symbol: ThermoSymbol) -> Option<String> {
    let token = thermo_regex(symbol)
        .captures(text)?
        .get(1)?
        .as_str()
        .replace('−', "-");
    // unparsable tokens count as missing
    token.parse::<f64>().ok()?;
    Some(token)
}

/// ΔH, ΔS, ΔG, Keq in this order, missing ones replaced by placeholders
pub fn parse_thermodynamics<R: Rng>(text: &str, rng: &mut R) -> Vec<ThermoParameter> {
    ThermoSymbol::ALL
        .iter()
        .map(|&symbol| match extract_thermo_value(text, symbol) {
            Some(value) => ThermoParameter::extracted(symbol, value),
            None => {
                let value = synthesize_thermo_value(symbol, rng);
                debug!("{} not found, placeholder {}", symbol, value);
                ThermoParameter::synthesized(symbol, value)
            }
        })
        .collect()
}

/// pH range as "low-high"; a single value becomes value ± 0.2
pub fn extract_ph(text: &str) -> Option<String> {
    let cap = ph_regex().captures(text)?;
    let low = cap.get(1)?.as_str();
    match cap.get(2) {
        Some(high) => Some(format!("{}-{}", low, high.as_str())),
        None => {
            let value: f64 = low.parse().ok()?;
            Some(format!(
                "{:.1}-{:.1}",
                value - PH_HALF_WIDTH,
                value + PH_HALF_WIDTH
            ))
        }
    }
}

pub fn normalize_ph(text: &str) -> String {
    extract_ph(text).unwrap_or_else(|| DEFAULT_PH.to_string())
}

/// Reads temperature, pressure, pH and catalyst, preferring the REACTION
/// CONDITIONS section and falling back to the whole chunk.
pub fn parse_conditions(chunk: &str, sections: &SectionMap) -> Conditions {
    let conditions = sections.section("REACTION CONDITIONS");
    let lookup = |label: &str| {
        labeled_value(conditions, label).or_else(|| labeled_value(chunk, label))
    };
    let ph = extract_ph(conditions).or_else(|| extract_ph(chunk));

    let temperature = lookup("Temperature:");
    let pressure = lookup("Pressure:");
    let catalyst = lookup("Catalyst:");
    for (field, value) in [
        ("temperature", &temperature),
        ("pressure", &pressure),
        ("pH", &ph),
        ("catalyst", &catalyst),
    ] {
        if value.is_none() {
            debug!("condition '{}' not found, using default", field);
        }
    }

    Conditions {
        temperature: temperature.unwrap_or_else(|| DEFAULT_TEMPERATURE.to_string()),
        pressure: pressure.unwrap_or_else(|| DEFAULT_PRESSURE.to_string()),
        ph: ph.unwrap_or_else(|| DEFAULT_PH.to_string()),
        catalyst: catalyst.unwrap_or_else(|| DEFAULT_CATALYST.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResponseParser::possibility::ValueOrigin;
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_ph_single_value_expands() {
        assert_eq!(normalize_ph("pH: 7.0"), "6.8-7.2");
        assert_eq!(normalize_ph("PH: 4"), "3.8-4.2");
    }

    #[test]
    fn test_ph_range_kept() {
        assert_eq!(normalize_ph("pH: 6.5-8.0"), "6.5-8.0");
        assert_eq!(normalize_ph("pH:6.5 - 8.0 (buffered)"), "6.5-8.0");
    }

    #[test]
    fn test_ph_missing_or_malformed() {
        assert_eq!(normalize_ph("Temperature: 25 °C"), DEFAULT_PH);
        assert_eq!(normalize_ph("pH: neutral"), DEFAULT_PH);
        assert_eq!(normalize_ph(""), "6.5-8.2");
    }

    #[test]
    fn test_extract_thermo_values() {
        let text = "THERMODYNAMICS:\nΔH: -285.8 kJ/mol\nΔS: +70 J/K·mol\nΔG: −237.1 kJ/mol\nEquilibrium constant (Keq): 1.5e3";
        assert_eq!(
            extract_thermo_value(text, ThermoSymbol::DeltaH),
            Some("-285.8".to_string())
        );
        assert_eq!(
            extract_thermo_value(text, ThermoSymbol::DeltaS),
            Some("+70".to_string())
        );
        assert_eq!(
            extract_thermo_value(text, ThermoSymbol::DeltaG),
            Some("-237.1".to_string())
        );
        assert_eq!(
            extract_thermo_value(text, ThermoSymbol::Keq),
            Some("1.5".to_string())
        );
    }

    #[test]
    fn test_thermo_non_numeric_is_missing() {
        assert_eq!(extract_thermo_value("ΔH: unknown", ThermoSymbol::DeltaH), None);
        assert_eq!(extract_thermo_value("ΔH: -", ThermoSymbol::DeltaH), None);
    }

    #[test]
    fn test_parse_thermodynamics_fills_missing() {
        let mut rng = StdRng::seed_from_u64(7);
        let params = parse_thermodynamics("ΔG: -12.5", &mut rng);
        assert_eq!(params.len(), 4);
        let names: Vec<ThermoSymbol> = params.iter().map(|p| p.name).collect();
        assert_eq!(names, ThermoSymbol::ALL.to_vec());

        assert_eq!(params[2].value, "-12.5");
        assert_eq!(params[2].origin, ValueOrigin::Extracted);

        assert_eq!(params[0].origin, ValueOrigin::Synthesized);
        assert!(params[0].value.ends_with(" kJ/mol"));
        let dh: f64 = params[0].value.trim_end_matches(" kJ/mol").parse().unwrap();
        assert!((-500.0..=-100.0).contains(&dh));
        assert!(params[1].value.ends_with(" J/K·mol"));
        let keq: f64 = params[3].value.parse().unwrap();
        assert!((1.0..=101.0).contains(&keq));
    }

    #[test]
    fn test_conditions_prefer_section() {
        let chunk = "PROCEDURE:\n1. Temperature: keep the flask cold\nREACTION CONDITIONS:\nTemperature: 60-70 °C\nPressure: 2 atm\npH: 9\nCatalyst: Pd/C\n";
        let sections = SectionMap::parse(chunk);
        let conditions = parse_conditions(chunk, &sections);
        assert_eq!(conditions.temperature, "60-70 °C");
        assert_eq!(conditions.pressure, "2 atm");
        assert_eq!(conditions.catalyst, "Pd/C");
        let (low, high) = conditions.ph.split_once('-').unwrap();
        assert_relative_eq!(low.parse::<f64>().unwrap(), 8.8);
        assert_relative_eq!(high.parse::<f64>().unwrap(), 9.2);
    }

    #[test]
    fn test_conditions_defaults() {
        let sections = SectionMap::parse("");
        let conditions = parse_conditions("", &sections);
        assert_eq!(
            conditions,
            Conditions {
                temperature: "25-30°C".to_string(),
                pressure: "1 atm".to_string(),
                ph: "6.5-8.2".to_string(),
                catalyst: "None".to_string(),
            }
        );
    }

    #[test]
    fn test_conditions_outside_section() {
        let chunk = "MECHANISM:\nSN2\nCatalyst: none required\n";
        let sections = SectionMap::parse(chunk);
        let conditions = parse_conditions(chunk, &sections);
        assert_eq!(conditions.catalyst, "none required");
        assert_eq!(conditions.temperature, DEFAULT_TEMPERATURE);
    }
}
