//! # Possibility record
//!
//! ## Aim
//! Output unit of the response parser: one candidate synthesis route, fully
//! populated. Every field has a value; absence in the source text is resolved
//! to a documented fallback by the assembler in `parser.rs`.
//!
//! ## Main Data Structures
//! - `Possibility`: the record handed to the presentation layer
//! - `ThermoParameter` / `ThermoSymbol` / `ValueOrigin`: one of the four fixed
//!   thermodynamic entries and where its value came from
//! - `Conditions`: temperature, pressure, pH, catalyst
//! - `Metrics` / `CostIndex`: decorative figures, always generated, never parsed
//!
//! Field names serialise in camelCase since the records are consumed by a UI.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The four thermodynamic quantities, in the order they always appear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ThermoSymbol {
    #[serde(rename = "ΔH")]
    DeltaH,
    #[serde(rename = "ΔS")]
    DeltaS,
    #[serde(rename = "ΔG")]
    DeltaG,
    #[serde(rename = "Keq")]
    Keq,
}

impl ThermoSymbol {
    pub const ALL: [ThermoSymbol; 4] = [
        ThermoSymbol::DeltaH,
        ThermoSymbol::DeltaS,
        ThermoSymbol::DeltaG,
        ThermoSymbol::Keq,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThermoSymbol::DeltaH => "ΔH",
            ThermoSymbol::DeltaS => "ΔS",
            ThermoSymbol::DeltaG => "ΔG",
            ThermoSymbol::Keq => "Keq",
        }
    }

    /// display unit; Keq is dimensionless
    pub fn unit(&self) -> Option<&'static str> {
        match self {
            ThermoSymbol::DeltaH | ThermoSymbol::DeltaG => Some("kJ/mol"),
            ThermoSymbol::DeltaS => Some("J/K·mol"),
            ThermoSymbol::Keq => None,
        }
    }
}

impl fmt::Display for ThermoSymbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Where a thermodynamic value came from.
///
/// Extracted values hold the bare numeric token ("-285.8"), synthesized
/// placeholders already carry their unit ("-312.45 kJ/mol"). Display code
/// that appends units must look at the origin, otherwise placeholders end up
/// with the unit twice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueOrigin {
    Extracted,
    Synthesized,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThermoParameter {
    pub name: ThermoSymbol,
    pub value: String,
    pub origin: ValueOrigin,
}

impl ThermoParameter {
    pub fn extracted(name: ThermoSymbol, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            origin: ValueOrigin::Extracted,
        }
    }

    pub fn synthesized(name: ThermoSymbol, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
            origin: ValueOrigin::Synthesized,
        }
    }

    /// value with its unit, appending the unit only where it is not stored yet
    pub fn display_value(&self) -> String {
        match (self.origin, self.name.unit()) {
            (ValueOrigin::Extracted, Some(unit)) => format!("{} {}", self.value, unit),
            _ => self.value.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conditions {
    pub temperature: String,
    pub pressure: String,
    #[serde(rename = "pH")]
    pub ph: String,
    pub catalyst: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CostIndex {
    Low,
    Medium,
    High,
}

impl CostIndex {
    pub const ALL: [CostIndex; 3] = [CostIndex::Low, CostIndex::Medium, CostIndex::High];
}

impl fmt::Display for CostIndex {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let s = match self {
            CostIndex::Low => "Low",
            CostIndex::Medium => "Medium",
            CostIndex::High => "High",
        };
        write!(f, "{}", s)
    }
}

/// Illustrative performance figures. They are sampled, not read from the
/// response, see `fallback::generate_metrics`.
///
/// JSON carries plain numbers: `{"yield": 82, "cost": 450, "time": 6, ...}`.
/// The "$450" and "6h" forms come from `cost_label` / `time_label` and are
/// only used by the terminal tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// %
    #[serde(rename = "yield")]
    pub yield_percent: u32,
    /// %
    #[serde(rename = "efficiency")]
    pub efficiency_percent: u32,
    /// US dollars
    #[serde(rename = "cost")]
    pub cost_usd: u32,
    /// hours
    #[serde(rename = "time")]
    pub time_hours: u32,
    /// %
    #[serde(rename = "atomEconomy")]
    pub atom_economy_percent: u32,
    /// %
    #[serde(rename = "energyEfficiency")]
    pub energy_efficiency_percent: u32,
    pub cost_index: CostIndex,
}

impl Metrics {
    pub fn cost_label(&self) -> String {
        format!("${}", self.cost_usd)
    }

    pub fn time_label(&self) -> String {
        format!("{}h", self.time_hours)
    }
}

/// One structured candidate synthesis route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Possibility {
    pub title: String,
    pub name: String,
    pub reaction_equation: String,
    pub mechanism: String,
    pub alternative_routes: Vec<String>,
    /// always ΔH, ΔS, ΔG, Keq in this order
    pub thermodynamics: Vec<ThermoParameter>,
    pub conditions: Conditions,
    pub metrics: Metrics,
    pub safety: Vec<String>,
    pub materials: Vec<String>,
    pub equipment: Vec<String>,
    pub procedure: Vec<String>,
}

impl Possibility {
    pub fn thermo(&self, symbol: ThermoSymbol) -> Option<&ThermoParameter> {
        self.thermodynamics.iter().find(|p| p.name == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_value_appends_unit_only_to_extracted() {
        let extracted = ThermoParameter::extracted(ThermoSymbol::DeltaS, "120.5");
        assert_eq!(extracted.display_value(), "120.5 J/K·mol");

        let synthesized = ThermoParameter::synthesized(ThermoSymbol::DeltaH, "-250.00 kJ/mol");
        assert_eq!(synthesized.display_value(), "-250.00 kJ/mol");

        let keq = ThermoParameter::extracted(ThermoSymbol::Keq, "42");
        assert_eq!(keq.display_value(), "42");
    }

    #[test]
    fn test_symbol_order_and_units() {
        let names: Vec<&str> = ThermoSymbol::ALL.iter().map(|s| s.as_str()).collect();
        assert_eq!(names, vec!["ΔH", "ΔS", "ΔG", "Keq"]);
        assert_eq!(ThermoSymbol::DeltaG.unit(), Some("kJ/mol"));
        assert_eq!(ThermoSymbol::Keq.unit(), None);
    }

    #[test]
    fn test_serialized_field_names() {
        let param = ThermoParameter::extracted(ThermoSymbol::DeltaH, "-100");
        let json = serde_json::to_value(&param).unwrap();
        assert_eq!(json["name"], "ΔH");
        assert_eq!(json["origin"], "extracted");

        let metrics = Metrics {
            yield_percent: 80,
            efficiency_percent: 90,
            cost_usd: 150,
            time_hours: 3,
            atom_economy_percent: 72,
            energy_efficiency_percent: 88,
            cost_index: CostIndex::Medium,
        };
        let json = serde_json::to_value(&metrics).unwrap();
        assert_eq!(json["yield"], 80);
        assert_eq!(json["cost"], 150);
        assert_eq!(json["time"], 3);
        assert!(json["cost"].is_u64());
        assert_eq!(json["atomEconomy"], 72);
        assert_eq!(json["costIndex"], "Medium");
        assert_eq!(metrics.cost_label(), "$150");
        assert_eq!(metrics.time_label(), "3h");
    }
}
