//! Randomly drawn values: placeholders for missing thermodynamic data and the
//! decorative metrics attached to every possibility.
//!
//! Nothing here reads the response text. The generator is always passed in,
//! so a seeded `StdRng` makes the whole parse reproducible.
use super::possibility::{CostIndex, Metrics, ThermoSymbol};
use rand::Rng;
use rand::seq::SliceRandom;

/// sampling interval of the placeholder for each quantity
pub fn thermo_range(symbol: ThermoSymbol) -> (f64, f64) {
    match symbol {
        ThermoSymbol::DeltaH => (-500.0, -100.0),
        ThermoSymbol::DeltaS => (50.0, 200.0),
        ThermoSymbol::DeltaG => (-400.0, -50.0),
        ThermoSymbol::Keq => (1.0, 101.0),
    }
}

/// Uniform sample within `thermo_range`, two decimals, unit appended
/// ("-312.47 kJ/mol"; Keq has no unit).
pub fn synthesize_thermo_value<R: Rng>(symbol: ThermoSymbol, rng: &mut R) -> String {
    let (low, high) = thermo_range(symbol);
    let value = rng.gen_range(low..=high);
    match symbol.unit() {
        Some(unit) => format!("{:.2} {}", value, unit),
        None => format!("{:.2}", value),
    }
}

/// Independent uniform draws:
/// yield, efficiency, energy efficiency in [75, 95] %, atom economy in [70, 90] %,
/// cost in [100, 1000) $, time in [1, 24) h, cost index Low/Medium/High.
pub fn generate_metrics<R: Rng>(rng: &mut R) -> Metrics {
    Metrics {
        yield_percent: rng.gen_range(75..=95),
        efficiency_percent: rng.gen_range(75..=95),
        cost_usd: rng.gen_range(100..1000),
        time_hours: rng.gen_range(1..24),
        atom_economy_percent: rng.gen_range(70..=90),
        energy_efficiency_percent: rng.gen_range(75..=95),
        cost_index: *CostIndex::ALL.choose(rng).unwrap_or(&CostIndex::Medium),
    }
}
