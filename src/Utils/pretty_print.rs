//! Terminal tables for parsed possibilities.
use crate::ResponseParser::possibility::{Possibility, ThermoParameter};
use prettytable::{Cell, Row, Table, row};

fn numbered(items: &[String]) -> String {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("{}. {}", i + 1, item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn bulleted(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("- {}", item))
        .collect::<Vec<_>>()
        .join("\n")
}

fn thermo_cell(param: &ThermoParameter, show_units: bool) -> String {
    if show_units {
        param.display_value()
    } else {
        param.value.clone()
    }
}

/// one row per possibility: number, name, equation and headline metrics
pub fn possibilities_table(possibilities: &[Possibility]) -> Table {
    let mut table = Table::new();
    table.add_row(row!["#", "Title", "Name", "Equation", "Yield", "Cost index"]);
    for (i, p) in possibilities.iter().enumerate() {
        table.add_row(Row::new(vec![
            Cell::new(&(i + 1).to_string()),
            Cell::new(&p.title),
            Cell::new(&p.name),
            Cell::new(&p.reaction_equation),
            Cell::new(&format!("{}%", p.metrics.yield_percent)),
            Cell::new(&p.metrics.cost_index.to_string()),
        ]));
    }
    table
}

/// field/value table with every part of one possibility
pub fn possibility_table(p: &Possibility, show_units: bool) -> Table {
    let mut table = Table::new();
    table.add_row(row!["Field", "Value"]);
    table.add_row(row!["Title", p.title]);
    table.add_row(row!["Name", p.name]);
    table.add_row(row!["Reaction equation", p.reaction_equation]);
    table.add_row(row!["Mechanism", p.mechanism]);
    for param in &p.thermodynamics {
        table.add_row(Row::new(vec![
            Cell::new(param.name.as_str()),
            Cell::new(&thermo_cell(param, show_units)),
        ]));
    }
    table.add_row(row!["Temperature", p.conditions.temperature]);
    table.add_row(row!["Pressure", p.conditions.pressure]);
    table.add_row(row!["pH", p.conditions.ph]);
    table.add_row(row!["Catalyst", p.conditions.catalyst]);
    let m = &p.metrics;
    table.add_row(row!["Yield", format!("{}%", m.yield_percent)]);
    table.add_row(row!["Efficiency", format!("{}%", m.efficiency_percent)]);
    table.add_row(row!["Cost", m.cost_label()]);
    table.add_row(row!["Time", m.time_label()]);
    table.add_row(row!["Atom economy", format!("{}%", m.atom_economy_percent)]);
    table.add_row(row!["Energy efficiency", format!("{}%", m.energy_efficiency_percent)]);
    table.add_row(row!["Cost index", m.cost_index]);
    table.add_row(row!["Materials", bulleted(&p.materials)]);
    table.add_row(row!["Equipment", bulleted(&p.equipment)]);
    table.add_row(row!["Procedure", numbered(&p.procedure)]);
    table.add_row(row!["Safety", bulleted(&p.safety)]);
    table.add_row(row!["Alternative routes", numbered(&p.alternative_routes)]);
    table
}

pub fn print_possibilities(possibilities: &[Possibility]) {
    possibilities_table(possibilities).printstd();
}

pub fn pretty_print(p: &Possibility, show_units: bool) {
    possibility_table(p, show_units).printstd();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResponseParser::parser::ResponseParser;

    const RAW: &str = "POSSIBILITY 1:\nREACTION EQUATION:\nZn + 2HCl -> ZnCl2 + H2\nTHERMODYNAMICS:\nΔH: -153.9\nPROCEDURE:\n1. Add zinc\n2. Collect gas\n";

    #[test]
    fn test_possibility_table_contents() {
        let possibilities = ResponseParser::with_seed(3).parse(RAW).unwrap();
        let text = possibility_table(&possibilities[0], true).to_string();
        assert!(text.contains("Zn + 2HCl -> ZnCl2 + H2"));
        assert!(text.contains("-153.9 kJ/mol"));
        assert!(text.contains("1. Add zinc"));
        assert!(text.contains("2. Collect gas"));
        assert!(text.contains("6.5-8.2"));
        // placeholders keep their single unit
        assert!(!text.contains("kJ/mol kJ/mol"));

        let bare = possibility_table(&possibilities[0], false).to_string();
        assert!(bare.contains("-153.9"));
        assert!(!bare.contains("-153.9 kJ/mol"));
    }

    #[test]
    fn test_possibilities_table_rows() {
        let possibilities = ResponseParser::with_seed(3)
            .parse("POSSIBILITY 1:\nPOSSIBILITY 2:\n")
            .unwrap();
        let table = possibilities_table(&possibilities);
        assert_eq!(table.len(), 3);
        assert!(table.to_string().contains("Reaction 2"));
    }
}
