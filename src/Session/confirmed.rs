//! Promotion of a parsed possibility into a "confirmed material" record.
//!
//! The record regroups the flat `Possibility` into reaction / synthesis blocks
//! and stamps it with an id and a timestamp. Storing it is up to the caller.
use crate::ResponseParser::possibility::{Conditions, Metrics, Possibility, ThermoParameter};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactionRecord {
    pub name: String,
    pub equation: String,
    pub mechanism: String,
    pub alternatives: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynthesisRecord {
    pub materials: Vec<String>,
    pub equipment: Vec<String>,
    pub procedure: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConfirmedMaterial {
    /// milliseconds since the Unix epoch at confirmation time
    pub id: i64,
    pub timestamp: DateTime<Utc>,
    pub reaction: ReactionRecord,
    pub thermodynamics: Vec<ThermoParameter>,
    pub conditions: Conditions,
    pub synthesis: SynthesisRecord,
    pub metrics: Metrics,
    pub safety: Vec<String>,
}

impl ConfirmedMaterial {
    pub fn from_possibility(possibility: &Possibility, confirmed_at: DateTime<Utc>) -> Self {
        Self {
            id: confirmed_at.timestamp_millis(),
            timestamp: confirmed_at,
            reaction: ReactionRecord {
                name: possibility.name.clone(),
                equation: possibility.reaction_equation.clone(),
                mechanism: possibility.mechanism.clone(),
                alternatives: possibility.alternative_routes.clone(),
            },
            thermodynamics: possibility.thermodynamics.clone(),
            conditions: possibility.conditions.clone(),
            synthesis: SynthesisRecord {
                materials: possibility.materials.clone(),
                equipment: possibility.equipment.clone(),
                procedure: possibility.procedure.clone(),
            },
            metrics: possibility.metrics.clone(),
            safety: possibility.safety.clone(),
        }
    }
}
