//! # Response parser
//!
//! ## Aim
//! Turns one raw chat-completion response into an ordered list of fully
//! populated `Possibility` records.
//!
//! ## Logic
//! raw text -> `segmenter::segment` -> chunks -> per chunk `SectionMap::parse`
//! plus the normalizers -> `assemble_possibility`.
//!
//! The only failure is a response in which the segmenter finds nothing
//! (`ParserError::SegmentationEmpty`). Once there is a chunk, every missing or
//! malformed field is replaced by its fallback, so assembly cannot fail.
//!
//! ## Randomness
//! Thermodynamic placeholders and metrics are drawn from the generator owned
//! by `ResponseParser` (dependency injection in the same way `NistParser`
//! takes its HTTP client). `ResponseParser::with_seed` gives reproducible
//! output; `parse_possibilities` is the free-function form over any `Rng`.
use super::fallback::generate_metrics;
use super::normalizers::{parse_conditions, parse_thermodynamics};
use super::possibility::Possibility;
use super::sections::{SectionMap, bullet_items, numbered_items};
use super::segmenter::{SegmentMode, segment_with_mode};
use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;

pub const NO_EQUATION: &str = "No equation";
pub const NO_MECHANISM: &str = "No mechanism";
pub const NO_ALTERNATIVES: &str = "No alternative routes provided";
pub const DEFAULT_SAFETY: &str = "Standard precautions";
pub const DEFAULT_MATERIALS: &str = "Materials not specified";
pub const DEFAULT_EQUIPMENT: &str = "Standard equipment";
pub const DEFAULT_PROCEDURE: &str = "Procedure not provided";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParserError {
    #[error("No valid chemical possibilities found")]
    SegmentationEmpty,
}

pub struct ResponseParser<R: Rng> {
    rng: R,
}

impl ResponseParser<StdRng> {
    /// parser with an entropy-seeded generator
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for ResponseParser<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> ResponseParser<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn parse(&mut self, raw: &str) -> Result<Vec<Possibility>, ParserError> {
        parse_possibilities(raw, &mut self.rng)
    }
}

pub fn parse_possibilities<R: Rng>(raw: &str, rng: &mut R) -> Result<Vec<Possibility>, ParserError> {
    let (mode, chunks) = segment_with_mode(raw);
    if chunks.is_empty() {
        warn!("no possibility markers or section headers in a {} byte response", raw.len());
        return Err(ParserError::SegmentationEmpty);
    }
    if mode == SegmentMode::HeaderFallback {
        info!("response has no POSSIBILITY markers, parsed as a single possibility");
    }
    let possibilities: Vec<Possibility> = chunks
        .iter()
        .enumerate()
        .map(|(index, chunk)| assemble_possibility(chunk, index, rng))
        .collect();
    info!("parsed {} possibilities", possibilities.len());
    Ok(possibilities)
}

fn text_or(value: &str, fallback: &str, field: &str, index: usize) -> String {
    if value.is_empty() {
        debug!("possibility {}: {} missing, using fallback", index + 1, field);
        fallback.to_string()
    } else {
        value.to_string()
    }
}

fn list_or(items: Vec<String>, fallback: &str, field: &str, index: usize) -> Vec<String> {
    if items.is_empty() {
        debug!("possibility {}: {} missing, using fallback", index + 1, field);
        vec![fallback.to_string()]
    } else {
        items
    }
}

/// Builds a complete record from one chunk; `index` is 0-based. Total over
/// any input, including the empty string.
pub fn assemble_possibility<R: Rng>(chunk: &str, index: usize, rng: &mut R) -> Possibility {
    let sections = SectionMap::parse(chunk);
    let number = index + 1;

    let name = sections.section("REACTION NAME");
    let name = if name.is_empty() {
        format!("Reaction {}", number)
    } else {
        name.to_string()
    };

    Possibility {
        title: format!("Possibility {}", number),
        name,
        reaction_equation: text_or(
            sections.section("REACTION EQUATION"),
            NO_EQUATION,
            "reaction equation",
            index,
        ),
        mechanism: text_or(sections.section("MECHANISM"), NO_MECHANISM, "mechanism", index),
        alternative_routes: list_or(
            numbered_items(sections.section("ALTERNATIVE SYNTHESIS ROUTES")),
            NO_ALTERNATIVES,
            "alternative routes",
            index,
        ),
        thermodynamics: parse_thermodynamics(chunk, rng),
        conditions: parse_conditions(chunk, &sections),
        metrics: generate_metrics(rng),
        safety: list_or(
            bullet_items(sections.section("SAFETY CONSIDERATIONS")),
            DEFAULT_SAFETY,
            "safety",
            index,
        ),
        materials: list_or(
            bullet_items(sections.section("MATERIALS")),
            DEFAULT_MATERIALS,
            "materials",
            index,
        ),
        equipment: list_or(
            bullet_items(sections.section("EQUIPMENT")),
            DEFAULT_EQUIPMENT,
            "equipment",
            index,
        ),
        procedure: list_or(
            numbered_items(sections.section("PROCEDURE")),
            DEFAULT_PROCEDURE,
            "procedure",
            index,
        ),
    }
}
