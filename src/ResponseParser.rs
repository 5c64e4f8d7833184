/// eng
/// Extraction pipeline for free-form synthesis proposals returned by a chat
/// completion backend. The text loosely follows a template: "POSSIBILITY N:"
/// headers, then ALL-CAPS sections (REACTION EQUATION, MECHANISM,
/// THERMODYNAMICS, REACTION CONDITIONS, MATERIALS, EQUIPMENT, PROCEDURE,
/// SAFETY CONSIDERATIONS, ALTERNATIVE SYNTHESIS ROUTES) with free text or
/// bulleted/numbered lists.
/// The parser is best-effort: no chemistry is validated, absent fields get
/// fallback values, and only a response without any recognisable possibility
/// is an error.
/// # Examples
/// ```
/// use Chemy::ResponseParser::parser::ResponseParser;
/// let raw = "POSSIBILITY 1:\nREACTION EQUATION:\nA + B -> C\nMECHANISM:\nSimple combination\nSAFETY CONSIDERATIONS:\n- Wear gloves\n";
/// let mut parser = ResponseParser::with_seed(42);
/// let possibilities = parser.parse(raw).unwrap();
/// assert_eq!(possibilities.len(), 1);
/// assert_eq!(possibilities[0].reaction_equation, "A + B -> C");
/// assert_eq!(possibilities[0].safety, vec!["Wear gloves".to_string()]);
/// assert_eq!(possibilities[0].conditions.ph, "6.5-8.2");
/// ```
pub mod parser;
/// data model of the parsed records
pub mod possibility;
/// splitting of the raw response into per-possibility chunks
pub mod segmenter;
/// single-pass section map and list/value extractors
pub mod sections;
/// thermodynamics, pH and reaction conditions
pub mod normalizers;
/// random placeholders and decorative metrics
pub mod fallback;

pub use parser::{ParserError, ResponseParser, parse_possibilities};
pub use possibility::{Conditions, CostIndex, Metrics, Possibility, ThermoParameter, ThermoSymbol, ValueOrigin};
