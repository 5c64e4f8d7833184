//! # Section extraction
//!
//! ## Aim
//! Cuts a possibility chunk into labeled blocks ("MECHANISM:", "MATERIALS:", ...)
//! in one pass over its lines, so that every field lookup afterwards is a map
//! lookup instead of a fresh scan of the chunk.
//!
//! ## Logic
//! A line opens a new section when, after leading whitespace,
//! - it starts with one of `KNOWN_LABELS` (any case) followed by a colon, or
//! - it starts with an ALL-CAPS header: at least two characters of `A-Z` and
//!   spaces, then a colon.
//!
//! A section body runs from just after the colon (same-line text included) to
//! the start of the next section line or the end of the chunk. Mixed-case
//! lines such as "Temperature: 80 °C" never open a section, so they stay inside
//! the body of "REACTION CONDITIONS". Labels inside prose ("... the mechanism:
//! ...") are not recognised because the label must open the line.
//!
//! ## Derived extractors
//! - `bullet_items`: "- item" lines with the dash stripped
//! - `numbered_items`: "1. step" lines with the numbering stripped
//! - `labeled_value`: the rest of the line after a label such as "Catalyst:"
use regex::Regex;
use std::sync::OnceLock;

/// section labels of the response template
pub const KNOWN_LABELS: [&str; 11] = [
    "REACTION NAME",
    "REACTION EQUATION",
    "MECHANISM",
    "THERMODYNAMICS",
    "REACTION CONDITIONS",
    "SYNTHESIS INSTRUCTIONS",
    "MATERIALS",
    "EQUIPMENT",
    "PROCEDURE",
    "SAFETY CONSIDERATIONS",
    "ALTERNATIVE SYNTHESIS ROUTES",
];

#[derive(Debug, Clone, PartialEq)]
pub struct Section<'a> {
    /// upper-case label without the colon
    pub label: String,
    /// trimmed body text
    pub body: &'a str,
}

/// All sections of one chunk in source order.
#[derive(Debug, Clone, Default)]
pub struct SectionMap<'a> {
    sections: Vec<Section<'a>>,
}

impl<'a> SectionMap<'a> {
    pub fn parse(chunk: &'a str) -> Self {
        // (label, body start) of the section being read
        let mut open: Option<(String, usize)> = None;
        let mut sections = Vec::new();
        let mut offset = 0;
        for line in chunk.split_inclusive('\n') {
            if let Some((label, body_offset)) = header_of(line) {
                if let Some((prev_label, start)) = open.take() {
                    sections.push(Section {
                        label: prev_label,
                        body: chunk[start..offset].trim(),
                    });
                }
                open = Some((label, offset + body_offset));
            }
            offset += line.len();
        }
        if let Some((label, start)) = open {
            sections.push(Section {
                label,
                body: chunk[start..].trim(),
            });
        }
        SectionMap { sections }
    }

    /// body of the first section with this label; "" when the label is absent
    pub fn section(&self, label: &str) -> &'a str {
        self.find(label).map(|s| s.body).unwrap_or("")
    }

    pub fn find(&self, label: &str) -> Option<&Section<'a>> {
        let label = label.trim().trim_end_matches(':').trim_end();
        self.sections
            .iter()
            .find(|s| s.label.eq_ignore_ascii_case(label))
    }

    pub fn contains(&self, label: &str) -> bool {
        self.find(label).is_some()
    }

    pub fn labels(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.label.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}

/// Returns the normalised label and the byte offset just past its colon when
/// `line` opens a section.
fn header_of(line: &str) -> Option<(String, usize)> {
    let trimmed = line.trim_start();
    let indent = line.len() - trimmed.len();
    for label in KNOWN_LABELS {
        let Some(head) = trimmed.get(..label.len()) else {
            continue;
        };
        if !head.eq_ignore_ascii_case(label) {
            continue;
        }
        let rest = &trimmed[label.len()..];
        let after_spaces = rest.trim_start_matches([' ', '\t']);
        if after_spaces.starts_with(':') {
            let colon = indent + label.len() + (rest.len() - after_spaces.len());
            return Some((label.to_string(), colon + 1));
        }
    }
    let colon = trimmed.find(':')?;
    let candidate = &trimmed[..colon];
    let mut chars = candidate.chars();
    let first = chars.next()?;
    let all_caps = first.is_ascii_uppercase()
        && candidate.len() >= 2
        && chars.all(|c| c.is_ascii_uppercase() || c == ' ');
    if all_caps {
        Some((candidate.trim_end().to_string(), indent + colon + 1))
    } else {
        None
    }
}

/// "- item" lines, dash and surrounding whitespace stripped
pub fn bullet_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| line.starts_with('-') && !line.starts_with("--"))
        .map(|line| line[1..].trim().to_string())
        .filter(|item| !item.is_empty())
        .collect()
}

fn numbering_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.\s*").expect("valid numbering pattern"))
}

/// "1. step" lines, numbering stripped
pub fn numbered_items(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter_map(|line| {
            numbering_regex()
                .find(line)
                .map(|m| line[m.end()..].trim().to_string())
        })
        .filter(|item| !item.is_empty())
        .collect()
}

/// Remainder of the line following the first case-insensitive occurrence of
/// `label` that has text after it, e.g. `labeled_value(text, "Catalyst:")`.
pub fn labeled_value(text: &str, label: &str) -> Option<String> {
    if label.is_empty() {
        return None;
    }
    // ASCII lowering keeps byte offsets valid for `text`
    let haystack = text.to_ascii_lowercase();
    let needle = label.to_ascii_lowercase();
    haystack.match_indices(&needle).find_map(|(start, _)| {
        let rest = &text[start + needle.len()..];
        let end = rest.find(['\r', '\n']).unwrap_or(rest.len());
        let value = rest[..end].trim();
        (!value.is_empty()).then(|| value.to_string())
    })
}
