//! Splits a raw response into one text chunk per proposed possibility.
//!
//! Primary mode cuts on "POSSIBILITY <n>:" markers (case-insensitive) and drops
//! whatever precedes the first marker. Responses without any marker fall back
//! to a single chunk that starts at the first "REACTION EQUATION:",
//! "MECHANISM:" or "THERMODYNAMICS:" (any case, anywhere in the text); the
//! header stays inside the chunk.
use log::debug;
use regex::Regex;
use std::sync::OnceLock;

fn marker_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)POSSIBILITY\s*\d+:").expect("valid marker pattern"))
}

fn fallback_header_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)(?:REACTION EQUATION|MECHANISM|THERMODYNAMICS):")
            .expect("valid header pattern")
    })
}

/// how the chunks were found
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentMode {
    Markers,
    HeaderFallback,
    Nothing,
}

pub fn segment_with_mode(raw: &str) -> (SegmentMode, Vec<&str>) {
    if marker_regex().is_match(raw) {
        // first piece is the preamble before "POSSIBILITY 1:"
        let chunks: Vec<&str> = marker_regex().split(raw).skip(1).collect();
        debug!("segmenter: {} chunk(s) from possibility markers", chunks.len());
        return (SegmentMode::Markers, chunks);
    }
    match fallback_header_regex().find(raw) {
        Some(m) => {
            debug!(
                "segmenter: no markers, single chunk from header at byte {}",
                m.start()
            );
            (SegmentMode::HeaderFallback, vec![&raw[m.start()..]])
        }
        None => {
            debug!("segmenter: no markers and no known section headers");
            (SegmentMode::Nothing, Vec::new())
        }
    }
}

/// chunks in source order, empty when nothing resembles a possibility
pub fn segment(raw: &str) -> Vec<&str> {
    segment_with_mode(raw).1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_drop_preamble() {
        let raw = "Here are some ideas.\nPOSSIBILITY 1:\nMECHANISM:\nA\npossibility 2:\nMECHANISM:\nB\n";
        let (mode, chunks) = segment_with_mode(raw);
        assert_eq!(mode, SegmentMode::Markers);
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].contains("A"));
        assert!(!chunks[0].contains("Here are"));
        assert!(chunks[1].contains("B"));
    }

    #[test]
    fn test_marker_without_space_and_empty_trailing_chunk() {
        let raw = "POSSIBILITY1:\nREACTION EQUATION:\nX -> Y\nPOSSIBILITY 2:";
        let chunks = segment(raw);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[1], "");
    }

    #[test]
    fn test_header_fallback_keeps_header() {
        let raw = "Sure, see below.\nREACTION EQUATION:\nH2 + Cl2 -> 2HCl\nMECHANISM:\nradical chain";
        let (mode, chunks) = segment_with_mode(raw);
        assert_eq!(mode, SegmentMode::HeaderFallback);
        assert_eq!(chunks.len(), 1);
        assert!(chunks[0].starts_with("REACTION EQUATION:"));
        assert!(chunks[0].contains("radical chain"));
    }

    #[test]
    fn test_header_fallback_inside_a_line() {
        let raw = "Proposed route: MECHANISM: nucleophilic attack";
        let (mode, chunks) = segment_with_mode(raw);
        assert_eq!(mode, SegmentMode::HeaderFallback);
        assert_eq!(chunks, vec!["MECHANISM: nucleophilic attack"]);

        let raw = "The mechanism: unknown. Thermodynamics: not computed.";
        assert_eq!(segment(raw), vec!["mechanism: unknown. Thermodynamics: not computed."]);
    }

    #[test]
    fn test_nothing_found() {
        let (mode, chunks) = segment_with_mode("I cannot help with that request.");
        assert_eq!(mode, SegmentMode::Nothing);
        assert!(chunks.is_empty());
        assert!(segment("").is_empty());
    }
}
