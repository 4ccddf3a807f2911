// ==========================================
// Slangeprogram - specification parser
// ==========================================
// Turns the compact textual hose specification
// "slange/lengde/kupling1/kupling2[/vinkel]" into typed
// fragments. Parsing never fails: malformed input degrades
// to partial results that downstream code reads as
// "not found".
// ==========================================

use crate::domain::ParsedSpecification;

/// Parse a compact hose specification line.
///
/// # Rules
/// - Degree marks are stripped before splitting on '/'.
/// - With 4 or more segments, positions 1..4 are
///   hose/length/coupling1/coupling2 and a 5th segment is the
///   angle; extra segments are ignored.
/// - With fewer than 4 segments, hose and length are taken only
///   when at least 2 segments exist, and a 3rd segment becomes
///   coupling 1. A lone segment maps to nothing. This asymmetry
///   matches long-standing operator expectations and is kept.
/// - The length is the digits of its segment parsed as an
///   integer; anything else leaves it absent.
/// - Empty segments are normalized to absent.
pub fn parse(text: &str) -> ParsedSpecification {
    let s = text.trim().replace('°', "");
    let parts: Vec<&str> = s.split('/').collect();

    let mut spec = ParsedSpecification::default();

    if parts.len() >= 4 {
        spec.hose = fragment(parts[0]);
        spec.length_mm = parse_length(parts[1]);
        spec.coupling_1 = fragment(parts[2]);
        spec.coupling_2 = fragment(parts[3]);
        if parts.len() >= 5 {
            spec.angle = fragment(parts[4]);
        }
    } else {
        if parts.len() >= 2 {
            spec.hose = fragment(parts[0]);
            spec.length_mm = parse_length(parts[1]);
        }
        if parts.len() >= 3 {
            spec.coupling_1 = fragment(parts[2]);
        }
    }

    spec
}

fn fragment(part: &str) -> Option<String> {
    if part.is_empty() {
        None
    } else {
        Some(part.to_string())
    }
}

/// Digits of the segment as an integer; absent on failure.
fn parse_length(part: &str) -> Option<i64> {
    let digits: String = part.chars().filter(|c| c.is_ascii_digit()).collect();
    digits.parse().ok()
}
