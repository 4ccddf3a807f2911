// ==========================================
// Slangeprogram - catalog resolver
// ==========================================
// Resolves parsed specification fragments against the
// reference data store: best-matching hose row, best
// coupling pair across all sheets, and the nominal size
// code derived from the winning sheet's name.
// Never errors on missing matches: absence is the
// documented "not found" signal.
// ==========================================

use crate::domain::{
    CatalogStore, CouplingRow, CouplingSheet, HoseRow, Material, ParsedSpecification,
    ResolvedAssembly,
};
use crate::engine::matcher::{find_first, starts_or_contains};
use once_cell::sync::Lazy;
use regex::Regex;

/// Sheet names carry the size as "Kuplinger <digits>(variant)".
static SIZE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^Kuplinger\s+(\d{1,3})").unwrap());

/// Variant marker between parentheses, e.g. "(5-316)".
static VARIANT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\(([^)]+)\)").unwrap());

/// Resolve a parsed specification against the catalog.
///
/// # Sheet selection
/// A coupling sheet is a candidate only when it matches both
/// coupling fragments. Among candidates, a sheet whose name
/// contains the material's marker ("316"/"st") is preferred;
/// otherwise the first candidate in stored sheet order wins.
/// When no sheet matches both fragments, each fragment is
/// searched standalone across all sheets and the fragment-1
/// match's sheet is recorded for size derivation.
pub fn resolve<'a>(
    parsed: &ParsedSpecification,
    store: &'a CatalogStore,
    material: Option<Material>,
) -> ResolvedAssembly<'a> {
    let hose = parsed
        .hose
        .as_deref()
        .and_then(|frag| find_hose(&store.hoses, frag));

    let mut assembly = ResolvedAssembly {
        hose,
        length_mm: parsed.length_mm,
        ..Default::default()
    };

    let candidates = collect_candidates(store, parsed);

    if !candidates.is_empty() {
        let preferred = material.and_then(|m| {
            candidates
                .iter()
                .find(|c| c.sheet.name.contains(m.sheet_marker()))
        });
        let picked = preferred.unwrap_or(&candidates[0]);

        tracing::debug!(sheet = %picked.sheet.name, "coupling sheet selected");
        assembly.coupling_1 = Some(picked.coupling_1);
        assembly.coupling_2 = Some(picked.coupling_2);
        assembly.sheet_name = Some(picked.sheet.name.as_str());
    } else {
        // Standalone fallback: each fragment may match in a
        // different sheet; fragment 1's sheet drives the size.
        if let Some(frag) = parsed.coupling_1.as_deref() {
            if let Some((sheet, row)) = find_standalone(&store.coupling_sheets, frag) {
                assembly.coupling_1 = Some(row);
                assembly.sheet_name = Some(sheet.name.as_str());
            }
        }
        if let Some(frag) = parsed.coupling_2.as_deref() {
            if let Some((sheet, row)) = find_standalone(&store.coupling_sheets, frag) {
                assembly.coupling_2 = Some(row);
                if assembly.sheet_name.is_none() {
                    assembly.sheet_name = Some(sheet.name.as_str());
                }
            }
        }
    }

    assembly.size_code = assembly.sheet_name.and_then(derive_size_code);
    assembly
}

/// First hose row whose primary description starts with or
/// contains the fragment, or whose secondary description does.
/// Catalog order is the priority order.
pub fn find_hose<'a>(rows: &'a [HoseRow], fragment: &str) -> Option<&'a HoseRow> {
    find_first(rows, |row| {
        starts_or_contains(&row.description, fragment)
            || starts_or_contains(&row.description_2, fragment)
    })
}

struct SheetCandidate<'a> {
    sheet: &'a CouplingSheet,
    coupling_1: &'a CouplingRow,
    coupling_2: &'a CouplingRow,
}

fn collect_candidates<'a>(
    store: &'a CatalogStore,
    parsed: &ParsedSpecification,
) -> Vec<SheetCandidate<'a>> {
    let (Some(frag_1), Some(frag_2)) = (parsed.coupling_1.as_deref(), parsed.coupling_2.as_deref())
    else {
        return Vec::new();
    };

    store
        .coupling_sheets
        .iter()
        .filter_map(|sheet| {
            scan_sheet_pair(sheet, frag_1, frag_2).map(|(coupling_1, coupling_2)| SheetCandidate {
                sheet,
                coupling_1,
                coupling_2,
            })
        })
        .collect()
}

/// Single forward scan tracking the latest row matching each
/// fragment, stopping as soon as both are satisfied. The
/// overwrite-until-both behaviour is deliberate: with several
/// fragment-1 matches before the first fragment-2 match, the
/// last one before the stop wins.
fn scan_sheet_pair<'a>(
    sheet: &'a CouplingSheet,
    frag_1: &str,
    frag_2: &str,
) -> Option<(&'a CouplingRow, &'a CouplingRow)> {
    let mut found_1 = None;
    let mut found_2 = None;

    for row in &sheet.rows {
        if starts_or_contains(&row.description, frag_1) {
            found_1 = Some(row);
        }
        if starts_or_contains(&row.description, frag_2) {
            found_2 = Some(row);
        }
        if found_1.is_some() && found_2.is_some() {
            break;
        }
    }

    found_1.zip(found_2)
}

/// First sheet (in stored order) with any row matching the
/// fragment, together with that row.
fn find_standalone<'a>(
    sheets: &'a [CouplingSheet],
    fragment: &str,
) -> Option<(&'a CouplingSheet, &'a CouplingRow)> {
    for sheet in sheets {
        if let Some(row) = find_first(&sheet.rows, |r| starts_or_contains(&r.description, fragment))
        {
            return Some((sheet, row));
        }
    }
    None
}

/// Two-character zero-padded size from a sheet name,
/// e.g. "Kuplinger 4(st)" -> "04".
pub fn derive_size_code(sheet_name: &str) -> Option<String> {
    SIZE_RE
        .captures(sheet_name)
        .map(|caps| format!("{:0>2}", &caps[1]))
}

/// Sheet-variant key from a sheet name: the parenthesized
/// marker when present, else a best-effort classification.
pub fn extract_sheet_key(sheet_name: &str) -> String {
    if sheet_name.is_empty() {
        return String::new();
    }
    if let Some(caps) = VARIANT_RE.captures(sheet_name) {
        return format!("({})", &caps[1]);
    }
    if sheet_name.contains("316") {
        return "(316)".to_string();
    }
    if sheet_name.contains("GSM") {
        return "(GSM)".to_string();
    }
    if sheet_name.contains("GS") {
        return "(GS)".to_string();
    }
    String::new()
}
