// ==========================================
// Slangeprogram - output row assembler
// ==========================================
// Combines a resolved assembly into the ordered output
// line-item sequence for one hose: header, hose product,
// couplings, conditional ferrule/mounting/pressure-test
// lines and the trailing separator.
// Missing catalog matches become placeholder lines so the
// operator can correct the order by hand; assembly never
// fails.
// ==========================================

use crate::domain::{CatalogStore, Material, OutputLineItem, Quantity, ResolvedAssembly, Warehouse};
use crate::engine::{lookup, resolver};

/// Hose length assumed when the specification gave none.
/// An explicit length of 0 is kept as 0, not defaulted.
const DEFAULT_LENGTH_MM: i64 = 1000;

/// Description prefix of pre-marked ("dot-marked") fittings.
const DOT_MARK_PREFIX: &str = "GSM";

/// Max chars of the hose description in display lines.
const HOSE_DISPLAY_WIDTH: usize = 7;

// ==========================================
// AssembleOptions
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// POS number for an optional "POS: <n>" marker line.
    pub pos_number: Option<String>,
    /// Pre-formatted header line, used verbatim when the caller
    /// already has the original textual specification.
    pub display_line: Option<String>,
    /// Angle between the couplings, appended as "/<angle>°".
    pub angle: String,
}

/// Assemble the output rows for one resolved hose order line.
///
/// Emission order is fixed: POS marker (optional), header,
/// hose, coupling 1, coupling 2, ferrule (conditional),
/// mounting (conditional), pressure test (when requested),
/// separator. A unit count above 1 rescales every numeric
/// quantity afterwards.
pub fn assemble(
    assembly: &ResolvedAssembly,
    material: Material,
    warehouse: Warehouse,
    pressure_test: bool,
    unit_count: u32,
    options: &AssembleOptions,
    store: &CatalogStore,
) -> Vec<OutputLineItem> {
    let mut rows = Vec::new();

    // (1) POS marker
    if let Some(pos) = options.pos_number.as_deref().filter(|p| !p.trim().is_empty()) {
        rows.push(OutputLineItem::new(
            "1",
            format!("POS: {}", pos),
            warehouse,
            Quantity::Int(1),
        ));
    }

    // (2) header / display line
    let header = match options.display_line.as_deref().filter(|l| !l.is_empty()) {
        Some(line) => line.to_string(),
        None => display_line(assembly, material, &options.angle),
    };
    rows.push(OutputLineItem::new("1", header, warehouse, Quantity::Int(1)));

    // (3) hose product, quantity in metres
    match assembly.hose {
        Some(hose) => {
            let metres = assembly.length_mm.unwrap_or(DEFAULT_LENGTH_MM) as f64 / 1000.0;
            rows.push(OutputLineItem::new(
                hose.product_no.clone(),
                hose.description.clone(),
                warehouse,
                Quantity::Dec(round3(metres)),
            ));
        }
        None => rows.push(OutputLineItem::new(
            "",
            "Fant ikke første produkt",
            warehouse,
            Quantity::Int(1),
        )),
    }

    // (4)/(5) couplings
    match assembly.coupling_1 {
        Some(row) => rows.push(OutputLineItem::new(
            row.product_no.clone(),
            row.description.clone(),
            warehouse,
            Quantity::Int(1),
        )),
        None => rows.push(OutputLineItem::new(
            "",
            "Fant ikke første kupling",
            warehouse,
            Quantity::Int(1),
        )),
    }
    match assembly.coupling_2 {
        Some(row) => rows.push(OutputLineItem::new(
            row.product_no.clone(),
            row.description.clone(),
            warehouse,
            Quantity::Int(1),
        )),
        None => rows.push(OutputLineItem::new(
            "",
            "Fant ikke andre kupling",
            warehouse,
            Quantity::Int(1),
        )),
    }

    // (6) ferrule/sleeve: skipped when both couplings are
    // dot-marked or the sheet variant ships pre-sleeved
    let dot_marked = dot_marked_count(assembly);
    let sheet_key = match assembly.sheet_name {
        Some(name) => resolver::extract_sheet_key(name),
        None => material.default_sheet_key().to_string(),
    };
    let pre_sleeved = sheet_key.contains("(M-st)") || sheet_key.contains("(GSM)");

    if dot_marked < 2 && !pre_sleeved {
        if let Some(ferrule) = assembly.hose.and_then(|h| h.ferrule(material)) {
            if !ferrule.product_no.is_empty() {
                let qty = if dot_marked == 0 { 2 } else { 1 };
                rows.push(OutputLineItem::new(
                    ferrule.product_no.clone(),
                    ferrule.description.clone(),
                    warehouse,
                    Quantity::Int(qty),
                ));
            }
        }
    }

    // (7) mounting hardware
    if let Some(mount) =
        lookup::mounting_row(assembly.size_code.as_deref(), &sheet_key, &store.mounting)
    {
        rows.push(OutputLineItem::new(
            mount.product_no.clone(),
            mount.description.clone(),
            warehouse,
            Quantity::Int(1),
        ));
    }

    // (8) pressure test
    if pressure_test {
        let length = assembly.length_mm.unwrap_or(DEFAULT_LENGTH_MM);
        match lookup::pressure_test_row(assembly.size_code.as_deref(), length, &store.pressure_test)
        {
            Some(row) => rows.push(OutputLineItem::new(
                row.product_no.clone(),
                row.description.clone(),
                warehouse,
                Quantity::Int(1),
            )),
            None => rows.push(OutputLineItem::new(
                "",
                "Trykktest: Ja",
                warehouse,
                Quantity::Int(1),
            )),
        }
    }

    // (9) trailing separator
    rows.push(OutputLineItem::new("1", "", warehouse, Quantity::Empty));

    if unit_count > 1 {
        rows = rows.iter().map(|row| row.scaled(unit_count)).collect();
    }

    rows
}

/// Synthesized header line: truncated hose and coupling
/// descriptions, length and optional angle suffix.
pub fn display_line(assembly: &ResolvedAssembly, material: Material, angle: &str) -> String {
    let hose = assembly
        .hose
        .map(|h| truncate_chars(&h.description, HOSE_DISPLAY_WIDTH))
        .unwrap_or_default();
    let length = assembly
        .length_mm
        .map(|l| l.to_string())
        .unwrap_or_default();
    let width = material.coupling_display_width();
    let coupling_1 = assembly
        .coupling_1
        .map(|c| truncate_chars(&c.description, width))
        .unwrap_or_default();
    let coupling_2 = assembly
        .coupling_2
        .map(|c| truncate_chars(&c.description, width))
        .unwrap_or_default();

    if angle.trim().is_empty() {
        format!("{}/{}/{}/{}", hose, length, coupling_1, coupling_2)
    } else {
        format!("{}/{}/{}/{}/{}°", hose, length, coupling_1, coupling_2, angle)
    }
}

/// Number of resolved couplings with a dot-marked ("GSM")
/// description.
fn dot_marked_count(assembly: &ResolvedAssembly) -> usize {
    [assembly.coupling_1, assembly.coupling_2]
        .iter()
        .flatten()
        .filter(|row| row.description.starts_with(DOT_MARK_PREFIX))
        .count()
}

/// Char-based truncation (descriptions may hold non-ASCII).
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CouplingRow, CouplingSheet, FerruleRef, HoseRow, PartRow};

    fn hose_row() -> HoseRow {
        HoseRow {
            product_no: "2001".to_string(),
            description: "G1K-08 slange".to_string(),
            description_2: "Slange 1/2\" 1SN".to_string(),
            dimension: "08".to_string(),
            pressure_bar: Some(100.0),
            steel_ferrule: Some(FerruleRef {
                product_no: "3001".to_string(),
                description: "Stål hylse 08".to_string(),
            }),
            stainless_ferrule: Some(FerruleRef {
                product_no: "3002".to_string(),
                description: "316 hylse 08".to_string(),
            }),
        }
    }

    fn coupling(description: &str) -> CouplingRow {
        CouplingRow {
            product_no: "4001".to_string(),
            description: description.to_string(),
        }
    }

    fn store() -> CatalogStore {
        CatalogStore {
            hoses: vec![hose_row()],
            coupling_sheets: vec![CouplingSheet {
                name: "Kuplinger 8(st)".to_string(),
                rows: vec![coupling("RK-08")],
            }],
            mounting: vec![
                PartRow {
                    product_no: "80001".to_string(),
                    description: "Montering liten".to_string(),
                },
                PartRow {
                    product_no: "80002".to_string(),
                    description: "Montering medium".to_string(),
                },
                PartRow {
                    product_no: "80003".to_string(),
                    description: "Montering stor".to_string(),
                },
                PartRow {
                    product_no: "80004".to_string(),
                    description: "Montering 5-316".to_string(),
                },
            ],
            pressure_test: vec![PartRow {
                product_no: "90094".to_string(),
                description: "Trykktest kort liten".to_string(),
            }],
            marking: Vec::new(),
        }
    }

    fn assembly<'a>(
        store: &'a CatalogStore,
        c1: &'a CouplingRow,
        c2: &'a CouplingRow,
        length: Option<i64>,
    ) -> ResolvedAssembly<'a> {
        ResolvedAssembly {
            hose: Some(&store.hoses[0]),
            coupling_1: Some(c1),
            coupling_2: Some(c2),
            sheet_name: Some("Kuplinger 8(st)"),
            size_code: Some("08".to_string()),
            length_mm: length,
        }
    }

    fn descriptions(rows: &[OutputLineItem]) -> Vec<&str> {
        rows.iter().map(|r| r.description.as_str()).collect()
    }

    // ==========================================
    // Line order and quantities
    // ==========================================

    #[test]
    fn test_assemble_full_sequence_and_hose_quantity() {
        let store = store();
        let c1 = coupling("RK-08");
        let c2 = coupling("RKV45-08");
        let asm = assembly(&store, &c1, &c2, Some(1500));

        let rows = assemble(
            &asm,
            Material::Steel,
            Warehouse::Lillestrom,
            false,
            1,
            &AssembleOptions::default(),
            &store,
        );

        // header, hose, c1, c2, ferrule, mounting, separator
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[1].quantity, Quantity::Dec(1.5));
        assert_eq!(rows[1].product_no, "2001");
        assert_eq!(rows[4].product_no, "3001"); // steel ferrule
        assert_eq!(rows[4].quantity, Quantity::Int(2));
        assert_eq!(rows[5].product_no, "80001"); // mounting row 0 for size 08
        assert_eq!(rows[6].quantity, Quantity::Empty);
        assert_eq!(rows[6].product_no, "1");
    }

    #[test]
    fn test_assemble_default_length() {
        let store = store();
        let c1 = coupling("RK-08");
        let c2 = coupling("RKV45-08");
        let asm = assembly(&store, &c1, &c2, None);

        let rows = assemble(
            &asm,
            Material::Steel,
            Warehouse::Lillestrom,
            false,
            1,
            &AssembleOptions::default(),
            &store,
        );
        assert_eq!(rows[1].quantity, Quantity::Dec(1.0));
    }

    #[test]
    fn test_assemble_explicit_zero_length_kept() {
        let store = store();
        let c1 = coupling("RK-08");
        let c2 = coupling("RKV45-08");
        let asm = assembly(&store, &c1, &c2, Some(0));

        let rows = assemble(
            &asm,
            Material::Steel,
            Warehouse::Lillestrom,
            false,
            1,
            &AssembleOptions::default(),
            &store,
        );
        // only an absent length falls back to the default
        assert_eq!(rows[1].quantity, Quantity::Dec(0.0));
        assert!(rows[0].description.starts_with("G1K-08 /0/"));
    }

    #[test]
    fn test_assemble_placeholders_when_nothing_resolved() {
        let store = store();
        let asm = ResolvedAssembly::default();

        let rows = assemble(
            &asm,
            Material::Steel,
            Warehouse::Trondheim,
            false,
            1,
            &AssembleOptions::default(),
            &store,
        );

        assert_eq!(
            descriptions(&rows),
            vec![
                "///",
                "Fant ikke første produkt",
                "Fant ikke første kupling",
                "Fant ikke andre kupling",
                "",
            ]
        );
        assert!(rows.iter().all(|r| r.warehouse == Warehouse::Trondheim));
    }

    #[test]
    fn test_assemble_pos_marker_and_verbatim_header() {
        let store = store();
        let c1 = coupling("RK-08");
        let c2 = coupling("RKV45-08");
        let asm = assembly(&store, &c1, &c2, Some(2000));

        let options = AssembleOptions {
            pos_number: Some("12".to_string()),
            display_line: Some("G1K/2000/RK/RKV45".to_string()),
            angle: String::new(),
        };
        let rows = assemble(
            &asm,
            Material::Steel,
            Warehouse::Lillestrom,
            false,
            1,
            &options,
            &store,
        );

        assert_eq!(rows[0].description, "POS: 12");
        assert_eq!(rows[0].product_no, "1");
        assert_eq!(rows[1].description, "G1K/2000/RK/RKV45");
    }

    // ==========================================
    // Ferrule inclusion rules
    // ==========================================

    #[test]
    fn test_ferrule_one_dot_marked_coupling() {
        let store = store();
        let c1 = coupling("GSM-08");
        let c2 = coupling("RKV45-08");
        let asm = assembly(&store, &c1, &c2, Some(1000));

        let rows = assemble(
            &asm,
            Material::Steel,
            Warehouse::Lillestrom,
            false,
            1,
            &AssembleOptions::default(),
            &store,
        );
        let ferrule = rows.iter().find(|r| r.product_no == "3001").unwrap();
        assert_eq!(ferrule.quantity, Quantity::Int(1));
    }

    #[test]
    fn test_ferrule_omitted_when_both_dot_marked() {
        let store = store();
        let c1 = coupling("GSM-08 A");
        let c2 = coupling("GSM-08 B");
        let asm = assembly(&store, &c1, &c2, Some(1000));

        let rows = assemble(
            &asm,
            Material::Steel,
            Warehouse::Lillestrom,
            false,
            1,
            &AssembleOptions::default(),
            &store,
        );
        assert!(rows.iter().all(|r| r.product_no != "3001"));
    }

    #[test]
    fn test_ferrule_omitted_for_pre_sleeved_variants() {
        let store = store();
        let c1 = coupling("RK-08");
        let c2 = coupling("RKV45-08");
        for sheet_name in ["Kuplinger 8(M-st)", "Kuplinger 8(GSM)"] {
            let mut asm = assembly(&store, &c1, &c2, Some(1000));
            asm.sheet_name = Some(sheet_name);
            let rows = assemble(
                &asm,
                Material::Steel,
                Warehouse::Lillestrom,
                false,
                1,
                &AssembleOptions::default(),
                &store,
            );
            assert!(rows.iter().all(|r| r.product_no != "3001"), "{}", sheet_name);
        }
    }

    #[test]
    fn test_ferrule_material_selects_column() {
        let store = store();
        let c1 = coupling("RK-08");
        let c2 = coupling("RKV45-08");
        let mut asm = assembly(&store, &c1, &c2, Some(1000));
        asm.sheet_name = Some("Kuplinger 8(316)");

        let rows = assemble(
            &asm,
            Material::Stainless,
            Warehouse::Lillestrom,
            false,
            1,
            &AssembleOptions::default(),
            &store,
        );
        assert!(rows.iter().any(|r| r.product_no == "3002"));
    }

    // ==========================================
    // Pressure-test line
    // ==========================================

    #[test]
    fn test_pressure_test_line_resolved() {
        let store = store();
        let c1 = coupling("RK-08");
        let c2 = coupling("RKV45-08");
        let asm = assembly(&store, &c1, &c2, Some(1500));

        let rows = assemble(
            &asm,
            Material::Steel,
            Warehouse::Lillestrom,
            true,
            1,
            &AssembleOptions::default(),
            &store,
        );
        assert!(rows.iter().any(|r| r.product_no == "90094"));
    }

    #[test]
    fn test_pressure_test_placeholder_when_unresolved() {
        let store = store();
        let asm = ResolvedAssembly::default(); // no size code

        let rows = assemble(
            &asm,
            Material::Steel,
            Warehouse::Lillestrom,
            true,
            1,
            &AssembleOptions::default(),
            &store,
        );
        assert!(rows.iter().any(|r| r.description == "Trykktest: Ja"));
    }

    // ==========================================
    // Quantity rescaling
    // ==========================================

    #[test]
    fn test_unit_count_rescales_all_numeric_quantities() {
        let store = store();
        let c1 = coupling("RK-08");
        let c2 = coupling("RKV45-08");
        let asm = assembly(&store, &c1, &c2, Some(1500));

        let rows = assemble(
            &asm,
            Material::Steel,
            Warehouse::Lillestrom,
            false,
            3,
            &AssembleOptions::default(),
            &store,
        );

        assert_eq!(rows[0].quantity, Quantity::Int(3)); // header 1 -> 3
        assert_eq!(rows[1].quantity, Quantity::Dec(4.5)); // hose 1.5 -> 4.5
        assert_eq!(rows[2].quantity, Quantity::Int(3));
        assert_eq!(rows.last().unwrap().quantity, Quantity::Empty); // separator untouched
    }

    // ==========================================
    // Display line
    // ==========================================

    #[test]
    fn test_display_line_truncation_steel() {
        let store = store();
        let c1 = coupling("RKV45-08 lang beskrivelse");
        let c2 = coupling("RK-08");
        let asm = assembly(&store, &c1, &c2, Some(1500));

        // hose cut to 7 chars, couplings to 9 for steel
        assert_eq!(
            display_line(&asm, Material::Steel, ""),
            "G1K-08 /1500/RKV45-08 /RK-08"
        );
    }

    #[test]
    fn test_display_line_stainless_width_and_angle() {
        let store = store();
        let c1 = coupling("RKV45-08 lang beskrivelse");
        let c2 = coupling("RK-08");
        let asm = assembly(&store, &c1, &c2, Some(1500));

        assert_eq!(
            display_line(&asm, Material::Stainless, "45"),
            "G1K-08 /1500/RKV45-08 lang b/RK-08/45°"
        );
    }
}
