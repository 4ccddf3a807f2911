// ==========================================
// Slangeprogram - catalog workbook importer
// ==========================================
// Loads the reference data store from the two catalog
// workbooks: "Slanger_hylser" (hose catalog on the first
// sheet, support tables on "MONT"/"Trykktest"/"Prikling")
// and the coupling workbook with one sheet per
// size/variant combination.
// Column headers are trimmed before mapping; blank rows
// are skipped; sheet order is preserved since it is the
// downstream priority order.
// ==========================================

use crate::domain::{
    CatalogStore, CouplingRow, CouplingSheet, FerruleRef, HoseRow, PartRow,
};
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

type Workbook = Xlsx<BufReader<File>>;
type Record = HashMap<String, String>;

// ===== column headers (the workbooks' contract) =====
const COL_PRODUCT_NO: &str = "Prod.no";
const COL_DESCRIPTION: &str = "Beskrivelse";
const COL_DESCRIPTION_2: &str = "Beskrivelse_2";
const COL_DIMENSION: &str = "Dimensjon";
const COL_PRESSURE: &str = "Trykk(bar)";
// "Posd.no" is the workbook's own spelling
const COL_STEEL_FERRULE_NO: &str = "Stål hylse(Posd.no)";
const COL_STEEL_FERRULE_DESC: &str = "Stål hylse(beskrivelse)";
const COL_STAINLESS_FERRULE_NO: &str = "316 hylse(Posd.no)";
const COL_STAINLESS_FERRULE_DESC: &str = "316 hylse(beskrivelse)";

// ===== support sheet names =====
const SHEET_MOUNTING: &str = "MONT";
const SHEET_PRESSURE_TEST: &str = "Trykktest";
const SHEET_MARKING: &str = "Prikling";

// ==========================================
// CatalogImporter
// ==========================================
pub struct CatalogImporter;

impl CatalogImporter {
    /// Load the full reference data store from the main and
    /// coupling workbooks.
    pub fn load_store(
        main_path: impl AsRef<Path>,
        coupling_path: impl AsRef<Path>,
    ) -> ImportResult<CatalogStore> {
        let main_path = main_path.as_ref();
        let coupling_path = coupling_path.as_ref();

        let mut main_wb = open(main_path)?;
        let hose_sheet = first_sheet_name(&main_wb, main_path)?;
        let hoses: Vec<HoseRow> = sheet_records(&mut main_wb, &hose_sheet)?
            .iter()
            .map(hose_from_record)
            .collect();

        let mounting = part_rows(&mut main_wb, SHEET_MOUNTING)?;
        let pressure_test = part_rows(&mut main_wb, SHEET_PRESSURE_TEST)?;
        let marking = part_rows(&mut main_wb, SHEET_MARKING)?;

        let mut coupling_wb = open(coupling_path)?;
        let sheet_names: Vec<String> = coupling_wb.sheet_names().to_vec();
        let mut coupling_sheets = Vec::with_capacity(sheet_names.len());
        for name in sheet_names {
            let rows = sheet_records(&mut coupling_wb, &name)?
                .iter()
                .map(|rec| CouplingRow {
                    product_no: field(rec, COL_PRODUCT_NO),
                    description: field(rec, COL_DESCRIPTION),
                })
                .collect();
            coupling_sheets.push(CouplingSheet { name, rows });
        }

        tracing::info!(
            hoses = hoses.len(),
            coupling_sheets = coupling_sheets.len(),
            mounting_rows = mounting.len(),
            "catalogs loaded"
        );

        Ok(CatalogStore {
            hoses,
            coupling_sheets,
            mounting,
            pressure_test,
            marking,
        })
    }
}

fn open(path: &Path) -> ImportResult<Workbook> {
    if !path.exists() {
        return Err(ImportError::FileNotFound(path.display().to_string()));
    }

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    if ext != "xlsx" && ext != "xls" {
        return Err(ImportError::UnsupportedFormat(ext.to_string()));
    }

    open_workbook(path).map_err(|e: calamine::XlsxError| ImportError::ExcelParseError(e.to_string()))
}

fn first_sheet_name(workbook: &Workbook, path: &Path) -> ImportResult<String> {
    workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| ImportError::ExcelParseError(format!("{}: ingen ark", path.display())))
}

/// Read one sheet into header-keyed records, trimming headers
/// and cell text and skipping fully blank rows.
fn sheet_records(workbook: &mut Workbook, sheet_name: &str) -> ImportResult<Vec<Record>> {
    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|_| ImportError::SheetNotFound(sheet_name.to_string()))?;

    let mut rows = range.rows();
    let header_row = rows
        .next()
        .ok_or_else(|| ImportError::EmptySheet(sheet_name.to_string()))?;

    let headers: Vec<String> = header_row
        .iter()
        .map(|cell| cell.to_string().trim().to_string())
        .collect();

    for required in [COL_PRODUCT_NO, COL_DESCRIPTION] {
        if !headers.iter().any(|h| h == required) {
            return Err(ImportError::MissingColumn {
                sheet: sheet_name.to_string(),
                column: required.to_string(),
            });
        }
    }

    let mut records = Vec::new();
    for data_row in rows {
        let mut record = Record::new();
        for (col_idx, cell) in data_row.iter().enumerate() {
            if let Some(header) = headers.get(col_idx) {
                record.insert(header.clone(), cell.to_string().trim().to_string());
            }
        }
        if record.values().all(|v| v.is_empty()) {
            continue;
        }
        records.push(record);
    }

    Ok(records)
}

fn part_rows(workbook: &mut Workbook, sheet_name: &str) -> ImportResult<Vec<PartRow>> {
    Ok(sheet_records(workbook, sheet_name)?
        .iter()
        .map(|rec| PartRow {
            product_no: field(rec, COL_PRODUCT_NO),
            description: field(rec, COL_DESCRIPTION),
        })
        .collect())
}

fn hose_from_record(record: &Record) -> HoseRow {
    HoseRow {
        product_no: field(record, COL_PRODUCT_NO),
        description: field(record, COL_DESCRIPTION),
        description_2: field(record, COL_DESCRIPTION_2),
        dimension: field(record, COL_DIMENSION),
        pressure_bar: parse_pressure(record.get(COL_PRESSURE)),
        steel_ferrule: ferrule(
            field(record, COL_STEEL_FERRULE_NO),
            field(record, COL_STEEL_FERRULE_DESC),
        ),
        stainless_ferrule: ferrule(
            field(record, COL_STAINLESS_FERRULE_NO),
            field(record, COL_STAINLESS_FERRULE_DESC),
        ),
    }
}

fn field(record: &Record, column: &str) -> String {
    record.get(column).cloned().unwrap_or_default()
}

/// Pressure cells may use a decimal comma; anything that still
/// fails to parse becomes None (the certificate builder
/// defaults it to 0).
fn parse_pressure(value: Option<&String>) -> Option<f64> {
    value?.trim().replace(',', ".").parse().ok()
}

fn ferrule(product_no: String, description: String) -> Option<FerruleRef> {
    if product_no.is_empty() {
        None
    } else {
        Some(FerruleRef {
            product_no,
            description,
        })
    }
}
