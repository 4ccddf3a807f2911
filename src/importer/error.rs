// ==========================================
// Slangeprogram - import error types
// ==========================================
// thiserror derive; errors here stop the current load and
// are surfaced to the operator. The engine itself never
// produces errors (absence is its "not found" signal).
// ==========================================

use thiserror::Error;

/// Catalog import errors.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== file errors =====
    #[error("fant ikke filen: {0}")]
    FileNotFound(String),

    #[error("filformatet støttes ikke: {0} (kun .xlsx/.xls)")]
    UnsupportedFormat(String),

    #[error("kunne ikke lese Excel-fil: {0}")]
    ExcelParseError(String),

    // ===== workbook structure errors =====
    #[error("fant ikke arket \"{0}\"")]
    SheetNotFound(String),

    #[error("arket \"{0}\" har ingen rader")]
    EmptySheet(String),

    #[error("arket \"{sheet}\" mangler kolonnen \"{column}\"")]
    MissingColumn { sheet: String, column: String },
}

pub type ImportResult<T> = Result<T, ImportError>;
