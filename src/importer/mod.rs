// ==========================================
// Slangeprogram - import layer
// ==========================================
// External catalog data in. Loads the reference workbooks
// into the in-memory CatalogStore; the engine never touches
// files itself.
// ==========================================

pub mod error;
pub mod workbook;

pub use error::{ImportError, ImportResult};
pub use workbook::CatalogImporter;
