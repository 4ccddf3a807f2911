// ==========================================
// Slangeprogram - catalog domain model
// ==========================================
// Read-only reference tables loaded once per session:
// hose catalog, coupling sheets, mounting hardware,
// pressure-test and marking tables.
// Rows are never mutated after load; downstream entities
// hold references into the store.
// ==========================================

use crate::domain::types::Material;
use serde::{Deserialize, Serialize};

// ==========================================
// HoseRow - one hose catalog entry
// ==========================================
// Source: "Slanger_hylser" workbook, first sheet.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HoseRow {
    pub product_no: String,
    /// "Beskrivelse" - compact catalog description
    pub description: String,
    /// "Beskrivelse_2" - long-form description used in search
    pub description_2: String,
    /// "Dimensjon" - nominal size digits
    pub dimension: String,
    /// "Trykk(bar)" - working pressure; None when missing or
    /// not numeric in the source sheet
    pub pressure_bar: Option<f64>,
    /// Steel ferrule ("Stål hylse") product pair
    pub steel_ferrule: Option<FerruleRef>,
    /// Stainless ferrule ("316 hylse") product pair
    pub stainless_ferrule: Option<FerruleRef>,
}

impl HoseRow {
    /// Ferrule pair for the chosen material, if the catalog has one.
    pub fn ferrule(&self, material: Material) -> Option<&FerruleRef> {
        match material {
            Material::Steel => self.steel_ferrule.as_ref(),
            Material::Stainless => self.stainless_ferrule.as_ref(),
        }
    }
}

/// Product number + description pair for a ferrule/sleeve item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FerruleRef {
    pub product_no: String,
    pub description: String,
}

// ==========================================
// CouplingSheet - one (size, variant) partition
// ==========================================
// The sheet name is the sole source of size and variant
// classification, e.g. "Kuplinger 16(st)", "Kuplinger 8(5-316)".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouplingSheet {
    pub name: String,
    pub rows: Vec<CouplingRow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CouplingRow {
    pub product_no: String,
    pub description: String,
}

// ==========================================
// PartRow - generic support-table entry
// ==========================================
// Used by the mounting, pressure-test and marking tables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartRow {
    pub product_no: String,
    pub description: String,
}

// ==========================================
// CatalogStore - the reference data store
// ==========================================
// Owns every catalog row for the session. Table order is
// significant throughout: the hose catalog and coupling
// sheets are priority-ordered, and the mounting table is
// addressed by row index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogStore {
    pub hoses: Vec<HoseRow>,
    pub coupling_sheets: Vec<CouplingSheet>,
    pub mounting: Vec<PartRow>,
    pub pressure_test: Vec<PartRow>,
    pub marking: Vec<PartRow>,
}

impl CatalogStore {
    pub fn sheet_by_name(&self, name: &str) -> Option<&CouplingSheet> {
        self.coupling_sheets.iter().find(|s| s.name == name)
    }
}
