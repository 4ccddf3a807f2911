// ==========================================
// Slangeprogram - order-side domain model
// ==========================================
// Transient values produced per user submission: the parsed
// hose specification, the resolver result referencing catalog
// rows, the assembled output line items and the certificate
// record.
// ==========================================

use crate::domain::catalog::{CouplingRow, HoseRow};
use crate::domain::types::{Quantity, Warehouse};
use serde::Serialize;
use std::collections::BTreeMap;

// ==========================================
// ParsedSpecification
// ==========================================
// Result of parsing "slange/lengde/kupling1/kupling2[/vinkel]".
// Absent fields are the documented "no match" signal; parsing
// never fails on malformed input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSpecification {
    pub hose: Option<String>,
    /// Length in whole millimetres; None when the length segment
    /// is missing or holds no digits.
    pub length_mm: Option<i64>,
    pub coupling_1: Option<String>,
    pub coupling_2: Option<String>,
    pub angle: Option<String>,
}

// ==========================================
// ResolvedAssembly
// ==========================================
// The resolver output for one hose order line. Holds
// references into the CatalogStore; every field can be
// absent ("not found") and downstream consumers must
// render placeholders rather than fail.
// Invariant: size_code is derived from sheet_name only.
#[derive(Debug, Clone, Default)]
pub struct ResolvedAssembly<'a> {
    pub hose: Option<&'a HoseRow>,
    pub coupling_1: Option<&'a CouplingRow>,
    pub coupling_2: Option<&'a CouplingRow>,
    pub sheet_name: Option<&'a str>,
    /// Two-character zero-padded nominal size, e.g. "04"
    pub size_code: Option<String>,
    pub length_mm: Option<i64>,
}

// ==========================================
// OutputLineItem - one row of the final order
// ==========================================
// Rendered by the export layer under the fixed header
// ["Prod.no", "Beskrivelse", "Lager", "Antall"].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputLineItem {
    pub product_no: String,
    pub description: String,
    pub warehouse: Warehouse,
    pub quantity: Quantity,
}

impl OutputLineItem {
    pub fn new(
        product_no: impl Into<String>,
        description: impl Into<String>,
        warehouse: Warehouse,
        quantity: Quantity,
    ) -> Self {
        Self {
            product_no: product_no.into(),
            description: description.into(),
            warehouse,
            quantity,
        }
    }

    /// Rescaled copy for multi-unit orders; only the quantity
    /// changes, and empty quantities stay empty.
    pub fn scaled(&self, multiplier: u32) -> Self {
        Self {
            quantity: self.quantity.scaled(multiplier),
            ..self.clone()
        }
    }
}

// ==========================================
// PressureCertificateRecord
// ==========================================
// Field values for one pressure-test certificate, placed
// into a fixed-layout template by the export side. The cell
// keys in `cell_map` are a bit-exact contract with the
// "Mal Trykktest Sertifikat" template.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PressureCertificateRecord {
    pub customer: String,
    pub customer_order_no: String,
    pub internal_order_no: String,
    pub customer_part_no: String,
    /// Truncated "slange/lengde/kupling1/kupling2[/vinkel°]" string
    pub specification: String,
    pub size_code: String,
    pub length_mm: Option<i64>,
    pub coupling_summary: String,
    /// Production and test dates, both "dd.mm.yyyy"
    pub produced_date: String,
    pub tested_date: String,
    /// Pressures formatted with one decimal, in bar
    pub working_pressure: String,
    pub burst_pressure: String,
    pub test_pressure: String,
    pub unit_count: u32,
}

impl PressureCertificateRecord {
    /// Template cell reference -> value mapping.
    pub fn cell_map(&self) -> BTreeMap<&'static str, String> {
        let mut cells = BTreeMap::new();
        cells.insert("C7", self.customer.clone());
        cells.insert("C8", self.customer_order_no.clone());
        cells.insert("C9", self.internal_order_no.clone());
        cells.insert("C10", self.customer_part_no.clone());
        cells.insert("C12", self.specification.clone());
        cells.insert("C13", self.size_code.clone());
        cells.insert(
            "C14",
            self.length_mm.map(|l| l.to_string()).unwrap_or_default(),
        );
        cells.insert("C15", self.coupling_summary.clone());
        cells.insert("C16", self.unit_count.to_string());
        cells.insert("F7", self.produced_date.clone());
        cells.insert("F19", self.tested_date.clone());
        cells.insert("C18", self.working_pressure.clone());
        cells.insert("C19", self.burst_pressure.clone());
        cells.insert("C20", self.test_pressure.clone());
        cells
    }
}
