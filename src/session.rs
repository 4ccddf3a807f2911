// ==========================================
// Slangeprogram - order session context
// ==========================================
// The accumulating state for one order: output rows, the
// POS counter and the pending certificate requests. Held
// explicitly and passed to each operation; the engine
// functions stay pure and the session only appends their
// results. One session per operator, no concurrent writers.
// ==========================================

use crate::domain::{
    CatalogStore, Material, OutputLineItem, PressureCertificateRecord, ResolvedAssembly, Warehouse,
};
use crate::engine::{assembler, certificate, parser, resolver, AssembleOptions, CertificateDetails};
use chrono::NaiveDate;

// ==========================================
// CertificateRequest - deferred certificate input
// ==========================================
// Captured when a pressure-tested hose is added; the records
// themselves are built at export time.
#[derive(Debug, Clone)]
pub struct CertificateRequest<'a> {
    pub assembly: ResolvedAssembly<'a>,
    pub material: Material,
    pub details: CertificateDetails,
}

// ==========================================
// QuickEntry - one quick-mode submission
// ==========================================
#[derive(Debug, Clone)]
pub struct QuickEntry<'q> {
    /// Raw "slange/lengde/kupling1/kupling2" line, used
    /// verbatim as the order's display line.
    pub line: &'q str,
    pub material: Material,
    pub warehouse: Warehouse,
    pub unit_count: u32,
    /// POS number when the hose should get a "POS:" marker.
    pub pos_number: Option<String>,
    /// Present when the hose is to be pressure tested.
    pub pressure_test: Option<CertificateDetails>,
}

// ==========================================
// OrderSession
// ==========================================
#[derive(Debug)]
pub struct OrderSession<'a> {
    store: &'a CatalogStore,
    output_rows: Vec<OutputLineItem>,
    certificates: Vec<CertificateRequest<'a>>,
    pos_counter: u32,
}

impl<'a> OrderSession<'a> {
    pub fn new(store: &'a CatalogStore) -> Self {
        Self {
            store,
            output_rows: Vec::new(),
            certificates: Vec::new(),
            pos_counter: 1,
        }
    }

    pub fn rows(&self) -> &[OutputLineItem] {
        &self.output_rows
    }

    pub fn certificate_requests(&self) -> &[CertificateRequest<'a>] {
        &self.certificates
    }

    /// Suggested POS number for the next marked hose.
    pub fn pos_counter(&self) -> u32 {
        self.pos_counter
    }

    /// Parse, resolve and append one quick-mode line.
    /// Returns the number of rows added.
    pub fn add_quick_entry(&mut self, entry: QuickEntry) -> usize {
        let parsed = parser::parse(entry.line);
        let assembly = resolver::resolve(&parsed, self.store, Some(entry.material));
        let options = AssembleOptions {
            pos_number: entry.pos_number,
            display_line: Some(entry.line.trim().to_string()),
            angle: String::new(),
        };
        self.add_assembly(
            assembly,
            entry.material,
            entry.warehouse,
            entry.unit_count,
            entry.pressure_test,
            &options,
        )
    }

    /// Append the rows for an already resolved assembly (full
    /// mode, where the operator picked the rows directly).
    /// Returns the number of rows added.
    pub fn add_assembly(
        &mut self,
        assembly: ResolvedAssembly<'a>,
        material: Material,
        warehouse: Warehouse,
        unit_count: u32,
        pressure_test: Option<CertificateDetails>,
        options: &AssembleOptions,
    ) -> usize {
        let rows = assembler::assemble(
            &assembly,
            material,
            warehouse,
            pressure_test.is_some(),
            unit_count,
            options,
            self.store,
        );
        let added = rows.len();
        self.output_rows.extend(rows);

        // a numeric POS marker advances the counter
        if let Some(pos) = options.pos_number.as_deref() {
            if let Ok(number) = pos.trim().parse::<u32>() {
                self.pos_counter = number + 1;
            }
        }

        if let Some(details) = pressure_test {
            self.certificates.push(CertificateRequest {
                assembly,
                material,
                details,
            });
        }

        tracing::debug!(added, total = self.output_rows.len(), "rows appended");
        added
    }

    /// Drop the most recent output row ("Slett siste").
    pub fn remove_last_row(&mut self) -> Option<OutputLineItem> {
        self.output_rows.pop()
    }

    /// Empty the whole order ("Tøm alt").
    pub fn clear(&mut self) {
        self.output_rows.clear();
        self.certificates.clear();
    }

    /// Build the certificate records for every pressure-tested
    /// hose in the order, dated `today`.
    pub fn build_certificates(&self, today: NaiveDate) -> Vec<PressureCertificateRecord> {
        self.certificates
            .iter()
            .map(|req| {
                certificate::build_certificate(&req.assembly, req.material, &req.details, today)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CouplingRow, CouplingSheet, HoseRow, Quantity};

    fn store() -> CatalogStore {
        CatalogStore {
            hoses: vec![HoseRow {
                product_no: "2001".to_string(),
                description: "G1K-08".to_string(),
                description_2: "Slange 1/2\" 1SN".to_string(),
                dimension: "08".to_string(),
                pressure_bar: Some(100.0),
                steel_ferrule: None,
                stainless_ferrule: None,
            }],
            coupling_sheets: vec![CouplingSheet {
                name: "Kuplinger 8(st)".to_string(),
                rows: vec![
                    CouplingRow {
                        product_no: "4001".to_string(),
                        description: "RK-08".to_string(),
                    },
                    CouplingRow {
                        product_no: "4002".to_string(),
                        description: "RKV45-08".to_string(),
                    },
                ],
            }],
            ..Default::default()
        }
    }

    fn entry<'q>(line: &'q str) -> QuickEntry<'q> {
        QuickEntry {
            line,
            material: Material::Steel,
            warehouse: Warehouse::Lillestrom,
            unit_count: 1,
            pos_number: None,
            pressure_test: None,
        }
    }

    #[test]
    fn test_quick_entry_appends_rows_verbatim_header() {
        let store = store();
        let mut session = OrderSession::new(&store);

        let added = session.add_quick_entry(entry("G1K/2000/RK-08/RKV45"));
        assert_eq!(added, session.rows().len());
        assert_eq!(session.rows()[0].description, "G1K/2000/RK-08/RKV45");
        assert_eq!(session.rows()[1].quantity, Quantity::Dec(2.0));
    }

    #[test]
    fn test_pos_counter_advances_on_numeric_pos() {
        let store = store();
        let mut session = OrderSession::new(&store);
        assert_eq!(session.pos_counter(), 1);

        let mut e = entry("G1K/2000/RK-08/RKV45");
        e.pos_number = Some("7".to_string());
        session.add_quick_entry(e);
        assert_eq!(session.pos_counter(), 8);
        assert_eq!(session.rows()[0].description, "POS: 7");

        // non-numeric POS leaves the counter alone
        let mut e = entry("G1K/2000/RK-08/RKV45");
        e.pos_number = Some("A4".to_string());
        session.add_quick_entry(e);
        assert_eq!(session.pos_counter(), 8);
    }

    #[test]
    fn test_pressure_test_queues_certificate() {
        let store = store();
        let mut session = OrderSession::new(&store);

        let mut e = entry("G1K/2000/RK-08/RKV45");
        e.pressure_test = Some(CertificateDetails {
            customer: "Kystverket".to_string(),
            unit_count: 1,
            ..Default::default()
        });
        session.add_quick_entry(e);

        assert_eq!(session.certificate_requests().len(), 1);
        let records =
            session.build_certificates(NaiveDate::from_ymd_opt(2026, 2, 24).unwrap());
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].customer, "Kystverket");
        assert_eq!(records[0].working_pressure, "100.0");
        assert_eq!(records[0].burst_pressure, "400.0");
    }

    #[test]
    fn test_remove_last_and_clear() {
        let store = store();
        let mut session = OrderSession::new(&store);
        session.add_quick_entry(entry("G1K/2000/RK-08/RKV45"));

        let before = session.rows().len();
        assert!(session.remove_last_row().is_some());
        assert_eq!(session.rows().len(), before - 1);

        session.clear();
        assert!(session.rows().is_empty());
        assert!(session.certificate_requests().is_empty());
    }
}
