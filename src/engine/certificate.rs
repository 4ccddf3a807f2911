// ==========================================
// Slangeprogram - pressure certificate builder
// ==========================================
// Computes the derived fields of a pressure-test
// certificate from a resolved assembly: working pressure
// from the hose catalog, burst (4x) and test (1.5x)
// pressures, the formatted specification string and the
// coupling summary. Missing data degrades to defaults;
// the builder never fails.
// ==========================================

use crate::domain::{Material, PressureCertificateRecord, ResolvedAssembly};
use crate::engine::assembler;
use chrono::NaiveDate;

/// Burst pressure is 4x the working pressure.
const BURST_FACTOR: f64 = 4.0;

/// Test pressure is 1.5x the working pressure.
const TEST_FACTOR: f64 = 1.5;

/// Certificate date format, "dd.mm.yyyy".
const DATE_FORMAT: &str = "%d.%m.%Y";

// ==========================================
// CertificateDetails - operator-entered metadata
// ==========================================
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateDetails {
    /// "Kunde"
    pub customer: String,
    /// "Kundens best. Nr."
    pub customer_order_no: String,
    /// "Hydra Pipe ordre nr."
    pub internal_order_no: String,
    /// "Kundes del nr."
    pub customer_part_no: String,
    /// Number of identical hoses covered by the certificate
    pub unit_count: u32,
    pub angle: String,
}

/// Build the certificate record for one resolved assembly.
///
/// The working pressure comes from the hose row's pressure
/// field and defaults to 0 when the hose is unresolved or the
/// field is missing. Both dates are stamped with `today`.
pub fn build_certificate(
    assembly: &ResolvedAssembly,
    material: Material,
    details: &CertificateDetails,
    today: NaiveDate,
) -> PressureCertificateRecord {
    let working = assembly
        .hose
        .and_then(|h| h.pressure_bar)
        .unwrap_or_default();
    let date = today.format(DATE_FORMAT).to_string();

    PressureCertificateRecord {
        customer: details.customer.clone(),
        customer_order_no: details.customer_order_no.clone(),
        internal_order_no: details.internal_order_no.clone(),
        customer_part_no: details.customer_part_no.clone(),
        specification: assembler::display_line(assembly, material, &details.angle),
        size_code: assembly.size_code.clone().unwrap_or_default(),
        length_mm: assembly.length_mm,
        coupling_summary: coupling_summary(assembly, material),
        produced_date: date.clone(),
        tested_date: date,
        working_pressure: format!("{:.1}", working),
        burst_pressure: format!("{:.1}", working * BURST_FACTOR),
        test_pressure: format!("{:.1}", working * TEST_FACTOR),
        unit_count: details.unit_count,
    }
}

/// Truncated coupling descriptions joined by " / "; just one
/// side when only one coupling resolved, empty when neither.
fn coupling_summary(assembly: &ResolvedAssembly, material: Material) -> String {
    let width = material.coupling_display_width();
    let parts: Vec<String> = [assembly.coupling_1, assembly.coupling_2]
        .iter()
        .flatten()
        .map(|row| assembler::truncate_chars(&row.description, width))
        .collect();
    parts.join(" / ")
}
