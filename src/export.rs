// ==========================================
// Slangeprogram - order export
// ==========================================
// Renders the accumulated output rows under the fixed
// header. The spreadsheet-template side (formatting,
// certificate sheets) lives outside the core; CSV is the
// core's own export format.
// ==========================================

use crate::domain::OutputLineItem;
use std::io::Write;
use std::path::Path;

/// Fixed header row of the exported order.
pub const OUTPUT_HEADER: [&str; 4] = ["Prod.no", "Beskrivelse", "Lager", "Antall"];

/// Write the order rows as CSV, header first.
pub fn write_order_csv<W: Write>(rows: &[OutputLineItem], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(OUTPUT_HEADER)?;
    for row in rows {
        let warehouse = row.warehouse.code().to_string();
        let quantity = row.quantity.to_string();
        csv_writer.write_record([
            row.product_no.as_str(),
            row.description.as_str(),
            warehouse.as_str(),
            quantity.as_str(),
        ])?;
    }
    csv_writer.flush()?;
    Ok(())
}

pub fn write_order_csv_file(
    rows: &[OutputLineItem],
    path: impl AsRef<Path>,
) -> Result<(), csv::Error> {
    let file = std::fs::File::create(path)?;
    write_order_csv(rows, file)
}
