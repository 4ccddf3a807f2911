// ==========================================
// Slangeprogram - categorical support lookups
// ==========================================
// Three independent mappings from size code (plus variant
// key / length) to a single support-table row: mounting
// hardware, pressure-test item and dot-marking item.
// The decision tables are explicit so each mapping can be
// tested without the row-assembly pipeline.
// All lookups return the first matching row or None;
// they never error.
// ==========================================

use crate::domain::PartRow;
use crate::engine::matcher::find_first;

// ==========================================
// Size groups
// ==========================================

const SMALL_SIZES: [&str; 4] = ["04", "06", "08", "10"];
const MID_SIZES: [&str; 2] = ["12", "16"];
const LARGE_SIZES: [&str; 3] = ["20", "24", "32"];

// ==========================================
// Mounting hardware ("MONT" table, row-index addressed)
// ==========================================

/// Mounting-table row index for a size and sheet-variant key.
///
/// # Rules (checked in order, key lowercased)
/// 1. size in {04,06,08,10} -> row 0
/// 2. key contains "316" but not "5": {12,16} -> row 1, {20,24,32} -> row 2
/// 3. key contains "5-316" -> row 3
/// 4. key contains "st": {12,16} -> row 1, {20,24,32} -> row 2
/// 5. otherwise none
pub fn mounting_row_index(size: &str, sheet_key: &str) -> Option<usize> {
    let size = size.trim();
    let key = sheet_key.to_lowercase();

    if SMALL_SIZES.contains(&size) {
        return Some(0);
    }

    if key.contains("316") && !key.contains('5') {
        if MID_SIZES.contains(&size) {
            return Some(1);
        }
        if LARGE_SIZES.contains(&size) {
            return Some(2);
        }
    }

    if key.contains("5-316") {
        return Some(3);
    }

    if key.contains("st") {
        if MID_SIZES.contains(&size) {
            return Some(1);
        }
        if LARGE_SIZES.contains(&size) {
            return Some(2);
        }
    }

    None
}

/// Mounting row for a resolved size; requires at least 4 table
/// rows since the rules address rows 0..=3 by index.
pub fn mounting_row<'a>(
    size: Option<&str>,
    sheet_key: &str,
    table: &'a [PartRow],
) -> Option<&'a PartRow> {
    let size = size?;
    if table.len() < 4 {
        return None;
    }
    mounting_row_index(size, sheet_key).and_then(|idx| table.get(idx))
}

// ==========================================
// Pressure-test item ("Trykktest" table)
// ==========================================

/// Hose lengths at or above this threshold use the long-hose
/// test products.
const LONG_HOSE_MM: i64 = 3000;

/// (size group, product below threshold, product at/above threshold)
const PRESSURE_TEST_BUCKETS: [(&[&str], i64, i64); 4] = [
    (&["04", "06", "08"], 90094, 90098),
    (&["10", "12", "16"], 90095, 90099),
    (&["20", "24"], 90096, 900101),
    (&["32"], 90097, 900102),
];

/// Pressure-test product number for a size and hose length.
pub fn pressure_test_product(size: &str, length_mm: i64) -> Option<i64> {
    let size = size.trim();
    PRESSURE_TEST_BUCKETS
        .iter()
        .find(|(sizes, _, _)| sizes.contains(&size))
        .map(|(_, short, long)| {
            if length_mm < LONG_HOSE_MM {
                *short
            } else {
                *long
            }
        })
}

pub fn pressure_test_row<'a>(
    size: Option<&str>,
    length_mm: i64,
    table: &'a [PartRow],
) -> Option<&'a PartRow> {
    let product_no = pressure_test_product(size?, length_mm)?;
    row_by_product_no(table, product_no)
}

// ==========================================
// Dot-marking item ("Prikling" table)
// ==========================================

/// (size group, marking product number)
const MARKING_BUCKETS: [(&[&str], i64); 3] = [
    (&["04", "06", "08", "10"], 90015),
    (&["12", "16"], 90016),
    (&["20", "24", "32"], 90017),
];

/// Dot-marking product number for a size.
pub fn marking_product(size: &str) -> Option<i64> {
    let size = size.trim();
    MARKING_BUCKETS
        .iter()
        .find(|(sizes, _)| sizes.contains(&size))
        .map(|(_, product)| *product)
}

pub fn marking_row<'a>(size: Option<&str>, table: &'a [PartRow]) -> Option<&'a PartRow> {
    let product_no = marking_product(size?)?;
    row_by_product_no(table, product_no)
}

/// Product-number column lookup shared by the keyed tables.
fn row_by_product_no(table: &[PartRow], product_no: i64) -> Option<&PartRow> {
    let wanted = product_no.to_string();
    find_first(table, |row| row.product_no.trim() == wanted)
}
