// ==========================================
// Slangeprogram - domain type definitions
// ==========================================
// Small closed vocabularies used across the engine:
// ferrule material, warehouse, line-item quantity.
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// Material (ferrule/coupling material choice)
// ==========================================
// Drives coupling-sheet preference, ferrule column
// selection and description truncation widths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Material {
    /// "stål" - steel fittings
    Steel,
    /// "syrefast" - acid-proof / AISI 316 stainless fittings
    Stainless,
}

impl Material {
    /// Classify a free-form material preference string.
    ///
    /// # Rules (checked in order, on the lowercased text)
    /// 1. contains "syre" or "316" -> Stainless
    /// 2. contains "stål", "stal" or "st" -> Steel
    /// 3. otherwise -> None
    ///
    /// Order matters: "syrefast" also contains "st".
    pub fn from_preference(pref: &str) -> Option<Material> {
        let p = pref.to_lowercase();
        if p.contains("syre") || p.contains("316") {
            Some(Material::Stainless)
        } else if p.contains("stål") || p.contains("stal") || p.contains("st") {
            Some(Material::Steel)
        } else {
            None
        }
    }

    /// Sheet-name marker used to break ties between candidate
    /// coupling sheets ("316" for stainless, "st" for steel).
    pub fn sheet_marker(self) -> &'static str {
        match self {
            Material::Steel => "st",
            Material::Stainless => "316",
        }
    }

    /// Sheet-variant key assumed when no coupling sheet resolved.
    pub fn default_sheet_key(self) -> &'static str {
        match self {
            Material::Steel => "(st)",
            Material::Stainless => "(316)",
        }
    }

    /// Max chars of a coupling description in display lines.
    /// Steel descriptions are cut harder to fit the order sheet.
    pub fn coupling_display_width(self) -> usize {
        match self {
            Material::Steel => 9,
            Material::Stainless => 15,
        }
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Material::Steel => write!(f, "stål"),
            Material::Stainless => write!(f, "syrefast"),
        }
    }
}

// ==========================================
// Warehouse ("Lager")
// ==========================================
// Fixed set of stock locations; the numeric code is the
// value written into every output row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Warehouse {
    Alesund,
    Lillestrom,
    Trondheim,
}

impl Warehouse {
    pub fn code(self) -> i64 {
        match self {
            Warehouse::Alesund => 1,
            Warehouse::Lillestrom => 3,
            Warehouse::Trondheim => 5,
        }
    }

    pub fn from_code(code: i64) -> Option<Warehouse> {
        match code {
            1 => Some(Warehouse::Alesund),
            3 => Some(Warehouse::Lillestrom),
            5 => Some(Warehouse::Trondheim),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Warehouse::Alesund => "Ålesund",
            Warehouse::Lillestrom => "Lillestrøm",
            Warehouse::Trondheim => "Trondheim",
        }
    }
}

impl fmt::Display for Warehouse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ==========================================
// Quantity ("Antall")
// ==========================================
// A line quantity is an integer count, a decimal measure
// (hose length in metres), or empty (separator lines).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    Int(i64),
    Dec(f64),
    Empty,
}

/// Snap-to-integer tolerance used when rescaling quantities.
const INT_TOLERANCE: f64 = 1e-9;

impl Quantity {
    /// Rescale by a unit count (multi-hose orders).
    ///
    /// # Rules
    /// - Empty stays empty.
    /// - Numeric values are multiplied; results within 1e-9 of a
    ///   whole number become Int, everything else is rounded to
    ///   3 decimals and stays Dec.
    pub fn scaled(self, multiplier: u32) -> Quantity {
        let value = match self {
            Quantity::Int(v) => v as f64,
            Quantity::Dec(v) => v,
            Quantity::Empty => return Quantity::Empty,
        };
        let num = value * multiplier as f64;
        if (num - num.round()).abs() < INT_TOLERANCE {
            Quantity::Int(num.round() as i64)
        } else {
            Quantity::Dec((num * 1000.0).round() / 1000.0)
        }
    }

    pub fn is_empty(self) -> bool {
        matches!(self, Quantity::Empty)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Int(v) => write!(f, "{}", v),
            // keep one decimal on whole measures ("2.0" not "2")
            Quantity::Dec(v) if v.fract() == 0.0 => write!(f, "{:.1}", v),
            Quantity::Dec(v) => write!(f, "{}", v),
            Quantity::Empty => Ok(()),
        }
    }
}

impl Serialize for Quantity {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Quantity::Int(v) => serializer.serialize_i64(*v),
            Quantity::Dec(v) => serializer.serialize_f64(*v),
            Quantity::Empty => serializer.serialize_str(""),
        }
    }
}
