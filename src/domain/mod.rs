// ==========================================
// Slangeprogram - domain layer
// ==========================================
// Entities and types only: no data access, no engine logic.
// ==========================================

pub mod catalog;
pub mod order;
pub mod types;

// Re-export core types
pub use catalog::{CatalogStore, CouplingRow, CouplingSheet, FerruleRef, HoseRow, PartRow};
pub use order::{OutputLineItem, ParsedSpecification, PressureCertificateRecord, ResolvedAssembly};
pub use types::{Material, Quantity, Warehouse};
