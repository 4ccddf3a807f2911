// ==========================================
// Slangeprogram - core library
// ==========================================
// Order entry engine for hydraulic hose assemblies:
// catalog lookup, row assembly, pressure certificates.
// The engine layer is pure logic over in-memory catalog
// data; file I/O lives in the importer and export layers.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and types
pub mod domain;

// Engine layer - parsing, matching, assembly rules
pub mod engine;

// Import layer - external catalog workbooks
pub mod importer;

// Configuration layer
pub mod config;

// Logging
pub mod logging;

// Session layer - accumulating order context
pub mod session;

// Export layer - order rows out
pub mod export;

// ==========================================
// Re-exports
// ==========================================

// Domain types
pub use domain::types::{Material, Quantity, Warehouse};

// Domain entities
pub use domain::{
    CatalogStore, CouplingRow, CouplingSheet, FerruleRef, HoseRow, OutputLineItem,
    ParsedSpecification, PartRow, PressureCertificateRecord, ResolvedAssembly,
};

// Engine
pub use engine::assembler::AssembleOptions;
pub use engine::certificate::CertificateDetails;
pub use engine::{assembler, certificate, lookup, matcher, parser, resolver};

// Session
pub use session::{CertificateRequest, OrderSession, QuickEntry};

// Importer
pub use importer::{ImportError, ImportResult};

/// Crate version, exposed for the CLI banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
