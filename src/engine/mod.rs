// ==========================================
// Slangeprogram - engine layer
// ==========================================
// Pure business rules over in-memory catalog data.
// No state, no side effects, no I/O.
// ==========================================

pub mod assembler;
pub mod certificate;
pub mod lookup;
pub mod matcher;
pub mod parser;
pub mod resolver;

pub use assembler::{assemble, AssembleOptions};
pub use certificate::{build_certificate, CertificateDetails};
pub use parser::parse;
pub use resolver::resolve;
