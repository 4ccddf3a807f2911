// ==========================================
// Slangeprogram - CLI entry point
// ==========================================
// Quick-entry driver: loads the catalogs, reads one hose
// specification per stdin line and prints the accumulated
// order as CSV on stdout when input ends.
// ==========================================

use anyhow::{Context, Result};
use slangeprogram::config::{self, AppConfig};
use slangeprogram::importer::CatalogImporter;
use slangeprogram::session::{OrderSession, QuickEntry};
use slangeprogram::{export, logging};
use std::io::BufRead;
use std::path::PathBuf;

fn main() -> Result<()> {
    logging::init();

    tracing::info!("Slangeprogram {}", slangeprogram::VERSION);

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(config::default_config_path);
    let config = AppConfig::load_or_default(&config_path);

    let store = CatalogImporter::load_store(&config.main_catalog, &config.coupling_catalog)
        .context("kunne ikke laste katalogene")?;

    let mut session = OrderSession::new(&store);

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line.context("kunne ikke lese inndata")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let added = session.add_quick_entry(QuickEntry {
            line,
            material: config.material(),
            warehouse: config.warehouse(),
            unit_count: 1,
            pos_number: None,
            pressure_test: None,
        });
        tracing::info!(added, total = session.rows().len(), "slange lagt til");
    }

    export::write_order_csv(session.rows(), std::io::stdout().lock())
        .context("kunne ikke skrive ordren")?;

    Ok(())
}
