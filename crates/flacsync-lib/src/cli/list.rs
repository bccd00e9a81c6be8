use crate::catalog::Catalog;
use crate::cli::params::ListParams;
use crate::error::FlacSyncError;
use tracing::info;

/// Prints the summary record of every catalog entry without downloading
/// anything.
pub async fn run_list(params: ListParams) -> Result<(), FlacSyncError> {
    let catalog = Catalog::load(&params.config)?;
    info!(
        entries = catalog.len(),
        catalog = %params.config.catalog_path.display(),
        "Catalog loaded"
    );

    for entry in catalog.into_entries() {
        println!("{}", serde_json::to_string_pretty(&entry.summary())?);
        println!();
    }

    Ok(())
}
