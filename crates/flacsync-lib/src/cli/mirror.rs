use crate::catalog::{Catalog, CatalogEntry};
use crate::cli::params::MirrorParams;
use crate::download::{Downloader, FetchOutcome};
use crate::error::FlacSyncError;
use tracing::{info, warn};

/// One full sequential pass over the catalog: for each entry, print its
/// summary record, make sure its author directory exists, then fetch and
/// verify. Per-entry failures are reported and counted; the batch always
/// runs to the end.
pub async fn run_mirror(params: MirrorParams) -> Result<(), FlacSyncError> {
    let catalog = Catalog::load(&params.config)?;
    info!(
        entries = catalog.len(),
        catalog = %params.config.catalog_path.display(),
        "Catalog loaded"
    );

    let downloader = Downloader::new();

    let mut total = 0usize;
    let mut downloaded = 0usize;
    let mut skipped = 0usize;
    let mut mismatched = 0usize;
    let mut failed = 0usize;

    for entry in catalog.into_entries() {
        total += 1;
        println!("{}", serde_json::to_string_pretty(&entry.summary())?);

        match process_entry(&downloader, &entry).await {
            Ok(FetchOutcome::AlreadyValid) | Ok(FetchOutcome::AlreadyPresent) => skipped += 1,
            Ok(FetchOutcome::Verified) | Ok(FetchOutcome::Unverified) => downloaded += 1,
            Ok(FetchOutcome::Mismatch { expected, actual }) => {
                warn!(
                    item = %entry.remote_name,
                    expected,
                    actual,
                    "Digest mismatch after download, file left in place"
                );
                mismatched += 1;
            }
            Err(err) => {
                warn!(item = %entry.remote_name, "Failed to fetch: {err}");
                failed += 1;
            }
        }

        println!();
    }

    info!(
        total,
        downloaded, skipped, mismatched, failed, "Mirror pass finished"
    );

    if mismatched > 0 || failed > 0 {
        return Err(FlacSyncError::MirrorIncomplete {
            failed,
            mismatched,
            total,
        });
    }

    Ok(())
}

async fn process_entry(
    downloader: &Downloader,
    entry: &CatalogEntry,
) -> Result<FetchOutcome, FlacSyncError> {
    downloader.ensure_author_dir(entry).await?;
    downloader.fetch(entry).await
}
