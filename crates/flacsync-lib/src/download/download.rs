use super::FetchOutcome;
use crate::catalog::CatalogEntry;
use crate::error::FlacSyncError;
use crate::verification::md5_hex;
use futures::StreamExt;
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

/// Fetch-and-verify routine for catalog entries.
///
/// Strictly sequential: one GET per entry, awaited to completion before the
/// caller moves on to the next entry.
pub struct Downloader {
    client: reqwest::Client,
}

impl Downloader {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Creates the entry's author directory if it is missing. An existing
    /// directory is reported, not an error.
    pub async fn ensure_author_dir(&self, entry: &CatalogEntry) -> Result<(), FlacSyncError> {
        if entry.local_author_dir.exists() {
            debug!(author = %entry.author, "Author directory already exists");
            return Ok(());
        }

        info!(
            author = %entry.author,
            dir = %entry.local_author_dir.display(),
            "Creating author directory"
        );
        tokio::fs::create_dir_all(&entry.local_author_dir)
            .await
            .map_err(|e| FlacSyncError::DirectoryCreation {
                path: entry.local_author_dir.clone(),
                reason: e.to_string(),
            })
    }

    /// Whether the entry's local file exists and matches its declared digest
    /// (compared case-insensitively).
    ///
    /// An entry without a digest is treated as valid once the file is
    /// present: there is nothing to verify against, and re-downloading it on
    /// every run would not increase confidence in the content.
    pub async fn is_valid(&self, entry: &CatalogEntry) -> Result<bool, FlacSyncError> {
        if !entry.local_item_path.exists() {
            return Ok(false);
        }

        match entry.checksum.as_deref() {
            None => Ok(true),
            Some(expected) => {
                let actual = md5_hex(&entry.local_item_path).await?;
                Ok(actual.eq_ignore_ascii_case(expected))
            }
        }
    }

    /// Ensures the entry's file is present and verified, downloading it when
    /// missing or corrupt. Calling this on an already-valid entry performs no
    /// network action. A digest mismatch after the transfer is an outcome,
    /// not an error; the mismatched file stays on disk.
    pub async fn fetch(&self, entry: &CatalogEntry) -> Result<FetchOutcome, FlacSyncError> {
        if self.is_valid(entry).await? {
            info!(item = %entry.remote_name, "Already downloaded, skipping");
            return Ok(match entry.checksum {
                Some(_) => FetchOutcome::AlreadyValid,
                None => FetchOutcome::AlreadyPresent,
            });
        }

        info!(url = %entry.download_url, "Downloading");
        let response = self
            .client
            .get(&entry.download_url)
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| FlacSyncError::Transfer {
                url: entry.download_url.clone(),
                reason: e.to_string(),
            })?;

        // Stream the body to disk, overwriting whatever was there.
        let file = tokio::fs::File::create(&entry.local_item_path).await?;
        let mut writer = tokio::io::BufWriter::new(file);
        let mut body = response.bytes_stream();

        while let Some(chunk) = body.next().await {
            let chunk = chunk.map_err(|e| FlacSyncError::Transfer {
                url: entry.download_url.clone(),
                reason: e.to_string(),
            })?;
            writer.write_all(&chunk).await?;
        }
        writer.flush().await?;

        match entry.checksum.as_deref() {
            None => {
                info!(item = %entry.remote_name, "Downloaded (no digest in index, not verified)");
                Ok(FetchOutcome::Unverified)
            }
            Some(expected) => {
                let actual = md5_hex(&entry.local_item_path).await?;
                if actual.eq_ignore_ascii_case(expected) {
                    info!(item = %entry.remote_name, "Downloaded and verified");
                    Ok(FetchOutcome::Verified)
                } else {
                    Ok(FetchOutcome::Mismatch {
                        expected: expected.to_ascii_lowercase(),
                        actual,
                    })
                }
            }
        }
    }
}

impl Default for Downloader {
    fn default() -> Self {
        Self::new()
    }
}
