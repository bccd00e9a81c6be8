use crate::config::MirrorConfig;
use serde::Serialize;
use std::path::PathBuf;

/// One downloadable item from the catalog index.
///
/// All fields are derived once from the source record and the runtime
/// configuration; an entry is never mutated after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// The remote collection's path-like identifier, `<author>/<item>`.
    pub remote_name: String,
    /// First segment of `remote_name`.
    pub author: String,
    /// Second segment of `remote_name`.
    pub item_name: String,
    /// Lowercase-hex MD5 declared by the index. Absent means the item cannot
    /// be verified.
    pub checksum: Option<String>,
    /// Complete download URL, `<base_url>/<remote_name>`.
    pub download_url: String,
    /// `<root_dir>/<author>`.
    pub local_author_dir: PathBuf,
    /// `<root_dir>/<author>/<item_name>`.
    pub local_item_path: PathBuf,
}

impl CatalogEntry {
    /// Derives an entry from a record's `name` attribute and optional digest.
    ///
    /// Returns `None` unless the name splits into exactly two non-empty
    /// segments.
    pub(crate) fn from_record(
        name: &str,
        checksum: Option<String>,
        config: &MirrorConfig,
    ) -> Option<Self> {
        let segments: Vec<&str> = name.split('/').collect();
        let (author, item_name) = match segments.as_slice() {
            [author, item] if !author.is_empty() && !item.is_empty() => (*author, *item),
            _ => return None,
        };

        let local_author_dir = config.root_dir.join(author);
        let local_item_path = local_author_dir.join(item_name);
        let download_url = format!("{}/{}", config.base_url.trim_end_matches('/'), name);

        Some(Self {
            remote_name: name.to_string(),
            author: author.to_string(),
            item_name: item_name.to_string(),
            checksum,
            download_url,
            local_author_dir,
            local_item_path,
        })
    }

    /// Machine-parseable record printed before the entry is processed.
    pub fn summary(&self) -> EntrySummary<'_> {
        EntrySummary {
            author: &self.author,
            item: &self.item_name,
            md5: self.checksum.as_deref(),
            download_url: &self.download_url,
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct EntrySummary<'a> {
    pub author: &'a str,
    pub item: &'a str,
    pub md5: Option<&'a str>,
    pub download_url: &'a str,
}
