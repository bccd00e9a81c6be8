use super::CatalogEntry;
use crate::config::MirrorConfig;
use crate::error::FlacSyncError;
use tracing::warn;

/// Suffix a record's name must carry to be part of the mirror. Case
/// sensitive: the index writes it lowercase.
const FLAC_SUFFIX: &str = ".flac";

/// Parsed catalog index, reduced to the records worth mirroring.
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    /// Reads and parses the index at `config.catalog_path`.
    ///
    /// An unreadable or unparseable index is fatal before any entry is
    /// processed.
    pub fn load(config: &MirrorConfig) -> Result<Self, FlacSyncError> {
        let xml = std::fs::read_to_string(&config.catalog_path).map_err(|e| {
            FlacSyncError::MalformedCatalog {
                path: config.catalog_path.clone(),
                reason: e.to_string(),
            }
        })?;

        Self::from_xml(&xml, config)
    }

    /// Parses an index document already in memory.
    ///
    /// Filtering happens here, in one pass over the root element's immediate
    /// children: `file` records whose `name` ends in `.flac` become entries;
    /// everything else is dropped. A record's digest comes from its first
    /// `md5` child element; a record without one yields an entry with no
    /// checksum.
    pub fn from_xml(xml: &str, config: &MirrorConfig) -> Result<Self, FlacSyncError> {
        let document =
            roxmltree::Document::parse(xml).map_err(|e| FlacSyncError::MalformedCatalog {
                path: config.catalog_path.clone(),
                reason: e.to_string(),
            })?;

        let mut entries = Vec::new();
        for record in document
            .root_element()
            .children()
            .filter(|node| node.is_element() && node.has_tag_name("file"))
        {
            let Some(name) = record.attribute("name") else {
                continue;
            };
            if !name.ends_with(FLAC_SUFFIX) {
                continue;
            }

            let checksum = record
                .children()
                .find(|child| child.is_element() && child.has_tag_name("md5"))
                .and_then(|child| child.text())
                .map(|text| text.trim().to_string())
                .filter(|text| !text.is_empty());

            match CatalogEntry::from_record(name, checksum, config) {
                Some(entry) => entries.push(entry),
                None => warn!(name, "Skipping record with malformed name"),
            }
        }

        Ok(Self { entries })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Single-pass, finite sequence of entries. Consumes the catalog:
    /// iterating again requires re-loading the index.
    pub fn into_entries(self) -> impl Iterator<Item = CatalogEntry> {
        self.entries.into_iter()
    }
}
