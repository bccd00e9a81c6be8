use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_BASE_URL: &str = "https://archive.org/download/MusopenCollectionAsFlac";
pub const DEFAULT_CATALOG_PATH: &str = "MusopenCollectionAsFlac_files.xml";

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields, default)]
pub struct MirrorConfig {
    /// Base URL the remote collection is served under.
    pub base_url: String,
    /// Path of the local XML file index describing the collection.
    pub catalog_path: PathBuf,
    /// Directory the per-author subdirectories are created in.
    pub root_dir: PathBuf,
}

impl Default for MirrorConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            catalog_path: PathBuf::from(DEFAULT_CATALOG_PATH),
            root_dir: PathBuf::from("."),
        }
    }
}
