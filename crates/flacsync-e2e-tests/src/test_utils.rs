use eyre::Result;
use flacsync_lib::config::MirrorConfig;
use md5::{Digest, Md5};
use std::path::Path;

pub struct FixtureRecord<'a> {
    pub name: &'a str,
    pub md5: Option<String>,
}

impl<'a> FixtureRecord<'a> {
    pub fn with_content(name: &'a str, content: &[u8]) -> Self {
        Self {
            name,
            md5: Some(md5_of(content)),
        }
    }

    pub fn without_digest(name: &'a str) -> Self {
        Self { name, md5: None }
    }
}

pub fn md5_of(bytes: &[u8]) -> String {
    hex::encode(Md5::digest(bytes))
}

/// Renders an archive.org-style file index for the given records.
pub fn catalog_xml(records: &[FixtureRecord]) -> String {
    let mut xml = String::from("<files>\n");
    for record in records {
        xml.push_str(&format!(
            "  <file name=\"{}\" source=\"original\">\n",
            record.name
        ));
        if let Some(md5) = &record.md5 {
            xml.push_str(&format!("    <md5>{md5}</md5>\n"));
        }
        xml.push_str("    <format>Flac</format>\n");
        xml.push_str("  </file>\n");
    }
    xml.push_str("</files>\n");
    xml
}

/// Config pointing at a temp directory and a mock server.
pub fn test_config(root: &Path, base_url: &str) -> MirrorConfig {
    MirrorConfig {
        base_url: base_url.to_string(),
        catalog_path: root.join("collection_files.xml"),
        root_dir: root.to_path_buf(),
    }
}

pub fn write_catalog(config: &MirrorConfig, records: &[FixtureRecord]) -> Result<()> {
    std::fs::write(&config.catalog_path, catalog_xml(records))?;
    Ok(())
}
