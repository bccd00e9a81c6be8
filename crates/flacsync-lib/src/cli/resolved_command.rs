use crate::cli::args::Command;
use crate::cli::params::{ListParams, MirrorParams};
use crate::config::{MirrorConfig, load_config};
use crate::error::FlacSyncError;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub enum ResolvedCommand {
    Mirror(MirrorParams),
    List(ListParams),
}

pub fn resolve_command(command: Command) -> Result<ResolvedCommand, FlacSyncError> {
    match command {
        Command::Mirror {
            config_path,
            catalog_path,
            base_url,
            root_dir,
        } => {
            let config = resolve_config(config_path, catalog_path, base_url, root_dir)?;
            Ok(ResolvedCommand::Mirror(MirrorParams { config }))
        }
        Command::List {
            config_path,
            catalog_path,
            base_url,
            root_dir,
        } => {
            let config = resolve_config(config_path, catalog_path, base_url, root_dir)?;
            Ok(ResolvedCommand::List(ListParams { config }))
        }
    }
}

/// CLI flags win over the config file, which wins over the built-in
/// defaults.
fn resolve_config(
    config_path: Option<String>,
    catalog_path: Option<String>,
    base_url: Option<String>,
    root_dir: Option<String>,
) -> Result<MirrorConfig, FlacSyncError> {
    let mut config = match config_path {
        Some(config_path) => load_config(&config_path)?,
        None => MirrorConfig::default(),
    };

    if let Some(catalog_path) = catalog_path {
        config.catalog_path = PathBuf::from(catalog_path);
    }
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(root_dir) = root_dir {
        config.root_dir = PathBuf::from(root_dir);
    }

    if config.base_url.trim().is_empty() {
        return Err(FlacSyncError::CliArgumentValidation {
            details: "No base URL provided. Configure base_url or pass --base-url.".to_string(),
        });
    }
    url::Url::parse(&config.base_url).map_err(|e| FlacSyncError::CliArgumentValidation {
        details: format!("Invalid base URL {}: {}", config.base_url, e),
    })?;

    while config.base_url.ends_with('/') {
        config.base_url.pop();
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_BASE_URL, DEFAULT_CATALOG_PATH};

    #[test]
    fn test_defaults_when_nothing_given() {
        let resolved = resolve_command(Command::Mirror {
            config_path: None,
            catalog_path: None,
            base_url: None,
            root_dir: None,
        })
        .unwrap();

        let ResolvedCommand::Mirror(params) = resolved else {
            panic!("Resolved command type mismatch");
        };
        assert_eq!(params.config.base_url, DEFAULT_BASE_URL);
        assert_eq!(params.config.catalog_path, PathBuf::from(DEFAULT_CATALOG_PATH));
        assert_eq!(params.config.root_dir, PathBuf::from("."));
    }

    #[test]
    fn test_cli_flags_override_defaults() {
        let resolved = resolve_command(Command::Mirror {
            config_path: None,
            catalog_path: Some("index.xml".to_string()),
            base_url: Some("https://mirror.example.org/files/".to_string()),
            root_dir: Some("/srv/music".to_string()),
        })
        .unwrap();

        let ResolvedCommand::Mirror(params) = resolved else {
            panic!("Resolved command type mismatch");
        };
        assert_eq!(params.config.catalog_path, PathBuf::from("index.xml"));
        // Trailing slash is normalized away so URL concatenation stays exact.
        assert_eq!(params.config.base_url, "https://mirror.example.org/files");
        assert_eq!(params.config.root_dir, PathBuf::from("/srv/music"));
    }

    #[test]
    fn test_config_file_overridden_by_flags() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("flacsync.toml");
        std::fs::write(
            &config_path,
            "base_url = \"https://files.example.org/a\"\ncatalog_path = \"from_file.xml\"\n",
        )
        .unwrap();

        let resolved = resolve_command(Command::List {
            config_path: Some(config_path.to_str().unwrap().to_string()),
            catalog_path: Some("from_flag.xml".to_string()),
            base_url: None,
            root_dir: None,
        })
        .unwrap();

        let ResolvedCommand::List(params) = resolved else {
            panic!("Resolved command type mismatch");
        };
        assert_eq!(params.config.base_url, "https://files.example.org/a");
        assert_eq!(params.config.catalog_path, PathBuf::from("from_flag.xml"));
        // Unset fields fall back to defaults.
        assert_eq!(params.config.root_dir, PathBuf::from("."));
    }

    #[test]
    fn test_invalid_base_url_rejected() {
        let result = resolve_command(Command::Mirror {
            config_path: None,
            catalog_path: None,
            base_url: Some("not a url".to_string()),
            root_dir: None,
        });

        assert!(matches!(
            result,
            Err(FlacSyncError::CliArgumentValidation { .. })
        ));
    }

    #[test]
    fn test_empty_base_url_rejected() {
        let result = resolve_command(Command::Mirror {
            config_path: None,
            catalog_path: None,
            base_url: Some("  ".to_string()),
            root_dir: None,
        });

        assert!(matches!(
            result,
            Err(FlacSyncError::CliArgumentValidation { .. })
        ));
    }
}
