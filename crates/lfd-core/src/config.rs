use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Global configuration loaded from `~/.config/lfd/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LfdConfig {
    /// Platform CLI binary used for list-functions / get-function.
    pub aws_cli: String,
    /// Named credentials profile (`--profile`). None = ambient default.
    #[serde(default)]
    pub profile: Option<String>,
    /// Region (`--region`). None = ambient default.
    #[serde(default)]
    pub region: Option<String>,
    /// Directory artifacts are written to. None = current working directory.
    #[serde(default)]
    pub output_dir: Option<PathBuf>,
    /// HTTP connect timeout in seconds.
    pub connect_timeout_secs: u64,
    /// Whole-transfer timeout in seconds.
    pub transfer_timeout_secs: u64,
    /// Optional receive-speed cap in bytes per second (None = no cap).
    #[serde(default)]
    pub max_bytes_per_sec: Option<u64>,
}

impl Default for LfdConfig {
    fn default() -> Self {
        Self {
            aws_cli: "aws".to_string(),
            profile: None,
            region: None,
            output_dir: None,
            connect_timeout_secs: 30,
            transfer_timeout_secs: 3600,
            max_bytes_per_sec: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("lfd")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LfdConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] but against an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<LfdConfig> {
    if !path.exists() {
        let default_cfg = LfdConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("failed to write default config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read config: {}", path.display()))?;
    let cfg: LfdConfig =
        toml::from_str(&data).with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_values() {
        let cfg = LfdConfig::default();
        assert_eq!(cfg.aws_cli, "aws");
        assert!(cfg.profile.is_none());
        assert!(cfg.region.is_none());
        assert!(cfg.output_dir.is_none());
        assert_eq!(cfg.connect_timeout_secs, 30);
        assert_eq!(cfg.transfer_timeout_secs, 3600);
    }

    #[test]
    fn config_toml_roundtrip() {
        let cfg = LfdConfig::default();
        let toml = toml::to_string_pretty(&cfg).unwrap();
        let parsed: LfdConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed, cfg);
    }

    #[test]
    fn config_toml_custom_values() {
        let toml = r#"
            aws_cli = "/usr/local/bin/aws"
            profile = "prod"
            region = "eu-west-1"
            output_dir = "/srv/artifacts"
            connect_timeout_secs = 5
            transfer_timeout_secs = 600
            max_bytes_per_sec = 1_000_000
        "#;
        let cfg: LfdConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.aws_cli, "/usr/local/bin/aws");
        assert_eq!(cfg.profile.as_deref(), Some("prod"));
        assert_eq!(cfg.region.as_deref(), Some("eu-west-1"));
        assert_eq!(cfg.output_dir, Some(PathBuf::from("/srv/artifacts")));
        assert_eq!(cfg.connect_timeout_secs, 5);
        assert_eq!(cfg.transfer_timeout_secs, 600);
        assert_eq!(cfg.max_bytes_per_sec, Some(1_000_000));
    }

    #[test]
    fn load_or_init_writes_default_then_reads_it_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let first = load_or_init_at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(first, LfdConfig::default());

        std::fs::write(
            &path,
            "aws_cli = \"aws2\"\nconnect_timeout_secs = 1\ntransfer_timeout_secs = 2\n",
        )
        .unwrap();
        let second = load_or_init_at(&path).unwrap();
        assert_eq!(second.aws_cli, "aws2");
        assert_eq!(second.connect_timeout_secs, 1);
        assert!(second.profile.is_none());
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "connect_timeout_secs = \"soon\"").unwrap();
        assert!(load_or_init_at(&path).is_err());
    }
}
