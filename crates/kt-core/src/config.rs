use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::remote::{RemoteError, RemoteSource};

/// Where each kind of file lives in the source repository and in the project.
///
/// Source paths are relative to the repository root at the configured branch;
/// target paths are relative to the project root (the current directory).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    pub components_source: String,
    pub components_target: String,
    pub hooks_source: String,
    pub hooks_target: String,
    /// Full path of the stylesheet in the source repository.
    pub style_source: String,
    pub style_target: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            components_source: "src/components".to_string(),
            components_target: "src/components/kt-ui".to_string(),
            hooks_source: "src/hook".to_string(),
            hooks_target: "src/hook".to_string(),
            style_source: "src/index.css".to_string(),
            style_target: "src".to_string(),
        }
    }
}

/// Configuration loaded from `~/.config/kt/config.toml`.
///
/// Every field is optional in the file; missing fields take the built-in
/// defaults, which point at the KtBase repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KtConfig {
    /// Host serving raw file content.
    pub host: String,
    pub owner: String,
    pub repo: String,
    /// Branch the files are fetched from. Content follows the branch tip.
    pub branch: String,
    pub paths: PathsConfig,
}

impl Default for KtConfig {
    fn default() -> Self {
        Self {
            host: "raw.githubusercontent.com".to_string(),
            owner: "xzjsyjl".to_string(),
            repo: "kt_base".to_string(),
            branch: "master".to_string(),
            paths: PathsConfig::default(),
        }
    }
}

impl KtConfig {
    /// Builds the remote locator base for this configuration.
    pub fn remote_source(&self) -> Result<RemoteSource, RemoteError> {
        RemoteSource::new(&self.host, &self.owner, &self.repo, &self.branch)
    }
}

/// `$XDG_CONFIG_HOME/kt/config.toml`. Only computes the path; nothing is created.
pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("kt")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Load configuration from disk, falling back to defaults when no file exists.
///
/// Unlike an install, loading never writes anything.
pub fn load() -> Result<KtConfig> {
    let path = config_path()?;
    load_from(&path)
}

pub fn load_from(path: &Path) -> Result<KtConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(KtConfig::default());
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config {}", path.display()))?;
    let cfg: KtConfig =
        toml::from_str(&data).with_context(|| format!("parse config {}", path.display()))?;
    tracing::debug!("loaded config from {}", path.display());
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_config_values() {
        let cfg = KtConfig::default();
        assert_eq!(cfg.host, "raw.githubusercontent.com");
        assert_eq!(cfg.owner, "xzjsyjl");
        assert_eq!(cfg.repo, "kt_base");
        assert_eq!(cfg.branch, "master");
        assert_eq!(cfg.paths.components_target, "src/components/kt-ui");
        assert_eq!(cfg.paths.style_source, "src/index.css");
    }

    #[test]
    fn config_toml_partial_override() {
        let toml = r#"
            owner = "someone"
            branch = "dev"

            [paths]
            hooks_target = "src/composables"
        "#;
        let cfg: KtConfig = toml::from_str(toml).unwrap();
        assert_eq!(cfg.owner, "someone");
        assert_eq!(cfg.branch, "dev");
        assert_eq!(cfg.repo, "kt_base");
        assert_eq!(cfg.paths.hooks_target, "src/composables");
        assert_eq!(cfg.paths.hooks_source, "src/hook");
    }

    #[test]
    fn load_from_missing_file_is_default_and_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("kt").join("config.toml");
        let cfg = load_from(&path).unwrap();
        assert_eq!(cfg, KtConfig::default());
        assert!(!path.exists());
        assert!(!dir.path().join("kt").exists());
    }

    #[test]
    fn load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"repo = \"forked_base\"\n").unwrap();
        f.flush().unwrap();
        let cfg = load_from(f.path()).unwrap();
        assert_eq!(cfg.repo, "forked_base");
        assert_eq!(cfg.owner, "xzjsyjl");
    }

    #[test]
    fn load_from_invalid_toml_fails() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"owner = [").unwrap();
        f.flush().unwrap();
        assert!(load_from(f.path()).is_err());
    }

    #[test]
    fn config_path_under_xdg_config_home() {
        let home = tempfile::tempdir().unwrap();
        std::env::set_var("XDG_CONFIG_HOME", home.path());
        let path = config_path().unwrap();
        assert_eq!(path, home.path().join("kt").join("config.toml"));
        assert!(!home.path().join("kt").exists());

        std::fs::create_dir_all(home.path().join("kt")).unwrap();
        std::fs::write(&path, "host = \"mirror.example.com\"\n").unwrap();
        let cfg = load().unwrap();
        assert_eq!(cfg.host, "mirror.example.com");
    }

    #[test]
    fn remote_source_from_defaults() {
        let source = KtConfig::default().remote_source().unwrap();
        assert_eq!(
            source.base().as_str(),
            "https://raw.githubusercontent.com/xzjsyjl/kt_base/master/"
        );
    }
}
