//! Install plans: where a component, hook or stylesheet comes from and where it goes.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::config::KtConfig;
use crate::install::{self, InstallError, Installed};
use crate::naming::{self, NameError};
use crate::remote::RemoteSource;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Component,
    Hook,
    Style,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ItemKind::Component => "component",
            ItemKind::Hook => "hook",
            ItemKind::Style => "stylesheet",
        };
        f.write_str(s)
    }
}

/// One download: remote path, local directory and file name, plus what to tell
/// the user afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub kind: ItemKind,
    /// Display name (`KtButton`, `useTheme.js`, `index.css`).
    pub label: String,
    pub remote_path: String,
    pub target_dir: PathBuf,
    pub file_name: String,
    pub follow_up: Option<String>,
}

/// Joins repository-relative pieces with `/`, ignoring stray separators.
fn join_remote(dir: &str, file: &str) -> String {
    let dir = dir.trim_matches('/');
    if dir.is_empty() {
        file.to_string()
    } else {
        format!("{}/{}", dir, file)
    }
}

/// Last `/`-separated piece of a repository path.
fn remote_file_name(path: &str) -> &str {
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or(path)
}

impl InstallPlan {
    /// `kt add <name>`.
    pub fn component(cfg: &KtConfig, project_root: &Path, name: &str) -> Result<Self, NameError> {
        let file_name = naming::component_file_name(name)?;
        let target = cfg.paths.components_target.trim_matches('/');
        Ok(Self {
            kind: ItemKind::Component,
            label: naming::pascal_case(name),
            remote_path: join_remote(&cfg.paths.components_source, &file_name),
            target_dir: project_root.join(target),
            file_name,
            follow_up: Some(format!(
                "Next: make sure 'tailwind.config.js' scans the './{}/**' path.",
                target
            )),
        })
    }

    /// `kt add-hook <name>`.
    pub fn hook(cfg: &KtConfig, project_root: &Path, name: &str) -> Result<Self, NameError> {
        let file_name = naming::hook_file_name(name)?;
        Ok(Self {
            kind: ItemKind::Hook,
            label: file_name.clone(),
            remote_path: join_remote(&cfg.paths.hooks_source, &file_name),
            target_dir: project_root.join(cfg.paths.hooks_target.trim_matches('/')),
            file_name,
            follow_up: None,
        })
    }

    /// `kt add-style`.
    pub fn style(cfg: &KtConfig, project_root: &Path) -> Self {
        let file_name = remote_file_name(&cfg.paths.style_source).to_string();
        Self {
            kind: ItemKind::Style,
            label: file_name.clone(),
            remote_path: cfg.paths.style_source.clone(),
            target_dir: project_root.join(cfg.paths.style_target.trim_matches('/')),
            follow_up: Some(format!(
                "Next: import '{}' from your entry file (e.g. src/main.js).",
                file_name
            )),
            file_name,
        }
    }

    pub fn target_path(&self) -> PathBuf {
        self.target_dir.join(&self.file_name)
    }

    pub async fn execute(&self, source: &RemoteSource) -> Result<Installed, InstallError> {
        install::install_file(source, &self.remote_path, &self.target_dir, &self.file_name).await
    }
}
