//! Shared plan execution and reporting for the `add*` commands.

use anyhow::{Context, Result};
use kt_core::config::{self, KtConfig};
use kt_core::{InstallPlan, RemoteSource};
use std::path::{Path, PathBuf};

/// Everything a command needs: configuration, where files come from and
/// the project they go into. Built once per invocation.
#[derive(Debug)]
pub struct Workspace {
    pub cfg: KtConfig,
    pub source: RemoteSource,
    pub project_root: PathBuf,
}

impl Workspace {
    pub fn new(cfg: KtConfig, project_root: PathBuf) -> Result<Self> {
        let source = cfg.remote_source().context("build remote source")?;
        Ok(Self {
            cfg,
            source,
            project_root,
        })
    }

    /// Config from disk (or defaults), project root from the current directory.
    pub fn load() -> Result<Self> {
        let cfg = config::load()?;
        tracing::debug!("loaded config: {:?}", cfg);
        let project_root = std::env::current_dir().context("resolve current directory")?;
        Self::new(cfg, project_root)
    }

    fn relative<'a>(&self, path: &'a Path) -> &'a Path {
        path.strip_prefix(&self.project_root).unwrap_or(path)
    }
}

/// Runs `plan` and prints the outcome. Failures come back as errors so the
/// process exits non-zero.
pub(super) async fn install(ws: &Workspace, plan: &InstallPlan) -> Result<()> {
    let url = ws.source.locate(&plan.remote_path)?;
    println!(
        "\nDownloading {} {} from {} into {} ...",
        plan.kind,
        plan.label,
        url,
        ws.relative(&plan.target_path()).display()
    );

    let installed = plan
        .execute(&ws.source)
        .await
        .with_context(|| format!("could not download {} {}", plan.kind, plan.label))?;

    if installed.created_dir {
        println!("[Info] Created directory: {}", ws.relative(&plan.target_dir).display());
    }
    println!("\nAdded {}: {}", plan.kind, plan.label);
    println!(
        "   File: {} ({} bytes)",
        ws.relative(&installed.path).display(),
        installed.bytes
    );
    if let Some(follow_up) = &plan.follow_up {
        println!("\n{}", follow_up);
    }
    Ok(())
}
