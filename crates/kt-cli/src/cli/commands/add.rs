//! `kt add <name>` – add a component.

use anyhow::Result;
use kt_core::InstallPlan;

use super::install::{install, Workspace};

pub async fn run_add(ws: &Workspace, name: &str) -> Result<()> {
    let plan = InstallPlan::component(&ws.cfg, &ws.project_root, name)?;
    install(ws, &plan).await
}
