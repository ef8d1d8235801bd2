//! `kt add-hook <name>` – add a hook.

use anyhow::Result;
use kt_core::InstallPlan;

use super::install::{install, Workspace};

pub async fn run_add_hook(ws: &Workspace, name: &str) -> Result<()> {
    let plan = InstallPlan::hook(&ws.cfg, &ws.project_root, name)?;
    install(ws, &plan).await
}
