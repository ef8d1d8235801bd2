//! `kt add-style` – add the shared stylesheet.

use anyhow::Result;
use kt_core::InstallPlan;

use super::install::{install, Workspace};

pub async fn run_add_style(ws: &Workspace) -> Result<()> {
    let plan = InstallPlan::style(&ws.cfg, &ws.project_root);
    install(ws, &plan).await
}
