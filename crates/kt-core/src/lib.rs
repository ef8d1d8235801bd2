pub mod config;
pub mod logging;

pub mod fetch;
pub mod install;
pub mod naming;
pub mod plan;
pub mod remote;

pub use install::{install_file, ErrorKind, InstallError, Installed};
pub use plan::{InstallPlan, ItemKind};
pub use remote::RemoteSource;
