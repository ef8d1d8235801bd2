//! CLI command handlers. Each command is in its own file; they share `install`.

mod add;
mod add_hook;
mod add_style;
mod completions;
mod install;

pub use add::run_add;
pub use add_hook::run_add_hook;
pub use add_style::run_add_style;
pub use completions::run_completions;
pub use install::Workspace;
