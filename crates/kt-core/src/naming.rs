//! File-name rules for components and hooks.

use thiserror::Error;

pub const COMPONENT_EXTENSION: &str = ".vue";
pub const HOOK_EXTENSION: &str = ".js";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NameError {
    #[error("name must not be empty")]
    Empty,
    #[error("name {0:?} must not contain a path separator")]
    Separator(String),
}

fn check(name: &str) -> Result<(), NameError> {
    if name.trim().is_empty() {
        return Err(NameError::Empty);
    }
    if name.contains(['/', '\\']) {
        return Err(NameError::Separator(name.to_string()));
    }
    Ok(())
}

/// Upper-cases the first character, leaving the rest as typed
/// (`ktButton` becomes `KtButton`, not `Ktbutton`).
pub fn pascal_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `button` → `Button.vue`.
pub fn component_file_name(name: &str) -> Result<String, NameError> {
    check(name)?;
    Ok(format!("{}{}", pascal_case(name), COMPONENT_EXTENSION))
}

/// `useTheme` → `useTheme.js`; a name already ending in `.js` is kept.
pub fn hook_file_name(name: &str) -> Result<String, NameError> {
    check(name)?;
    if name.ends_with(HOOK_EXTENSION) {
        Ok(name.to_string())
    } else {
        Ok(format!("{}{}", name, HOOK_EXTENSION))
    }
}
