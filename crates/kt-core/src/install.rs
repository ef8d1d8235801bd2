//! Fetch-and-place: download one file and write it into the project.
//!
//! Nothing on disk is touched until the fetch has fully succeeded. The write
//! itself overwrites any existing file and is not atomic.

use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;

use crate::fetch::{self, FetchError};
use crate::remote::{RemoteError, RemoteSource};

/// How a failure is presented to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The remote file does not exist (HTTP 404).
    NotFound,
    /// Anything else: network, other HTTP status, local I/O.
    TransferOrSystem,
}

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("{url} was not found (HTTP 404)")]
    NotFound { url: Url },
    #[error("GET {url} returned HTTP {code}")]
    Http { url: Url, code: u32 },
    #[error("download of {url} failed")]
    Transfer {
        url: Url,
        #[source]
        source: curl::Error,
    },
    #[error(transparent)]
    Locate(#[from] RemoteError),
    #[error("{op} {}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("download task failed")]
    Join(#[from] tokio::task::JoinError),
}

impl From<FetchError> for InstallError {
    fn from(e: FetchError) -> Self {
        let not_found = e.is_not_found();
        match e {
            FetchError::Status { url, .. } if not_found => InstallError::NotFound { url },
            FetchError::Status { url, code } => InstallError::Http { url, code },
            FetchError::Transfer { url, source } => InstallError::Transfer { url, source },
        }
    }
}

impl InstallError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            InstallError::NotFound { .. } => ErrorKind::NotFound,
            _ => ErrorKind::TransferOrSystem,
        }
    }

    /// Follow-up line for the user-facing report, when there is something to suggest.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            InstallError::NotFound { .. } => Some(
                "The file does not exist in the source repository. Check the name and the repository path.",
            ),
            InstallError::Transfer { .. } => Some("Check your network connection and proxy settings."),
            InstallError::Io { .. } => Some("Check that the project directory is writable."),
            InstallError::Http { .. } | InstallError::Locate(_) | InstallError::Join(_) => None,
        }
    }
}

/// Result of a successful install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Installed {
    pub url: Url,
    pub path: PathBuf,
    /// True when `target_dir` did not exist and was created.
    pub created_dir: bool,
    pub bytes: usize,
}

/// Downloads `remote_relative_path` from `source` and writes it to
/// `target_dir/file_name`, creating `target_dir` and its parents if needed.
pub async fn install_file(
    source: &RemoteSource,
    remote_relative_path: &str,
    target_dir: &Path,
    file_name: &str,
) -> Result<Installed, InstallError> {
    let url = source.locate(remote_relative_path)?;
    tracing::info!(%url, target = %target_dir.display(), file_name, "installing");

    let body = tokio::task::spawn_blocking({
        let url = url.clone();
        move || fetch::fetch(&url)
    })
    .await?
    .map_err(|e| {
        tracing::warn!(error = ?e, "fetch failed");
        InstallError::from(e)
    })?;

    let created_dir = ensure_dir(target_dir).await?;

    let path = target_dir.join(file_name);
    tokio::fs::write(&path, &body)
        .await
        .map_err(|source| InstallError::Io {
            op: "write",
            path: path.clone(),
            source,
        })?;
    tracing::info!(path = %path.display(), bytes = body.len(), "installed");

    Ok(Installed {
        url,
        path,
        created_dir,
        bytes: body.len(),
    })
}

/// Creates `dir` and missing ancestors. Returns whether anything was created.
async fn ensure_dir(dir: &Path) -> Result<bool, InstallError> {
    if tokio::fs::metadata(dir).await.is_ok_and(|m| m.is_dir()) {
        return Ok(false);
    }
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| InstallError::Io {
            op: "create directory",
            path: dir.to_path_buf(),
            source,
        })?;
    tracing::debug!("created directory {}", dir.display());
    Ok(true)
}
