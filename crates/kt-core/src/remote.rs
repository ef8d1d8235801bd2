//! Remote locator construction.
//!
//! A locator is the base `https://<host>/<owner>/<repo>/<branch>/` joined with
//! a repository-relative path. Every piece goes through `url::Url` path segment
//! APIs so separators and escaping are handled by the URL library.

use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum RemoteError {
    #[error("invalid remote base URL: {0}")]
    InvalidBase(#[from] url::ParseError),
    #[error("remote base URL cannot carry a path: {0}")]
    NotABase(String),
    #[error("remote path is empty")]
    EmptyPath,
    #[error("remote path {0:?} contains a `.` or `..` segment")]
    DotSegment(String),
}

/// Base URL of the branch being fetched from. Always ends with `/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteSource {
    base: Url,
}

impl RemoteSource {
    /// Base for a raw-content host laid out as `<owner>/<repo>/<branch>`.
    pub fn new(host: &str, owner: &str, repo: &str, branch: &str) -> Result<Self, RemoteError> {
        let mut base = Url::parse(&format!("https://{}/", host))?;
        base.path_segments_mut()
            .map_err(|_| RemoteError::NotABase(host.to_string()))?
            .pop_if_empty()
            .extend([owner, repo, branch])
            .push("");
        Ok(Self { base })
    }

    /// Uses `base` as-is (a trailing `/` is added when missing).
    pub fn from_base_url(base: &str) -> Result<Self, RemoteError> {
        let mut base = Url::parse(base)?;
        if base.cannot_be_a_base() {
            return Err(RemoteError::NotABase(base.to_string()));
        }
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Absolute URL of `relative` under the base. Empty segments are skipped,
    /// so `src//hook/` and `src/hook` address the same location.
    pub fn locate(&self, relative: &str) -> Result<Url, RemoteError> {
        let segments: Vec<&str> = relative.split('/').filter(|s| !s.is_empty()).collect();
        if segments.is_empty() {
            return Err(RemoteError::EmptyPath);
        }
        if segments.iter().any(|s| *s == "." || *s == "..") {
            return Err(RemoteError::DotSegment(relative.to_string()));
        }

        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| RemoteError::NotABase(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}
