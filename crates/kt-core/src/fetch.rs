//! Single HTTP GET of a raw file.
//!
//! Uses the curl crate (libcurl). Redirects are followed; there is no timeout
//! and no retry, so a call returns when the server answers or the transfer fails.

use std::time::Instant;
use thiserror::Error;
use url::Url;

const USER_AGENT: &str = concat!("kt/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("GET {url} returned HTTP {code}")]
    Status { url: Url, code: u32 },
    /// No usable answer: DNS, connect, TLS or read failure.
    #[error("GET {url} failed")]
    Transfer {
        url: Url,
        #[source]
        source: curl::Error,
    },
}

impl FetchError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, FetchError::Status { code: 404, .. })
    }
}

/// Downloads `url` and returns the full response body.
///
/// Runs in the current thread; call from `spawn_blocking` if used from async code.
pub fn fetch(url: &Url) -> Result<Vec<u8>, FetchError> {
    let transfer_err = |source: curl::Error| FetchError::Transfer {
        url: url.clone(),
        source,
    };

    let started = Instant::now();
    let mut body: Vec<u8> = Vec::new();

    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str()).map_err(transfer_err)?;
    easy.follow_location(true).map_err(transfer_err)?;
    easy.useragent(USER_AGENT).map_err(transfer_err)?;

    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(transfer_err)?;
        transfer.perform().map_err(transfer_err)?;
    }

    let code = easy.response_code().map_err(transfer_err)?;
    tracing::debug!(
        %url,
        code,
        bytes = body.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "GET finished"
    );
    if !(200..300).contains(&code) {
        return Err(FetchError::Status {
            url: url.clone(),
            code,
        });
    }
    Ok(body)
}
