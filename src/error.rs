use std::path::PathBuf;

/// Everything that can abort an update run.
///
/// All variants are terminal for the run: there are no retries, and `main`
/// turns any of them into a non-zero exit. A missing or corrupt previous
/// state file is deliberately *not* represented here; that case defaults to
/// an empty state instead of failing.
#[derive(thiserror::Error, Debug)]
pub enum UpdateError {
    #[error("{0} is not set (flag or environment variable)")]
    MissingCredential(&'static str),

    #[error("request to {provider} failed: {source}")]
    Network {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("unexpected status {status} from {provider} ({url})")]
    Status {
        provider: &'static str,
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("malformed response from {provider}: {reason}")]
    Parse {
        provider: &'static str,
        reason: String,
    },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
