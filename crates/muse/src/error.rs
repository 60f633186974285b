use thiserror::Error;

/// Failures on the assisted path. None of these reach the caller of
/// [`crate::AssistedGenerator::generate`]; each one lands on the
/// deterministic fallback instead.
#[derive(Debug, Error)]
pub enum MuseError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error {code}: {message}")]
    Api { code: i64, message: String },

    #[error("response contained no text candidate")]
    EmptyResponse,

    #[error("could not extract a progression array from the response")]
    Unparseable,
}
