//! HTTP adapter error types.

/// Errors raised while building the fetcher.
#[derive(Debug, thiserror::Error)]
pub enum HttpAdapterError {
    /// The base URL or the services URL could not be parsed.
    #[error("invalid services url")]
    InvalidUrl(#[from] url::ParseError),

    /// The reqwest client could not be built.
    #[error("failed to build HTTP client")]
    Client(#[from] reqwest::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_invalid_url_error() {
        let err: HttpAdapterError = url::Url::parse("not a url").unwrap_err().into();
        assert_eq!(err.to_string(), "invalid services url");
    }
}
