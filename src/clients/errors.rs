//! Error types for the request executor.

use thiserror::Error;

/// Errors produced while fetching and parsing an upstream response body.
///
/// The executor distinguishes exactly two failures: the transport failed,
/// or the body was not JSON. It does not inspect the HTTP status: an
/// upstream error page with a JSON body parses successfully here and
/// fails later, at the accessor, as a shape mismatch.
///
/// # Example
///
/// ```rust,ignore
/// match client.send(&request).await {
///     Ok(body) => println!("body: {body}"),
///     Err(FetchError::Network(e)) => println!("transport failure: {e}"),
///     Err(FetchError::MalformedBody(e)) => println!("body was not JSON: {e}"),
/// }
/// ```
#[derive(Debug, Error)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    ///
    /// Malformed URLs from missing configuration also land here: reqwest
    /// rejects them when the request is issued.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body was not valid JSON.
    #[error("Malformed response body: {0}")]
    MalformedBody(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_body_error_message() {
        let parse_error = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
        let error = FetchError::MalformedBody(parse_error);
        assert!(error.to_string().starts_with("Malformed response body:"));
    }

    #[test]
    fn test_fetch_error_implements_std_error() {
        let parse_error = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let error = FetchError::MalformedBody(parse_error);
        let _: &dyn std::error::Error = &error;
    }
}
