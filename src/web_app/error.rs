// web_app/error.rs - Failure taxonomy for the outbound catalog request
//
// Every variant is the same "fetch failed" outcome to the page; the split
// only exists so the diagnostic line says what went wrong.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("endpoint answered with status {0}")]
    Status(u16),

    #[error("malformed payload: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_message() {
        let err = CatalogError::Status(503);
        assert_eq!(err.to_string(), "endpoint answered with status 503");
    }

    #[test]
    fn test_decode_from_serde_error() {
        let serde_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: CatalogError = serde_err.into();
        assert!(matches!(err, CatalogError::Decode(_)));
        assert!(err.to_string().starts_with("malformed payload"));
    }
}
