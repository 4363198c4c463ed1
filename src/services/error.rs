/// Error type for profile API calls
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a response
    Network(String),
    /// The server answered with a non-2xx status
    Status { url: String, status: u16 },
    /// The body could not be read or decoded
    Parse(String),
    /// The request body could not be built
    Encode(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ApiError::Network(e) => write!(f, "Network error: {}", e),
            ApiError::Status { url, status } => write!(f, "HTTP {} from {}", status, url),
            ApiError::Parse(e) => write!(f, "Parse error: {}", e),
            ApiError::Encode(e) => write!(f, "Encode error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ApiError::Status { url: "/about?user=alice".to_string(), status: 500 };
        assert_eq!(err.to_string(), "HTTP 500 from /about?user=alice");

        let err = ApiError::Parse("expected value at line 1".to_string());
        assert!(err.to_string().starts_with("Parse error"));
    }
}
