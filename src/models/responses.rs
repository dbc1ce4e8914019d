//! Response DTOs for the bank bridge API
//!
//! Fixed message bodies and the health probe payload.

use serde::{Deserialize, Serialize};

/// Body returned with every 500 response.
pub const MSG_INTERNAL_SERVER: &str = "{\"message\": \"Internal Server Error.\"}";

/// Body returned with a 204 from the remote endpoint.
pub const MSG_NO_RESULTS: &str = "{\"message\": \"No Results Found.\"}";

/// Generic `{"message": ...}` body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_bodies_are_message_json() {
        let internal: MessageResponse = serde_json::from_str(MSG_INTERNAL_SERVER).unwrap();
        assert_eq!(internal.message, "Internal Server Error.");

        let empty: MessageResponse = serde_json::from_str(MSG_NO_RESULTS).unwrap();
        assert_eq!(empty.message, "No Results Found.");
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy();
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }
}
