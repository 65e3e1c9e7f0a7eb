use serde::{Deserialize, Serialize};

/// JSON body returned by the seed endpoint.
///
/// ```json
/// { "success": true, "message": "Database seeded successfully" }
/// { "success": false, "error": "connection refused" }
/// ```
///
/// Absent fields are omitted rather than sent as `null`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeedResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SeedResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            error: None,
        }
    }

    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}
