use serde::Serialize;

/// Error payload returned by the API, matching the frontend contract:
/// `{"error": "..."}`.
#[derive(Debug, Serialize)]
pub struct ErrorJson {
    pub error: String,
}
