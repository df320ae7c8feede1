use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HTTPErrorResponse {
    pub success: bool,
    pub message: &'static str,
}
