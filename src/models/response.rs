use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    pub message: String,

    /// Whether the form should keep its data and offer a resubmit.
    pub retryable: bool,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: String) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message,
            retryable: false,
        }
    }

    pub fn error(error: String, message: String, retryable: bool) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
            message,
            retryable,
        }
    }
}
