// ============================================================================
// File: src/api/response.rs
// ----------------------------------------------------------------------------
// JSON response envelope shared by every API route.
// ============================================================================

use bytes::Bytes;
use http::header::{CONTENT_TYPE, HeaderValue};
use http::{Response, StatusCode};
use http_body_util::Full;
use log::error;
use serde::{Deserialize, Serialize};

use crate::mount::MountOutcome;

/// Body type used for every response
pub type ResponseBody = Full<Bytes>;

/// `{success, message, data?}` envelope
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Successful envelope carrying `data`
    pub fn ok<M: Into<String>>(message: M, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data: Some(data),
        }
    }

    /// Failed envelope without data
    pub fn failure<M: Into<String>>(message: M) -> Self {
        Self {
            success: false,
            message: message.into(),
            data: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Serialize into a `200 OK` JSON response
    pub fn into_response(self) -> Response<ResponseBody> {
        match serde_json::to_vec(&self) {
            Ok(body) => with_content_type(
                Response::new(Full::new(Bytes::from(body))),
                "application/json",
            ),
            Err(e) => {
                error!("Failed to serialize API response: {}", e);
                plain_text(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        }
    }
}

impl From<MountOutcome> for ApiResponse<()> {
    fn from(outcome: MountOutcome) -> Self {
        Self {
            success: outcome.success,
            message: outcome.message,
            data: None,
        }
    }
}

/// Plain text response with a trailing newline
pub fn plain_text(status: StatusCode, message: &str) -> Response<ResponseBody> {
    let mut response = with_content_type(
        Response::new(Full::new(Bytes::from(format!("{message}\n")))),
        "text/plain; charset=utf-8",
    );
    *response.status_mut() = status;
    response
}

pub(crate) fn with_content_type(
    mut response: Response<ResponseBody>,
    content_type: &'static str,
) -> Response<ResponseBody> {
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
    response
}
