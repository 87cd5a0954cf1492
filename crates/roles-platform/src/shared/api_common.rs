//! Common API types

use serde::Serialize;
use utoipa::ToSchema;

/// Uniform response wrapper returned by every endpoint.
///
/// All three keys are always serialized; absent values go out as `null`.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope<T> {
    pub is_success: bool,
    pub message: Option<String>,
    pub result: Option<T>,
}

/// Payload type for envelopes that never carry a result
#[derive(Debug, Serialize, ToSchema)]
pub struct NoPayload {}

impl<T> Default for ResponseEnvelope<T> {
    fn default() -> Self {
        Self {
            is_success: false,
            message: None,
            result: None,
        }
    }
}

impl<T> ResponseEnvelope<T> {
    pub fn success(result: T) -> Self {
        Self {
            is_success: true,
            message: None,
            result: Some(result),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            is_success: false,
            message: Some(message.into()),
            result: None,
        }
    }
}

impl ResponseEnvelope<NoPayload> {
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            is_success: true,
            message: Some(message.into()),
            result: None,
        }
    }
}
