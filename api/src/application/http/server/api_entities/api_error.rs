use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use foodguess_core::domain::common::entities::app_errors::CoreError;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use thiserror::Error;
use utoipa::ToSchema;
use validator::{Validate, ValidationErrors};

/// JSON body returned for every failed request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ApiErrorResponse {
    pub error: String,
    /// Field-level failures, present when the model output failed validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub details: Option<serde_json::Value>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    InternalServerError(String),

    #[error("{0}")]
    BadGateway(String),

    #[error("{message}")]
    UnexpectedUpstreamFormat {
        message: String,
        details: serde_json::Value,
    },
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::BadGateway(_) | ApiError::UnexpectedUpstreamFormat { .. } => {
                StatusCode::BAD_GATEWAY
            }
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(_) | CoreError::ExternalServiceError(_) => {
                ApiError::BadRequest(error.to_string())
            }
            CoreError::PayloadTooLarge => ApiError::PayloadTooLarge(error.to_string()),
            CoreError::MissingApiKey => ApiError::InternalServerError(error.to_string()),
            CoreError::Upstream { .. } | CoreError::BadUpstreamFormat(_) => {
                ApiError::BadGateway(error.to_string())
            }
            CoreError::UnexpectedFormat { ref details } => ApiError::UnexpectedUpstreamFormat {
                message: error.to_string(),
                details: details.clone(),
            },
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            return CoreError::PayloadTooLarge.into();
        }

        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("{} is invalid ({})", field, error.code),
                })
            })
            .collect();
        messages.sort();

        CoreError::Validation(messages.join("; ")).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match self {
            ApiError::UnexpectedUpstreamFormat { message, details } => ApiErrorResponse {
                error: message,
                details: Some(details),
            },
            other => {
                let message = other.to_string();
                ApiErrorResponse {
                    error: if message.is_empty() {
                        "Bad request".to_string()
                    } else {
                        message
                    },
                    details: None,
                }
            }
        };

        (status, Json(body)).into_response()
    }
}

/// JSON extractor that runs `validator` rules after deserializing.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidateJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;

        Ok(ValidateJson(value))
    }
}
