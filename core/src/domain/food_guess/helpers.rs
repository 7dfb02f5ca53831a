use std::{borrow::Cow, sync::LazyLock};

use regex::Regex;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_guess::{entities::GuessResponse, value_objects::UPSTREAM_IMAGE_MIME},
};

static DATA_URL_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^data:image/\w+;base64,").expect("data url prefix pattern is valid")
});

/// Strips an existing `data:image/<type>;base64,` header and re-wraps the payload as jpeg.
pub fn to_jpeg_data_url(image_base64: &str) -> String {
    let payload = DATA_URL_PREFIX.replace(image_base64, "");

    format!("data:{};base64,{}", UPSTREAM_IMAGE_MIME, payload)
}

/// Parses the model's text output and validates it against the guess schema.
///
/// Non-JSON text is a hard [`CoreError::BadUpstreamFormat`]. JSON that does not
/// match the schema, structurally or by range, is rejected as a whole with
/// [`CoreError::UnexpectedFormat`] carrying the field errors.
pub fn parse_guess_response(text: &str) -> Result<GuessResponse, CoreError> {
    let value: serde_json::Value = serde_json::from_str(text).map_err(|e| {
        tracing::error!("Model output is not JSON: {}", e);
        CoreError::BadUpstreamFormat(e.to_string())
    })?;

    let response: GuessResponse = serde_json::from_value(value).map_err(|e| {
        tracing::warn!("Model output does not match the guess shape: {}", e);
        unexpected_format(&structure_errors(&e))
    })?;

    response.validate().map_err(|errors| {
        tracing::warn!("Model output failed range validation: {}", errors);
        unexpected_format(&errors)
    })?;

    Ok(response)
}

fn structure_errors(err: &serde_json::Error) -> ValidationErrors {
    let mut error = ValidationError::new("invalid_structure");
    error.message = Some(Cow::Owned(err.to_string()));

    let mut errors = ValidationErrors::new();
    errors.add("__all__", error);
    errors
}

fn unexpected_format(errors: &ValidationErrors) -> CoreError {
    CoreError::UnexpectedFormat {
        details: serde_json::to_value(errors).unwrap_or(serde_json::Value::Null),
    }
}
