use foodguess_core::domain::food_guess::{GuessRequest, MIN_IMAGE_BASE64_LEN};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct GuessFoodValidator {
    /// Base64 photo, optionally prefixed with `data:image/<type>;base64,`.
    #[serde(rename = "imageBase64")]
    #[validate(length(
        min = MIN_IMAGE_BASE64_LEN,
        message = "imageBase64 must be at least 100 characters"
    ))]
    pub image_base64: String,

    /// Optional; when present it must be a string (`null` is rejected).
    #[serde(
        rename = "mealHint",
        default,
        deserialize_with = "deserialize_present_string"
    )]
    #[schema(example = "breakfast")]
    pub meal_hint: Option<String>,
}

// Only invoked when the key is present, so an explicit `null` fails as a non-string.
fn deserialize_present_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    String::deserialize(deserializer).map(Some)
}

impl From<GuessFoodValidator> for GuessRequest {
    fn from(payload: GuessFoodValidator) -> Self {
        GuessRequest::new(payload.image_base64, payload.meal_hint)
    }
}
