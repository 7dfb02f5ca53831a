use axum::extract::State;
use foodguess_core::domain::food_guess::{entities::GuessResponse, ports::FoodGuessService};

use crate::application::http::{
    food_guess::validators::GuessFoodValidator,
    server::{
        api_entities::{
            api_error::{ApiError, ApiErrorResponse, ValidateJson},
            response::Response,
        },
        app_state::AppState,
    },
};

#[utoipa::path(
    post,
    path = "/guess",
    tag = "food",
    summary = "Guess foods and nutrients from a photo",
    description = "Sends the photo to a multimodal model and returns 1-4 food items with portion and nutrient estimates",
    request_body = GuessFoodValidator,
    responses(
        (status = 200, body = GuessResponse),
        (status = 400, description = "Malformed request", body = ApiErrorResponse),
        (status = 413, description = "Image too large", body = ApiErrorResponse),
        (status = 500, description = "Inference credential missing", body = ApiErrorResponse),
        (status = 502, description = "Inference API failed or returned an unexpected format", body = ApiErrorResponse)
    ),
)]
pub async fn guess_food(
    State(state): State<AppState>,
    ValidateJson(payload): ValidateJson<GuessFoodValidator>,
) -> Result<Response<GuessResponse>, ApiError> {
    let result = state
        .service
        .guess_food(payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(result))
}
