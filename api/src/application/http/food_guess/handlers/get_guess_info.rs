use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::http::server::api_entities::response::Response;

#[derive(Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct GuessInfoResponse {
    pub ok: bool,
    pub message: String,
}

#[utoipa::path(
    get,
    path = "/guess",
    tag = "food",
    summary = "Describe the guess endpoint",
    description = "Health and discovery helper pointing callers at the POST route",
    responses(
        (status = 200, body = GuessInfoResponse)
    ),
)]
pub async fn get_guess_info() -> Response<GuessInfoResponse> {
    Response::OK(GuessInfoResponse {
        ok: true,
        message: "Use POST /api/food/guess".to_string(),
    })
}
