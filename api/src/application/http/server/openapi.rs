use crate::application::http::food_guess::router::FoodGuessApiDoc;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "FoodGuess API"
    ),
    nest(
        (path = "/api/food", api = FoodGuessApiDoc),
    )
)]
pub struct ApiDoc;
