use super::handlers::{
    get_guess_info::{__path_get_guess_info, get_guess_info},
    guess_food::{__path_guess_food, guess_food},
};
use crate::application::http::server::app_state::AppState;
use axum::{Router, routing::get};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(paths(get_guess_info, guess_food))]
pub struct FoodGuessApiDoc;

pub fn food_guess_routes(state: AppState) -> Router<AppState> {
    Router::new().route(
        &format!("{}/api/food/guess", state.args.server.root_path),
        get(get_guess_info).post(guess_food),
    )
}
