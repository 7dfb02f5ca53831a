use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    food_guess::entities::{GuessRequest, GuessResponse},
};

/// LLM Client trait for calling multimodal models
pub trait LLMClient: Send + Sync {
    /// Sends one prompt with one inline image and returns the model's raw text output.
    fn generate_with_image(
        &self,
        prompt: String,
        image_data_url: String,
    ) -> impl Future<Output = Result<String, CoreError>> + Send;
}

/// Service trait for the photo-to-nutrients flow
pub trait FoodGuessService: Send + Sync {
    fn guess_food(
        &self,
        request: GuessRequest,
    ) -> impl Future<Output = Result<GuessResponse, CoreError>> + Send;
}
